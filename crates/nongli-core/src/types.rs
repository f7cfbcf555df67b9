use serde::Deserialize;

/// Which annotation categories a feed emits as single-day events.
///
/// Exactly six independent switches. The emission order across categories is
/// fixed by the label selector, not by this type.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "The switches are independent toggles, not a state machine"
)]
pub struct CategoryToggles {
    /// The day's lunar date label (e.g. "冬月二十").
    #[serde(default)]
    pub lunar: bool,
    /// Gregorian-calendar festivals.
    #[serde(default)]
    pub solar_festivals: bool,
    /// Secondary Gregorian-calendar observances.
    #[serde(default)]
    pub solar_other_festivals: bool,
    /// Lunar-calendar festivals.
    #[serde(default)]
    pub lunar_festivals: bool,
    /// Secondary lunar-calendar observances.
    #[serde(default)]
    pub lunar_other_festivals: bool,
    /// Solar terms (jieqi).
    #[serde(default)]
    pub solar_terms: bool,
}

impl CategoryToggles {
    /// Toggles with every category enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            lunar: true,
            solar_festivals: true,
            solar_other_festivals: true,
            lunar_festivals: true,
            lunar_other_festivals: true,
            solar_terms: true,
        }
    }
}
