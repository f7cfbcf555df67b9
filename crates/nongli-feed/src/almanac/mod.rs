//! Per-day annotation bundles from the external calendar-computation
//! provider.
//!
//! Computing lunar dates, festivals, and solar terms is not this crate's
//! job; it consumes them through the [`AlmanacSource`] boundary.

pub mod dataset;

use chrono::NaiveDate;
use serde::Deserialize;

/// One day's full annotation bundle.
#[derive(Debug, Clone, Deserialize)]
pub struct AlmanacDay {
    pub date: NaiveDate,
    /// Lunar date label, e.g. "冬月二十".
    pub lunar_label: String,
    #[serde(default)]
    pub solar_festivals: Vec<String>,
    #[serde(default)]
    pub solar_other_festivals: Vec<String>,
    #[serde(default)]
    pub lunar_festivals: Vec<String>,
    #[serde(default)]
    pub lunar_other_festivals: Vec<String>,
    /// Solar term (jieqi) starting on this day, if any.
    #[serde(default)]
    pub solar_term: Option<String>,
}

/// Source of per-day almanac bundles, keyed by calendar month.
///
/// An implementation returns every day of a known month in ascending order,
/// or `None` for a month it has no data for; the planner treats a missing
/// month as contributing zero days.
pub trait AlmanacSource {
    fn month(&self, year: i32, month: u32) -> Option<&[AlmanacDay]>;
}
