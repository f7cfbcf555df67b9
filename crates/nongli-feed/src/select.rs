//! Label selection for one day's annotation bundle.

use nongli_core::types::CategoryToggles;

use crate::almanac::AlmanacDay;

/// Returns the labels a day emits, in the fixed category order: lunar date,
/// solar festivals, solar other festivals, lunar festivals, lunar other
/// festivals, solar term.
///
/// The categories form an ordered table so adding one is a data change, not
/// new control flow. Every label is whitespace-normalized; labels that are
/// empty after normalization are dropped. Labels are not deduplicated across
/// categories.
#[must_use]
pub fn select_labels(day: &AlmanacDay, toggles: CategoryToggles) -> Vec<String> {
    let rows: [(bool, Vec<&str>); 6] = [
        (toggles.lunar, vec![day.lunar_label.as_str()]),
        (toggles.solar_festivals, as_strs(&day.solar_festivals)),
        (
            toggles.solar_other_festivals,
            as_strs(&day.solar_other_festivals),
        ),
        (toggles.lunar_festivals, as_strs(&day.lunar_festivals)),
        (
            toggles.lunar_other_festivals,
            as_strs(&day.lunar_other_festivals),
        ),
        (
            toggles.solar_terms,
            day.solar_term.as_deref().into_iter().collect(),
        ),
    ];

    rows.into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, labels)| labels)
        .filter_map(normalize)
        .collect()
}

fn as_strs(labels: &[String]) -> Vec<&str> {
    labels.iter().map(String::as_str).collect()
}

/// Collapses internal whitespace runs to single spaces and trims the edges;
/// a label that comes out empty is dropped.
fn normalize(label: &str) -> Option<String> {
    let cleaned = label.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() { None } else { Some(cleaned) }
}
