//! Holiday records and interval merging.
//!
//! The data source flags individual days; feeds publish whole holiday spans.
//! `merge_holiday_spans` bridges the two by collapsing an unordered batch of
//! per-day records into the minimal set of contiguous date ranges per name.

pub mod api;

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{FeedError, FeedResult};

/// One calendar day flagged as a holiday by the data source.
///
/// Several records may share a name across non-contiguous spans, e.g. a
/// holiday observed around two separate weekends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayDay {
    pub name: String,
    pub date: NaiveDate,
}

/// A maximal run of consecutive holiday days sharing one name.
///
/// Both boundaries are inclusive. Spans produced by the merger never overlap
/// or touch for the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySpan {
    name: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl HolidaySpan {
    /// Creates a span, enforcing `start <= end`.
    ///
    /// ## Errors
    /// Returns an invariant violation for an inverted range; that indicates
    /// a defect in the merge scan, not bad external data.
    pub fn new(name: String, start: NaiveDate, end: NaiveDate) -> FeedResult<Self> {
        if start > end {
            return Err(FeedError::InvariantViolation(
                "holiday span starts after it ends",
            ));
        }
        Ok(Self { name, start, end })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive containment on both boundaries.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Collapses per-day holiday records into contiguous spans.
///
/// Records are partitioned by name and each partition's dates are sorted and
/// deduplicated, then scanned once: a span closes whenever the next date is
/// not exactly one day after the previous. A single-date partition yields a
/// span with `start == end`. Records with a blank name are skipped. Output
/// order is deterministic for a fixed input: by name, then chronological.
///
/// ## Errors
/// Propagates span-construction invariant violations.
pub fn merge_holiday_spans(
    records: impl IntoIterator<Item = HolidayDay>,
) -> FeedResult<Vec<HolidaySpan>> {
    let mut by_name: BTreeMap<String, Vec<NaiveDate>> = BTreeMap::new();
    for record in records {
        if record.name.trim().is_empty() {
            tracing::debug!(date = %record.date, "Skipping holiday record without a name");
            continue;
        }
        by_name.entry(record.name).or_default().push(record.date);
    }

    let mut spans = Vec::new();
    for (name, mut dates) in by_name {
        dates.sort_unstable();
        dates.dedup();

        let mut dates = dates.into_iter();
        let Some(first) = dates.next() else {
            continue;
        };
        let mut start = first;
        let mut prev = first;

        for date in dates {
            if prev.succ_opt() != Some(date) {
                spans.push(HolidaySpan::new(name.clone(), start, prev)?);
                start = date;
            }
            prev = date;
        }
        spans.push(HolidaySpan::new(name, start, prev)?);
    }

    Ok(spans)
}
