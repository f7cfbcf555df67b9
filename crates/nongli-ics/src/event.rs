//! Calendar event descriptors produced by the planner.

use chrono::NaiveDate;
use uuid::Uuid;

/// Namespace for feed event identifiers (UUID v5).
const EVENT_UID_NAMESPACE: Uuid = uuid::uuid!("9d1c9b58-52c6-4f2a-bb3f-6e1c2d8a4e07");

/// One output unit of a generated feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A one-day annotation: festival, lunar date label, or solar term.
    Single { date: NaiveDate, title: String },

    /// A merged multi-day holiday. `end_exclusive` names the first day
    /// after the span, per the calendar-interchange end convention.
    Span {
        start: NaiveDate,
        end_exclusive: NaiveDate,
        title: String,
    },
}

impl Event {
    /// The event summary as produced by the planner.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Single { title, .. } | Self::Span { title, .. } => title,
        }
    }

    /// First covered day.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        match self {
            Self::Single { date, .. } => *date,
            Self::Span { start, .. } => *start,
        }
    }

    /// Stable event identifier.
    ///
    /// Derived from the event kind, dates, and title, so regenerating a feed
    /// yields the same identifier for the same logical event. Events that
    /// differ in any of those inputs get distinct identifiers.
    #[must_use]
    pub fn uid(&self) -> Uuid {
        let seed = match self {
            Self::Single { date, title } => format!("single:{date}:{title}"),
            Self::Span {
                start,
                end_exclusive,
                title,
            } => format!("span:{start}:{end_exclusive}:{title}"),
        };
        Uuid::new_v5(&EVENT_UID_NAMESPACE, seed.as_bytes())
    }
}
