//! Event planning: day enumeration and holiday-span exclusion.

use nongli_core::config::YearRange;
use nongli_core::types::CategoryToggles;
use nongli_ics::Event;

use crate::almanac::AlmanacSource;
use crate::error::{FeedError, FeedResult};
use crate::holiday::HolidaySpan;
use crate::select::select_labels;

/// Plans the full event sequence for one feed.
///
/// Span events come first, one per merged holiday span, with the exclusive
/// end one day past the span's last day. Then every month from January of
/// the first year through December of the last is walked in order; a day
/// that falls inside any span's inclusive window is skipped entirely, and
/// every other day emits one single-day event per selected label. A month
/// the source has no data for contributes zero events.
///
/// The per-day exclusion check scans all spans linearly; at feed scale (a
/// few years of days against a handful of spans) that beats maintaining an
/// interval index.
///
/// ## Errors
/// Fails fast when a span's exclusive end is unrepresentable, which points
/// at a defect upstream rather than bad external data.
pub fn plan_events(
    years: YearRange,
    source: &dyn AlmanacSource,
    spans: &[HolidaySpan],
    toggles: CategoryToggles,
) -> FeedResult<Vec<Event>> {
    let mut events = Vec::new();

    for span in spans {
        let end_exclusive = span.end().succ_opt().ok_or(FeedError::InvariantViolation(
            "holiday span ends on the last representable date",
        ))?;
        events.push(Event::Span {
            start: span.start(),
            end_exclusive,
            title: span.name().to_string(),
        });
    }

    for year in years {
        for month in 1..=12 {
            let Some(days) = source.month(year, month) else {
                continue;
            };
            for day in days {
                if spans.iter().any(|span| span.contains(day.date)) {
                    continue;
                }
                for title in select_labels(day, toggles) {
                    events.push(Event::Single {
                        date: day.date,
                        title,
                    });
                }
            }
        }
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::almanac::AlmanacDay;
    use crate::holiday::{HolidayDay, merge_holiday_spans};
    use chrono::{Datelike, NaiveDate};
    use std::collections::HashMap;

    /// In-memory almanac covering the configured months with plain bundles.
    struct FakeAlmanac {
        months: HashMap<(i32, u32), Vec<AlmanacDay>>,
    }

    impl FakeAlmanac {
        fn with_months(months: &[(i32, u32)]) -> Self {
            let months = months
                .iter()
                .map(|&(year, month)| ((year, month), month_days(year, month)))
                .collect();
            Self { months }
        }
    }

    impl AlmanacSource for FakeAlmanac {
        fn month(&self, year: i32, month: u32) -> Option<&[AlmanacDay]> {
            self.months.get(&(year, month)).map(Vec::as_slice)
        }
    }

    fn month_days(year: i32, month: u32) -> Vec<AlmanacDay> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        first
            .iter_days()
            .take_while(|d| d.month() == month)
            .map(|date| AlmanacDay {
                date,
                lunar_label: format!("lunar {date}"),
                solar_festivals: vec![format!("solar {date}")],
                solar_other_festivals: vec![],
                lunar_festivals: vec![],
                lunar_other_festivals: vec![],
                solar_term: None,
            })
            .collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn years(start: i32, end: i32) -> YearRange {
        YearRange { start, end }
    }

    fn spring_festival_spans() -> Vec<HolidaySpan> {
        let records = (10..=17)
            .map(|d| HolidayDay {
                name: "春节".into(),
                date: date(2024, 2, d),
            })
            .collect::<Vec<_>>();
        merge_holiday_spans(records).unwrap()
    }

    #[test]
    fn span_events_precede_single_day_events() {
        let source = FakeAlmanac::with_months(&[(2024, 2)]);
        let events = plan_events(
            years(2024, 2024),
            &source,
            &spring_festival_spans(),
            CategoryToggles::all(),
        )
        .unwrap();

        assert!(matches!(events[0], Event::Span { .. }));
        assert!(
            events[1..]
                .iter()
                .all(|event| matches!(event, Event::Single { .. }))
        );
    }

    #[test]
    fn days_inside_a_span_emit_no_single_day_events() {
        let source = FakeAlmanac::with_months(&[(2024, 2)]);
        let events = plan_events(
            years(2024, 2024),
            &source,
            &spring_festival_spans(),
            CategoryToggles::all(),
        )
        .unwrap();

        let excluded: Vec<NaiveDate> = (10..=17).map(|d| date(2024, 2, d)).collect();
        for event in &events {
            if let Event::Single { date, .. } = event {
                assert!(!excluded.contains(date), "day {date} should be excluded");
            }
        }

        // The span itself is still emitted, with the exclusive end
        assert_eq!(
            events[0],
            Event::Span {
                start: date(2024, 2, 10),
                end_exclusive: date(2024, 2, 18),
                title: "春节".into(),
            }
        );

        // February has 29 days in 2024; 8 are subsumed by the span, and each
        // remaining day emits its lunar label and one solar festival
        let singles = events.len() - 1;
        assert_eq!(singles, (29 - 8) * 2);
    }

    #[test]
    fn all_toggles_off_plans_only_span_events() {
        let source = FakeAlmanac::with_months(&[(2024, 1), (2024, 2)]);
        let events = plan_events(
            years(2024, 2024),
            &source,
            &spring_festival_spans(),
            CategoryToggles::default(),
        )
        .unwrap();

        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], Event::Span { .. }));
    }

    #[test]
    fn degenerate_span_gets_next_day_exclusive_end() {
        let spans =
            merge_holiday_spans(vec![HolidayDay {
                name: "元旦节".into(),
                date: date(2024, 1, 1),
            }])
            .unwrap();
        let source = FakeAlmanac::with_months(&[]);
        let events =
            plan_events(years(2024, 2024), &source, &spans, CategoryToggles::all()).unwrap();

        assert_eq!(
            events,
            vec![Event::Span {
                start: date(2024, 1, 1),
                end_exclusive: date(2024, 1, 2),
                title: "元旦节".into(),
            }]
        );
    }

    #[test]
    fn lunar_festival_days_emit_one_event_per_label() {
        let day = AlmanacDay {
            date: date(2024, 8, 10),
            lunar_label: "七月初七".into(),
            solar_festivals: vec!["should not appear".into()],
            solar_other_festivals: vec![],
            lunar_festivals: vec!["七夕节".into(), "乞巧节".into()],
            lunar_other_festivals: vec![],
            solar_term: None,
        };
        let source = FakeAlmanac {
            months: HashMap::from([((2024, 8), vec![day])]),
        };
        let toggles = CategoryToggles {
            lunar_festivals: true,
            ..CategoryToggles::default()
        };
        let events = plan_events(years(2024, 2024), &source, &[], toggles).unwrap();

        assert_eq!(
            events,
            vec![
                Event::Single {
                    date: date(2024, 8, 10),
                    title: "七夕节".into(),
                },
                Event::Single {
                    date: date(2024, 8, 10),
                    title: "乞巧节".into(),
                },
            ]
        );
    }

    #[test]
    fn missing_months_contribute_nothing() {
        let source = FakeAlmanac::with_months(&[(2024, 3)]);
        let events =
            plan_events(years(2024, 2024), &source, &[], CategoryToggles::all()).unwrap();

        assert!(
            events
                .iter()
                .all(|event| event.start().month() == 3 && event.start().year() == 2024)
        );
        assert_eq!(events.len(), 31 * 2);
    }

    #[test]
    fn days_stay_in_chronological_order() {
        let source = FakeAlmanac::with_months(&[(2024, 1), (2024, 2), (2025, 1)]);
        let events =
            plan_events(years(2024, 2025), &source, &[], CategoryToggles::all()).unwrap();

        let dates: Vec<NaiveDate> = events.iter().map(Event::start).collect();
        let mut sorted = dates.clone();
        sorted.sort_unstable();
        assert_eq!(dates, sorted);
    }
}
