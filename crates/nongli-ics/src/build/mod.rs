//! Feed document serializer.
//!
//! Assembles the `.ics` text: a calendar header carrying the feed name and
//! the fixed Asia/Shanghai timezone block, one VEVENT block per descriptor,
//! and the closing footer. Every content line is folded to the 75-octet
//! limit and terminated with CRLF.

pub mod escape;
pub mod fold;

use chrono::NaiveDate;

use crate::event::Event;
use escape::escape_text;
use fold::fold_line;

/// Serializes a complete feed document.
#[must_use]
pub fn serialize_feed(display_name: &str, events: &[Event]) -> String {
    let mut out = String::new();

    for line in header_lines(display_name) {
        out.push_str(&fold_line(&line));
    }
    for event in events {
        push_event_block(&mut out, event);
    }
    out.push_str(&fold_line("END:VCALENDAR"));

    out
}

fn header_lines(display_name: &str) -> Vec<String> {
    let name = escape_text(&clean_title(display_name));
    vec![
        "BEGIN:VCALENDAR".to_string(),
        format!("PRODID:{name}"),
        "VERSION:2.0".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        format!("X-WR-CALNAME:{name}"),
        "X-WR-TIMEZONE:Asia/Shanghai".to_string(),
        "X-APPLE-LANGUAGE:zh".to_string(),
        "X-APPLE-REGION:CN".to_string(),
        "BEGIN:VTIMEZONE".to_string(),
        "TZID:Asia/Shanghai".to_string(),
        "X-LIC-LOCATION:Asia/Shanghai".to_string(),
        "BEGIN:STANDARD".to_string(),
        "TZOFFSETFROM:+0800".to_string(),
        "TZOFFSETTO:+0800".to_string(),
        "TZNAME:CST".to_string(),
        "DTSTART:19700101T000000".to_string(),
        "END:STANDARD".to_string(),
        "END:VTIMEZONE".to_string(),
    ]
}

fn push_event_block(out: &mut String, event: &Event) {
    let (start, end) = match event {
        Event::Single { date, .. } => (*date, *date),
        Event::Span {
            start,
            end_exclusive,
            ..
        } => (*start, *end_exclusive),
    };
    let start_compact = compact_date(start);
    let summary = escape_text(&clean_title(event.title()));

    let lines = [
        "BEGIN:VEVENT".to_string(),
        format!("DTSTART;VALUE=DATE:{start_compact}"),
        format!("DTEND;VALUE=DATE:{}", compact_date(end)),
        format!("DTSTAMP:{start_compact}T000001"),
        format!("UID:{}", event.uid()),
        format!("CREATED:{start_compact}T000001"),
        "DESCRIPTION:".to_string(),
        format!("SUMMARY:{summary}"),
        "CLASS:PUBLIC".to_string(),
        "TRANSP:TRANSPARENT".to_string(),
        "END:VEVENT".to_string(),
    ];
    for line in lines {
        out.push_str(&fold_line(&line));
    }
}

fn compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Collapses internal whitespace runs to single spaces and trims the edges.
fn clean_title(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(" ")
}
