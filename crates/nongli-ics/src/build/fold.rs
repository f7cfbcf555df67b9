//! Content line folding for iCalendar (RFC 5545 §3.1).

/// Maximum line length in octets (not including CRLF).
const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line to comply with the 75-octet limit and terminates it
/// with CRLF.
///
/// Continuation lines start with a single space, which counts against their
/// budget. Folding never splits a UTF-8 multi-byte sequence.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return format!("{line}\r\n");
    }

    let mut out = String::with_capacity(line.len() + (line.len() / MAX_LINE_OCTETS) * 3 + 2);
    let mut budget = MAX_LINE_OCTETS;
    let mut used = 0;

    for c in line.chars() {
        let width = c.len_utf8();
        if used + width > budget {
            out.push_str("\r\n ");
            used = 0;
            budget = MAX_LINE_OCTETS - 1;
        }
        out.push(c);
        used += width;
    }
    out.push_str("\r\n");

    out
}
