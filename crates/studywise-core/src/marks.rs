//! Mark sanitization.
//!
//! Raw marks arrive as whatever the user typed. Entries that do not read as
//! an integer in 0-100 are dropped without error, since half-typed input is
//! normal while a form is being edited.

use crate::model::Mark;

/// Parse one raw mark.
///
/// Reads an optional sign and the leading run of decimal digits after any
/// whitespace; anything after the digits is ignored, so `"72.9"` reads as
/// 72 and `"85abc"` as 85. Returns `None` when there are no digits or the
/// value falls outside 0-100.
pub fn parse_mark(raw: &str) -> Option<Mark> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digit_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_len == 0 {
        return None;
    }

    // Overflow means the value is far outside 0-100 anyway.
    let value: u64 = rest[..digit_len].parse().ok()?;
    if negative && value != 0 {
        return None;
    }

    u8::try_from(value).ok().and_then(Mark::new)
}

/// Keep the valid marks from `raw`, preserving input order.
pub fn sanitize_marks<S: AsRef<str>>(raw: &[S]) -> Vec<Mark> {
    raw.iter().filter_map(|m| parse_mark(m.as_ref())).collect()
}

/// Indices of entries in `raw` that [`sanitize_marks`] would discard.
pub fn rejected_indices<S: AsRef<str>>(raw: &[S]) -> Vec<usize> {
    raw.iter()
        .enumerate()
        .filter(|(_, m)| parse_mark(m.as_ref()).is_none())
        .map(|(i, _)| i)
        .collect()
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(marks: &[Mark]) -> Option<f64> {
    if marks.is_empty() {
        return None;
    }
    let sum: u32 = marks.iter().map(|m| u32::from(m.value())).sum();
    Some(f64::from(sum) / marks.len() as f64)
}
