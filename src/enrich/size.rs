//! Nominal pipe size parsing.
//!
//! Accepts `2.5`, `3/4`, `1 1/2`, `2-1/2`, with or without an inch marker
//! (`"`, `”`, `″`, `in`, `inch`, `inches`). Anything else is `None`.

use super::utils::parse_finite;

const INCH_MARKS: &[char] = &['"', '\u{201C}', '\u{201D}', '\u{2033}'];
const INCH_SUFFIXES: &[&str] = &["inches", "inch", "in"];

/// Parse a size in inches. Negative, non-finite or malformed values are `None`.
pub fn parse_size(raw: &str) -> Option<f64> {
    let cleaned = strip_unit_markers(raw);
    if cleaned.is_empty() {
        return None;
    }

    let value = if let Some((whole, frac)) = split_mixed(&cleaned) {
        parse_finite(whole)? + parse_fraction(frac)?
    } else if cleaned.contains('/') {
        parse_fraction(&cleaned)?
    } else {
        parse_finite(&cleaned)?
    };

    (value.is_finite() && value >= 0.0).then_some(value)
}

fn strip_unit_markers(raw: &str) -> String {
    let mut s: String = raw.chars().filter(|c| !INCH_MARKS.contains(c)).collect();
    let end = s.trim_end().len();
    s.truncate(end);

    let lower = s.to_ascii_lowercase();
    if let Some(suffix) = INCH_SUFFIXES.iter().find(|sfx| lower.ends_with(*sfx)) {
        s.truncate(s.len() - suffix.len());
    }
    s.trim().to_string()
}

/// Split `1 1/2` or `2-1/2` into whole and fraction parts.
fn split_mixed(s: &str) -> Option<(&str, &str)> {
    if let Some((whole, frac)) = s.split_once(char::is_whitespace) {
        return Some((whole, frac.trim_start()));
    }
    // a leading '-' is a sign, not a separator
    let (idx, _) = s.char_indices().skip(1).find(|&(_, c)| c == '-')?;
    let frac = &s[idx + 1..];
    frac.contains('/').then(|| (&s[..idx], frac))
}

/// `numerator/denominator` with unsigned integer parts; a zero denominator
/// is `None`.
fn parse_fraction(s: &str) -> Option<f64> {
    let (num, den) = s.split_once('/')?;
    let num = parse_digits(num)?;
    let den = parse_digits(den)?;
    if den == 0 {
        return None;
    }
    Some(num as f64 / den as f64)
}

fn parse_digits(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
