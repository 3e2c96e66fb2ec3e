//! Geometry and material for Civil 3D pressure pipes, which carry them in a
//! free-text info column (e.g. `PVC C900 (4")`, `HDPE DR11 315mmØ`).

use once_cell::sync::Lazy;
use regex::Regex;

use super::material::MaterialMatcher;

const MM_PER_INCH: f64 = 25.4;

static PAREN_INCHES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\((\d+(?:\.\d+)?)\s*"?\)"#).expect("valid regex"));
static MILLIMETRES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*mm").expect("valid regex"));
static BARE_INCHES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(\d+(?:\.\d+)?)\s*""#).expect("valid regex"));

/// Size in inches, trying in order: inches in parentheses, the first
/// millimetre value (rounded to the nearest half inch), a bare inch value.
pub fn size_from_info(info: &str) -> Option<f64> {
    let text = info.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(v) = first_capture(&PAREN_INCHES, text) {
        return Some(v);
    }

    let normalized = text.replace('Ø', "");
    if let Some(mm) = first_capture(&MILLIMETRES, &normalized) {
        // nearest half inch, ties to even
        return Some((mm / MM_PER_INCH * 2.0).round_ties_even() / 2.0);
    }

    first_capture(&BARE_INCHES, text)
}

/// First material key named in the info text.
pub fn material_from_info<'k>(info: &str, matcher: &MaterialMatcher<'k>) -> Option<&'k str> {
    matcher.find(info)
}

fn first_capture(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_prefers_parenthesised_inches() {
        assert_eq!(size_from_info("PVC C900 (4\")"), Some(4.0));
        assert_eq!(size_from_info("PVC 110mm (4)"), Some(4.0));
    }

    #[test]
    fn test_size_from_millimetres() {
        assert_eq!(size_from_info("HDPE DR11 315mmØ"), Some(12.5));
        assert_eq!(size_from_info("Ductile 300 MM"), Some(12.0));
        assert_eq!(size_from_info("50mm"), Some(2.0));
    }

    #[test]
    fn test_size_from_bare_inches_and_nothing() {
        assert_eq!(size_from_info("Steel 6\" sch 40"), Some(6.0));
        assert_eq!(size_from_info("no size here"), None);
        assert_eq!(size_from_info(""), None);
    }

    #[test]
    fn test_material_from_info() {
        let m = MaterialMatcher::new(vec!["Alloy", "HDPE", "PVC", "CS", "SS"]);
        assert_eq!(material_from_info("hdpe dr11 315mm", &m), Some("HDPE"));
        assert_eq!(material_from_info("PVC C900 (4\")", &m), Some("PVC"));
        assert_eq!(material_from_info("Copper", &m), None);
        assert_eq!(material_from_info("Ductile Iron 300mm", &m), None);
        assert_eq!(material_from_info("Class 350 Ductile", &m), None);
        assert_eq!(material_from_info("", &m), None);
    }
}
