/// Extract the MPL code from a source identifier of the form
/// `PREFIX-PROJECT-MPL-NUMBER`.
///
/// Project designators may contain a hyphen themselves (`GEH-BWRX-300-A10-001`),
/// so the MPL segment is the first segment from the third onward that is
/// alphanumeric and contains a letter. Without one, the third segment is used.
/// Fewer than three segments yields `None`.
pub fn extract_mpl(source: &str) -> Option<&str> {
    let parts: Vec<&str> = source.split('-').map(str::trim).collect();
    if parts.len() < 3 {
        return None;
    }

    let mpl = parts[2..]
        .iter()
        .copied()
        .find(|p| {
            p.chars().all(|c| c.is_ascii_alphanumeric())
                && p.chars().any(|c| c.is_ascii_alphabetic())
        })
        .unwrap_or(parts[2]);

    (!mpl.is_empty()).then_some(mpl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_mpl() {
        assert_eq!(extract_mpl("GEH-BWRX-300-A10-001"), Some("A10"));
        assert_eq!(extract_mpl("GEH-PRJ-A10-001"), Some("A10"));
        assert_eq!(extract_mpl("GEH-PRJ-CUW-0042.dwg"), Some("CUW"));
        assert_eq!(extract_mpl("GEH-PRJ- U71 -7"), Some("U71"));
    }

    #[test]
    fn test_falls_back_to_third_segment() {
        assert_eq!(extract_mpl("GEH-BWRX-300-001.dwg"), Some("300"));
    }

    #[test]
    fn test_too_few_segments() {
        assert_eq!(extract_mpl("GEH-A10"), None);
        assert_eq!(extract_mpl("nohyphens"), None);
        assert_eq!(extract_mpl(""), None);
        assert_eq!(extract_mpl("A-B-"), None);
    }
}
