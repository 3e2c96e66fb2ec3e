use regex::Regex;
use std::fmt;

use crate::tables::Tables;

/// Outcome of resolving a material key. Every input maps to one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Material {
    Known { key: String, name: String },
    /// A key was given but the material table has no (non-blank) name for it.
    Unrecognized(String),
    Missing,
}

impl Material {
    /// Full name, when the material is known.
    pub fn name(&self) -> Option<&str> {
        match self {
            Material::Known { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Material::Known { .. })
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Material::Known { name, .. } => f.write_str(name),
            Material::Unrecognized(code) => write!(f, "Unknown Material ({})", code),
            Material::Missing => f.write_str("Unknown Material"),
        }
    }
}

/// Look `key` up in the material table.
pub fn resolve(key: &str, tables: &Tables) -> Material {
    let key = key.trim();
    if key.is_empty() {
        return Material::Missing;
    }
    match tables.materials.get(key).map(str::trim) {
        Some(name) if !name.is_empty() => Material::Known {
            key: key.to_string(),
            name: name.to_string(),
        },
        _ => Material::Unrecognized(key.to_string()),
    }
}

/// Finds material keys in free text. A key only matches as a whole token,
/// so `SS` is found in `SS 316L` but not in `Pressure Pipe`.
pub struct MaterialMatcher<'t> {
    keys: Vec<(&'t str, Regex)>,
}

impl<'t> MaterialMatcher<'t> {
    /// `keys` in priority order (see `Tables::material_keys_by_specificity`).
    pub fn new(keys: Vec<&'t str>) -> Self {
        let keys = keys
            .into_iter()
            .filter(|k| !k.trim().is_empty())
            .filter_map(|k| token_regex(k.trim()).map(|re| (k, re)))
            .collect();
        Self { keys }
    }

    /// First key appearing in `text`, ignoring case.
    pub fn find(&self, text: &str) -> Option<&'t str> {
        if text.trim().is_empty() {
            return None;
        }
        self.keys
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|&(k, _)| k)
    }
}

fn token_regex(key: &str) -> Option<Regex> {
    Regex::new(&format!(
        r"(?i)(?:^|[^[:alnum:]]){}(?:$|[^[:alnum:]])",
        regex::escape(key)
    ))
    .ok()
}

/// Infer a material key when the row does not name one:
/// 1. `material_code` equal (ignoring case) to a spec code in `material_codes`;
/// 2. `item_material` mapped through `item_materials`;
/// 3. `item_type` naming a material key as a whole token.
pub fn infer_key<'t>(
    material_code: &str,
    item_material: &str,
    item_type: &str,
    tables: &'t Tables,
    matcher: &MaterialMatcher<'t>,
) -> Option<&'t str> {
    let needle = material_code.trim().to_uppercase();
    if !needle.is_empty() {
        let by_code = tables.material_codes.iter().find_map(|(key, codes)| {
            codes
                .iter()
                .any(|c| c.trim().to_uppercase() == needle)
                .then_some(key.as_str())
        });
        if by_code.is_some() {
            return by_code;
        }
    }

    let item_material = item_material.trim();
    if !item_material.is_empty() {
        if let Some(key) = tables.item_materials.get(item_material).filter(|k| !k.is_empty()) {
            return Some(key);
        }
    }

    matcher.find(item_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_total() {
        let t = Tables::builtin();
        assert_eq!(
            resolve("SS", &t),
            Material::Known {
                key: "SS".into(),
                name: "Stainless Steel".into()
            }
        );
        assert_eq!(resolve(" CS ", &t).name(), Some("Carbon Steel"));
        assert_eq!(resolve("XX", &t), Material::Unrecognized("XX".into()));
        assert_eq!(resolve("", &t), Material::Missing);
        assert_eq!(resolve("XX", &t).to_string(), "Unknown Material (XX)");
        assert_eq!(Material::Missing.to_string(), "Unknown Material");
    }

    #[test]
    fn test_blank_table_name_is_unrecognized() {
        let mut t = Tables::builtin();
        t.merge(Tables {
            materials: [("BL", "  ")].into_iter().collect(),
            ..Default::default()
        });
        assert_eq!(resolve("BL", &t), Material::Unrecognized("BL".into()));
    }

    #[test]
    fn test_infer_key_resolution_order() {
        let t = Tables::builtin();
        let m = MaterialMatcher::new(t.material_keys_by_specificity());

        assert_eq!(infer_key("a106", "Stainless Steel", "", &t, &m), Some("CS"));
        assert_eq!(infer_key("", "Stainless Steel", "CS Pipe", &t, &m), Some("SS"));
        assert_eq!(infer_key("ZZZ", "Unobtainium", "HDPE Pipe", &t, &m), Some("HDPE"));
        assert_eq!(infer_key("", "", "Pipe", &t, &m), None);
        assert_eq!(infer_key("", "", "", &t, &m), None);
    }

    #[test]
    fn test_keys_match_whole_tokens_only() {
        let t = Tables::builtin();
        let m = MaterialMatcher::new(t.material_keys_by_specificity());

        assert_eq!(m.find("Process Pipe"), None);
        assert_eq!(m.find("Pressure Pipe"), None);
        assert_eq!(m.find("Glass Access Panel"), None);
        assert_eq!(m.find("Discs"), None);
        assert_eq!(m.find("ss-316L"), Some("SS"));
        assert_eq!(m.find("Pipe (CS)"), Some("CS"));
        assert_eq!(m.find("PVC_C900"), Some("PVC"));
        assert_eq!(m.find("alloy"), Some("Alloy"));
        assert_eq!(infer_key("", "", "Process Pipe", &t, &m), None);
    }
}
