//! Static lookup tables: built-in data plus optional YAML overrides.
//!
//! Tables are assembled once at startup and then only read.

mod item_types;
mod materials;
mod mpl;
mod piping;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::Path};
use tracing::{debug, info};

/// Exact-match string table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupTable {
    entries: BTreeMap<String, String>,
}

impl LookupTable {
    pub fn from_static(pairs: &[(&str, &str)]) -> Self {
        pairs.iter().map(|&(k, v)| (k, v)).collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert every entry of `other`, replacing existing keys. Returns how
    /// many keys were replaced.
    fn extend_from(&mut self, other: LookupTable, table: &str) -> usize {
        let mut replaced = 0;
        for (k, v) in other.entries {
            if let Some(old) = self.entries.insert(k.clone(), v) {
                debug!(table, key = %k, old = %old, "override replaced entry");
                replaced += 1;
            }
        }
        replaced
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Account assigned to model items whose `ItemType` contains one of
/// `keywords` (compared without whitespace or case).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTypeAccount {
    pub description: String,
    pub account_code: String,
    pub uom: String,
    pub keywords: Vec<String>,
}

/// Every table the enrichment consults. The YAML override file has the same
/// shape; sections it leaves out are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tables {
    /// MPL code → description.
    pub mpl: LookupTable,
    /// Material key → material name.
    pub materials: LookupTable,
    /// Specification string → account code.
    pub piping: LookupTable,
    /// Material key → spec codes implying it.
    pub material_codes: BTreeMap<String, Vec<String>>,
    /// `ItemMaterial` value → material key.
    pub item_materials: LookupTable,
    /// Item-type accounts, in priority order.
    pub item_types: Vec<ItemTypeAccount>,
    /// `ItemType` fragments whose rows are dropped in item-type mode.
    pub item_type_skip: Vec<String>,
}

impl Tables {
    pub fn builtin() -> Self {
        Self {
            mpl: LookupTable::from_static(mpl::MPL_CODES),
            materials: LookupTable::from_static(materials::MATERIALS),
            piping: LookupTable::from_static(piping::PIPING_ACCOUNTS),
            material_codes: materials::MATERIAL_CODES
                .iter()
                .map(|&(k, codes)| (k.to_string(), codes.iter().map(|c| c.to_string()).collect()))
                .collect(),
            item_materials: LookupTable::from_static(materials::ITEM_MATERIALS),
            item_types: item_types::ITEM_TYPE_ACCOUNTS
                .iter()
                .map(|&(description, account_code, uom, keywords)| ItemTypeAccount {
                    description: description.to_string(),
                    account_code: account_code.to_string(),
                    uom: uom.to_string(),
                    keywords: keywords.iter().map(|k| k.to_string()).collect(),
                })
                .collect(),
            item_type_skip: item_types::ITEM_TYPE_SKIP
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("parsing tables YAML")
    }

    /// Built-in tables, with entries from `overrides` (if given) layered on top.
    pub fn load(overrides: Option<&Path>) -> Result<Self> {
        let mut tables = Self::builtin();
        if let Some(path) = overrides {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading tables {}", path.display()))?;
            let extra = Self::from_yaml_str(&text)
                .with_context(|| format!("loading tables {}", path.display()))?;
            tables.merge(extra);
            info!(path = %path.display(), "applied table overrides");
        }
        info!(
            mpl = tables.mpl.len(),
            materials = tables.materials.len(),
            piping = tables.piping.len(),
            item_types = tables.item_types.len(),
            "lookup tables ready"
        );
        Ok(tables)
    }

    pub fn merge(&mut self, other: Tables) {
        let mut replaced = 0;
        replaced += self.mpl.extend_from(other.mpl, "mpl");
        replaced += self.materials.extend_from(other.materials, "materials");
        replaced += self.piping.extend_from(other.piping, "piping");
        replaced += self
            .item_materials
            .extend_from(other.item_materials, "item_materials");
        for (key, codes) in other.material_codes {
            if self.material_codes.insert(key, codes).is_some() {
                replaced += 1;
            }
        }
        if replaced > 0 {
            info!(replaced, "table overrides replaced built-in entries");
        }

        // override entries go first so their keywords win
        if !other.item_types.is_empty() {
            let mut item_types = other.item_types;
            item_types.append(&mut self.item_types);
            self.item_types = item_types;
        }
        for fragment in other.item_type_skip {
            if !self.item_type_skip.contains(&fragment) {
                self.item_type_skip.push(fragment);
            }
        }
    }

    /// Material keys, longest first, so that substring scans prefer the most
    /// specific key.
    pub fn material_keys_by_specificity(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.materials.iter().map(|(k, _)| k).collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_tables() {
        let t = Tables::builtin();
        assert_eq!(t.mpl.get("A10"), Some("GENERAL ENGINEERING DOCUMENTS"));
        assert_eq!(t.mpl.get("Y99"), Some("YARD/BOP"));
        assert_eq!(t.materials.get("SS"), Some("Stainless Steel"));
        assert_eq!(t.materials.get("CS"), Some("Carbon Steel"));
        assert_eq!(
            t.piping
                .get("Above Ground Large Bore Pipe (Carbon Steel) (8\"-12\" Diameter)"),
            Some("72.06.04.002.02")
        );
        assert_eq!(
            t.piping.get("Underground Small Bore Pipe - HDPE"),
            Some("72.09.02.005")
        );
        assert!(t.piping.get("Underground Large Bore Pipe").is_none());
        assert!(t.mpl.get("ZZZ").is_none());
        assert_eq!(t.item_types[0].account_code, "83.23.22");
        assert!(t.item_type_skip.iter().any(|s| s == "centerline"));
    }

    #[test]
    fn test_overrides_layer_on_builtin() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(
            file,
            r#"
mpl:
  A10: "OVERRIDDEN"
  Q01: "NEW ENTRY"
materials:
  CU: Copper
material_codes:
  CU: ["B88"]
item_types:
  - description: Bollards
    account_code: "99.01"
    uom: EA
    keywords: ["BOLLARD"]
item_type_skip: ["revision cloud", "legend"]
"#
        )?;

        let t = Tables::load(Some(file.path()))?;
        assert_eq!(t.mpl.get("A10"), Some("OVERRIDDEN"));
        assert_eq!(t.mpl.get("Q01"), Some("NEW ENTRY"));
        assert_eq!(t.mpl.get("A05"), Some("DESIGN TOOL DOCUMENTS"));
        assert_eq!(t.materials.get("CU"), Some("Copper"));
        assert_eq!(t.material_codes["CU"], vec!["B88".to_string()]);
        assert_eq!(t.piping.len(), Tables::builtin().piping.len());
        assert_eq!(t.item_types[0].description, "Bollards");
        assert_eq!(t.item_types.len(), Tables::builtin().item_types.len() + 1);
        assert_eq!(t.item_type_skip.last().map(String::as_str), Some("revision cloud"));
        assert_eq!(t.item_type_skip.len(), Tables::builtin().item_type_skip.len() + 1);
        Ok(())
    }

    #[test]
    fn test_missing_override_file_is_an_error() {
        let err = Tables::load(Some(Path::new("/nonexistent/tables.yaml"))).unwrap_err();
        assert!(format!("{:#}", err).contains("reading tables"));
    }

    #[test]
    fn test_material_keys_longest_first() {
        let t = Tables::builtin();
        let keys = t.material_keys_by_specificity();
        assert_eq!(keys.first(), Some(&"Alloy"));
        assert_eq!(keys.last(), Some(&"SS"));
    }

    #[test]
    fn test_builtin_round_trips_through_yaml() -> Result<()> {
        let t = Tables::builtin();
        let text = serde_yaml::to_string(&t)?;
        assert_eq!(Tables::from_yaml_str(&text)?, t);
        Ok(())
    }
}
