//! Per-row derivation of the five enrichment fields.
//!
//! Every step degrades to an empty field instead of failing, so a row always
//! comes out the other side.

pub mod civil3d;
pub mod classify;
pub mod item_type;
pub mod material;
pub mod mpl;
pub mod size;
pub mod utils;

use std::fmt;
use tracing::{debug, warn};

use crate::{
    config::{Config, Mode},
    record::Record,
    tables::Tables,
};

use self::{
    classify::Classifier,
    item_type::ItemTypeIndex,
    material::{Material, MaterialMatcher},
    utils::clean_field,
};

/// The five derived values for one row, plus what went missing on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Derived {
    pub mpl: String,
    pub mpl_description: String,
    pub account_code: String,
    pub account_description: String,
    pub uom: String,
    pub notes: RowNotes,
}

/// Which inputs could not be used. Feeds logging and the run summary only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowNotes {
    pub pressure_pipe: bool,
    pub size_unparsed: bool,
    pub elevation_unparsed: bool,
    pub material_unknown: bool,
    pub mpl_unknown: bool,
    pub account_unmatched: bool,
}

/// Why a row is left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    BlankColumn(String),
    /// Not exactly one identifier column filled in.
    Identifiers { filled: usize },
    ItemType(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::BlankColumn(col) => write!(f, "blank {}", col),
            SkipReason::Identifiers { filled } => {
                write!(f, "{} identifier columns filled, expected 1", filled)
            }
            SkipReason::ItemType(fragment) => write!(f, "item type matches {:?}", fragment),
        }
    }
}

/// Holds the configuration and tables for a run and enriches rows against them.
pub struct Enricher<'a> {
    config: &'a Config,
    tables: &'a Tables,
    classifier: Classifier<'a>,
    materials: MaterialMatcher<'a>,
    item_types: ItemTypeIndex<'a>,
}

impl<'a> Enricher<'a> {
    pub fn new(config: &'a Config, tables: &'a Tables) -> Self {
        let item_types = ItemTypeIndex::new(tables);
        if config.mode == Mode::ItemType && item_types.is_empty() {
            warn!("item-type mode without item-type accounts; every account will be empty");
        }
        debug!(mode = ?config.mode, keywords = item_types.len(), "enricher ready");
        Self {
            config,
            tables,
            classifier: Classifier::new(config),
            materials: MaterialMatcher::new(tables.material_keys_by_specificity()),
            item_types,
        }
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    /// Why `record` should be dropped, if it should. Rows are only ever
    /// dropped by explicit configuration or in item-type mode.
    pub fn skip_reason(&self, record: &Record) -> Option<SkipReason> {
        if let Some(col) = self.config.skip_without_column.as_deref() {
            if record.get(col).is_some_and(|v| clean_field(v).is_empty()) {
                return Some(SkipReason::BlankColumn(col.to_string()));
            }
        }

        let ids = &self.config.exclusive_id_columns;
        if !ids.is_empty() {
            let filled = ids
                .iter()
                .filter(|c| !field(record, c.as_str()).is_empty())
                .count();
            if filled != 1 {
                return Some(SkipReason::Identifiers { filled });
            }
        }

        if self.config.mode == Mode::ItemType {
            let item_type = field(record, &self.config.columns.item_type);
            if let Some(fragment) = self.item_types.skip_match(item_type) {
                return Some(SkipReason::ItemType(fragment.to_string()));
            }
        }
        None
    }

    /// Whether `record` already carries an account code and should be kept as is.
    pub fn passes_through(&self, record: &Record) -> bool {
        self.config.keep_existing_account
            && !record
                .get_or_empty(&self.config.output.account_code)
                .trim()
                .is_empty()
    }

    /// `record` with the five derived columns set (replaced in place when
    /// already present, appended otherwise).
    pub fn enrich(&self, record: &Record) -> Record {
        if self.passes_through(record) {
            return record.clone();
        }
        let derived = self.derive(record);
        self.apply(record, &derived)
    }

    pub fn apply(&self, record: &Record, derived: &Derived) -> Record {
        let out = &self.config.output;
        let mut enriched = record.clone();
        enriched.set(&out.mpl, derived.mpl.as_str());
        enriched.set(&out.mpl_description, derived.mpl_description.as_str());
        enriched.set(&out.account_code, derived.account_code.as_str());
        enriched.set(&out.account_description, derived.account_description.as_str());
        enriched.set(&out.uom, derived.uom.as_str());
        enriched
    }

    pub fn derive(&self, record: &Record) -> Derived {
        let mut notes = RowNotes::default();

        let mpl = mpl::extract_mpl(field(record, &self.config.columns.item_source_file))
            .unwrap_or_default();
        let mpl_description = self.tables.mpl.get(mpl).unwrap_or_default();
        notes.mpl_unknown = mpl_description.is_empty();

        let account = match self.config.mode {
            Mode::Pipes => self.pipe_account(record, mpl, &mut notes),
            Mode::ItemType => self.item_type_account(record),
        };
        notes.account_unmatched = account.code.is_empty();

        Derived {
            mpl: mpl.to_string(),
            mpl_description: mpl_description.to_string(),
            account_code: account.code,
            account_description: account.description,
            uom: account.uom,
            notes,
        }
    }

    fn pipe_account(&self, record: &Record, mpl: &str, notes: &mut RowNotes) -> Account {
        let cols = &self.config.columns;
        let item_type = field(record, &cols.item_type);
        let (elevation, size, material_key) = if self.config.pressure_pipe.matches(item_type, mpl)
        {
            notes.pressure_pipe = true;
            let info = field(record, &cols.civil3d_info);
            (
                Some(f64::NEG_INFINITY),
                civil3d::size_from_info(info),
                civil3d::material_from_info(info, &self.materials).unwrap_or_default(),
            )
        } else {
            (
                utils::parse_finite(field(record, &cols.elevation)),
                size::parse_size(field(record, &cols.size)),
                field(record, &cols.material),
            )
        };
        notes.elevation_unparsed = elevation.is_none();
        notes.size_unparsed = size.is_none();

        let material_key = if material_key.is_empty() {
            material::infer_key(
                field(record, &cols.material_code),
                field(record, &cols.item_material),
                item_type,
                self.tables,
                &self.materials,
            )
            .unwrap_or_default()
        } else {
            material_key
        };
        let material = material::resolve(material_key, self.tables);
        notes.material_unknown = !material.is_known();

        let description = self.describe(elevation, size, &material);
        let code = self
            .tables
            .piping
            .get(&description)
            .unwrap_or_default()
            .to_string();

        let existing_uom = field(record, &self.config.output.uom);
        let uom = if existing_uom.is_empty() {
            self.config.default_uom.clone()
        } else {
            existing_uom.to_string()
        };

        Account {
            description,
            code,
            uom,
        }
    }

    /// Unmatched item types keep whatever UOM the row already has.
    fn item_type_account(&self, record: &Record) -> Account {
        match self
            .item_types
            .classify(field(record, &self.config.columns.item_type))
        {
            Some(account) => Account {
                description: account.description.clone(),
                code: account.account_code.clone(),
                uom: account.uom.clone(),
            },
            None => Account {
                description: String::new(),
                code: String::new(),
                uom: field(record, &self.config.output.uom).to_string(),
            },
        }
    }

    fn describe(&self, elevation: Option<f64>, size: Option<f64>, material: &Material) -> String {
        if self.config.report_missing && (elevation.is_none() || size.is_none()) {
            let mut missing = Vec::with_capacity(3);
            if !material.is_known() {
                missing.push("Material");
            }
            if size.is_none() {
                missing.push("Size");
            }
            if elevation.is_none() {
                missing.push("COG_Z");
            }
            return classify::missing_values(&missing);
        }
        self.classifier
            .specification(elevation.unwrap_or(0.0), size, material)
    }
}

struct Account {
    description: String,
    code: String,
    uom: String,
}

fn field<'r>(record: &'r Record, column: &str) -> &'r str {
    clean_field(record.get_or_empty(column))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &[&str] = &[
        "Handle",
        "ItemSourceFile",
        "AutoCAD_COG_Z",
        "AutoCAD_Size",
        "AutoCAD_PlantMaterial",
    ];

    fn row(values: &[&str]) -> Record {
        Record::from_parts(HEADER, values)
    }

    #[test]
    fn test_enrich_full_row() {
        let cfg = Config::default();
        let tables = Tables::builtin();
        let e = Enricher::new(&cfg, &tables);

        let out = e.enrich(&row(&["1F3", "GEH-BWRX-300-A10-001", "5.2", "10\"", "CS"]));
        assert_eq!(
            out.columns().collect::<Vec<_>>(),
            vec![
                "Handle",
                "ItemSourceFile",
                "AutoCAD_COG_Z",
                "AutoCAD_Size",
                "AutoCAD_PlantMaterial",
                "MPL",
                "MPL_DESCRIPTION",
                "ACCOUNT_CODE",
                "ACCOUNT_CODE_DESCRIPTION",
                "UOM"
            ]
        );
        assert_eq!(out.get("Handle"), Some("1F3"));
        assert_eq!(out.get("MPL"), Some("A10"));
        assert_eq!(out.get("MPL_DESCRIPTION"), Some("GENERAL ENGINEERING DOCUMENTS"));
        assert_eq!(out.get("ACCOUNT_CODE"), Some("72.06.04.002.02"));
        assert_eq!(
            out.get("ACCOUNT_CODE_DESCRIPTION"),
            Some("Above Ground Large Bore Pipe (Carbon Steel) (8\"-12\" Diameter)")
        );
        assert_eq!(out.get("UOM"), Some("LM"));
    }

    #[test]
    fn test_unknown_everything_keeps_row_with_empty_fields() {
        let cfg = Config::default();
        let tables = Tables::builtin();
        let e = Enricher::new(&cfg, &tables);

        let d = e.derive(&row(&["9", "junk", "", "abc", "XX"]));
        assert_eq!(d.mpl, "");
        assert_eq!(d.mpl_description, "");
        assert_eq!(d.account_description, "Underground Large Bore Pipe");
        assert_eq!(d.account_code, "");
        assert!(d.notes.account_unmatched);
        assert!(d.notes.size_unparsed);
        assert!(d.notes.elevation_unparsed);
        assert!(d.notes.material_unknown);
        assert!(d.notes.mpl_unknown);

        let out = e.enrich(&row(&["9", "junk", "", "abc", "XX"]));
        assert_eq!(out.len(), HEADER.len() + 5);
        assert_eq!(out.get("MPL"), Some(""));
        assert_eq!(out.get("ACCOUNT_CODE"), Some(""));
    }

    #[test]
    fn test_unmatched_account_is_empty_not_missing() {
        let cfg = Config::default();
        let mut tables = Tables::builtin();
        tables.piping = Default::default();
        let e = Enricher::new(&cfg, &tables);

        let out = e.enrich(&row(&["1", "GEH-PRJ-A10-1", "1", "4", "SS"]));
        assert_eq!(out.get("ACCOUNT_CODE"), Some(""));
        assert_eq!(
            out.get("ACCOUNT_CODE_DESCRIPTION"),
            Some("Above Ground Large Bore Pipe (Stainless Steel) (2.5\"-6\" Diameter)")
        );
    }

    #[test]
    fn test_existing_columns_replaced_in_place_and_uom_kept() {
        let cfg = Config::default();
        let tables = Tables::builtin();
        let e = Enricher::new(&cfg, &tables);

        let input = Record::from_parts(
            &["MPL", "ItemSourceFile", "AutoCAD_COG_Z", "AutoCAD_Size", "UOM"],
            &["stale", "GEH-PRJ-U71-1", "-2", "1/2", "EA"],
        );
        let out = e.enrich(&input);
        assert_eq!(
            out.columns().collect::<Vec<_>>(),
            vec![
                "MPL",
                "ItemSourceFile",
                "AutoCAD_COG_Z",
                "AutoCAD_Size",
                "UOM",
                "MPL_DESCRIPTION",
                "ACCOUNT_CODE",
                "ACCOUNT_CODE_DESCRIPTION"
            ]
        );
        assert_eq!(out.get("MPL"), Some("U71"));
        assert_eq!(out.get("UOM"), Some("EA"));
        assert_eq!(out.get("ACCOUNT_CODE_DESCRIPTION"), Some("Underground Small Bore Pipe"));

        // a second pass changes nothing
        assert_eq!(e.enrich(&out), out);
    }

    #[test]
    fn test_material_inferred_from_other_columns() {
        let cfg = Config::default();
        let tables = Tables::builtin();
        let e = Enricher::new(&cfg, &tables);

        let r = Record::from_parts(
            &["AutoCAD_COG_Z", "AutoCAD_Size", "MaterialCode", "ItemType"],
            &["3", "1", "A312", "Pipe"],
        );
        assert_eq!(
            e.derive(&r).account_description,
            "Above Ground Small Bore Pipe (All-In) (Stainless Steel)"
        );
    }

    #[test]
    fn test_pressure_pipe_uses_civil3d_info() {
        let cfg = Config::default();
        let tables = Tables::builtin();
        let e = Enricher::new(&cfg, &tables);

        let r = Record::from_parts(
            &["ItemType", "ItemSourceFile", "AutoCAD_COG_Z", "Civil3DInfo"],
            &["Pressure Pipe", "GEH-PRJ-Y99-1", "12.0", "PVC C900 (8\")"],
        );
        let d = e.derive(&r);
        assert!(d.notes.pressure_pipe);
        assert_eq!(
            d.account_description,
            "Underground Large Bore Pipe (PVC) (8\"-12\" Diameter)"
        );
        assert_eq!(d.account_code, "72.09.04.004.02");

        let r = Record::from_parts(
            &["ItemSourceFile", "Civil3DInfo"],
            &["GEH-PRJ-CUW-7", "HDPE DR11 50mm"],
        );
        assert_eq!(
            e.derive(&r).account_description,
            "Underground Small Bore Pipe - HDPE"
        );
    }

    #[test]
    fn test_report_missing_lists_inputs() {
        let cfg = Config {
            report_missing: true,
            ..Config::default()
        };
        let tables = Tables::builtin();
        let e = Enricher::new(&cfg, &tables);

        let d = e.derive(&row(&["1", "GEH-PRJ-A10-1", "", "abc", ""]));
        assert_eq!(d.account_description, "Missing values: Material, Size, COG_Z");
        assert_eq!(d.account_code, "");

        let d = e.derive(&row(&["1", "GEH-PRJ-A10-1", "4", "abc", "SS"]));
        assert_eq!(d.account_description, "Missing values: Size");

        let d = e.derive(&row(&["1", "GEH-PRJ-A10-1", "4", "3", "XX"]));
        assert_eq!(d.account_description, "Above Ground Large Bore Pipe");
    }

    #[test]
    fn test_keep_existing_account_passes_row_through() {
        let cfg = Config {
            keep_existing_account: true,
            ..Config::default()
        };
        let tables = Tables::builtin();
        let e = Enricher::new(&cfg, &tables);

        let coded = Record::from_parts(&["AutoCAD_Size", "ACCOUNT_CODE"], &["4", "99.99"]);
        assert!(e.passes_through(&coded));
        assert_eq!(e.enrich(&coded), coded);

        let blank = Record::from_parts(
            &["AutoCAD_Size", "AutoCAD_PlantMaterial", "ACCOUNT_CODE"],
            &["4", "CS", " "],
        );
        assert!(!e.passes_through(&blank));
        assert_eq!(e.enrich(&blank).get("ACCOUNT_CODE"), Some("72.09.04.002.01"));
    }

    #[test]
    fn test_material_words_inside_item_type_are_not_keys() {
        let cfg = Config::default();
        let tables = Tables::builtin();
        let e = Enricher::new(&cfg, &tables);

        let r = Record::from_parts(
            &["ItemType", "Civil3DInfo"],
            &["Pressure Pipe", "Ductile Iron 300mm"],
        );
        let d = e.derive(&r);
        assert!(d.notes.pressure_pipe);
        assert!(d.notes.material_unknown);
        assert_eq!(d.account_description, "Underground Large Bore Pipe");
        assert_eq!(d.account_code, "");

        let r = Record::from_parts(
            &["AutoCAD_COG_Z", "AutoCAD_Size", "ItemType"],
            &["3", "4", "Process Pipe"],
        );
        let d = e.derive(&r);
        assert!(d.notes.material_unknown);
        assert_eq!(d.account_description, "Above Ground Large Bore Pipe");
        assert_eq!(d.account_code, "");
    }

    #[test]
    fn test_item_type_mode_uses_keyword_accounts() {
        let cfg = Config {
            mode: Mode::ItemType,
            ..Config::default()
        };
        let tables = Tables::builtin();
        let e = Enricher::new(&cfg, &tables);

        let r = Record::from_parts(
            &["ItemSourceFile", "ItemType", "AutoCAD_Size"],
            &["GEH-PRJ-U71-9", "Curtain Wall Mullions: 50 x 150mm", "4"],
        );
        let out = e.enrich(&r);
        assert_eq!(out.get("MPL"), Some("U71"));
        assert_eq!(out.get("MPL_DESCRIPTION"), Some("REACTOR BUILDING STRUCTURE"));
        assert_eq!(out.get("ACCOUNT_CODE"), Some("95.83.08"));
        assert_eq!(out.get("ACCOUNT_CODE_DESCRIPTION"), Some("Building Openings Subcontracts"));
        assert_eq!(out.get("UOM"), Some("EA"));

        let r = Record::from_parts(&["ItemType", "UOM"], &["Topography", "M2"]);
        let d = e.derive(&r);
        assert!(d.notes.account_unmatched);
        assert_eq!(d.account_description, "");
        assert_eq!(d.uom, "M2");
    }

    #[test]
    fn test_skip_reasons() {
        let tables = Tables::builtin();

        let cfg = Config::default();
        let e = Enricher::new(&cfg, &tables);
        let r = Record::from_parts(&["Handle", "ItemType"], &["", "Grids: Grid"]);
        assert_eq!(e.skip_reason(&r), None);

        let cfg = Config {
            mode: Mode::ItemType,
            exclusive_id_columns: vec!["ElementID".into(), "ElementIDValue".into()],
            ..Config::default()
        };
        let e = Enricher::new(&cfg, &tables);
        let header = ["ElementID", "ElementIDValue", "ItemType"];
        let check = |values: [&str; 3]| e.skip_reason(&Record::from_parts(&header, &values));

        assert_eq!(check(["101", "", "Doors: Single"]), None);
        assert_eq!(check(["", "7f3a", "Doors: Single"]), None);
        assert_eq!(check(["", " ", "Doors"]), Some(SkipReason::Identifiers { filled: 0 }));
        assert_eq!(check(["1", "2", "Doors"]), Some(SkipReason::Identifiers { filled: 2 }));
        assert_eq!(
            check(["101", "", "Levels: Level 1"]),
            Some(SkipReason::ItemType("levels:level".into()))
        );

        let no_ids = Record::from_parts(&["ItemType"], &["Doors"]);
        assert_eq!(e.skip_reason(&no_ids), Some(SkipReason::Identifiers { filled: 0 }));

        let cfg = Config {
            skip_without_column: Some("Handle".into()),
            ..Config::default()
        };
        let e = Enricher::new(&cfg, &tables);
        let blank = Record::from_parts(&["Handle"], &["  "]);
        assert_eq!(e.skip_reason(&blank), Some(SkipReason::BlankColumn("Handle".into())));
        assert_eq!(e.skip_reason(&Record::from_parts(&["Other"], &["x"])), None);
    }
}
