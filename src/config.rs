// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fs, path::Path};

use crate::error::PipespecError;

/// Run configuration. Every field has a default, so a YAML file only needs
/// the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which account derivation rows go through.
    pub mode: Mode,
    pub columns: InputColumns,
    pub output: OutputColumns,
    pub default_uom: String,
    /// Above ground when the elevation is past this boundary.
    pub ground_level: Threshold,
    /// Small bore when the size is below this boundary.
    pub small_bore: Threshold,
    /// Ordered, contiguous size buckets; the last one must be unbounded.
    pub size_buckets: Vec<SizeBucket>,
    pub pressure_pipe: PressurePipeRule,
    /// Replace the account description with `Missing values: ...` when
    /// elevation or size cannot be read.
    pub report_missing: bool,
    /// Write rows that already carry an account code unchanged.
    pub keep_existing_account: bool,
    /// Drop rows whose named column is present in the header but blank.
    pub skip_without_column: Option<String>,
    /// When non-empty, keep only rows where exactly one of these identifier
    /// columns is filled in. Rows of a file carrying none of them are dropped.
    pub exclusive_id_columns: Vec<String>,
    /// Prefix the output with a UTF-8 byte-order mark.
    pub write_bom: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            columns: InputColumns::default(),
            output: OutputColumns::default(),
            default_uom: "LM".to_string(),
            ground_level: Threshold {
                value: 0.0,
                inclusive: false,
            },
            small_bore: Threshold {
                value: 2.0,
                inclusive: true,
            },
            size_buckets: default_size_buckets(),
            pressure_pipe: PressurePipeRule::default(),
            report_missing: false,
            keep_existing_account: false,
            skip_without_column: None,
            exclusive_id_columns: Vec::new(),
            write_bom: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Pipe runs: account from placement, bore, material and size.
    #[default]
    Pipes,
    /// Other model items: account from keywords in `ItemType`.
    ItemType,
}

/// Names of the input columns the enrichment reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputColumns {
    pub item_source_file: String,
    pub elevation: String,
    pub size: String,
    pub material: String,
    pub material_code: String,
    pub item_material: String,
    pub item_type: String,
    pub civil3d_info: String,
}

impl Default for InputColumns {
    fn default() -> Self {
        Self {
            item_source_file: "ItemSourceFile".to_string(),
            elevation: "AutoCAD_COG_Z".to_string(),
            size: "AutoCAD_Size".to_string(),
            material: "AutoCAD_PlantMaterial".to_string(),
            material_code: "MaterialCode".to_string(),
            item_material: "ItemMaterial".to_string(),
            item_type: "ItemType".to_string(),
            civil3d_info: "Civil3DInfo".to_string(),
        }
    }
}

/// Names of the five derived columns, in the order they are appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputColumns {
    pub mpl: String,
    pub mpl_description: String,
    pub account_code: String,
    pub account_description: String,
    pub uom: String,
}

impl Default for OutputColumns {
    fn default() -> Self {
        Self {
            mpl: "MPL".to_string(),
            mpl_description: "MPL_DESCRIPTION".to_string(),
            account_code: "ACCOUNT_CODE".to_string(),
            account_description: "ACCOUNT_CODE_DESCRIPTION".to_string(),
            uom: "UOM".to_string(),
        }
    }
}

impl OutputColumns {
    pub fn names(&self) -> [&str; 5] {
        [
            &self.mpl,
            &self.mpl_description,
            &self.account_code,
            &self.account_description,
            &self.uom,
        ]
    }
}

/// A numeric boundary whose comparison at the boundary value itself is
/// configured rather than hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub value: f64,
    /// Whether a value equal to `value` counts as past the boundary.
    #[serde(default)]
    pub inclusive: bool,
}

impl Threshold {
    /// `x > value`, or `x >= value` when inclusive.
    pub fn is_above(&self, x: f64) -> bool {
        x > self.value || (self.inclusive && x == self.value)
    }

    /// `x < value`, or `x <= value` when inclusive.
    pub fn is_below(&self, x: f64) -> bool {
        x < self.value || (self.inclusive && x == self.value)
    }
}

/// One size range. Covers `(previous upper, upper]`; `upper: None` is the
/// unbounded top bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeBucket {
    pub label: String,
    #[serde(default)]
    pub upper: Option<f64>,
}

impl SizeBucket {
    fn bounded(label: &str, upper: f64) -> Self {
        Self {
            label: label.to_string(),
            upper: Some(upper),
        }
    }
}

/// Nominal pipe sizes fall on the catalogue steps, so each bucket's upper
/// bound sits between the last size it names and the next bucket's first.
fn default_size_buckets() -> Vec<SizeBucket> {
    vec![
        SizeBucket::bounded("0-2\"", 2.0),
        SizeBucket::bounded("2.5\"-6\"", 7.0),
        SizeBucket::bounded("8\"-12\"", 13.0),
        SizeBucket::bounded("14\"-24\"", 25.0),
        SizeBucket::bounded("26\"-40\"", 41.0),
        SizeBucket::bounded("42\"-54\"", 57.0),
        SizeBucket::bounded("60\"-72\"", 73.0),
        SizeBucket::bounded("74\"-90\"", 90.0),
        SizeBucket {
            label: ">90\"".to_string(),
            upper: None,
        },
    ]
}

/// Which rows are buried pressure pipes whose geometry comes from the
/// Civil 3D info column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressurePipeRule {
    pub item_types: Vec<String>,
    pub mpl_codes: Vec<String>,
}

impl Default for PressurePipeRule {
    fn default() -> Self {
        Self {
            item_types: vec!["Pressure Pipe".to_string()],
            mpl_codes: vec!["CUW".to_string()],
        }
    }
}

impl PressurePipeRule {
    pub fn matches(&self, item_type: &str, mpl: &str) -> bool {
        self.item_types.iter().any(|t| t == item_type)
            || (!mpl.is_empty() && self.mpl_codes.iter().any(|c| c == mpl))
    }
}

impl Config {
    /// Parse a YAML document, filling unspecified keys with defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg: Config = serde_yaml::from_str(text).context("parsing config YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("loading config {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), PipespecError> {
        for (name, t) in [("ground_level", self.ground_level), ("small_bore", self.small_bore)] {
            if !t.value.is_finite() {
                return Err(PipespecError::Config(format!(
                    "{} threshold must be finite, got {}",
                    name, t.value
                )));
            }
        }

        let (last, rest) = self
            .size_buckets
            .split_last()
            .ok_or_else(|| PipespecError::Config("size_buckets is empty".into()))?;
        if last.upper.is_some() {
            return Err(PipespecError::Config(
                "the last size bucket must be unbounded (no `upper`)".into(),
            ));
        }
        let mut prev = f64::NEG_INFINITY;
        for bucket in rest {
            let upper = bucket.upper.ok_or_else(|| {
                PipespecError::Config(format!(
                    "size bucket `{}` is unbounded but is not the last bucket",
                    bucket.label
                ))
            })?;
            if !upper.is_finite() || upper <= prev {
                return Err(PipespecError::Config(format!(
                    "size bucket upper bounds must be finite and strictly increasing (`{}` has {})",
                    bucket.label, upper
                )));
            }
            prev = upper;
        }
        if let Some(b) = self.size_buckets.iter().find(|b| b.label.trim().is_empty()) {
            return Err(PipespecError::Config(format!(
                "size bucket with upper {:?} has an empty label",
                b.upper
            )));
        }

        let names = self.output.names();
        let distinct: HashSet<&str> = names.iter().copied().collect();
        if distinct.len() != names.len() || names.iter().any(|n| n.is_empty()) {
            return Err(PipespecError::Config(format!(
                "output column names must be non-empty and distinct: {:?}",
                names
            )));
        }

        Ok(())
    }
}
