//! Structural errors that abort a run.
//!
//! Per-field problems (unparseable size, unknown codes) never surface here;
//! they degrade the affected output field to empty.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipespecError {
    /// The input file has no header row.
    #[error("input CSV has no header row: {0}")]
    MissingHeader(String),

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),
}
