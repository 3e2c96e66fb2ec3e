pub mod batch;
pub mod config;
pub mod enrich;
pub mod error;
pub mod record;
pub mod tables;

pub use batch::{compute_output_path, enrich_csv, BatchStats};
pub use config::{Config, Mode};
pub use enrich::Enricher;
pub use error::PipespecError;
pub use tables::Tables;
