// src/batch/mod.rs
//! Reads a CSV file, enriches every row, writes the result next to it.

pub mod encoding;
mod stats;

pub use stats::BatchStats;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use self::encoding::{SourceEncoding, UTF8_BOM};
use crate::{config::OutputColumns, enrich::Enricher, error::PipespecError, record::Record};

/// `<input stem>_enriched<input extension>` next to `input`, unless `output`
/// is given.
pub fn compute_output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    if let Some(out) = output {
        return out.to_path_buf();
    }
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let name = match input.extension() {
        Some(ext) => format!("{}_enriched.{}", stem, ext.to_string_lossy()),
        None => format!("{}_enriched", stem),
    };
    input.with_file_name(name)
}

/// The input header with each derived column appended unless already present.
pub fn ensure_fieldnames_with_appends(original: &[String], output: &OutputColumns) -> Vec<String> {
    let mut header = original.to_vec();
    for name in output.names() {
        if !header.iter().any(|h| h == name) {
            header.push(name.to_string());
        }
    }
    header
}

/// Enrich `input` into `output`. The output only appears once every row has
/// been written.
#[tracing::instrument(level = "info", skip_all, fields(input = %input.display()))]
pub fn enrich_csv(input: &Path, output: &Path, enricher: &Enricher) -> Result<BatchStats> {
    let config = enricher.config();
    let bytes = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let (text, source_encoding) = encoding::decode(bytes);
    match source_encoding {
        SourceEncoding::Latin1 => warn!("input is not valid UTF-8; decoded as Latin-1"),
        SourceEncoding::Utf8Bom => debug!("stripped UTF-8 byte-order mark"),
        SourceEncoding::Utf8 => {}
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let header: Vec<String> = rdr
        .headers()
        .with_context(|| format!("reading header of {}", input.display()))?
        .iter()
        .map(str::to_string)
        .collect();
    if header.iter().all(|h| h.trim().is_empty()) {
        return Err(PipespecError::MissingHeader(input.display().to_string()).into());
    }

    let out_header = ensure_fieldnames_with_appends(&header, &config.output);
    let width = out_header.len();

    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in {}", dir.display()))?;
    if config.write_bom {
        tmp.write_all(UTF8_BOM)?;
    }

    let mut stats = BatchStats::default();
    {
        let mut wtr = WriterBuilder::new().from_writer(tmp.as_file_mut());
        wtr.write_record(&out_header)?;

        for (idx, result) in rdr.records().enumerate() {
            let row = idx + 1;
            let raw = result.with_context(|| format!("CSV parse error at row {}", row))?;
            stats.rows_read += 1;
            if raw.len() > header.len() {
                debug!(row, extra = raw.len() - header.len(), "fields beyond the header dropped");
            }
            let values: Vec<&str> = raw.iter().collect();
            let record = Record::from_parts(&header[..], &values[..]);

            if let Some(reason) = enricher.skip_reason(&record) {
                debug!(row, %reason, "skipping row");
                stats.rows_skipped += 1;
                continue;
            }

            let enriched = if enricher.passes_through(&record) {
                stats.passed_through += 1;
                record
            } else {
                let derived = enricher.derive(&record);
                log_row_notes(row, &derived);
                stats.record(&derived.notes);
                enricher.apply(&record, &derived)
            };

            wtr.write_record(enriched.padded_values(width))
                .with_context(|| format!("writing row {}", row))?;
            stats.rows_written += 1;
        }
        wtr.flush().context("flushing output")?;
    }

    tmp.persist(output)
        .map_err(|e| e.error)
        .with_context(|| format!("writing {}", output.display()))?;
    info!(output = %output.display(), "wrote enriched CSV");
    stats.log_summary();
    Ok(stats)
}

fn log_row_notes(row: usize, derived: &crate::enrich::Derived) {
    let notes = &derived.notes;
    if notes.pressure_pipe {
        debug!(row, "pressure pipe: geometry from Civil 3D info");
    }
    if notes.elevation_unparsed {
        debug!(row, "elevation missing or unparseable");
    }
    if notes.size_unparsed {
        debug!(row, "size missing or unparseable");
    }
    if notes.material_unknown {
        debug!(row, "material unknown");
    }
    if notes.mpl_unknown {
        debug!(row, mpl = %derived.mpl, "no MPL description");
    }
    if notes.account_unmatched {
        debug!(row, spec = %derived.account_description, "no account code");
    }
}
