use anyhow::{Context, Result};
use clap::Parser;
use pipespec::{compute_output_path, enrich_csv, Config, Enricher, Tables};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "pipespec")]
#[command(about = "Append MPL and piping account codes to a CSV export of pipe runs")]
struct Args {
    /// Input CSV file
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV file (default: <input stem>_enriched.<ext> next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML configuration (column names, thresholds, size buckets, options)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// YAML lookup tables layered over the built-in ones
    #[arg(short, long)]
    tables: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // ─── 1) init logging ─────────────────────────────────────────────
    let default_level = if args.verbose { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) configuration & tables ───────────────────────────────────
    let config = match &args.config {
        Some(path) => Config::from_yaml_file(path)?,
        None => Config::default(),
    };
    let tables = Tables::load(args.tables.as_deref())?;
    let enricher = Enricher::new(&config, &tables);

    // ─── 3) enrich ───────────────────────────────────────────────────
    if !args.input.is_file() {
        return Err(anyhow::anyhow!(
            "Input file does not exist: {}",
            args.input.display()
        ));
    }
    let output = compute_output_path(&args.input, args.output.as_deref());
    info!("Input: {}", args.input.display());
    info!("Output: {}", output.display());

    let stats = enrich_csv(&args.input, &output, &enricher)
        .with_context(|| format!("enriching {}", args.input.display()))?;
    info!(
        "Wrote enriched CSV: {} ({} rows)",
        output.display(),
        stats.rows_written
    );
    Ok(())
}
