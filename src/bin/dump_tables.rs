use anyhow::Result;
use clap::Parser;
use pipespec::{Config, Tables};

#[derive(Parser)]
#[command(name = "dump-tables")]
#[command(about = "Print the built-in lookup tables (or the default config) as YAML")]
struct Args {
    /// Print the default configuration instead of the tables
    #[arg(long)]
    config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let yaml = if args.config {
        serde_yaml::to_string(&Config::default())?
    } else {
        serde_yaml::to_string(&Tables::builtin())?
    };
    print!("{}", yaml);
    Ok(())
}
