//! storeshots - generate store listing assets

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use storeshots::{Exporter, StoreshotsConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "storeshots")]
#[command(about = "Generate store listing artwork for the Events app", long_about = None)]
#[command(version)]
struct Cli {
    /// Project root containing assets/icon.png
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Configuration file (defaults to <root>/storeshots.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => StoreshotsConfig::load(path)?,
        None => StoreshotsConfig::load_from_dir(&cli.root)?,
    };

    let mut exporter = Exporter::new(&cli.root, &config).context("Invalid configuration")?;
    let report = exporter
        .run()
        .context("Failed to generate store assets")?;

    println!("Generated assets:");
    for path in &report.generated {
        println!(" - {}", exporter.display_path(path));
    }
    println!("Zip package: {}", exporter.display_path(&report.archive));

    Ok(())
}

/// Log to stderr so stdout carries only the asset list
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
