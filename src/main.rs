//! Command-line entry point for the IPTWP PDML signal viewer.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::{info, LevelFilter};

use iptwp_plot::{extract, pdml, run_viewer, ViewerConfig};

/// Plot process-variable signals from IPTWP packets in a PDML export.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the PDML export file.
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Logging setup; RUST_LOG overrides the info default.
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    info!("loading PDML export {}", args.file.display());
    let text = pdml::read_export(&args.file)
        .with_context(|| format!("failed to load '{}'", args.file.display()))?;
    let doc = pdml::parse(&text).context("failed to parse PDML")?;
    let extraction = extract::extract(&doc).context("failed to extract IPTWP signals")?;
    info!(
        "extracted {} signals from {} packets",
        extraction.signal_count(),
        extraction.packet_count()
    );

    run_viewer(extraction, ViewerConfig::default())
        .map_err(|err| anyhow::anyhow!("viewer failed: {err}"))
}
