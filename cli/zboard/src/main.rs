//! zboard — generate Zephyr devicetree board files from a LiteX SVD export.

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

#[derive(Parser)]
#[command(
    name = "zboard",
    version,
    about = "Generate Zephyr board files from a LiteX SVD export"
)]
struct Cli {
    /// Path to the SVD export of the SoC
    svd: PathBuf,

    /// Write the devicetree to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = SimpleLogger::new().with_level(level).init();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let soc = zboard_svd::parse_file(&cli.svd)
        .with_context(|| format!("failed to parse {}", cli.svd.display()))?;
    log::info!(
        "parsed SoC {} ({}): {} peripherals, {} usable memory regions",
        soc.name,
        soc.vendor,
        soc.peripherals().len(),
        soc.usable_memory_regions().len()
    );

    let document = zboard_export::export(&soc).context("failed to generate devicetree")?;

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{document}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{document}"),
    }

    Ok(())
}
