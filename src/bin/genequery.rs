//! GeneQuery Binary
//!
//! Loads a sequence table, runs a command script and writes the report.

use std::path::PathBuf;

use clap::Parser;
use genequery::{Config, Dispatcher};
use tracing_subscriber::{fmt, EnvFilter};

/// GeneQuery batch runner
#[derive(Parser, Debug)]
#[command(name = "genequery")]
#[command(about = "Search, diff and mode queries over a run-length encoded protein table")]
#[command(version)]
struct Args {
    /// TOML config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sequence table (protein, organism, encoded sequence)
    #[arg(short, long)]
    sequences: Option<PathBuf>,

    /// Command script
    #[arg(short, long)]
    commands: Option<PathBuf>,

    /// Report file to write
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Author line at the top of the report
    #[arg(long)]
    author: Option<String>,

    /// Title line of the report
    #[arg(long)]
    title: Option<String>,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,genequery=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("GeneQuery v{}", genequery::VERSION);

    let config = match build_config(args) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Sequence table: {}", config.sequences_path.display());
    tracing::info!("Command script: {}", config.commands_path.display());
    tracing::info!("Report file: {}", config.output_path.display());

    // Load table
    let dispatcher = match Dispatcher::open(config) {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("Failed to load sequences: {}", e);
            std::process::exit(1);
        }
    };

    // Run batch
    if let Err(e) = dispatcher.run_files() {
        tracing::error!("Batch failed: {}", e);
        std::process::exit(1);
    }
}

/// Layer CLI flags over the config file (or defaults)
fn build_config(args: Args) -> genequery::Result<Config> {
    let base = match &args.config {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::default(),
    };

    let mut builder = base.into_builder();
    if let Some(path) = args.sequences {
        builder = builder.sequences_path(path);
    }
    if let Some(path) = args.commands {
        builder = builder.commands_path(path);
    }
    if let Some(path) = args.output {
        builder = builder.output_path(path);
    }
    if let Some(author) = args.author {
        builder = builder.author(author);
    }
    if let Some(title) = args.title {
        builder = builder.title(title);
    }

    let config = builder.build();
    config.validate()?;
    Ok(config)
}
