//! Internship dataset generator
//!
//! Run with: cargo run --bin internship-generate
//!
//! Writes `internship_data.csv` (5000 records by default) and exits. Flags and
//! `INTERNSHIP_*` environment variables override the configuration.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use internship_insights::config::{generate_default_config, Config};
use internship_insights::dataset::{write_csv, DatasetGenerator};
use internship_insights::logging::init_tracing;

#[derive(Parser)]
#[command(name = "internship-generate")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a synthetic internship application dataset")]
pub struct Cli {
    /// Config file (default: search standard locations)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output CSV path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of records to generate
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// RNG seed for a reproducible dataset
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a default config file and exit
    #[arg(long)]
    pub print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let (mut config, config_source) = Config::load_default(cli.config.as_deref())?;
    if let Some(output) = cli.output {
        config.generator.output_path = output.to_string_lossy().to_string();
    }
    if let Some(count) = cli.count {
        config.generator.record_count = count;
    }
    if cli.seed.is_some() {
        config.generator.seed = cli.seed;
    }

    init_tracing(&config.logging);
    match &config_source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::debug!("Using default config with environment overrides"),
    }
    tracing::info!("Generating synthetic dataset...");

    let settings = config.generator.settings();
    let mut generator = match config.generator.seed {
        Some(seed) => DatasetGenerator::with_seed(settings, seed),
        None => DatasetGenerator::new(settings),
    }
    .context("Invalid generator configuration")?;

    let records = generator.generate();

    let path = &config.generator.output_path;
    write_csv(path, &records).with_context(|| format!("Failed to write {}", path))?;

    tracing::info!(
        path = %path,
        records = records.len(),
        seed = ?config.generator.seed,
        "Dataset written"
    );
    println!(
        "Successfully created '{}' with {} records.",
        path,
        records.len()
    );

    Ok(())
}
