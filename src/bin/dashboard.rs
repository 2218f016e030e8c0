//! Internship dashboard server
//!
//! Run with: cargo run --bin internship-dashboard
//!
//! Loads the generated CSV file, renders the page once and serves it until
//! Ctrl+C or SIGTERM.
//!
//! # Configuration
//!
//! Environment variables:
//! - `INTERNSHIP_DATA`: CSV file to load (default: internship_data.csv)
//! - `INTERNSHIP_HOST`: Host to bind to (default: 127.0.0.1)
//! - `INTERNSHIP_PORT` or `PORT`: Port to listen on (default: 8050)
//! - `RUST_LOG`: Log filter (default: configured level)

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use internship_insights::config::Config;
use internship_insights::dashboard::{serve, AppState};
use internship_insights::logging::init_tracing;

#[derive(Parser)]
#[command(name = "internship-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the internship engagement dashboard")]
pub struct Cli {
    /// Config file (default: search standard locations)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// CSV file produced by internship-generate
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_source) = Config::load_default(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.dashboard.data_path = data.to_string_lossy().to_string();
    }
    if let Some(host) = cli.host {
        config.dashboard.host = host;
    }
    if let Some(port) = cli.port {
        config.dashboard.port = port;
    }

    init_tracing(&config.logging);
    tracing::info!("Starting internship dashboard v{}", env!("CARGO_PKG_VERSION"));
    match &config_source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::debug!("Using default config with environment overrides"),
    }
    tracing::info!("Data file: {:?}", config.dashboard.data_path);

    let state = AppState::load(config.dashboard.clone())
        .with_context(|| format!("Failed to load {}", config.dashboard.data_path))?;

    serve(state, &config.dashboard).await?;

    tracing::info!("Internship dashboard stopped");
    Ok(())
}
