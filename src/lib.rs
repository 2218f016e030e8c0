//! # Internship Insights
//!
//! Synthetic internship application data and a single-page trend dashboard.
//!
//! ## Features
//!
//! - **Dataset generation**: weighted sampling over a fixed set of domains,
//!   with emerging domains boosted in later years
//! - **Flat-file handoff**: one CSV file connects the generator and dashboard
//! - **Aggregation**: domain popularity and yearly trends
//! - **Dashboard**: static HTML page with server-rendered SVG charts
//!
//! ## Modules
//!
//! - [`dataset`]: Record types, weights, generator and CSV writer
//! - [`analytics`]: CSV loading and aggregates
//! - [`dashboard`]: Page building and HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use internship_insights::analytics::{DomainPopularity, YearlyTrend};
//! use internship_insights::dashboard::build_page;
//! use internship_insights::dataset::{DatasetGenerator, GeneratorSettings};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let records = DatasetGenerator::new(GeneratorSettings::default())?.generate();
//!
//!     let popularity = DomainPopularity::from_records(&records);
//!     let trend = YearlyTrend::from_records(&records);
//!
//!     let html = build_page(&popularity, &trend).render();
//!     println!("Rendered {} bytes for {} records", html.len(), records.len());
//!
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod logging;

// Re-export top-level types for convenience
pub use dataset::{
    boosted_weights, write_csv, ApplicationRecord, ApplicationStatus, BoostPolicy,
    DatasetError, DatasetGenerator, DatasetResult, Domain, DomainWeights, GeneratorSettings,
};

pub use analytics::{load_records, DomainPopularity, LoadedRecord, YearlyTrend};

pub use dashboard::{build_page, build_router, serve, AppState, DashboardError, DashboardPage};

pub use config::{Config, ConfigError, DashboardConfig, GeneratorConfig, LoggingConfig};
