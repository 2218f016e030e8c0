//! Application State
//!
//! Everything the handlers serve is computed here once, at startup, and
//! shared read-only behind an `Arc`.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::analytics::{load_records, DomainEvent, DomainPopularity, YearlyTrend};
use crate::config::DashboardConfig;

use super::error::DashboardResult;
use super::page::build_page;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Total applications per domain
    pub popularity: Arc<DomainPopularity>,
    /// Applications per (year, domain)
    pub trend: Arc<YearlyTrend>,
    /// Pre-rendered dashboard HTML
    pub page_html: Arc<str>,
    /// Number of records loaded
    pub record_count: usize,
    /// Server configuration
    pub config: Arc<DashboardConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Aggregate the records and render the page
    pub fn from_records<R: DomainEvent>(records: &[R], config: DashboardConfig) -> Self {
        let popularity = DomainPopularity::from_records(records);
        let trend = YearlyTrend::from_records(records);
        let page_html: Arc<str> = build_page(&popularity, &trend).render().into();

        tracing::info!(
            records = records.len(),
            domains = popularity.len(),
            years = trend.years().len(),
            "Dashboard aggregates computed"
        );

        Self {
            popularity: Arc::new(popularity),
            trend: Arc::new(trend),
            page_html,
            record_count: records.len(),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Load the configured data file; any load failure is returned to the caller
    pub fn load(config: DashboardConfig) -> DashboardResult<Self> {
        let records = load_records(Path::new(&config.data_path))?;
        Ok(Self::from_records(&records, config))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardError;
    use crate::dataset::{write_csv, DatasetGenerator, GeneratorSettings};
    use tempfile::tempdir;

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("internship_data.csv");
        let records = DatasetGenerator::with_seed(GeneratorSettings::default().record_count(400), 4)
            .unwrap()
            .generate();
        write_csv(&path, &records).unwrap();

        let config = DashboardConfig {
            data_path: path.to_string_lossy().to_string(),
            ..Default::default()
        };
        let state = AppState::load(config).unwrap();

        assert_eq!(state.record_count, 400);
        assert_eq!(state.popularity.total(), 400);
        assert_eq!(state.trend.total(), 400);
        assert!(state.page_html.contains("MITS Internship Engagement Dashboard"));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempdir().unwrap();
        let config = DashboardConfig {
            data_path: dir.path().join("missing.csv").to_string_lossy().to_string(),
            ..Default::default()
        };
        assert!(matches!(AppState::load(config), Err(DashboardError::Dataset(_))));
    }
}
