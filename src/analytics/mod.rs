//! Dataset analytics
//!
//! Loads the generated CSV file and computes the aggregates the dashboard
//! plots.

pub mod aggregate;
pub mod loader;

pub use aggregate::{
    DomainCount, DomainEvent, DomainPopularity, TrendSeries, YearlyCount, YearlyTrend,
    COUNT_LABEL,
};
pub use loader::{load_records, parse_date, read_records, LoadedRecord};
