//! Data Transfer Objects
//!
//! Response types for the JSON endpoints. These mirror the aggregates the
//! page is rendered from.

use serde::Serialize;

use crate::analytics::{DomainCount, TrendSeries, YearlyCount};

// ============================================
// AGGREGATE DTOs
// ============================================

/// Domain popularity response
#[derive(Debug, Serialize)]
pub struct PopularityResponse {
    /// Label of the count column
    pub label: String,
    /// Rows ordered by count ascending
    pub rows: Vec<DomainCount>,
    /// Sum of all counts
    pub total: usize,
}

/// Yearly trend response
#[derive(Debug, Serialize)]
pub struct TrendResponse {
    /// Distinct years, ascending
    pub years: Vec<i32>,
    /// Flat (year, domain, count) rows
    pub rows: Vec<YearlyCount>,
    /// One series per domain
    pub series: Vec<TrendSeries>,
    /// Sum of all counts
    pub total: usize,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,
    /// Number of records the charts were built from
    pub records: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
