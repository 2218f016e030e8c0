//! Aggregates behind the dashboard charts
//!
//! - `DomainPopularity`: total applications per domain (bar chart)
//! - `YearlyTrend`: applications per (year, domain) (line chart)
//!
//! Both are computed once from the loaded records and never updated. Domains
//! are keyed by their label, so a file carrying a label outside the
//! generator's table is still counted.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::dataset::ApplicationRecord;

/// Axis label for application counts
pub const COUNT_LABEL: &str = "Number of Applications";

/// A record the aggregates can count
pub trait DomainEvent {
    /// Domain label as written in the data file
    fn domain_label(&self) -> &str;

    /// Calendar year of the application
    fn year(&self) -> i32;
}

impl DomainEvent for ApplicationRecord {
    fn domain_label(&self) -> &str {
        self.domain.label()
    }

    fn year(&self) -> i32 {
        ApplicationRecord::year(self)
    }
}

/// Application count for one domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: usize,
}

/// Total applications per domain, ordered by count ascending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainPopularity {
    rows: Vec<DomainCount>,
}

impl DomainPopularity {
    /// Count records per domain. Domains with no records are omitted.
    pub fn from_records<R: DomainEvent>(records: &[R]) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for record in records {
            *counts.entry(record.domain_label()).or_default() += 1;
        }

        let mut rows: Vec<DomainCount> = counts
            .into_iter()
            .map(|(domain, count)| DomainCount {
                domain: domain.to_string(),
                count,
            })
            .collect();
        // Stable sort keeps equal counts in label order
        rows.sort_by_key(|row| row.count);

        Self { rows }
    }

    /// Rows in display order (smallest count first)
    pub fn rows(&self) -> &[DomainCount] {
        &self.rows
    }

    pub fn count(&self, domain: &str) -> Option<usize> {
        self.rows
            .iter()
            .find(|row| row.domain == domain)
            .map(|row| row.count)
    }

    pub fn total(&self) -> usize {
        self.rows.iter().map(|row| row.count).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Application count for one (year, domain) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyCount {
    pub year: i32,
    pub domain: String,
    pub count: usize,
}

/// One line of the trend chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendSeries {
    pub domain: String,
    /// `(year, count)` ordered by year
    pub points: Vec<(i32, usize)>,
}

/// Applications per (year, domain)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearlyTrend {
    counts: BTreeMap<(i32, String), usize>,
}

impl YearlyTrend {
    pub fn from_records<R: DomainEvent>(records: &[R]) -> Self {
        let mut counts: BTreeMap<(i32, String), usize> = BTreeMap::new();
        for record in records {
            *counts
                .entry((record.year(), record.domain_label().to_string()))
                .or_default() += 1;
        }
        Self { counts }
    }

    /// Count for a pair, `None` if no record has it
    pub fn get(&self, year: i32, domain: &str) -> Option<usize> {
        self.counts.get(&(year, domain.to_string())).copied()
    }

    /// All pairs ordered by year, then domain label
    pub fn rows(&self) -> Vec<YearlyCount> {
        self.counts
            .iter()
            .map(|((year, domain), &count)| YearlyCount {
                year: *year,
                domain: domain.clone(),
                count,
            })
            .collect()
    }

    /// Distinct years, ascending
    pub fn years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.counts.keys().map(|(year, _)| *year).collect();
        years.into_iter().collect()
    }

    /// One series per domain in label order, points ordered by year
    pub fn series(&self) -> Vec<TrendSeries> {
        let mut by_domain: BTreeMap<&str, Vec<(i32, usize)>> = BTreeMap::new();
        for ((year, domain), &count) in &self.counts {
            by_domain.entry(domain).or_default().push((*year, count));
        }

        by_domain
            .into_iter()
            .map(|(domain, points)| TrendSeries {
                domain: domain.to_string(),
                points,
            })
            .collect()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of (year, domain) pairs
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
