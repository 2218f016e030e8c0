//! Core data types for the internship application dataset
//!
//! This module defines the fundamental types shared by the generator and the
//! dashboard:
//! - `ApplicationRecord`: A single synthetic internship application
//! - `Domain`: The fixed set of internship subject areas
//! - `ApplicationStatus`: Participation outcome of an application

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Internship subject area the generator samples from
///
/// Declaration order is the order of the base weight table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    SoftwareEngineering,
    DataScience,
    AiMlEngineering,
    CloudComputing,
    Cybersecurity,
    UiUxDesign,
    DevOps,
}

impl Domain {
    /// All domains, in base weight table order
    pub const ALL: [Domain; 7] = [
        Domain::SoftwareEngineering,
        Domain::DataScience,
        Domain::AiMlEngineering,
        Domain::CloudComputing,
        Domain::Cybersecurity,
        Domain::UiUxDesign,
        Domain::DevOps,
    ];

    /// Human-readable label, as written to the CSV file
    pub fn label(&self) -> &'static str {
        match self {
            Domain::SoftwareEngineering => "Software Engineering",
            Domain::DataScience => "Data Science",
            Domain::AiMlEngineering => "AI/ML Engineering",
            Domain::CloudComputing => "Cloud Computing",
            Domain::Cybersecurity => "Cybersecurity",
            Domain::UiUxDesign => "UI/UX Design",
            Domain::DevOps => "DevOps",
        }
    }

    /// Position of this domain in [`Domain::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a domain label (exact match, surrounding whitespace ignored)
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Participation status of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationStatus {
    Applied,
    CompletedInternship,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::CompletedInternship => "Completed Internship",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single synthetic internship application
///
/// Field order matches the CSV column order:
/// `application_id,domain,application_date,status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRecord {
    /// Sequential identifier, starting at the generator's first id
    pub application_id: u64,
    /// Internship subject area
    pub domain: Domain,
    /// Calendar date of the application (written as `YYYY-MM-DD`)
    pub application_date: NaiveDate,
    /// Participation outcome
    pub status: ApplicationStatus,
}

impl ApplicationRecord {
    pub fn new(
        application_id: u64,
        domain: Domain,
        application_date: NaiveDate,
        status: ApplicationStatus,
    ) -> Self {
        Self {
            application_id,
            domain,
            application_date,
            status,
        }
    }

    /// Calendar year of the application date
    pub fn year(&self) -> i32 {
        self.application_date.year()
    }
}
