//! Synthetic dataset generator
//!
//! Produces `ApplicationRecord`s by sampling a year, a domain from the
//! (possibly boosted) weight table for that year, a date within the year and
//! a participation status. Each generator owns its RNG, so seeded runs are
//! reproducible and generators never share state.

use chrono::{Datelike, NaiveDate};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::{DatasetError, DatasetResult};
use super::types::{ApplicationRecord, ApplicationStatus, Domain};
use super::weights::{BoostPolicy, DomainWeights};

/// Highest day-of-month ever generated, valid in every month
pub const MAX_DAY_OF_MONTH: u32 = 28;

/// Settings for one generator run
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    /// Number of records to produce
    pub record_count: usize,
    /// Id of the first record; later ids increase by one
    pub first_id: u64,
    /// Earliest application date (inclusive)
    pub start_date: NaiveDate,
    /// Latest application date (inclusive)
    pub end_date: NaiveDate,
    /// Base selection weights
    pub base_weights: DomainWeights,
    /// Year-dependent boost for emerging domains
    pub boost: BoostPolicy,
    /// Probability that a record is "Completed Internship"
    pub completion_rate: f64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            record_count: 5000,
            first_id: 10000,
            start_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 31).unwrap_or_default(),
            base_weights: DomainWeights::base(),
            boost: BoostPolicy::default(),
            completion_rate: 0.3,
        }
    }
}

impl GeneratorSettings {
    /// Builder method: set the record count
    pub fn record_count(mut self, count: usize) -> Self {
        self.record_count = count;
        self
    }

    /// Builder method: set the date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Builder method: set the boost policy
    pub fn boost(mut self, boost: BoostPolicy) -> Self {
        self.boost = boost;
        self
    }

    /// Check that the settings describe a non-empty sample space
    pub fn validate(&self) -> DatasetResult<()> {
        if self.record_count == 0 {
            return Err(DatasetError::InvalidSettings(
                "record_count must be positive".to_string(),
            ));
        }

        if self.start_date > self.end_date {
            return Err(DatasetError::InvalidSettings(format!(
                "start_date {} is after end_date {}",
                self.start_date, self.end_date
            )));
        }

        if self.start_date.day() > MAX_DAY_OF_MONTH {
            return Err(DatasetError::InvalidSettings(format!(
                "start_date day-of-month must be at most {}",
                MAX_DAY_OF_MONTH
            )));
        }

        if self.first_id.checked_add(self.record_count as u64).is_none() {
            return Err(DatasetError::InvalidSettings(format!(
                "first_id {} leaves no room for {} sequential ids",
                self.first_id, self.record_count
            )));
        }

        if !(0.0..=1.0).contains(&self.completion_rate) {
            return Err(DatasetError::InvalidSettings(format!(
                "completion_rate must be within [0, 1], got {}",
                self.completion_rate
            )));
        }

        Ok(())
    }
}

/// Generates synthetic application records
pub struct DatasetGenerator {
    settings: GeneratorSettings,
    rng: StdRng,
    /// Domain sampler per year, indexed by `year - start_date.year()`
    samplers: Vec<WeightedIndex<f64>>,
}

impl DatasetGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new(settings: GeneratorSettings) -> DatasetResult<Self> {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Create a reproducible generator
    pub fn with_seed(settings: GeneratorSettings, seed: u64) -> DatasetResult<Self> {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: GeneratorSettings, rng: StdRng) -> DatasetResult<Self> {
        settings.validate()?;

        let samplers = (settings.start_date.year()..=settings.end_date.year())
            .map(|year| {
                let weights = settings.boost.apply(&settings.base_weights, year);
                WeightedIndex::new(weights.as_slice()).map_err(|e| {
                    DatasetError::InvalidSettings(format!("weights for {}: {}", year, e))
                })
            })
            .collect::<DatasetResult<Vec<_>>>()?;

        Ok(Self {
            settings,
            rng,
            samplers,
        })
    }

    /// Generate `record_count` records with sequential ids
    pub fn generate(&mut self) -> Vec<ApplicationRecord> {
        let count = self.settings.record_count;
        tracing::debug!(count, "Generating application records");

        (0..count).map(|i| self.next_record(i)).collect()
    }

    fn next_record(&mut self, index: usize) -> ApplicationRecord {
        let year = self
            .rng
            .gen_range(self.settings.start_date.year()..=self.settings.end_date.year());

        let domain = self.sample_domain(year);
        let application_date = self.sample_date(year);
        let status = if self.rng.gen_bool(self.settings.completion_rate) {
            ApplicationStatus::CompletedInternship
        } else {
            ApplicationStatus::Applied
        };

        ApplicationRecord::new(
            self.settings.first_id + index as u64,
            domain,
            application_date,
            status,
        )
    }

    /// `year` is always drawn from the configured range, which has one
    /// sampler per year
    fn sample_domain(&mut self, year: i32) -> Domain {
        let offset = (year - self.settings.start_date.year()) as usize;
        Domain::ALL[self.samplers[offset].sample(&mut self.rng)]
    }

    /// Uniform month within the year, uniform day in 1..=28, both clamped to
    /// the configured range in its first and last month.
    fn sample_date(&mut self, year: i32) -> NaiveDate {
        let start = self.settings.start_date;
        let end = self.settings.end_date;

        let first_month = if year == start.year() { start.month() } else { 1 };
        let last_month = if year == end.year() { end.month() } else { 12 };
        let month = self.rng.gen_range(first_month..=last_month);

        let first_day = if year == start.year() && month == start.month() {
            start.day()
        } else {
            1
        };
        let last_day = if year == end.year() && month == end.month() {
            end.day().min(MAX_DAY_OF_MONTH)
        } else {
            MAX_DAY_OF_MONTH
        };
        let day = self.rng.gen_range(first_day..=last_day);

        // Every month has a 28th, so this only falls back on out-of-range years
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn generate(settings: GeneratorSettings, seed: u64) -> Vec<ApplicationRecord> {
        DatasetGenerator::with_seed(settings, seed)
            .unwrap()
            .generate()
    }

    #[test]
    fn test_ids_are_contiguous_from_first_id() {
        let records = generate(GeneratorSettings::default(), 7);

        assert_eq!(records.len(), 5000);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.application_id, 10000 + i as u64);
        }

        let unique: HashSet<_> = records.iter().map(|r| r.application_id).collect();
        assert_eq!(unique.len(), records.len());
    }

    #[test]
    fn test_dates_within_range_and_day_clamped() {
        let records = generate(GeneratorSettings::default(), 11);
        let start = ymd(2021, 1, 1);
        let end = ymd(2024, 5, 31);

        for record in &records {
            assert!(record.application_date >= start, "{:?}", record);
            assert!(record.application_date <= end, "{:?}", record);
            let day = record.application_date.day();
            assert!((1..=28).contains(&day), "{:?}", record);
        }

        // Final year never goes past May
        assert!(records
            .iter()
            .filter(|r| r.year() == 2024)
            .all(|r| r.application_date.month() <= 5));
    }

    #[test]
    fn test_domain_and_status_from_fixed_sets() {
        let records = generate(GeneratorSettings::default(), 3);

        let domains: HashSet<_> = records.iter().map(|r| r.domain).collect();
        let statuses: HashSet<_> = records.iter().map(|r| r.status).collect();

        assert!(domains.iter().all(|d| Domain::ALL.contains(d)));
        assert_eq!(domains.len(), 7);
        assert_eq!(statuses.len(), 2);

        let completed = records
            .iter()
            .filter(|r| r.status == ApplicationStatus::CompletedInternship)
            .count() as f64
            / records.len() as f64;
        assert!((completed - 0.3).abs() < 0.05, "completed share {}", completed);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate(GeneratorSettings::default().record_count(200), 42);
        let b = generate(GeneratorSettings::default().record_count(200), 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unboosted_counts_follow_base_weights() {
        let settings = GeneratorSettings::default()
            .record_count(50_000)
            .boost(BoostPolicy::none());
        let records = generate(settings, 2021);

        let mut counts: HashMap<Domain, usize> = HashMap::new();
        for record in &records {
            *counts.entry(record.domain).or_default() += 1;
        }

        let base = DomainWeights::base();
        let total = records.len() as f64;
        for domain in Domain::ALL {
            let share = counts[&domain] as f64 / total;
            assert!(
                (share - base.get(domain)).abs() < 0.01,
                "{}: share {} vs weight {}",
                domain,
                share,
                base.get(domain)
            );
        }

        // Higher base weight means higher count, ignoring equal weights
        for a in Domain::ALL {
            for b in Domain::ALL {
                if base.get(a) > base.get(b) + 1e-9 {
                    assert!(counts[&a] > counts[&b], "{} vs {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_emerging_domains_gain_share_in_boosted_years() {
        let records = generate(GeneratorSettings::default().record_count(20_000), 99);

        let share = |domain: Domain, boosted: bool| {
            let group: Vec<_> = records
                .iter()
                .filter(|r| (r.year() >= 2023) == boosted)
                .collect();
            group.iter().filter(|r| r.domain == domain).count() as f64 / group.len() as f64
        };

        let emerging: Vec<_> = BoostPolicy::default().emerging_domains().collect();
        assert_eq!(emerging.len(), 2);
        for domain in emerging {
            let early = share(domain, false);
            let late = share(domain, true);
            assert!(late > early * 1.4, "{}: {} -> {}", domain, early, late);
        }
    }

    #[test]
    fn test_narrow_range_respects_bounds() {
        let settings = GeneratorSettings::default()
            .record_count(500)
            .date_range(ymd(2022, 3, 10), ymd(2022, 3, 31));
        let records = generate(settings, 5);

        for record in &records {
            assert_eq!(record.application_date.year(), 2022);
            assert_eq!(record.application_date.month(), 3);
            assert!((10..=28).contains(&record.application_date.day()));
        }
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let zero = GeneratorSettings::default().record_count(0);
        assert!(matches!(
            DatasetGenerator::new(zero),
            Err(DatasetError::InvalidSettings(_))
        ));

        let inverted = GeneratorSettings::default().date_range(ymd(2024, 1, 1), ymd(2021, 1, 1));
        assert!(DatasetGenerator::new(inverted).is_err());

        let late_start = GeneratorSettings::default().date_range(ymd(2021, 1, 30), ymd(2022, 1, 1));
        assert!(DatasetGenerator::new(late_start).is_err());

        let mut bad_rate = GeneratorSettings::default();
        bad_rate.completion_rate = 1.5;
        assert!(DatasetGenerator::new(bad_rate).is_err());
    }

    #[test]
    fn test_id_overflow_rejected() {
        let mut settings = GeneratorSettings::default().record_count(10);
        settings.first_id = u64::MAX - 5;
        assert!(matches!(
            settings.validate(),
            Err(DatasetError::InvalidSettings(_))
        ));

        settings.first_id = u64::MAX - 10;
        assert!(settings.validate().is_ok());
    }
}
