//! CSV loading
//!
//! Reads the generator's flat file back for aggregation. Domain and status
//! cells are kept as plain labels. The only coercion performed is on the date
//! column, which accepts the common date and datetime spellings a
//! spreadsheet or dataframe export might use.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::aggregate::DomainEvent;
use crate::dataset::{DatasetError, DatasetResult};

/// Row as it appears in the file, before date coercion
#[derive(Debug, Deserialize)]
struct RawRecord {
    application_id: u64,
    domain: String,
    application_date: String,
    status: String,
}

/// One application read back from a data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedRecord {
    pub application_id: u64,
    /// Domain label, not restricted to the generator's table
    pub domain: String,
    pub application_date: NaiveDate,
    /// Status label, not restricted to the generator's two values
    pub status: String,
}

impl DomainEvent for LoadedRecord {
    fn domain_label(&self) -> &str {
        &self.domain
    }

    fn year(&self) -> i32 {
        self.application_date.year()
    }
}

/// Load all records from a CSV file
pub fn load_records(path: impl AsRef<Path>) -> DatasetResult<Vec<LoadedRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let records = read_records(std::io::BufReader::new(file))?;

    tracing::info!(path = %path.display(), records = records.len(), "Loaded application records");
    Ok(records)
}

/// Read all records from CSV data; the first row must be the header
pub fn read_records<R: Read>(reader: R) -> DatasetResult<Vec<LoadedRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result?;
        // Header is line 1
        let line = row as u64 + 2;

        let application_date =
            parse_date(&raw.application_date).ok_or_else(|| DatasetError::InvalidDate {
                line,
                value: raw.application_date.clone(),
            })?;

        records.push(LoadedRecord {
            application_id: raw.application_id,
            domain: raw.domain,
            application_date,
            status: raw.status,
        });
    }

    Ok(records)
}

/// Coerce a date cell to a calendar date, dropping any time component
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    let date_formats = ["%Y/%m/%d", "%m/%d/%Y"];
    date_formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{write_csv, DatasetGenerator, GeneratorSettings};
    use tempfile::tempdir;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_read_simple_file() {
        let csv_data = "application_id,domain,application_date,status
10000,Data Science,2021-04-12,Applied
10001,AI/ML Engineering,2023-09-01,Completed Internship";

        let records = read_records(csv_data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].application_id, 10000);
        assert_eq!(records[0].domain, "Data Science");
        assert_eq!(records[0].application_date, ymd(2021, 4, 12));
        assert_eq!(records[1].status, "Completed Internship");
    }

    #[test]
    fn test_unknown_labels_load() {
        let csv_data = "application_id,domain,application_date,status
1,Quantum Computing,2022-06-03,Applied
2,DevOps,2022-06-03,Withdrawn";

        let records = read_records(csv_data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].domain, "Quantum Computing");
        assert_eq!(records[0].domain_label(), "Quantum Computing");
        assert_eq!(records[1].status, "Withdrawn");
        assert_eq!(records[1].year(), 2022);
    }

    #[test]
    fn test_date_column_is_coerced() {
        let csv_data = "application_id,domain,application_date,status
1,DevOps,2022-06-03 00:00:00,Applied
2,DevOps,2022-06-04T12:30:00,Applied
3,DevOps,2022-06-05T08:00:00Z,Applied";

        let records = read_records(csv_data.as_bytes()).unwrap();
        let dates: Vec<_> = records.iter().map(|r| r.application_date).collect();
        assert_eq!(dates, vec![ymd(2022, 6, 3), ymd(2022, 6, 4), ymd(2022, 6, 5)]);
    }

    #[test]
    fn test_unparseable_date_reports_line() {
        let csv_data = "application_id,domain,application_date,status
1,DevOps,2022-06-03,Applied
2,DevOps,sometime in june,Applied";

        match read_records(csv_data.as_bytes()) {
            Err(DatasetError::InvalidDate { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "sometime in june");
            }
            other => panic!("expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_row_is_fatal() {
        let csv_data = "application_id,domain,application_date,status
abc,DevOps,2022-06-03,Applied";
        assert!(matches!(
            read_records(csv_data.as_bytes()),
            Err(DatasetError::Csv(_))
        ));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempdir().unwrap();
        let result = load_records(dir.path().join("nope.csv"));
        assert!(matches!(result, Err(DatasetError::Io(_))));
    }

    #[test]
    fn test_generated_file_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("internship_data.csv");

        let mut generator =
            DatasetGenerator::with_seed(GeneratorSettings::default().record_count(300), 1).unwrap();
        let generated = generator.generate();
        write_csv(&path, &generated).unwrap();

        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded.len(), generated.len());
        for (loaded, generated) in loaded.iter().zip(&generated) {
            assert_eq!(loaded.application_id, generated.application_id);
            assert_eq!(loaded.domain, generated.domain.label());
            assert_eq!(loaded.application_date, generated.application_date);
            assert_eq!(loaded.status, generated.status.label());
        }
    }
}
