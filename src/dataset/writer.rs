//! CSV output for generated records
//!
//! Columns: `application_id,domain,application_date,status`, dates as
//! `YYYY-MM-DD`. Writing to a path truncates any existing file.

use std::io::Write;
use std::path::Path;

use super::error::DatasetResult;
use super::types::ApplicationRecord;

/// Column header written before the first record
pub const CSV_HEADER: &str = "application_id,domain,application_date,status";

/// Write records to `path`, replacing the file if it exists
pub fn write_csv(path: impl AsRef<Path>, records: &[ApplicationRecord]) -> DatasetResult<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_records(std::io::BufWriter::new(file), records)?;

    tracing::debug!(path = %path.display(), records = records.len(), "Dataset written");
    Ok(())
}

/// Write records as CSV to any writer
pub fn write_records<W: Write>(writer: W, records: &[ApplicationRecord]) -> DatasetResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    // Header is written explicitly so an empty slice still yields a valid file
    writer.write_record(CSV_HEADER.split(','))?;
    for record in records {
        writer.write_record(&[
            record.application_id.to_string(),
            record.domain.label().to_string(),
            record.application_date.format("%Y-%m-%d").to_string(),
            record.status.label().to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{ApplicationStatus, Domain};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn sample_records() -> Vec<ApplicationRecord> {
        vec![
            ApplicationRecord::new(
                10000,
                Domain::AiMlEngineering,
                NaiveDate::from_ymd_opt(2023, 2, 5).unwrap(),
                ApplicationStatus::Applied,
            ),
            ApplicationRecord::new(
                10001,
                Domain::UiUxDesign,
                NaiveDate::from_ymd_opt(2021, 11, 28).unwrap(),
                ApplicationStatus::CompletedInternship,
            ),
        ]
    }

    #[test]
    fn test_write_records_format() {
        let mut buf = Vec::new();
        write_records(&mut buf, &sample_records()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "application_id,domain,application_date,status",
                "10000,AI/ML Engineering,2023-02-05,Applied",
                "10001,UI/UX Design,2021-11-28,Completed Internship",
            ]
        );
    }

    #[test]
    fn test_write_empty_has_header_only() {
        let mut buf = Vec::new();
        write_records(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_write_csv_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("internship_data.csv");
        std::fs::write(&path, "stale contents that are much longer than the new file\n").unwrap();

        write_csv(&path, &sample_records()[..1]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "application_id,domain,application_date,status\n10000,AI/ML Engineering,2023-02-05,Applied\n"
        );
    }

    #[test]
    fn test_write_csv_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        assert!(write_csv(&path, &sample_records()).is_err());
    }
}
