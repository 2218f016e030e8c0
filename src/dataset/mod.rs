//! Internship application dataset
//!
//! Synthetic data generation and the CSV file format shared with the
//! dashboard.
//!
//! # Example
//!
//! ```rust,no_run
//! use internship_insights::dataset::{write_csv, DatasetGenerator, GeneratorSettings};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut generator = DatasetGenerator::new(GeneratorSettings::default())?;
//!     let records = generator.generate();
//!     write_csv("internship_data.csv", &records)?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod generator;
pub mod types;
pub mod weights;
pub mod writer;

pub use error::{DatasetError, DatasetResult};
pub use generator::{DatasetGenerator, GeneratorSettings, MAX_DAY_OF_MONTH};
pub use types::{ApplicationRecord, ApplicationStatus, Domain};
pub use weights::{boosted_weights, BoostPolicy, DomainWeights, DEFAULT_BOOST_YEAR};
pub use writer::{write_csv, write_records, CSV_HEADER};
