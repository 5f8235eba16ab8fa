pub mod csv_reader;
pub mod dataset;
pub mod error;
pub mod report;
pub mod statistics;

pub use csv_reader::{Record, Salary, Sex};
pub use dataset::Dataset;
pub use error::{AnalyzerError, Result};
pub use report::{Demographics, RaceCounts};
pub use statistics::{calculate_demographic_data, StatisticsComputer};
