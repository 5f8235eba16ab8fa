use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed record: {0}")]
    Parse(#[from] csv::Error),

    #[error("{statistic}: dataset has no records")]
    EmptyDataset { statistic: &'static str },

    /// The filter a statistic is computed over matched no records.
    #[error("{statistic}: no records where {filter}")]
    NotFound {
        statistic: &'static str,
        filter: &'static str,
    },

    #[error("{statistic}: percentage of an empty group is undefined")]
    DivisionUndefined { statistic: &'static str },
}
