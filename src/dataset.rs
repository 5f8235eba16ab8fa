use std::path::Path;

use tracing::info;

use crate::csv_reader::{self, Record};
use crate::error::Result;

pub const ADVANCED_EDUCATION: &[&str] = &["Bachelors", "Masters", "Doctorate"];

/// Records loaded once from disk and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        let records = csv_reader::read_data(path)?;
        info!(path = %path.display(), records = records.len(), "loaded dataset");
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn has_advanced_education(record: &Record) -> bool {
    ADVANCED_EDUCATION.contains(&record.education.as_str())
}
