use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::{AnalyzerError, Result};

#[derive(Debug, Deserialize, Copy, Clone, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Deserialize, Copy, Clone, PartialEq, Eq)]
pub enum Salary {
    #[serde(rename = "<=50K")]
    AtMost50K,
    #[serde(rename = ">50K")]
    Above50K,
}

/// One individual from the census extract. Columns not named here are ignored.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Record {
    pub age: u32,
    pub education: String,
    pub occupation: String,
    pub race: String,
    pub sex: Sex,
    #[serde(rename = "hours-per-week")]
    pub hours_per_week: u32,
    #[serde(rename = "native-country")]
    pub native_country: String,
    pub salary: Salary,
}

impl Record {
    pub fn is_rich(&self) -> bool {
        self.salary == Salary::Above50K
    }
}

pub fn read_data(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => AnalyzerError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => AnalyzerError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    read_from(file)
}

/// Deserializes every row of a headed CSV stream. The first bad row aborts the load.
pub fn read_from<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::<Record>::new();
    for result in rdr.deserialize() {
        let record: Record = result?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "age,workclass,education,occupation,race,sex,hours-per-week,native-country,salary\n";

    #[test]
    fn reads_typed_records_and_ignores_extra_columns() {
        let csv = format!(
            "{}39,State-gov,Bachelors,Adm-clerical,White,Male,40,United-States,<=50K\n\
             52, Self-emp-inc, HS-grad, Exec-managerial, White, Female, 45, India, >50K\n",
            HEADER
        );
        let records = read_from(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sex, Sex::Male);
        assert_eq!(records[0].salary, Salary::AtMost50K);
        assert_eq!(records[1].native_country, "India");
        assert_eq!(records[1].hours_per_week, 45);
        assert!(records[1].is_rich());
    }

    #[test]
    fn non_numeric_age_is_a_parse_error() {
        let csv = format!(
            "{}old,State-gov,Bachelors,Adm-clerical,White,Male,40,United-States,<=50K\n",
            HEADER
        );
        let err = read_from(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AnalyzerError::Parse(_)));
    }

    #[test]
    fn short_row_aborts_the_load() {
        let csv = format!(
            "{}39,State-gov,Bachelors,Adm-clerical,White,Male,40,United-States,<=50K\n\
             40,Private,Masters\n",
            HEADER
        );
        assert!(matches!(
            read_from(csv.as_bytes()),
            Err(AnalyzerError::Parse(_))
        ));
    }

    #[test]
    fn unknown_salary_label_is_rejected() {
        let csv = format!(
            "{}39,State-gov,Bachelors,Adm-clerical,White,Male,40,United-States,50K+\n",
            HEADER
        );
        assert!(read_from(csv.as_bytes()).is_err());
    }
}
