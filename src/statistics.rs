use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::csv_reader::{Record, Sex};
use crate::dataset::{has_advanced_education, Dataset};
use crate::error::{AnalyzerError, Result};
use crate::report::{round1, Demographics, RaceCounts};

/// Computes the demographic statistics of one borrowed dataset.
///
/// Every grouping goes through a `BTreeMap`, so groups are visited in ascending key
/// order and an arg-max tie resolves to the smallest key.
#[derive(Clone, Copy)]
pub struct StatisticsComputer<'a> {
    dataset: &'a Dataset,
}

fn percentage(part: u64, whole: u64) -> f64 {
    part as f64 / whole as f64 * 100.0
}

/// Share of `>50K` earners among `records`, rounded.
fn rich_share<'r>(
    records: impl Iterator<Item = &'r Record>,
    statistic: &'static str,
) -> Result<f64> {
    let (rich, total) = records.fold((0u64, 0u64), |(rich, total), record| {
        (rich + record.is_rich() as u64, total + 1)
    });
    if total == 0 {
        return Err(AnalyzerError::DivisionUndefined { statistic });
    }
    Ok(round1(percentage(rich, total)))
}

impl<'a> StatisticsComputer<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        StatisticsComputer { dataset }
    }

    fn records(&self) -> impl Iterator<Item = &'a Record> {
        self.dataset.records().iter()
    }

    pub fn race_count(&self) -> RaceCounts {
        let mut counts = BTreeMap::<&str, u64>::new();
        for record in self.records() {
            *counts.entry(record.race.as_str()).or_default() += 1;
        }
        RaceCounts::new(
            counts
                .into_iter()
                .map(|(race, count)| (race.to_string(), count))
                .collect(),
        )
    }

    pub fn average_age_men(&self) -> Result<f64> {
        let (sum, count) = self
            .records()
            .filter(|r| r.sex == Sex::Male)
            .fold((0u64, 0u64), |(sum, count), r| (sum + r.age as u64, count + 1));
        if count == 0 {
            return Err(AnalyzerError::NotFound {
                statistic: "average_age_men",
                filter: "sex = Male",
            });
        }
        Ok(round1(sum as f64 / count as f64))
    }

    pub fn percentage_bachelors(&self) -> Result<f64> {
        if self.dataset.is_empty() {
            return Err(AnalyzerError::DivisionUndefined {
                statistic: "percentage_bachelors",
            });
        }
        let bachelors = self
            .records()
            .filter(|r| r.education == "Bachelors")
            .count() as u64;
        Ok(round1(percentage(bachelors, self.dataset.len() as u64)))
    }

    pub fn higher_education_rich(&self) -> Result<f64> {
        rich_share(
            self.records().filter(|r| has_advanced_education(r)),
            "higher_education_rich",
        )
    }

    pub fn lower_education_rich(&self) -> Result<f64> {
        rich_share(
            self.records().filter(|r| !has_advanced_education(r)),
            "lower_education_rich",
        )
    }

    pub fn min_work_hours(&self) -> Result<u32> {
        self.records()
            .map(|r| r.hours_per_week)
            .min()
            .ok_or(AnalyzerError::EmptyDataset {
                statistic: "min_work_hours",
            })
    }

    pub fn rich_percentage(&self) -> Result<f64> {
        let min_hours = self.min_work_hours()?;
        rich_share(
            self.records().filter(|r| r.hours_per_week == min_hours),
            "rich_percentage",
        )
    }

    /// Country with the largest `>50K` share, and that share unrounded.
    fn richest_country(&self) -> Result<(&'a str, f64)> {
        let mut by_country = BTreeMap::<&str, (u64, u64)>::new();
        for record in self.records() {
            let (rich, total) = by_country
                .entry(record.native_country.as_str())
                .or_default();
            *rich += record.is_rich() as u64;
            *total += 1;
        }

        let mut best: Option<(&str, f64)> = None;
        for (country, (rich, total)) in by_country {
            let share = percentage(rich, total);
            match best {
                Some((_, top)) if share <= top => {}
                _ => best = Some((country, share)),
            }
        }
        best.ok_or(AnalyzerError::EmptyDataset {
            statistic: "highest_earning_country",
        })
    }

    pub fn highest_earning_country(&self) -> Result<String> {
        Ok(self.richest_country()?.0.to_string())
    }

    pub fn highest_earning_country_percentage(&self) -> Result<f64> {
        Ok(round1(self.richest_country()?.1))
    }

    /// Most common occupation among `>50K` earners born in India.
    pub fn top_in_occupation(&self) -> Result<String> {
        let mut counts = BTreeMap::<&str, u64>::new();
        for record in self
            .records()
            .filter(|r| r.native_country == "India" && r.is_rich())
        {
            *counts.entry(record.occupation.as_str()).or_default() += 1;
        }

        let mut top: Option<(&str, u64)> = None;
        for (occupation, count) in counts {
            match top {
                Some((_, most)) if count <= most => {}
                _ => top = Some((occupation, count)),
            }
        }
        top.map(|(occupation, _)| occupation.to_string())
            .ok_or(AnalyzerError::NotFound {
                statistic: "top_IN_occupation",
                filter: "native-country = India and salary = >50K",
            })
    }

    /// Computes all ten statistics, failing on the first one that is undefined.
    /// With `emit_output` the report is also written to stdout.
    pub fn compute(&self, emit_output: bool) -> Result<Demographics> {
        let race_count = self.race_count();
        debug!(races = race_count.len(), "race_count");
        let average_age_men = self.average_age_men()?;
        debug!(value = average_age_men, "average_age_men");
        let percentage_bachelors = self.percentage_bachelors()?;
        debug!(value = percentage_bachelors, "percentage_bachelors");
        let higher_education_rich = self.higher_education_rich()?;
        debug!(value = higher_education_rich, "higher_education_rich");
        let lower_education_rich = self.lower_education_rich()?;
        debug!(value = lower_education_rich, "lower_education_rich");
        let min_work_hours = self.min_work_hours()?;
        debug!(value = min_work_hours, "min_work_hours");
        let rich_percentage = self.rich_percentage()?;
        debug!(value = rich_percentage, "rich_percentage");
        let (country, share) = self.richest_country()?;
        let highest_earning_country_percentage = round1(share);
        debug!(
            country = %country,
            value = highest_earning_country_percentage,
            "highest_earning_country"
        );
        let top_in_occupation = self.top_in_occupation()?;
        debug!(value = %top_in_occupation, "top_IN_occupation");

        let demographics = Demographics {
            race_count,
            average_age_men,
            percentage_bachelors,
            higher_education_rich,
            lower_education_rich,
            min_work_hours,
            rich_percentage,
            highest_earning_country: country.to_string(),
            highest_earning_country_percentage,
            top_in_occupation,
        };
        if emit_output {
            print!("{}", demographics);
        }
        Ok(demographics)
    }
}

/// Loads the CSV at `path` and computes its statistics in one call.
pub fn calculate_demographic_data(path: &Path, print_data: bool) -> Result<Demographics> {
    let dataset = Dataset::load(path)?;
    StatisticsComputer::new(&dataset).compute(print_data)
}
