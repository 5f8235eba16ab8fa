use std::fmt;

use serde::{Serialize, Serializer};

/// Rounds to one decimal place the way numpy does: scale by ten, round half to even
/// on the scaled value, scale back. `17.05` (stored just above) becomes `17.0`.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Record count per race, highest count first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceCounts(Vec<(String, u64)>);

impl RaceCounts {
    /// Orders by descending count; equal counts keep the order they arrive in.
    pub fn new(mut counts: Vec<(String, u64)>) -> Self {
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        RaceCounts(counts)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(r, c)| (r.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|(_, c)| c).sum()
    }
}

impl Serialize for RaceCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl fmt::Display for RaceCounts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name_width = self.0.iter().map(|(r, _)| r.len()).max().unwrap_or(0);
        let count_width = self
            .0
            .iter()
            .map(|(_, c)| c.to_string().len())
            .max()
            .unwrap_or(0);
        for (race, count) in &self.0 {
            writeln!(f, "{:<name_width$}    {:>count_width$}", race, count)?;
        }
        write!(f, "Name: race, dtype: int64")
    }
}

/// The ten demographic statistics of one dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Demographics {
    pub race_count: RaceCounts,
    pub average_age_men: f64,
    pub percentage_bachelors: f64,
    pub higher_education_rich: f64,
    pub lower_education_rich: f64,
    pub min_work_hours: u32,
    pub rich_percentage: f64,
    pub highest_earning_country: String,
    pub highest_earning_country_percentage: f64,
    #[serde(rename = "top_IN_occupation")]
    pub top_in_occupation: String,
}

impl fmt::Display for Demographics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Number of each race:\n {}", self.race_count)?;
        writeln!(f, "Average age of men: {:.1}", self.average_age_men)?;
        writeln!(f, "Percentage with Bachelors degrees: {:.1}%", self.percentage_bachelors)?;
        writeln!(
            f,
            "Percentage with higher education that earn >50K: {:.1}%",
            self.higher_education_rich
        )?;
        writeln!(
            f,
            "Percentage without higher education that earn >50K: {:.1}%",
            self.lower_education_rich
        )?;
        writeln!(f, "Min work time: {} hours/week", self.min_work_hours)?;
        writeln!(
            f,
            "Percentage of rich among those who work fewest hours: {:.1}%",
            self.rich_percentage
        )?;
        writeln!(
            f,
            "Country with highest percentage of rich: {}",
            self.highest_earning_country
        )?;
        writeln!(
            f,
            "Highest percentage of rich people in country: {:.1}%",
            self.highest_earning_country_percentage
        )?;
        writeln!(f, "Top occupations in India: {}", self.top_in_occupation)
    }
}
