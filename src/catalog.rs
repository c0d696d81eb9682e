//! Job-title catalog derived from the employee dataset.
//!
//! The form's job-role choices come from the unique titles in the employee
//! income CSV. The catalog is presentation input only: validation never
//! checks a submitted title against it, and vectorization matches any
//! string against the schema directly.

use csv::ReaderBuilder;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// One row of the employee income dataset.
///
/// Every field is optional so that incomplete rows deserialize cleanly and
/// can be skipped, mirroring how the training pipeline drops them.
#[derive(Debug, Deserialize, Clone)]
struct EmployeeRecord {
    #[serde(rename = "Age")]
    age: Option<f64>,
    #[serde(rename = "Gender")]
    gender: Option<String>,
    #[serde(rename = "Education Level")]
    education: Option<String>,
    #[serde(rename = "Job Title")]
    job_title: Option<String>,
    #[serde(rename = "Years of Experience")]
    years_experience: Option<f64>,
    #[serde(rename = "Salary")]
    salary: Option<f64>,
}

impl EmployeeRecord {
    fn is_complete(&self) -> bool {
        self.age.is_some()
            && self.years_experience.is_some()
            && self.salary.is_some()
            && matches!(&self.gender, Some(s) if !s.is_empty())
            && matches!(&self.education, Some(s) if !s.is_empty())
            && matches!(&self.job_title, Some(s) if !s.is_empty())
    }
}

/// Unique job titles, in first-seen dataset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCatalog {
    titles: Vec<String>,
}

impl JobCatalog {
    /// Build a catalog from the employee income CSV.
    ///
    /// Rows with any missing field are skipped entirely; duplicate titles
    /// keep their first position.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, csv::Error> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

        let mut titles = Vec::new();
        let mut seen = HashSet::new();
        for record in reader.deserialize() {
            let record: EmployeeRecord = record?;
            if !record.is_complete() {
                continue;
            }
            if let Some(title) = record.job_title {
                if seen.insert(title.clone()) {
                    titles.push(title);
                }
            }
        }

        Ok(JobCatalog { titles })
    }

    /// Build a catalog from an explicit title list (deduplicated).
    pub fn from_titles(titles: impl IntoIterator<Item = String>) -> Self {
        let mut unique = Vec::new();
        let mut seen = HashSet::new();
        for title in titles {
            if seen.insert(title.clone()) {
                unique.push(title);
            }
        }
        JobCatalog { titles: unique }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
