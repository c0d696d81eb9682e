//! One-hot feature-vector assembly.
//!
//! Turns a validated [`CandidateProfile`] into the dense numeric row the
//! model expects: every schema column starts at zero, the two direct
//! numeric columns take the candidate's age and experience, and each
//! categorical attribute flips at most one `prefix + label` indicator.
//!
//! Matching is an exact string comparison against the schema's column
//! names - no normalization, case folding, or escaping. A value the schema
//! never saw (a free-form job title outside the training set, say) simply
//! leaves its whole indicator block at zero; that is an unknown category,
//! not an error, and the call cannot fail.

use crate::profile::CandidateProfile;
use crate::schema::{
    FeatureSchema, AGE_COLUMN, EDUCATION_PREFIX, EXPERIENCE_COLUMN, GENDER_PREFIX,
    INDUSTRY_PREFIX, JOB_TITLE_PREFIX, LOCATION_PREFIX,
};

/// A dense feature row aligned to a schema's column order.
///
/// Holds exactly the schema's columns, no extras, no omissions. Built per
/// prediction request and consumed once by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector<'a> {
    schema: &'a FeatureSchema,
    values: Vec<f64>,
}

impl<'a> FeatureVector<'a> {
    /// Values in the schema's declared column order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Column names in declared order.
    pub fn columns(&self) -> &[String] {
        self.schema.columns()
    }

    /// Value of a named column, if the schema declares it.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.schema.position(name).map(|pos| self.values[pos])
    }

    /// Iterate `(column, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.schema
            .columns()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Maps validated profiles onto a fixed schema.
///
/// Stateless apart from the borrowed, read-only schema, so a single
/// instance is safe to share across concurrent callers.
#[derive(Debug, Clone, Copy)]
pub struct Vectorizer<'a> {
    schema: &'a FeatureSchema,
}

impl<'a> Vectorizer<'a> {
    pub fn new(schema: &'a FeatureSchema) -> Self {
        Vectorizer { schema }
    }

    pub fn schema(&self) -> &'a FeatureSchema {
        self.schema
    }

    /// Build the feature row for one profile.
    pub fn vectorize(&self, profile: &CandidateProfile) -> FeatureVector<'a> {
        let mut values = vec![0.0; self.schema.len()];

        // Schema construction guarantees both numeric columns exist.
        if let Some(pos) = self.schema.position(AGE_COLUMN) {
            values[pos] = f64::from(profile.age);
        }
        if let Some(pos) = self.schema.position(EXPERIENCE_COLUMN) {
            values[pos] = f64::from(profile.years_experience);
        }

        self.set_indicator(&mut values, GENDER_PREFIX, profile.gender.as_label());
        self.set_indicator(&mut values, EDUCATION_PREFIX, profile.education.as_label());
        self.set_indicator(&mut values, JOB_TITLE_PREFIX, &profile.job_title);
        self.set_indicator(&mut values, LOCATION_PREFIX, profile.location.as_label());
        if let Some(industry) = profile.industry {
            self.set_indicator(&mut values, INDUSTRY_PREFIX, industry.as_label());
        }

        FeatureVector {
            schema: self.schema,
            values,
        }
    }

    fn set_indicator(&self, values: &mut [f64], prefix: &str, label: &str) {
        let column = format!("{}{}", prefix, label);
        if let Some(pos) = self.schema.position(&column) {
            values[pos] = 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{EducationLevel, Gender, IndustrySector, WorkLocation};

    fn test_schema() -> FeatureSchema {
        FeatureSchema::new(
            [
                "Age",
                "Years of Experience",
                "Gender_Male",
                "Gender_Female",
                "Gender_Other",
                "Education Level_Bachelor's",
                "Education Level_Master's",
                "Education Level_PhD",
                "Job Title_Data Analyst",
                "Job Title_Software Engineer",
                "Location_Urban",
                "Location_Rural",
                "Industry Sector_Technology",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
        .unwrap()
    }

    fn test_profile() -> CandidateProfile {
        CandidateProfile {
            age: 32,
            years_experience: 7,
            gender: Gender::Female,
            job_title: "Data Analyst".to_string(),
            education: EducationLevel::Masters,
            location: WorkLocation::Urban,
            industry: None,
        }
    }

    fn prefix_sum(vector: &FeatureVector<'_>, prefix: &str) -> f64 {
        vector
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(_, value)| value)
            .sum()
    }

    #[test]
    fn test_vector_matches_schema_columns_in_order() {
        let schema = test_schema();
        let vector = Vectorizer::new(&schema).vectorize(&test_profile());

        assert_eq!(vector.len(), schema.len());
        assert_eq!(vector.columns(), schema.columns());
    }

    #[test]
    fn test_numeric_columns_set_directly() {
        let schema = test_schema();
        let vector = Vectorizer::new(&schema).vectorize(&test_profile());

        assert_eq!(vector.get("Age"), Some(32.0));
        assert_eq!(vector.get("Years of Experience"), Some(7.0));
    }

    #[test]
    fn test_one_hot_indicators() {
        let schema = test_schema();
        let vector = Vectorizer::new(&schema).vectorize(&test_profile());

        assert_eq!(vector.get("Gender_Female"), Some(1.0));
        assert_eq!(vector.get("Gender_Male"), Some(0.0));
        assert_eq!(vector.get("Education Level_Master's"), Some(1.0));
        assert_eq!(vector.get("Job Title_Data Analyst"), Some(1.0));
        assert_eq!(vector.get("Location_Urban"), Some(1.0));
    }

    #[test]
    fn test_at_most_one_indicator_per_prefix() {
        let schema = test_schema();
        let vector = Vectorizer::new(&schema).vectorize(&test_profile());

        for prefix in [
            "Gender_",
            "Education Level_",
            "Job Title_",
            "Location_",
            "Industry Sector_",
        ] {
            let sum = prefix_sum(&vector, prefix);
            assert!(sum == 0.0 || sum == 1.0, "{} sum was {}", prefix, sum);
        }
    }

    #[test]
    fn test_unknown_job_title_leaves_block_at_zero() {
        let schema = test_schema();
        let mut profile = test_profile();
        profile.job_title = "Quantum Basket Weaver".to_string();

        let vector = Vectorizer::new(&schema).vectorize(&profile);
        assert_eq!(prefix_sum(&vector, "Job Title_"), 0.0);
        // The rest of the row is unaffected.
        assert_eq!(vector.get("Age"), Some(32.0));
        assert_eq!(vector.get("Gender_Female"), Some(1.0));
    }

    #[test]
    fn test_location_absent_from_schema_is_not_an_error() {
        let schema = test_schema();
        let mut profile = test_profile();
        profile.location = WorkLocation::Suburban; // schema lists Urban and Rural only

        let vector = Vectorizer::new(&schema).vectorize(&profile);
        assert_eq!(prefix_sum(&vector, "Location_"), 0.0);
    }

    #[test]
    fn test_industry_indicator_set_when_present() {
        let schema = test_schema();
        let mut profile = test_profile();
        profile.industry = Some(IndustrySector::Technology);

        let vector = Vectorizer::new(&schema).vectorize(&profile);
        assert_eq!(vector.get("Industry Sector_Technology"), Some(1.0));

        profile.industry = Some(IndustrySector::Retail); // not in schema
        let vector = Vectorizer::new(&schema).vectorize(&profile);
        assert_eq!(prefix_sum(&vector, "Industry Sector_"), 0.0);
    }

    #[test]
    fn test_underscore_in_title_matches_exactly() {
        let schema = FeatureSchema::new(
            ["Age", "Years of Experience", "Job Title_ML_Engineer"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap();

        let mut profile = test_profile();
        profile.job_title = "ML_Engineer".to_string();
        let vector = Vectorizer::new(&schema).vectorize(&profile);
        assert_eq!(vector.get("Job Title_ML_Engineer"), Some(1.0));
    }

    #[test]
    fn test_round_trip_reads_back_every_assignment() {
        let schema = test_schema();
        let vector = Vectorizer::new(&schema).vectorize(&test_profile());

        for (name, value) in vector.iter() {
            assert_eq!(vector.get(name), Some(value));
        }
        // Positional view agrees with named view.
        let by_position: Vec<f64> = vector.values().to_vec();
        let by_name: Vec<f64> = schema
            .columns()
            .iter()
            .map(|c| vector.get(c).unwrap())
            .collect();
        assert_eq!(by_position, by_name);
    }
}
