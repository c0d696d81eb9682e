//! The trained salary model, treated as a black box.
//!
//! The core never inspects model internals; it hands over a fully formed
//! [`FeatureVector`] and reads back one scalar. [`SalaryModel`] is the seam
//! that keeps it that way - tests substitute a fake, production loads a
//! [`LinearModel`] artifact exported by the training pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::vectorizer::FeatureVector;

/// Scalar regression over a feature vector.
///
/// Implementations must be order-sensitive consumers of the vector's
/// positional values, matching how the training pipeline feeds its model.
pub trait SalaryModel {
    /// Estimated annual salary for one feature row.
    fn predict(&self, vector: &FeatureVector<'_>) -> f64;
}

/// Linear regression weights exported by the training pipeline.
///
/// Coefficients are positional and must align with the schema's column
/// order; the artifact is written next to the schema artifact so the two
/// stay in step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearModel {
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Self {
        LinearModel {
            intercept,
            coefficients,
        }
    }

    /// Load model weights from a JSON artifact.
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(std::io::Error::other)
    }

    /// Save model weights as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

impl SalaryModel for LinearModel {
    fn predict(&self, vector: &FeatureVector<'_>) -> f64 {
        let dot: f64 = vector
            .values()
            .iter()
            .zip(self.coefficients.iter())
            .map(|(value, coef)| value * coef)
            .sum();
        self.intercept + dot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{CandidateProfile, EducationLevel, Gender, WorkLocation};
    use crate::schema::FeatureSchema;
    use crate::vectorizer::Vectorizer;

    fn schema() -> FeatureSchema {
        FeatureSchema::new(
            ["Age", "Years of Experience", "Gender_Male"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap()
    }

    fn profile() -> CandidateProfile {
        CandidateProfile {
            age: 40,
            years_experience: 10,
            gender: Gender::Male,
            job_title: "Consultant".to_string(),
            education: EducationLevel::Bachelors,
            location: WorkLocation::Rural,
            industry: None,
        }
    }

    #[test]
    fn test_linear_prediction() {
        let schema = schema();
        let vector = Vectorizer::new(&schema).vectorize(&profile());

        // 1000 + 40*500 + 10*2000 + 1*5000 = 46000
        let model = LinearModel::new(1000.0, vec![500.0, 2000.0, 5000.0]);
        assert_eq!(model.predict(&vector), 46_000.0);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("paygrade_model_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("salary_model.json");

        let model = LinearModel::new(12_345.5, vec![1.0, 2.0, 3.0]);
        model.save(&path).unwrap();

        let loaded = LinearModel::load(&path).unwrap();
        assert_eq!(loaded.intercept, model.intercept);
        assert_eq!(loaded.coefficients, model.coefficients);

        std::fs::remove_file(&path).unwrap();
    }
}
