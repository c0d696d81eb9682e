//! High-level API for salary prediction.
//!
//! This module wires the validator, vectorizer, and model behind one
//! facade so callers submit a form and read back a salary.
//!
//! # Quick Start
//!
//! ```no_run
//! use paygrade::api::Predictor;
//! use paygrade::profile::{CandidateForm, EducationLevel, Gender, WorkLocation};
//!
//! let predictor = Predictor::new()?;
//! let form = CandidateForm::new()
//!     .with_age(30)
//!     .with_years_experience(5)
//!     .with_gender(Gender::Male)
//!     .with_job_title("Software Engineer")
//!     .with_education(EducationLevel::Masters)
//!     .with_location(WorkLocation::Urban);
//!
//! match predictor.predict(&form) {
//!     Ok(outcome) => println!("Estimated salary: {:.2}", outcome.salary),
//!     Err(failure) => println!("Rejected: {}", failure),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Custom Artifacts
//!
//! ```no_run
//! use paygrade::api::{Predictor, PredictorConfig};
//! use paygrade::profile::FormMode;
//!
//! let config = PredictorConfig::new()
//!     .with_schema_path("artifacts/feature_schema.json")
//!     .with_model_path("artifacts/salary_model.json")
//!     .with_form_mode(FormMode::Extended);
//!
//! let predictor = Predictor::with_config(config)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Testing with a Fake Model
//!
//! The schema and model are injected, never ambient globals, so tests can
//! substitute both via [`Predictor::from_parts`].

use std::error::Error;

use crate::model::{LinearModel, SalaryModel};
use crate::profile::{CandidateForm, CandidateProfile, FormMode};
use crate::schema::FeatureSchema;
use crate::validator::{ValidationFailure, ValidationResult, Validator};
use crate::vectorizer::Vectorizer;

const DEFAULT_SCHEMA_PATH: &str = "models/feature_schema.json";
const DEFAULT_MODEL_PATH: &str = "models/salary_model.json";

/// Where to find the artifacts and which form variant to validate for.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    pub schema_path: String,
    pub model_path: String,
    pub form_mode: FormMode,
}

impl PredictorConfig {
    pub fn new() -> Self {
        PredictorConfig {
            schema_path: DEFAULT_SCHEMA_PATH.to_string(),
            model_path: DEFAULT_MODEL_PATH.to_string(),
            form_mode: FormMode::Classic,
        }
    }

    pub fn with_schema_path(mut self, path: impl Into<String>) -> Self {
        self.schema_path = path.into();
        self
    }

    pub fn with_model_path(mut self, path: impl Into<String>) -> Self {
        self.model_path = path.into();
        self
    }

    pub fn with_form_mode(mut self, mode: FormMode) -> Self {
        self.form_mode = mode;
        self
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one accepted prediction cycle.
///
/// Short-lived by design: the caller holds it for rendering and discards
/// it; the library keeps no state between submissions.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    /// Estimated annual salary.
    pub salary: f64,
    /// The validated profile the estimate was computed from.
    pub profile: CandidateProfile,
}

/// Main predictor interface: schema + model + validation mode.
pub struct Predictor {
    schema: FeatureSchema,
    model: Box<dyn SalaryModel>,
    validator: Validator,
}

impl Predictor {
    /// Load the predictor from the default artifact paths.
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Self::with_config(PredictorConfig::new())
    }

    /// Load the predictor per an explicit configuration.
    pub fn with_config(config: PredictorConfig) -> Result<Self, Box<dyn Error>> {
        let schema = FeatureSchema::load(&config.schema_path)?;
        let model = LinearModel::load(&config.model_path)?;
        Ok(Self::from_parts(schema, Box::new(model), config.form_mode))
    }

    /// Assemble a predictor from already-built parts.
    pub fn from_parts(schema: FeatureSchema, model: Box<dyn SalaryModel>, mode: FormMode) -> Self {
        Predictor {
            schema,
            model,
            validator: Validator::new(mode),
        }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn form_mode(&self) -> FormMode {
        self.validator.mode()
    }

    /// Run one submission through validate, vectorize, and predict.
    ///
    /// A validation failure is the user-correctable outcome, returned on
    /// the error side so callers can render its message; identical input
    /// always validates identically, so nothing is retried.
    pub fn predict(&self, form: &CandidateForm) -> Result<PredictionOutcome, ValidationFailure> {
        let profile = match self.validator.validate(form) {
            ValidationResult::Valid(profile) => profile,
            ValidationResult::Invalid(failure) => return Err(failure),
        };

        let vector = Vectorizer::new(&self.schema).vectorize(&profile);
        let salary = self.model.predict(&vector);

        Ok(PredictionOutcome { salary, profile })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{EducationLevel, Gender, WorkLocation};
    use crate::vectorizer::FeatureVector;

    struct ConstantModel(f64);

    impl SalaryModel for ConstantModel {
        fn predict(&self, _vector: &FeatureVector<'_>) -> f64 {
            self.0
        }
    }

    fn schema() -> FeatureSchema {
        FeatureSchema::new(
            ["Age", "Years of Experience", "Gender_Male", "Location_Urban"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap()
    }

    fn form() -> CandidateForm {
        CandidateForm::new()
            .with_age(34)
            .with_years_experience(6)
            .with_gender(Gender::Male)
            .with_job_title("Software Engineer")
            .with_education(EducationLevel::Bachelors)
            .with_location(WorkLocation::Urban)
    }

    #[test]
    fn test_predict_with_fake_model() {
        let predictor = Predictor::from_parts(
            schema(),
            Box::new(ConstantModel(72_500.0)),
            FormMode::Classic,
        );

        let outcome = predictor.predict(&form()).unwrap();
        assert_eq!(outcome.salary, 72_500.0);
        assert_eq!(outcome.profile.age, 34);
    }

    #[test]
    fn test_predict_surfaces_validation_failure() {
        let predictor =
            Predictor::from_parts(schema(), Box::new(ConstantModel(1.0)), FormMode::Classic);

        let mut bad = form();
        bad.years_experience = Some(34);
        let err = predictor.predict(&bad).unwrap_err();
        assert_eq!(err, ValidationFailure::ImplausibleExperience);
    }

    #[test]
    fn test_linear_model_end_to_end() {
        let model = LinearModel::new(10_000.0, vec![1_000.0, 3_000.0, 2_500.0, 1_500.0]);
        let predictor = Predictor::from_parts(schema(), Box::new(model), FormMode::Classic);

        // 10000 + 34*1000 + 6*3000 + 2500 + 1500
        let outcome = predictor.predict(&form()).unwrap();
        assert_eq!(outcome.salary, 66_000.0);
    }

    #[test]
    fn test_config_builder() {
        let config = PredictorConfig::new()
            .with_schema_path("a.json")
            .with_model_path("b.json")
            .with_form_mode(FormMode::Extended);

        assert_eq!(config.schema_path, "a.json");
        assert_eq!(config.model_path, "b.json");
        assert_eq!(config.form_mode, FormMode::Extended);
    }
}
