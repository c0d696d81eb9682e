//! # Paygrade - Salary Prediction Core
//!
//! Candidate validation, one-hot feature vectorization, and inference
//! against a pre-trained salary regression model.
//!
//! ## Features
//!
//! - **Plausibility validation**: age/experience/education rules with a
//!   distinct, user-renderable reason per failure
//! - **Schema-aligned vectorization**: dense feature rows in the exact
//!   column order the trained model expects
//! - **Injected artifacts**: schema and model are explicit dependencies,
//!   loaded once at startup and shared read-only
//! - **Deterministic extras**: career insights and synthetic chart data
//!   driven by a caller-supplied random generator
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! paygrade = "0.1"
//! ```
//!
//! ### Basic Usage
//!
//! ```no_run
//! use paygrade::api::Predictor;
//! use paygrade::profile::{CandidateForm, EducationLevel, Gender, WorkLocation};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Loads models/feature_schema.json and models/salary_model.json
//!     let predictor = Predictor::new()?;
//!
//!     let form = CandidateForm::new()
//!         .with_age(30)
//!         .with_years_experience(5)
//!         .with_gender(Gender::Female)
//!         .with_job_title("Data Analyst")
//!         .with_education(EducationLevel::Masters)
//!         .with_location(WorkLocation::Urban);
//!
//!     match predictor.predict(&form) {
//!         Ok(outcome) => println!("Estimated salary: {:.2}", outcome.salary),
//!         Err(failure) => println!("Rejected: {}", failure),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Validation Only
//!
//! ```
//! use paygrade::profile::{CandidateForm, FormMode};
//! use paygrade::validator::{ValidationFailure, Validator};
//!
//! let incomplete = CandidateForm::new().with_age(30);
//! let result = Validator::new(FormMode::Classic).validate(&incomplete);
//! assert_eq!(
//!     result.failure(),
//!     Some(&ValidationFailure::MissingField("years of experience")),
//! );
//! ```
//!
//! ## Pipeline
//!
//! Raw form -> [`validator::Validator`] -> [`vectorizer::Vectorizer`] ->
//! [`model::SalaryModel`] -> scalar estimate. Validation and vectorization
//! are pure functions; the only shared state is the read-only
//! [`schema::FeatureSchema`] and model handle, so one [`api::Predictor`]
//! is safe to share across concurrent callers.

pub mod api;
pub mod catalog;
pub mod insights;
pub mod model;
pub mod profile;
pub mod schema;
pub mod validator;
pub mod vectorizer;

// Re-export commonly used types for convenience
pub use api::{PredictionOutcome, Predictor, PredictorConfig};
pub use catalog::JobCatalog;
pub use model::{LinearModel, SalaryModel};
pub use profile::{
    CandidateForm, CandidateProfile, EducationLevel, FormMode, Gender, IndustrySector,
    WorkLocation,
};
pub use schema::{FeatureSchema, SchemaError};
pub use validator::{ValidationFailure, ValidationResult, Validator};
pub use vectorizer::{FeatureVector, Vectorizer};
