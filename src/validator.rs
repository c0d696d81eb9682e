//! Plausibility validation for candidate submissions.
//!
//! The model was trained only on plausible age/experience/education
//! combinations, so implausible input has to be rejected before it reaches
//! the prediction path rather than extrapolated into a meaningless number.
//!
//! Rules run in a fixed order and stop at the first violation:
//!
//! 1. **Completeness** - every required field must be off its placeholder.
//! 2. **Experience vs. age** - nobody accrues more working years than
//!    years alive minus the minimum working age.
//! 3. **Education vs. age** - a Master's needs age 23, a PhD age 26.
//!
//! Validation is a pure function of the submission and the form mode. It
//! never panics and always returns one of the declared outcomes, so the
//! caller can map each failure to a distinct user-facing message.
//!
//! # Examples
//!
//! ```
//! use paygrade::profile::{CandidateForm, EducationLevel, FormMode, Gender, WorkLocation};
//! use paygrade::validator::Validator;
//!
//! let form = CandidateForm::new()
//!     .with_age(30)
//!     .with_years_experience(5)
//!     .with_gender(Gender::Male)
//!     .with_job_title("Software Engineer")
//!     .with_education(EducationLevel::Masters)
//!     .with_location(WorkLocation::Urban);
//!
//! let result = Validator::new(FormMode::Classic).validate(&form);
//! assert!(result.is_valid());
//! ```

use std::error::Error;
use std::fmt;

use crate::profile::{CandidateForm, CandidateProfile, FormMode};

/// Why a submission was rejected.
///
/// Each variant corresponds to exactly one rule, so callers can render a
/// specific message per failure instead of a generic one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// A required field was left at its placeholder.
    MissingField(&'static str),
    /// Experience exceeds what the candidate's age permits.
    ImplausibleExperience,
    /// Age is below the minimum for the stated education level.
    ImplausibleEducationAge,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::MissingField(field) => {
                write!(f, "required field '{}' is not set", field)
            }
            ValidationFailure::ImplausibleExperience => {
                write!(f, "invalid age/experience combination")
            }
            ValidationFailure::ImplausibleEducationAge => {
                write!(f, "too young for the selected education level")
            }
        }
    }
}

impl Error for ValidationFailure {}

/// Outcome of validating a submission.
///
/// `Valid` carries the concrete profile built from the submission, so a
/// successful validation hands the caller a record that no longer contains
/// placeholders.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid(CandidateProfile),
    Invalid(ValidationFailure),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// The validated profile, if validation passed.
    pub fn profile(&self) -> Option<&CandidateProfile> {
        match self {
            ValidationResult::Valid(profile) => Some(profile),
            ValidationResult::Invalid(_) => None,
        }
    }

    /// The failure, if validation did not pass.
    pub fn failure(&self) -> Option<&ValidationFailure> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(failure) => Some(failure),
        }
    }
}

/// Rule evaluator for one form variant.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    mode: FormMode,
}

impl Validator {
    pub fn new(mode: FormMode) -> Self {
        Validator { mode }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Validate a submission, first failure wins.
    pub fn validate(&self, form: &CandidateForm) -> ValidationResult {
        // Rule 1: completeness. Placeholders are represented as None, so
        // numeric rules below only ever see concrete integers.
        let age = match form.age {
            Some(age) => age,
            None => return invalid(ValidationFailure::MissingField("age")),
        };
        let experience = match form.years_experience {
            Some(years) => years,
            None => return invalid(ValidationFailure::MissingField("years of experience")),
        };
        let gender = match form.gender {
            Some(gender) => gender,
            None => return invalid(ValidationFailure::MissingField("gender")),
        };
        let job_title = match &form.job_title {
            Some(title) => title.clone(),
            None => return invalid(ValidationFailure::MissingField("job title")),
        };
        let education = match form.education {
            Some(education) => education,
            None => return invalid(ValidationFailure::MissingField("education level")),
        };
        let location = match form.location {
            Some(location) => location,
            None => return invalid(ValidationFailure::MissingField("location")),
        };
        let industry = match (self.mode.requires_industry(), form.industry) {
            (true, None) => return invalid(ValidationFailure::MissingField("industry sector")),
            (_, industry) => industry,
        };

        // Rule 2: experience vs. age. Signed arithmetic: age can be below
        // the minimum working age, which must not wrap.
        let min_working_age = i64::from(self.mode.min_working_age());
        let age_i = i64::from(age);
        let exp_i = i64::from(experience);
        if exp_i >= age_i || exp_i > age_i - min_working_age {
            return invalid(ValidationFailure::ImplausibleExperience);
        }

        // Rule 3: education vs. age.
        if age < education.min_age() {
            return invalid(ValidationFailure::ImplausibleEducationAge);
        }

        ValidationResult::Valid(CandidateProfile {
            age,
            years_experience: experience,
            gender,
            job_title,
            education,
            location,
            industry,
        })
    }
}

fn invalid(failure: ValidationFailure) -> ValidationResult {
    ValidationResult::Invalid(failure)
}
