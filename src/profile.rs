//! Candidate records and the categorical attribute domain.
//!
//! Two record types cross this module: [`CandidateForm`] is the raw
//! submission as the form holds it, where any field may still be at its
//! placeholder (`None`); [`CandidateProfile`] is the concrete record the
//! validator produces once every rule has passed. Profiles are built fresh
//! per submission, never mutated, and discarded after one prediction cycle.

use serde::{Deserialize, Serialize};

/// Which form variant produced a submission.
///
/// The two variants differ in the minimum working age used by the
/// experience plausibility rule and in whether the industry sector
/// field exists at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMode {
    /// Original form: select boxes only, no industry field, minimum
    /// working age 20.
    Classic,
    /// Later form: placeholder sentinels possible on every field,
    /// industry sector required, minimum working age 18.
    Extended,
}

impl FormMode {
    /// Minimum legal working age assumed by the experience rule.
    pub fn min_working_age(&self) -> u32 {
        match self {
            FormMode::Classic => 20,
            FormMode::Extended => 18,
        }
    }

    /// Whether this form variant collects an industry sector.
    pub fn requires_industry(&self) -> bool {
        matches!(self, FormMode::Extended)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Label string as it appears in the training columns.
    pub fn as_label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    Bachelors,
    Masters,
    Phd,
}

impl EducationLevel {
    pub fn as_label(&self) -> &'static str {
        match self {
            EducationLevel::Bachelors => "Bachelor's",
            EducationLevel::Masters => "Master's",
            EducationLevel::Phd => "PhD",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Bachelor's" => Some(EducationLevel::Bachelors),
            "Master's" => Some(EducationLevel::Masters),
            "PhD" => Some(EducationLevel::Phd),
            _ => None,
        }
    }

    /// Minimum age at which this degree is plausible.
    pub fn min_age(&self) -> u32 {
        match self {
            EducationLevel::Bachelors => 18,
            EducationLevel::Masters => 23,
            EducationLevel::Phd => 26,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkLocation {
    Urban,
    Suburban,
    Rural,
}

impl WorkLocation {
    pub fn as_label(&self) -> &'static str {
        match self {
            WorkLocation::Urban => "Urban",
            WorkLocation::Suburban => "Suburban",
            WorkLocation::Rural => "Rural",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Urban" => Some(WorkLocation::Urban),
            "Suburban" => Some(WorkLocation::Suburban),
            "Rural" => Some(WorkLocation::Rural),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndustrySector {
    Technology,
    Finance,
    Healthcare,
    Manufacturing,
    Retail,
}

impl IndustrySector {
    pub fn as_label(&self) -> &'static str {
        match self {
            IndustrySector::Technology => "Technology",
            IndustrySector::Finance => "Finance",
            IndustrySector::Healthcare => "Healthcare",
            IndustrySector::Manufacturing => "Manufacturing",
            IndustrySector::Retail => "Retail",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Technology" => Some(IndustrySector::Technology),
            "Finance" => Some(IndustrySector::Finance),
            "Healthcare" => Some(IndustrySector::Healthcare),
            "Manufacturing" => Some(IndustrySector::Manufacturing),
            "Retail" => Some(IndustrySector::Retail),
            _ => None,
        }
    }
}

/// A raw form submission. `None` means the field is still at its
/// placeholder sentinel ("Enter Age", "Select...", etc.).
///
/// Job title is free-form: any string is accepted here and matched
/// against the schema only at vectorization time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateForm {
    pub age: Option<u32>,
    pub years_experience: Option<u32>,
    pub gender: Option<Gender>,
    pub job_title: Option<String>,
    pub education: Option<EducationLevel>,
    pub location: Option<WorkLocation>,
    pub industry: Option<IndustrySector>,
}

impl CandidateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_years_experience(mut self, years: u32) -> Self {
        self.years_experience = Some(years);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_job_title(mut self, title: impl Into<String>) -> Self {
        self.job_title = Some(title.into());
        self
    }

    pub fn with_education(mut self, education: EducationLevel) -> Self {
        self.education = Some(education);
        self
    }

    pub fn with_location(mut self, location: WorkLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_industry(mut self, industry: IndustrySector) -> Self {
        self.industry = Some(industry);
        self
    }
}

/// A fully validated candidate record, ready for vectorization.
///
/// Industry is present only for submissions from the extended form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub age: u32,
    pub years_experience: u32,
    pub gender: Gender,
    pub job_title: String,
    pub education: EducationLevel,
    pub location: WorkLocation,
    pub industry: Option<IndustrySector>,
}
