//! The ordered feature-column schema expected by the trained model.
//!
//! The model receives positional numeric input, so column order is part of
//! the contract: a [`FeatureSchema`] preserves the exact order it was built
//! with, and every vector constructed against it comes back in that order.
//!
//! The schema is loaded once at startup from a JSON artifact (a plain array
//! of column names exported alongside the model) and is read-only for the
//! process lifetime. Construction rejects schemas that are empty, contain
//! duplicates, or lack the two direct numeric columns - a schema that
//! cannot carry age and experience would otherwise drop them silently.
//!
//! # Examples
//!
//! ```
//! use paygrade::schema::FeatureSchema;
//!
//! let schema = FeatureSchema::new(vec![
//!     "Age".to_string(),
//!     "Years of Experience".to_string(),
//!     "Gender_Male".to_string(),
//! ])?;
//! assert_eq!(schema.position("Gender_Male"), Some(2));
//! # Ok::<(), paygrade::schema::SchemaError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::path::Path;

/// Column carrying the candidate's age.
pub const AGE_COLUMN: &str = "Age";
/// Column carrying the candidate's years of experience.
pub const EXPERIENCE_COLUMN: &str = "Years of Experience";

/// Indicator-column prefix for gender values.
pub const GENDER_PREFIX: &str = "Gender_";
/// Indicator-column prefix for education levels.
pub const EDUCATION_PREFIX: &str = "Education Level_";
/// Indicator-column prefix for job titles.
pub const JOB_TITLE_PREFIX: &str = "Job Title_";
/// Indicator-column prefix for work locations.
pub const LOCATION_PREFIX: &str = "Location_";
/// Indicator-column prefix for industry sectors.
pub const INDUSTRY_PREFIX: &str = "Industry Sector_";

/// Problems constructing or loading a schema.
#[derive(Debug)]
pub enum SchemaError {
    /// The column list was empty.
    EmptySchema,
    /// A required direct numeric column is absent.
    MissingColumn(&'static str),
    /// The same column name appeared twice.
    DuplicateColumn(String),
    /// The artifact could not be read.
    Io(std::io::Error),
    /// The artifact was not a JSON array of strings.
    Parse(serde_json::Error),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::EmptySchema => write!(f, "schema contains no columns"),
            SchemaError::MissingColumn(name) => {
                write!(f, "schema is missing required column '{}'", name)
            }
            SchemaError::DuplicateColumn(name) => {
                write!(f, "schema lists column '{}' more than once", name)
            }
            SchemaError::Io(err) => write!(f, "failed to read schema artifact: {}", err),
            SchemaError::Parse(err) => write!(f, "failed to parse schema artifact: {}", err),
        }
    }
}

impl Error for SchemaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SchemaError::Io(err) => Some(err),
            SchemaError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SchemaError {
    fn from(err: std::io::Error) -> Self {
        SchemaError::Io(err)
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Parse(err)
    }
}

/// Ordered, read-only set of feature-column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FeatureSchema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl TryFrom<Vec<String>> for FeatureSchema {
    type Error = SchemaError;

    fn try_from(columns: Vec<String>) -> Result<Self, SchemaError> {
        FeatureSchema::new(columns)
    }
}

impl From<FeatureSchema> for Vec<String> {
    fn from(schema: FeatureSchema) -> Vec<String> {
        schema.columns
    }
}

impl FeatureSchema {
    /// Build a schema from an ordered column list.
    ///
    /// Fails if the list is empty, contains duplicates, or lacks the
    /// `Age` / `Years of Experience` columns.
    pub fn new(columns: Vec<String>) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::EmptySchema);
        }

        let mut index = HashMap::with_capacity(columns.len());
        for (pos, name) in columns.iter().enumerate() {
            if index.insert(name.clone(), pos).is_some() {
                return Err(SchemaError::DuplicateColumn(name.clone()));
            }
        }

        for required in [AGE_COLUMN, EXPERIENCE_COLUMN] {
            if !index.contains_key(required) {
                return Err(SchemaError::MissingColumn(required));
            }
        }

        Ok(FeatureSchema { columns, index })
    }

    /// Load a schema from a JSON artifact (an array of column names).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let json = std::fs::read_to_string(path)?;
        let columns: Vec<String> = serde_json::from_str(&json)?;
        FeatureSchema::new(columns)
    }

    /// Save the column list as a pretty-printed JSON array.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json =
            serde_json::to_string_pretty(&self.columns).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Columns in declared order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a column, if present. Exact string match only.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_schema_preserves_order() {
        let schema = FeatureSchema::new(columns(&[
            "Age",
            "Years of Experience",
            "Gender_Male",
            "Gender_Female",
        ]))
        .unwrap();

        assert_eq!(schema.len(), 4);
        assert_eq!(schema.columns()[0], "Age");
        assert_eq!(schema.position("Gender_Female"), Some(3));
        assert_eq!(schema.position("gender_female"), None); // no case folding
    }

    #[test]
    fn test_empty_schema_rejected() {
        assert!(matches!(
            FeatureSchema::new(Vec::new()),
            Err(SchemaError::EmptySchema)
        ));
    }

    #[test]
    fn test_missing_numeric_columns_fail_loudly() {
        let err = FeatureSchema::new(columns(&["Gender_Male", "Location_Urban"]));
        assert!(matches!(err, Err(SchemaError::MissingColumn(AGE_COLUMN))));

        let err = FeatureSchema::new(columns(&["Age", "Gender_Male"]));
        assert!(matches!(
            err,
            Err(SchemaError::MissingColumn(EXPERIENCE_COLUMN))
        ));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let err = FeatureSchema::new(columns(&["Age", "Years of Experience", "Age"]));
        match err {
            Err(SchemaError::DuplicateColumn(name)) => assert_eq!(name, "Age"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("paygrade_schema_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("feature_schema.json");

        let schema = FeatureSchema::new(columns(&[
            "Age",
            "Years of Experience",
            "Job Title_Data Analyst",
        ]))
        .unwrap();
        schema.save(&path).unwrap();

        let loaded = FeatureSchema::load(&path).unwrap();
        assert_eq!(loaded.columns(), schema.columns());

        std::fs::remove_file(&path).unwrap();
    }
}
