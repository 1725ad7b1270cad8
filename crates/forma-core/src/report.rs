//! Validation report types.
//!
//! Both report kinds carry the *complete* list of problems found in one pass,
//! never just the first — callers report everything wrong at once. Invalid
//! data/documents are a normal outcome here, not an error path.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One structural violation found by `validate_config`, attributed to a
/// context path inside the document (`"entities.additional[0].icon"`, …).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConfigViolation {
    pub path: String,
    pub message: String,
}

impl ConfigViolation {
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Outcome of structural template validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConfigReport {
    pub valid: bool,
    pub errors: Vec<ConfigViolation>,
}

impl ConfigReport {
    /// Build a report from collected violations; `valid` iff none.
    #[must_use]
    pub fn from_violations(errors: Vec<ConfigViolation>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// One field-level data validation failure, attributed to the field key
/// rather than positionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field_key: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field_key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_key: field_key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of validating a submitted data record against an entity schema.
/// UIs render `errors` inline per field and block submission until `valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    #[must_use]
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// All messages for one field, in evaluation order.
    #[must_use]
    pub fn messages_for(&self, field_key: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field_key == field_key)
            .map(|e| e.message.as_str())
            .collect()
    }
}
