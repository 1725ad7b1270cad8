//! Typed view over submitted field values.
//!
//! Form data arrives as raw JSON keyed by field key. Before any check runs,
//! the validation engine lifts each value through
//! [`FieldValue::from_json`] so type checks are written against a closed
//! tagged union instead of ad-hoc `serde_json::Value` probing.

use serde_json::Value;

use crate::enums::FieldType;

/// A submitted value, interpreted under its field's declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Key absent from the record, JSON `null`, or an empty string/list.
    Absent,
    Text(String),
    Number(f64),
    Flag(bool),
    /// Multi-valued input (multiselect, file lists).
    List(Vec<Value>),
    /// Anything that does not fit the declared type's natural shape; kept
    /// verbatim so rules can still inspect it.
    Json(Value),
}

impl FieldValue {
    /// Interpret a raw JSON value (or its absence) under `field_type`.
    ///
    /// Emptiness is decided here once: `None`, `null`, `""`, and `[]` all
    /// map to [`FieldValue::Absent`], which is what the required check and
    /// the optional-skip rule key off.
    #[must_use]
    pub fn from_json(raw: Option<&Value>, field_type: FieldType) -> Self {
        let Some(value) = raw else {
            return Self::Absent;
        };
        match value {
            Value::Null => Self::Absent,
            Value::String(s) if s.is_empty() => Self::Absent,
            Value::Array(items) if items.is_empty() => Self::Absent,
            Value::Bool(b) => Self::Flag(*b),
            Value::Array(items) => Self::List(items.clone()),
            Value::Number(n) => n.as_f64().map_or_else(|| Self::Json(value.clone()), Self::Number),
            Value::String(s) => {
                // Numeric types accept numeric strings, the way HTML form
                // submissions deliver them.
                if field_type.is_numeric() {
                    if let Ok(n) = s.parse::<f64>() {
                        return Self::Number(n);
                    }
                }
                Self::Text(s.clone())
            }
            Value::Object(_) => Self::Json(value.clone()),
        }
    }

    /// Whether the value counts as empty for the required check.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The textual content, if this value is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric content, if this value is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// A string rendering for regex rules: text verbatim, numbers and
    /// booleans via their JSON form, lists/objects as compact JSON.
    #[must_use]
    pub fn to_text_lossy(&self) -> String {
        match self {
            Self::Absent => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(n) => {
                // Render integral numbers without a trailing ".0" so patterns
                // written against form input match.
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            Self::Flag(b) => b.to_string(),
            Self::List(items) => serde_json::to_string(items).unwrap_or_default(),
            Self::Json(v) => serde_json::to_string(v).unwrap_or_default(),
        }
    }
}
