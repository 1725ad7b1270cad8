//! Field-level schema types: [`FieldConfig`], [`ValidationRule`],
//! [`ConditionalRule`], and [`SelectOption`].
//!
//! Wire format is `camelCase` JSON as produced by the authoring stack.
//! Display strings are modeled with lenient defaults (empty string) so that a
//! sloppy document still parses and `validate_config` can report *every*
//! problem in one pass; type tags and structural shapes stay serde-strict.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ConditionalOperator, FieldType, RuleType};

/// One form/table field definition inside an entity schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Stable identifier. Form data is keyed by this.
    pub key: String,
    /// Display label, also used as the subject of validation messages.
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    /// Display sequence, ascending. Need not be contiguous; ties keep
    /// declaration order.
    #[serde(default)]
    pub order: f64,

    /// Declarative rules evaluated in list order after the built-in type check.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation: Vec<ValidationRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    /// Visual grouping hint for form layouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Visibility condition, exposed verbatim to UI layers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_if: Option<ConditionalRule>,
    /// Conditional requiredness, exposed verbatim to UI layers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_if: Option<ConditionalRule>,
    /// Choices for select-like types. Meaningless on other types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    /// Lower bound: numeric value for number/currency, character length for
    /// text/textarea.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound, same dual semantics as `min`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Display format hint (e.g. a date pattern), opaque to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl FieldConfig {
    /// Minimal field with everything optional left empty. Primarily for
    /// tests and programmatic template construction.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            field_type,
            required: false,
            order: 0.0,
            validation: Vec::new(),
            placeholder: None,
            help_text: None,
            group: None,
            show_if: None,
            required_if: None,
            options: Vec::new(),
            min: None,
            max: None,
            format: None,
        }
    }
}

/// One declarative validation rule. `value` semantics depend on `type`:
/// a pattern string for `regex`, a `{min, max}` object for `range`/`length`,
/// a registered validator name for `custom`, unused for `required`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationRule {
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Message appended on failure. Falls back to `"<label> is invalid"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Condition over another field's submitted value. Consumed by UI layers to
/// decide visibility/requiredness; the engine carries it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConditionalRule {
    /// Key of the field the condition reads.
    pub field: String,
    pub operator: ConditionalOperator,
    pub value: serde_json::Value,
}

/// One choice of a select-like field. Authoring tools emit either a bare
/// string or a `{value, label}` pair; both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SelectOption {
    Simple(String),
    Detailed { value: String, label: String },
}

impl SelectOption {
    /// The stored value of this option.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Simple(v) => v,
            Self::Detailed { value, .. } => value,
        }
    }

    /// The display label (the value itself for bare-string options).
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Simple(v) => v,
            Self::Detailed { label, .. } => label,
        }
    }
}
