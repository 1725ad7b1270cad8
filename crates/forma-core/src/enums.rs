//! Closed enumerations for the Forma template model.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! except [`ConditionalOperator`], whose wire form is the operator symbol itself
//! (`"=="`, `"!="`, …) to match the document format produced by authoring tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Industry
// ---------------------------------------------------------------------------

/// Business vertical a template document targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Wellness,
    Restaurant,
    Healthcare,
    Fitness,
    Beauty,
    Professional,
    Retail,
    Education,
    RealEstate,
    Automotive,
    Custom,
}

impl Industry {
    /// All shipped industries, in catalog order. `Custom` is excluded — it is
    /// never listed in the template index.
    pub const SHIPPED: &'static [Self] = &[
        Self::Wellness,
        Self::Restaurant,
        Self::Healthcare,
        Self::Fitness,
        Self::Beauty,
        Self::Professional,
        Self::Retail,
        Self::Education,
        Self::RealEstate,
        Self::Automotive,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wellness => "wellness",
            Self::Restaurant => "restaurant",
            Self::Healthcare => "healthcare",
            Self::Fitness => "fitness",
            Self::Beauty => "beauty",
            Self::Professional => "professional",
            Self::Retail => "retail",
            Self::Education => "education",
            Self::RealEstate => "real_estate",
            Self::Automotive => "automotive",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FieldType
// ---------------------------------------------------------------------------

/// Type of a form/table field. Closed set — unknown tags fail deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Textarea,
    Email,
    Url,
    Phone,
    Number,
    Currency,
    Percentage,
    Date,
    Datetime,
    Time,
    Select,
    Multiselect,
    Radio,
    Checkbox,
    File,
    Image,
    Color,
    Toggle,
    Range,
    Json,
    Markdown,
    Code,
}

impl FieldType {
    /// Whether this type renders as an option list and therefore needs
    /// non-empty `options` when the field is required.
    #[must_use]
    pub const fn is_select_like(self) -> bool {
        matches!(self, Self::Select | Self::Multiselect | Self::Radio)
    }

    /// Whether `min`/`max` bound the numeric value (as opposed to the
    /// character length for textual types).
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::Currency)
    }

    /// Whether `min`/`max` bound the character length.
    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(self, Self::Text | Self::Textarea)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Email => "email",
            Self::Url => "url",
            Self::Phone => "phone",
            Self::Number => "number",
            Self::Currency => "currency",
            Self::Percentage => "percentage",
            Self::Date => "date",
            Self::Datetime => "datetime",
            Self::Time => "time",
            Self::Select => "select",
            Self::Multiselect => "multiselect",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::File => "file",
            Self::Image => "image",
            Self::Color => "color",
            Self::Toggle => "toggle",
            Self::Range => "range",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Code => "code",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RuleType
// ---------------------------------------------------------------------------

/// Kind of a declarative validation rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    Regex,
    Custom,
    Range,
    Length,
    Required,
}

impl RuleType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regex => "regex",
            Self::Custom => "custom",
            Self::Range => "range",
            Self::Length => "length",
            Self::Required => "required",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConditionalOperator
// ---------------------------------------------------------------------------

/// Comparison operator inside a `showIf`/`requiredIf` rule.
///
/// The engine never evaluates these — UI layers do. They are carried verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ConditionalOperator {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "includes")]
    Includes,
    #[serde(rename = "excludes")]
    Excludes,
}

impl ConditionalOperator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Includes => "includes",
            Self::Excludes => "excludes",
        }
    }
}

impl fmt::Display for ConditionalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Complexity
// ---------------------------------------------------------------------------

/// Rough size class of a template, surfaced by the catalog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Starter,
    Standard,
    Advanced,
}

impl Complexity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Standard => "standard",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
