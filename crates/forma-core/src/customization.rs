//! Tenant customization input types.
//!
//! A tenant-configuration store supplies a [`TenantCustomizations`] document;
//! the loader's merge engine applies it onto a deep clone of a base template.
//! Overrides are a tagged enum on `action` so each action carries exactly the
//! payload it needs — `modify` a shallow [`FieldPatch`], `add` a complete
//! [`FieldConfig`], the rest nothing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::field::{ConditionalRule, FieldConfig, SelectOption, ValidationRule};

/// Per-tenant customization document: optional branding plus an ordered list
/// of field overrides. Override order matters — later entries win.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantCustomizations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<BrandingOverrides>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldOverride>,
}

/// Branding values applied directly onto `ui.theme`. Absent values leave the
/// base theme untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandingOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// One tenant field override, applied in list order with last-write-wins
/// semantics per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum FieldOverride {
    /// Shallow-merge the patch onto the matched field. No-op if not found.
    #[serde(rename_all = "camelCase")]
    Modify {
        entity_key: String,
        field_key: String,
        #[serde(rename = "override")]
        patch: FieldPatch,
    },
    /// Remove the matched field from the entity's field list entirely.
    #[serde(rename_all = "camelCase")]
    Hide {
        entity_key: String,
        field_key: String,
    },
    /// Append a full field definition. Duplicate keys are possible and
    /// intentionally not de-duplicated here — availability of overrides is
    /// preferred over strict dedup; `validate_config` catches true
    /// structural problems.
    #[serde(rename_all = "camelCase")]
    Add {
        entity_key: String,
        field_key: String,
        #[serde(rename = "override")]
        field: FieldConfig,
    },
    /// Set `required = true` on the matched field.
    #[serde(rename_all = "camelCase")]
    Require {
        entity_key: String,
        field_key: String,
    },
    /// Set `required = false` on the matched field.
    #[serde(rename_all = "camelCase")]
    Optional {
        entity_key: String,
        field_key: String,
    },
}

impl FieldOverride {
    /// The entity this override targets.
    #[must_use]
    pub fn entity_key(&self) -> &str {
        match self {
            Self::Modify { entity_key, .. }
            | Self::Hide { entity_key, .. }
            | Self::Add { entity_key, .. }
            | Self::Require { entity_key, .. }
            | Self::Optional { entity_key, .. } => entity_key,
        }
    }

    /// The field this override targets.
    #[must_use]
    pub fn field_key(&self) -> &str {
        match self {
            Self::Modify { field_key, .. }
            | Self::Hide { field_key, .. }
            | Self::Add { field_key, .. }
            | Self::Require { field_key, .. }
            | Self::Optional { field_key, .. } => field_key,
        }
    }
}

/// Shallow patch for `modify` overrides. Only present values are written;
/// `key` and `type` are deliberately not patchable — renaming or retyping a
/// field is `hide` + `add`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_if: Option<ConditionalRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_if: Option<ConditionalRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Vec<ValidationRule>>,
}

impl FieldPatch {
    /// Write every present value onto `field`, leaving the rest untouched.
    pub fn apply_to(&self, field: &mut FieldConfig) {
        if let Some(label) = &self.label {
            field.label = label.clone();
        }
        if let Some(required) = self.required {
            field.required = required;
        }
        if let Some(order) = self.order {
            field.order = order;
        }
        if let Some(placeholder) = &self.placeholder {
            field.placeholder = Some(placeholder.clone());
        }
        if let Some(help_text) = &self.help_text {
            field.help_text = Some(help_text.clone());
        }
        if let Some(group) = &self.group {
            field.group = Some(group.clone());
        }
        if let Some(show_if) = &self.show_if {
            field.show_if = Some(show_if.clone());
        }
        if let Some(required_if) = &self.required_if {
            field.required_if = Some(required_if.clone());
        }
        if let Some(options) = &self.options {
            field.options = options.clone();
        }
        if let Some(min) = self.min {
            field.min = Some(min);
        }
        if let Some(max) = self.max {
            field.max = Some(max);
        }
        if let Some(format) = &self.format {
            field.format = Some(format.clone());
        }
        if let Some(validation) = &self.validation {
            field.validation = validation.clone();
        }
    }
}
