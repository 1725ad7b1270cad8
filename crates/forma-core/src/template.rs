//! Root template document types: [`TemplateConfig`] and its sections.
//!
//! A template document describes one business vertical end to end: which
//! entities exist, what the theme and layout look like, and which business
//! hooks and feature flags apply. Documents are immutable once validated —
//! tenant customization always goes through a deep clone (see the loader's
//! merge engine), never through in-place mutation.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entity::EntityConfig;
use crate::enums::{Complexity, Industry};

/// The root configuration document for one business-vertical template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub industry: Industry,
    /// Semantic version string of the document.
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    pub entities: EntitiesConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub business: BusinessConfig,
    #[serde(default)]
    pub features: FeaturesConfig,
}

/// The entity schemas of a template: one required primary entity, an optional
/// secondary, and any number of additional entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntitiesConfig {
    #[serde(default)]
    pub primary: EntityConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<EntityConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<EntityConfig>,
}

impl EntitiesConfig {
    /// Resolve an entity by key: `"primary"`/`"secondary"` directly, anything
    /// else matched case-insensitively against `additional[].name`.
    ///
    /// Lookup is a query, not a precondition check — `None` means no match.
    #[must_use]
    pub fn entity(&self, key: &str) -> Option<&EntityConfig> {
        match key {
            "primary" => Some(&self.primary),
            "secondary" => self.secondary.as_ref(),
            other => self
                .additional
                .iter()
                .find(|e| e.name.eq_ignore_ascii_case(other)),
        }
    }

    /// Mutable variant of [`entity`](Self::entity), used by the override
    /// engine on cloned documents.
    pub fn entity_mut(&mut self, key: &str) -> Option<&mut EntityConfig> {
        match key {
            "primary" => Some(&mut self.primary),
            "secondary" => self.secondary.as_mut(),
            other => self
                .additional
                .iter_mut()
                .find(|e| e.name.eq_ignore_ascii_case(other)),
        }
    }
}

/// Presentation configuration: theme tokens, per-component overrides, layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Keyed component-override map, opaque to the engine.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub components: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Theme tokens. `primary_color` and `secondary_color` are required by
/// `validate_config`; every present color must be a syntactically valid CSS
/// color token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub secondary_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Navigation and dashboard description, consumed by rendering layers.
/// The engine validates shape only, never content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub navigation: Vec<NavigationItem>,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// One navigation entry of the admin shell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Dashboard widget list, opaque configuration for the rendering layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub widgets: Vec<serde_json::Value>,
}

/// Declarative business hook lists. Pass-through data — interpreted by host
/// application layers, never by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workflows: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validations: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub automations: Vec<serde_json::Value>,
}

/// Feature flag tag lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enabled: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled: Vec<String>,
}

/// One row of the template catalog index document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateIndexEntry {
    pub id: String,
    pub industry: Industry,
    pub complexity: Complexity,
}
