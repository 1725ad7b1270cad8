//! Entity-level schema types: [`EntityConfig`], [`EntityPermissions`],
//! [`Relationships`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::field::FieldConfig;

/// Describes one manageable record type (e.g. "Services"): its field schema,
/// CRUD permissions, and display metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntityConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub singular: String,
    #[serde(default)]
    pub plural: String,
    /// Opaque icon identifier, resolved by the UI layer.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    /// Ordered field list, unique by `key` (enforced by `validate_config`,
    /// not here).
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
    #[serde(default)]
    pub permissions: EntityPermissions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Relationships>,
}

impl EntityConfig {
    /// Look up a field by key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Mutable field lookup, used by the override engine.
    pub fn field_mut(&mut self, key: &str) -> Option<&mut FieldConfig> {
        self.fields.iter_mut().find(|f| f.key == key)
    }

    /// Fields sorted for display: ascending `order`, ties keep declaration
    /// order (stable sort). `order` values need not be contiguous.
    #[must_use]
    pub fn fields_in_display_order(&self) -> Vec<&FieldConfig> {
        let mut sorted: Vec<&FieldConfig> = self.fields.iter().collect();
        sorted.sort_by(|a, b| a.order.total_cmp(&b.order));
        sorted
    }
}

/// The five CRUD permission flags. All five are required on the wire —
/// a document omitting one fails to parse.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
pub struct EntityPermissions {
    pub create: bool,
    pub read: bool,
    pub update: bool,
    pub delete: bool,
    pub bulk: bool,
}

impl EntityPermissions {
    /// Everything allowed. Convenient for tests and starter templates.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            create: true,
            read: true,
            update: true,
            delete: true,
            bulk: true,
        }
    }

    /// Read-only entity.
    #[must_use]
    pub const fn read_only() -> Self {
        Self {
            create: false,
            read: true,
            update: false,
            delete: false,
            bulk: false,
        }
    }
}

/// Relation lists to other entity keys. Relation only, never ownership —
/// the engine does not resolve or cascade these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Relationships {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub belongs_to: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub has_many: Vec<String>,
}
