//! # forma-core
//!
//! Core template/schema model types for Forma.
//!
//! This crate provides the passive data shapes shared across all Forma
//! crates:
//! - The template document model (`TemplateConfig` and its sections)
//! - Entity and field schemas with CRUD permissions
//! - Closed enumerations (industries, field types, rule kinds, operators)
//! - Tenant customization input types (branding + field overrides)
//! - Complete-list validation report types
//! - A typed view over submitted field values
//!
//! No behavior lives here beyond lookups and shallow patching — loading,
//! caching, structural validation, and data validation are the loader's and
//! engine's business.

pub mod customization;
pub mod entity;
pub mod enums;
pub mod field;
pub mod report;
pub mod template;
pub mod value;

pub use customization::{BrandingOverrides, FieldOverride, FieldPatch, TenantCustomizations};
pub use entity::{EntityConfig, EntityPermissions, Relationships};
pub use enums::{Complexity, ConditionalOperator, FieldType, Industry, RuleType};
pub use field::{ConditionalRule, FieldConfig, SelectOption, ValidationRule};
pub use report::{ConfigReport, ConfigViolation, FieldError, ValidationReport};
pub use template::{
    BusinessConfig, DashboardConfig, EntitiesConfig, FeaturesConfig, LayoutConfig,
    NavigationItem, TemplateConfig, TemplateIndexEntry, ThemeConfig, UiConfig,
};
pub use value::FieldValue;
