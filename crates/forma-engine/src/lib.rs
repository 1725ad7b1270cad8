//! # forma-engine
//!
//! In-process template registry and data validation for Forma.
//!
//! The [`TemplateRegistry`] holds already-loaded template documents, tracks
//! which one is active for the current logical session, and answers
//! entity/field queries against the active template. It performs zero I/O
//! and re-runs no validation — registration assumes the caller already
//! validated, typically via `forma-loader`.
//!
//! The registry is an explicitly constructed value, cheap enough to
//! instantiate per session. Multi-threaded hosts either do that or guard a
//! shared instance themselves; nothing in here needs synchronization.

mod error;
mod validate;

pub use error::EngineError;
pub use validate::{validate_entity_fields, ValidatorRegistry};

use std::collections::HashMap;

use forma_core::{EntityConfig, TemplateConfig, ValidationReport};

/// Conventional CRUD endpoint paths for one entity. A pure naming
/// convention — no guarantee those routes exist on any server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityEndpoints {
    pub list: String,
    pub create: String,
    pub update: String,
    pub delete: String,
    pub bulk: String,
}

impl EntityEndpoints {
    fn for_key(entity_key: &str) -> Self {
        let base = format!("/{}", entity_key.to_lowercase());
        Self {
            list: base.clone(),
            create: base.clone(),
            update: format!("{base}/:id"),
            delete: format!("{base}/:id"),
            bulk: format!("{base}/bulk"),
        }
    }
}

/// Process-local registry of loaded templates plus the active-template
/// pointer and the host's named custom validators.
#[derive(Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, TemplateConfig>,
    active: Option<String>,
    validators: ValidatorRegistry,
}

impl TemplateRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry keyed by `config.id`.
    ///
    /// No validation is re-run here — the registry has zero I/O and no
    /// failure modes beyond "not found".
    pub fn register_template(&mut self, config: TemplateConfig) {
        self.templates.insert(config.id.clone(), config);
    }

    /// Select the active template for this registry instance.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotRegistered`] if `id` was never registered.
    pub fn set_active_template(&mut self, id: &str) -> Result<(), EngineError> {
        if !self.templates.contains_key(id) {
            return Err(EngineError::NotRegistered(id.to_string()));
        }
        self.active = Some(id.to_string());
        Ok(())
    }

    /// The active template, or `None` if nothing was activated yet. Callers
    /// must handle the absent case rather than assume a default.
    #[must_use]
    pub fn active_template(&self) -> Option<&TemplateConfig> {
        self.active.as_deref().and_then(|id| self.templates.get(id))
    }

    /// Look up any registered template by id.
    #[must_use]
    pub fn template(&self, id: &str) -> Option<&TemplateConfig> {
        self.templates.get(id)
    }

    /// Registered template ids, sorted.
    #[must_use]
    pub fn registered_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Resolve an entity of the active template: `"primary"`/`"secondary"`
    /// directly, anything else case-insensitively against additional entity
    /// names. A query, not a precondition check — `None` means no match (or
    /// no active template).
    #[must_use]
    pub fn entity_config(&self, entity_key: &str) -> Option<&EntityConfig> {
        self.active_template()
            .and_then(|t| t.entities.entity(entity_key))
    }

    /// Derive the conventional CRUD endpoint paths for an entity.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoActiveTemplate`] if nothing is active,
    /// [`EngineError::UnknownEntity`] if the key does not resolve. Both are
    /// programming/config errors, hence loud.
    pub fn entity_endpoints(&self, entity_key: &str) -> Result<EntityEndpoints, EngineError> {
        let template = self
            .active_template()
            .ok_or(EngineError::NoActiveTemplate)?;
        if template.entities.entity(entity_key).is_none() {
            return Err(EngineError::UnknownEntity(entity_key.to_string()));
        }
        Ok(EntityEndpoints::for_key(entity_key))
    }

    /// Validate a submitted record against an entity of the active template.
    ///
    /// Invalid *data* is a normal outcome reported in the returned
    /// [`ValidationReport`]; this only errs when `entity_key` itself does
    /// not resolve.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoActiveTemplate`] / [`EngineError::UnknownEntity`].
    pub fn validate_entity_data(
        &self,
        entity_key: &str,
        data: &serde_json::Value,
    ) -> Result<ValidationReport, EngineError> {
        let template = self
            .active_template()
            .ok_or(EngineError::NoActiveTemplate)?;
        let entity = template
            .entities
            .entity(entity_key)
            .ok_or_else(|| EngineError::UnknownEntity(entity_key.to_string()))?;
        Ok(validate_entity_fields(entity, data, &self.validators))
    }

    /// Register a named custom validator for `custom` rules. Replaces any
    /// previous predicate under the same name.
    pub fn register_validator<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&serde_json::Value) -> bool + Send + Sync + 'static,
    {
        self.validators.register(name, predicate);
    }
}
