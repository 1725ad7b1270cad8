//! Tenant customization merge and the field override engine.
//!
//! Overrides always operate on a deep clone — the cached canonical document
//! is shared by every tenant and must never be handed to this module's
//! mutating internals. An override that references a removed entity or field
//! degrades gracefully (skip + debug log) instead of breaking the whole
//! template; [`lint_customizations`] surfaces those misses at authoring time.

use forma_core::{
    ConfigViolation, FieldOverride, TemplateConfig, TenantCustomizations, ThemeConfig,
};

/// What happened to a single override.
enum OverrideOutcome {
    Applied,
    UnknownEntity,
    UnknownField,
}

/// Produce a tenant-specific template: deep-clone `base`, apply branding onto
/// `ui.theme`, then apply each field override in list order (last write wins
/// per field). `base` is never mutated.
#[must_use]
pub fn merge_with_customizations(
    base: &TemplateConfig,
    customizations: &TenantCustomizations,
) -> TemplateConfig {
    let mut merged = base.clone();

    if let Some(branding) = &customizations.branding {
        apply_branding(&mut merged.ui.theme, branding);
    }

    for ov in &customizations.fields {
        match apply_field_override(&mut merged, ov) {
            OverrideOutcome::Applied => {}
            OverrideOutcome::UnknownEntity => {
                tracing::debug!(
                    entity = ov.entity_key(),
                    field = ov.field_key(),
                    "override entity does not resolve, skipping"
                );
            }
            OverrideOutcome::UnknownField => {
                tracing::debug!(
                    entity = ov.entity_key(),
                    field = ov.field_key(),
                    "override field not found, skipping"
                );
            }
        }
    }

    merged
}

/// Authoring-time lint: report every override in `customizations` that would
/// silently no-op when merged onto `base`.
///
/// Overrides are replayed onto a scratch clone in order, so a field added by
/// an earlier `add` is visible to later overrides and a field removed by
/// `hide` is not.
#[must_use]
pub fn lint_customizations(
    base: &TemplateConfig,
    customizations: &TenantCustomizations,
) -> Vec<ConfigViolation> {
    let mut scratch = base.clone();
    let mut findings = Vec::new();

    for (i, ov) in customizations.fields.iter().enumerate() {
        let path = format!("fields[{i}]");
        match apply_field_override(&mut scratch, ov) {
            OverrideOutcome::Applied => {}
            OverrideOutcome::UnknownEntity => findings.push(ConfigViolation::new(
                path,
                format!("entity '{}' does not resolve", ov.entity_key()),
            )),
            OverrideOutcome::UnknownField => findings.push(ConfigViolation::new(
                path,
                format!(
                    "field '{}' not found on entity '{}'",
                    ov.field_key(),
                    ov.entity_key()
                ),
            )),
        }
    }

    findings
}

fn apply_branding(theme: &mut ThemeConfig, branding: &forma_core::BrandingOverrides) {
    if let Some(color) = &branding.primary_color {
        theme.primary_color = color.clone();
    }
    if let Some(color) = &branding.secondary_color {
        theme.secondary_color = color.clone();
    }
    if let Some(name) = &branding.brand_name {
        theme.brand_name = Some(name.clone());
    }
    if let Some(url) = &branding.logo_url {
        theme.logo_url = Some(url.clone());
    }
}

fn apply_field_override(config: &mut TemplateConfig, ov: &FieldOverride) -> OverrideOutcome {
    let Some(entity) = config.entities.entity_mut(ov.entity_key()) else {
        return OverrideOutcome::UnknownEntity;
    };

    match ov {
        FieldOverride::Modify {
            field_key, patch, ..
        } => entity.field_mut(field_key).map_or(
            OverrideOutcome::UnknownField,
            |field| {
                patch.apply_to(field);
                OverrideOutcome::Applied
            },
        ),
        FieldOverride::Hide { field_key, .. } => {
            let before = entity.fields.len();
            entity.fields.retain(|f| f.key != *field_key);
            if entity.fields.len() < before {
                OverrideOutcome::Applied
            } else {
                OverrideOutcome::UnknownField
            }
        }
        FieldOverride::Add { field, .. } => {
            entity.fields.push(field.clone());
            OverrideOutcome::Applied
        }
        FieldOverride::Require { field_key, .. } => set_required(entity, field_key, true),
        FieldOverride::Optional { field_key, .. } => set_required(entity, field_key, false),
    }
}

fn set_required(
    entity: &mut forma_core::EntityConfig,
    field_key: &str,
    required: bool,
) -> OverrideOutcome {
    entity.field_mut(field_key).map_or(
        OverrideOutcome::UnknownField,
        |field| {
            field.required = required;
            OverrideOutcome::Applied
        },
    )
}
