//! Structural template validation.
//!
//! [`validate_config`] is a pure function, no I/O. It collects the *complete*
//! list of violations rather than failing fast, so a caller can report
//! everything wrong with a document in one pass. Each violation carries a
//! context path in wire (`camelCase`) form, e.g.
//! `entities.additional[0].fields[2].key`.
//!
//! Shape-level problems (unknown field type tags, non-boolean permissions)
//! never reach this function — serde rejects them at parse time as
//! [`LoadError::Parse`](crate::LoadError::Parse).

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use forma_core::{ConfigReport, ConfigViolation, EntityConfig, TemplateConfig, ThemeConfig};

/// Accepts hex colors (3/4/6/8 digits), `rgb()`/`rgba()`/`hsl()`/`hsla()`
/// function syntax, and bare named keywords. Syntax only — `rebeccapurble`
/// passes; catching typos in keyword names is a rendering-layer concern.
static CSS_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|(?:rgb|rgba|hsl|hsla)\([^)]+\)|[a-zA-Z]+)$",
    )
    .expect("CSS color pattern should compile")
});

/// Whether `value` is a syntactically valid CSS color token.
#[must_use]
pub fn is_css_color(value: &str) -> bool {
    CSS_COLOR.is_match(value)
}

/// Validate the structural integrity of a template document.
///
/// Checks top-level identity fields, every entity schema (primary, secondary,
/// each additional entity under its own context path), and theme color
/// syntax. Returns the full violation list; `valid` iff it is empty.
#[must_use]
pub fn validate_config(config: &TemplateConfig) -> ConfigReport {
    let mut errors = Vec::new();

    require_non_empty(&mut errors, "id", &config.id);
    require_non_empty(&mut errors, "name", &config.name);
    require_non_empty(&mut errors, "version", &config.version);
    if !config.version.is_empty() && semver::Version::parse(&config.version).is_err() {
        errors.push(ConfigViolation::new(
            "version",
            format!("'{}' is not a semantic version", config.version),
        ));
    }

    validate_entity(&mut errors, "entities.primary", &config.entities.primary);
    if let Some(secondary) = &config.entities.secondary {
        validate_entity(&mut errors, "entities.secondary", secondary);
    }
    for (i, entity) in config.entities.additional.iter().enumerate() {
        validate_entity(&mut errors, &format!("entities.additional[{i}]"), entity);
    }

    validate_theme(&mut errors, &config.ui.theme);

    ConfigReport::from_violations(errors)
}

fn require_non_empty(errors: &mut Vec<ConfigViolation>, path: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(ConfigViolation::new(path, "must not be empty"));
    }
}

fn validate_entity(errors: &mut Vec<ConfigViolation>, path: &str, entity: &EntityConfig) {
    require_non_empty(errors, &format!("{path}.name"), &entity.name);
    require_non_empty(errors, &format!("{path}.singular"), &entity.singular);
    require_non_empty(errors, &format!("{path}.plural"), &entity.plural);
    require_non_empty(errors, &format!("{path}.icon"), &entity.icon);
    require_non_empty(errors, &format!("{path}.color"), &entity.color);

    let mut seen_keys: HashSet<&str> = HashSet::new();
    for (i, field) in entity.fields.iter().enumerate() {
        let field_path = format!("{path}.fields[{i}]");
        require_non_empty(errors, &format!("{field_path}.key"), &field.key);
        require_non_empty(errors, &format!("{field_path}.label"), &field.label);

        if !field.key.is_empty() && !seen_keys.insert(field.key.as_str()) {
            errors.push(ConfigViolation::new(
                format!("{field_path}.key"),
                format!("duplicate field key '{}'", field.key),
            ));
        }

        if field.required && field.field_type.is_select_like() && field.options.is_empty() {
            errors.push(ConfigViolation::new(
                format!("{field_path}.options"),
                format!(
                    "required {} field must have options",
                    field.field_type
                ),
            ));
        }
    }
}

fn validate_theme(errors: &mut Vec<ConfigViolation>, theme: &ThemeConfig) {
    check_color(errors, "ui.theme.primaryColor", &theme.primary_color, true);
    check_color(
        errors,
        "ui.theme.secondaryColor",
        &theme.secondary_color,
        true,
    );
    for (path, value) in [
        ("ui.theme.accentColor", &theme.accent_color),
        ("ui.theme.backgroundColor", &theme.background_color),
        ("ui.theme.textColor", &theme.text_color),
    ] {
        if let Some(value) = value {
            check_color(errors, path, value, false);
        }
    }
}

fn check_color(errors: &mut Vec<ConfigViolation>, path: &str, value: &str, required: bool) {
    if value.is_empty() {
        if required {
            errors.push(ConfigViolation::new(path, "must not be empty"));
        }
        return;
    }
    if !is_css_color(value) {
        errors.push(ConfigViolation::new(
            path,
            format!("'{value}' is not a valid CSS color"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forma_core::{
        EntitiesConfig, EntityConfig, EntityPermissions, FieldConfig, FieldType, Industry,
        ThemeConfig, UiConfig,
    };
    use pretty_assertions::assert_eq;

    fn valid_entity(name: &str) -> EntityConfig {
        EntityConfig {
            name: name.into(),
            singular: name.trim_end_matches('s').into(),
            plural: name.into(),
            icon: "sparkles".into(),
            color: "#2563eb".into(),
            fields: vec![
                {
                    let mut f = FieldConfig::new("title", "Title", FieldType::Text);
                    f.required = true;
                    f.order = 1.0;
                    f
                },
                {
                    let mut f = FieldConfig::new("price", "Price", FieldType::Currency);
                    f.order = 2.0;
                    f
                },
            ],
            permissions: EntityPermissions::all(),
            relationships: None,
        }
    }

    fn valid_config() -> TemplateConfig {
        TemplateConfig {
            id: "wellness-spa".into(),
            name: "Wellness Spa".into(),
            industry: Industry::Wellness,
            version: "1.2.0".into(),
            description: "Spa and massage studio template".into(),
            entities: EntitiesConfig {
                primary: valid_entity("Services"),
                secondary: None,
                additional: vec![],
            },
            ui: UiConfig {
                theme: ThemeConfig {
                    primary_color: "#0f766e".into(),
                    secondary_color: "#f59e0b".into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            business: Default::default(),
            features: Default::default(),
        }
    }

    fn paths(report: &ConfigReport) -> Vec<&str> {
        report.errors.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn valid_document_passes() {
        let report = validate_config(&valid_config());
        assert!(report.valid, "unexpected violations: {:?}", report.errors);
    }

    #[test]
    fn reports_all_violations_in_one_pass() {
        // Both a missing entity icon and a missing secondary theme color must
        // show up in the same report.
        let mut config = valid_config();
        config.entities.primary.icon = String::new();
        config.ui.theme.secondary_color = String::new();

        let report = validate_config(&config);
        assert!(!report.valid);
        let paths = paths(&report);
        assert!(paths.contains(&"entities.primary.icon"));
        assert!(paths.contains(&"ui.theme.secondaryColor"));
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn top_level_identity_fields_must_be_non_empty() {
        let mut config = valid_config();
        config.id = String::new();
        config.name = "   ".into();
        config.version = String::new();

        let report = validate_config(&config);
        let paths = paths(&report);
        assert!(paths.contains(&"id"));
        assert!(paths.contains(&"name"));
        assert!(paths.contains(&"version"));
    }

    #[test]
    fn version_must_be_semver() {
        let mut config = valid_config();
        config.version = "latest".into();
        let report = validate_config(&config);
        assert!(!report.valid);
        assert_eq!(report.errors[0].path, "version");
    }

    #[test]
    fn additional_entities_report_indexed_paths() {
        let mut config = valid_config();
        let mut broken = valid_entity("Team");
        broken.plural = String::new();
        config.entities.additional = vec![valid_entity("Categories"), broken];

        let report = validate_config(&config);
        assert_eq!(paths(&report), vec!["entities.additional[1].plural"]);
    }

    #[test]
    fn secondary_entity_is_checked_when_present() {
        let mut config = valid_config();
        let mut secondary = valid_entity("Categories");
        secondary.color = String::new();
        config.entities.secondary = Some(secondary);

        let report = validate_config(&config);
        assert_eq!(paths(&report), vec!["entities.secondary.color"]);
    }

    #[test]
    fn duplicate_field_keys_are_reported() {
        let mut config = valid_config();
        let mut dup = FieldConfig::new("title", "Title again", FieldType::Text);
        dup.order = 3.0;
        config.entities.primary.fields.push(dup);

        let report = validate_config(&config);
        assert_eq!(paths(&report), vec!["entities.primary.fields[2].key"]);
        assert!(report.errors[0].message.contains("duplicate"));
    }

    #[test]
    fn required_select_without_options_is_reported() {
        let mut config = valid_config();
        let mut select = FieldConfig::new("category", "Category", FieldType::Select);
        select.required = true;
        select.order = 3.0;
        config.entities.primary.fields.push(select);

        let report = validate_config(&config);
        assert_eq!(paths(&report), vec!["entities.primary.fields[2].options"]);
    }

    #[test]
    fn optional_select_without_options_is_fine() {
        let mut config = valid_config();
        let mut select = FieldConfig::new("category", "Category", FieldType::Select);
        select.order = 3.0;
        config.entities.primary.fields.push(select);

        assert!(validate_config(&config).valid);
    }

    #[test]
    fn invalid_theme_color_syntax_is_reported() {
        let mut config = valid_config();
        config.ui.theme.primary_color = "#12345".into(); // 5 hex digits
        config.ui.theme.accent_color = Some("blue-ish 500".into());

        let report = validate_config(&config);
        let paths = paths(&report);
        assert!(paths.contains(&"ui.theme.primaryColor"));
        assert!(paths.contains(&"ui.theme.accentColor"));
    }

    #[test]
    fn css_color_token_syntax() {
        for good in [
            "#fff",
            "#ffff",
            "#2563eb",
            "#2563ebcc",
            "rgb(37, 99, 235)",
            "rgba(37, 99, 235, 0.5)",
            "hsl(217, 91%, 60%)",
            "hsla(217, 91%, 60%, 0.5)",
            "tomato",
            "transparent",
        ] {
            assert!(is_css_color(good), "expected valid: {good}");
        }
        for bad in ["", "#12345", "rgb()", "37, 99, 235", "var(--primary)"] {
            assert!(!is_css_color(bad), "expected invalid: {bad}");
        }
    }
}
