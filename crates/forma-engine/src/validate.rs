//! Field-level data validation.
//!
//! Given an entity schema and a candidate record, produce the complete,
//! ordered list of human-readable failures. Fields are walked in declaration
//! order (not display `order`); per field the sequence is: required check
//! (short-circuits the rest for that field), optional-and-empty skip,
//! built-in type check, then every declarative rule.
//!
//! Custom rules never execute code carried by the document: a `custom` rule's
//! `value` names a predicate registered ahead of time on the
//! [`ValidatorRegistry`]. Unknown names and unparseable regex patterns are
//! logged and skipped — a config mistake must not corrupt a user-data
//! verdict.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use forma_core::{
    EntityConfig, FieldConfig, FieldError, FieldType, FieldValue, RuleType, ValidationReport,
    ValidationRule,
};

/// Single-`@`, at-least-one-dot-in-the-domain email shape.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

/// Host-registered named predicates for `custom` validation rules.
pub struct ValidatorRegistry {
    validators: HashMap<String, Box<dyn Fn(&serde_json::Value) -> bool + Send + Sync>>,
}

impl ValidatorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            validators: HashMap::new(),
        }
    }

    /// Register (or replace) a predicate under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&serde_json::Value) -> bool + Send + Sync + 'static,
    {
        self.validators.insert(name.into(), Box::new(predicate));
    }

    fn get(&self, name: &str) -> Option<&(dyn Fn(&serde_json::Value) -> bool + Send + Sync)> {
        self.validators.get(name).map(AsRef::as_ref)
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate `data` (a JSON object keyed by field key) against an entity
/// schema. Invalid data is a normal outcome — this never fails.
#[must_use]
pub fn validate_entity_fields(
    entity: &EntityConfig,
    data: &serde_json::Value,
    validators: &ValidatorRegistry,
) -> ValidationReport {
    let record = data.as_object();
    let mut errors = Vec::new();

    for field in &entity.fields {
        let raw = record.and_then(|r| r.get(&field.key));
        let value = FieldValue::from_json(raw, field.field_type);

        if value.is_absent() {
            if field.required {
                errors.push(FieldError::new(
                    &field.key,
                    format!("{} is required", field.label),
                ));
            }
            // Missing required value: no point validating its format.
            // Missing optional value: valid as-is.
            continue;
        }

        check_type(&mut errors, field, &value);

        for rule in &field.validation {
            if let Some(message) = evaluate_rule(rule, field, &value, raw, validators) {
                errors.push(FieldError::new(&field.key, message));
            }
        }
    }

    ValidationReport::from_errors(errors)
}

fn check_type(errors: &mut Vec<FieldError>, field: &FieldConfig, value: &FieldValue) {
    match field.field_type {
        FieldType::Email => {
            if !value.as_text().is_some_and(|s| EMAIL.is_match(s)) {
                errors.push(FieldError::new(
                    &field.key,
                    format!("{} must be a valid email address", field.label),
                ));
            }
        }
        FieldType::Url => {
            let absolute = value
                .as_text()
                .is_some_and(|s| url::Url::parse(s).is_ok());
            if !absolute {
                errors.push(FieldError::new(
                    &field.key,
                    format!("{} must be a valid URL", field.label),
                ));
            }
        }
        FieldType::Number | FieldType::Currency => match value.as_number() {
            Some(n) => check_numeric_bounds(errors, field, n),
            None => errors.push(FieldError::new(
                &field.key,
                format!("{} must be a number", field.label),
            )),
        },
        FieldType::Text | FieldType::Textarea => {
            // min/max are *character-length* bounds here, unlike the numeric
            // value bounds above.
            if let Some(text) = value.as_text() {
                check_length_bounds(errors, field, text.chars().count());
            }
        }
        // No built-in structural check for the remaining types; declarative
        // rules still apply.
        _ => {}
    }
}

fn check_numeric_bounds(errors: &mut Vec<FieldError>, field: &FieldConfig, n: f64) {
    if let Some(min) = field.min {
        if n < min {
            errors.push(FieldError::new(
                &field.key,
                format!("{} must be at least {}", field.label, fmt_num(min)),
            ));
        }
    }
    if let Some(max) = field.max {
        if n > max {
            errors.push(FieldError::new(
                &field.key,
                format!("{} must be at most {}", field.label, fmt_num(max)),
            ));
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn check_length_bounds(errors: &mut Vec<FieldError>, field: &FieldConfig, len: usize) {
    if let Some(min) = field.min {
        if (len as f64) < min {
            errors.push(FieldError::new(
                &field.key,
                format!(
                    "{} must be at least {} characters",
                    field.label,
                    fmt_num(min)
                ),
            ));
        }
    }
    if let Some(max) = field.max {
        if (len as f64) > max {
            errors.push(FieldError::new(
                &field.key,
                format!("{} must be at most {} characters", field.label, fmt_num(max)),
            ));
        }
    }
}

/// Evaluate one declarative rule; `Some(message)` on failure.
fn evaluate_rule(
    rule: &ValidationRule,
    field: &FieldConfig,
    value: &FieldValue,
    raw: Option<&serde_json::Value>,
    validators: &ValidatorRegistry,
) -> Option<String> {
    let passed = match rule.rule_type {
        RuleType::Required => !value.is_absent(),
        RuleType::Regex => {
            let Some(pattern) = rule.value.as_ref().and_then(serde_json::Value::as_str) else {
                tracing::warn!(field = field.key, "regex rule without a pattern, skipping");
                return None;
            };
            match Regex::new(pattern) {
                Ok(re) => re.is_match(&value.to_text_lossy()),
                Err(e) => {
                    tracing::warn!(field = field.key, %e, "unparseable regex rule, skipping");
                    return None;
                }
            }
        }
        RuleType::Range => {
            let (min, max) = rule_bounds(rule.value.as_ref());
            value.as_number().is_some_and(|n| {
                min.is_none_or(|m| n >= m) && max.is_none_or(|m| n <= m)
            })
        }
        RuleType::Length => {
            let (min, max) = rule_bounds(rule.value.as_ref());
            #[allow(clippy::cast_precision_loss)]
            let len = value.to_text_lossy().chars().count() as f64;
            min.is_none_or(|m| len >= m) && max.is_none_or(|m| len <= m)
        }
        RuleType::Custom => {
            let Some(name) = rule.value.as_ref().and_then(serde_json::Value::as_str) else {
                tracing::warn!(field = field.key, "custom rule without a validator name, skipping");
                return None;
            };
            let Some(predicate) = validators.get(name) else {
                tracing::warn!(
                    field = field.key,
                    validator = name,
                    "unknown custom validator, skipping"
                );
                return None;
            };
            predicate(raw.unwrap_or(&serde_json::Value::Null))
        }
    };

    if passed {
        None
    } else {
        Some(
            rule.message
                .clone()
                .unwrap_or_else(|| format!("{} is invalid", field.label)),
        )
    }
}

/// Pull optional `{min, max}` bounds from a rule's `value`.
fn rule_bounds(value: Option<&serde_json::Value>) -> (Option<f64>, Option<f64>) {
    let bound = |key: &str| value.and_then(|v| v.get(key)).and_then(serde_json::Value::as_f64);
    (bound("min"), bound("max"))
}

/// Render bounds without a trailing `.0` for whole numbers.
fn fmt_num(n: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forma_core::EntityPermissions;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn field(key: &str, label: &str, field_type: FieldType) -> FieldConfig {
        FieldConfig::new(key, label, field_type)
    }

    fn entity(fields: Vec<FieldConfig>) -> EntityConfig {
        EntityConfig {
            name: "Services".into(),
            singular: "Service".into(),
            plural: "Services".into(),
            icon: "sparkles".into(),
            color: "#0f766e".into(),
            fields,
            permissions: EntityPermissions::all(),
            relationships: None,
        }
    }

    fn validate(entity: &EntityConfig, data: serde_json::Value) -> ValidationReport {
        validate_entity_fields(entity, &data, &ValidatorRegistry::new())
    }

    #[test]
    fn required_fields_short_circuit_type_checks() {
        let mut title = field("title", "Title", FieldType::Text);
        title.required = true;
        let mut email = field("contact", "Contact", FieldType::Email);
        email.required = true;

        let report = validate(&entity(vec![title, email]), json!({}));
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].message, "Title is required");
        assert_eq!(report.errors[1].message, "Contact is required");
    }

    #[test]
    fn optional_and_empty_is_valid() {
        let e = entity(vec![
            field("notes", "Notes", FieldType::Textarea),
            field("site", "Site", FieldType::Url),
        ]);
        assert!(validate(&e, json!({})).valid);
        assert!(validate(&e, json!({ "notes": "", "site": null })).valid);
    }

    #[test]
    fn email_shape() {
        let e = entity(vec![field("contact", "Contact", FieldType::Email)]);
        assert!(validate(&e, json!({ "contact": "kim@example.com" })).valid);

        for bad in ["kim", "kim@example", "kim@@example.com", "k im@example.com"] {
            let report = validate(&e, json!({ "contact": bad }));
            assert_eq!(
                report.errors[0].message, "Contact must be a valid email address",
                "expected rejection for {bad}"
            );
        }
    }

    #[test]
    fn url_must_be_absolute() {
        let e = entity(vec![field("site", "Site", FieldType::Url)]);
        assert!(validate(&e, json!({ "site": "https://example.com/x" })).valid);
        assert!(!validate(&e, json!({ "site": "/relative/path" })).valid);
        assert!(!validate(&e, json!({ "site": "not a url" })).valid);
    }

    #[test]
    fn number_range_semantics() {
        let mut qty = field("qty", "Quantity", FieldType::Number);
        qty.min = Some(10.0);
        qty.max = Some(20.0);
        let e = entity(vec![qty]);

        let low = validate(&e, json!({ "qty": 5 }));
        assert_eq!(low.errors[0].message, "Quantity must be at least 10");

        let high = validate(&e, json!({ "qty": 25 }));
        assert_eq!(high.errors[0].message, "Quantity must be at most 20");

        assert!(validate(&e, json!({ "qty": 15 })).valid);
        assert!(validate(&e, json!({ "qty": 10 })).valid);
        assert!(validate(&e, json!({ "qty": 20 })).valid);
    }

    #[test]
    fn non_numeric_input_for_number_field() {
        let e = entity(vec![field("qty", "Quantity", FieldType::Number)]);
        let report = validate(&e, json!({ "qty": "a dozen" }));
        assert_eq!(report.errors[0].message, "Quantity must be a number");
    }

    #[test]
    fn numeric_form_strings_are_accepted() {
        let mut price = field("price", "Price", FieldType::Currency);
        price.min = Some(0.0);
        let e = entity(vec![price]);
        assert!(validate(&e, json!({ "price": "49.99" })).valid);
        let report = validate(&e, json!({ "price": "-1" }));
        assert_eq!(report.errors[0].message, "Price must be at least 0");
    }

    #[test]
    fn text_bounds_are_character_lengths() {
        let mut title = field("title", "Title", FieldType::Text);
        title.min = Some(3.0);
        title.max = Some(5.0);
        let e = entity(vec![title]);

        let short = validate(&e, json!({ "title": "ab" }));
        assert_eq!(
            short.errors[0].message,
            "Title must be at least 3 characters"
        );
        let long = validate(&e, json!({ "title": "abcdef" }));
        assert_eq!(long.errors[0].message, "Title must be at most 5 characters");
        assert!(validate(&e, json!({ "title": "abcd" })).valid);
    }

    #[test]
    fn other_types_have_no_builtin_check() {
        let e = entity(vec![
            field("when", "When", FieldType::Date),
            field("tint", "Tint", FieldType::Color),
        ]);
        // Not a date, not a color — still valid: only theme colors are
        // syntax-checked, and only by config validation.
        assert!(validate(&e, json!({ "when": "whenever", "tint": "sparkly" })).valid);
    }

    #[test]
    fn regex_rule_uses_message_or_fallback() {
        let mut sku = field("sku", "SKU", FieldType::Text);
        sku.validation = vec![
            ValidationRule {
                rule_type: RuleType::Regex,
                value: Some(json!("^[A-Z]{3}-\\d{4}$")),
                message: Some("SKU must look like ABC-1234".into()),
            },
        ];
        let e = entity(vec![sku]);

        let report = validate(&e, json!({ "sku": "nope" }));
        assert_eq!(report.errors[0].message, "SKU must look like ABC-1234");
        assert!(validate(&e, json!({ "sku": "ABC-1234" })).valid);
    }

    #[test]
    fn rule_without_message_falls_back_to_generic() {
        let mut code = field("code", "Code", FieldType::Text);
        code.validation = vec![ValidationRule {
            rule_type: RuleType::Regex,
            value: Some(json!("^\\d+$")),
            message: None,
        }];
        let e = entity(vec![code]);
        let report = validate(&e, json!({ "code": "xyz" }));
        assert_eq!(report.errors[0].message, "Code is invalid");
    }

    #[test]
    fn unparseable_regex_rule_is_skipped() {
        let mut code = field("code", "Code", FieldType::Text);
        code.validation = vec![ValidationRule {
            rule_type: RuleType::Regex,
            value: Some(json!("([unclosed")),
            message: None,
        }];
        let e = entity(vec![code]);
        assert!(validate(&e, json!({ "code": "anything" })).valid);
    }

    #[test]
    fn range_and_length_rules() {
        let mut score = field("score", "Score", FieldType::Number);
        score.validation = vec![ValidationRule {
            rule_type: RuleType::Range,
            value: Some(json!({ "min": 0, "max": 100 })),
            message: Some("Score must be 0-100".into()),
        }];
        let mut pin = field("pin", "PIN", FieldType::Text);
        pin.validation = vec![ValidationRule {
            rule_type: RuleType::Length,
            value: Some(json!({ "min": 4, "max": 4 })),
            message: Some("PIN must be 4 digits".into()),
        }];
        let e = entity(vec![score, pin]);

        let report = validate(&e, json!({ "score": 120, "pin": "12345" }));
        assert_eq!(report.messages_for("score"), vec!["Score must be 0-100"]);
        assert_eq!(report.messages_for("pin"), vec!["PIN must be 4 digits"]);
        assert!(validate(&e, json!({ "score": 88, "pin": "1234" })).valid);
    }

    #[test]
    fn custom_rules_run_registered_predicates() {
        let mut slug = field("slug", "Slug", FieldType::Text);
        slug.validation = vec![ValidationRule {
            rule_type: RuleType::Custom,
            value: Some(json!("kebab_case")),
            message: Some("Slug must be kebab-case".into()),
        }];
        let e = entity(vec![slug]);

        let mut validators = ValidatorRegistry::new();
        validators.register("kebab_case", |v| {
            v.as_str().is_some_and(|s| {
                !s.is_empty()
                    && s.chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            })
        });

        let bad = validate_entity_fields(&e, &json!({ "slug": "Not A Slug" }), &validators);
        assert_eq!(bad.errors[0].message, "Slug must be kebab-case");

        let good = validate_entity_fields(&e, &json!({ "slug": "hot-stone-90" }), &validators);
        assert!(good.valid);
    }

    #[test]
    fn unknown_custom_validator_is_skipped() {
        let mut slug = field("slug", "Slug", FieldType::Text);
        slug.validation = vec![ValidationRule {
            rule_type: RuleType::Custom,
            value: Some(json!("never_registered")),
            message: None,
        }];
        let e = entity(vec![slug]);
        assert!(validate(&e, json!({ "slug": "whatever" })).valid);
    }

    #[test]
    fn errors_come_in_declaration_order() {
        let mut b = field("b", "B", FieldType::Text);
        b.required = true;
        b.order = 2.0;
        let mut a = field("a", "A", FieldType::Text);
        a.required = true;
        a.order = 1.0;
        // declared b-first despite display order saying otherwise
        let e = entity(vec![b, a]);

        let report = validate(&e, json!({}));
        let keys: Vec<&str> = report.errors.iter().map(|e| e.field_key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
