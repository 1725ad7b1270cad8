//! Full pipeline: fetch a template document, register and activate it,
//! then validate submitted records against it.

use std::collections::HashMap;
use std::time::Duration;

use forma_core::{BrandingOverrides, TemplateIndexEntry, TenantCustomizations};
use forma_engine::TemplateRegistry;
use forma_loader::{merge_with_customizations, DocumentSource, LoadError, TemplateLoader};
use pretty_assertions::assert_eq;
use serde_json::json;

struct StaticSource {
    configs: HashMap<String, serde_json::Value>,
}

impl StaticSource {
    fn with_doc(id: &str, doc: serde_json::Value) -> Self {
        let mut configs = HashMap::new();
        configs.insert(id.to_string(), doc);
        Self { configs }
    }
}

impl DocumentSource for StaticSource {
    async fn fetch_config(&self, id: &str) -> Result<serde_json::Value, LoadError> {
        self.configs.get(id).cloned().ok_or(LoadError::Api {
            status: 404,
            message: format!("no template '{id}'"),
        })
    }

    async fn fetch_index(&self) -> Result<Vec<TemplateIndexEntry>, LoadError> {
        Err(LoadError::Index("index unavailable".into()))
    }
}

fn spa_doc() -> serde_json::Value {
    json!({
        "id": "wellness-spa",
        "name": "Wellness Spa",
        "industry": "wellness",
        "version": "1.0.0",
        "entities": {
            "primary": {
                "name": "Services",
                "singular": "Service",
                "plural": "Services",
                "icon": "sparkles",
                "color": "#0f766e",
                "fields": [
                    { "key": "title", "label": "Title", "type": "text", "required": true, "order": 1 },
                    { "key": "price", "label": "Price", "type": "currency", "required": true, "order": 2, "min": 0 }
                ],
                "permissions": { "create": true, "read": true, "update": true, "delete": true, "bulk": false }
            }
        },
        "ui": {
            "theme": { "primaryColor": "#0f766e", "secondaryColor": "#f59e0b" }
        }
    })
}

#[tokio::test]
async fn load_activate_and_validate_records() {
    let source = StaticSource::with_doc("wellness-spa", spa_doc());
    let mut loader = TemplateLoader::new(source, Duration::from_secs(300));
    let template = loader.load_template("wellness-spa").await.unwrap();

    let mut registry = TemplateRegistry::new();
    registry.register_template(template);
    registry.set_active_template("wellness-spa").unwrap();

    let bad = registry
        .validate_entity_data("primary", &json!({ "title": "", "price": -5 }))
        .unwrap();
    assert!(!bad.valid);
    assert_eq!(bad.errors.len(), 2);
    assert_eq!(bad.errors[0].field_key, "title");
    assert_eq!(bad.errors[0].message, "Title is required");
    assert_eq!(bad.errors[1].field_key, "price");
    assert_eq!(bad.errors[1].message, "Price must be at least 0");

    let good = registry
        .validate_entity_data("primary", &json!({ "title": "Spa Day", "price": 50 }))
        .unwrap();
    assert!(good.valid);
    assert!(good.errors.is_empty());
}

#[tokio::test]
async fn tenant_overrides_survive_the_round_trip() {
    let source = StaticSource::with_doc("wellness-spa", spa_doc());
    let mut loader = TemplateLoader::new(source, Duration::from_secs(300));
    let base = loader.load_template("wellness-spa").await.unwrap();

    let customizations = TenantCustomizations {
        branding: Some(BrandingOverrides {
            primary_color: Some("#7c3aed".into()),
            brand_name: Some("Lotus Spa".into()),
            ..Default::default()
        }),
        fields: vec![serde_json::from_value(json!({
            "action": "optional",
            "entityKey": "primary",
            "fieldKey": "price"
        }))
        .unwrap()],
    };
    let merged = merge_with_customizations(&base, &customizations);

    let mut registry = TemplateRegistry::new();
    registry.register_template(merged);
    registry.set_active_template("wellness-spa").unwrap();

    assert_eq!(
        registry.active_template().unwrap().ui.theme.primary_color,
        "#7c3aed"
    );

    // Price was made optional, so omitting it is now fine.
    let report = registry
        .validate_entity_data("primary", &json!({ "title": "Spa Day" }))
        .unwrap();
    assert!(report.valid);

    // Cached base document is untouched by the merge.
    let reloaded = loader.load_template("wellness-spa").await.unwrap();
    assert_eq!(reloaded.ui.theme.primary_color, "#0f766e");
    assert!(reloaded.entities.primary.field("price").unwrap().required);
}
