//! # forma-loader
//!
//! Template document loading for Forma: fetch, validate, cache, merge.
//!
//! This crate provides:
//! - [`TemplateLoader`]: TTL-cached loading of template documents from a
//!   [`DocumentSource`] (HTTP store in production, in-memory in tests)
//! - [`validate_config`]: pure structural validation with a complete
//!   violation list
//! - [`merge_with_customizations`]: clone-then-patch tenant customization
//!   (branding + field override engine)
//! - [`lint_customizations`]: authoring-time reporting of overrides that
//!   would silently no-op
//!
//! A document is only ever cached after passing full structural validation;
//! cached documents are treated as immutable and tenant-specific variants are
//! produced exclusively through the clone-based merge path.

mod error;
mod merge;
mod source;
mod validate;

pub use error::LoadError;
pub use merge::{lint_customizations, merge_with_customizations};
pub use source::{check_response, DocumentSource, HttpSource};
pub use validate::{is_css_color, validate_config};

use std::collections::HashMap;
use std::time::{Duration, Instant};

use forma_core::{Complexity, Industry, TemplateConfig, TemplateIndexEntry};
use forma_config::FormaConfig;

struct CacheEntry {
    config: TemplateConfig,
    fetched_at: Instant,
}

/// Loads template documents by id, guaranteeing structural validity before
/// exposure and avoiding redundant fetches via an in-memory TTL cache.
///
/// Eviction is purely on-read: an expired entry is deleted the next time its
/// id is requested. Memory is therefore bounded by distinct ids requested —
/// an accepted trade-off for the expected small template catalog.
///
/// The loader is a plain value; a multi-threaded host wraps it in its own
/// lock or builds one per logical session.
pub struct TemplateLoader<S> {
    source: S,
    cache: HashMap<String, CacheEntry>,
    ttl: Duration,
}

impl TemplateLoader<HttpSource> {
    /// Build an HTTP-backed loader from application configuration.
    #[must_use]
    pub fn from_config(config: &FormaConfig) -> Self {
        Self::new(HttpSource::new(&config.source), config.cache.ttl())
    }
}

impl<S: DocumentSource> TemplateLoader<S> {
    #[must_use]
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            cache: HashMap::new(),
            ttl,
        }
    }

    /// Load one template by id.
    ///
    /// A fresh cache entry (age < TTL) is returned without touching the
    /// network. Otherwise the document is fetched, parsed, and fully
    /// validated; only a valid document is cached.
    ///
    /// # Errors
    ///
    /// [`LoadError::Parse`] if the fetched document does not deserialize,
    /// [`LoadError::Invalid`] (with the full violation list) if it fails
    /// structural validation, or a transport-level [`LoadError`]. Failed
    /// loads are never cached.
    pub async fn load_template(&mut self, id: &str) -> Result<TemplateConfig, LoadError> {
        if let Some(config) = self.cached(id) {
            tracing::debug!(id, "template cache hit");
            return Ok(config.clone());
        }

        let raw = self.source.fetch_config(id).await?;
        let config = parse_and_validate(id, raw)?;
        self.cache.insert(
            id.to_string(),
            CacheEntry {
                config: config.clone(),
                fetched_at: Instant::now(),
            },
        );
        Ok(config)
    }

    /// Load several templates; fetches for cache misses run concurrently.
    ///
    /// A failure for one id is logged and skipped, never aborts the others —
    /// the returned map simply omits failed ids.
    pub async fn load_templates(&mut self, ids: &[&str]) -> HashMap<String, TemplateConfig> {
        let mut loaded = HashMap::new();
        let mut misses = Vec::new();
        for &id in ids {
            if loaded.contains_key(id) || misses.contains(&id) {
                continue;
            }
            if let Some(config) = self.cached(id) {
                loaded.insert(id.to_string(), config.clone());
            } else {
                misses.push(id);
            }
        }

        let fetches = misses.iter().map(|&id| self.source.fetch_config(id));
        let results = futures::future::join_all(fetches).await;

        for (&id, result) in misses.iter().zip(results) {
            match result.and_then(|raw| parse_and_validate(id, raw)) {
                Ok(config) => {
                    self.cache.insert(
                        id.to_string(),
                        CacheEntry {
                            config: config.clone(),
                            fetched_at: Instant::now(),
                        },
                    );
                    loaded.insert(id.to_string(), config);
                }
                Err(e) => tracing::warn!(id, %e, "skipping template that failed to load"),
            }
        }

        loaded
    }

    /// Load every available template for one industry, in catalog order.
    ///
    /// Uses the catalog index (with its built-in fallback); individual load
    /// failures are skipped the same way as in [`load_templates`](Self::load_templates).
    pub async fn load_industry_templates(&mut self, industry: Industry) -> Vec<TemplateConfig> {
        let ids: Vec<String> = self
            .available_templates()
            .await
            .into_iter()
            .filter(|entry| entry.industry == industry)
            .map(|entry| entry.id)
            .collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();

        let mut loaded = self.load_templates(&id_refs).await;
        id_refs.iter().filter_map(|&id| loaded.remove(id)).collect()
    }

    /// The catalog of known templates.
    ///
    /// Falls back to the built-in shipped list when the index document is
    /// unreachable, so the system stays usable offline.
    pub async fn available_templates(&self) -> Vec<TemplateIndexEntry> {
        match self.source.fetch_index().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(%e, "template index unreachable, using built-in catalog");
                builtin_index()
            }
        }
    }

    /// Drop one cached document. The next load re-fetches.
    pub fn clear_cache(&mut self, id: &str) {
        self.cache.remove(id);
    }

    /// Drop every cached document.
    pub fn clear_cache_all(&mut self) {
        self.cache.clear();
    }

    /// Ids currently cached (fresh or not-yet-evicted), sorted. Diagnostics
    /// only.
    #[must_use]
    pub fn cached_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.cache.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Fresh cache lookup with lazy eviction: an expired entry is deleted,
    /// never served.
    fn cached(&mut self, id: &str) -> Option<&TemplateConfig> {
        let expired = self
            .cache
            .get(id)
            .is_some_and(|entry| entry.fetched_at.elapsed() >= self.ttl);
        if expired {
            tracing::debug!(id, "evicting expired template cache entry");
            self.cache.remove(id);
        }
        self.cache.get(id).map(|entry| &entry.config)
    }
}

fn parse_and_validate(id: &str, raw: serde_json::Value) -> Result<TemplateConfig, LoadError> {
    let config: TemplateConfig =
        serde_json::from_value(raw).map_err(|source| LoadError::Parse {
            id: id.to_string(),
            source,
        })?;
    let report = validate_config(&config);
    if report.valid {
        Ok(config)
    } else {
        Err(LoadError::Invalid {
            id: id.to_string(),
            violations: report.errors,
        })
    }
}

/// The shipped template catalog, used when the index document is unreachable.
#[must_use]
pub fn builtin_index() -> Vec<TemplateIndexEntry> {
    Industry::SHIPPED
        .iter()
        .map(|&industry| TemplateIndexEntry {
            id: format!("{industry}-starter"),
            industry,
            complexity: Complexity::Starter,
        })
        .collect()
}
