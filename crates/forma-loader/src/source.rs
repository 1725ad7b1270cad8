//! Document source abstraction and the HTTP store client.
//!
//! [`DocumentSource`] is the seam between the loader's cache discipline and
//! the transport: production uses [`HttpSource`] against the template store's
//! path convention (`{base}/{id}/config`, `{base}/index`); tests substitute
//! an in-memory source to count fetches.

use forma_core::TemplateIndexEntry;

use crate::error::LoadError;

/// Where template documents come from.
// Engine consumers are single-process; futures stay on one task, so the
// auto-captured lifetimes of `async fn` are fine here.
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    /// Fetch the raw config document for `id`.
    async fn fetch_config(&self, id: &str) -> Result<serde_json::Value, LoadError>;

    /// Fetch the catalog index document.
    async fn fetch_index(&self) -> Result<Vec<TemplateIndexEntry>, LoadError>;
}

#[derive(serde::Deserialize)]
struct IndexResponse {
    templates: Vec<TemplateIndexEntry>,
}

/// HTTP client for a template document store.
pub struct HttpSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Create a client from source configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &forma_config::SourceConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(config.user_agent.clone())
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: config.trimmed_base_url().to_string(),
        }
    }

    fn config_url(&self, id: &str) -> String {
        format!("{}/{}/config", self.base_url, urlencoding::encode(id))
    }

    fn index_url(&self) -> String {
        format!("{}/index", self.base_url)
    }
}

impl DocumentSource for HttpSource {
    async fn fetch_config(&self, id: &str) -> Result<serde_json::Value, LoadError> {
        let resp = check_response(self.http.get(self.config_url(id)).send().await?).await?;
        Ok(resp.json().await?)
    }

    async fn fetch_index(&self) -> Result<Vec<TemplateIndexEntry>, LoadError> {
        let resp = check_response(self.http.get(self.index_url()).send().await?).await?;
        let body = resp.text().await?;
        let index: IndexResponse =
            serde_json::from_str(&body).map_err(|e| LoadError::Index(e.to_string()))?;
        Ok(index.templates)
    }
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`LoadError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** → [`LoadError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, LoadError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(LoadError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        return Err(LoadError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
