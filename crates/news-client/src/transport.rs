use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

use crate::error::{NewsError, NewsResult};
use crate::NewsConfig;

/// Query string pairs for a GET request
pub type Query = Vec<(&'static str, String)>;

/// Raw JSON access to the news backend.
///
/// `NewsDataClient` only talks to the backend through this trait, so tests can
/// swap in canned responses.
#[async_trait]
pub trait NewsTransport: Send + Sync {
    async fn get(&self, path: &str, query: &Query) -> NewsResult<Value>;

    async fn post(&self, path: &str, body: &Value) -> NewsResult<Value>;

    fn base_url(&self) -> &str;
}

/// reqwest-backed transport
#[derive(Clone)]
pub struct HttpNewsTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNewsTransport {
    pub fn new(config: &NewsConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self::with_client(client, config.base_url.clone())
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json(path: &str, response: reqwest::Response) -> NewsResult<Value> {
        if !response.status().is_success() {
            return Err(NewsError::ServiceUnavailable(format!(
                "{} returned {}",
                path,
                response.status()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| NewsError::InvalidResponse(format!("{}: {}", path, e)))
    }
}

#[async_trait]
impl NewsTransport for HttpNewsTransport {
    async fn get(&self, path: &str, query: &Query) -> NewsResult<Value> {
        tracing::debug!(path, ?query, "GET news backend");
        let response = self
            .client
            .get(self.endpoint(path))
            .query(query)
            .send()
            .await?;

        Self::read_json(path, response).await
    }

    async fn post(&self, path: &str, body: &Value) -> NewsResult<Value> {
        tracing::debug!(path, "POST news backend");
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?;

        Self::read_json(path, response).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
