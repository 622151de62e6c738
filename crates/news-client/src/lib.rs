pub mod client;
pub mod error;
pub mod fallback;
pub mod logging;
pub mod transport;
mod wire;

#[cfg(test)]
mod fake;

pub use client::NewsDataClient;
pub use error::{NewsError, NewsResult};
pub use fallback::{try_in_order, Tier};
pub use logging::init_tracing;
pub use transport::{HttpNewsTransport, NewsTransport, Query};

use anyhow::Context;
use std::time::Duration;

pub const NEWS_API_URL_VAR: &str = "NEWS_API_URL";
pub const NEWS_API_TIMEOUT_VAR: &str = "NEWS_API_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the news backend
#[derive(Debug, Clone)]
pub struct NewsConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for NewsConfig {
    fn default() -> Self {
        let timeout_secs = std::env::var(NEWS_API_TIMEOUT_VAR)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url: normalize_base_url(std::env::var(NEWS_API_URL_VAR).ok()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl NewsConfig {
    /// Load from the environment, reading `.env` first if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(
            std::env::var(NEWS_API_URL_VAR).ok(),
            std::env::var(NEWS_API_TIMEOUT_VAR).ok(),
        )
    }

    fn from_vars(base_url: Option<String>, timeout_secs: Option<String>) -> anyhow::Result<Self> {
        let timeout_secs = match timeout_secs {
            Some(raw) => raw.trim().parse::<u64>().with_context(|| {
                format!("{} must be a whole number of seconds, got {:?}", NEWS_API_TIMEOUT_VAR, raw)
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: normalize_base_url(base_url),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn normalize_base_url(raw: Option<String>) -> String {
    raw.map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
