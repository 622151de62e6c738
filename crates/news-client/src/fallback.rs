use futures_util::future::BoxFuture;

use crate::error::{NewsError, NewsResult};

/// One data source in a degradation chain.
///
/// The request is only started when the tier is reached.
pub struct Tier<'a, T> {
    name: &'static str,
    attempt: Box<dyn FnOnce() -> BoxFuture<'a, NewsResult<T>> + Send + 'a>,
}

impl<'a, T> Tier<'a, T> {
    pub fn new<F>(name: &'static str, attempt: F) -> Self
    where
        F: FnOnce() -> BoxFuture<'a, NewsResult<T>> + Send + 'a,
    {
        Self {
            name,
            attempt: Box::new(attempt),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Run tiers one after another. The first success wins, the last failure is returned.
pub async fn try_in_order<'a, T>(operation: &str, tiers: Vec<Tier<'a, T>>) -> NewsResult<T> {
    let total = tiers.len();
    let mut last_error = None;

    for (index, tier) in tiers.into_iter().enumerate() {
        let name = tier.name;
        match (tier.attempt)().await {
            Ok(value) => {
                if index > 0 {
                    tracing::info!(operation, tier = name, "served from fallback tier");
                }
                return Ok(value);
            }
            Err(e) => {
                tracing::warn!(
                    operation,
                    tier = name,
                    remaining = total - index - 1,
                    error = %e,
                    "news data tier failed"
                );
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| NewsError::NoDataSource(operation.to_string())))
}
