use chrono::Utc;
use futures_util::FutureExt;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;

use news_core::{
    filter_by_topic, project_legacy, CompanyReport, CompanyReportType, IndustryReport,
    LegacySentiment, NewsAnalysis, NewsArticle, SentimentSummary, SourceSummary,
};

use crate::error::{NewsError, NewsResult};
use crate::fallback::{try_in_order, Tier};
use crate::transport::{HttpNewsTransport, NewsTransport, Query};
use crate::wire::{
    ArticlesEnvelope, HealthStatus, ReportsEnvelope, SegmentNewsEnvelope, SegmentNewsRequest,
    SourcesEnvelope,
};
use crate::NewsConfig;

pub const DEFAULT_ANALYSIS_DAYS: u32 = 30;
pub const DEFAULT_RECENT_LIMIT: usize = 10;
pub const DEFAULT_RECENT_DAYS: u32 = 7;
pub const DEFAULT_REPORT_LIMIT: usize = 5;
pub const DEFAULT_TOPIC_LIMIT: usize = 5;
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
pub const DEFAULT_ARTICLES_PER_SEGMENT: usize = 5;

/// Ticker-scoped access to the news backend.
///
/// Most queries prefer a dedicated endpoint and degrade to older or coarser
/// data when it fails, so callers only see an error when nothing usable is
/// left.
#[derive(Clone)]
pub struct NewsDataClient {
    transport: Arc<dyn NewsTransport>,
}

impl NewsDataClient {
    pub fn new(config: NewsConfig) -> Self {
        Self::with_transport(Arc::new(HttpNewsTransport::new(&config)))
    }

    pub fn with_defaults() -> Self {
        Self::new(NewsConfig::default())
    }

    pub fn with_transport(transport: Arc<dyn NewsTransport>) -> Self {
        Self { transport }
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    async fn get_json<T: DeserializeOwned>(&self, path: String, query: Query) -> NewsResult<T> {
        let value = self.transport.get(&path, &query).await?;
        serde_json::from_value(value).map_err(|e| NewsError::InvalidResponse(format!("{}: {}", path, e)))
    }

    /// Full news analysis.
    ///
    /// Tries `/api/news/analysis`, then projects the legacy company sentiment
    /// endpoint into the same shape. `force_refresh` is only forwarded to the
    /// backend.
    pub async fn get_analysis(
        &self,
        ticker: &str,
        window_days: u32,
        force_refresh: bool,
    ) -> NewsResult<NewsAnalysis> {
        validate_ticker(ticker)?;
        if window_days == 0 {
            return Err(NewsError::InvalidInput("window_days must be positive".to_string()));
        }

        let tiers = vec![
            Tier::new("analysis", move || {
                self.get_json::<NewsAnalysis>(
                    format!("/api/news/analysis/{}", ticker),
                    vec![
                        ("days", window_days.to_string()),
                        ("force_refresh", force_refresh.to_string()),
                    ],
                )
                .boxed()
            }),
            Tier::new("legacy_sentiment", move || {
                async move {
                    let legacy: LegacySentiment = self
                        .get_json(format!("/api/company/{}/sentiment", ticker), Vec::new())
                        .await?;
                    Ok(project_legacy(ticker, &legacy, Utc::now()))
                }
                .boxed()
            }),
        ];

        try_in_order("get_analysis", tiers).await.map_err(|e| {
            tracing::error!(ticker, error = %e, "both enhanced and legacy sentiment sources failed");
            NewsError::AnalysisUnavailable
        })
    }

    /// Latest articles, newest first.
    pub async fn get_recent_news(
        &self,
        ticker: &str,
        limit: usize,
        days: u32,
    ) -> NewsResult<Vec<NewsArticle>> {
        validate_ticker(ticker)?;

        let tiers = vec![
            Tier::new("articles", move || {
                async move {
                    let envelope: ArticlesEnvelope = self
                        .get_json(
                            format!("/api/news/articles/{}", ticker),
                            vec![("limit", limit.to_string()), ("days", days.to_string())],
                        )
                        .await?;
                    Ok(envelope.articles)
                }
                .boxed()
            }),
            Tier::new("analysis", move || {
                async move {
                    let mut articles = self.get_analysis(ticker, days, false).await?.recent_articles;
                    articles.truncate(limit);
                    Ok(articles)
                }
                .boxed()
            }),
        ];

        try_in_order("get_recent_news", tiers).await
    }

    pub async fn get_sentiment_only(&self, ticker: &str) -> NewsResult<SentimentSummary> {
        validate_ticker(ticker)?;

        let tiers = vec![
            Tier::new("sentiment", move || {
                self.get_json::<SentimentSummary>(format!("/api/news/sentiment/{}", ticker), Vec::new())
                    .boxed()
            }),
            Tier::new("analysis", move || {
                async move {
                    let analysis = self.get_analysis(ticker, DEFAULT_ANALYSIS_DAYS, false).await?;
                    Ok(analysis.overall_sentiment)
                }
                .boxed()
            }),
        ];

        try_in_order("get_sentiment_only", tiers).await
    }

    /// Annual reports, earnings transcripts and similar filings.
    ///
    /// Reports can't be derived from sentiment data, so failure yields an
    /// empty list.
    pub async fn get_company_reports(
        &self,
        ticker: &str,
        limit: usize,
        types: &[CompanyReportType],
    ) -> NewsResult<Vec<CompanyReport>> {
        validate_ticker(ticker)?;

        let mut query: Query = vec![("limit", limit.to_string())];
        if !types.is_empty() {
            let joined = types.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(",");
            query.push(("types", joined));
        }

        let tiers = vec![
            Tier::new("company_reports", move || {
                async move {
                    let envelope: ReportsEnvelope<CompanyReport> = self
                        .get_json(format!("/api/news/company-reports/{}", ticker), query)
                        .await?;
                    Ok(envelope.reports)
                }
                .boxed()
            }),
            Tier::new("empty", || async { Ok(Vec::new()) }.boxed()),
        ];

        try_in_order("get_company_reports", tiers).await
    }

    pub async fn get_industry_reports(
        &self,
        ticker: &str,
        limit: usize,
        sector: Option<&str>,
    ) -> NewsResult<Vec<IndustryReport>> {
        validate_ticker(ticker)?;

        let mut query: Query = vec![("limit", limit.to_string())];
        if let Some(sector) = sector {
            query.push(("sector", sector.to_string()));
        }

        let tiers = vec![
            Tier::new("industry_reports", move || {
                async move {
                    let envelope: ReportsEnvelope<IndustryReport> = self
                        .get_json(format!("/api/news/industry-reports/{}", ticker), query)
                        .await?;
                    Ok(envelope.reports)
                }
                .boxed()
            }),
            Tier::new("empty", || async { Ok(Vec::new()) }.boxed()),
        ];

        try_in_order("get_industry_reports", tiers).await
    }

    /// Articles about `topic`; falls back to filtering recent news by title and summary.
    pub async fn get_news_by_topic(
        &self,
        ticker: &str,
        topic: &str,
        limit: usize,
    ) -> NewsResult<Vec<NewsArticle>> {
        validate_ticker(ticker)?;

        let tiers = vec![
            Tier::new("topic", move || {
                async move {
                    let envelope: ArticlesEnvelope = self
                        .get_json(
                            format!("/api/news/topic/{}", ticker),
                            vec![("topic", topic.to_string()), ("limit", limit.to_string())],
                        )
                        .await?;
                    Ok(envelope.articles)
                }
                .boxed()
            }),
            Tier::new("recent_news", move || {
                async move {
                    let articles = self.get_recent_news(ticker, limit, DEFAULT_RECENT_DAYS).await?;
                    Ok(filter_by_topic(articles, topic, limit))
                }
                .boxed()
            }),
        ];

        try_in_order("get_news_by_topic", tiers).await
    }

    /// Free-text search; falls back to the topic query.
    pub async fn search_news(
        &self,
        ticker: &str,
        query: &str,
        limit: usize,
    ) -> NewsResult<Vec<NewsArticle>> {
        validate_ticker(ticker)?;

        let tiers = vec![
            Tier::new("search", move || {
                async move {
                    let envelope: ArticlesEnvelope = self
                        .get_json(
                            format!("/api/news/search/{}", ticker),
                            vec![("q", query.to_string()), ("limit", limit.to_string())],
                        )
                        .await?;
                    Ok(envelope.articles)
                }
                .boxed()
            }),
            Tier::new("topic", move || self.get_news_by_topic(ticker, query, limit).boxed()),
        ];

        try_in_order("search_news", tiers).await
    }

    /// Publishers covering the ticker and their average sentiment.
    pub async fn get_news_sources(&self, ticker: &str) -> NewsResult<Vec<SourceSummary>> {
        validate_ticker(ticker)?;

        let tiers = vec![
            Tier::new("sources", move || {
                async move {
                    let envelope: SourcesEnvelope<SourceSummary> = self
                        .get_json(format!("/api/news/sources/{}", ticker), Vec::new())
                        .await?;
                    Ok(envelope.sources)
                }
                .boxed()
            }),
            Tier::new("analysis", move || {
                async move {
                    let analysis = self.get_analysis(ticker, DEFAULT_ANALYSIS_DAYS, false).await?;
                    Ok(analysis.sources)
                }
                .boxed()
            }),
        ];

        try_in_order("get_news_sources", tiers).await
    }

    /// Per-segment news for conglomerates. No fallback.
    pub async fn get_segment_news(
        &self,
        ticker: &str,
        segments: &[String],
        articles_per_segment: usize,
    ) -> NewsResult<HashMap<String, Vec<NewsArticle>>> {
        validate_ticker(ticker)?;

        let path = format!("/api/news/segments/{}", ticker);
        let body = serde_json::to_value(SegmentNewsRequest {
            segments,
            articles_per_segment,
        })?;

        let value = self.transport.post(&path, &body).await?;
        let envelope: SegmentNewsEnvelope = serde_json::from_value(value)
            .map_err(|e| NewsError::InvalidResponse(format!("{}: {}", path, e)))?;
        Ok(envelope.segment_news)
    }

    /// `true` only when the backend reports `"healthy"`. Never fails.
    pub async fn health_check(&self) -> bool {
        match self
            .get_json::<HealthStatus>("/api/news/health".to_string(), Vec::new())
            .await
        {
            Ok(health) => health.status == "healthy",
            Err(e) => {
                tracing::error!(error = %e, "news service health check failed");
                false
            }
        }
    }

    /// Names of every source the backend can pull from. No fallback.
    pub async fn get_available_sources(&self) -> NewsResult<Vec<String>> {
        let envelope: SourcesEnvelope<String> = self
            .get_json("/api/news/sources".to_string(), Vec::new())
            .await?;
        Ok(envelope.sources)
    }
}

fn validate_ticker(ticker: &str) -> NewsResult<()> {
    if ticker.trim().is_empty() {
        return Err(NewsError::InvalidInput("ticker must not be empty".to_string()));
    }
    // Anything that would change the meaning of the request path.
    if ticker.contains(|c: char| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '%')) {
        return Err(NewsError::InvalidInput(format!("invalid ticker {:?}", ticker)));
    }
    Ok(())
}
