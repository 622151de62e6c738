//! Response envelopes and request bodies of the news backend.

use news_core::NewsArticle;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub(crate) struct ArticlesEnvelope {
    pub articles: Vec<NewsArticle>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReportsEnvelope<T> {
    pub reports: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SourcesEnvelope<T> {
    pub sources: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SegmentNewsEnvelope {
    pub segment_news: HashMap<String, Vec<NewsArticle>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SegmentNewsRequest<'a> {
    pub segments: &'a [String],
    pub articles_per_segment: usize,
}
