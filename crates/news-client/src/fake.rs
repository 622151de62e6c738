//! Canned-response transport and fixtures for tests.

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use news_core::{
    AiInsights, ArticleSentiment, ArticleSource, CompanyReport, CompanyReportType, NewsAnalysis,
    NewsArticle, SentimentBreakdown, SentimentLabel, SentimentSummary, SentimentTrend,
    SourceSummary, TopicSummary,
};

use crate::error::{NewsError, NewsResult};
use crate::transport::{NewsTransport, Query};

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub query: Query,
    pub body: Option<Value>,
}

impl RecordedRequest {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Serves a fixed JSON value per path; unknown paths answer like a 404.
#[derive(Default)]
pub(crate) struct FakeTransport {
    responses: HashMap<String, Value>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(path.to_string(), body);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }

    fn answer(&self, request: RecordedRequest) -> NewsResult<Value> {
        let path = request.path.clone();
        self.requests.lock().unwrap().push(request);
        self.responses
            .get(&path)
            .cloned()
            .ok_or_else(|| NewsError::ServiceUnavailable(format!("{} returned 404 Not Found", path)))
    }
}

#[async_trait]
impl NewsTransport for FakeTransport {
    async fn get(&self, path: &str, query: &Query) -> NewsResult<Value> {
        self.answer(RecordedRequest {
            method: "GET",
            path: path.to_string(),
            query: query.clone(),
            body: None,
        })
    }

    async fn post(&self, path: &str, body: &Value) -> NewsResult<Value> {
        self.answer(RecordedRequest {
            method: "POST",
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body.clone()),
        })
    }

    fn base_url(&self) -> &str {
        "fake://news"
    }
}

pub(crate) fn sample_article(id: &str, title: &str, summary: &str) -> NewsArticle {
    NewsArticle {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        url: format!("https://www.livemint.com/companies/{}", id),
        published_date: Utc.with_ymd_and_hms(2024, 11, 4, 9, 30, 0).unwrap(),
        source: ArticleSource {
            name: "Mint".to_string(),
            domain: "livemint.com".to_string(),
        },
        sentiment: ArticleSentiment::Positive,
        sentiment_score: 0.4,
        relevance_score: 0.9,
        tags: vec!["earnings".to_string()],
        language: "en".to_string(),
    }
}

/// Analysis as the enhanced endpoint would return it, with reports populated
/// so it can't be mistaken for a projected one.
pub(crate) fn sample_analysis(ticker: &str) -> NewsAnalysis {
    let analysis_date = Utc.with_ymd_and_hms(2024, 11, 5, 12, 0, 0).unwrap();
    let recent_articles: Vec<NewsArticle> = (0..5)
        .map(|i| {
            let mut article = sample_article(
                &format!("art-{}", i),
                &format!("Headline {}", i),
                "Quarterly update",
            );
            article.published_date = analysis_date - Duration::hours(i * 6);
            article
        })
        .collect();

    NewsAnalysis {
        ticker: ticker.to_string(),
        company_name: "Reliance Industries".to_string(),
        analysis_date,
        overall_sentiment: SentimentSummary {
            score: 0.4,
            label: SentimentLabel::Positive,
            confidence: 0.85,
            trend: SentimentTrend::Improving,
        },
        sentiment_breakdown: SentimentBreakdown {
            last_7_days: 0.5,
            last_30_days: 0.4,
            last_90_days: 0.1,
        },
        key_topics: vec![TopicSummary {
            topic: "Earnings".to_string(),
            frequency: 5,
            sentiment: 0.4,
            articles: recent_articles.iter().map(|a| a.id.clone()).collect(),
        }],
        ai_insights: AiInsights {
            summary: "Coverage is constructive ahead of results.".to_string(),
            investment_implications: "Momentum supported by retail growth.".to_string(),
            key_themes: vec!["retail expansion".to_string()],
            risk_factors: vec!["Refining margin volatility".to_string()],
        },
        company_reports: vec![CompanyReport {
            id: "cr-1".to_string(),
            title: "Annual Report 2023-24".to_string(),
            report_type: CompanyReportType::AnnualReport,
            url: "https://www.ril.com/ar2024".to_string(),
            published_date: "2024-08-01".to_string(),
            fiscal_year: Some("2024".to_string()),
            quarter: None,
            summary: "Record consolidated revenue".to_string(),
            key_highlights: vec!["Revenue crossed INR 10 lakh crore".to_string()],
        }],
        industry_reports: Vec::new(),
        total_articles_analyzed: 42,
        sources: vec![SourceSummary {
            name: "Mint".to_string(),
            article_count: 42,
            average_sentiment: 0.4,
        }],
        recent_articles,
    }
}
