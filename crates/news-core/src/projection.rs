//! Builds a best-effort `NewsAnalysis` out of the legacy sentiment payload.
//!
//! The legacy endpoint only carries a headline list plus one aggregate score
//! and count. That single score is copied onto every article and every
//! breakdown window; there is nothing finer-grained to use.

use chrono::{DateTime, Duration, Utc};

use crate::insights::canned_insights;
use crate::sentiment::{ArticleSentiment, SentimentLabel, SentimentTrend};
use crate::types::{
    ArticleSource, LegacySentiment, NewsAnalysis, NewsArticle, SentimentBreakdown,
    SentimentSummary, SourceSummary, TopicSummary,
};

const PLACEHOLDER_URL: &str = "https://economictimes.indiatimes.com/markets/stocks/news";
const PLACEHOLDER_SOURCE_NAME: &str = "Market Analysis";
const PLACEHOLDER_SOURCE_DOMAIN: &str = "economictimes.com";
const AGGREGATE_SOURCE_NAME: &str = "Market Analysis Sources";
const SYNTHETIC_TOPIC: &str = "Market Performance";

const SYNTHETIC_RELEVANCE: f64 = 0.8;
const SYNTHETIC_CONFIDENCE: f64 = 0.7;
const DEFAULT_TOPIC_FREQUENCY: u32 = 3;

/// Ticker without a trailing `.NS` exchange suffix, e.g. `RELIANCE.NS` -> `RELIANCE`.
pub fn company_name_from_ticker(ticker: &str) -> String {
    ticker.strip_suffix(".NS").unwrap_or(ticker).to_string()
}

/// Turn the legacy headline list into articles, newest first.
///
/// Headline `i` becomes `mock-{i}`, published `i` days before `now`.
pub fn synthesize_articles(legacy: &LegacySentiment, now: DateTime<Utc>) -> Vec<NewsArticle> {
    let score = legacy.score();
    let sentiment = ArticleSentiment::from_score(score);

    legacy
        .headlines()
        .iter()
        .enumerate()
        .map(|(i, headline)| NewsArticle {
            id: format!("mock-{}", i),
            title: headline.clone(),
            summary: format!("Analysis summary for: {}", headline),
            url: PLACEHOLDER_URL.to_string(),
            published_date: now - Duration::days(i as i64),
            source: ArticleSource {
                name: PLACEHOLDER_SOURCE_NAME.to_string(),
                domain: PLACEHOLDER_SOURCE_DOMAIN.to_string(),
            },
            sentiment,
            sentiment_score: score,
            relevance_score: SYNTHETIC_RELEVANCE,
            tags: vec!["market".to_string(), "analysis".to_string()],
            language: "en".to_string(),
        })
        .collect()
}

/// Project a legacy payload into the full analysis shape.
///
/// Never fails: every missing field has a default. Only the timestamps depend
/// on `now`.
pub fn project_legacy(ticker: &str, legacy: &LegacySentiment, now: DateTime<Utc>) -> NewsAnalysis {
    let score = legacy.score();
    let company_name = company_name_from_ticker(ticker);
    let articles = synthesize_articles(legacy, now);
    let total = legacy.known_count().unwrap_or(articles.len() as u32);

    let topic = TopicSummary {
        topic: SYNTHETIC_TOPIC.to_string(),
        frequency: legacy.known_count().unwrap_or(DEFAULT_TOPIC_FREQUENCY),
        sentiment: score,
        articles: articles.iter().map(|a| a.id.clone()).collect(),
    };

    NewsAnalysis {
        ticker: ticker.to_string(),
        ai_insights: canned_insights(&company_name, score),
        company_name,
        analysis_date: now,
        recent_articles: articles,
        overall_sentiment: SentimentSummary {
            score,
            label: SentimentLabel::from_score(score),
            confidence: SYNTHETIC_CONFIDENCE,
            trend: SentimentTrend::Stable,
        },
        sentiment_breakdown: SentimentBreakdown::flat(score),
        key_topics: vec![topic],
        company_reports: Vec::new(),
        industry_reports: Vec::new(),
        total_articles_analyzed: total,
        sources: vec![SourceSummary {
            name: AGGREGATE_SOURCE_NAME.to_string(),
            article_count: total,
            average_sentiment: score,
        }],
    }
}
