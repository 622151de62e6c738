use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sentiment::{ArticleSentiment, SentimentLabel, SentimentTrend};

/// Publisher of a news article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub name: String,
    pub domain: String,
}

/// News article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub url: String,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub published_date: DateTime<Utc>,
    pub source: ArticleSource,
    pub sentiment: ArticleSentiment,
    pub sentiment_score: f64,  // -1.0 to 1.0
    pub relevance_score: f64,  // 0.0 to 1.0
    #[serde(default)]
    pub tags: Vec<String>,
    pub language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyReportType {
    AnnualReport,
    EarningsTranscript,
    InvestorPresentation,
    ProxyStatement,
}

impl CompanyReportType {
    /// Wire name, as used in the `types` query filter
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyReportType::AnnualReport => "annual_report",
            CompanyReportType::EarningsTranscript => "earnings_transcript",
            CompanyReportType::InvestorPresentation => "investor_presentation",
            CompanyReportType::ProxyStatement => "proxy_statement",
        }
    }
}

/// Filing or presentation published by the company itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyReport {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub report_type: CompanyReportType,
    pub url: String,
    pub published_date: String,
    #[serde(default)]
    pub fiscal_year: Option<String>,
    #[serde(default)]
    pub quarter: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub key_highlights: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryReportType {
    IndustryAnalysis,
    SectorOutlook,
    MarketIntelligence,
    ResearchReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustrySourceType {
    ResearchFirm,
    Government,
    TradeAssociation,
    ConsultingFirm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryReportSource {
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: IndustrySourceType,
}

/// Third-party research covering the company's sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryReport {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub report_type: IndustryReportType,
    pub url: String,
    pub published_date: String,
    pub source: IndustryReportSource,
    pub summary: String,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub key_insights: Vec<String>,
}

/// Aggregate sentiment over the analysis window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub score: f64,      // -1.0 to 1.0
    pub label: SentimentLabel,
    pub confidence: f64, // 0.0 to 1.0
    pub trend: SentimentTrend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub last_7_days: f64,
    pub last_30_days: f64,
    pub last_90_days: f64,
}

impl SentimentBreakdown {
    /// Same score in every window, used when no time-bucketed data exists
    pub fn flat(score: f64) -> Self {
        Self {
            last_7_days: score,
            last_30_days: score,
            last_90_days: score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub topic: String,
    pub frequency: u32,
    pub sentiment: f64,
    /// Ids of the articles mentioning this topic
    #[serde(default)]
    pub articles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiInsights {
    pub summary: String,
    pub investment_implications: String,
    #[serde(default)]
    pub key_themes: Vec<String>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
}

/// Per-publisher article count and average sentiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub name: String,
    pub article_count: u32,
    pub average_sentiment: f64,
}

/// Full news analysis for a ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsAnalysis {
    pub ticker: String,
    pub company_name: String,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub analysis_date: DateTime<Utc>,

    pub recent_articles: Vec<NewsArticle>,

    pub overall_sentiment: SentimentSummary,
    pub sentiment_breakdown: SentimentBreakdown,

    pub key_topics: Vec<TopicSummary>,
    pub ai_insights: AiInsights,

    #[serde(default)]
    pub company_reports: Vec<CompanyReport>,
    #[serde(default)]
    pub industry_reports: Vec<IndustryReport>,

    pub total_articles_analyzed: u32,
    pub sources: Vec<SourceSummary>,
}

/// Payload of the legacy `/api/company/{ticker}/sentiment` endpoint.
///
/// Every field is optional; the projection supplies defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacySentiment {
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub headlines: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub news_count: Option<u32>,
}

impl LegacySentiment {
    pub fn score(&self) -> f64 {
        self.sentiment_score.unwrap_or(0.0)
    }

    pub fn headlines(&self) -> &[String] {
        self.headlines.as_deref().unwrap_or(&[])
    }

    /// Reported article count. The legacy service sends 0 when it does not know.
    pub fn known_count(&self) -> Option<u32> {
        self.news_count.filter(|count| *count > 0)
    }
}

/// Accepts any JSON number; fractions truncate, non-positive means unknown.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw
        .filter(|count| count.is_finite() && *count >= 1.0)
        .map(|count| count.min(u32::MAX as f64) as u32))
}
