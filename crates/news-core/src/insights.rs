use crate::sentiment::SentimentBucket;
use crate::types::AiInsights;

/// Canned commentary for one sentiment bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightTemplate {
    pub bucket: SentimentBucket,
    pub investment_implications: &'static str,
    pub key_themes: &'static [&'static str],
    pub risk_factors: &'static [&'static str],
}

pub const INSIGHT_TABLE: [InsightTemplate; 3] = [
    InsightTemplate {
        bucket: SentimentBucket::Positive,
        investment_implications: "Positive sentiment suggests favorable investment conditions with continued monitoring recommended.",
        key_themes: &["positive outlook", "market confidence"],
        risk_factors: &["General market conditions", "Execution risks"],
    },
    InsightTemplate {
        bucket: SentimentBucket::Mixed,
        investment_implications: "Mixed sentiment indicates balanced outlook with selective opportunities.",
        key_themes: &["stable operations", "mixed signals"],
        risk_factors: &["General market conditions", "Execution risks"],
    },
    InsightTemplate {
        bucket: SentimentBucket::Negative,
        investment_implications: "Negative sentiment suggests cautious approach with focus on risk management.",
        key_themes: &["market concerns", "risk factors"],
        risk_factors: &["Market volatility", "Sector headwinds"],
    },
];

impl InsightTemplate {
    pub fn for_bucket(bucket: SentimentBucket) -> &'static InsightTemplate {
        match bucket {
            SentimentBucket::Positive => &INSIGHT_TABLE[0],
            SentimentBucket::Mixed => &INSIGHT_TABLE[1],
            SentimentBucket::Negative => &INSIGHT_TABLE[2],
        }
    }

    pub fn render(&self, company_name: &str) -> AiInsights {
        AiInsights {
            summary: format!(
                "Market sentiment analysis for {} based on available data indicators and historical patterns.",
                company_name
            ),
            investment_implications: self.investment_implications.to_string(),
            key_themes: self.key_themes.iter().map(|s| s.to_string()).collect(),
            risk_factors: self.risk_factors.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Template insights for a score. These are fixed strings, not model output.
pub fn canned_insights(company_name: &str, score: f64) -> AiInsights {
    InsightTemplate::for_bucket(SentimentBucket::from_score(score)).render(company_name)
}
