use serde::{Deserialize, Serialize};

/// Per-article sentiment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleSentiment {
    Positive,
    Neutral,
    Negative,
}

impl ArticleSentiment {
    /// Score above 0.1 is positive, below -0.1 negative.
    pub fn from_score(score: f64) -> Self {
        if score > 0.1 {
            ArticleSentiment::Positive
        } else if score < -0.1 {
            ArticleSentiment::Negative
        } else {
            ArticleSentiment::Neutral
        }
    }
}

/// Coarse label for aggregate sentiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    StronglyPositive,
    Positive,
    Neutral,
    Negative,
    StronglyNegative,
}

impl SentimentLabel {
    /// All comparisons are strict: exactly 0.5 is `Positive`, exactly 0.1 is `Neutral`.
    pub fn from_score(score: f64) -> Self {
        if score > 0.5 {
            SentimentLabel::StronglyPositive
        } else if score > 0.1 {
            SentimentLabel::Positive
        } else if score < -0.5 {
            SentimentLabel::StronglyNegative
        } else if score < -0.1 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentTrend {
    Improving,
    Stable,
    Declining,
}

/// Three-way split used to pick canned insight text.
///
/// Note the asymmetry: anything above zero counts as positive, but only
/// scores below -0.1 count as negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentBucket {
    Positive,
    Mixed,
    Negative,
}

impl SentimentBucket {
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            SentimentBucket::Positive
        } else if score < -0.1 {
            SentimentBucket::Negative
        } else {
            SentimentBucket::Mixed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_sentiment_thresholds() {
        assert_eq!(ArticleSentiment::from_score(0.11), ArticleSentiment::Positive);
        assert_eq!(ArticleSentiment::from_score(0.1), ArticleSentiment::Neutral);
        assert_eq!(ArticleSentiment::from_score(0.0), ArticleSentiment::Neutral);
        assert_eq!(ArticleSentiment::from_score(-0.1), ArticleSentiment::Neutral);
        assert_eq!(ArticleSentiment::from_score(-0.11), ArticleSentiment::Negative);
    }

    #[test]
    fn test_label_boundaries_are_strict() {
        assert_eq!(SentimentLabel::from_score(0.51), SentimentLabel::StronglyPositive);
        assert_eq!(SentimentLabel::from_score(0.5), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.1), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.5), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(-0.51), SentimentLabel::StronglyNegative);
    }

    #[test]
    fn test_label_covers_full_range() {
        assert_eq!(SentimentLabel::from_score(1.0), SentimentLabel::StronglyPositive);
        assert_eq!(SentimentLabel::from_score(0.3), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.3), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(-0.6), SentimentLabel::StronglyNegative);
        assert_eq!(SentimentLabel::from_score(-1.0), SentimentLabel::StronglyNegative);
    }

    #[test]
    fn test_label_serializes_snake_case() {
        let json = serde_json::to_string(&SentimentLabel::StronglyNegative).unwrap();
        assert_eq!(json, "\"strongly_negative\"");
        let trend: SentimentTrend = serde_json::from_str("\"declining\"").unwrap();
        assert_eq!(trend, SentimentTrend::Declining);
    }

    #[test]
    fn test_bucket_asymmetry() {
        assert_eq!(SentimentBucket::from_score(0.01), SentimentBucket::Positive);
        assert_eq!(SentimentBucket::from_score(0.0), SentimentBucket::Mixed);
        assert_eq!(SentimentBucket::from_score(-0.05), SentimentBucket::Mixed);
        assert_eq!(SentimentBucket::from_score(-0.1), SentimentBucket::Mixed);
        assert_eq!(SentimentBucket::from_score(-0.2), SentimentBucket::Negative);
    }
}
