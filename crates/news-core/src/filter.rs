use crate::types::NewsArticle;

impl NewsArticle {
    /// Case-insensitive substring match against title or summary.
    /// `needle` must already be lowercase.
    fn mentions_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.summary.to_lowercase().contains(needle)
    }

    pub fn mentions(&self, topic: &str) -> bool {
        self.mentions_lowercase(&topic.to_lowercase())
    }
}

/// Keep at most `limit` articles mentioning `topic`, in input order.
pub fn filter_by_topic(articles: Vec<NewsArticle>, topic: &str, limit: usize) -> Vec<NewsArticle> {
    let needle = topic.to_lowercase();
    articles
        .into_iter()
        .filter(|article| article.mentions_lowercase(&needle))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArticleSource;
    use crate::ArticleSentiment;
    use chrono::Utc;

    fn article(id: &str, title: &str, summary: &str) -> NewsArticle {
        NewsArticle {
            id: id.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            url: "http://example.com".to_string(),
            published_date: Utc::now(),
            source: ArticleSource {
                name: "Wire".to_string(),
                domain: "wire.example".to_string(),
            },
            sentiment: ArticleSentiment::Neutral,
            sentiment_score: 0.0,
            relevance_score: 0.5,
            tags: vec![],
            language: "en".to_string(),
        }
    }

    #[test]
    fn test_matches_title_or_summary_ignoring_case() {
        let articles = vec![
            article("1", "EARNINGS beat estimates", ""),
            article("2", "New product launch", "no match here"),
            article("3", "Board meeting", "Quarterly Earnings call scheduled"),
        ];

        let ids: Vec<String> = filter_by_topic(articles, "Earnings", 5)
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_caps_at_limit_preserving_order() {
        let articles = (0..8)
            .map(|i| article(&i.to_string(), &format!("earnings update {}", i), ""))
            .collect();

        let kept = filter_by_topic(articles, "earnings", 5);
        assert_eq!(kept.len(), 5);
        assert_eq!(kept[0].id, "0");
        assert_eq!(kept[4].id, "4");
    }

    #[test]
    fn test_mentions() {
        let a = article("1", "Merger talks", "Deal with rival");
        assert!(a.mentions("MERGER"));
        assert!(a.mentions("rival"));
        assert!(!a.mentions("earnings"));
    }
}
