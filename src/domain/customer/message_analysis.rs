//! Keyword sentiment and intent analysis of a customer's free-text message.
//!
//! Matching is case-insensitive substring counting against fixed keyword
//! lists. Sentiment scores are normalized to sum to 1 when any keyword
//! matched; intent scores are match counts divided by the pattern count and
//! are not normalized.

use serde::{Deserialize, Serialize};

const POSITIVE_KEYWORDS: [&str; 7] = [
    "excellent", "amazing", "love", "perfect", "great", "fantastic", "wonderful",
];
const NEGATIVE_KEYWORDS: [&str; 7] = [
    "terrible", "awful", "hate", "worst", "disappointing", "poor", "bad",
];
const NEUTRAL_KEYWORDS: [&str; 5] = ["okay", "fine", "average", "normal", "standard"];

const PURCHASE_PATTERNS: [&str; 5] = ["buy", "purchase", "order", "want to get", "need"];
const RESEARCH_PATTERNS: [&str; 5] = ["compare", "review", "features", "specifications", "details"];
const SUPPORT_PATTERNS: [&str; 6] = ["help", "problem", "issue", "support", "return", "refund"];
const BROWSING_PATTERNS: [&str; 4] = ["looking", "browsing", "exploring", "searching"];

/// Share of positive, negative and neutral wording in a message.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// How strongly a message signals each kind of intent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IntentScores {
    pub purchase: f64,
    pub research: f64,
    pub support: f64,
    pub browsing: f64,
}

impl IntentScores {
    /// Name of the strongest intent, `None` when nothing matched.
    /// Ties resolve in declaration order.
    pub fn primary(&self) -> Option<&'static str> {
        let candidates = [
            ("purchase_intent", self.purchase),
            ("research_intent", self.research),
            ("support_intent", self.support),
            ("browsing_intent", self.browsing),
        ];
        let mut best: Option<(&'static str, f64)> = None;
        for (name, score) in candidates {
            if score > best.map_or(0.0, |(_, s)| s) {
                best = Some((name, score));
            }
        }
        best.map(|(name, _)| name)
    }
}

/// Sentiment and intent read from one message.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageAnalysis {
    pub sentiment: SentimentScores,
    pub intent: IntentScores,
}

impl MessageAnalysis {
    pub fn analyze(text: &str) -> Self {
        let text = text.to_lowercase();
        Self {
            sentiment: sentiment(&text),
            intent: IntentScores {
                purchase: intent_score(&text, &PURCHASE_PATTERNS),
                research: intent_score(&text, &RESEARCH_PATTERNS),
                support: intent_score(&text, &SUPPORT_PATTERNS),
                browsing: intent_score(&text, &BROWSING_PATTERNS),
            },
        }
    }
}

fn keyword_share(text: &str, keywords: &[&str]) -> f64 {
    let hits = keywords.iter().filter(|k| text.contains(*k)).count();
    hits as f64 / keywords.len() as f64
}

fn sentiment(text: &str) -> SentimentScores {
    let positive = keyword_share(text, &POSITIVE_KEYWORDS);
    let negative = keyword_share(text, &NEGATIVE_KEYWORDS);
    let neutral = keyword_share(text, &NEUTRAL_KEYWORDS);
    let total = positive + negative + neutral;
    if total == 0.0 {
        return SentimentScores::default();
    }
    SentimentScores {
        positive: positive / total,
        negative: negative / total,
        neutral: neutral / total,
    }
}

fn intent_score(text: &str, patterns: &[&str]) -> f64 {
    let matches: usize = patterns.iter().map(|p| text.matches(*p).count()).sum();
    matches as f64 / patterns.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_only_message_is_fully_negative() {
        let analysis = MessageAnalysis::analyze("This is TERRIBLE, the worst service");
        assert_eq!(analysis.sentiment.negative, 1.0);
        assert_eq!(analysis.sentiment.positive, 0.0);
    }

    #[test]
    fn mixed_sentiment_is_normalized() {
        let s = MessageAnalysis::analyze("great product, bad delivery").sentiment;
        assert!((s.positive - 0.5).abs() < 1e-9);
        assert!((s.negative - 0.5).abs() < 1e-9);
        assert!((s.positive + s.negative + s.neutral - 1.0).abs() < 1e-9);
    }

    #[test]
    fn purchase_intent_counts_every_match() {
        let intent = MessageAnalysis::analyze("I need to buy this, can I order two?").intent;
        assert!((intent.purchase - 0.6).abs() < 1e-9);
        assert_eq!(intent.primary(), Some("purchase_intent"));
    }

    #[test]
    fn support_intent_wins_for_refund_requests() {
        let intent = MessageAnalysis::analyze("I have a problem and want a refund").intent;
        assert_eq!(intent.primary(), Some("support_intent"));
    }

    #[test]
    fn message_without_keywords_scores_zero() {
        let analysis = MessageAnalysis::analyze("Is this available in blue?");
        assert_eq!(analysis, MessageAnalysis::default());
        assert_eq!(analysis.intent.primary(), None);
    }
}
