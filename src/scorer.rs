//! Sentiment Scorer
//!
//! Walks the whitespace-separated tokens of a text, applies one-token negation and
//! intensifier state, accumulates per-label scores and derives the final label,
//! confidence, explanation and keyword list.

use crate::lexicon::{clean_word, Lexicon};
use crate::sentiment::{Keyword, SentimentLabel, SentimentResult};
use chrono::Utc;
use std::cmp::Ordering;
use std::sync::Arc;
use uuid::Uuid;

pub const INTENSIFIER_MULTIPLIER: f64 = 1.5;
pub const MAX_KEYWORDS: usize = 5;
pub const MAX_EXPLANATION_KEYWORDS: usize = 3;
pub const POLAR_CONFIDENCE_CAP: f64 = 0.95;
pub const NEUTRAL_CONFIDENCE_CAP: f64 = 0.90;

pub const NO_SIGNAL_EXPLANATION: &str = "No strong sentiment indicators were found in the text.";
pub const NEUTRAL_EXPLANATION: &str = "This text is relatively neutral or balanced. It may contain mixed sentiments or lack strong emotional indicators.";

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScoreTotals {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl ScoreTotals {
    pub fn total(&self) -> f64 {
        self.positive + self.negative + self.neutral
    }
}

/// Modifiers waiting for the next scorable token.
#[derive(Debug, Default, Clone, Copy)]
struct PendingModifiers {
    negation: bool,
    intensifier: bool,
}

impl PendingModifiers {
    fn multiplier(&self) -> f64 {
        if self.intensifier {
            INTENSIFIER_MULTIPLIER
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: Arc<Lexicon>,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(Lexicon::shared())
    }
}

impl SentimentScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score `text`. Never fails; text without lexicon hits is neutral at 0.5.
    pub fn score(&self, text: &str) -> SentimentResult {
        let (totals, detected) = self.accumulate(text);
        let (sentiment, confidence, explanation) = classify(&totals, &detected);

        log::debug!(
            "Scored text ({} chars): {} at {:.2} (pos={}, neg={}, neu={}, hits={})",
            text.len(),
            sentiment,
            confidence,
            totals.positive,
            totals.negative,
            totals.neutral,
            detected.len()
        );

        SentimentResult {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            sentiment,
            confidence,
            keywords: rank_keywords(detected),
            explanation,
            timestamp: Utc::now(),
        }
    }

    /// Per-label totals and keywords in detection order.
    pub fn accumulate(&self, text: &str) -> (ScoreTotals, Vec<Keyword>) {
        let mut totals = ScoreTotals::default();
        let mut detected = Vec::new();
        let mut pending = PendingModifiers::default();

        for token in text.split_whitespace() {
            let word = clean_word(token);

            if self.lexicon.is_negation(&word) {
                pending.negation = true;
                continue;
            }
            if self.lexicon.is_intensifier(&word) {
                pending.intensifier = true;
                continue;
            }

            let multiplier = pending.multiplier();

            if self.lexicon.is_positive(&word) {
                if pending.negation {
                    totals.negative += multiplier;
                    detected.push(keyword(word, SentimentLabel::Negative, -0.5 * multiplier));
                } else {
                    totals.positive += multiplier;
                    detected.push(keyword(word, SentimentLabel::Positive, 0.5 * multiplier));
                }
            } else if self.lexicon.is_negative(&word) {
                if pending.negation {
                    totals.positive += 0.5 * multiplier;
                    detected.push(keyword(word, SentimentLabel::Positive, 0.3 * multiplier));
                } else {
                    totals.negative += multiplier;
                    detected.push(keyword(word, SentimentLabel::Negative, -0.5 * multiplier));
                }
            } else if self.lexicon.is_neutral(&word) {
                totals.neutral += 1.0;
                detected.push(keyword(word, SentimentLabel::Neutral, 0.0));
            }

            // Modifiers apply to exactly one scorable token, matched or not.
            pending = PendingModifiers::default();
        }

        (totals, detected)
    }
}

fn keyword(word: String, sentiment: SentimentLabel, impact: f64) -> Keyword {
    Keyword {
        word,
        sentiment,
        impact,
    }
}

/// Label, confidence and explanation for accumulated totals.
///
/// Positive is checked first and negative second; anything else, including a
/// positive/negative tie, falls through to neutral.
pub fn classify(totals: &ScoreTotals, detected: &[Keyword]) -> (SentimentLabel, f64, String) {
    let total = totals.total();
    if total == 0.0 {
        return (
            SentimentLabel::Neutral,
            0.5,
            NO_SIGNAL_EXPLANATION.to_string(),
        );
    }

    let positive_ratio = totals.positive / total;
    let negative_ratio = totals.negative / total;
    let neutral_ratio = totals.neutral / total;

    if positive_ratio > negative_ratio && positive_ratio > neutral_ratio {
        (
            SentimentLabel::Positive,
            (0.5 + positive_ratio * 0.5).min(POLAR_CONFIDENCE_CAP),
            build_explanation(SentimentLabel::Positive, detected),
        )
    } else if negative_ratio > positive_ratio && negative_ratio > neutral_ratio {
        (
            SentimentLabel::Negative,
            (0.5 + negative_ratio * 0.5).min(POLAR_CONFIDENCE_CAP),
            build_explanation(SentimentLabel::Negative, detected),
        )
    } else {
        (
            SentimentLabel::Neutral,
            (0.5 + neutral_ratio * 0.4).min(NEUTRAL_CONFIDENCE_CAP),
            NEUTRAL_EXPLANATION.to_string(),
        )
    }
}

fn build_explanation(label: SentimentLabel, detected: &[Keyword]) -> String {
    let indicators: Vec<&str> = detected
        .iter()
        .filter(|k| k.sentiment == label)
        .take(MAX_EXPLANATION_KEYWORDS)
        .map(|k| k.word.as_str())
        .collect();

    let indicators = if indicators.is_empty() {
        format!("general {} tone", label)
    } else {
        indicators.join(", ")
    };

    let suggestion = match label {
        SentimentLabel::Positive => "satisfaction, approval, or enthusiasm",
        SentimentLabel::Negative => "dissatisfaction, criticism, or frustration",
        SentimentLabel::Neutral => "no strong leaning",
    };

    format!(
        "This text expresses {} sentiment. Key indicators include: {}. The language suggests {}.",
        label, indicators, suggestion
    )
}

/// Stable sort by descending absolute impact, truncated to [`MAX_KEYWORDS`].
pub fn rank_keywords(mut detected: Vec<Keyword>) -> Vec<Keyword> {
    detected.sort_by(|a, b| {
        b.impact
            .abs()
            .partial_cmp(&a.impact.abs())
            .unwrap_or(Ordering::Equal)
    });
    detected.truncate(MAX_KEYWORDS);
    detected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LexiconConfig;

    fn scorer() -> SentimentScorer {
        SentimentScorer::default()
    }

    #[test]
    fn test_empty_and_whitespace_are_neutral() {
        for text in ["", "   ", "\n\t "] {
            let result = scorer().score(text);
            assert_eq!(result.sentiment, SentimentLabel::Neutral);
            assert_eq!(result.confidence, 0.5);
            assert_eq!(result.explanation, NO_SIGNAL_EXPLANATION);
            assert!(result.keywords.is_empty());
        }
    }

    #[test]
    fn test_text_is_kept_unmodified() {
        let text = "  Great PRODUCT!  ";
        assert_eq!(scorer().score(text).text, text);
    }

    #[test]
    fn test_positive_end_to_end() {
        let result = scorer().score("I absolutely love this product! Best purchase ever.");
        assert_eq!(result.sentiment, SentimentLabel::Positive);
        assert!(result.confidence >= 0.5);

        let love = result
            .keywords
            .iter()
            .find(|k| k.word == "love")
            .expect("love should be detected");
        assert_eq!(love.sentiment, SentimentLabel::Positive);
        assert!((love.impact - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_negative_end_to_end() {
        let result = scorer().score("Terrible experience. Would never recommend to anyone.");
        assert_eq!(result.sentiment, SentimentLabel::Negative);

        // "never" negates "recommend" rather than scoring on its own
        let recommend = result
            .keywords
            .iter()
            .find(|k| k.word == "recommend")
            .expect("recommend should be detected");
        assert_eq!(recommend.sentiment, SentimentLabel::Negative);
        assert!(result.keywords.iter().all(|k| k.word != "never"));
    }

    #[test]
    fn test_negation_inverts_positive_word() {
        let (totals, detected) = scorer().accumulate("not good");
        assert_eq!(totals.negative, 1.0);
        assert_eq!(totals.positive, 0.0);
        assert!((detected[0].impact + 0.5).abs() < 1e-9);
        assert_eq!(scorer().score("not good").sentiment, SentimentLabel::Negative);
    }

    #[test]
    fn test_negation_softens_negative_word() {
        let (totals, detected) = scorer().accumulate("not bad");
        assert_eq!(totals.positive, 0.5);
        assert_eq!(detected[0].sentiment, SentimentLabel::Positive);
        assert!((detected[0].impact - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_contracted_negation() {
        let result = scorer().score("I don't hate it");
        assert_eq!(result.sentiment, SentimentLabel::Positive);
    }

    #[test]
    fn test_intensifier_scales_contribution() {
        let (plain, _) = scorer().accumulate("good");
        let (intense, detected) = scorer().accumulate("very good");
        assert_eq!(intense.positive, plain.positive * 1.5);
        assert!((detected[0].impact - 0.75).abs() < 1e-9);

        let plain_conf = scorer().score("good").confidence;
        let intense_conf = scorer().score("very good").confidence;
        assert!(intense_conf >= plain_conf);
    }

    #[test]
    fn test_negation_and_intensifier_combine() {
        let (totals, detected) = scorer().accumulate("not very good");
        assert_eq!(totals.negative, 1.5);
        assert!((detected[0].impact + 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_modifiers_reset_after_unmatched_token() {
        let (totals, _) = scorer().accumulate("not the good one");
        assert_eq!(totals.positive, 1.0);
        assert_eq!(totals.negative, 0.0);

        // punctuation-only tokens still consume the pending modifier
        let (totals, _) = scorer().accumulate("very !!! good");
        assert_eq!(totals.positive, 1.0);
    }

    #[test]
    fn test_tie_falls_through_to_neutral() {
        let result = scorer().score("good bad");
        assert_eq!(result.sentiment, SentimentLabel::Neutral);
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.explanation, NEUTRAL_EXPLANATION);
    }

    #[test]
    fn test_neutral_confidence() {
        let result = scorer().score("The product is okay, nothing special.");
        assert_eq!(result.sentiment, SentimentLabel::Neutral);
        assert!((result.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_positive_confidence_with_neutral_share() {
        let result = scorer().score("good good good okay");
        assert_eq!(result.sentiment, SentimentLabel::Positive);
        assert!((result.confidence - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_keywords_limited_and_sorted() {
        let result = scorer().score(
            "okay fine good very great not bad terrible awful extremely amazing standard",
        );
        assert!(result.keywords.len() <= MAX_KEYWORDS);
        for pair in result.keywords.windows(2) {
            assert!(pair[0].impact.abs() >= pair[1].impact.abs());
        }
        assert_eq!(result.keywords[0].impact.abs(), 0.75);
    }

    #[test]
    fn test_explanation_uses_appearance_order() {
        let result = scorer().score("good fine great very love wonderful excellent");
        assert_eq!(result.sentiment, SentimentLabel::Positive);
        assert!(result
            .explanation
            .contains("Key indicators include: good, great, love."));
    }

    #[test]
    fn test_confidence_always_in_range() {
        let texts = [
            "",
            "love love love love",
            "hate",
            "okay",
            "not not not",
            "very very very good",
            "I can't say it was awful, but it wasn't great either.",
        ];
        for text in texts {
            let result = scorer().score(text);
            assert!((0.0..=1.0).contains(&result.confidence), "{}", text);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let a = scorer().score("good");
        let b = scorer().score("good");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_injected_lexicon() {
        let config = LexiconConfig {
            positive: Some(vec!["stellar".to_string()]),
            ..LexiconConfig::default()
        };
        let scorer = SentimentScorer::new(Arc::new(Lexicon::from_config(&config)));

        assert_eq!(scorer.score("stellar").sentiment, SentimentLabel::Positive);
        assert_eq!(scorer.score("love").sentiment, SentimentLabel::Neutral);
    }
}
