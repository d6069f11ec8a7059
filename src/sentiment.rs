use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Fixed ordering shared by the confusion matrix and every per-label report.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    pub fn index(self) -> usize {
        match self {
            SentimentLabel::Positive => 0,
            SentimentLabel::Negative => 1,
            SentimentLabel::Neutral => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sentiment label: {0}")]
pub struct UnknownLabel(pub String);

impl FromStr for SentimentLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            _ => Err(UnknownLabel(s.to_string())),
        }
    }
}

/// One lexicon hit and its signed contribution to the final score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub sentiment: SentimentLabel,
    pub impact: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResult {
    pub id: String,
    pub text: String,
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub keywords: Vec<Keyword>,
    pub explanation: String,
    pub timestamp: DateTime<Utc>,
}

impl SentimentResult {
    /// Star rating on a 1.0 to 5.0 scale.
    ///
    /// Positive results land in 3.5..=5.0 and neutral ones in 2.5..=3.5, both rising
    /// with confidence. Negative results land in 1.0..=2.5 and fall as confidence
    /// rises.
    pub fn satisfaction_rating(&self) -> f64 {
        match self.sentiment {
            SentimentLabel::Positive => 3.5 + self.confidence * 1.5,
            SentimentLabel::Negative => 1.0 + (1.0 - self.confidence) * 1.5,
            SentimentLabel::Neutral => 2.5 + self.confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(sentiment: SentimentLabel, confidence: f64) -> SentimentResult {
        SentimentResult {
            id: "test".to_string(),
            text: "sample".to_string(),
            sentiment,
            confidence,
            keywords: Vec::new(),
            explanation: String::new(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_label_index_order() {
        let indices: Vec<usize> = SentimentLabel::ALL.iter().map(|l| l.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!(
            "Positive".parse::<SentimentLabel>(),
            Ok(SentimentLabel::Positive)
        );
        assert_eq!(
            " neutral ".parse::<SentimentLabel>(),
            Ok(SentimentLabel::Neutral)
        );
        assert!("mixed".parse::<SentimentLabel>().is_err());
    }

    #[test]
    fn test_label_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }

    #[test]
    fn test_satisfaction_rating_ranges() {
        let positive = result_with(SentimentLabel::Positive, 0.95);
        assert!((positive.satisfaction_rating() - 4.925).abs() < 1e-9);

        let negative = result_with(SentimentLabel::Negative, 0.95);
        assert!((negative.satisfaction_rating() - 1.075).abs() < 1e-9);

        let neutral = result_with(SentimentLabel::Neutral, 0.5);
        assert!((neutral.satisfaction_rating() - 3.0).abs() < 1e-9);
    }
}
