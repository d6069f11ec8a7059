use crate::scorer::SentimentScorer;
use crate::sentiment::{SentimentLabel, SentimentResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub average_confidence: f64,
}

impl BatchSummary {
    /// Summarize `results`. An empty slice yields zero counts and an average
    /// confidence of 0.
    pub fn from_results(results: &[SentimentResult]) -> Self {
        let mut summary = BatchSummary::default();
        let mut total_confidence = 0.0;

        for result in results {
            match result.sentiment {
                SentimentLabel::Positive => summary.positive += 1,
                SentimentLabel::Negative => summary.negative += 1,
                SentimentLabel::Neutral => summary.neutral += 1,
            }
            total_confidence += result.confidence;
        }

        if !results.is_empty() {
            summary.average_confidence = total_confidence / results.len() as f64;
        }

        summary
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    /// Percentage of results carrying `label`, 0 for an empty batch.
    pub fn share(&self, label: SentimentLabel) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.count(label) as f64 / total as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub id: String,
    pub name: String,
    pub results: Vec<SentimentResult>,
    pub summary: BatchSummary,
    pub created_at: DateTime<Utc>,
}

impl BatchResult {
    pub fn from_results(name: &str, results: Vec<SentimentResult>) -> Self {
        let summary = BatchSummary::from_results(&results);
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            results,
            summary,
            created_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Mean satisfaction rating across the batch, `None` when empty.
    pub fn average_rating(&self) -> Option<f64> {
        if self.results.is_empty() {
            return None;
        }
        let total: f64 = self
            .results
            .iter()
            .map(SentimentResult::satisfaction_rating)
            .sum();
        Some(total / self.results.len() as f64)
    }
}

/// Score every text in order and summarize the outcome.
pub fn analyze_batch<S: AsRef<str>>(
    scorer: &SentimentScorer,
    texts: &[S],
    name: &str,
) -> BatchResult {
    let results: Vec<SentimentResult> = texts.iter().map(|t| scorer.score(t.as_ref())).collect();
    let batch = BatchResult::from_results(name, results);

    log::info!(
        "Batch '{}' analyzed: {} texts ({} positive, {} negative, {} neutral, avg confidence {:.2})",
        batch.name,
        batch.len(),
        batch.summary.positive,
        batch.summary.negative,
        batch.summary.neutral,
        batch.summary.average_confidence
    );

    batch
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Changes within one percentage point either way count as flat.
    pub fn from_change(change: f64) -> Self {
        if change > 1.0 {
            Trend::Up
        } else if change < -1.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

/// Distribution shift from a first batch to a second, in percentage points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchComparison {
    pub first_name: String,
    pub second_name: String,
    pub positive_change: f64,
    pub negative_change: f64,
    pub neutral_change: f64,
    pub average_confidence_change: f64,
}

impl BatchComparison {
    pub fn change(&self, label: SentimentLabel) -> f64 {
        match label {
            SentimentLabel::Positive => self.positive_change,
            SentimentLabel::Negative => self.negative_change,
            SentimentLabel::Neutral => self.neutral_change,
        }
    }

    pub fn trend(&self, label: SentimentLabel) -> Trend {
        Trend::from_change(self.change(label))
    }
}

pub fn compare_batches(first: &BatchResult, second: &BatchResult) -> BatchComparison {
    let change =
        |label: SentimentLabel| second.summary.share(label) - first.summary.share(label);

    BatchComparison {
        first_name: first.name.clone(),
        second_name: second.name.clone(),
        positive_change: change(SentimentLabel::Positive),
        negative_change: change(SentimentLabel::Negative),
        neutral_change: change(SentimentLabel::Neutral),
        average_confidence_change: (second.summary.average_confidence
            - first.summary.average_confidence)
            * 100.0,
    }
}
