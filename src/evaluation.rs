//! Accuracy Evaluator
//!
//! Builds a 3x3 confusion matrix from predicted/actual label pairs and derives
//! per-label precision, recall and F1 plus overall accuracy. Rows are actual
//! labels and columns predicted labels, both in [`SentimentLabel::ALL`] order.

use crate::samples::LabeledSample;
use crate::scorer::SentimentScorer;
use crate::sentiment::SentimentLabel;
use serde::{Deserialize, Serialize};

pub type ConfusionMatrix = [[usize; 3]; 3];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("Predicted and actual label sequences differ in length ({predicted} vs {actual})")]
    LengthMismatch { predicted: usize, actual: usize },
}

/// One value per sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerLabel {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl PerLabel {
    pub fn get(&self, label: SentimentLabel) -> f64 {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    fn set(&mut self, label: SentimentLabel, value: f64) {
        match label {
            SentimentLabel::Positive => self.positive = value,
            SentimentLabel::Negative => self.negative = value,
            SentimentLabel::Neutral => self.neutral = value,
        }
    }

    pub fn mean(&self) -> f64 {
        (self.positive + self.negative + self.neutral) / 3.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyMetrics {
    pub accuracy: f64,
    pub precision: PerLabel,
    pub recall: PerLabel,
    pub f1_score: PerLabel,
    pub confusion_matrix: ConfusionMatrix,
}

impl AccuracyMetrics {
    pub fn total(&self) -> usize {
        self.confusion_matrix.iter().flatten().sum()
    }

    pub fn correct(&self) -> usize {
        (0..3).map(|i| self.confusion_matrix[i][i]).sum()
    }

    pub fn macro_f1(&self) -> f64 {
        self.f1_score.mean()
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn tally(pairs: impl Iterator<Item = (SentimentLabel, SentimentLabel)>) -> ConfusionMatrix {
    let mut matrix = [[0usize; 3]; 3];
    for (predicted, actual) in pairs {
        matrix[actual.index()][predicted.index()] += 1;
    }
    matrix
}

pub fn confusion_matrix(
    predicted: &[SentimentLabel],
    actual: &[SentimentLabel],
) -> Result<ConfusionMatrix, EvaluationError> {
    if predicted.len() != actual.len() {
        return Err(EvaluationError::LengthMismatch {
            predicted: predicted.len(),
            actual: actual.len(),
        });
    }
    Ok(tally(predicted.iter().copied().zip(actual.iter().copied())))
}

pub fn evaluate(
    predicted: &[SentimentLabel],
    actual: &[SentimentLabel],
) -> Result<AccuracyMetrics, EvaluationError> {
    let matrix = confusion_matrix(predicted, actual)?;
    Ok(metrics_from_matrix(matrix))
}

/// Derive every metric from a filled matrix. Zero denominators yield 0.
pub fn metrics_from_matrix(matrix: ConfusionMatrix) -> AccuracyMetrics {
    let mut precision = PerLabel::default();
    let mut recall = PerLabel::default();
    let mut f1_score = PerLabel::default();

    for label in SentimentLabel::ALL {
        let i = label.index();
        let tp = matrix[i][i];
        let fp: usize = (0..3).filter(|&r| r != i).map(|r| matrix[r][i]).sum();
        let fn_: usize = (0..3).filter(|&k| k != i).map(|k| matrix[i][k]).sum();

        let p = ratio(tp, tp + fp);
        let r = ratio(tp, tp + fn_);
        let f1 = if p + r > 0.0 {
            2.0 * p * r / (p + r)
        } else {
            0.0
        };

        precision.set(label, p);
        recall.set(label, r);
        f1_score.set(label, f1);
    }

    let total: usize = matrix.iter().flatten().sum();
    let correct: usize = (0..3).map(|i| matrix[i][i]).sum();

    AccuracyMetrics {
        accuracy: ratio(correct, total),
        precision,
        recall,
        f1_score,
        confusion_matrix: matrix,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub text: String,
    pub predicted: SentimentLabel,
    pub actual: SentimentLabel,
}

impl PredictionRecord {
    pub fn is_correct(&self) -> bool {
        self.predicted == self.actual
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfEvaluation {
    pub predictions: Vec<PredictionRecord>,
    pub metrics: AccuracyMetrics,
}

impl SelfEvaluation {
    pub fn misclassified(&self) -> impl Iterator<Item = &PredictionRecord> {
        self.predictions.iter().filter(|p| !p.is_correct())
    }
}

/// Score every labeled sample and evaluate the predictions against the labels.
pub fn evaluate_samples(scorer: &SentimentScorer, samples: &[LabeledSample]) -> SelfEvaluation {
    let predictions: Vec<PredictionRecord> = samples
        .iter()
        .map(|sample| PredictionRecord {
            text: sample.text.to_string(),
            predicted: scorer.score(sample.text).sentiment,
            actual: sample.actual,
        })
        .collect();

    let metrics = metrics_from_matrix(tally(
        predictions.iter().map(|p| (p.predicted, p.actual)),
    ));

    log::info!(
        "Self-evaluation over {} samples: accuracy {:.1}%, macro F1 {:.3}",
        samples.len(),
        metrics.accuracy * 100.0,
        metrics.macro_f1()
    );

    SelfEvaluation {
        predictions,
        metrics,
    }
}
