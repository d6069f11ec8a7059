pub mod batch;
pub mod config;
pub mod evaluation;
pub mod export;
pub mod input;
pub mod lexicon;
pub mod samples;
pub mod scorer;
pub mod sentiment;

pub use batch::{analyze_batch, compare_batches, BatchComparison, BatchResult, BatchSummary};
pub use config::Config;
pub use evaluation::{evaluate, evaluate_samples, AccuracyMetrics, EvaluationError};
pub use lexicon::Lexicon;
pub use scorer::SentimentScorer;
pub use sentiment::{Keyword, SentimentLabel, SentimentResult};
