#![allow(clippy::uninlined_format_args)]

use sentiment_lens::evaluation::evaluate_samples;
use sentiment_lens::samples::LABELED_SAMPLES;
use sentiment_lens::{Config, SentimentLabel};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Testing classifier accuracy against the labeled sample set...");

    // Use a local configuration when present so lexicon overrides can be checked
    let config = if std::path::Path::new("sentiment-lens.yaml").exists() {
        Config::from_file("sentiment-lens.yaml")?
    } else {
        Config::default()
    };
    let scorer = config.scorer();

    let evaluation = evaluate_samples(&scorer, LABELED_SAMPLES);
    let metrics = &evaluation.metrics;

    println!("\n=== RESULTS ===");
    println!("Samples: {}", metrics.total());
    println!("Accuracy: {:.1}%", metrics.accuracy * 100.0);
    for label in SentimentLabel::ALL {
        println!(
            "  {}: precision {:.2}, recall {:.2}, f1 {:.2}",
            label,
            metrics.precision.get(label),
            metrics.recall.get(label),
            metrics.f1_score.get(label)
        );
    }
    println!("Confusion matrix: {:?}", metrics.confusion_matrix);

    let missed: Vec<_> = evaluation.misclassified().collect();
    if missed.is_empty() {
        println!("\n✅ Every sample classified correctly");
    } else {
        println!("\n⚠️  {} samples misclassified:", missed.len());
        for record in missed {
            let result = scorer.score(&record.text);
            println!("  • \"{}\"", record.text);
            println!(
                "    expected {}, got {} ({:.2})",
                record.actual, record.predicted, result.confidence
            );
            println!("    keywords: {:?}", result.keywords);
        }
    }

    Ok(())
}
