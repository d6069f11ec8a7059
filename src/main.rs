use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use sentiment_lens::batch::{analyze_batch, compare_batches, BatchResult, Trend};
use sentiment_lens::evaluation::{evaluate_samples, SelfEvaluation};
use sentiment_lens::export::{self, ExportFormat};
use sentiment_lens::input::{self, TextInput};
use sentiment_lens::samples::{DEMO_BATCH_NAME, DEMO_REVIEWS, LABELED_SAMPLES};
use sentiment_lens::{Config, SentimentLabel, SentimentResult, SentimentScorer};
use std::path::Path;
use std::process;

fn main() {
    let matches = Command::new("sentiment-lens")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lexicon-based sentiment analysis for reviews, feedback and other free text")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("sentiment-lens.yaml"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate a default configuration file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("text")
                .short('t')
                .long("text")
                .value_name("TEXT")
                .help("Analyze a single text")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Analyze a text file (one text per line is analyzed as a batch)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .value_name("NAME")
                .help("Name for the analyzed batch")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("demo")
                .long("demo")
                .help("Analyze the built-in sample reviews as a batch")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("evaluate")
                .long("evaluate")
                .help("Evaluate classification accuracy against the labeled sample set")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("compare")
                .long("compare")
                .value_names(["FIRST", "SECOND"])
                .num_args(2)
                .help("Analyze two batch files and compare their sentiment distribution"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Export the batch instead of printing a summary (json, csv, html)")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the export to a file instead of stdout")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging with per-text scoring details")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        generate_default_config(generate_path);
        return;
    }

    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("sentiment-lens.yaml");
    let config_found = Path::new(config_path).exists();
    let config = if config_found {
        match Config::from_file(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading configuration: {e:#}");
                process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        config.log_level()
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if !config_found {
        log::warn!("Configuration file '{config_path}' not found, using default configuration");
    }

    let scorer = config.scorer();

    if matches.get_flag("evaluate") {
        let evaluation = evaluate_samples(&scorer, LABELED_SAMPLES);
        print_evaluation(&evaluation);
        return;
    }

    if let Some(mut files) = matches.get_many::<String>("compare") {
        let (first_path, second_path) = match (files.next(), files.next()) {
            (Some(first), Some(second)) => (first, second),
            _ => {
                eprintln!("❌ --compare needs two batch files");
                process::exit(1);
            }
        };
        let first = analyze_file_as_batch(&scorer, first_path);
        let second = analyze_file_as_batch(&scorer, second_path);
        print_comparison(&first, &second);
        return;
    }

    let batch_name = matches
        .get_one::<String>("name")
        .cloned()
        .unwrap_or_else(|| config.batch.default_name.clone());

    if let Some(text) = matches.get_one::<String>("text") {
        analyze_single(&scorer, &config, text);
        return;
    }

    if let Some(path) = matches.get_one::<String>("file") {
        let content = read_file(path);
        match input::parse_upload(&content) {
            TextInput::Single(text) => analyze_single(&scorer, &config, &text),
            TextInput::Batch(texts) => {
                let batch = analyze_batch(&scorer, &texts, &batch_name);
                output_batch(&batch, &config, &matches);
            }
        }
        return;
    }

    if matches.get_flag("demo") {
        let name = matches
            .get_one::<String>("name")
            .map(String::as_str)
            .unwrap_or(DEMO_BATCH_NAME);
        let batch = analyze_batch(&scorer, DEMO_REVIEWS, name);
        output_batch(&batch, &config, &matches);
        return;
    }

    eprintln!("Nothing to analyze. Use --text, --file, --demo, --compare or --evaluate (see --help).");
    process::exit(2);
}

fn generate_default_config(path: &str) {
    let config = Config::default();
    match config.to_file(path) {
        Ok(()) => {
            println!("Default configuration written to: {path}");
            println!("Please edit the configuration file to suit your needs.");
        }
        Err(e) => {
            eprintln!("Error writing configuration file: {e:#}");
            process::exit(1);
        }
    }
}

fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("❌ Error reading file {path}: {e}");
            process::exit(1);
        }
    }
}

fn analyze_file_as_batch(scorer: &SentimentScorer, path: &str) -> BatchResult {
    let texts = input::parse_batch(&read_file(path));
    let name = Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string());
    analyze_batch(scorer, &texts, &name)
}

fn analyze_single(scorer: &SentimentScorer, config: &Config, text: &str) {
    match input::validate_text(text, config.input.max_words) {
        Ok(text) => print_result(&scorer.score(&text)),
        Err(e) => {
            eprintln!("❌ {e}");
            process::exit(1);
        }
    }
}

fn output_batch(batch: &BatchResult, config: &Config, matches: &clap::ArgMatches) {
    let output_path = matches.get_one::<String>("output");
    let requested_format = matches.get_one::<String>("format").cloned().or_else(|| {
        // Writing to a file without an explicit format falls back to the configured one
        output_path.and_then(|_| config.export.as_ref().map(|e| e.default_format.clone()))
    });

    let Some(format_name) = requested_format else {
        print_batch(batch);
        return;
    };

    let format = match format_name.parse::<ExportFormat>() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("❌ {e}");
            process::exit(1);
        }
    };

    let content = match export::render(batch, format) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("❌ Failed to export batch: {e}");
            process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = std::fs::write(path, content) {
                eprintln!("❌ Failed to write {path}: {e}");
                process::exit(1);
            }
            println!("✅ Exported '{}' to {}", batch.name, path);
        }
        None => println!("{content}"),
    }
}

fn label_icon(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "🟢",
        SentimentLabel::Negative => "🔴",
        SentimentLabel::Neutral => "🟡",
    }
}

fn print_result(result: &SentimentResult) {
    println!("🔍 Sentiment Analysis");
    println!("═══════════════════════════════════════");
    println!(
        "  {} Sentiment: {} ({:.1}% confidence)",
        label_icon(result.sentiment),
        result.sentiment,
        result.confidence * 100.0
    );
    println!("  ⭐ Satisfaction: {:.1} / 5", result.satisfaction_rating());
    println!();
    println!("  {}", result.explanation);

    if !result.keywords.is_empty() {
        println!();
        println!("  Keywords:");
        for keyword in &result.keywords {
            println!(
                "    • {:<16} {:<8} {:+.2}",
                keyword.word, keyword.sentiment, keyword.impact
            );
        }
    }
}

fn print_batch(batch: &BatchResult) {
    let summary = &batch.summary;

    println!("📊 {}", batch.name);
    println!("═══════════════════════════════════════");
    println!("  Total Texts: {}", batch.len());
    for label in SentimentLabel::ALL {
        println!(
            "  {} {:<9} {} ({:.1}%)",
            label_icon(label),
            label.to_string() + ":",
            summary.count(label),
            summary.share(label)
        );
    }
    println!(
        "  Average Confidence: {:.1}%",
        summary.average_confidence * 100.0
    );
    if let Some(rating) = batch.average_rating() {
        println!("  ⭐ Aggregate Satisfaction: {:.1} / 5", rating);
    }
    println!();

    println!("┌──────────────────────────────────────────────────┬──────────┬────────┐");
    println!("│ Text                                             │ Label    │   Conf │");
    println!("├──────────────────────────────────────────────────┼──────────┼────────┤");
    for result in &batch.results {
        println!(
            "│ {:<48} │ {:<8} │ {:>5.1}% │",
            truncate_string(&result.text, 48),
            result.sentiment,
            result.confidence * 100.0
        );
    }
    println!("└──────────────────────────────────────────────────┴──────────┴────────┘");
}

fn print_evaluation(evaluation: &SelfEvaluation) {
    let metrics = &evaluation.metrics;

    println!("🎯 Accuracy Report");
    println!("═══════════════════════════════════════");
    println!(
        "  Overall Accuracy: {:.1}% ({} of {} correct)",
        metrics.accuracy * 100.0,
        metrics.correct(),
        metrics.total()
    );
    println!("  Macro F1: {:.1}%", metrics.macro_f1() * 100.0);
    println!();

    println!("  Per-label metrics:");
    for label in SentimentLabel::ALL {
        println!(
            "    {} {:<9} P: {:>5.1}%  R: {:>5.1}%  F1: {:>5.1}%",
            label_icon(label),
            label,
            metrics.precision.get(label) * 100.0,
            metrics.recall.get(label) * 100.0,
            metrics.f1_score.get(label) * 100.0
        );
    }
    println!();

    println!("  Confusion matrix (rows = actual, columns = predicted):");
    println!("    {:<10} {:>9} {:>9} {:>9}", "", "positive", "negative", "neutral");
    for label in SentimentLabel::ALL {
        let row = metrics.confusion_matrix[label.index()];
        println!(
            "    {:<10} {:>9} {:>9} {:>9}",
            label.as_str(),
            row[0],
            row[1],
            row[2]
        );
    }

    let missed: Vec<_> = evaluation.misclassified().collect();
    if !missed.is_empty() {
        println!();
        println!("  Misclassified samples ({}):", missed.len());
        for record in missed {
            println!(
                "    • \"{}\" expected {}, got {}",
                record.text, record.actual, record.predicted
            );
        }
    }
}

fn print_comparison(first: &BatchResult, second: &BatchResult) {
    let comparison = compare_batches(first, second);

    println!("⚖️  {} → {}", comparison.first_name, comparison.second_name);
    println!("═══════════════════════════════════════");
    for label in SentimentLabel::ALL {
        let trend = match comparison.trend(label) {
            Trend::Up => "📈",
            Trend::Down => "📉",
            Trend::Flat => "➖",
        };
        println!(
            "  {} {:<9} {:>5.1}% → {:>5.1}%  ({:+.1} pts)",
            trend,
            label,
            first.summary.share(label),
            second.summary.share(label),
            comparison.change(label)
        );
    }
    println!(
        "  Average Confidence: {:.1}% → {:.1}% ({:+.1} pts)",
        first.summary.average_confidence * 100.0,
        second.summary.average_confidence * 100.0,
        comparison.average_confidence_change
    );
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
