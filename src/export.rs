use crate::batch::{BatchResult, BatchSummary};
use crate::sentiment::{Keyword, SentimentLabel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const HTML_TEXT_PREVIEW_CHARS: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0} (use json, csv or html)")]
    UnsupportedFormat(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Html,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "html" => Ok(ExportFormat::Html),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Per-result fields carried by the JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedResult {
    pub text: String,
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub keywords: Vec<Keyword>,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedBatch {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub summary: BatchSummary,
    pub results: Vec<ExportedResult>,
}

impl From<&BatchResult> for ExportedBatch {
    fn from(batch: &BatchResult) -> Self {
        Self {
            name: batch.name.clone(),
            created_at: batch.created_at,
            summary: batch.summary.clone(),
            results: batch
                .results
                .iter()
                .map(|r| ExportedResult {
                    text: r.text.clone(),
                    sentiment: r.sentiment,
                    confidence: r.confidence,
                    keywords: r.keywords.clone(),
                    explanation: r.explanation.clone(),
                })
                .collect(),
        }
    }
}

pub fn render(batch: &BatchResult, format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Json => to_json(batch),
        ExportFormat::Csv => Ok(to_csv(batch)),
        ExportFormat::Html => Ok(to_html(batch)),
    }
}

pub fn file_name(batch: &BatchResult, format: ExportFormat) -> String {
    format!("{}-sentiment-analysis.{}", batch.name, format.extension())
}

pub fn to_json(batch: &BatchResult) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&ExportedBatch::from(batch))?)
}

pub fn parse_json(content: &str) -> Result<ExportedBatch, ExportError> {
    Ok(serde_json::from_str(content)?)
}

fn csv_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

pub fn to_csv(batch: &BatchResult) -> String {
    let mut csv = String::from("Text,Sentiment,Confidence,Keywords,Explanation");

    for result in &batch.results {
        let keywords: Vec<&str> = result.keywords.iter().map(|k| k.word.as_str()).collect();
        csv.push('\n');
        csv.push_str(&format!(
            "{},{},{:.2},{},{}",
            csv_quote(&result.text),
            result.sentiment,
            result.confidence * 100.0,
            csv_quote(&keywords.join(", ")),
            csv_quote(&result.explanation)
        ));
    }

    csv
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn preview(text: &str) -> String {
    if text.chars().count() > HTML_TEXT_PREVIEW_CHARS {
        let head: String = text.chars().take(HTML_TEXT_PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Standalone print-formatted report.
pub fn to_html(batch: &BatchResult) -> String {
    let rows: String = batch
        .results
        .iter()
        .map(|r| {
            format!(
                r#"
        <tr>
          <td>{}</td>
          <td><span class="badge badge-{}">{}</span></td>
          <td>{:.1}%</td>
        </tr>"#,
                escape_html(&preview(&r.text)),
                r.sentiment,
                r.sentiment,
                r.confidence * 100.0
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>{name} - Sentiment Analysis Report</title>
  <style>
    body {{ font-family: Arial, sans-serif; padding: 40px; max-width: 800px; margin: 0 auto; }}
    h1 {{ color: #1e293b; border-bottom: 2px solid #e2e8f0; padding-bottom: 16px; }}
    .summary {{ background: #f8fafc; padding: 20px; border-radius: 8px; margin: 20px 0; }}
    .summary-grid {{ display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; }}
    .stat {{ text-align: center; }}
    .stat-value {{ font-size: 24px; font-weight: bold; color: #1e293b; }}
    .stat-label {{ font-size: 12px; color: #64748b; }}
    .positive {{ color: #16a34a; }}
    .negative {{ color: #dc2626; }}
    .neutral {{ color: #f59e0b; }}
    table {{ width: 100%; border-collapse: collapse; margin-top: 20px; }}
    th, td {{ padding: 12px; text-align: left; border-bottom: 1px solid #e2e8f0; }}
    th {{ background: #f8fafc; font-weight: 600; }}
    .badge {{ display: inline-block; padding: 4px 12px; border-radius: 999px; font-size: 12px; font-weight: 500; }}
    .badge-positive {{ background: #dcfce7; color: #16a34a; }}
    .badge-negative {{ background: #fee2e2; color: #dc2626; }}
    .badge-neutral {{ background: #fef3c7; color: #f59e0b; }}
  </style>
</head>
<body>
  <h1>{name}</h1>
  <p style="color: #64748b;">Generated on {generated}</p>

  <div class="summary">
    <h3 style="margin-top: 0;">Summary</h3>
    <div class="summary-grid">
      <div class="stat"><div class="stat-value">{total}</div><div class="stat-label">Total Texts</div></div>
      <div class="stat"><div class="stat-value positive">{positive}</div><div class="stat-label">Positive</div></div>
      <div class="stat"><div class="stat-value negative">{negative}</div><div class="stat-label">Negative</div></div>
      <div class="stat"><div class="stat-value neutral">{neutral}</div><div class="stat-label">Neutral</div></div>
    </div>
    <p style="margin-bottom: 0; margin-top: 16px;">
      <strong>Average Confidence:</strong> {average:.1}%
    </p>
  </div>

  <h3>Detailed Results</h3>
  <table>
    <thead>
      <tr>
        <th style="width: 50%;">Text</th>
        <th>Sentiment</th>
        <th>Confidence</th>
      </tr>
    </thead>
    <tbody>{rows}
    </tbody>
  </table>
</body>
</html>
"#,
        name = escape_html(&batch.name),
        generated = Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        total = batch.results.len(),
        positive = batch.summary.positive,
        negative = batch.summary.negative,
        neutral = batch.summary.neutral,
        average = batch.summary.average_confidence * 100.0,
        rows = rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::analyze_batch;
    use crate::scorer::SentimentScorer;

    fn sample_batch() -> BatchResult {
        analyze_batch(
            &SentimentScorer::default(),
            &[
                "I absolutely love this product! Best purchase ever.",
                "Terrible experience. Would never recommend to anyone.",
                "It's \"fine\", I guess.",
                "",
            ],
            "Q3 Reviews",
        )
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_file_name() {
        let batch = sample_batch();
        assert_eq!(
            file_name(&batch, ExportFormat::Csv),
            "Q3 Reviews-sentiment-analysis.csv"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let batch = sample_batch();
        let json = to_json(&batch).unwrap();
        let parsed = parse_json(&json).unwrap();

        assert_eq!(parsed.name, batch.name);
        assert_eq!(parsed.created_at, batch.created_at);
        assert_eq!(parsed.summary, batch.summary);
        assert_eq!(parsed.results.len(), batch.results.len());
        for (exported, original) in parsed.results.iter().zip(batch.results.iter()) {
            assert_eq!(exported.text, original.text);
            assert_eq!(exported.sentiment, original.sentiment);
            assert_eq!(exported.confidence, original.confidence);
            assert_eq!(exported.keywords, original.keywords);
            assert_eq!(exported.explanation, original.explanation);
        }
    }

    #[test]
    fn test_json_uses_interchange_field_names() {
        let json = to_json(&sample_batch()).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"averageConfidence\""));
        assert!(json.contains("\"sentiment\": \"positive\""));
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn test_csv_layout_and_quoting() {
        let csv = to_csv(&sample_batch());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Text,Sentiment,Confidence,Keywords,Explanation");
        assert!(lines[1].starts_with(
            "\"I absolutely love this product! Best purchase ever.\",positive,95.00,\"love, best\","
        ));
        assert!(lines[3].starts_with("\"It's \"\"fine\"\", I guess.\",neutral,90.00,\"fine\","));
        assert!(lines[4].starts_with("\"\",neutral,50.00,\"\","));
    }

    #[test]
    fn test_html_report() {
        let mut batch = sample_batch();
        batch.name = "<script>".to_string();
        batch.results[0].text = "x".repeat(150);

        let html = to_html(&batch);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains(&format!("{}...", "x".repeat(100))));
        assert!(html.contains("badge-negative"));
        assert!(html.contains("<div class=\"stat-value\">4</div>"));
    }

    #[test]
    fn test_render_dispatch() {
        let batch = sample_batch();
        assert!(render(&batch, ExportFormat::Csv).unwrap().starts_with("Text,"));
        assert!(render(&batch, ExportFormat::Json).unwrap().starts_with('{'));
        assert!(render(&batch, ExportFormat::Html)
            .unwrap()
            .contains("Sentiment Analysis Report"));
    }
}
