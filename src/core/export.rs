//! History export as JSON or CSV

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::types::{AnalysisRecord, HistoryReason};

const CSV_HEADER: &str = "id,timestamp,sentiment,confidence,positive,negative,neutral,\
joy,anger,fear,sadness,surprise,disgust,word_count,context,keywords,text";

/// Supported export encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn parse(format: &str) -> Result<Self, HistoryReason> {
        match format.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(HistoryReason::R411_EXPORT_UNSUPPORTED_FORMAT),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv; charset=utf-8",
        }
    }

    /// e.g. `vibecheckr-analysis-2024-05-01.csv`
    pub fn file_name(&self, date: DateTime<Utc>) -> String {
        format!("vibecheckr-analysis-{}.{}", date.format("%Y-%m-%d"), self.extension())
    }
}

/// Encode records in the requested format
pub fn export_records(records: &[AnalysisRecord], format: ExportFormat) -> Result<String, HistoryReason> {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(records)
            .map_err(|_| HistoryReason::R412_EXPORT_SERIALIZE_ERROR),
        ExportFormat::Csv => Ok(to_csv(records)),
    }
}

fn to_csv(records: &[AnalysisRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for r in records {
        let context = r.analysis_context.map(|c| c.as_str()).unwrap_or("");
        let fields = [
            r.id.clone(),
            r.timestamp.to_rfc3339(),
            r.sentiment.as_str().to_string(),
            format!("{:.4}", r.confidence),
            format!("{:.4}", r.scores.positive),
            format!("{:.4}", r.scores.negative),
            format!("{:.4}", r.scores.neutral),
            format!("{:.2}", r.emotions.joy),
            format!("{:.2}", r.emotions.anger),
            format!("{:.2}", r.emotions.fear),
            format!("{:.2}", r.emotions.sadness),
            format!("{:.2}", r.emotions.surprise),
            format!("{:.2}", r.emotions.disgust),
            r.word_count.to_string(),
            context.to_string(),
            r.keywords.join(";"),
            r.text.clone(),
        ];
        let line: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }

    out
}

/// Quote a field when it contains a delimiter, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{analyze, SAMPLE_TEXTS};
    use chrono::TimeZone;

    #[test]
    fn test_parse_format() {
        assert_eq!(ExportFormat::parse("CSV"), Ok(ExportFormat::Csv));
        assert_eq!(ExportFormat::parse(" json "), Ok(ExportFormat::Json));
        assert_eq!(ExportFormat::parse("xml"), Err(HistoryReason::R411_EXPORT_UNSUPPORTED_FORMAT));
    }

    #[test]
    fn test_file_name() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(ExportFormat::Json.file_name(date), "vibecheckr-analysis-2024-05-01.json");
    }

    #[test]
    fn test_csv_quotes_text_with_commas_and_quotes() {
        let record = analyze("Well, it was \"fine\"", None);
        let csv = export_records(&[record], ExportFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        let row = lines.next().unwrap();
        assert!(row.ends_with("\"Well, it was \"\"fine\"\"\""), "row was {}", row);
    }

    #[test]
    fn test_csv_row_per_record() {
        let records = vec![analyze("good", None), analyze("bad", None)];
        let csv = export_records(&records, ExportFormat::Csv).unwrap();
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_json_export_reads_back() {
        // Mixed and negative-leaning samples carry fractional scores
        let records: Vec<AnalysisRecord> = SAMPLE_TEXTS
            .iter()
            .map(|sample| analyze(sample.text, sample.context))
            .collect();
        assert!(records.iter().any(|r| r.scores.positive > 0.0 && r.scores.positive < 1.0));
        let json = export_records(&records, ExportFormat::Json).unwrap();
        let parsed: Vec<AnalysisRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }
}
