//! The analysis record handed back to callers

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use crate::types::{AnalysisContext, EmotionProfile, PolarityScores, Sentiment};

/// Output of one `analyze` call. Owned entirely by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    /// Unique per call
    pub id: String,
    /// Original input, untouched
    pub text: String,
    pub sentiment: Sentiment,
    /// max(scores[sentiment], 0.65)
    pub confidence: f64,
    pub scores: PolarityScores,
    pub emotions: EmotionProfile,
    /// Most frequent first, at most 12
    pub keywords: Vec<String>,
    pub word_count: usize,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_context: Option<AnalysisContext>,
}

impl AnalysisRecord {
    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let line = format!(
            "{} {} confidence={:.0}% | +{:.3} -{:.3} ={:.3} | words={}",
            self.sentiment.emoji(),
            self.sentiment,
            self.confidence * 100.0,
            self.scores.positive,
            self.scores.negative,
            self.scores.neutral,
            self.word_count,
        );
        line.color(self.sentiment.color()).to_string()
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "sentiment={} | confidence={:.3} | positive={:.3} | negative={:.3} | neutral={:.3} | words={}",
            self.sentiment.as_str(),
            self.confidence,
            self.scores.positive,
            self.scores.negative,
            self.scores.neutral,
            self.word_count
        )
    }
}
