//! Aggregate statistics over a set of analysis records

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::types::EmotionProfile;

/// Count of records per sentiment class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

/// A keyword and how many records listed it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Dashboard-style summary of an analysis history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentStats {
    pub total_analyses: usize,
    pub average_confidence: f64,
    pub average_word_count: usize,
    pub sentiment_distribution: SentimentDistribution,
    /// Keyed by context tag; untagged records count as "general"
    pub context_distribution: BTreeMap<String, usize>,
    pub emotion_averages: EmotionProfile,
    pub most_common_keywords: Vec<KeywordCount>,
    /// Share of positive records as a rounded percentage
    pub customer_satisfaction_score: u32,
}
