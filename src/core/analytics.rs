//! Aggregate statistics over analysis records

use std::collections::BTreeMap;
use crate::ANALYTICS_TOP_KEYWORDS;
use crate::core::keywords::rank_by_frequency;
use crate::types::{
    AnalysisRecord, Emotion, EmotionProfile, KeywordCount,
    Sentiment, SentimentDistribution, SentimentStats,
};

/// Context label for records analysed without a tag
pub const GENERAL_CONTEXT: &str = "general";

impl SentimentStats {
    /// Summarize `records`. An empty slice gives all-zero stats.
    pub fn from_records(records: &[AnalysisRecord]) -> Self {
        let total = records.len();

        let mut distribution = SentimentDistribution::default();
        let mut contexts: BTreeMap<String, usize> = BTreeMap::new();
        let mut confidence_sum = 0.0;
        let mut word_sum = 0usize;
        let mut emotion_sums = EmotionProfile::default();

        for record in records {
            match record.sentiment {
                Sentiment::Positive => distribution.positive += 1,
                Sentiment::Negative => distribution.negative += 1,
                Sentiment::Neutral => distribution.neutral += 1,
            }
            let context = record
                .analysis_context
                .map(|c| c.as_str())
                .unwrap_or(GENERAL_CONTEXT);
            *contexts.entry(context.to_string()).or_default() += 1;

            confidence_sum += record.confidence;
            word_sum += record.word_count;
            for emotion in Emotion::ALL {
                emotion_sums.set(emotion, emotion_sums.get(emotion) + record.emotions.get(emotion));
            }
        }

        let mut emotion_averages = EmotionProfile::default();
        if total > 0 {
            for emotion in Emotion::ALL {
                emotion_averages.set(emotion, emotion_sums.get(emotion) / total as f64);
            }
        }

        Self {
            total_analyses: total,
            average_confidence: if total > 0 { confidence_sum / total as f64 } else { 0.0 },
            average_word_count: if total > 0 {
                (word_sum as f64 / total as f64).round() as usize
            } else {
                0
            },
            sentiment_distribution: distribution,
            context_distribution: contexts,
            emotion_averages,
            most_common_keywords: top_keywords(records),
            customer_satisfaction_score: percentage(distribution.positive, total),
        }
    }

    /// Share of `sentiment` as a percentage (0 when empty)
    pub fn share(&self, sentiment: Sentiment) -> f64 {
        if self.total_analyses == 0 {
            return 0.0;
        }
        let count = match sentiment {
            Sentiment::Positive => self.sentiment_distribution.positive,
            Sentiment::Negative => self.sentiment_distribution.negative,
            Sentiment::Neutral => self.sentiment_distribution.neutral,
        };
        count as f64 / self.total_analyses as f64 * 100.0
    }
}

fn top_keywords(records: &[AnalysisRecord]) -> Vec<KeywordCount> {
    rank_by_frequency(records.iter().flat_map(|r| r.keywords.iter().map(String::as_str)))
        .into_iter()
        .take(ANALYTICS_TOP_KEYWORDS)
        .map(|(word, count)| KeywordCount { word: word.to_string(), count })
        .collect()
}

fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}
