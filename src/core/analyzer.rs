//! Result Assembler: runs every scorer and builds the AnalysisRecord
//!
//! Pure apart from the record id and timestamp. No I/O, no logging.

use std::sync::atomic::{AtomicU64, Ordering};
use chrono::Utc;
use sha2::{Digest, Sha256};
use crate::core::emotion::EmotionScorer;
use crate::core::keywords::extract_keywords;
use crate::core::lexicon::{EmotionLexicon, Lexicon};
use crate::core::polarity::PolarityScorer;
use crate::core::tokenizer::tokenize;
use crate::types::{AnalysisContext, AnalysisRecord};
use crate::CONFIDENCE_FLOOR;

static RECORD_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Sentiment + emotion analyzer over read-only lexicons.
///
/// Cheap to copy and safe to share between threads.
#[derive(Debug, Clone, Copy)]
pub struct SentimentAnalyzer<'a> {
    polarity: PolarityScorer<'a>,
    emotion: EmotionScorer<'a>,
}

impl SentimentAnalyzer<'static> {
    /// Analyzer over the built-in lexicons
    pub fn new() -> Self {
        Self::with_lexicons(Lexicon::builtin(), EmotionLexicon::builtin())
    }
}

impl Default for SentimentAnalyzer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SentimentAnalyzer<'a> {
    /// Analyzer over caller-owned lexicons
    pub fn with_lexicons(lexicon: &'a Lexicon, emotions: &'a EmotionLexicon) -> Self {
        Self {
            polarity: PolarityScorer::with_lexicon(lexicon),
            emotion: EmotionScorer::with_lexicon(emotions),
        }
    }

    /// Analyze `text`. Accepts any string, never fails.
    ///
    /// Only `AnalysisContext::Feedback` affects scoring.
    pub fn analyze(&self, text: &str, context: Option<AnalysisContext>) -> AnalysisRecord {
        let tokens = tokenize(text);
        let polarity = self.polarity.score(&tokens, context);
        // Blank input reports the floor; punctuation-only text keeps its neutral share
        let confidence = if text.trim().is_empty() {
            CONFIDENCE_FLOOR
        } else {
            polarity.confidence
        };

        AnalysisRecord {
            id: next_record_id(text),
            text: text.to_string(),
            sentiment: polarity.sentiment,
            confidence,
            scores: polarity.scores,
            emotions: self.emotion.score(text),
            keywords: extract_keywords(&tokens),
            word_count: tokens.len(),
            timestamp: Utc::now(),
            analysis_context: context,
        }
    }
}

/// Analyze with the built-in lexicons
pub fn analyze(text: &str, context: Option<AnalysisContext>) -> AnalysisRecord {
    SentimentAnalyzer::new().analyze(text, context)
}

/// Millisecond clock + process-wide sequence + 9-hex-digit digest suffix.
///
/// The sequence alone makes ids unique within a process.
fn next_record_id(text: &str) -> String {
    let seq = RECORD_COUNTER.fetch_add(1, Ordering::Relaxed);
    let now = Utc::now();

    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hasher.update(seq.to_le_bytes());
    hasher.update(now.timestamp_nanos_opt().unwrap_or_default().to_le_bytes());
    hasher.update(std::process::id().to_le_bytes());
    let digest = hasher.finalize();
    let suffix: String = digest.iter().map(|b| format!("{:02x}", b)).collect();

    format!("{}{:06}{}", now.timestamp_millis(), seq, &suffix[..9])
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use crate::core::lexicon::ContextualWords;
    use crate::types::{Emotion, Sentiment};

    #[test]
    fn test_empty_input() {
        let record = analyze("", None);
        assert_eq!(record.sentiment, Sentiment::Neutral);
        assert_eq!(record.confidence, CONFIDENCE_FLOOR);
        assert_eq!(record.word_count, 0);
        assert!(record.keywords.is_empty());
        assert_eq!(record.scores.neutral, 1.0);
        for emotion in Emotion::ALL {
            assert_eq!(record.emotions.get(emotion), 0.0);
        }
    }

    #[test]
    fn test_whitespace_input_matches_empty() {
        let record = analyze("   \n\t  ", Some(AnalysisContext::Feedback));
        assert_eq!(record.sentiment, Sentiment::Neutral);
        assert_eq!(record.confidence, CONFIDENCE_FLOOR);
        assert_eq!(record.word_count, 0);
        assert_eq!(record.analysis_context, Some(AnalysisContext::Feedback));
    }

    #[test]
    fn test_punctuation_only_input_is_confident_neutral() {
        for text in ["!!!", "?! ... --", "🎉"] {
            let record = analyze(text, None);
            assert_eq!(record.sentiment, Sentiment::Neutral);
            assert_eq!(record.word_count, 0);
            assert_eq!(record.scores.neutral, 1.0);
            assert_eq!(record.confidence, 1.0, "confidence for {:?}", text);
        }
    }

    #[test]
    fn test_record_keeps_original_text() {
        let text = "Great!!! Amazing???";
        let record = analyze(text, None);
        assert_eq!(record.text, text);
        assert_eq!(record.word_count, 2);
        assert_eq!(record.keywords, vec!["great", "amazing"]);
    }

    #[test]
    fn test_confidence_matches_leading_score() {
        for text in ["good bad", "awful service", "nice weather today", "I love it, love it"] {
            let record = analyze(text, None);
            let expected = record.scores.get(record.sentiment).max(CONFIDENCE_FLOOR);
            assert_eq!(record.confidence, expected, "confidence mismatch for {:?}", text);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<String> = (0..500).map(|_| analyze("same text", None).id).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_deterministic_apart_from_id_and_time() {
        let a = analyze("Slow delivery but friendly staff", Some(AnalysisContext::Feedback));
        let b = analyze("Slow delivery but friendly staff", Some(AnalysisContext::Feedback));
        assert_ne!(a.id, b.id);
        assert_eq!(a.scores, b.scores);
        assert_eq!(a.emotions, b.emotions);
        assert_eq!(a.keywords, b.keywords);
        assert_eq!(a.confidence, b.confidence);
    }

    #[test]
    fn test_injected_lexicons() {
        let lexicon = Lexicon {
            positive: ["rad".to_string()].into_iter().collect(),
            negative: HashSet::new(),
            intensifiers: HashSet::new(),
            contextual: ContextualWords::default(),
        };
        let emotions = EmotionLexicon::from_triggers(HashMap::from([(Emotion::Joy, vec!["rad"])]));
        let analyzer = SentimentAnalyzer::with_lexicons(&lexicon, &emotions);

        let record = analyzer.analyze("totally rad", None);
        assert_eq!(record.sentiment, Sentiment::Positive);
        assert_eq!(record.emotions.joy, 0.25);

        // "amazing" is not in the injected lexicon
        let record = analyzer.analyze("amazing", None);
        assert_eq!(record.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_analyzer_is_shareable_across_threads() {
        let analyzer = SentimentAnalyzer::new();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || analyzer.analyze("terrible, just terrible", None)))
            .collect();
        for handle in handles {
            let record = handle.join().unwrap();
            assert_eq!(record.sentiment, Sentiment::Negative);
        }
    }
}
