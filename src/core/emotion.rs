//! Emotion Scorer: substring matches against per-emotion trigger words

use crate::EMOTION_STEP;
use crate::core::lexicon::EmotionLexicon;
use crate::types::{Emotion, EmotionProfile};

/// Scores the six emotions independently from the raw text
#[derive(Debug, Clone, Copy)]
pub struct EmotionScorer<'a> {
    lexicon: &'a EmotionLexicon,
}

impl EmotionScorer<'static> {
    pub fn new() -> Self {
        Self::with_lexicon(EmotionLexicon::builtin())
    }
}

impl Default for EmotionScorer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> EmotionScorer<'a> {
    pub fn with_lexicon(lexicon: &'a EmotionLexicon) -> Self {
        Self { lexicon }
    }

    /// Score the original (untokenized) text.
    ///
    /// Each trigger contained anywhere in the lower-cased text adds
    /// `EMOTION_STEP`, capped at 1.0. Partial-word containment counts.
    pub fn score(&self, text: &str) -> EmotionProfile {
        let lower = text.to_lowercase();
        let mut profile = EmotionProfile::default();

        for emotion in Emotion::ALL {
            let matches = self
                .lexicon
                .triggers(emotion)
                .iter()
                .filter(|trigger| lower.contains(trigger.as_str()))
                .count();
            profile.set(emotion, (matches as f64 * EMOTION_STEP).min(1.0));
        }

        profile
    }
}
