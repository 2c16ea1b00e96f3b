//! Lexicon Store: read-only word sets used by the scorers
//!
//! Built once and shared by reference. Nothing here mutates after construction.

use std::collections::{BTreeMap, HashSet};
use lazy_static::lazy_static;
use crate::types::Emotion;

// =============================================================================
// Built-in word lists
// =============================================================================

const POSITIVE_WORDS: &[&str] = &[
    "love", "amazing", "excellent", "fantastic", "wonderful", "perfect", "best", "brilliant",
    "outstanding", "superb", "magnificent", "incredible", "beautiful", "stunning", "gorgeous",
    "elegant", "sophisticated", "premium", "exquisite", "flawless", "impeccable",
    "delicious", "happy", "joy", "pleased", "satisfied", "grateful", "excited", "thrilled",
    "delighted", "impressed", "recommend", "favorite", "enjoy", "success", "achievement",
    "proud", "blessed", "lucky", "fortunate", "pleasant", "cozy", "friendly", "helpful",
    "kind", "generous", "caring", "supportive", "professional", "attentive", "courteous",
    "exceptional", "personalized", "exclusive", "stylish", "fashionable", "trendy", "chic",
    "quality", "craftsmanship", "designer", "service", "experience", "great", "good",
];

const NEGATIVE_WORDS: &[&str] = &[
    "hate", "dislike", "terrible", "awful", "bad", "horrible", "disgusting", "disappointing",
    "worst", "annoying", "frustrating", "angry", "mad", "upset", "sad", "depressed",
    "worried", "scared", "afraid", "anxious", "stressed", "pain", "hurt", "damage",
    "broken", "failed", "failure", "problem", "issue", "trouble", "difficult", "impossible",
    "unacceptable", "rude", "unfair", "boring", "stupid", "waste", "regret", "mistake",
    "wrong", "evil", "disgusted", "sick", "tired", "expensive", "overpriced", "cheap",
    "poor", "low", "inferior", "defective", "faulty", "damaged", "uncomfortable", "unprofessional",
    "slow", "delayed", "late", "waiting", "ignored", "dismissed", "disrespectful", "unhelpful",
];

const INTENSIFIER_WORDS: &[&str] = &[
    "awesome", "incredible", "outstanding", "exceptional", "remarkable", "phenomenal",
    "spectacular", "marvelous", "superb", "brilliant", "magnificent", "extraordinary",
];

// Service vocabulary, only scored under the feedback context
const CONTEXTUAL_POSITIVE_WORDS: &[&str] = &[
    "helpful", "professional", "attentive", "courteous", "knowledgeable", "friendly",
    "patient", "accommodating",
];

const CONTEXTUAL_NEGATIVE_WORDS: &[&str] = &[
    "rude", "unprofessional", "dismissive", "unhelpful", "impatient", "disrespectful",
    "ignored", "slow",
];

const JOY_WORDS: &[&str] = &[
    "happy", "joy", "excited", "thrilled", "delighted", "cheerful", "elated", "blissful",
    "love", "amazing",
];
const ANGER_WORDS: &[&str] = &[
    "angry", "mad", "furious", "rage", "frustrated", "annoyed", "irritated", "outraged",
    "hate", "terrible",
];
const FEAR_WORDS: &[&str] = &[
    "scared", "afraid", "frightened", "terrified", "worried", "anxious", "nervous", "panic",
    "concerned",
];
const SADNESS_WORDS: &[&str] = &[
    "sad", "depressed", "miserable", "heartbroken", "grief", "sorrow", "upset", "crying",
    "disappointed",
];
const SURPRISE_WORDS: &[&str] = &[
    "surprised", "shocked", "amazed", "astonished", "stunned", "bewildered", "confused",
    "unexpected",
];
const DISGUST_WORDS: &[&str] = &[
    "disgusted", "revolted", "sick", "nauseated", "repulsed", "appalled", "horrified", "gross",
];

lazy_static! {
    static ref BUILTIN_LEXICON: Lexicon = Lexicon::builtin_owned();
    static ref BUILTIN_EMOTION_LEXICON: EmotionLexicon = EmotionLexicon::builtin_owned();
}

// =============================================================================
// Lexicon
// =============================================================================

/// Words that only count under a particular analysis context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextualWords {
    pub positive: HashSet<String>,
    pub negative: HashSet<String>,
}

/// Polarity word sets. All entries are lower-case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    pub positive: HashSet<String>,
    pub negative: HashSet<String>,
    /// Boost-only positive words
    pub intensifiers: HashSet<String>,
    /// Applied only under `AnalysisContext::Feedback`
    pub contextual: ContextualWords,
}

impl Lexicon {
    /// Shared built-in lexicon
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN_LEXICON
    }

    fn builtin_owned() -> Self {
        Self {
            positive: word_set(POSITIVE_WORDS),
            negative: word_set(NEGATIVE_WORDS),
            intensifiers: word_set(INTENSIFIER_WORDS),
            contextual: ContextualWords {
                positive: word_set(CONTEXTUAL_POSITIVE_WORDS),
                negative: word_set(CONTEXTUAL_NEGATIVE_WORDS),
            },
        }
    }
}

// =============================================================================
// EmotionLexicon
// =============================================================================

/// Trigger words per emotion. Sets may overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmotionLexicon {
    triggers: BTreeMap<Emotion, Vec<String>>,
}

impl EmotionLexicon {
    /// Shared built-in emotion lexicon
    pub fn builtin() -> &'static EmotionLexicon {
        &BUILTIN_EMOTION_LEXICON
    }

    /// Build from explicit trigger lists; words are lower-cased and deduplicated
    pub fn from_triggers<I, W>(triggers: I) -> Self
    where
        I: IntoIterator<Item = (Emotion, Vec<W>)>,
        W: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for (emotion, words) in triggers {
            let entry: &mut Vec<String> = map.entry(emotion).or_default();
            for word in words {
                let word = word.as_ref().to_lowercase();
                if !word.is_empty() && !entry.contains(&word) {
                    entry.push(word);
                }
            }
        }
        Self { triggers: map }
    }

    /// Trigger words for one emotion (empty if none configured)
    pub fn triggers(&self, emotion: Emotion) -> &[String] {
        self.triggers.get(&emotion).map(Vec::as_slice).unwrap_or(&[])
    }

    fn builtin_owned() -> Self {
        Self::from_triggers([
            (Emotion::Joy, JOY_WORDS.to_vec()),
            (Emotion::Anger, ANGER_WORDS.to_vec()),
            (Emotion::Fear, FEAR_WORDS.to_vec()),
            (Emotion::Sadness, SADNESS_WORDS.to_vec()),
            (Emotion::Surprise, SURPRISE_WORDS.to_vec()),
            (Emotion::Disgust, DISGUST_WORDS.to_vec()),
        ])
    }
}

fn word_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lexicon_is_populated() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.positive.contains("amazing"));
        assert!(lexicon.negative.contains("terrible"));
        assert!(lexicon.intensifiers.contains("awesome"));
        assert!(lexicon.contextual.negative.contains("dismissive"));
        assert!(!lexicon.negative.contains("dismissive"));
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(Lexicon::builtin(), Lexicon::builtin()));
    }

    #[test]
    fn test_every_emotion_has_triggers() {
        let lexicon = EmotionLexicon::builtin();
        for emotion in Emotion::ALL {
            assert!(!lexicon.triggers(emotion).is_empty(), "{} has no triggers", emotion);
        }
    }

    #[test]
    fn test_from_triggers_normalizes() {
        let lexicon = EmotionLexicon::from_triggers([(Emotion::Joy, vec!["YAY", "yay", ""])]);
        assert_eq!(lexicon.triggers(Emotion::Joy), &["yay".to_string()]);
        assert!(lexicon.triggers(Emotion::Fear).is_empty());
    }
}
