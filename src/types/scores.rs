//! Score structures produced by the polarity and emotion scorers

use serde::{Deserialize, Serialize};
use crate::types::Sentiment;

/// Raw lexicon hits before normalization
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityTally {
    pub positive: f64,
    pub negative: f64,
}

impl PolarityTally {
    pub fn total(&self) -> f64 {
        self.positive + self.negative
    }
}

/// Three-way polarity distribution (sums to 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl PolarityScores {
    /// Distribution for text with no sentiment-bearing tokens
    pub fn neutral_only() -> Self {
        Self {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
        }
    }

    pub fn get(&self, sentiment: Sentiment) -> f64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn sum(&self) -> f64 {
        self.positive + self.negative + self.neutral
    }

    /// Leading class and its share.
    ///
    /// Ties go to the earlier class in `Sentiment::ALL` (positive > negative > neutral).
    pub fn leading(&self) -> (Sentiment, f64) {
        let mut best = Sentiment::ALL[0];
        for candidate in &Sentiment::ALL[1..] {
            if self.get(*candidate) > self.get(best) {
                best = *candidate;
            }
        }
        (best, self.get(best))
    }
}

/// The six emotion dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Anger,
    Fear,
    Sadness,
    Surprise,
    Disgust,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Joy,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Sadness,
        Emotion::Surprise,
        Emotion::Disgust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Independent per-emotion intensities, each in [0, 1].
///
/// Not normalized across emotions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionProfile {
    pub joy: f64,
    pub anger: f64,
    pub fear: f64,
    pub sadness: f64,
    pub surprise: f64,
    pub disgust: f64,
}

impl EmotionProfile {
    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Joy => self.joy,
            Emotion::Anger => self.anger,
            Emotion::Fear => self.fear,
            Emotion::Sadness => self.sadness,
            Emotion::Surprise => self.surprise,
            Emotion::Disgust => self.disgust,
        }
    }

    pub fn set(&mut self, emotion: Emotion, value: f64) {
        let slot = match emotion {
            Emotion::Joy => &mut self.joy,
            Emotion::Anger => &mut self.anger,
            Emotion::Fear => &mut self.fear,
            Emotion::Sadness => &mut self.sadness,
            Emotion::Surprise => &mut self.surprise,
            Emotion::Disgust => &mut self.disgust,
        };
        *slot = value;
    }

    /// Strongest emotion, if any scored above zero
    pub fn dominant(&self) -> Option<Emotion> {
        let mut best: Option<Emotion> = None;
        for emotion in Emotion::ALL {
            let value = self.get(emotion);
            if value > 0.0 && best.map_or(true, |b| value > self.get(b)) {
                best = Some(emotion);
            }
        }
        best
    }
}
