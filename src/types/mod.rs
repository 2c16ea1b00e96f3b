//! Core types for VibeCheckr

mod sentiment;
mod scores;
mod record;
mod stats;
mod reason;

pub use sentiment::{Sentiment, AnalysisContext};
pub use scores::{PolarityTally, PolarityScores, Emotion, EmotionProfile};
pub use record::AnalysisRecord;
pub use stats::{SentimentStats, SentimentDistribution, KeywordCount};
pub use reason::HistoryReason;
