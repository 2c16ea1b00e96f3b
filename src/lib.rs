//! VibeCheckr: lexicon-based sentiment and emotion analysis
//!
//! text → tokenizer → {polarity, emotion, keywords} → AnalysisRecord

pub mod core;
pub mod types;

pub use crate::core::{analyze, SentimentAnalyzer};
pub use crate::types::{AnalysisContext, AnalysisRecord, Sentiment};

// =============================================================================
// POLARITY [C]
// =============================================================================

/// Minimum reported confidence, whatever the leading share
pub const CONFIDENCE_FLOOR: f64 = 0.65;

/// Extra positive tally per intensifier token
pub const INTENSIFIER_BOOST: f64 = 1.5;

/// Extra tally per contextual token (feedback context only)
pub const CONTEXTUAL_BOOST: f64 = 1.2;

/// Multiplier applied to the leading class before renormalization
pub const AMPLIFY_FACTOR: f64 = 1.4;

/// Leading class must exceed this share to be amplified
pub const AMPLIFY_THRESHOLD: f64 = 0.1;

// =============================================================================
// EMOTION + KEYWORDS [C]
// =============================================================================

/// Score added per matched emotion keyword (capped at 1.0)
pub const EMOTION_STEP: f64 = 0.25;

/// Max keywords per record
pub const MAX_KEYWORDS: usize = 12;

/// Keywords need strictly more characters than this
pub const MIN_KEYWORD_CHARS: usize = 3;

// =============================================================================
// COLLABORATORS
// =============================================================================

/// Records kept in history (newest first)
pub const HISTORY_LIMIT: usize = 100;

/// Keywords reported by analytics
pub const ANALYTICS_TOP_KEYWORDS: usize = 10;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
