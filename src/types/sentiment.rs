//! Sentiment classes and analysis context tags

use colored::Color;
use serde::{Deserialize, Serialize};

/// Overall polarity of an analysed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// All classes in tie-break precedence order
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Lower-case name as used in JSON and filters
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Parse a filter value; unknown strings yield None
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            _ => None,
        }
    }

    /// Terminal color
    pub fn color(&self) -> Color {
        match self {
            Sentiment::Positive => Color::Green,
            Sentiment::Negative => Color::Red,
            Sentiment::Neutral => Color::BrightBlack,
        }
    }

    /// Emoji for terminal display
    pub fn emoji(&self) -> &'static str {
        match self {
            Sentiment::Positive => "😊",
            Sentiment::Negative => "😞",
            Sentiment::Neutral => "😐",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Caller-supplied hint about where the text came from.
///
/// Only `Feedback` changes scoring: it enables the service-word lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisContext {
    Review,
    Feedback,
    Social,
}

impl AnalysisContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisContext::Review => "review",
            AnalysisContext::Feedback => "feedback",
            AnalysisContext::Social => "social",
        }
    }

    /// Lenient parse for string boundaries (CLI, HTTP).
    ///
    /// Unknown or malformed tags become `None`, i.e. no contextual boosting.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "review" => Some(AnalysisContext::Review),
            "feedback" => Some(AnalysisContext::Feedback),
            "social" => Some(AnalysisContext::Social),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnalysisContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
