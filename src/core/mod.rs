//! Core modules for VibeCheckr

pub mod lexicon;
pub mod tokenizer;
pub mod polarity;
pub mod emotion;
pub mod keywords;
pub mod analyzer;
pub mod history;
pub mod analytics;
pub mod export;
pub mod samples;
pub mod api;

pub use lexicon::{Lexicon, ContextualWords, EmotionLexicon};
pub use tokenizer::tokenize;
pub use polarity::{PolarityScorer, PolarityResult};
pub use emotion::EmotionScorer;
pub use keywords::extract_keywords;
pub use analyzer::{SentimentAnalyzer, analyze};
pub use history::{AnalysisHistory, HistoryFilter};
pub use export::{ExportFormat, export_records};
pub use samples::{SampleText, SAMPLE_TEXTS};
pub use api::{create_router, create_router_with_history, create_router_with_store, run_server};
