//! Analysis history: bounded, newest-first list of records
//!
//! Stored as a plain JSON array of records. Loading a missing file gives an
//! empty history.

use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use crate::HISTORY_LIMIT;
use crate::types::{AnalysisContext, AnalysisRecord, HistoryReason, Sentiment};

/// Criteria for narrowing the history. All set criteria must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryFilter {
    /// Case-insensitive substring of the text or of any keyword
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub context: Option<AnalysisContext>,
}

impl HistoryFilter {
    pub fn matches(&self, record: &AnalysisRecord) -> bool {
        if let Some(sentiment) = self.sentiment {
            if record.sentiment != sentiment {
                return false;
            }
        }
        if let Some(context) = self.context {
            if record.analysis_context != Some(context) {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                record.text.to_lowercase().contains(&term)
                    || record.keywords.iter().any(|k| k.to_lowercase().contains(&term))
            }
        }
    }
}

/// Newest-first record list, capped at `limit`
#[derive(Debug, Clone)]
pub struct AnalysisHistory {
    records: Vec<AnalysisRecord>,
    limit: usize,
}

impl Default for AnalysisHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Build from records already in newest-first order
    pub fn from_records(records: Vec<AnalysisRecord>) -> Self {
        let mut history = Self::new();
        history.records = records;
        history.records.truncate(history.limit);
        history
    }

    /// Prepend a record, dropping the oldest beyond the limit
    pub fn push(&mut self, record: AnalysisRecord) {
        self.records.insert(0, record);
        self.records.truncate(self.limit);
    }

    pub fn clear(&mut self) -> usize {
        let cleared = self.records.len();
        self.records.clear();
        cleared
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// All records, newest first
    pub fn records(&self) -> &[AnalysisRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&AnalysisRecord> {
        self.records.first()
    }

    pub fn get(&self, id: &str) -> Option<&AnalysisRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn filter(&self, filter: &HistoryFilter) -> Vec<&AnalysisRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    /// Write history as pretty JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HistoryReason> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.records)
            .map_err(|_| HistoryReason::R402_HISTORY_SERIALIZE_ERROR)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|_| HistoryReason::R401_HISTORY_STORAGE_ERROR)?;
        }
        std::fs::write(path, json).map_err(|e| {
            warn!(path = %path.display(), error = %e, "history write failed");
            HistoryReason::R401_HISTORY_STORAGE_ERROR
        })?;

        info!(path = %path.display(), records = self.records.len(), "history saved");
        Ok(())
    }

    /// Load history from JSON; a missing file is an empty history
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HistoryReason> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no history file, starting empty");
            return Ok(Self::new());
        }

        let json = std::fs::read_to_string(path)
            .map_err(|_| HistoryReason::R401_HISTORY_STORAGE_ERROR)?;
        let records: Vec<AnalysisRecord> = serde_json::from_str(&json).map_err(|e| {
            warn!(path = %path.display(), error = %e, "history file is not valid JSON");
            HistoryReason::R402_HISTORY_SERIALIZE_ERROR
        })?;

        info!(path = %path.display(), records = records.len(), "history loaded");
        Ok(Self::from_records(records))
    }
}
