//! Reason codes for history, export and file failures
//!
//! The scoring core never fails; only the collaborators around it do.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a history or export operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum HistoryReason {
    // =========================================================================
    // R40x: History storage
    // =========================================================================
    /// History file could not be read or written
    #[error("R401_HISTORY_STORAGE_ERROR: history file could not be read or written")]
    R401_HISTORY_STORAGE_ERROR,
    /// History JSON could not be encoded or decoded
    #[error("R402_HISTORY_SERIALIZE_ERROR: history JSON could not be encoded or decoded")]
    R402_HISTORY_SERIALIZE_ERROR,

    // =========================================================================
    // R41x: Export
    // =========================================================================
    /// Requested export format is not json or csv
    #[error("R411_EXPORT_UNSUPPORTED_FORMAT: export format must be json or csv")]
    R411_EXPORT_UNSUPPORTED_FORMAT,
    /// Export payload could not be produced
    #[error("R412_EXPORT_SERIALIZE_ERROR: export payload could not be produced")]
    R412_EXPORT_SERIALIZE_ERROR,
}

impl HistoryReason {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R401_HISTORY_STORAGE_ERROR => "R401_HISTORY_STORAGE_ERROR",
            Self::R402_HISTORY_SERIALIZE_ERROR => "R402_HISTORY_SERIALIZE_ERROR",
            Self::R411_EXPORT_UNSUPPORTED_FORMAT => "R411_EXPORT_UNSUPPORTED_FORMAT",
            Self::R412_EXPORT_SERIALIZE_ERROR => "R412_EXPORT_SERIALIZE_ERROR",
        }
    }

    /// True when the caller sent something invalid (vs. a server-side failure)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::R411_EXPORT_UNSUPPORTED_FORMAT)
    }
}
