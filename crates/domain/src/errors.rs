//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for TalentSync
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TalentSyncError {
    /// A booking failed validation. Carries the offending booking id so the
    /// bad record can be located and corrected upstream.
    #[error("Invalid booking {booking_id}: {reason}")]
    InvalidBooking { booking_id: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for TalentSync operations
pub type Result<T> = std::result::Result<T, TalentSyncError>;
