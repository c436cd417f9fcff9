//! Common data types used throughout the application

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled interview booking, immutable for the conflict checker.
///
/// `duration_minutes` is kept signed so that malformed upstream records are
/// representable; the conflict checker rejects non-positive durations with a
/// hard validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub interviewer_id: String,
    pub start: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl Booking {
    /// Instant the booking ends at (`start + duration_minutes`).
    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::minutes(self.duration_minutes)
    }
}

/// Per-interviewer cap on bookings per calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewerQuota {
    pub interviewer_id: String,
    pub max_per_day: u32,
}

impl InterviewerQuota {
    /// Quota carrying the stock daily cap for interviewers without an
    /// explicit override
    pub fn with_default_cap(interviewer_id: &str) -> Self {
        Self {
            interviewer_id: interviewer_id.to_string(),
            max_per_day: crate::constants::DEFAULT_MAX_INTERVIEWS_PER_DAY,
        }
    }
}

/// Reference to one side of an overlap, as rendered by the report consumer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRef {
    pub id: String,
    pub time: DateTime<Utc>,
}

/// A scheduling violation found by the conflict checker.
///
/// The serialized field names (`conflict_type`, `interviews`, `date`,
/// `scheduled_interviews`, `max_allowed`) are part of the consumer wire
/// shape and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "conflict_type", rename_all = "snake_case")]
pub enum ConflictReport {
    /// Two bookings for the same interviewer whose time ranges overlap
    Overlap { interviewer_id: String, interviews: [BookingRef; 2] },

    /// An interviewer scheduled past their daily cap on one calendar day
    #[serde(rename = "max_interviews_exceeded")]
    QuotaExceeded {
        interviewer_id: String,
        date: NaiveDate,
        scheduled_interviews: u32,
        max_allowed: u32,
    },
}

impl ConflictReport {
    /// Interviewer the violation belongs to
    pub fn interviewer_id(&self) -> &str {
        match self {
            Self::Overlap { interviewer_id, .. } => interviewer_id,
            Self::QuotaExceeded { interviewer_id, .. } => interviewer_id,
        }
    }
}

/// Envelope returned to the report consumer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictSummary {
    pub conflicts: Vec<ConflictReport>,
    pub total_conflicts: usize,
}

impl ConflictSummary {
    /// Wrap a report list, recording the total count
    pub fn new(conflicts: Vec<ConflictReport>) -> Self {
        let total_conflicts = conflicts.len();
        Self { conflicts, total_conflicts }
    }
}

/// Half-open `[start, end)` interval a conflict scan covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ConflictWindow {
    /// Window covering `days` whole days from `start`
    pub fn starting_at(start: DateTime<Utc>, days: i64) -> Self {
        Self { start, end: start + Duration::days(days) }
    }
}
