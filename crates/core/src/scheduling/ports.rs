//! Port interfaces for scheduling
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use talentsync_domain::{Booking, InterviewerQuota, Result};

/// Trait for fetching interview bookings from the backing store
///
/// Implementations are responsible for field-presence and date-format
/// validation; records handed to the conflict checker must already carry a
/// parsed start instant. Adapter failures surface as
/// `TalentSyncError::Storage`.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Get bookings whose start falls within `[start, end)`
    async fn find_bookings_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Booking>>;
}

/// Trait for supplying per-interviewer daily booking caps
#[async_trait]
pub trait QuotaRepository: Send + Sync {
    /// Quotas for all active interviewers, keyed by interviewer id.
    ///
    /// Interviewers absent from the map are exempt from the quota check but
    /// still checked for overlaps.
    async fn active_interviewer_quotas(&self) -> Result<HashMap<String, InterviewerQuota>>;
}
