//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for the scheduling ports, enabling deterministic
//! tests without a backing store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use talentsync_core::{BookingRepository, QuotaRepository};
use talentsync_domain::{Booking, InterviewerQuota, Result as DomainResult, TalentSyncError};

/// In-memory mock for `BookingRepository`.
///
/// Stores a fixed set of bookings and answers range queries over their start
/// instants.
#[derive(Default, Clone)]
pub struct MockBookingRepository {
    bookings: Arc<Vec<Booking>>,
}

impl MockBookingRepository {
    /// Create a new mock seeded with the provided bookings.
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self { bookings: Arc::new(bookings) }
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn find_bookings_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<Booking>> {
        Ok(self
            .bookings
            .iter()
            .filter(|booking| booking.start >= start && booking.start < end)
            .cloned()
            .collect())
    }
}

/// In-memory mock for `QuotaRepository`.
#[derive(Default, Clone)]
pub struct MockQuotaRepository {
    quotas: Arc<HashMap<String, InterviewerQuota>>,
}

impl MockQuotaRepository {
    /// Create a new mock seeded with the provided quotas.
    pub fn new(quotas: Vec<InterviewerQuota>) -> Self {
        Self {
            quotas: Arc::new(
                quotas.into_iter().map(|quota| (quota.interviewer_id.clone(), quota)).collect(),
            ),
        }
    }
}

#[async_trait]
impl QuotaRepository for MockQuotaRepository {
    async fn active_interviewer_quotas(&self) -> DomainResult<HashMap<String, InterviewerQuota>> {
        Ok((*self.quotas).clone())
    }
}

/// Booking store that always fails, for error-path tests.
#[derive(Default, Clone)]
pub struct FailingBookingRepository;

#[async_trait]
impl BookingRepository for FailingBookingRepository {
    async fn find_bookings_in_range(
        &self,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> DomainResult<Vec<Booking>> {
        Err(TalentSyncError::Storage("booking store unavailable".to_string()))
    }
}
