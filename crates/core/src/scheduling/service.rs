//! Scheduling service - core business logic

use std::sync::Arc;

use chrono::{DateTime, Utc};
use talentsync_domain::{ConflictSummary, ConflictWindow, Result, SchedulingConfig};
use tracing::debug;

use super::detector::ConflictDetector;
use super::ports::{BookingRepository, QuotaRepository};

/// Scheduling conflict service
///
/// Pulls bookings and quotas through the ports, runs the conflict detector,
/// and wraps the result in the consumer envelope.
pub struct SchedulingService {
    bookings: Arc<dyn BookingRepository>,
    quotas: Arc<dyn QuotaRepository>,
    detector: ConflictDetector,
    window_days: i64,
}

impl SchedulingService {
    /// Create a new scheduling service
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        quotas: Arc<dyn QuotaRepository>,
        config: &SchedulingConfig,
    ) -> Self {
        Self {
            bookings,
            quotas,
            detector: ConflictDetector::new(config),
            window_days: config.conflict_window_days,
        }
    }

    /// Check for scheduling conflicts within a window
    pub async fn check_conflicts(&self, window: ConflictWindow) -> Result<ConflictSummary> {
        let bookings = self.bookings.find_bookings_in_range(window.start, window.end).await?;
        let quotas = self.quotas.active_interviewer_quotas().await?;

        let conflicts = self.detector.detect_conflicts(&bookings, &quotas)?;
        debug!(
            bookings = bookings.len(),
            conflicts = conflicts.len(),
            "schedule conflict scan complete"
        );

        Ok(ConflictSummary::new(conflicts))
    }

    /// Check for conflicts over the configured default window length
    pub async fn check_conflicts_from(&self, start: DateTime<Utc>) -> Result<ConflictSummary> {
        self.check_conflicts(ConflictWindow::starting_at(start, self.window_days)).await
    }
}
