//! Conflict detector - finds scheduling violations across interviewer
//! bookings
//!
//! Two checks run per interviewer: an adjacent-pair overlap scan over the
//! bookings sorted by start time, and a per-calendar-day quota count.
//! Calendar days are fixed by the configured reference timezone, never by
//! ambient server locale.

use std::collections::HashMap;

use ahash::AHashMap; // Fast non-cryptographic hasher
use chrono::NaiveDate;
use chrono_tz::Tz;
use talentsync_domain::{
    Booking, BookingRef, ConflictReport, InterviewerQuota, Result, SchedulingConfig,
    TalentSyncError,
};

/// Conflict detector - pure, stateless computation over its inputs
pub struct ConflictDetector {
    reference_tz: Tz,
}

impl ConflictDetector {
    /// Create a new detector with the configured reference timezone
    pub fn new(config: &SchedulingConfig) -> Self {
        Self { reference_tz: config.reference_timezone }
    }

    /// Detect scheduling violations across the supplied bookings.
    ///
    /// Interviewers absent from `quotas` are exempt from the quota check but
    /// still checked for overlaps.
    ///
    /// # Algorithm
    /// 1. Reject any booking with a non-positive `duration_minutes` up front,
    ///    so a malformed record never yields a partial report set
    /// 2. Sort bookings by `(start, id)` - the id tie-break makes the
    ///    adjacent-pair scan independent of input order
    /// 3. Partition by interviewer, keeping the order interviewers first
    ///    appear in the sorted sequence
    /// 4. Overlap pass: for each consecutive pair in an interviewer's
    ///    partition, report an overlap when `current.end() > next.start`
    /// 5. Quota pass: bucket the partition by calendar day in the reference
    ///    timezone and report each day whose count exceeds the cap, once per
    ///    day with the full count
    ///
    /// Reports come back grouped by interviewer, overlaps before quota
    /// violations, quota reports in ascending date order.
    ///
    /// The overlap scan only compares consecutive pairs in the sorted order.
    /// A booking nested inside a much longer one that is not its immediate
    /// neighbour after sorting is not flagged; callers needing full interval
    /// overlap detection must layer a sweep over all pairs on top.
    ///
    /// # Errors
    /// Returns `TalentSyncError::InvalidBooking` naming the offending booking
    /// when a `duration_minutes` is zero or negative. No reports are
    /// returned in that case.
    pub fn detect_conflicts(
        &self,
        bookings: &[Booking],
        quotas: &HashMap<String, InterviewerQuota>,
    ) -> Result<Vec<ConflictReport>> {
        for booking in bookings {
            if booking.duration_minutes <= 0 {
                return Err(TalentSyncError::InvalidBooking {
                    booking_id: booking.id.clone(),
                    reason: format!(
                        "duration_minutes must be positive, got {}",
                        booking.duration_minutes
                    ),
                });
            }
        }

        let mut sorted: Vec<&Booking> = bookings.iter().collect();
        sorted.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));

        // Partition by interviewer, preserving first-appearance order so the
        // report grouping is deterministic.
        let mut partitions: Vec<(String, Vec<&Booking>)> = Vec::new();
        let mut slots: AHashMap<&str, usize> = AHashMap::new();
        for booking in sorted {
            match slots.get(booking.interviewer_id.as_str()) {
                Some(&slot) => partitions[slot].1.push(booking),
                None => {
                    slots.insert(booking.interviewer_id.as_str(), partitions.len());
                    partitions.push((booking.interviewer_id.clone(), vec![booking]));
                }
            }
        }

        let mut reports = Vec::new();
        for (interviewer_id, partition) in &partitions {
            self.scan_overlaps(interviewer_id, partition, &mut reports);
            if let Some(quota) = quotas.get(interviewer_id) {
                self.scan_daily_quota(interviewer_id, partition, quota, &mut reports);
            }
        }

        Ok(reports)
    }

    /// Adjacent-pair overlap scan over one interviewer's sorted bookings
    fn scan_overlaps(
        &self,
        interviewer_id: &str,
        bookings: &[&Booking],
        reports: &mut Vec<ConflictReport>,
    ) {
        for pair in bookings.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            // Back-to-back bookings (end == next start) are not a conflict
            if current.end() > next.start {
                reports.push(ConflictReport::Overlap {
                    interviewer_id: interviewer_id.to_string(),
                    interviews: [
                        BookingRef { id: current.id.clone(), time: current.start },
                        BookingRef { id: next.id.clone(), time: next.start },
                    ],
                });
            }
        }
    }

    /// Count bookings per calendar day and report days past the cap
    fn scan_daily_quota(
        &self,
        interviewer_id: &str,
        bookings: &[&Booking],
        quota: &InterviewerQuota,
        reports: &mut Vec<ConflictReport>,
    ) {
        let mut per_day: AHashMap<NaiveDate, u32> = AHashMap::new();
        for booking in bookings {
            let date = booking.start.with_timezone(&self.reference_tz).date_naive();
            *per_day.entry(date).or_insert(0) += 1;
        }

        let mut offending: Vec<(NaiveDate, u32)> =
            per_day.into_iter().filter(|(_, count)| *count > quota.max_per_day).collect();
        offending.sort_unstable_by_key(|(date, _)| *date);

        // One report per offending day carrying the full count, not one per
        // excess booking
        for (date, count) in offending {
            reports.push(ConflictReport::QuotaExceeded {
                interviewer_id: interviewer_id.to_string(),
                date,
                scheduled_interviews: count,
                max_allowed: quota.max_per_day,
            });
        }
    }
}
