//! Scheduling configuration
//!
//! Injected at construction time, never read from ambient server state at
//! call time.
//!
//! ## Environment Variables
//! - `TALENTSYNC_REFERENCE_TIMEZONE`: IANA timezone used for calendar-day
//!   bucketing (default `UTC`)
//! - `TALENTSYNC_CONFLICT_WINDOW_DAYS`: days covered by a conflict scan when
//!   the caller gives no explicit window (default 7)

use chrono_tz::Tz;

use crate::constants::DEFAULT_CONFLICT_WINDOW_DAYS;
use crate::errors::{Result, TalentSyncError};

/// Configuration for the scheduling conflict checker
#[derive(Debug, Clone)]
pub struct SchedulingConfig {
    /// Timezone that fixes calendar-day boundaries for the quota check
    pub reference_timezone: Tz,
    /// Default length of a conflict scan window, in days
    pub conflict_window_days: i64,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self { reference_timezone: Tz::UTC, conflict_window_days: DEFAULT_CONFLICT_WINDOW_DAYS }
    }
}

impl SchedulingConfig {
    /// Load configuration from environment variables
    ///
    /// Missing variables fall back to defaults. Malformed values are a hard
    /// error rather than a silent fallback.
    ///
    /// # Errors
    /// Returns `TalentSyncError::Config` if a variable is present but does
    /// not parse.
    pub fn from_env() -> Result<Self> {
        let reference_timezone = match std::env::var("TALENTSYNC_REFERENCE_TIMEZONE") {
            Ok(raw) => raw.parse::<Tz>().map_err(|e| {
                TalentSyncError::Config(format!("Invalid reference timezone: {e}"))
            })?,
            Err(_) => Tz::UTC,
        };

        let conflict_window_days = match std::env::var("TALENTSYNC_CONFLICT_WINDOW_DAYS") {
            Ok(raw) => raw.parse::<i64>().map_err(|e| {
                TalentSyncError::Config(format!("Invalid conflict window days: {e}"))
            })?,
            Err(_) => DEFAULT_CONFLICT_WINDOW_DAYS,
        };

        Ok(Self { reference_timezone, conflict_window_days })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SchedulingConfig::default();

        assert_eq!(config.reference_timezone, Tz::UTC);
        assert_eq!(config.conflict_window_days, 7);
    }

    #[test]
    fn test_from_env_overrides_and_rejects_garbage() {
        // All environment mutation stays inside this one test; these
        // variables must not be touched by any other test.
        std::env::set_var("TALENTSYNC_REFERENCE_TIMEZONE", "America/New_York");
        std::env::set_var("TALENTSYNC_CONFLICT_WINDOW_DAYS", "14");

        let config = SchedulingConfig::from_env().unwrap();
        assert_eq!(config.reference_timezone, chrono_tz::America::New_York);
        assert_eq!(config.conflict_window_days, 14);

        std::env::set_var("TALENTSYNC_REFERENCE_TIMEZONE", "Not/AZone");
        let err = SchedulingConfig::from_env().unwrap_err();
        assert!(matches!(err, TalentSyncError::Config(_)));

        std::env::remove_var("TALENTSYNC_REFERENCE_TIMEZONE");
        std::env::remove_var("TALENTSYNC_CONFLICT_WINDOW_DAYS");

        let config = SchedulingConfig::from_env().unwrap();
        assert_eq!(config.reference_timezone, Tz::UTC);
        assert_eq!(config.conflict_window_days, 7);
    }
}
