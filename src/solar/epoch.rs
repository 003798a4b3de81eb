//! Reference epoch and fractional day offsets.
//!
//! All solar formulas in this crate take a single time input: the number of
//! days (fractional) elapsed since J2000.0, corrected by the leap seconds
//! inserted since then. [`TimeEpoch`] holds that reference and converts in
//! both directions.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::constants::*;
use crate::error::{Result, SolarError};

/// A fixed reference instant plus the leap-second correction applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeEpoch {
    reference: DateTime<Utc>,
    leap_seconds: i64,
}

impl TimeEpoch {
    pub fn new(reference: DateTime<Utc>, leap_seconds: i64) -> Self {
        Self {
            reference,
            leap_seconds,
        }
    }

    /// J2000.0 with a custom leap-second count.
    pub fn j2000_with_leap_seconds(leap_seconds: i64) -> Self {
        let reference = Utc
            .with_ymd_and_hms(EPOCH_YEAR, EPOCH_MONTH, EPOCH_DAY, EPOCH_HOUR, 0, 0)
            .single()
            .unwrap_or_default();
        Self::new(reference, leap_seconds)
    }

    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    pub fn leap_seconds(&self) -> i64 {
        self.leap_seconds
    }

    /// Fractional days between the epoch and `timestamp`, leap seconds included.
    ///
    /// This is the `n` every downstream formula is written in terms of.
    pub fn days_since<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> f64 {
        let elapsed = timestamp.with_timezone(&Utc) - self.reference
            + Duration::seconds(self.leap_seconds);
        let seconds = match elapsed.num_microseconds() {
            Some(micros) => micros as f64 / 1e6,
            // Beyond ±292k years microseconds overflow; whole seconds suffice
            None => elapsed.num_seconds() as f64,
        };
        seconds / SECONDS_PER_DAY
    }

    /// The instant that lies `days` after the epoch; inverse of [`days_since`].
    ///
    /// [`days_since`]: TimeEpoch::days_since
    pub fn instant_at(&self, days: f64) -> Result<DateTime<Utc>> {
        let out_of_range = || SolarError::TimestampOutOfRange { days };

        let micros = days * SECONDS_PER_DAY * 1e6;
        if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
            return Err(out_of_range());
        }

        self.reference
            .checked_sub_signed(Duration::seconds(self.leap_seconds))
            .and_then(|base| base.checked_add_signed(Duration::microseconds(micros.round() as i64)))
            .ok_or_else(out_of_range)
    }
}

impl Default for TimeEpoch {
    fn default() -> Self {
        Self::j2000_with_leap_seconds(DEFAULT_LEAP_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_default_epoch_is_j2000_with_five_leap_seconds() {
        let epoch = TimeEpoch::default();
        assert_eq!(
            epoch.reference(),
            Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
        );
        assert_eq!(epoch.leap_seconds(), 5);
    }

    #[test]
    fn test_days_since_counts_leap_seconds() {
        let epoch = TimeEpoch::default();
        let at_epoch = epoch.reference();
        assert!((epoch.days_since(&at_epoch) - 5.0 / 86_400.0).abs() < 1e-15);

        let no_leap = TimeEpoch::j2000_with_leap_seconds(0);
        assert_eq!(no_leap.days_since(&at_epoch), 0.0);
    }

    #[test]
    fn test_days_since_ignores_display_offset() {
        let epoch = TimeEpoch::default();
        let central = FixedOffset::west_opt(6 * 3600).unwrap();
        let local = central.with_ymd_and_hms(2020, 12, 31, 12, 0, 0).unwrap();
        let utc = Utc.with_ymd_and_hms(2020, 12, 31, 18, 0, 0).unwrap();

        assert_eq!(epoch.days_since(&local), epoch.days_since(&utc));
        // 7670 whole days plus six hours plus five seconds
        let expected = 7670.25 + 5.0 / 86_400.0;
        assert!((epoch.days_since(&local) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_instant_at_inverts_days_since() {
        let epoch = TimeEpoch::default();
        let t = Utc.with_ymd_and_hms(2024, 6, 21, 16, 57, 44).unwrap();
        let n = epoch.days_since(&t);
        let back = epoch.instant_at(n).unwrap();
        assert!((back - t).num_milliseconds().abs() <= 1);
    }

    #[test]
    fn test_instant_at_rejects_unrepresentable_offsets() {
        let epoch = TimeEpoch::default();
        assert!(matches!(
            epoch.instant_at(f64::NAN),
            Err(SolarError::TimestampOutOfRange { .. })
        ));
        assert!(epoch.instant_at(1e15).is_err());
    }
}
