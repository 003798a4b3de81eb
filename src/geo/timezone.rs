//! Timezone rules for expressing solar events as local wall-clock time.
//!
//! This is intentionally not a timezone database. A [`ZoneRule`] is a small
//! stateless value that maps a local date to a UTC offset:
//!
//! - `Utc` and `Fixed` never observe daylight saving time
//! - `UnitedStates` applies the post-2007 US rule (second Sunday of March to
//!   first Sunday of November), treating each transition as if it happened at
//!   local midnight instead of 02:00
//! - `Override` forces the DST flag for a US zone regardless of the date

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

const SECONDS_PER_HOUR: i32 = 3600;

/// US zones with a fixed standard offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsZone {
    Eastern,
    Central,
    Mountain,
    Pacific,
    Alaska,
    /// Hawaii stays on standard time all year.
    Hawaii,
}

impl UsZone {
    pub const ALL: [UsZone; 6] = [
        UsZone::Eastern,
        UsZone::Central,
        UsZone::Mountain,
        UsZone::Pacific,
        UsZone::Alaska,
        UsZone::Hawaii,
    ];

    /// Standard (winter) offset from UTC in hours.
    pub fn standard_offset_hours(self) -> i32 {
        match self {
            UsZone::Eastern => -5,
            UsZone::Central => -6,
            UsZone::Mountain => -7,
            UsZone::Pacific => -8,
            UsZone::Alaska => -9,
            UsZone::Hawaii => -10,
        }
    }

    pub fn observes_dst(self) -> bool {
        !matches!(self, UsZone::Hawaii)
    }

    /// (standard, daylight) abbreviations.
    pub fn abbreviations(self) -> (&'static str, &'static str) {
        match self {
            UsZone::Eastern => ("EST", "EDT"),
            UsZone::Central => ("CST", "CDT"),
            UsZone::Mountain => ("MST", "MDT"),
            UsZone::Pacific => ("PST", "PDT"),
            UsZone::Alaska => ("AKST", "AKDT"),
            UsZone::Hawaii => ("HST", "HST"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UsZone::Eastern => "US/Eastern",
            UsZone::Central => "US/Central",
            UsZone::Mountain => "US/Mountain",
            UsZone::Pacific => "US/Pacific",
            UsZone::Alaska => "US/Alaska",
            UsZone::Hawaii => "US/Hawaii",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let zone = match name.to_ascii_lowercase().as_str() {
            "us/eastern" | "eastern" | "america/new_york" | "est" | "edt" => UsZone::Eastern,
            "us/central" | "central" | "america/chicago" | "cst" | "cdt" => UsZone::Central,
            "us/mountain" | "mountain" | "america/denver" | "mst" | "mdt" => UsZone::Mountain,
            "us/pacific" | "pacific" | "america/los_angeles" | "pst" | "pdt" => UsZone::Pacific,
            "us/alaska" | "alaska" | "america/anchorage" | "akst" | "akdt" => UsZone::Alaska,
            "us/hawaii" | "hawaii" | "pacific/honolulu" | "hst" => UsZone::Hawaii,
            _ => return None,
        };
        Some(zone)
    }
}

/// Whether US daylight saving time is in effect on `date` (post-2007 rule).
///
/// The whole transition day is treated as being in the new offset.
pub fn us_dst_in_effect(date: NaiveDate) -> bool {
    match date.month() {
        4..=10 => true,
        1 | 2 | 12 => false,
        month => {
            // Day of month of the most recent Sunday, zero or negative if
            // there has been none yet this month
            let last_sunday = date.day() as i32 - date.weekday().num_days_from_sunday() as i32;
            if month == 3 {
                last_sunday > 7 // second Sunday or later
            } else {
                last_sunday <= 0 // before the first Sunday
            }
        }
    }
}

/// A stateless rule mapping a local date to its UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ZoneRule {
    #[default]
    Utc,
    Fixed(FixedOffset),
    UnitedStates(UsZone),
    Override { zone: UsZone, dst: bool },
}

impl ZoneRule {
    /// Force the DST flag, bypassing the date rule.
    ///
    /// Only US zones have a DST flag to force; `Utc` and `Fixed` are
    /// returned unchanged.
    pub fn with_dst_override(self, dst: bool) -> Self {
        match self {
            ZoneRule::UnitedStates(zone) | ZoneRule::Override { zone, .. } => {
                ZoneRule::Override { zone, dst }
            }
            other => other,
        }
    }

    /// Whether a forced DST flag would change anything for this rule.
    pub fn supports_dst(&self) -> bool {
        matches!(self, ZoneRule::UnitedStates(_) | ZoneRule::Override { .. })
    }

    pub fn is_dst(&self, date: NaiveDate) -> bool {
        match *self {
            ZoneRule::Utc | ZoneRule::Fixed(_) => false,
            ZoneRule::UnitedStates(zone) => zone.observes_dst() && us_dst_in_effect(date),
            ZoneRule::Override { dst, .. } => dst,
        }
    }

    /// UTC offset in effect on the local `date`.
    pub fn utc_offset(&self, date: NaiveDate) -> FixedOffset {
        match *self {
            ZoneRule::Utc => Utc.fix(),
            ZoneRule::Fixed(offset) => offset,
            ZoneRule::UnitedStates(zone) | ZoneRule::Override { zone, .. } => {
                let dst_hours = if self.is_dst(date) { 1 } else { 0 };
                let seconds = (zone.standard_offset_hours() + dst_hours) * SECONDS_PER_HOUR;
                FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
            }
        }
    }

    /// Display name for the offset on `date`, e.g. `CST`, `CDT`, `UTC+05:30`.
    pub fn abbreviation(&self, date: NaiveDate) -> String {
        match *self {
            ZoneRule::Utc => "UTC".to_string(),
            ZoneRule::Fixed(offset) => format_fixed_offset(offset),
            ZoneRule::UnitedStates(zone) | ZoneRule::Override { zone, .. } => {
                let (standard, daylight) = zone.abbreviations();
                if self.is_dst(date) {
                    daylight.to_string()
                } else {
                    standard.to_string()
                }
            }
        }
    }

    /// Attach this rule's offset to a local wall-clock time.
    ///
    /// Returns `None` only when the result falls outside chrono's range.
    pub fn localize(&self, local: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        local
            .and_local_timezone(self.utc_offset(local.date()))
            .single()
    }

    /// Express a UTC instant as local time under this rule.
    ///
    /// The local date is judged in standard time first.
    pub fn to_local(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        let standard = match *self {
            ZoneRule::UnitedStates(zone) | ZoneRule::Override { zone, .. } => {
                FixedOffset::east_opt(zone.standard_offset_hours() * SECONDS_PER_HOUR)
                    .unwrap_or_else(|| Utc.fix())
            }
            ZoneRule::Utc | ZoneRule::Fixed(_) => self.utc_offset(instant.date_naive()),
        };
        let local_date = instant.with_timezone(&standard).date_naive();
        instant.with_timezone(&self.utc_offset(local_date))
    }
}

impl fmt::Display for ZoneRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ZoneRule::Utc => write!(f, "UTC"),
            ZoneRule::Fixed(offset) => write!(f, "{}", format_fixed_offset(offset)),
            ZoneRule::UnitedStates(zone) => write!(f, "{}", zone.name()),
            ZoneRule::Override { zone, dst } => write!(
                f,
                "{} (DST forced {})",
                zone.name(),
                if dst { "on" } else { "off" }
            ),
        }
    }
}

fn format_fixed_offset(offset: FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    format!("UTC{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

/// Error returned when a timezone string is not recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "unrecognized timezone '{0}' (expected UTC, an offset like -6 or +05:30, or a US zone like US/Central)"
)]
pub struct ParseZoneError(String);

fn offset_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^(?i:utc|gmt)?\s*([+-])(\d{1,2})(?::?(\d{2}))?$").ok())
        .as_ref()
}

impl FromStr for ZoneRule {
    type Err = ParseZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseZoneError(trimmed.to_string());

        if matches!(trimmed.to_ascii_lowercase().as_str(), "utc" | "gmt" | "z") {
            return Ok(ZoneRule::Utc);
        }

        if let Some(zone) = UsZone::from_name(trimmed) {
            return Ok(ZoneRule::UnitedStates(zone));
        }

        let caps = offset_pattern()
            .and_then(|pattern| pattern.captures(trimmed))
            .ok_or_else(err)?;
        let sign = if &caps[1] == "-" { -1 } else { 1 };
        let hours: i32 = caps[2].parse().map_err(|_| err())?;
        let minutes: i32 = match caps.get(3) {
            Some(m) => m.as_str().parse().map_err(|_| err())?,
            None => 0,
        };
        if hours > 23 || minutes > 59 {
            return Err(err());
        }

        let seconds = sign * (hours * SECONDS_PER_HOUR + minutes * 60);
        FixedOffset::east_opt(seconds)
            .map(ZoneRule::Fixed)
            .ok_or_else(err)
    }
}

impl TryFrom<String> for ZoneRule {
    type Error = ParseZoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_dst_starts_on_second_sunday_of_march() {
        let central = ZoneRule::UnitedStates(UsZone::Central);
        assert!(!central.is_dst(date(2021, 3, 13)));
        assert!(central.is_dst(date(2021, 3, 14)));
        assert!(!central.is_dst(date(2021, 3, 7))); // first Sunday
        assert!(central.is_dst(date(2021, 3, 31)));
    }

    #[test]
    fn test_dst_ends_on_first_sunday_of_november() {
        let central = ZoneRule::UnitedStates(UsZone::Central);
        assert!(central.is_dst(date(2021, 11, 6)));
        assert!(!central.is_dst(date(2021, 11, 7)));
        assert!(!central.is_dst(date(2021, 11, 30)));
        // 2020: November 1st is itself the first Sunday
        assert!(!central.is_dst(date(2020, 11, 1)));
        assert!(central.is_dst(date(2020, 10, 31)));
    }

    #[test]
    fn test_summer_and_winter_months() {
        assert!(us_dst_in_effect(date(2024, 7, 4)));
        assert!(!us_dst_in_effect(date(2024, 12, 25)));
        assert!(!us_dst_in_effect(date(2024, 2, 29)));
    }

    #[test]
    fn test_hawaii_never_observes_dst() {
        let hawaii = ZoneRule::UnitedStates(UsZone::Hawaii);
        assert!(!hawaii.is_dst(date(2024, 7, 4)));
        assert_eq!(hawaii.utc_offset(date(2024, 7, 4)).local_minus_utc(), -10 * 3600);
    }

    #[test]
    fn test_utc_offsets_follow_dst() {
        let central = ZoneRule::UnitedStates(UsZone::Central);
        assert_eq!(central.utc_offset(date(2020, 12, 31)).local_minus_utc(), -6 * 3600);
        assert_eq!(central.utc_offset(date(2021, 6, 1)).local_minus_utc(), -5 * 3600);
        assert_eq!(central.abbreviation(date(2020, 12, 31)), "CST");
        assert_eq!(central.abbreviation(date(2021, 6, 1)), "CDT");
    }

    #[test]
    fn test_override_bypasses_date_rule() {
        let forced_on = ZoneRule::UnitedStates(UsZone::Central).with_dst_override(true);
        assert!(forced_on.is_dst(date(2020, 12, 31)));
        assert_eq!(forced_on.utc_offset(date(2020, 12, 31)).local_minus_utc(), -5 * 3600);

        let forced_off = forced_on.with_dst_override(false);
        assert_eq!(
            forced_off,
            ZoneRule::Override {
                zone: UsZone::Central,
                dst: false
            }
        );
        assert!(!forced_off.is_dst(date(2021, 7, 1)));
    }

    #[test]
    fn test_override_is_ignored_without_dst() {
        assert_eq!(ZoneRule::Utc.with_dst_override(true), ZoneRule::Utc);
        let fixed = ZoneRule::Fixed(FixedOffset::east_opt(3600).unwrap());
        assert_eq!(fixed.with_dst_override(true), fixed);
        assert!(!fixed.supports_dst());
    }

    #[test]
    fn test_parse_zone_names() {
        assert_eq!("UTC".parse::<ZoneRule>().unwrap(), ZoneRule::Utc);
        assert_eq!(
            "US/Central".parse::<ZoneRule>().unwrap(),
            ZoneRule::UnitedStates(UsZone::Central)
        );
        assert_eq!(
            "america/los_angeles".parse::<ZoneRule>().unwrap(),
            ZoneRule::UnitedStates(UsZone::Pacific)
        );
        assert_eq!(
            " cst ".parse::<ZoneRule>().unwrap(),
            ZoneRule::UnitedStates(UsZone::Central)
        );
    }

    #[test]
    fn test_parse_fixed_offsets() {
        let cases = [
            ("-6", -6 * 3600),
            ("+05:30", 5 * 3600 + 30 * 60),
            ("UTC-6", -6 * 3600),
            ("gmt+2", 2 * 3600),
            ("+0545", 5 * 3600 + 45 * 60),
        ];
        for (input, seconds) in cases {
            let rule = input.parse::<ZoneRule>().unwrap();
            assert_eq!(
                rule,
                ZoneRule::Fixed(FixedOffset::east_opt(seconds).unwrap()),
                "{input}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "Mars/Olympus", "+25", "-05:75", "6"] {
            assert!(input.parse::<ZoneRule>().is_err(), "{input}");
        }
    }

    #[test]
    fn test_fixed_offset_display() {
        let rule: ZoneRule = "-05:30".parse().unwrap();
        assert_eq!(rule.to_string(), "UTC-05:30");
        assert_eq!(rule.abbreviation(date(2024, 1, 1)), "UTC-05:30");
    }

    #[test]
    fn test_localize_uses_offset_for_date() {
        let central = ZoneRule::UnitedStates(UsZone::Central);
        let winter = central
            .localize(date(2020, 12, 31).and_hms_opt(12, 0, 0).unwrap())
            .unwrap();
        assert_eq!(winter.offset().local_minus_utc(), -6 * 3600);
        assert_eq!(winter.with_timezone(&Utc).hour(), 18);
    }

    #[test]
    fn test_to_local_picks_local_date_offset() {
        let central = ZoneRule::UnitedStates(UsZone::Central);
        // 2021-03-14 03:00Z is still 2021-03-13 21:00 local standard time
        let before = central.to_local(Utc.with_ymd_and_hms(2021, 3, 14, 3, 0, 0).unwrap());
        assert_eq!(before.offset().local_minus_utc(), -6 * 3600);
        assert_eq!(before.hour(), 21);

        // 2021-03-14 07:00Z is past local midnight, so CDT applies
        let after = central.to_local(Utc.with_ymd_and_hms(2021, 3, 14, 7, 0, 0).unwrap());
        assert_eq!(after.offset().local_minus_utc(), -5 * 3600);
        assert_eq!(after.hour(), 2);
    }

    #[test]
    fn test_deserialize_from_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            timezone: ZoneRule,
        }
        let parsed: Wrapper = toml::from_str(r#"timezone = "US/Eastern""#).unwrap();
        assert_eq!(parsed.timezone, ZoneRule::UnitedStates(UsZone::Eastern));
        assert!(toml::from_str::<Wrapper>(r#"timezone = "nowhere""#).is_err());
    }
}
