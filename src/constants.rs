//! Application constants and default values for tenebris.
//!
//! This module contains the astronomical constants, configuration defaults
//! and validation limits used throughout the crate.

// ═══ Time Epoch ═══
// J2000.0: 2000-01-01T12:00:00 UTC

pub const EPOCH_YEAR: i32 = 2000;
pub const EPOCH_MONTH: u32 = 1;
pub const EPOCH_DAY: u32 = 1;
pub const EPOCH_HOUR: u32 = 12;

// Leap seconds inserted since the epoch. This is a snapshot and goes stale
// whenever a new leap second is announced.
pub const DEFAULT_LEAP_SECONDS: i64 = 5;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const MINUTES_PER_DAY: f64 = 1_440.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

// ═══ Event Elevations ═══
// Sun elevation (degrees) that defines each event

pub const SUNRISE_ELEVATION: f64 = -0.83; // refraction plus solar radius
pub const CIVIL_TWILIGHT_ELEVATION: f64 = -6.0;
pub const NAUTICAL_TWILIGHT_ELEVATION: f64 = -12.0;
pub const ASTRONOMICAL_TWILIGHT_ELEVATION: f64 = -18.0;

// Fixed obliquity of the ecliptic used by the sunrise equation
pub const SUNRISE_EQUATION_OBLIQUITY: f64 = 23.44;

// ═══ Application Configuration Defaults ═══
// Used when neither the config file nor the command line says otherwise

pub const DEFAULT_LATITUDE: f64 = 32.5;
pub const DEFAULT_LONGITUDE: f64 = -85.5;
pub const DEFAULT_TIMEZONE: &str = "US/Central";
pub const DEFAULT_DATE: &str = "2020-12-31";
pub const DEFAULT_TIME: &str = "12:00:00";
pub const DEFAULT_PRECISION: usize = 6; // decimal places for elevation output

pub const CONFIG_DIR_NAME: &str = "tenebris";
pub const CONFIG_FILE_NAME: &str = "tenebris.toml";

// ═══ Validation Limits ═══

pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_LONGITUDE: f64 = -180.0;
pub const MAXIMUM_LONGITUDE: f64 = 180.0;
pub const MAXIMUM_LEAP_SECONDS: i64 = 100;
pub const MAXIMUM_PRECISION: usize = 10;

// ═══ Exit Codes ═══

pub const EXIT_FAILURE: i32 = 1;

// ═══ Test Constants ═══
// Common values used in tests for consistency
#[cfg(test)]
pub mod test_constants {
    pub const TEST_LATITUDE: f64 = super::DEFAULT_LATITUDE;
    pub const TEST_LONGITUDE: f64 = super::DEFAULT_LONGITUDE;
    pub const TEST_ELEVATION_GOLDEN: f64 = 34.369_839; // 2020-12-31 12:00 CST
    pub const TEST_ELEVATION_TOLERANCE: f64 = 0.01;
}
