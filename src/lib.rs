//! # Tenebris
//!
//! Solar elevation and daily sun events (dawn, sunrise, solar noon, sunset,
//! dusk) for any coordinate and date.
//!
//! Elevation uses the NOAA solar position equations; daily events use the
//! shorter "sunrise equation". Both are pure functions of a coordinate and a
//! timestamp.
//!
//! ## Architecture
//!
//! - **solar**: Degree trigonometry, epoch handling, both ephemeris models,
//!   elevation and daily events
//! - **geo**: Observer coordinates and timezone rules for local display
//! - **report**: `HH:MM:SS` formatting of results
//! - **config**: TOML configuration loading and validation
//! - **args**: Command-line interface definition
//! - **commands**: Handlers for the `elevation` and `times` commands
//! - **constants**: Astronomical constants and defaults
//! - **logger**: Structured logging with visual formatting
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//!
//! let cst = FixedOffset::west_opt(6 * 3600).unwrap();
//! let t = cst.with_ymd_and_hms(2020, 12, 31, 12, 0, 0).unwrap();
//! let elevation = tenebris::solar_elevation(32.5, -85.5, &t).unwrap();
//! assert!((elevation - 34.37).abs() < 0.01);
//! ```

pub mod args;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod logger;
pub mod report;
pub mod solar;

// Re-export important types for easier access
pub use config::Config;
pub use error::{Result, SolarError};
pub use geo::{GeoCoordinate, UsZone, ZoneRule};
pub use logger::{Log, LogLevel};
pub use solar::{
    SolarCalculator, SolarDay, SolarPosition, SunEvent, SunTimes, TimeEpoch, Twilight,
    solar_elevation, sun_times,
};
