//! Command-line command handlers for tenebris.
//!
//! Each handler resolves its inputs from the effective [`Config`], runs one
//! calculation, and returns the text to print on stdout.
//!
//! [`Config`]: crate::config::Config

pub mod elevation;
pub mod times;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};

use crate::constants::{DEFAULT_DATE, DEFAULT_TIME};

/// Parse a `YYYY-MM-DD` date, falling back to the example date.
pub fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
    let raw = date.unwrap_or(DEFAULT_DATE);
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}': expected YYYY-MM-DD", raw))
}

/// Parse an `HH:MM:SS` or `HH:MM` time, falling back to local noon.
pub fn parse_time(time: Option<&str>) -> Result<NaiveTime> {
    let raw = time.unwrap_or(DEFAULT_TIME).trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .with_context(|| format!("Invalid time '{}': expected HH:MM:SS or HH:MM", raw))
}
