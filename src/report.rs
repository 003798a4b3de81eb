//! Plain-text rendering of solar results.
//!
//! Times are shown as local `HH:MM:SS`, the format the display layer expects.

use chrono::{DateTime, FixedOffset, TimeZone};
use std::fmt;

use crate::solar::SunTimes;

/// Format a timestamp as `HH:MM:SS` in its own offset.
pub fn format_clock<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    t.format("%H:%M:%S").to_string()
}

/// Format an elevation in degrees with `precision` decimal places.
pub fn format_elevation(elevation: f64, precision: usize) -> String {
    format!("{:.*}", precision, elevation)
}

/// One line per event, aligned, with the zone label after each time.
#[derive(Debug, Clone)]
pub struct SunTimesReport<'a> {
    times: &'a SunTimes,
    zone_label: String,
}

impl<'a> SunTimesReport<'a> {
    pub fn new(times: &'a SunTimes, zone_label: impl Into<String>) -> Self {
        Self {
            times,
            zone_label: zone_label.into(),
        }
    }

    /// (event name, `HH:MM:SS`) pairs in chronological order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        self.times
            .iter()
            .map(|(event, at)| (event.name(), format_clock::<FixedOffset>(&at)))
            .collect()
    }
}

impl fmt::Display for SunTimesReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, clock) in self.rows() {
            if self.zone_label.is_empty() {
                writeln!(f, "{:<8} {}", name, clock)?;
            } else {
                writeln!(f, "{:<8} {} {}", name, clock, self.zone_label)?;
            }
        }
        Ok(())
    }
}
