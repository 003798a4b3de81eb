//! Solar position and daily event calculations.
//!
//! This module provides:
//! - Degree-based trigonometry ([`angles`])
//! - The reference epoch and day offsets ([`epoch`])
//! - Both ephemeris models ([`ephemeris`])
//! - Elevation at an instant ([`elevation`])
//! - Dawn, sunrise, noon, sunset and dusk for a day ([`sun_times`])
//!
//! [`SolarCalculator`] bundles the epoch configuration with both operations.

pub mod angles;
pub mod elevation;
pub mod ephemeris;
pub mod epoch;
pub mod sun_times;

pub use elevation::SolarPosition;
pub use epoch::TimeEpoch;
pub use sun_times::{SolarDay, SunEvent, SunTimes, Twilight};

use chrono::{DateTime, NaiveDate, TimeZone};

use crate::error::Result;
use crate::geo::{GeoCoordinate, ZoneRule};

/// Entry point for all solar calculations under one epoch configuration.
///
/// Holds no mutable state; share it freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolarCalculator {
    epoch: TimeEpoch,
}

impl SolarCalculator {
    pub fn new(epoch: TimeEpoch) -> Self {
        Self { epoch }
    }

    pub fn epoch(&self) -> &TimeEpoch {
        &self.epoch
    }

    /// Sun elevation in degrees at `timestamp`.
    pub fn elevation<Tz: TimeZone>(
        &self,
        coord: GeoCoordinate,
        timestamp: &DateTime<Tz>,
    ) -> Result<f64> {
        elevation::solar_elevation(&self.epoch, coord, timestamp)
    }

    /// Full sun position (elevation, zenith, hour angle, ...) at `timestamp`.
    pub fn position<Tz: TimeZone>(
        &self,
        coord: GeoCoordinate,
        timestamp: &DateTime<Tz>,
    ) -> Result<SolarPosition> {
        elevation::solar_position(&self.epoch, coord, timestamp)
    }

    /// Sunrise-equation state for the day containing `timestamp`.
    pub fn solar_day<Tz: TimeZone>(
        &self,
        coord: GeoCoordinate,
        timestamp: &DateTime<Tz>,
    ) -> Result<SolarDay> {
        SolarDay::new(&self.epoch, coord, timestamp)
    }

    /// Events for the local date of `timestamp`, in `timestamp`'s offset.
    pub fn sun_times<Tz: TimeZone>(
        &self,
        coord: GeoCoordinate,
        timestamp: &DateTime<Tz>,
    ) -> Result<SunTimes> {
        sun_times::sun_times(&self.epoch, coord, timestamp)
    }

    /// Sunrise-equation state for the calendar `date`.
    pub fn solar_day_on(&self, coord: GeoCoordinate, date: NaiveDate) -> Result<SolarDay> {
        SolarDay::on_date(&self.epoch, coord, date)
    }

    /// Events for a civil `date`, expressed in `zone`.
    pub fn sun_times_on(
        &self,
        coord: GeoCoordinate,
        date: NaiveDate,
        zone: ZoneRule,
    ) -> Result<SunTimes> {
        let day = self.solar_day_on(coord, date)?;
        SunTimes::for_day(&day, |instant| zone.to_local(instant))
    }
}

/// Sun elevation in degrees using the default epoch.
///
/// Validates the coordinate first.
pub fn solar_elevation<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    timestamp: &DateTime<Tz>,
) -> Result<f64> {
    let coord = GeoCoordinate::new(latitude, longitude)?;
    SolarCalculator::default().elevation(coord, timestamp)
}

/// Dawn, sunrise, noon, sunset and dusk using the default epoch.
pub fn sun_times<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    timestamp: &DateTime<Tz>,
) -> Result<SunTimes> {
    let coord = GeoCoordinate::new(latitude, longitude)?;
    SolarCalculator::default().sun_times(coord, timestamp)
}
