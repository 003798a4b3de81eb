//! Daily solar events from the sunrise equation.
//!
//! A [`SolarDay`] holds the sunrise-equation quantities for one day and the
//! solar transit derived from them. Every event is the transit shifted by the
//! hour angle at which the sun crosses a given elevation. When the sun never
//! reaches that elevation (polar day or night) the hour angle is undefined and
//! the domain error is returned to the caller as is.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::{Result, SolarError};
use crate::geo::GeoCoordinate;
use crate::solar::angles::*;
use crate::solar::ephemeris::SunriseEphemeris;
use crate::solar::epoch::TimeEpoch;

/// The five named events of a [`SunTimes`] result, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SunEvent {
    Dawn,
    Sunrise,
    Noon,
    Sunset,
    Dusk,
}

impl SunEvent {
    pub const ALL: [SunEvent; 5] = [
        SunEvent::Dawn,
        SunEvent::Sunrise,
        SunEvent::Noon,
        SunEvent::Sunset,
        SunEvent::Dusk,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SunEvent::Dawn => "dawn",
            SunEvent::Sunrise => "sunrise",
            SunEvent::Noon => "noon",
            SunEvent::Sunset => "sunset",
            SunEvent::Dusk => "dusk",
        }
    }
}

impl fmt::Display for SunEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SunEvent {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SunEvent::ALL
            .into_iter()
            .find(|event| event.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown sun event '{}'", s))
    }
}

/// Twilight definitions by sun depression below the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Twilight {
    Civil,
    Nautical,
    Astronomical,
}

impl Twilight {
    pub fn elevation(self) -> f64 {
        match self {
            Twilight::Civil => CIVIL_TWILIGHT_ELEVATION,
            Twilight::Nautical => NAUTICAL_TWILIGHT_ELEVATION,
            Twilight::Astronomical => ASTRONOMICAL_TWILIGHT_ELEVATION,
        }
    }
}

/// Sunrise-equation state for the day containing an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    epoch: TimeEpoch,
    coord: GeoCoordinate,
    ephemeris: SunriseEphemeris,
    /// Day offset of solar transit from the epoch
    transit_days: f64,
}

impl SolarDay {
    /// Derive the day for `coord` that `timestamp` falls in.
    ///
    /// The day is selected by flooring the epoch day offset, so the day
    /// boundary sits at 12:00 UTC (plus the leap-second correction).
    pub fn new<Tz: TimeZone>(
        epoch: &TimeEpoch,
        coord: GeoCoordinate,
        timestamp: &DateTime<Tz>,
    ) -> Result<Self> {
        let n = epoch.days_since(timestamp);
        let ephemeris = SunriseEphemeris::at(n)?;
        let transit_days =
            n.floor() - coord.longitude() / 360.0 - ephemeris.equation_of_time_days;

        Ok(Self {
            epoch: *epoch,
            coord,
            ephemeris,
            transit_days,
        })
    }

    /// Derive the day for `coord` on the calendar `date`.
    ///
    /// The day is evaluated at 12:00 UTC of `date`, which floors to that date
    /// for every longitude.
    pub fn on_date(epoch: &TimeEpoch, coord: GeoCoordinate, date: NaiveDate) -> Result<Self> {
        let midday = date
            .and_hms_opt(12, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive))
            .ok_or(SolarError::TimestampOutOfRange { days: f64::NAN })?;
        Self::new(epoch, coord, &midday)
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        self.coord
    }

    pub fn ephemeris(&self) -> &SunriseEphemeris {
        &self.ephemeris
    }

    pub fn declination(&self) -> f64 {
        self.ephemeris.declination
    }

    /// Hours either side of solar noon at which the sun is at `elevation` degrees.
    ///
    /// # Errors
    /// [`SolarError::Domain`](crate::SolarError::Domain) when the sun stays
    /// entirely above or below `elevation` all day.
    pub fn hour_angle(&self, elevation: f64) -> Result<f64> {
        let lat = self.coord.latitude();
        let delta = self.ephemeris.declination;
        let cos_omega = (sin_deg(elevation) - sin_deg(lat) * sin_deg(delta))
            / (cos_deg(lat) * cos_deg(delta));
        Ok(acos_deg(cos_omega)? / 15.0)
    }

    /// Instant of solar transit (local apparent noon).
    pub fn transit(&self) -> Result<DateTime<Utc>> {
        self.epoch.instant_at(self.transit_days)
    }

    /// Rising and setting instants at which the sun crosses `elevation`.
    pub fn crossing(&self, elevation: f64) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
        let offset_days = self.hour_angle(elevation)? / 24.0;
        let rising = self.epoch.instant_at(self.transit_days - offset_days)?;
        let setting = self.epoch.instant_at(self.transit_days + offset_days)?;
        Ok((rising, setting))
    }

    /// Sunrise and sunset (sun centre at -0.83°).
    pub fn sunrise_sunset(&self) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
        self.crossing(SUNRISE_ELEVATION)
    }

    /// Start and end of the given twilight.
    pub fn twilight(&self, kind: Twilight) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
        self.crossing(kind.elevation())
    }

    /// Time between sunrise and sunset.
    pub fn day_length(&self) -> Result<Duration> {
        let (sunrise, sunset) = self.sunrise_sunset()?;
        Ok(sunset - sunrise)
    }
}

/// Dawn, sunrise, noon, sunset and dusk for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub dawn: DateTime<FixedOffset>,
    pub sunrise: DateTime<FixedOffset>,
    pub noon: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
    pub dusk: DateTime<FixedOffset>,
}

impl SunTimes {
    /// Compute all five events for `day`, expressing each through `to_local`.
    ///
    /// Fails as a whole if any event does not occur.
    pub fn for_day<F>(day: &SolarDay, to_local: F) -> Result<Self>
    where
        F: Fn(DateTime<Utc>) -> DateTime<FixedOffset>,
    {
        let noon = day.transit()?;
        let (sunrise, sunset) = day.sunrise_sunset()?;
        let (dawn, dusk) = day.twilight(Twilight::Civil)?;

        Ok(Self {
            dawn: to_local(dawn),
            sunrise: to_local(sunrise),
            noon: to_local(noon),
            sunset: to_local(sunset),
            dusk: to_local(dusk),
        })
    }

    pub fn get(&self, event: SunEvent) -> DateTime<FixedOffset> {
        match event {
            SunEvent::Dawn => self.dawn,
            SunEvent::Sunrise => self.sunrise,
            SunEvent::Noon => self.noon,
            SunEvent::Sunset => self.sunset,
            SunEvent::Dusk => self.dusk,
        }
    }

    /// Events in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (SunEvent, DateTime<FixedOffset>)> + '_ {
        SunEvent::ALL.into_iter().map(|event| (event, self.get(event)))
    }

    /// Event name to timestamp mapping.
    pub fn to_map(&self) -> BTreeMap<&'static str, DateTime<FixedOffset>> {
        self.iter().map(|(event, at)| (event.name(), at)).collect()
    }
}

/// Compute the events for the local calendar date of `timestamp`.
///
/// Results carry the UTC offset of `timestamp`.
pub fn sun_times<Tz: TimeZone>(
    epoch: &TimeEpoch,
    coord: GeoCoordinate,
    timestamp: &DateTime<Tz>,
) -> Result<SunTimes> {
    let offset = timestamp.offset().fix();
    let day = SolarDay::on_date(epoch, coord, timestamp.date_naive())?;
    SunTimes::for_day(&day, |instant| instant.with_timezone(&offset))
}
