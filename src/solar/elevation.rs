//! Solar elevation at an instant (NOAA solar position algorithm).

use chrono::{DateTime, Offset, TimeZone, Timelike};

use crate::constants::*;
use crate::error::Result;
use crate::geo::GeoCoordinate;
use crate::solar::angles::*;
use crate::solar::ephemeris::NoaaEphemeris;
use crate::solar::epoch::TimeEpoch;

/// Sun position for one observer at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Degrees above the horizon (negative below it)
    pub elevation: f64,
    /// Degrees from the zenith, `90 - elevation`
    pub zenith: f64,
    /// Degrees from local solar noon, negative in the morning
    pub hour_angle: f64,
    pub declination: f64,
    /// Apparent minus mean solar time, minutes
    pub equation_of_time_minutes: f64,
    /// Minutes since apparent solar midnight, in [0, 1440)
    pub true_solar_time_minutes: f64,
}

// Rounding can leave cos(zenith) a few ulps past ±1 with the sun at the
// zenith or nadir. Only that slack is absorbed; `acos_deg` stays strict.
const COSINE_ROUNDING_SLACK: f64 = 1e-12;

fn snap_to_unit_range(x: f64) -> f64 {
    if x.abs() > 1.0 && x.abs() - 1.0 < COSINE_ROUNDING_SLACK {
        x.signum()
    } else {
        x
    }
}

/// Minutes since local midnight read from the timestamp's wall clock.
pub(crate) fn minutes_of_day<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> f64 {
    timestamp.hour() as f64 * 60.0
        + timestamp.minute() as f64
        + timestamp.second() as f64 / 60.0
        + timestamp.nanosecond() as f64 / 60e9
}

/// Compute the sun's position for `coord` at `timestamp`.
///
/// The wall-clock fields and UTC offset of `timestamp` both enter the
/// formula; any `chrono` timezone works as long as its offset is correct.
///
/// # Errors
/// [`SolarError::Domain`](crate::SolarError::Domain) if an inverse cosine or
/// sine argument leaves [-1, 1], which only degenerate inputs can cause.
pub fn solar_position<Tz: TimeZone>(
    epoch: &TimeEpoch,
    coord: GeoCoordinate,
    timestamp: &DateTime<Tz>,
) -> Result<SolarPosition> {
    let n = epoch.days_since(timestamp);
    let eph = NoaaEphemeris::at(n)?;

    // minutes
    let local_minutes = minutes_of_day(timestamp);
    let tz_hours = timestamp.offset().fix().local_minus_utc() as f64 / 3600.0;
    let true_solar_time_minutes = (local_minutes + eph.equation_of_time_minutes
        + 4.0 * coord.longitude()
        - 60.0 * tz_hours)
        .rem_euclid(MINUTES_PER_DAY); // AB

    // degrees
    let hour_angle = true_solar_time_minutes / 4.0 - 180.0; // AC
    let cos_zenith = sin_deg(coord.latitude()) * sin_deg(eph.declination)
        + cos_deg(coord.latitude()) * cos_deg(eph.declination) * cos_deg(hour_angle);
    let zenith = acos_deg(snap_to_unit_range(cos_zenith))?; // AD

    Ok(SolarPosition {
        elevation: 90.0 - zenith, // AE
        zenith,
        hour_angle,
        declination: eph.declination,
        equation_of_time_minutes: eph.equation_of_time_minutes,
        true_solar_time_minutes,
    })
}

/// Sun elevation in degrees above the horizon for `coord` at `timestamp`.
pub fn solar_elevation<Tz: TimeZone>(
    epoch: &TimeEpoch,
    coord: GeoCoordinate,
    timestamp: &DateTime<Tz>,
) -> Result<f64> {
    solar_position(epoch, coord, timestamp).map(|position| position.elevation)
}
