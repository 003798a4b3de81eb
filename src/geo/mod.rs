//! Geographic inputs: observer coordinates and the timezone rule used to
//! express results as local wall-clock time.

pub mod timezone;

pub use timezone::{UsZone, ZoneRule};

use crate::constants::*;
use crate::error::{Result, SolarError};

/// Observer position in degrees, north and east positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Create a validated coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Geographic latitude in degrees (-90 to +90)
    /// * `longitude` - Geographic longitude in degrees (-180 to +180)
    ///
    /// # Returns
    /// * `Ok(GeoCoordinate)` - If both values are finite and in range
    /// * `Err(SolarError::InvalidLatitude | InvalidLongitude)` - Otherwise
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&latitude) {
            return Err(SolarError::InvalidLatitude { value: latitude });
        }
        if !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&longitude) {
            return Err(SolarError::InvalidLongitude { value: longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.4}°{}, {:.4}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}
