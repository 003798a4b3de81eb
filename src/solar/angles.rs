//! Degree-based trigonometric helpers.
//!
//! Every call site in the solar modules exchanges degrees. These helpers are
//! the only place where values cross into radians, so a missing conversion
//! cannot hide in the middle of a formula.

use crate::error::{Result, SolarError};

#[inline]
pub fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

#[inline]
pub fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

#[inline]
pub fn tan_deg(x: f64) -> f64 {
    x.to_radians().tan()
}

/// Arcsine in degrees.
///
/// Arguments outside [-1, 1] are rejected with [`SolarError::Domain`]
/// rather than clamped or turned into NaN.
pub fn asin_deg(x: f64) -> Result<f64> {
    check_unit_interval("asin", x)?;
    Ok(x.asin().to_degrees())
}

/// Arccosine in degrees.
///
/// Arguments outside [-1, 1] are rejected with [`SolarError::Domain`].
/// This is how a day without sunrise or sunset becomes visible to callers.
pub fn acos_deg(x: f64) -> Result<f64> {
    check_unit_interval("acos", x)?;
    Ok(x.acos().to_degrees())
}

#[inline]
pub fn atan_deg(x: f64) -> f64 {
    x.atan().to_degrees()
}

/// Two-argument arctangent in degrees, `y` first as in `f64::atan2`.
#[inline]
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Normalize an angle into [0, 360).
///
/// Uses the Euclidean remainder so negative inputs wrap upward, matching
/// floored modulo rather than Rust's truncating `%`.
#[inline]
pub fn normalize_degrees(x: f64) -> f64 {
    x.rem_euclid(360.0)
}

fn check_unit_interval(function: &'static str, x: f64) -> Result<()> {
    // NaN fails the range check as well
    if (-1.0..=1.0).contains(&x) {
        Ok(())
    } else {
        Err(SolarError::Domain {
            function,
            argument: x,
        })
    }
}
