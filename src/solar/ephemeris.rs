//! Intermediate solar quantities derived from the day offset `n`.
//!
//! Two models live here side by side:
//!
//! - [`NoaaEphemeris`]: the NOAA spreadsheet chain of century polynomials with
//!   a time-varying obliquity and a nutation correction. Used for elevation.
//! - [`SunriseEphemeris`]: the shorter "sunrise equation" chain with a fixed
//!   23.44° obliquity. Used for daily event times.
//!
//! They overlap (mean anomaly, equation of center, declination, equation of
//! time) but differ in precision, and each caller depends on its own model.
//! Keep them separate.
//!
//! Angles are degrees throughout. Equation of time is minutes for the NOAA
//! model and days for the sunrise model; the field names carry the unit.

use crate::constants::*;
use crate::error::Result;
use crate::solar::angles::*;

/// NOAA solar position quantities for one instant.
///
/// Spreadsheet column letters from the published NOAA calculator are noted
/// beside each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoaaEphemeris {
    pub julian_century: f64,
    pub mean_longitude: f64,
    pub mean_anomaly: f64,
    pub eccentricity: f64,
    pub equation_of_center: f64,
    pub true_longitude: f64,
    pub apparent_longitude: f64,
    pub mean_obliquity: f64,
    pub obliquity: f64,
    pub declination: f64,
    pub equation_of_time_minutes: f64,
}

impl NoaaEphemeris {
    /// Derive every quantity from the day offset since J2000.0.
    ///
    /// The terms follow the published NOAA calculator: true longitude is
    /// `L + C`, the equation of center keeps its `sin 2M` term, the nutation
    /// argument uses `1934.136`, and the equation of time is converted from
    /// radians before scaling to minutes. Transcriptions that take `L + M` or
    /// drop the `sin 2M` term put the 32.5°N 85.5°W 2020-12-31 12:00 CST
    /// elevation at 34.33° instead of 34.37°.
    pub fn at(days_since_epoch: f64) -> Result<Self> {
        let t = days_since_epoch / DAYS_PER_JULIAN_CENTURY; // G

        let mean_longitude = normalize_degrees(280.466_46 + t * (36_000.769_83 + t * 0.000_303_2)); // I
        let mean_anomaly = 357.529_11 + t * (35_999.050_29 - 0.000_153_7 * t); // J
        let eccentricity = 0.016_708_634 - t * (0.000_042_037 + 0.000_000_126_7 * t); // K

        let equation_of_center = sin_deg(mean_anomaly) * (1.914_602 - t * (0.004_817 + 0.000_014 * t))
            + sin_deg(2.0 * mean_anomaly) * (0.019_993 - 0.000_101 * t)
            + sin_deg(3.0 * mean_anomaly) * 0.000_289; // L

        let true_longitude = mean_longitude + equation_of_center; // M
        let apparent_longitude =
            true_longitude - 0.005_69 - 0.004_78 * sin_deg(125.04 - 1_934.136 * t); // P

        let mean_obliquity =
            23.0 + (26.0 + (21.448 - t * (46.815 + t * (0.000_59 - t * 0.001_813))) / 60.0) / 60.0; // Q
        let obliquity = mean_obliquity + 0.002_56 * cos_deg(125.04 - 1_934.136 * t); // R

        let declination = asin_deg(sin_deg(obliquity) * sin_deg(apparent_longitude))?; // T

        let y = tan_deg(obliquity / 2.0).powi(2); // U
        let equation_of_time_minutes = 4.0
            * (y * sin_deg(2.0 * mean_longitude) - 2.0 * eccentricity * sin_deg(mean_anomaly)
                + 4.0 * eccentricity * y * sin_deg(mean_anomaly) * cos_deg(2.0 * mean_longitude)
                - 0.5 * y.powi(2) * sin_deg(4.0 * mean_longitude)
                - 1.25 * eccentricity.powi(2) * sin_deg(2.0 * mean_anomaly))
                .to_degrees(); // V

        Ok(Self {
            julian_century: t,
            mean_longitude,
            mean_anomaly,
            eccentricity,
            equation_of_center,
            true_longitude,
            apparent_longitude,
            mean_obliquity,
            obliquity,
            declination,
            equation_of_time_minutes,
        })
    }
}

/// Sunrise-equation quantities for one day offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunriseEphemeris {
    pub mean_anomaly: f64,
    pub equation_of_center: f64,
    pub ecliptic_longitude: f64,
    /// Apparent minus mean solar time, in days.
    pub equation_of_time_days: f64,
    pub declination: f64,
}

impl SunriseEphemeris {
    pub fn at(days_since_epoch: f64) -> Result<Self> {
        let n = days_since_epoch;

        let mean_anomaly = normalize_degrees(357.5291 + 0.985_600_28 * n);
        let equation_of_center = 1.9148 * sin_deg(mean_anomaly)
            + 0.0200 * sin_deg(2.0 * mean_anomaly)
            + 0.0003 * sin_deg(3.0 * mean_anomaly);
        // 102.9372 is the argument of perihelion
        let ecliptic_longitude =
            normalize_degrees(mean_anomaly + equation_of_center + 180.0 + 102.9372);

        let equation_of_time_days =
            0.0069 * sin_deg(2.0 * ecliptic_longitude) - 0.0053 * sin_deg(mean_anomaly);
        let declination =
            asin_deg(sin_deg(ecliptic_longitude) * sin_deg(SUNRISE_EQUATION_OBLIQUITY))?;

        Ok(Self {
            mean_anomaly,
            equation_of_center,
            ecliptic_longitude,
            equation_of_time_days,
            declination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2020-12-31T18:00:05Z
    const N_2020_12_31: f64 = 7670.25 + 5.0 / 86_400.0;

    #[test]
    fn test_noaa_winter_declination_and_equation_of_time() {
        let eph = NoaaEphemeris::at(N_2020_12_31).unwrap();
        // Late December: declination about -23.1°, sundial about 3 minutes behind
        assert!((eph.declination + 23.1).abs() < 0.2, "{}", eph.declination);
        assert!(
            (-4.0..-2.0).contains(&eph.equation_of_time_minutes),
            "{}",
            eph.equation_of_time_minutes
        );
        assert!((0.0..360.0).contains(&eph.mean_longitude));
    }

    #[test]
    fn test_noaa_obliquity_is_near_23_44() {
        let eph = NoaaEphemeris::at(N_2020_12_31).unwrap();
        assert!((eph.mean_obliquity - 23.4367).abs() < 0.001, "{}", eph.mean_obliquity);
        assert!((eph.obliquity - eph.mean_obliquity).abs() < 0.003);
    }

    #[test]
    fn test_sunrise_ephemeris_reference_values() {
        let eph = SunriseEphemeris::at(N_2020_12_31).unwrap();
        assert!((eph.mean_anomaly - 357.329_704_7).abs() < 1e-6);
        assert!((eph.equation_of_center + 0.091_111_13).abs() < 1e-6);
        assert!((eph.ecliptic_longitude - 280.175_793_6).abs() < 1e-6);
        assert!((eph.equation_of_time_days + 0.002_152_762).abs() < 1e-8);
        assert!((eph.declination + 23.049_822_9).abs() < 1e-6);
    }

    #[test]
    fn test_models_agree_on_declination_within_model_error() {
        for n in [7670.25, 7748.5, 7840.0, 7933.75] {
            let noaa = NoaaEphemeris::at(n).unwrap();
            let simple = SunriseEphemeris::at(n).unwrap();
            assert!(
                (noaa.declination - simple.declination).abs() < 0.3,
                "n={n}: {} vs {}",
                noaa.declination,
                simple.declination
            );
        }
    }

    #[test]
    fn test_sunrise_equation_of_time_sign_matches_november_sundial_lead() {
        // Early November the sundial runs about 16 minutes ahead of the clock
        let eph = SunriseEphemeris::at(7612.0).unwrap(); // 2020-11-03
        let minutes = eph.equation_of_time_days * MINUTES_PER_DAY;
        assert!((14.0..18.0).contains(&minutes), "{minutes}");
    }
}
