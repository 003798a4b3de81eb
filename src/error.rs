//! Error types for the solar calculation core.
//!
//! An inverse trigonometric argument can leave [-1, 1] when the sun never
//! reaches the requested elevation on that day. Coordinates can be out of
//! range, and a day offset can fall outside what `chrono` can represent.
//! Everything else is validated by the front ends before the core is called.

use thiserror::Error;

/// Result type alias for the solar calculation core.
pub type Result<T> = std::result::Result<T, SolarError>;

/// Errors produced by the solar calculation core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolarError {
    /// An inverse trigonometric function was called outside [-1, 1].
    ///
    /// For sunrise/sunset and twilight events this means the sun never
    /// reaches the requested elevation on the given day (polar day or night).
    #[error("math domain error: {function}({argument}) is undefined")]
    Domain {
        /// Name of the inverse function that rejected its argument
        function: &'static str,
        /// The offending argument
        argument: f64,
    },

    /// Latitude outside [-90, 90] degrees or not finite.
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    /// Longitude outside [-180, 180] degrees or not finite.
    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },

    /// A day offset could not be turned back into a timestamp.
    #[error("day offset {days} from the epoch is outside the representable time range")]
    TimestampOutOfRange { days: f64 },
}

impl SolarError {
    /// Whether this error means an event simply does not happen that day.
    pub fn is_domain(&self) -> bool {
        matches!(self, SolarError::Domain { .. })
    }
}
