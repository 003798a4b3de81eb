//! Configuration system for tenebris.
//!
//! Settings come from an optional TOML file and are overridden by
//! command-line options. The file is looked up at
//! `$XDG_CONFIG_HOME/tenebris/tenebris.toml` unless `--config` names another
//! path. A missing default file is not an error: the built-in example
//! location is used instead.
//!
//! ```toml
//! latitude = 32.5             # degrees, north positive
//! longitude = -85.5           # degrees, east positive
//! timezone = "US/Central"     # "UTC", "-6", "+05:30", or a US zone name
//! dst_override = true         # force DST on/off, bypassing the date rule
//! leap_seconds = 5            # leap seconds since 2000-01-01
//! precision = 6               # decimal places for elevation output
//! ```
//!
//! `leap_seconds` is a snapshot; raise it when a new leap second is announced.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::geo::{GeoCoordinate, ZoneRule};
use crate::logger::Log;
use crate::solar::TimeEpoch;

/// Configuration loaded from `tenebris.toml`.
///
/// Every field is optional; [`Config`] accessors fill in defaults.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<ZoneRule>,
    pub dst_override: Option<bool>,
    pub leap_seconds: Option<i64>,
    pub precision: Option<usize>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            Log::log_decorated("No configuration file found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path).with_context(|| {
            format!(
                "Failed to load configuration from {}",
                config_path.display()
            )
        })
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        validate_config(&config)?;

        Log::log_block_start(&format!("Loaded configuration from {}", path.display()));

        Ok(config)
    }

    /// Observer coordinate, defaulting to the example location.
    pub fn coordinate(&self) -> Result<GeoCoordinate> {
        let latitude = self.latitude.unwrap_or(DEFAULT_LATITUDE);
        let longitude = self.longitude.unwrap_or(DEFAULT_LONGITUDE);
        GeoCoordinate::new(latitude, longitude).context("Invalid coordinates in configuration")
    }

    /// Timezone rule with any DST override applied.
    pub fn zone(&self) -> Result<ZoneRule> {
        let zone = match self.timezone {
            Some(zone) => zone,
            None => DEFAULT_TIMEZONE
                .parse()
                .context("Built-in default timezone failed to parse")?,
        };

        Ok(match self.dst_override {
            Some(dst) => {
                if !zone.supports_dst() {
                    Log::log_warning(&format!(
                        "DST override ignored: {} has no daylight saving time",
                        zone
                    ));
                }
                zone.with_dst_override(dst)
            }
            None => zone,
        })
    }

    pub fn epoch(&self) -> TimeEpoch {
        TimeEpoch::j2000_with_leap_seconds(self.leap_seconds.unwrap_or(DEFAULT_LEAP_SECONDS))
    }

    pub fn precision(&self) -> usize {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }

    pub fn log_config(&self) {
        Log::log_block_start("Effective configuration");

        match self.coordinate() {
            Ok(coord) => Log::log_indented(&format!("Location: {}", coord)),
            Err(e) => Log::log_indented(&format!("Location: invalid ({})", e)),
        }
        match self.zone() {
            Ok(zone) => Log::log_indented(&format!("Timezone: {}", zone)),
            Err(e) => Log::log_indented(&format!("Timezone: invalid ({})", e)),
        }
        Log::log_indented(&format!(
            "Leap seconds since J2000: {}",
            self.epoch().leap_seconds()
        ));
        Log::log_indented(&format!("Elevation precision: {}", self.precision()));
    }
}

/// Range checks for every field that is present.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(lat) = config.latitude {
        if !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&lat) {
            anyhow::bail!(
                "Latitude must be between -90 and 90 degrees (got {})",
                lat
            );
        }
    }

    if let Some(lon) = config.longitude {
        if !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&lon) {
            anyhow::bail!(
                "Longitude must be between -180 and 180 degrees (got {})",
                lon
            );
        }
    }

    if let Some(leap) = config.leap_seconds {
        if !(0..=MAXIMUM_LEAP_SECONDS).contains(&leap) {
            anyhow::bail!(
                "leap_seconds must be between 0 and {} (got {})",
                MAXIMUM_LEAP_SECONDS,
                leap
            );
        }
    }

    if let Some(precision) = config.precision {
        if precision > MAXIMUM_PRECISION {
            anyhow::bail!(
                "precision must be at most {} decimal places (got {})",
                MAXIMUM_PRECISION,
                precision
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::UsZone;
    use serial_test::serial;
    use tempfile::tempdir;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, content).unwrap();
        (temp_dir, path)
    }

    #[test]
    fn test_config_toml_parsing() {
        let (_dir, path) = write_config(
            r#"
latitude = 40.7128
longitude = -74.0060
timezone = "US/Eastern"
dst_override = false
leap_seconds = 5
precision = 3
"#,
        );
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.latitude, Some(40.7128));
        assert_eq!(config.longitude, Some(-74.0060));
        assert_eq!(
            config.timezone,
            Some(ZoneRule::UnitedStates(UsZone::Eastern))
        );
        assert_eq!(
            config.zone().unwrap(),
            ZoneRule::Override {
                zone: UsZone::Eastern,
                dst: false
            }
        );
        assert_eq!(config.precision(), 3);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let (_dir, path) = write_config("");
        let config = Config::load_from_path(&path).unwrap();
        let coord = config.coordinate().unwrap();
        assert_eq!(coord.latitude(), DEFAULT_LATITUDE);
        assert_eq!(coord.longitude(), DEFAULT_LONGITUDE);
        assert_eq!(
            config.zone().unwrap(),
            ZoneRule::UnitedStates(UsZone::Central)
        );
        assert_eq!(config.epoch(), TimeEpoch::default());
        assert_eq!(config.precision(), DEFAULT_PRECISION);
    }

    #[test]
    fn test_config_malformed_toml() {
        let (_dir, path) = write_config("latitude = [not valid");
        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        let (_dir, path) = write_config("sunset = \"19:00:00\"");
        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn test_config_rejects_bad_timezone() {
        let (_dir, path) = write_config("timezone = \"Mars/Olympus\"");
        let err = Config::load_from_path(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Mars/Olympus"));
    }

    #[test]
    fn test_config_validation_ranges() {
        let cases = [
            Config {
                latitude: Some(90.5),
                ..Config::default()
            },
            Config {
                longitude: Some(-180.5),
                ..Config::default()
            },
            Config {
                leap_seconds: Some(-1),
                ..Config::default()
            },
            Config {
                precision: Some(MAXIMUM_PRECISION + 1),
                ..Config::default()
            },
        ];
        for config in cases {
            assert!(validate_config(&config).is_err(), "{:?}", config);
        }
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nope.toml");
        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn test_custom_leap_seconds_reach_the_epoch() {
        let config = Config {
            leap_seconds: Some(7),
            ..Config::default()
        };
        assert_eq!(config.epoch().leap_seconds(), 7);
    }

    #[test]
    #[serial]
    fn test_config_load_without_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();

        // Save and restore XDG_CONFIG_HOME
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let result = Config::load();

        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        assert_eq!(result.unwrap(), Config::default());
    }

    #[test]
    #[serial]
    fn test_config_load_reads_xdg_location() {
        let temp_dir = tempdir().unwrap();
        let config_dir = temp_dir.path().join(CONFIG_DIR_NAME);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join(CONFIG_FILE_NAME), "latitude = 51.5\n").unwrap();

        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let result = Config::load();

        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        assert_eq!(result.unwrap().latitude, Some(51.5));
    }
}
