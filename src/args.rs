//! Command-line argument parsing and processing.
//!
//! Location, timezone and config options are global so they can be given
//! before or after the subcommand. Running `tenebris` with no subcommand is the
//! same as `tenebris elevation`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, validate_config};
use crate::geo::ZoneRule;

/// Solar elevation and sunrise, sunset and twilight times
#[derive(Parser, Debug)]
#[command(name = "tenebris", author, version, about, long_about = None)]
pub struct Cli {
    /// Observer latitude in degrees (north positive)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Observer longitude in degrees (east positive)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Timezone: UTC, an offset like -6 or +05:30, or a US zone like US/Central
    #[arg(short = 'z', long, global = true, allow_hyphen_values = true)]
    pub timezone: Option<ZoneRule>,

    /// Force daylight saving time on or off for US zones
    #[arg(long, global = true, value_enum)]
    pub dst: Option<DstSwitch>,

    /// Read configuration from this file instead of the default location
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable detailed debug output on stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the sun's elevation in degrees
    Elevation {
        /// Local date, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,

        /// Local time, HH:MM or HH:MM:SS
        #[arg(long)]
        time: Option<String>,
    },
    /// Print dawn, sunrise, solar noon, sunset and dusk
    Times {
        /// Local date, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DstSwitch {
    On,
    Off,
}

impl From<DstSwitch> for bool {
    fn from(switch: DstSwitch) -> bool {
        matches!(switch, DstSwitch::On)
    }
}

impl Cli {
    /// The subcommand to run, defaulting to `elevation` with no date or time.
    pub fn action(&self) -> Command {
        self.command.clone().unwrap_or(Command::Elevation {
            date: None,
            time: None,
        })
    }

    /// Load the configuration file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from_path(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(config)
    }

    /// Command-line values replace file values; the result is re-validated.
    pub fn apply_overrides(&self, mut config: Config) -> Result<Config> {
        if let Some(lat) = self.latitude {
            config.latitude = Some(lat);
        }
        if let Some(lon) = self.longitude {
            config.longitude = Some(lon);
        }
        if let Some(zone) = self.timezone {
            config.timezone = Some(zone);
        }
        if let Some(dst) = self.dst {
            config.dst_override = Some(dst.into());
        }

        validate_config(&config).context("Invalid command-line options")?;
        Ok(config)
    }
}
