//! Implementation of the `elevation` command.

use anyhow::{Context, Result};

use crate::commands::{parse_date, parse_time};
use crate::config::Config;
use crate::logger::Log;
use crate::report::format_elevation;
use crate::solar::SolarCalculator;

/// Compute the elevation line for a local date and time.
pub fn elevation_report(
    config: &Config,
    date: Option<&str>,
    time: Option<&str>,
) -> Result<String> {
    let coord = config.coordinate()?;
    let zone = config.zone()?;
    let local = parse_date(date)?.and_time(parse_time(time)?);

    let timestamp = zone
        .localize(local)
        .with_context(|| format!("Local time {} cannot be represented in {}", local, zone))?;

    Log::log_decorated(&format!(
        "Elevation at {} ({}) for {}",
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        zone.abbreviation(local.date()),
        coord
    ));

    let position = SolarCalculator::new(config.epoch())
        .position(coord, &timestamp)
        .with_context(|| format!("Failed to compute the sun position for {}", coord))?;

    Log::log_indented(&format!("Declination: {:.4}°", position.declination));
    Log::log_indented(&format!("Hour angle: {:.4}°", position.hour_angle));
    Log::log_indented(&format!(
        "Equation of time: {:.2} min",
        position.equation_of_time_minutes
    ));

    Ok(format_elevation(position.elevation, config.precision()))
}

/// Handle the `elevation` command by printing the elevation in degrees.
pub fn handle_elevation_command(
    config: &Config,
    date: Option<&str>,
    time: Option<&str>,
) -> Result<()> {
    let line = elevation_report(config, date, time)?;
    println!("{}", line);
    Ok(())
}
