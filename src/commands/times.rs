//! Implementation of the `times` command.

use anyhow::{Context, Result};

use crate::commands::parse_date;
use crate::config::Config;
use crate::logger::Log;
use crate::report::{SunTimesReport, format_clock};
use crate::solar::{SolarCalculator, SunTimes, Twilight};

/// Compute the five daily events for a local date, one line each.
pub fn times_report(config: &Config, date: Option<&str>) -> Result<String> {
    let coord = config.coordinate()?;
    let zone = config.zone()?;
    let date = parse_date(date)?;
    let calculator = SolarCalculator::new(config.epoch());

    Log::log_decorated(&format!("Sun times on {} for {} in {}", date, coord, zone));

    let day = calculator.solar_day_on(coord, date)?;
    let times = SunTimes::for_day(&day, |instant| zone.to_local(instant))
        .with_context(|| format!("The sun does not rise and set on {} at {}", date, coord))?;

    let length = day.day_length()?;
    Log::log_indented(&format!(
        "Day length: {}h {:02}m",
        length.num_hours(),
        length.num_minutes() % 60
    ));
    for kind in [Twilight::Nautical, Twilight::Astronomical] {
        match day.twilight(kind) {
            Ok((start, end)) => Log::log_indented(&format!(
                "{:?} twilight: {} to {}",
                kind,
                format_clock(&zone.to_local(start)),
                format_clock(&zone.to_local(end))
            )),
            Err(_) => Log::log_indented(&format!("{:?} twilight: does not occur", kind)),
        }
    }

    Ok(SunTimesReport::new(&times, zone.abbreviation(date)).to_string())
}

/// Handle the `times` command by printing the events in chronological order.
pub fn handle_times_command(config: &Config, date: Option<&str>) -> Result<()> {
    let report = times_report(config, date)?;
    print!("{}", report);
    Ok(())
}
