use anyhow::Result;
use clap::Parser;

use tenebris::args::{Cli, Command};
use tenebris::commands::{elevation, times};
use tenebris::constants::EXIT_FAILURE;
use tenebris::logger::Log;

fn run(cli: &Cli) -> Result<()> {
    Log::log_version();

    let config = cli.resolve_config()?;
    config.log_config();
    Log::log_pipe();

    match cli.action() {
        Command::Elevation { date, time } => {
            elevation::handle_elevation_command(&config, date.as_deref(), time.as_deref())?
        }
        Command::Times { date } => times::handle_times_command(&config, date.as_deref())?,
    }

    Log::log_end();
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    Log::set_enabled(cli.debug);

    if let Err(e) = run(&cli) {
        Log::log_critical(&format!("{:#}", e));
        std::process::exit(EXIT_FAILURE);
    }
}
