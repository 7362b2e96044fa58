//! Command-line interface for planning Hours-of-Service compliant trips.
//!
//! Two subcommands share one configuration model: values come from a JSON
//! request file, a `.roadlog.toml` configuration file, `ROADLOG_CMDS_*`
//! environment variables and command-line flags, in increasing order of
//! precedence.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

mod error;
mod output;
mod plan;
mod report;
mod request;
mod schedule;

pub use error::CliError;

use plan::PlanArgs;
use schedule::ScheduleArgs;

const ARG_REQUEST: &str = "request";
const ARG_TOTAL_MILES: &str = "total-miles";
const ARG_CYCLE_HOURS_USED: &str = "cycle-hours-used";
const ARG_AVG_SPEED_MPH: &str = "avg-speed-mph";
const ARG_FORMAT: &str = "format";
const ARG_OUTPUT: &str = "output";
const ARG_CURRENT: &str = "current";
const ARG_PICKUP: &str = "pickup";
const ARG_DROPOFF: &str = "dropoff";
const ARG_DRIVER_NAME: &str = "driver-name";
const ARG_CARRIER_NAME: &str = "carrier-name";
const ARG_OSRM_BASE_URL: &str = "osrm-base-url";
const ARG_NOMINATIM_BASE_URL: &str = "nominatim-base-url";
const ENV_SCHEDULE_TOTAL_MILES: &str = "ROADLOG_CMDS_SCHEDULE_TOTAL_MILES";
const ENV_PLAN_CURRENT: &str = "ROADLOG_CMDS_PLAN_CURRENT";
const ENV_PLAN_PICKUP: &str = "ROADLOG_CMDS_PLAN_PICKUP";
const ENV_PLAN_DROPOFF: &str = "ROADLOG_CMDS_PLAN_DROPOFF";

/// Run the roadlog CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when argument parsing, configuration, planning or
/// writing the report fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Schedule(args) => schedule::run_schedule(args),
        Command::Plan(args) => plan::run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "roadlog",
    about = "Hours-of-Service trip schedules and driver log sheets",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Simulate a schedule for a known trip distance.
    Schedule(ScheduleArgs),
    /// Geocode, route and schedule a trip between three places.
    Plan(PlanArgs),
}

/// Report format written by both subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum OutputFormat {
    /// Pretty-printed JSON in the wire shape.
    #[default]
    Json,
    /// Plain-text log sheet, one block per day.
    Text,
}

#[cfg(test)]
mod tests;
