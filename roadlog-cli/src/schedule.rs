//! Schedule command: simulate a trip of known length.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use roadlog_core::{HosRules, Simulator, TripSchedule};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_AVG_SPEED_MPH, ARG_CYCLE_HOURS_USED, ARG_FORMAT, ARG_OUTPUT, ARG_TOTAL_MILES, CliError,
    ENV_SCHEDULE_TOTAL_MILES, OutputFormat, output, report, request,
};

/// CLI arguments for the `schedule` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "schedule",
    long_about = "Simulate the day-by-day Hours-of-Service schedule for a \
                 trip of known length. The distance and cycle hours can come \
                 from a JSON request file, configuration files, environment \
                 variables or flags; flags win.",
    about = "Simulate a schedule for a known trip distance"
)]
#[ortho_config(prefix = "ROADLOG")]
pub(crate) struct ScheduleArgs {
    /// Path to a JSON file holding `{ "total_miles", "cycle_hours_used" }`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Total trip distance in miles.
    #[arg(long = ARG_TOTAL_MILES, value_name = "miles")]
    #[serde(default)]
    pub(crate) total_miles: Option<f64>,
    /// On-duty hours already used in the current 70-hour cycle.
    #[arg(long = ARG_CYCLE_HOURS_USED, value_name = "hours")]
    #[serde(default)]
    pub(crate) cycle_hours_used: Option<f64>,
    /// Override the assumed average driving speed.
    #[arg(long = ARG_AVG_SPEED_MPH, value_name = "mph")]
    #[serde(default)]
    pub(crate) avg_speed_mph: Option<f64>,
    /// Report format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Write the report to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScheduleArgs {
    pub(crate) fn into_config(self) -> Result<ScheduleConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScheduleConfig::resolve(merged)
    }
}

/// Distance and cycle hours as read from a request file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ScheduleRequest {
    pub(crate) total_miles: f64,
    #[serde(default)]
    pub(crate) cycle_hours_used: f64,
}

/// Resolved `schedule` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScheduleConfig {
    pub(crate) total_miles: f64,
    pub(crate) cycle_hours_used: f64,
    pub(crate) avg_speed_mph: Option<f64>,
    pub(crate) format: OutputFormat,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ScheduleConfig {
    /// Combine merged arguments with the optional request file. Flags and
    /// other layers take precedence over the file.
    pub(crate) fn resolve(args: ScheduleArgs) -> Result<Self, CliError> {
        let from_file = args
            .request_path
            .as_deref()
            .map(request::load_json_request::<ScheduleRequest>)
            .transpose()?;

        let total_miles = args
            .total_miles
            .or_else(|| from_file.as_ref().map(|request| request.total_miles))
            .ok_or(CliError::MissingArgument {
                field: ARG_TOTAL_MILES,
                env: ENV_SCHEDULE_TOTAL_MILES,
            })?;
        if !(total_miles.is_finite() && total_miles > 0.0) {
            return Err(CliError::InvalidTotalMiles { value: total_miles });
        }
        let cycle_hours_used = args
            .cycle_hours_used
            .or_else(|| from_file.as_ref().map(|request| request.cycle_hours_used))
            .unwrap_or_default();

        Ok(Self {
            total_miles,
            cycle_hours_used,
            avg_speed_mph: args.avg_speed_mph,
            format: args.format.unwrap_or_default(),
            output: args.output,
        })
    }

    fn rules(&self) -> HosRules {
        self.avg_speed_mph
            .map_or_else(HosRules::default, |mph| HosRules::default().with_avg_speed_mph(mph))
    }
}

pub(crate) fn run_schedule(args: ScheduleArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_schedule_with(args, &mut stdout)
}

pub(crate) fn run_schedule_with(args: ScheduleArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let schedule = execute_schedule(&config)?;
    output::emit(config.output.as_deref(), stdout, |writer| {
        report::write_schedule(writer, &schedule, config.format)
    })
}

pub(crate) fn execute_schedule(config: &ScheduleConfig) -> Result<TripSchedule, CliError> {
    debug!(
        "simulating {} mi with {} cycle hours used",
        config.total_miles, config.cycle_hours_used
    );
    let schedule =
        Simulator::new(config.rules()).simulate(config.total_miles, config.cycle_hours_used)?;
    Ok(schedule)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScheduleConfig, CliError> {
    let merged = ScheduleArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScheduleConfig::resolve(merged)
}
