//! Plan command: geocode, route and schedule a trip between three places.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use roadlog_core::{Geocoder, RouteProvider, Simulator, TripPlan, TripPlanner, TripRequest};
use roadlog_data::geocoding::{DEFAULT_NOMINATIM_BASE_URL, NominatimGeocoder};
use roadlog_data::routing::{DEFAULT_OSRM_BASE_URL, HttpRouteProvider};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CARRIER_NAME, ARG_CURRENT, ARG_CYCLE_HOURS_USED, ARG_DRIVER_NAME, ARG_DROPOFF,
    ARG_FORMAT, ARG_NOMINATIM_BASE_URL, ARG_OSRM_BASE_URL, ARG_OUTPUT, ARG_PICKUP, CliError,
    ENV_PLAN_CURRENT, ENV_PLAN_DROPOFF, ENV_PLAN_PICKUP, OutputFormat, output, report, request,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Plan a trip from the driver's current position through a \
                 pickup to a dropoff. Places are geocoded with Nominatim, the \
                 road route comes from OSRM and the routed distance is \
                 scheduled under the Hours-of-Service rules. A JSON trip \
                 request file may supply any field; flags override it.",
    about = "Geocode, route and schedule a trip"
)]
#[ortho_config(prefix = "ROADLOG")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file holding a trip request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Where the driver is now, e.g. "Chicago, IL".
    #[arg(long = ARG_CURRENT, value_name = "place")]
    #[serde(default)]
    pub(crate) current: Option<String>,
    /// Where the load is picked up.
    #[arg(long = ARG_PICKUP, value_name = "place")]
    #[serde(default)]
    pub(crate) pickup: Option<String>,
    /// Where the load is delivered.
    #[arg(long = ARG_DROPOFF, value_name = "place")]
    #[serde(default)]
    pub(crate) dropoff: Option<String>,
    /// On-duty hours already used in the current 70-hour cycle.
    #[arg(long = ARG_CYCLE_HOURS_USED, value_name = "hours")]
    #[serde(default)]
    pub(crate) cycle_hours_used: Option<f64>,
    /// Driver name for the log sheet header.
    #[arg(long = ARG_DRIVER_NAME, value_name = "name")]
    #[serde(default)]
    pub(crate) driver_name: Option<String>,
    /// Carrier name for the log sheet header.
    #[arg(long = ARG_CARRIER_NAME, value_name = "name")]
    #[serde(default)]
    pub(crate) carrier_name: Option<String>,
    /// Base URL for the OSRM server (e.g. "http://localhost:5000").
    #[arg(long = ARG_OSRM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) osrm_base_url: Option<String>,
    /// Base URL for the Nominatim server.
    #[arg(long = ARG_NOMINATIM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) nominatim_base_url: Option<String>,
    /// Report format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Write the report to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::resolve(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    pub(crate) request: TripRequest,
    pub(crate) osrm_base_url: String,
    pub(crate) nominatim_base_url: String,
    pub(crate) format: OutputFormat,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanConfig {
    /// Combine merged arguments with the optional trip request file. Flags
    /// and other layers take precedence over the file.
    pub(crate) fn resolve(args: PlanArgs) -> Result<Self, CliError> {
        let from_file = args
            .request_path
            .as_deref()
            .map(request::load_json_request::<TripRequest>)
            .transpose()?
            .unwrap_or_default();

        let request = TripRequest {
            current_location: pick_place(
                args.current,
                from_file.current_location,
                ARG_CURRENT,
                ENV_PLAN_CURRENT,
            )?,
            pickup_location: pick_place(
                args.pickup,
                from_file.pickup_location,
                ARG_PICKUP,
                ENV_PLAN_PICKUP,
            )?,
            dropoff_location: pick_place(
                args.dropoff,
                from_file.dropoff_location,
                ARG_DROPOFF,
                ENV_PLAN_DROPOFF,
            )?,
            cycle_hours_used: args
                .cycle_hours_used
                .unwrap_or(from_file.cycle_hours_used),
            driver_name: args.driver_name.or(from_file.driver_name),
            carrier_name: args.carrier_name.or(from_file.carrier_name),
        };

        Ok(Self {
            request,
            osrm_base_url: args
                .osrm_base_url
                .unwrap_or_else(|| DEFAULT_OSRM_BASE_URL.to_owned()),
            nominatim_base_url: args
                .nominatim_base_url
                .unwrap_or_else(|| DEFAULT_NOMINATIM_BASE_URL.to_owned()),
            format: args.format.unwrap_or_default(),
            output: args.output,
        })
    }
}

fn pick_place(
    flag: Option<String>,
    file: String,
    field: &'static str,
    env: &'static str,
) -> Result<String, CliError> {
    flag.or_else(|| Some(file).filter(|place| !place.trim().is_empty()))
        .ok_or(CliError::MissingArgument { field, env })
}

/// Builds the geocoder and router for a plan invocation.
pub(crate) trait CollaboratorFactory {
    fn geocoder(&self, config: &PlanConfig) -> Result<Box<dyn Geocoder>, CliError>;
    fn router(&self, config: &PlanConfig) -> Result<Box<dyn RouteProvider>, CliError>;
}

/// Nominatim and OSRM over HTTP.
pub(crate) struct HttpCollaborators;

impl CollaboratorFactory for HttpCollaborators {
    fn geocoder(&self, config: &PlanConfig) -> Result<Box<dyn Geocoder>, CliError> {
        let geocoder =
            NominatimGeocoder::new(config.nominatim_base_url.clone()).map_err(|source| {
                CliError::BuildClient {
                    service: "Nominatim",
                    base_url: config.nominatim_base_url.clone(),
                    source,
                }
            })?;
        Ok(Box::new(geocoder))
    }

    fn router(&self, config: &PlanConfig) -> Result<Box<dyn RouteProvider>, CliError> {
        let router = HttpRouteProvider::new(config.osrm_base_url.clone()).map_err(|source| {
            CliError::BuildClient {
                service: "OSRM",
                base_url: config.osrm_base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(router))
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &HttpCollaborators, &mut stdout)
}

pub(crate) fn run_plan_with(
    args: PlanArgs,
    factory: &dyn CollaboratorFactory,
    stdout: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let plan = execute_plan(&config, factory)?;
    output::emit(config.output.as_deref(), stdout, |writer| {
        report::write_plan(writer, &plan, config.format)
    })
}

fn execute_plan(config: &PlanConfig, factory: &dyn CollaboratorFactory) -> Result<TripPlan, CliError> {
    let planner = TripPlanner::new(
        factory.geocoder(config)?,
        factory.router(config)?,
        Simulator::default(),
    );
    Ok(planner.plan(&config.request)?)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::resolve(merged)
}
