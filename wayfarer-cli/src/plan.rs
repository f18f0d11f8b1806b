//! Plan command implementation for the Wayfarer CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use std::io::{BufReader, Write};
use wayfarer_core::{TravelConfig, TripPlan, TripRequest, plan_trip};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_PLAN_REQUEST, ARG_PLAN_TOTAL_DAYS, ARG_PLAN_TRAVEL_CONFIG, CliError, ENV_PLAN_REQUEST,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan the travel legs of a trip. The request is a JSON-encoded \
                 TripRequest listing geocoded cities, an optional origin and \
                 the trip length. The resulting legs and their days are \
                 printed as JSON.",
    about = "Plan travel legs for a trip request"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a TripRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Override the trip length given in the request.
    #[arg(long = ARG_PLAN_TOTAL_DAYS, value_name = "days")]
    #[serde(default)]
    pub(crate) total_days: Option<u32>,
    /// Path to a JSON travel configuration replacing the built-in table.
    #[arg(long = ARG_PLAN_TRAVEL_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) travel_config: Option<Utf8PathBuf>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Trip length replacing the request's own value.
    pub(crate) total_days: Option<u32>,
    /// Path to a replacement travel configuration.
    pub(crate) travel_config: Option<Utf8PathBuf>,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)?;
        if let Some(path) = &self.travel_config {
            Self::require_existing(path, ARG_PLAN_TRAVEL_CONFIG)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        Ok(Self {
            request_path,
            total_days: args.total_days,
            travel_config: args.travel_config,
        })
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    run_plan_with(&config, &mut stdout)
}

pub(super) fn run_plan_with(config: &PlanConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    config.validate_sources()?;
    let plan = execute_plan(config)?;
    write_plan(writer, &plan)
}

fn execute_plan(config: &PlanConfig) -> Result<TripPlan, CliError> {
    let mut request: TripRequest = load_json(&config.request_path, ARG_PLAN_REQUEST)?;
    if let Some(total_days) = config.total_days {
        request.total_days = total_days;
    }
    let travel = load_travel_config(config.travel_config.as_deref())?;
    debug!(
        "planning {} cities over {} days",
        request.cities.len(),
        request.total_days
    );
    Ok(plan_trip(&request, &travel))
}

/// Load and validate a replacement [`TravelConfig`], or use the built-in one.
pub(super) fn load_travel_config(path: Option<&Utf8Path>) -> Result<TravelConfig, CliError> {
    let Some(path) = path else {
        return Ok(TravelConfig::default());
    };
    let config: TravelConfig = load_json(path, ARG_PLAN_TRAVEL_CONFIG)?;
    config
        .validate()
        .map_err(|source| CliError::InvalidTravelConfig {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(config)
}

fn load_json<T: DeserializeOwned>(path: &Utf8Path, field: &'static str) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn write_plan(writer: &mut dyn Write, plan: &TripPlan) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(plan).map_err(CliError::SerializePlan)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlan)?;
    writer.write_all(b"\n").map_err(CliError::WritePlan)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
