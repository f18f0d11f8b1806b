//! Unit tests covering plan configuration, input loading and output.

use super::helpers::{workspace, write_json, write_utf8};
use super::*;
use crate::plan::{PlanConfig, config_from_layers_for_test, load_travel_config, run_plan_with};
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use serde_json::Value;
use tempfile::TempDir;
use wayfarer_core::test_support::{london, lyon, paris};
use wayfarer_core::{TravelConfig, TravelConfigError, TripRequest};

struct StagedRequest {
    _tmp: TempDir,
    root: Utf8PathBuf,
    request_path: Utf8PathBuf,
}

impl StagedRequest {
    fn config(&self) -> PlanConfig {
        PlanConfig {
            request_path: self.request_path.clone(),
            total_days: None,
            travel_config: None,
        }
    }
}

#[fixture]
fn paris_to_london() -> StagedRequest {
    let (tmp, root) = workspace();
    let request_path = root.join("request.json");
    let request = TripRequest {
        cities: vec![paris(), london()],
        origin: None,
        total_days: 7,
    };
    write_json(&request_path, &request);
    StagedRequest {
        _tmp: tmp,
        root,
        request_path,
    }
}

fn run_to_json(config: &PlanConfig) -> Value {
    let mut output = Vec::new();
    run_plan_with(config, &mut output).expect("plan should succeed");
    assert_eq!(output.last(), Some(&b'\n'), "output ends with a newline");
    serde_json::from_slice(&output).expect("output is JSON")
}

fn day_keys(plan: &Value) -> Vec<String> {
    plan.get("days")
        .and_then(Value::as_object)
        .map(|days| days.keys().cloned().collect())
        .unwrap_or_else(|| panic!("plan should carry a days object: {plan}"))
}

#[rstest]
fn converting_plan_without_request_errors() {
    let args = PlanArgs {
        request_path: None,
        ..PlanArgs::default()
    };

    let err = PlanConfig::try_from(args).expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_PLAN_REQUEST);
            assert_eq!(env, ENV_PLAN_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_request() {
    let (_tmp, root) = workspace();
    let config = PlanConfig {
        request_path: root.join("absent.json"),
        total_days: None,
        travel_config: None,
    };

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_PLAN_REQUEST),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_travel_config(paris_to_london: StagedRequest) {
    let config = PlanConfig {
        travel_config: Some(paris_to_london.root.join("travel.json")),
        ..paris_to_london.config()
    };

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_PLAN_TRAVEL_CONFIG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");
    std::fs::create_dir(&request_path).expect("request directory");
    let config = PlanConfig {
        request_path: request_path.clone(),
        total_days: None,
        travel_config: None,
    };

    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_PLAN_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn plan_writes_legs_and_days(paris_to_london: StagedRequest) {
    let plan = run_to_json(&paris_to_london.config());

    let legs = plan
        .get("legs")
        .and_then(Value::as_array)
        .unwrap_or_else(|| panic!("plan should carry legs: {plan}"));
    assert_eq!(legs.len(), 1);
    assert_eq!(
        plan.pointer("/legs/0/from/name").and_then(Value::as_str),
        Some("Paris")
    );
    assert_eq!(
        plan.pointer("/legs/0/distance_km").and_then(Value::as_u64),
        Some(344)
    );
    assert_eq!(
        plan.pointer("/legs/0/options/0/mode").and_then(Value::as_str),
        Some("train")
    );
    assert_eq!(day_keys(&plan), ["5"]);
}

#[rstest]
#[case(3, "1")]
#[case(14, "12")]
#[case(1, "0")]
fn total_days_override_replaces_request_value(
    paris_to_london: StagedRequest,
    #[case] total_days: u32,
    #[case] expected_day: &str,
) {
    let config = PlanConfig {
        total_days: Some(total_days),
        ..paris_to_london.config()
    };

    let plan = run_to_json(&config);
    assert_eq!(day_keys(&plan), [expected_day]);
}

#[rstest]
fn origin_in_request_adds_a_leg() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");
    write_json(
        &request_path,
        &TripRequest {
            cities: vec![lyon(), london()],
            origin: Some(paris()),
            total_days: 10,
        },
    );
    let config = PlanConfig {
        request_path,
        total_days: None,
        travel_config: None,
    };

    let plan = run_to_json(&config);
    assert_eq!(
        plan.get("legs").and_then(Value::as_array).map(Vec::len),
        Some(2)
    );
    assert_eq!(day_keys(&plan), ["3", "5"]);
}

#[rstest]
fn travel_config_file_changes_restrictions(paris_to_london: StagedRequest) {
    let travel_path = paris_to_london.root.join("travel.json");
    write_utf8(&travel_path, br#"{ "flight_only_above_km": 300 }"#);
    let config = PlanConfig {
        travel_config: Some(travel_path),
        ..paris_to_london.config()
    };

    let plan = run_to_json(&config);
    assert_eq!(
        plan.pointer("/legs/0/restriction").and_then(Value::as_str),
        Some("distance")
    );
    assert_eq!(
        plan.pointer("/legs/0/options/0/mode").and_then(Value::as_str),
        Some("flight")
    );
}

#[rstest]
fn load_travel_config_defaults_without_path() {
    let config = load_travel_config(None).expect("default config");
    assert_eq!(config, TravelConfig::default());
}

#[rstest]
fn invalid_travel_config_is_rejected(paris_to_london: StagedRequest) {
    let travel_path = paris_to_london.root.join("travel.json");
    write_utf8(&travel_path, br#"{ "flight_only_above_km": 50 }"#);

    let err = load_travel_config(Some(&travel_path)).expect_err("threshold order should fail");
    match err {
        CliError::InvalidTravelConfig { path, source } => {
            assert_eq!(path, travel_path);
            assert_eq!(
                source,
                TravelConfigError::ThresholdOrder {
                    field: "min_flight_km",
                    value: 100,
                    limit: 50,
                }
            );
        }
        other => panic!("expected InvalidTravelConfig, found {other:?}"),
    }
}

#[rstest]
fn travel_config_with_short_car_range_is_rejected(paris_to_london: StagedRequest) {
    let travel_path = paris_to_london.root.join("travel.json");
    write_utf8(&travel_path, br#"{ "filters": { "max_car_km": 250 } }"#);
    let config = PlanConfig {
        travel_config: Some(travel_path),
        ..paris_to_london.config()
    };

    let mut output = Vec::new();
    let err = run_plan_with(&config, &mut output).expect_err("short car range should fail");
    match err {
        CliError::InvalidTravelConfig { source, .. } => assert_eq!(
            source,
            TravelConfigError::CarRangeTooShort {
                max_car_km: 250,
                limit: 400,
            }
        ),
        other => panic!("expected InvalidTravelConfig, found {other:?}"),
    }
    assert!(output.is_empty(), "nothing is written on failure");
}

#[rstest]
fn malformed_request_reports_parse_error(paris_to_london: StagedRequest) {
    write_utf8(&paris_to_london.request_path, b"{ not valid json");

    let mut output = Vec::new();
    let err = run_plan_with(&paris_to_london.config(), &mut output)
        .expect_err("invalid json should error");
    match err {
        CliError::ParseInput { field, path, .. } => {
            assert_eq!(field, ARG_PLAN_REQUEST);
            assert_eq!(path, paris_to_london.request_path);
        }
        other => panic!("expected ParseInput, found {other:?}"),
    }
    assert!(output.is_empty(), "nothing is written on failure");
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let (_tmp, root) = workspace();
    let env_request = root.join("from-env.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "request_path": root.join("from-file.json").as_str(),
            "total_days": 4,
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "total_days": 6,
    }));
    composer.push_cli(json!({ "total_days": 9 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, env_request);
    assert_eq!(config.total_days, Some(9));
    assert_eq!(config.travel_config, None);
}
