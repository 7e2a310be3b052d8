//! End-to-end runs through the command-line layer.

use std::fs;
use std::path::PathBuf;

use approx::assert_abs_diff_eq;
use clap::Parser;
use linefit::cli::{run, Cli};
use linefit::{Error, LineParams, TrainConfig};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("linefit_cli_{}_{name}", std::process::id()))
}

#[test]
fn requires_a_data_source() {
    assert!(Cli::try_parse_from(["linefit"]).is_err());
    assert!(Cli::try_parse_from(["linefit", "data.csv", "--synthetic", "10"]).is_err());
}

#[test]
fn flags_override_config_file() {
    let cfg_path = temp_path("config.json");
    let mut config = TrainConfig::new(0.5, 3);
    config.initial_w = 2.0;
    config.save_json(cfg_path.to_str().unwrap()).unwrap();

    let cli = Cli::try_parse_from([
        "linefit",
        "--synthetic",
        "5",
        "--config",
        cfg_path.to_str().unwrap(),
        "--iterations",
        "7",
        "--b",
        "-1.5",
    ])
    .unwrap();
    let merged = cli.train_config().unwrap();

    assert_eq!(merged.learning_rate, 0.5);
    assert_eq!(merged.num_iterations, 7);
    assert_eq!(merged.initial_b, -1.5);
    assert_eq!(merged.initial_w, 2.0);
    let _ = fs::remove_file(cfg_path);
}

#[test]
fn trains_from_csv_and_writes_report() {
    let data_path = temp_path("data.csv");
    let out_path = temp_path("report.json");
    fs::write(&data_path, "x,y\n1,1\n2,2\n3,3\n").unwrap();

    let cli = Cli::try_parse_from([
        "linefit",
        data_path.to_str().unwrap(),
        "--alpha",
        "0.01",
        "--iterations",
        "10000",
        "--output",
        out_path.to_str().unwrap(),
    ])
    .unwrap();
    let report = run(&cli).unwrap();

    assert_eq!(report.history.len(), 10_000);
    assert_abs_diff_eq!(report.params.w, 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(report.params.b, 0.0, epsilon = 1e-3);
    assert!(report.mse < report.initial_mse);

    let written: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(written["history"]["w"].as_array().unwrap().len(), 10_000);
    assert_abs_diff_eq!(written["params"]["w"].as_f64().unwrap(), report.params.w, epsilon = 1e-12);

    let _ = fs::remove_file(data_path);
    let _ = fs::remove_file(out_path);
}

#[test]
fn zero_iterations_reports_initial_params() {
    let cli = Cli::try_parse_from([
        "linefit", "--synthetic", "20", "--iterations", "0", "--b", "0.5", "--w", "-2",
    ])
    .unwrap();
    let report = run(&cli).unwrap();
    assert!(report.history.is_empty());
    assert_eq!((report.params.b, report.params.w), (0.5, -2.0));
    assert_eq!(report.mse, report.initial_mse);
}

#[test]
fn missing_file_is_an_io_error() {
    let cli = Cli::try_parse_from(["linefit", "/nonexistent/linefit/data.csv"]).unwrap();
    assert!(matches!(run(&cli), Err(Error::Io(_))));
}

#[test]
fn malformed_config_is_a_json_error() {
    let cfg_path = temp_path("broken.json");
    fs::write(&cfg_path, "{ not json").unwrap();

    let cli = Cli::try_parse_from([
        "linefit",
        "--synthetic",
        "5",
        "--config",
        cfg_path.to_str().unwrap(),
    ])
    .unwrap();
    let err = cli.train_config().unwrap_err();
    assert!(matches!(err, Error::Json(_)), "unexpected error: {err}");
    let _ = fs::remove_file(cfg_path);
}

#[test]
fn empty_synthetic_dataset_is_rejected() {
    let cli = Cli::try_parse_from(["linefit", "--synthetic", "0"]).unwrap();
    assert!(matches!(run(&cli), Err(Error::EmptyDataset)));
}

#[test]
fn saved_params_seed_the_next_run() {
    let params_path = temp_path("params.json");

    let first = Cli::try_parse_from([
        "linefit",
        "--synthetic",
        "30",
        "--true-w",
        "2",
        "--alpha",
        "0.01",
        "--iterations",
        "50",
        "--params-out",
        params_path.to_str().unwrap(),
    ])
    .unwrap();
    let first_report = run(&first).unwrap();
    let saved = LineParams::load_json(params_path.to_str().unwrap()).unwrap();
    assert_abs_diff_eq!(saved.b, first_report.params.b, epsilon = 1e-12);
    assert_abs_diff_eq!(saved.w, first_report.params.w, epsilon = 1e-12);

    let second = Cli::try_parse_from([
        "linefit",
        "--synthetic",
        "30",
        "--iterations",
        "0",
        "--init-params",
        params_path.to_str().unwrap(),
        "--w",
        "7",
    ])
    .unwrap();
    let config = second.train_config().unwrap();
    assert_abs_diff_eq!(config.initial_b, first_report.params.b, epsilon = 1e-12);
    assert_eq!(config.initial_w, 7.0);
    let _ = fs::remove_file(params_path);
}
