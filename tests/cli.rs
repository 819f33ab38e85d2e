use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HEADER: &str = "Item;B;C;D;E;F;G;H;I;J;Price;Qty";

fn write_inputs(dir: &Path, order_lines: &[&str]) {
    let mut orders = String::from(HEADER);
    orders.push('\n');
    for line in order_lines {
        orders.push_str(line);
        orders.push('\n');
    }
    fs::write(dir.join("orders.csv"), orders).unwrap();
    fs::write(dir.join("clients.csv"), "Client;Name\n1;ACME\n").unwrap();
}

fn sales_report(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sales-report").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("SALES_REPORT_CONFIG")
        .arg("--config")
        .arg(dir.join("settings.json"));
    cmd
}

#[test]
fn literal_mode_reproduces_reference_report() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(
        temp_dir.path(),
        &[
            "022207210;;;;;;;;;;1.99;1",
            "022207210;;;;;;;;;;1.99;1",
            "022207210;;;;;;;;;;1.99;1",
            "022207204;;;;;;;;;;2.99;1",
        ],
    );
    fs::write(temp_dir.path().join("settings.json"), r#"{"mode": "literal"}"#).unwrap();

    sales_report(temp_dir.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("ordersReport.csv"));

    let report = fs::read_to_string(temp_dir.path().join("ordersReport.csv")).unwrap();
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "TSM,:,4.98");
    assert_eq!(lines[1], "GEE,:,0.0");
    assert_eq!(lines[2], "LESTRIS,:,2.50");
    assert_eq!(lines[8], ",,,Sum,,7.47");
}

#[test]
fn standard_mode_with_flag_overrides() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(temp_dir.path(), &["022207249;;;;;;;;;;2.00;3"]);
    fs::write(temp_dir.path().join("settings.json"), "{}").unwrap();

    sales_report(temp_dir.path())
        .args(["run", "--denominator", "4", "--no-clients", "-o", "out/summary.csv", "--preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SACRAMENTO"));

    // 600 - 600 / 4 = 450
    let report = fs::read_to_string(temp_dir.path().join("out/summary.csv")).unwrap();
    assert!(report.contains("SACRAMENTO,:,4.50\n"));
    assert!(report.contains("TSM,:,0.00\n"));
    assert!(report.ends_with(",,,Sum,,4.50\n"));
}

#[test]
fn malformed_price_aborts_without_output() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(temp_dir.path(), &["022207210;;;;;;;;;;abc;1"]);
    fs::write(temp_dir.path().join("settings.json"), r#"{"mode": "literal"}"#).unwrap();

    sales_report(temp_dir.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot parse price"))
        .stderr(predicate::str::contains("abc"));

    assert!(!temp_dir.path().join("ordersReport.csv").exists());
}

#[test]
fn missing_orders_file_aborts() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("settings.json"), "{}").unwrap();

    sales_report(temp_dir.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("orders.csv"));

    assert!(!temp_dir.path().join("ordersReport.csv").exists());
}

#[test]
fn missing_settings_file_aborts() {
    let temp_dir = TempDir::new().unwrap();

    sales_report(temp_dir.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn fatal_error_is_logged() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("settings.json"), "{}").unwrap();

    sales_report(temp_dir.path())
        .args(["--log-level", "error", "run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Exiting with error"))
        .stderr(predicate::str::contains("Error: I/O error on 'orders.csv'"));
}

#[test]
fn log_level_off_silences_logging() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("settings.json"), "{}").unwrap();

    sales_report(temp_dir.path())
        .args(["--log-level", "off", "run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Exiting with error").not())
        .stderr(predicate::str::contains("Error: I/O error on 'orders.csv'"));
}

#[test]
fn dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write_inputs(temp_dir.path(), &["022207210;;;;;;;;;;1.99;2"]);
    fs::write(temp_dir.path().join("settings.json"), "{}").unwrap();

    sales_report(temp_dir.path())
        .args(["run", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp_dir.path().join("ordersReport.csv").exists());
}

#[test]
fn init_then_config_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.yaml");

    Command::cargo_bin("sales-report")
        .unwrap()
        .env_remove("SALES_REPORT_CONFIG")
        .args(["init", "--path"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    Command::cargo_bin("sales-report")
        .unwrap()
        .env_remove("SALES_REPORT_CONFIG")
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("denominator: 6"))
        .stdout(predicate::str::contains("LEGAL TEHNOLOGIES"));
}
