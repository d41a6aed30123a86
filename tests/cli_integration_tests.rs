//! End-to-end CLI tests: prepare the tables, then run every panel
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use predicates::prelude::*;
use tempfile::TempDir;

fn prepared_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cesta");
    cmd.arg("prepare")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("17 items"));
    dir
}

#[test]
fn test_prepare_writes_three_tables() {
    let dir = prepared_dir();
    for file in ["tabela_igor.csv", "tabela_gladson.csv", "tabela_ibge.csv"] {
        assert!(dir.path().join(file).exists(), "{} missing", file);
    }
    let igor = std::fs::read_to_string(dir.path().join("tabela_igor.csv")).unwrap();
    assert!(igor.starts_with("Item,Semana 1,Semana 2,Semana 3,Semana 4"));
    assert!(igor.contains("Arroz,4.99,5.1,5.15,4.15"));
}

#[test]
fn test_analyze_without_tables_fails_upfront() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cesta");
    cmd.arg("analyze")
        .arg("--data-dir")
        .arg(dir.path())
        .arg("lab")
        .arg("Arroz")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Table file not found"))
        .stderr(predicate::str::contains("cesta prepare"));
}

#[test]
fn test_analyze_lab_text() {
    let dir = prepared_dir();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cesta");
    cmd.arg("--data-dir")
        .arg(dir.path())
        .arg("analyze")
        .arg("lab")
        .arg("Arroz")
        .assert()
        .success()
        .stdout(predicate::str::contains("Statistics lab: Arroz"))
        .stdout(predicate::str::contains("mean R$ 4.85"))
        .stdout(predicate::str::contains("Confidence interval (95%)"))
        .stdout(predicate::str::contains("Fail to reject H0"));
}

#[test]
fn test_analyze_lab_json() {
    let dir = prepared_dir();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cesta");
    let output = cmd
        .arg("--data-dir")
        .arg(dir.path())
        .arg("analyze")
        .arg("--format")
        .arg("json")
        .arg("lab")
        .arg("Arroz")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["report"]["mode"], "lab");
    let mean = value["report"]["igor_summary"]["mean"].as_f64().unwrap();
    assert!((mean - 4.8475).abs() < 1e-12);
    let lower = value["report"]["interval"]["lower"].as_f64().unwrap();
    let upper = value["report"]["interval"]["upper"].as_f64().unwrap();
    assert!(lower < mean && mean < upper);
}

#[test]
fn test_analyze_welch_override() {
    let dir = prepared_dir();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cesta");
    cmd.arg("--data-dir")
        .arg(dir.path())
        .arg("analyze")
        .arg("--variance")
        .arg("welch")
        .arg("--format")
        .arg("json")
        .arg("lab")
        .arg("Arroz")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"variance\": \"welch\""));
}

#[test]
fn test_analyze_invalid_confidence_rejected() {
    let dir = prepared_dir();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cesta");
    cmd.arg("--data-dir")
        .arg(dir.path())
        .arg("analyze")
        .arg("--confidence")
        .arg("1.5")
        .arg("lab")
        .arg("Arroz")
        .assert()
        .failure()
        .stderr(predicate::str::contains("confidence_level"));
}

#[test]
fn test_analyze_config_file() {
    let dir = prepared_dir();
    let config = dir.path().join("cesta.toml");
    std::fs::write(&config, "confidence_level = 0.99\nsignificance_level = 0.01\n").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cesta");
    cmd.arg("--data-dir")
        .arg(dir.path())
        .arg("analyze")
        .arg("--config")
        .arg(&config)
        .arg("lab")
        .arg("Arroz")
        .assert()
        .success()
        .stdout(predicate::str::contains("Confidence interval (99%)"))
        .stdout(predicate::str::contains("alpha = 0.01"));
}

#[test]
fn test_analyze_unknown_item_not_found() {
    let dir = prepared_dir();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cesta");
    cmd.arg("--data-dir")
        .arg(dir.path())
        .arg("analyze")
        .arg("trend")
        .arg("Caviar")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Caviar' not found"));
}

#[test]
fn test_analyze_trend_csv() {
    let dir = prepared_dir();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cesta");
    cmd.arg("--data-dir")
        .arg(dir.path())
        .arg("analyze")
        .arg("--format")
        .arg("csv")
        .arg("trend")
        .arg("Arroz")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "week,igor,gladson,igor_total,gladson_total",
        ))
        .stdout(predicate::str::contains("Semana 3,5.15,2.99"));
}

#[test]
fn test_analyze_socio_html_to_file() {
    let dir = prepared_dir();
    let report = dir.path().join("natal.html");
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cesta");
    cmd.arg("--data-dir")
        .arg(dir.path())
        .arg("analyze")
        .arg("--format")
        .arg("html")
        .arg("--output")
        .arg(&report)
        .arg("socio")
        .arg("Natal")
        .assert()
        .success();

    let html = std::fs::read_to_string(&report).unwrap();
    assert!(html.contains("<title>Socioeconomic impact: Natal</title>"));
    assert!(html.contains("R$ 26,972.28"));
}

#[test]
fn test_list_municipalities_sorted() {
    let dir = prepared_dir();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cesta");
    let output = cmd
        .arg("--data-dir")
        .arg(dir.path())
        .arg("list")
        .arg("municipalities")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names.len(), 17);
    assert_eq!(names[0], "Acari");
    assert!(names.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_list_items_in_file_order() {
    let dir = prepared_dir();
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cesta");
    cmd.arg("--data-dir")
        .arg(dir.path())
        .arg("list")
        .arg("items")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Arroz\nFeijão\n"));
}
