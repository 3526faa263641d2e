use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn sample_csv() -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "Date,HighTemperature").unwrap();
    for day in 1..=20 {
        writeln!(f, "{day:02}/06/2020,{}", 14.0 + day as f64 * 0.3).unwrap();
    }
    f.flush().unwrap();
    f
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("tempgraph").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tempgraph"));
}

#[test]
fn renders_a_chart_from_csv() {
    let csv = sample_csv();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.svg");

    let mut cmd = Command::cargo_bin("tempgraph").unwrap();
    cmd.arg(csv.path()).arg("--out").arg(&out);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Wrote chart to"));
    assert!(out.exists());
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn zoom_and_hover_options_are_accepted() {
    let csv = sample_csv();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("zoomed.svg");

    let mut cmd = Command::cargo_bin("tempgraph").unwrap();
    cmd.arg(csv.path())
        .arg("--out")
        .arg(&out)
        .args(["--zoom", "3", "--hover", "10/06/2020"]);
    cmd.assert().success();
    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains("</svg>"));
}

#[test]
fn malformed_csv_fails_with_row_number() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "Date,HighTemperature").unwrap();
    writeln!(f, "01/06/2020,15.0").unwrap();
    writeln!(f, "02/06/2020,not-a-number").unwrap();
    f.flush().unwrap();

    let mut cmd = Command::cargo_bin("tempgraph").unwrap();
    cmd.arg(f.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("row 3"));
}

#[test]
fn missing_input_file_fails() {
    let mut cmd = Command::cargo_bin("tempgraph").unwrap();
    cmd.arg("definitely-not-here.csv");
    cmd.assert().failure();
}
