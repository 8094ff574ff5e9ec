use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CARD_TEXT: &str = "Rahul Sharma
rahul.sharma@ganeshtooling.in
Senior Project Manager
Shree Ganesh Tooling Pvt. Ltd.
Plot 45, MIDC Bhosari,
Pune 411026 | Ph: 020-2712004
Mob: +91 98220 12345
www.ganeshtooling.in
linkedin.com/in/rahulsharma
";

fn cardex(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cardex").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

fn write_card(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("card.txt");
    fs::write(&path, CARD_TEXT).unwrap();
    path
}

#[test]
fn scan_text_prints_json_record() {
    let dir = TempDir::new().unwrap();
    let card = write_card(&dir);

    let output = cardex(&dir)
        .args(["scan", "--text"])
        .arg(&card)
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["company"], "ganeshtooling.in");
    assert_eq!(record["emails"][0], "rahul.sharma@ganeshtooling.in");
    assert_eq!(record["pincodes"][0], "411026");
    assert_eq!(record["role"], "Manager");
    assert_eq!(record["address"], "Plot 45, MIDC Bhosari, Pune 411026");
    assert_eq!(record["linkedin"][0], "linkedin.com/in/rahulsharma");
}

#[test]
fn scan_text_csv_format() {
    let dir = TempDir::new().unwrap();
    let card = write_card(&dir);

    cardex(&dir)
        .args(["scan", "--text", "-f", "csv"])
        .arg(&card)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "name,role,company,emails,phones,pincodes,address,linkedin,twitter,facebook",
        ))
        .stdout(predicate::str::contains("ganeshtooling.in"));
}

#[test]
fn scan_text_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let card = write_card(&dir);
    let out = dir.path().join("record.txt");

    cardex(&dir)
        .args(["scan", "--text", "-f", "text", "-o"])
        .arg(&out)
        .arg(&card)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("Company:  ganeshtooling.in"));
    assert!(written.contains("+91 98220 12345"));
}

#[test]
fn scan_text_raw_echoes_input_on_stderr() {
    let dir = TempDir::new().unwrap();
    let card = write_card(&dir);

    cardex(&dir)
        .args(["scan", "--text", "--raw"])
        .arg(&card)
        .assert()
        .success()
        .stderr(predicate::str::contains("Recognized text:"))
        .stderr(predicate::str::contains("MIDC Bhosari"));
}

#[test]
fn compact_variant_from_config_file() {
    let dir = TempDir::new().unwrap();
    let card = write_card(&dir);
    let config = dir.path().join("cardex.json");
    fs::write(&config, r#"{"extraction": {"variant": "compact"}}"#).unwrap();

    let output = cardex(&dir)
        .arg("-c")
        .arg(&config)
        .args(["scan", "--text"])
        .arg(&card)
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(record.get("linkedin").is_none());
    assert_eq!(record["company"], "ganeshtooling.in");
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();

    cardex(&dir)
        .args(["scan", "--text"])
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn batch_without_matches_fails() {
    let dir = TempDir::new().unwrap();
    let pattern = format!("{}/*.png", dir.path().display());

    cardex(&dir)
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files found"));
}

#[test]
fn config_get_reads_defaults() {
    let dir = TempDir::new().unwrap();

    cardex(&dir)
        .args(["config", "get", "server.bind_addr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0.0.0:8000"));
}

#[test]
fn config_init_then_set() {
    let dir = TempDir::new().unwrap();

    cardex(&dir).args(["config", "init"]).assert().success();
    cardex(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cardex(&dir)
        .args(["config", "set", "extraction.variant", "compact"])
        .assert()
        .success();
    cardex(&dir)
        .args(["config", "get", "extraction.variant"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compact"));
}
