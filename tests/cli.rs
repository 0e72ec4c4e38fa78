use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn pocket(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pocket").unwrap();
    cmd.env("POCKET_LEDGER_DATA_DIR", base).env_remove("RUST_LOG");
    cmd
}

fn period_file(base: &Path, period: &str) -> std::path::PathBuf {
    base.join("data").join(format!("{}.csv", period))
}

#[test]
fn add_records_and_warns_without_blocking() {
    let tmp = TempDir::new().unwrap();

    pocket(tmp.path())
        .args(["add", "享樂", "2999", "concert", "--date", "2026-01-10"])
        .assert()
        .success()
        .stdout(contains("Recorded: 2026-01-10 [享樂 (Wants)] concert 2999"))
        .stdout(contains("Warning").not());

    pocket(tmp.path())
        .args(["add", "享樂", "2", "popcorn", "--date", "2026-01-11", "-p", "card"])
        .assert()
        .success()
        .stdout(contains("⚠ Warning: '享樂 (Wants)' over budget: 3001 of 3000 (1 over)"));

    let table = fs::read_to_string(period_file(tmp.path(), "2026-01")).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[0], "日期,類別,細項說明,金額,支付方式,備註");
    assert_eq!(lines.len(), 3);
    assert!(lines[2].starts_with("2026/01/11,享樂 (Wants),popcorn,2,信用卡"));
}

#[test]
fn check_previews_without_writing() {
    let tmp = TempDir::new().unwrap();

    pocket(tmp.path())
        .args(["check", "生存", "6001", "--period", "2026-02"])
        .assert()
        .success()
        .stdout(contains("'生存 (Needs)' over budget"));

    pocket(tmp.path())
        .args(["check", "生存", "6000", "--period", "2026-02"])
        .assert()
        .success()
        .stdout(contains("stays within budget"));

    assert!(!period_file(tmp.path(), "2026-02").exists());
}

#[test]
fn income_raises_the_exported_budget() {
    let tmp = TempDir::new().unwrap();

    for (category, amount, description) in [("收入", "5000", "salary"), ("享樂", "2000", "trip")] {
        pocket(tmp.path())
            .args(["add", category, amount, description, "--date", "2026-03-05"])
            .assert()
            .success();
    }

    let output = pocket(tmp.path())
        .args(["export", "--period", "2026-03", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["period"], "2026-03");
    assert_eq!(json["summary"]["total_income"], 5000);
    assert_eq!(json["summary"]["dynamic_budget"], 15000);
    assert_eq!(json["summary"]["total_expense"], 2000);
    assert_eq!(json["summary"]["remaining_total"], 13000);
    assert_eq!(json["summary"]["warnings"].as_array().unwrap().len(), 0);
}

#[test]
fn unknown_category_is_recorded_with_a_note() {
    let tmp = TempDir::new().unwrap();

    pocket(tmp.path())
        .args(["add", "雜項", "50", "gift", "--date", "2026-01-02"])
        .assert()
        .success()
        .stdout(contains("'雜項' is not a configured category"));

    pocket(tmp.path())
        .args(["dashboard", "--period", "2026-01"])
        .assert()
        .success()
        .stdout(contains("Budget for January 2026"))
        .stdout(contains("unconfigured categories"));
}

#[test]
fn invalid_input_is_rejected() {
    let tmp = TempDir::new().unwrap();

    pocket(tmp.path())
        .args(["add", "生存", "abc", "lunch"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    pocket(tmp.path())
        .args(["add", "生存", "120", ""])
        .assert()
        .failure()
        .stderr(contains("Validation error"));

    pocket(tmp.path())
        .args(["add", "生存", "0.5", "gum"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));

    assert!(fs::read_dir(tmp.path().join("data")).unwrap().next().is_none());
}

#[test]
fn malformed_rows_are_tolerated() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("data")).unwrap();
    fs::write(
        period_file(tmp.path(), "2026-04"),
        "日期,類別,細項說明,金額,支付方式,備註\n\
         2026/04/01,生存 (Needs),rent,abc,現金,\n\
         2026/04/02,生存 (Needs),food,300,現金,\n\
         not-a-date,生存 (Needs),junk,10,現金,\n",
    )
    .unwrap();

    pocket(tmp.path())
        .args(["dashboard", "--period", "2026-04"])
        .assert()
        .success()
        .stdout(contains("$300 / $6000"))
        .stdout(contains("1 row(s) with an unreadable amount"));

    pocket(tmp.path())
        .args(["list", "--period", "2026-04"])
        .assert()
        .success()
        .stdout(contains("?abc"))
        .stdout(contains("junk").not());
}

#[test]
fn store_failure_is_reported_as_retryable() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("data"), "not a directory").unwrap();

    pocket(tmp.path())
        .args(["dashboard"])
        .assert()
        .failure()
        .stderr(contains("please try again"));
}

#[test]
fn periods_init_and_config() {
    let tmp = TempDir::new().unwrap();

    pocket(tmp.path())
        .arg("periods")
        .assert()
        .success()
        .stdout(contains("No periods recorded yet."));

    pocket(tmp.path())
        .args(["add", "生存", "100", "bus", "--date", "2024-12-31"])
        .assert()
        .success();
    pocket(tmp.path())
        .args(["add", "生存", "100", "bus", "--date", "2025-01-01"])
        .assert()
        .success();

    pocket(tmp.path())
        .arg("periods")
        .assert()
        .success()
        .stdout(contains("2024-12\n2025-01\n"));

    pocket(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete!"));
    assert!(tmp.path().join("config.json").exists());

    pocket(tmp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Base budget:     $10000"))
        .stdout(contains("收入 (Income)"));
}

#[test]
fn invalid_settings_file_fails_loudly() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.json"),
        r#"{"budget": {"category_limits": [{"category": "A", "limit": 5}, {"category": "A", "limit": 6}]}}"#,
    )
    .unwrap();

    pocket(tmp.path())
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(contains("configured twice"));
}

#[test]
fn init_keeps_an_existing_settings_file() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("config.json");
    let hand_written = r#"{"currency_symbol": "NT$", "theme": "dark"}"#;
    fs::write(&config, hand_written).unwrap();

    pocket(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Settings already present; kept as they were."))
        .stdout(contains("Initialization complete!").not());

    assert_eq!(fs::read_to_string(&config).unwrap(), hand_written);
    assert!(tmp.path().join("data").is_dir());
}
