use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn debtm(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("debtm").unwrap();
    cmd.env("DEBT_MACHINE_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    debtm(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("audit"));
}

#[test]
fn config_reports_defaults_before_init() {
    let temp = TempDir::new().unwrap();
    debtm(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("not created (defaults in use)"))
        .stdout(predicate::str::contains("Default person name: Anon"));
}

#[test]
fn init_writes_settings_once() {
    let temp = TempDir::new().unwrap();
    debtm(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initializing Debt Machine"));
    assert!(temp.path().join("config.json").exists());

    debtm(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
}

#[test]
fn demo_prints_final_balances() {
    let temp = TempDir::new().unwrap();
    debtm(&temp)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created Alice"))
        .stdout(predicate::str::contains("$30.00"))
        .stdout(predicate::str::contains("Transactions: 1"));
}

#[test]
fn demo_leaves_audit_log_untouched() {
    let temp = TempDir::new().unwrap();
    debtm(&temp).arg("demo").assert().success();

    assert!(!temp.path().join("audit.log").exists());
    debtm(&temp)
        .args(["audit", "--limit", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries."))
        .stdout(predicate::str::contains("Alice").not());
}

#[test]
fn bad_theme_color_fails_config() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("config.json"),
        r#"{ "theme": { "accent_color": "not-a-color" } }"#,
    )
    .unwrap();

    debtm(&temp).arg("config").assert().failure();
}
