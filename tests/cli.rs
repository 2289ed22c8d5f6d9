//! Binary-level tests for the non-interactive commands.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomodoro(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomodoro").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("POMODORO_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn config_path_defaults_to_home() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join(".pomodoro").join("config.yaml");

    pomodoro(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn config_show_json_has_defaults() {
    let home = TempDir::new().unwrap();

    let output = pomodoro(&home)
        .args(["config", "show", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["focus"]["focus_minutes"], 25);
    assert_eq!(value["focus"]["break_minutes"], 5);
    assert_eq!(
        value["sound"]["url"],
        "https://bigsoundbank.com/UPLOAD/mp3/1482.mp3"
    );
}

#[test]
fn config_init_then_show_uses_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.yaml");

    pomodoro(&home)
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(path.exists());

    std::fs::write(&path, "focus:\n  focus_minutes: 45\n").unwrap();
    pomodoro(&home)
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("focus_minutes: 45"));

    pomodoro(&home)
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn invalid_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.yaml");
    std::fs::write(&path, "focus: [").unwrap();

    pomodoro(&home)
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn run_rejects_out_of_range_focus() {
    let home = TempDir::new().unwrap();

    pomodoro(&home)
        .args(["run", "--plain", "--no-sound", "--focus", "90"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "focus must be between 5 and 60 minutes",
        ));
}

#[test]
fn run_rejects_unparseable_break() {
    let home = TempDir::new().unwrap();

    pomodoro(&home)
        .args(["run", "--plain", "--break", "later"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'later' is not a break duration"));
}

#[test]
fn completions_generate_script() {
    let home = TempDir::new().unwrap();

    pomodoro(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomodoro"));
}

#[test]
fn logs_are_written_to_data_dir() {
    let home = TempDir::new().unwrap();

    pomodoro(&home)
        .env("RUST_LOG", "debug")
        .args(["config", "show"])
        .assert()
        .success();

    let log = std::fs::read_to_string(home.path().join(".pomodoro").join("pomodoro.log")).unwrap();
    assert!(log.contains("Loaded config from"));
}

#[test]
fn config_init_force_replaces_broken_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.yaml");
    std::fs::write(&path, "focus: [").unwrap();

    pomodoro(&home)
        .args(["config", "path", "--config"])
        .arg(&path)
        .assert()
        .success();

    pomodoro(&home)
        .args(["config", "init", "--force", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    pomodoro(&home)
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("focus_minutes: 25"));
}

#[test]
fn clamped_config_values_are_logged_and_reported() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.yaml");
    std::fs::write(&path, "focus:\n  focus_minutes: 120\n").unwrap();

    pomodoro(&home)
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("focus_minutes: 60"))
        .stderr(predicate::str::contains(
            "focus_minutes 120 out of range, using 60",
        ));

    let log = std::fs::read_to_string(home.path().join(".pomodoro").join("pomodoro.log")).unwrap();
    assert!(log.contains("focus_minutes 120 out of range, using 60"));
}

#[test]
fn path_and_completions_leave_home_untouched() {
    let home = TempDir::new().unwrap();

    pomodoro(&home).args(["config", "path"]).assert().success();
    pomodoro(&home).args(["completions", "zsh"]).assert().success();

    assert!(!home.path().join(".pomodoro").exists());
}
