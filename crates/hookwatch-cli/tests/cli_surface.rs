//! CLI surface tests: help, version, argument validation, startup errors.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn help_lists_commands_and_flags() {
    cargo_bin_cmd!("hookwatch")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal viewer for webhook events"))
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("--interval-ms"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_flag_works() {
    cargo_bin_cmd!("hookwatch")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hookwatch"));
}

#[test]
fn unknown_flag_is_rejected() {
    cargo_bin_cmd!("hookwatch")
        .arg("--definitely-not-a-flag")
        .assert()
        .failure();
}

#[test]
fn watch_refuses_to_start_without_a_terminal() {
    // stderr is a pipe here, so the viewer must bail instead of drawing
    let home = TempDir::new().unwrap();
    cargo_bin_cmd!("hookwatch")
        .env("HOOKWATCH_HOME", home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs a terminal"));

    // logging was already up when the viewer bailed
    assert!(home.path().join("logs").join("hookwatch.log").exists());
}

#[test]
fn invalid_endpoint_is_a_startup_error() {
    let home = TempDir::new().unwrap();
    cargo_bin_cmd!("hookwatch")
        .env("HOOKWATCH_HOME", home.path())
        .args(["--endpoint", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid endpoint URL"));
}

#[test]
fn endpoint_env_var_is_honored() {
    // a bad value through the env var must fail the same validation
    let home = TempDir::new().unwrap();
    cargo_bin_cmd!("hookwatch")
        .env("HOOKWATCH_HOME", home.path())
        .env("HOOKWATCH_ENDPOINT", "::notaurl::")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid endpoint URL"));
}

#[test]
fn zero_interval_is_rejected() {
    let home = TempDir::new().unwrap();
    cargo_bin_cmd!("hookwatch")
        .env("HOOKWATCH_HOME", home.path())
        .args(["--interval-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("poll interval"));
}

#[test]
fn malformed_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.toml"), "endpoint = [oops\n").unwrap();

    cargo_bin_cmd!("hookwatch")
        .env("HOOKWATCH_HOME", home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("load config"));
}
