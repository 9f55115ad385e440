use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("secondserve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("requests"));
}

#[test]
fn test_requests_help_shows_subcommands() {
    cargo_bin_cmd!("secondserve")
        .args(["requests", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("approve"))
        .stdout(predicate::str::contains("reject"))
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn test_food_items_help_shows_subcommands() {
    cargo_bin_cmd!("secondserve")
        .args(["food-items", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("log"));
}

#[test]
fn test_food_items_log_help_shows_condition() {
    cargo_bin_cmd!("secondserve")
        .args(["food-items", "log", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--condition"))
        .stdout(predicate::str::contains("near-expiry"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("secondserve")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0"));
}
