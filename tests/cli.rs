//! CLI smoke tests for the server binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_routes_and_env_vars() {
    let mut cmd = Command::cargo_bin("listing-forge").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("POST /optimize-title"))
        .stdout(predicate::str::contains("OPENAI_API_KEY"))
        .stdout(predicate::str::contains("PORT"));
}

#[test]
fn short_help_flag_works() {
    let mut cmd = Command::cargo_bin("listing-forge").unwrap();

    cmd.arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Listing Forge"));
}
