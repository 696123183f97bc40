use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn typedump() -> Command {
    Command::cargo_bin("typedump").unwrap()
}

#[test]
fn test_help_lists_flags() {
    typedump()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-border"))
        .stdout(predicate::str::contains("--indent <INDENT>"))
        .stdout(predicate::str::contains("--print-config"));
}

#[test]
fn test_unknown_log_level_is_rejected() {
    typedump()
        .args(["--log-level", "loud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'loud'"));
}
