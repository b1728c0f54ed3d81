//! End-to-end tests of the minish binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn minish() -> Command {
    Command::cargo_bin("minish").unwrap()
}

#[test]
fn version_flag_prints_version() {
    minish()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("minish"));
}

#[test]
fn help_flag_lists_builtins() {
    minish()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("alias"))
        .stdout(predicate::str::contains("history"));
}

#[test]
fn dash_c_runs_a_single_command() {
    minish()
        .args(["-c", "echo one-shot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("one-shot"));
}

#[test]
fn dash_c_propagates_the_exit_code() {
    // "exit 5" is not the exact "exit" built-in, so the interpreter runs it
    minish().args(["-c", "exit 5"]).assert().code(5);
}

#[test]
fn dash_c_without_command_fails() {
    minish()
        .arg("-c")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a command"));
}

#[test]
fn invalid_history_reference_is_reported() {
    minish()
        .args(["-c", "!nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid command number"));
}

#[test]
fn session_defines_and_lists_aliases() {
    minish()
        .write_stdin("alias gs=git status\nalias\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("gs=git status"));
}

#[test]
fn session_replays_history_references() {
    minish()
        .write_stdin("echo replayed\n!1\nhistory\nexit\n")
        .assert()
        .success()
        // two executions plus the one "2 echo replayed" listing line
        .stdout(predicate::str::contains("replayed").count(3))
        // "!1" never entered history, so the listing shows two entries:
        // "1 history" and "2 echo replayed"
        .stdout(predicate::str::contains("1 history"))
        .stdout(predicate::str::contains("!1").not());
}

#[test]
fn malformed_alias_is_reported_and_nonfatal() {
    minish()
        .write_stdin("alias bad\nalias\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid alias command"));
}
