//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `numlab` binary to verify that
//! argument parsing, lesson selection, failure reporting, and figure
//! output work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("numlab").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("numlab"));
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_names_every_lesson() {
    cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("intro"))
        .stdout(predicate::str::contains("arrays"))
        .stdout(predicate::str::contains("frames"))
        .stdout(predicate::str::contains("plotting"));
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[test]
fn run_intro_shows_snippets_and_survives_failures() {
    cmd()
        .args(["run", "--lesson", "intro"])
        .assert()
        .success()
        .stdout(predicate::str::contains(">>> 2 + 2"))
        .stdout(predicate::str::contains("error: ArithmeticError"))
        .stdout(predicate::str::contains("error: TypeMismatch"))
        .stdout(predicate::str::contains("snippets evaluated"));
}

#[test]
fn run_accepts_multiple_lessons() {
    cmd()
        .args(["run", "--lesson", "intro", "--lesson", "arrays"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== lesson: intro =="))
        .stdout(predicate::str::contains("== lesson: arrays =="));
}

#[test]
fn run_rejects_an_unknown_lesson() {
    cmd()
        .args(["run", "--lesson", "calculus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown lesson"));
}

#[test]
fn quiet_source_drops_the_echo() {
    cmd()
        .args(["run", "--lesson", "arrays", "--quiet-source"])
        .assert()
        .success()
        .stdout(predicate::str::contains(">>>").not());
}

#[test]
fn halt_on_error_cuts_the_run_short() {
    cmd()
        .args(["run", "--lesson", "intro", "--halt-on-error"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 failed"));
}

#[test]
fn plot_out_writes_the_figure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("figure.html");
    cmd()
        .args(["run", "--lesson", "plotting", "--plot-out"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists(), "figure file was not written");
}

#[test]
fn config_file_controls_the_runner() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("runner.json");
    std::fs::write(&config, "{\"echo_source\": false}").unwrap();
    cmd()
        .args(["run", "--lesson", "intro", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(">>>").not());
}

#[test]
fn unreadable_config_is_an_error() {
    cmd()
        .args(["run", "--lesson", "intro", "--config", "/no/such/config.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}
