//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tiny_skia::Pixmap;

/// A localkit invocation with a clean, English, non-interactive environment
/// whose state directory lives under the given home.
fn localkit(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("localkit").unwrap();
    cmd.env("HOME", home)
        .env("LANG", "en_US.UTF-8")
        .env("NO_COLOR", "1")
        .env_remove("LC_ALL")
        .env_remove("LOCALKIT_LANG");
    cmd
}

#[test]
fn list_shows_every_tool_and_the_app_name() {
    let home = tempfile::tempdir().unwrap();
    localkit(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local Tools"))
        .stdout(predicate::str::contains("grayscale"))
        .stdout(predicate::str::contains("invert"))
        .stdout(predicate::str::contains("resize"))
        .stdout(predicate::str::contains("rotate"));
}

#[test]
fn list_without_subcommand_is_the_default() {
    let home = tempfile::tempdir().unwrap();
    localkit(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("grayscale"));
}

#[test]
fn lang_flag_switches_the_interface_language() {
    let home = tempfile::tempdir().unwrap();
    localkit(home.path())
        .args(["--lang", "zh", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("本地工具箱"));
}

#[test]
fn check_passes_on_a_real_host_and_names_each_capability() {
    let home = tempfile::tempdir().unwrap();
    localkit(home.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("canvas"))
        .stdout(predicate::str::contains("arrayBuffer"))
        .stdout(predicate::str::contains("imageData"));
}

#[test]
fn check_json_emits_a_machine_readable_verdict() {
    let home = tempfile::tempdir().unwrap();
    let output = localkit(home.path())
        .args(["check", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let verdict: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(verdict["supported"], true);
    assert!(verdict["missing"].as_array().unwrap().is_empty());
}

#[test]
fn run_applies_a_tool_and_writes_the_output() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("in.png");
    let output = home.path().join("out.png");
    Pixmap::new(4, 4).unwrap().save_png(&input).unwrap();

    localkit(home.path())
        .args(["run", "grayscale"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("processed locally"));

    assert!(output.exists());
    let result = Pixmap::load_png(&output).unwrap();
    assert_eq!((result.width(), result.height()), (4, 4));
}

#[test]
fn run_resize_honors_the_requested_dimensions() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("in.png");
    let output = home.path().join("out.png");
    Pixmap::new(10, 10).unwrap().save_png(&input).unwrap();

    localkit(home.path())
        .args(["run", "resize"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--width", "5"])
        .assert()
        .success();

    let result = Pixmap::load_png(&output).unwrap();
    assert_eq!((result.width(), result.height()), (5, 5));
}

#[test]
fn unknown_tool_exits_with_usage_code() {
    let home = tempfile::tempdir().unwrap();
    localkit(home.path())
        .args(["run", "sharpen", "in.png", "-o", "out.png"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("sharpen"));
}

#[test]
fn invalid_tool_arguments_are_an_error() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("in.png");
    Pixmap::new(4, 4).unwrap().save_png(&input).unwrap();

    localkit(home.path())
        .args(["run", "rotate"])
        .arg(&input)
        .arg("-o")
        .arg(home.path().join("out.png"))
        .args(["--angle", "45"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("multiple of 90"));
}

#[test]
fn config_persists_the_language_preference() {
    let home = tempfile::tempdir().unwrap();

    localkit(home.path())
        .args(["config", "--language", "ja"])
        .assert()
        .success();

    localkit(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ローカルツール"));
}

#[test]
fn config_rejects_an_unknown_language() {
    let home = tempfile::tempdir().unwrap();
    localkit(home.path())
        .args(["config", "--language", "tlh"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Supported:"));
}

#[test]
fn completions_cover_the_binary_name() {
    let home = tempfile::tempdir().unwrap();
    localkit(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("localkit"));
}
