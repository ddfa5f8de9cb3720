//! Runs the `parcelsort` binary end to end.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn parcelsort(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_parcelsort"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .arg("-q")
        .args(args)
        .output()
        .unwrap()
}

fn last_stdout_line(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .last()
        .unwrap_or("")
        .to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn classify_prints_category() {
    let dir = tempfile::tempdir().unwrap();
    let output = parcelsort(dir.path(), &["classify", "10", "10", "10", "0"]);
    assert!(output.status.success());
    assert_eq!(last_stdout_line(&output), "STANDARD");
}

#[test]
fn classify_strict_refuses_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = parcelsort(dir.path(), &["classify", "10", "10", "10", "0", "--strict"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Please enter valid positive numbers"));
}

#[test]
fn classify_strict_parses_leniently() {
    let dir = tempfile::tempdir().unwrap();
    let output = parcelsort(dir.path(), &["classify", "--strict", "200cm", "50", "50", "15"]);
    assert!(output.status.success());
    assert_eq!(last_stdout_line(&output), "SPECIAL");
}

#[test]
fn classify_plain_requires_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let output = parcelsort(dir.path(), &["classify", "200cm", "50", "50", "15"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("width must be a number"));
}

#[test]
fn classify_negative_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = parcelsort(dir.path(), &["classify", "--", "-1", "10", "10", "5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid input: width is negative"));
}

#[test]
fn samples_without_config_use_builtin_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let output = parcelsort(dir.path(), &["samples"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Standard Package: STANDARD"));
    assert!(stdout.contains("Rejected Package (Both Bulky & Heavy): REJECTED"));
}

#[test]
fn malformed_default_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("parcelsort.toml"),
        "[[samples]]\ndescription = \"A\"\nwidth = \"oops\"\nheight = 1\nlength = 1\nmass = 1\n",
    )
    .unwrap();

    let output = parcelsort(dir.path(), &["samples"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("TOML parse error"));
}

#[test]
fn duplicate_descriptions_in_default_config_are_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let sample = "[[samples]]\ndescription = \"A\"\nwidth = 1\nheight = 1\nlength = 1\nmass = 1\n";
    fs::write(dir.path().join("parcelsort.toml"), format!("{sample}{sample}")).unwrap();

    let output = parcelsort(dir.path(), &["samples"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("duplicate sample description 'A'"));
}

#[test]
fn samples_mismatch_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        "[[samples]]\ndescription = \"Heavy\"\nwidth = 1\nheight = 1\nlength = 1\nmass = 30\nexpected = \"STANDARD\"\n",
    )
    .unwrap();

    let output = parcelsort(dir.path(), &["--config", path.to_str().unwrap(), "samples"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Heavy: SPECIAL (expected STANDARD)"));
    assert!(stderr(&output).contains("1 of 1 samples failed"));
}
