//! Tests for the braillify binary.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn braillify() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_braillify"));
    command.env_remove("BRAILLIFY_CONFIG").env_remove("RUST_LOG");
    command
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

#[test]
fn test_converts_file_to_stdout_with_newline() {
    let fixtures = FixtureDir::new();
    let path = fixtures.write_image("checker.png", &checkerboard(4, 8));

    let output = braillify().arg(&path).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\u{28FF}\u{2800}\n\u{2800}\u{28FF}\n");
}

#[test]
fn test_output_file_has_no_trailing_newline() {
    let fixtures = FixtureDir::new();
    let input = fixtures.write_image("black.png", &solid(4, 4, BLACK));
    let out = fixtures.path().join("art.txt");

    let output = braillify().arg(&input).arg("-o").arg(&out).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "\u{28FF}\u{28FF}");
}

#[test]
fn test_reads_stdin() {
    let mut child = braillify()
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(&png_bytes(&solid(2, 4, BLACK)))
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\u{28FF}\n");
}

#[test]
fn test_flags_override_config_file() {
    let fixtures = FixtureDir::new();
    let input = fixtures.write_image("white.png", &solid(2, 4, WHITE));
    let config = fixtures.write_text("config.yaml", "tolerance: 0.2\ncolor_method: html\n");

    // From the file alone: white is excluded, blank cell, no markup.
    let output = braillify().arg(&input).arg("--config").arg(&config).output().unwrap();
    assert_eq!(stdout_of(&output), "\u{2800}\n");

    // -i inverts, -c overrides the file's color method.
    let output = braillify()
        .arg(&input)
        .args(["--config"])
        .arg(&config)
        .args(["-i", "-c", "truecolor"])
        .output()
        .unwrap();
    assert_eq!(
        stdout_of(&output),
        "\x1b[38;2;255;255;255m\u{28FF}\x1b[0m\n"
    );
}

#[test]
fn test_config_from_environment() {
    let fixtures = FixtureDir::new();
    let input = fixtures.write_image("white.png", &solid(2, 4, WHITE));
    let config = fixtures.write_text("env.yaml", "invert: true\n");

    let output = braillify()
        .arg(&input)
        .env("BRAILLIFY_CONFIG", &config)
        .output()
        .unwrap();
    assert_eq!(stdout_of(&output), "\u{28FF}\n");
}

#[test]
fn test_method_shorthand() {
    let fixtures = FixtureDir::new();
    let input = fixtures.write_image("gray.png", &solid(2, 4, image::Rgba([150, 150, 150, 255])));

    // "v" is value: max band 150/255 ~ 0.59, not below 0.5.
    let output = braillify().arg(&input).args(["-m", "v"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\u{2800}\n");
}

#[test]
fn test_invalid_tolerance_fails() {
    let fixtures = FixtureDir::new();
    let input = fixtures.write_image("black.png", &solid(2, 4, BLACK));

    let output = braillify().arg(&input).args(["-t", "1.5"]).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("outside of range"), "{stderr}");
}

#[test]
fn test_zero_limit_fails() {
    let fixtures = FixtureDir::new();
    let input = fixtures.write_image("black.png", &solid(2, 4, BLACK));

    let output = braillify().arg(&input).args(["-l", "0"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid character limit"), "{stderr}");
}

#[test]
fn test_unknown_color_method_rejected() {
    let output = braillify()
        .args(["-c", "sepia", "whatever.png"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sepia"), "{stderr}");
}

#[test]
fn test_missing_input_fails() {
    let fixtures = FixtureDir::new();
    let output = braillify()
        .arg(fixtures.path().join("missing.png"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to convert"), "{stderr}");
}
