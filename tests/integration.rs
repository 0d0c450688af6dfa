//! Integration tests for the `hello-bounds` binary.
//!
//! These tests run the built executable and check its exact stdout.

use assert_cmd::Command;
use predicates::prelude::*;

fn hello_bounds() -> Command {
    let mut cmd = Command::cargo_bin("hello-bounds").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

#[test]
fn test_no_argument_greets_world() {
    hello_bounds()
        .assert()
        .success()
        .stdout("Hello, World!\nCopied safely: World\n");
}

#[test]
fn test_named_argument() {
    hello_bounds()
        .arg("Alice")
        .assert()
        .success()
        .stdout("Hello, Alice!\nCopied safely: Alice\n");
}

#[test]
fn test_long_name_is_truncated_to_63_bytes() {
    let name = "x".repeat(100);
    let expected = format!("Hello, {}!\nCopied safely: {}\n", name, "x".repeat(63));

    hello_bounds()
        .arg(&name)
        .assert()
        .success()
        .stdout(expected);
}

// ============================================================================
// EDGE CASES
// ============================================================================

#[test]
fn test_exactly_63_bytes_is_not_truncated() {
    let name = "y".repeat(63);
    let expected = format!("Hello, {0}!\nCopied safely: {0}\n", name);

    hello_bounds().arg(&name).assert().success().stdout(expected);
}

#[test]
fn test_empty_name() {
    hello_bounds()
        .arg("")
        .assert()
        .success()
        .stdout("Hello, !\nCopied safely: \n");
}

#[test]
fn test_hyphen_leading_name() {
    hello_bounds()
        .arg("-o")
        .assert()
        .success()
        .stdout("Hello, -o!\nCopied safely: -o\n");
}

#[test]
fn test_format_specifiers_are_not_interpreted() {
    hello_bounds()
        .arg("%s%n{}")
        .assert()
        .success()
        .stdout("Hello, %s%n{}!\nCopied safely: %s%n{}\n");
}

#[cfg(unix)]
#[test]
fn test_non_utf8_name_is_emitted_verbatim() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let name = OsStr::from_bytes(b"caf\xE9");
    let output = hello_bounds().arg(name).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        b"Hello, caf\xE9!\nCopied safely: caf\xE9\n".to_vec()
    );
}

#[test]
fn test_extra_arguments_are_ignored() {
    hello_bounds()
        .args(["Alice", "Bob", "--verbose"])
        .assert()
        .success()
        .stdout("Hello, Alice!\nCopied safely: Alice\n");
}

#[test]
fn test_help_and_version_spellings_are_greeted() {
    for name in ["-h", "--help", "-V", "--version"] {
        hello_bounds()
            .arg(name)
            .assert()
            .success()
            .stdout(format!("Hello, {0}!\nCopied safely: {0}\n", name));
    }
}

#[test]
fn test_end_of_options_marker_is_greeted() {
    hello_bounds()
        .arg("--")
        .assert()
        .success()
        .stdout("Hello, --!\nCopied safely: --\n");

    hello_bounds()
        .args(["--", "Alice"])
        .assert()
        .success()
        .stdout("Hello, --!\nCopied safely: --\n");
}

// ============================================================================
// AMBIENT BEHAVIOUR
// ============================================================================

#[test]
fn test_logging_goes_to_stderr_only() {
    hello_bounds()
        .env("RUST_LOG", "debug")
        .arg("Alice")
        .assert()
        .success()
        .stdout("Hello, Alice!\nCopied safely: Alice\n")
        .stderr(predicate::str::contains("checked copy complete"));
}
