//! Custom cargo commands for the hello-bounds crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask kani      - Run Kani proofs (incl. the expected-failure harness)
//!   cargo xtask check     - Quick check (no Kani, no fuzzing)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Harness that must fail: it drives the unchecked copy out of bounds.
const OVERFLOW_HARNESS: &str = "detect_unsafe_copy_overflow";

/// Prefix shared by every harness that must pass.
const PASSING_HARNESS_PREFIX: &str = "verify_";

/// Kani's verdict line for a harness with a failing check.
const KANI_FAILED: &str = "VERIFICATION:- FAILED";

/// Kani's description of an out-of-bounds pointer access.
const KANI_OUT_OF_BOUNDS: &str = "dereference failure";

/// Default fuzzing time per target, in seconds.
const FUZZ_SECONDS: u32 = 30;

const FUZZ_TARGETS: &[&str] = &["checked_copy", "greeting_output"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("kani") => kani()?,
        Some("check") => check()?,
        Some("fuzz") => fuzz()?,
        Some("miri") => miri()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + Kani + proof sync)
  test      Run all Rust tests
  kani      Run Kani proofs; the overflow harness must FAIL
  check     Quick check (cargo test + clippy, no Kani)
  fuzz      Run each fuzz target for {FUZZ_SECONDS}s (nightly + cargo-fuzz)
  miri      Run unit tests under Miri (nightly)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("hello-bounds Verification Suite");
    println!("==========================================\n");

    // Step 1: Check invariant markers
    println!("[1/5] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    // Step 2: Run tests
    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Clippy
    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 4: Proof copy in sync with the crate
    println!("[4/5] Verifying kani-proofs copy matches src/copy...");
    verify_proof_sync()?;
    println!("✓ Copies in sync\n");

    // Step 5: Kani
    println!("[5/5] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs behave as expected\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Run Kani proofs.
///
/// Passing harnesses must pass; the overflow harness must fail.
fn kani() -> Result<()> {
    let kani_dir = project_root()?.join("kani-proofs");
    if !kani_dir.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }

    let status = Command::new("cargo")
        .args(["kani", "--harness", PASSING_HARNESS_PREFIX])
        .current_dir(&kani_dir)
        .status()
        .context("Failed to run cargo kani (is kani-verifier installed?)")?;

    if !status.success() {
        bail!("Kani proofs failed");
    }

    println!("  Running {OVERFLOW_HARNESS} (must fail)...");
    let output = Command::new("cargo")
        .args(["kani", "--harness", OVERFLOW_HARNESS])
        .current_dir(&kani_dir)
        .output()
        .context("Failed to run cargo kani")?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    print!("{stdout}");

    if output.status.success() {
        bail!(
            "{} passed: unsafe_copy no longer overflows, the defect is gone",
            OVERFLOW_HARNESS
        );
    }
    if !overflow_detected(&stdout) {
        eprint!("{}", String::from_utf8_lossy(&output.stderr));
        bail!(
            "{} failed without reporting an out-of-bounds write",
            OVERFLOW_HARNESS
        );
    }
    println!("  ✓ Out-of-bounds write detected");

    Ok(())
}

/// Whether Kani's report shows the harness failing on an out-of-bounds access,
/// as opposed to failing to build or failing some unrelated check.
fn overflow_detected(report: &str) -> bool {
    report.contains(KANI_FAILED) && report.contains(KANI_OUT_OF_BOUNDS)
}

/// Quick check (no Kani)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run every fuzz target for a fixed time
fn fuzz() -> Result<()> {
    let max_time = format!("-max_total_time={FUZZ_SECONDS}");
    for target in FUZZ_TARGETS {
        println!("Fuzzing {target} for {FUZZ_SECONDS}s...");
        run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }
    Ok(())
}

/// Run the library's unit tests under Miri
fn miri() -> Result<()> {
    run_cargo(&["+nightly", "miri", "test", "--lib"])
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 4 {
        bail!(
            "Expected at least 4 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

/// Lines that carry the copy semantics. Each must appear verbatim in both the
/// crate and the standalone Kani copy, or the proofs are about stale code.
const CHECKED_COPY_LINES: &[&str] = &[
    "let copied = src.len().min(limit);",
    "dest[..copied].copy_from_slice(&src[..copied]);",
    "dest[copied..limit].fill(NUL);",
    "dest[limit] = NUL;",
];

const UNCHECKED_COPY_LINES: &[&str] = &[
    "let byte = unsafe { from.read() };",
    "unsafe { to.write(byte) };",
    "if byte == NUL {",
];

fn verify_proof_sync() -> Result<()> {
    let root = project_root()?;

    let proofs_path = root.join("kani-proofs/src/lib.rs");
    if !proofs_path.exists() {
        println!("  (no kani-proofs/src/lib.rs, skipping sync check)");
        return Ok(());
    }
    let proofs = read(&proofs_path)?;

    let checked = read(&root.join("src/copy/checked.rs"))?;
    let unchecked = read(&root.join("src/copy/unchecked.rs"))?;

    let mut missing = Vec::new();
    for (source, name, lines) in [
        (&checked, "src/copy/checked.rs", CHECKED_COPY_LINES),
        (&unchecked, "src/copy/unchecked.rs", UNCHECKED_COPY_LINES),
    ] {
        for line in lines {
            if !contains_line(source, line) {
                missing.push(format!("{name}: `{line}`"));
            }
            if !contains_line(&proofs, line) {
                missing.push(format!("kani-proofs/src/lib.rs: `{line}`"));
            }
        }
    }

    if !missing.is_empty() {
        bail!(
            "Kani proof copy has drifted from the crate. Missing:\n  {}",
            missing.join("\n  ")
        );
    }

    Ok(())
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn contains_line(content: &str, needle: &str) -> bool {
    content.lines().any(|line| line.trim() == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERFLOW_REPORT: &str = "\
Check 12: unsafe_copy.pointer_dereference.2
\t - Status: FAILURE
\t - Description: \"dereference failure: pointer outside object bounds\"

SUMMARY:
 ** 1 of 40 failed
Failed Checks: dereference failure: pointer outside object bounds

VERIFICATION:- FAILED
";

    #[test]
    fn test_overflow_report_is_detected() {
        assert!(overflow_detected(OVERFLOW_REPORT));
    }

    #[test]
    fn test_passing_harness_is_not_detection() {
        let report = "SUMMARY:\n ** 0 of 40 failed\n\nVERIFICATION:- SUCCESSFUL\n";
        assert!(!overflow_detected(report));
    }

    #[test]
    fn test_unrelated_failure_is_not_detection() {
        let report = "Failed Checks: assertion failed: x == 1\n\nVERIFICATION:- FAILED\n";
        assert!(!overflow_detected(report));
    }

    #[test]
    fn test_build_failure_is_not_detection() {
        let report = "error[E0425]: cannot find function `unsafe_copy` in this scope\n";
        assert!(!overflow_detected(report));
    }
}
