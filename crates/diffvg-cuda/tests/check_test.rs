//! Integration tests for the fail-fast status check.
//!
//! Termination is verified in a subprocess; see `common/mod.rs`.
//!
//! # Running
//!
//! ```bash
//! # Without the runtime: checks must accept every status
//! cargo test -p diffvg-cuda
//!
//! # With the runtime: failures must print a diagnostic and exit 1
//! cargo test -p diffvg-cuda --features cuda
//! ```

mod common;

use diffvg_cuda::ffi::{CUDA_ERROR_INVALID_VALUE, CUDA_ERROR_MEMORY_ALLOCATION};
use diffvg_cuda::{check, CudaStatus, FAILURE_EXIT_CODE, RUNTIME_LINKED};

// ============================================================================
// CHILD PROCESSES (no-ops unless spawned by the harness)
// ============================================================================

#[test]
fn child_check_failure() {
    if !common::is_child("child_check_failure") {
        return;
    }
    common::init_child_logging();

    println!("{}{}:{}", common::LOCATION_PREFIX, file!(), line!() + 1);
    check(CUDA_ERROR_INVALID_VALUE);

    println!("check returned");
}

#[test]
fn child_check_method_failure() {
    if !common::is_child("child_check_method_failure") {
        return;
    }

    println!("{}{}:{}", common::LOCATION_PREFIX, file!(), line!() + 1);
    CudaStatus::new(CUDA_ERROR_MEMORY_ALLOCATION).check();

    println!("check returned");
}

#[test]
fn child_check_success() {
    if !common::is_child("child_check_success") {
        return;
    }

    check(CudaStatus::SUCCESS);
    println!("check returned");
}

// ============================================================================
// IN-PROCESS
// ============================================================================

#[test]
fn test_check_success_has_no_effect() {
    check(CudaStatus::SUCCESS);
    check(0);
    CudaStatus::SUCCESS.check();
}

#[test]
fn test_check_is_a_single_expression() {
    fn fake_runtime_call() -> i32 {
        0
    }
    let () = check(fake_runtime_call());
}

#[test]
fn test_location_found_after_libtest_prefix() {
    let stdout = "\nrunning 1 test\n\
                  test child_check_failure ... expected-location tests/check_test.rs:32\n";
    assert_eq!(
        common::find_location(stdout),
        Some("tests/check_test.rs:32")
    );
}

#[test]
fn test_location_found_on_own_line() {
    let stdout = "expected-location src/lib.rs:7\nok\n";
    assert_eq!(common::find_location(stdout), Some("src/lib.rs:7"));
    assert_eq!(common::find_location("running 1 test\n"), None);
}

// ============================================================================
// SUBPROCESS
// ============================================================================

#[test]
fn test_check_success_in_subprocess() {
    let out = common::run_child("child_check_success", &[]);
    assert!(out.status.success(), "child failed: {:?}\n{}", out.status, out.stderr);
    assert!(out.stdout.contains("check returned"), "stdout: {}", out.stdout);
    assert!(!out.stderr.contains("CUDA Runtime Error"), "stderr: {}", out.stderr);
}

#[test]
fn test_check_failure_in_subprocess() {
    let out = common::run_child("child_check_failure", &[]);

    if !RUNTIME_LINKED {
        // No runtime, nothing to interpret: the status is discarded
        assert!(out.status.success(), "child failed: {:?}\n{}", out.status, out.stderr);
        assert!(out.stdout.contains("check returned"), "stdout: {}", out.stdout);
        assert!(!out.stderr.contains("CUDA Runtime Error"), "stderr: {}", out.stderr);
        return;
    }

    assert_eq!(
        out.status.code(),
        Some(FAILURE_EXIT_CODE),
        "child should exit with {}\nstderr: {}",
        FAILURE_EXIT_CODE,
        out.stderr
    );
    assert!(!out.stdout.contains("check returned"), "check must not return on failure");

    let location = out
        .expected_location()
        .expect("child should announce the failing location");
    let diagnostic = format!("CUDA Runtime Error: invalid argument at {}", location);
    assert!(
        out.stderr.contains(&diagnostic),
        "missing diagnostic `{}` in stderr:\n{}",
        diagnostic,
        out.stderr
    );
    assert!(location.contains("check_test.rs"), "location: {}", location);

    // Structured event from tracing, emitted before exiting
    assert!(out.stderr.contains("diffvg::cuda"), "stderr: {}", out.stderr);
}

#[test]
fn test_check_method_reports_caller_location() {
    let out = common::run_child("child_check_method_failure", &[]);

    if !RUNTIME_LINKED {
        assert!(out.status.success(), "child failed: {:?}\n{}", out.status, out.stderr);
        return;
    }

    assert_eq!(out.status.code(), Some(FAILURE_EXIT_CODE), "stderr: {}", out.stderr);
    let location = out
        .expected_location()
        .expect("child should announce the failing location");
    assert!(
        out.stderr.contains(&format!("out of memory at {}", location)),
        "expected caller location {} in stderr:\n{}",
        location,
        out.stderr
    );
}
