//! Fail-fast checking of CUDA runtime statuses.
//!
//! A failed runtime call at this layer (out of memory, bad launch
//! configuration, driver fault) is unrecoverable: there is no channel to
//! propagate it back through the numeric kernels. [`check`] therefore prints a
//! single diagnostic line and exits the process.
//!
//! When the runtime is not bound into this build (see `build.rs`) there is no
//! runtime to define success, and [`check`] discards its argument unexamined.
//! Code built that way must not rely on `check` to catch anything.
//!
//! # Example
//!
//! ```ignore
//! use diffvg_cuda::{check, ffi};
//!
//! check(unsafe { ffi::cudaDeviceSynchronize() });
//! ```

#[cfg(not(target_arch = "nvptx64"))]
use std::panic::Location;

use crate::status::CudaStatus;

#[cfg(not(target_arch = "nvptx64"))]
use crate::error::CudaError;

/// Exit code of a process terminated by a failed check.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Check the status of a CUDA runtime call; terminate the process on failure.
///
/// With the runtime bound: a non-success status writes
/// `CUDA Runtime Error: <description> at <file>:<line>` to stderr, where the
/// location is the caller of `check`, then exits with [`FAILURE_EXIT_CODE`].
/// Success returns with no effect.
///
/// Without the runtime: the status is dropped without inspection.
#[inline(always)]
#[track_caller]
pub fn check<S: Into<CudaStatus>>(status: S) {
    #[cfg(diffvg_cuda_runtime)]
    {
        let status = status.into();
        if !status.is_success() {
            fail_fast(CudaError::from_status(status), Location::caller());
        }
    }

    #[cfg(not(diffvg_cuda_runtime))]
    {
        let _ = status;
    }
}

/// Check the error left behind by the most recent kernel launch.
///
/// Launches report configuration errors through `cudaGetLastError` rather
/// than a return value; call this right after a launch. The error is cleared.
/// No-op without the runtime.
#[inline]
#[track_caller]
pub fn check_last_launch() {
    #[cfg(diffvg_cuda_runtime)]
    {
        // SAFETY: no arguments; reads and resets the thread's last runtime error
        let status = unsafe { crate::ffi::cuda_runtime::cudaGetLastError() };
        check(status);
    }
}

/// Like [`check_last_launch`], but leaves the error in place.
///
/// Useful when a later [`check_last_launch`] or `synchronize_device` should
/// still observe the same failure. No-op without the runtime.
#[inline]
#[track_caller]
pub fn peek_last_launch() {
    #[cfg(diffvg_cuda_runtime)]
    {
        // SAFETY: no arguments; reads the thread's last runtime error without resetting it
        let status = unsafe { crate::ffi::cuda_runtime::cudaPeekAtLastError() };
        check(status);
    }
}

/// Report a runtime failure and exit the process.
///
/// This is the only way diffvg-cuda terminates. No unwinding happens: no
/// destructors run and nothing can catch it.
#[cfg(not(target_arch = "nvptx64"))]
#[cold]
#[inline(never)]
pub fn fail_fast(error: CudaError, location: &Location<'_>) -> ! {
    tracing::error!(
        target: "diffvg::cuda",
        code = error.status().code(),
        name = error.status().name(),
        file = location.file(),
        line = location.line(),
        "{}",
        error
    );

    eprintln!(
        "CUDA Runtime Error: {} at {}:{}",
        error.description(),
        location.file(),
        location.line()
    );

    std::process::exit(FAILURE_EXIT_CODE)
}
