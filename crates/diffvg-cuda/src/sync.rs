//! Device-wide synchronization.
//!
//! [`synchronize_device`] is the only blocking primitive in this crate. Once
//! it returns, every kernel launch and asynchronous copy issued before the
//! call has completed, and host code after the call observes their results.

#[cfg(diffvg_cuda_runtime)]
use crate::check::check;

/// Block until all previously issued device work has completed.
///
/// The status of `cudaDeviceSynchronize` goes through [`check()`](crate::check()): an
/// asynchronous failure (e.g. a kernel that faulted) terminates the process,
/// reported at the caller's location. No-op without the runtime.
#[inline]
#[track_caller]
pub fn synchronize_device() {
    #[cfg(diffvg_cuda_runtime)]
    {
        tracing::trace!(target: "diffvg::cuda", "cudaDeviceSynchronize");
        // SAFETY: no arguments; blocks the calling thread until the device is idle
        let status = unsafe { crate::ffi::cuda_runtime::cudaDeviceSynchronize() };
        check(status);
    }
}

/// Like [`synchronize_device`], but hands a failure back instead of exiting.
///
/// # Errors
///
/// `CudaError::RuntimeFailure` with the first asynchronous error raised by the
/// device since the last synchronization.
#[cfg(not(target_arch = "nvptx64"))]
pub fn try_synchronize_device() -> crate::error::CudaResult<()> {
    #[cfg(diffvg_cuda_runtime)]
    {
        tracing::trace!(target: "diffvg::cuda", "cudaDeviceSynchronize (non-fatal)");
        // SAFETY: no arguments; blocks the calling thread until the device is idle
        let status = unsafe { crate::ffi::cuda_runtime::cudaDeviceSynchronize() };
        crate::status::CudaStatus::from(status).into_result()
    }

    #[cfg(not(diffvg_cuda_runtime))]
    {
        Ok(())
    }
}
