//! The outcome of a single CUDA runtime call.

use core::fmt;

use crate::ffi::codes::{
    cudaError_t, known_status, CUDA_SUCCESS, UNRECOGNIZED_DESCRIPTION, UNRECOGNIZED_NAME,
};

/// A `cudaError_t` returned by a CUDA runtime call.
///
/// Transient by intent: hand it to [`crate::check()`] (or call
/// [`CudaStatus::check`]) in the same expression that produced it.
///
/// ```
/// use diffvg_cuda::{check, CudaStatus};
/// check(CudaStatus::SUCCESS);
/// check(0); // raw cudaError_t values convert too
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
#[must_use = "a CUDA status must be checked"]
pub struct CudaStatus(cudaError_t);

impl CudaStatus {
    /// `cudaSuccess`.
    pub const SUCCESS: Self = Self(CUDA_SUCCESS);

    #[inline]
    pub const fn new(code: cudaError_t) -> Self {
        Self(code)
    }

    /// Raw `cudaError_t` value.
    #[inline]
    #[must_use]
    pub const fn code(self) -> cudaError_t {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 == CUDA_SUCCESS
    }

    /// Runtime enum name, e.g. `cudaErrorInvalidValue`.
    #[must_use]
    pub fn name(self) -> &'static str {
        #[cfg(diffvg_cuda_runtime)]
        {
            // SAFETY: cudaGetErrorName accepts any code and returns a static string or null
            let ptr = unsafe { crate::ffi::cuda_runtime::cudaGetErrorName(self.0) };
            if let Some(name) = runtime_str(ptr) {
                return name;
            }
        }
        known_status(self.0).map_or(UNRECOGNIZED_NAME, |(name, _)| name)
    }

    /// Human-readable description, e.g. `invalid argument`.
    #[must_use]
    pub fn description(self) -> &'static str {
        #[cfg(diffvg_cuda_runtime)]
        {
            // SAFETY: cudaGetErrorString accepts any code and returns a static string or null
            let ptr = unsafe { crate::ffi::cuda_runtime::cudaGetErrorString(self.0) };
            if let Some(description) = runtime_str(ptr) {
                return description;
            }
        }
        known_status(self.0).map_or(UNRECOGNIZED_DESCRIPTION, |(_, description)| description)
    }

    /// Convert into a `Result` without terminating.
    ///
    /// This is the recoverable path. Prefer [`CudaStatus::check`] unless the
    /// caller has a real way to handle the failure.
    ///
    /// # Errors
    ///
    /// `CudaError::RuntimeFailure` for any non-success status.
    #[cfg(not(target_arch = "nvptx64"))]
    pub fn into_result(self) -> crate::error::CudaResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(crate::error::CudaError::from_status(self))
        }
    }

    /// Fail fast on a non-success status. See [`crate::check()`].
    #[inline(always)]
    #[track_caller]
    pub fn check(self) {
        crate::check::check(self);
    }
}

impl Default for CudaStatus {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<cudaError_t> for CudaStatus {
    #[inline]
    fn from(code: cudaError_t) -> Self {
        Self(code)
    }
}

impl From<CudaStatus> for cudaError_t {
    #[inline]
    fn from(status: CudaStatus) -> Self {
        status.0
    }
}

impl fmt::Display for CudaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.0, self.description())
    }
}

/// Borrow a runtime-owned, static C string.
#[cfg(diffvg_cuda_runtime)]
fn runtime_str(ptr: *const core::ffi::c_char) -> Option<&'static str> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null pointers from cudaGetError{Name,String} are static and null-terminated
    let c_str = unsafe { core::ffi::CStr::from_ptr(ptr) };
    c_str.to_str().ok()
}
