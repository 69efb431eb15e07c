//! CUDA Runtime API FFI bindings.
//!
//! Low-level bindings to libcudart. Only the handful of entry points the
//! status check and device synchronization need are declared.

use std::os::raw::c_char;

use super::codes::cudaError_t;

#[link(name = "cudart")]
extern "C" {
    /// Block until the device has completed all preceding requested tasks.
    ///
    /// # Returns
    ///
    /// * `cudaSuccess` once all prior work on the device has retired
    /// * The error of the first failed asynchronous operation otherwise
    ///   (launch failures surface here, not at launch time)
    pub fn cudaDeviceSynchronize() -> cudaError_t;

    /// Return the last error from a runtime call and reset it to `cudaSuccess`.
    pub fn cudaGetLastError() -> cudaError_t;

    /// Return the last error from a runtime call without resetting it.
    pub fn cudaPeekAtLastError() -> cudaError_t;

    /// Get the description string for an error code.
    ///
    /// The returned pointer is a static, null-terminated string owned by the
    /// runtime. Unknown codes yield "unrecognized error code".
    pub fn cudaGetErrorString(error: cudaError_t) -> *const c_char;

    /// Get the enum name for an error code (e.g. `"cudaErrorInvalidValue"`).
    ///
    /// Same ownership rules as [`cudaGetErrorString`].
    pub fn cudaGetErrorName(error: cudaError_t) -> *const c_char;
}
