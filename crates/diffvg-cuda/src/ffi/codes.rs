//! CUDA runtime status codes (`cudaError_t`).
//!
//! Values are taken from `driver_types.h` and must not change. The table
//! carries the runtime's own names and descriptions for the codes diffvg
//! kernels actually run into, for builds where `cudaGetErrorString` is not
//! linked.

/// CUDA runtime result code. 0 = success, non-zero = error.
#[allow(non_camel_case_types)]
pub type cudaError_t = i32;

/// The API call returned with no errors.
pub const CUDA_SUCCESS: cudaError_t = 0;

/// One or more parameters passed to the API call are out of range.
pub const CUDA_ERROR_INVALID_VALUE: cudaError_t = 1;

/// The runtime could not allocate enough device memory.
pub const CUDA_ERROR_MEMORY_ALLOCATION: cudaError_t = 2;

/// The runtime could not be initialized.
pub const CUDA_ERROR_INITIALIZATION_ERROR: cudaError_t = 3;

/// Launch requested more resources than the device can supply.
pub const CUDA_ERROR_INVALID_CONFIGURATION: cudaError_t = 9;

/// The installed driver is older than the runtime.
pub const CUDA_ERROR_INSUFFICIENT_DRIVER: cudaError_t = 35;

/// The kernel image is not compiled for this device.
pub const CUDA_ERROR_INVALID_DEVICE_FUNCTION: cudaError_t = 98;

/// No CUDA-capable device is visible to the process.
pub const CUDA_ERROR_NO_DEVICE: cudaError_t = 100;

/// Invalid device ordinal.
pub const CUDA_ERROR_INVALID_DEVICE: cudaError_t = 101;

/// A kernel dereferenced an invalid address. Sticky: the context is unusable.
pub const CUDA_ERROR_ILLEGAL_ADDRESS: cudaError_t = 700;

/// A kernel faulted for an unspecified reason. Sticky.
pub const CUDA_ERROR_LAUNCH_FAILURE: cudaError_t = 719;

/// Unknown internal error.
pub const CUDA_ERROR_UNKNOWN: cudaError_t = 999;

/// Name reported for codes missing from [`KNOWN_STATUSES`].
pub const UNRECOGNIZED_NAME: &str = "cudaErrorUnrecognized";

/// Description reported for codes missing from [`KNOWN_STATUSES`].
pub const UNRECOGNIZED_DESCRIPTION: &str = "unrecognized error code";

/// `(code, name, description)` as reported by the CUDA runtime.
pub const KNOWN_STATUSES: &[(cudaError_t, &str, &str)] = &[
    (CUDA_SUCCESS, "cudaSuccess", "no error"),
    (CUDA_ERROR_INVALID_VALUE, "cudaErrorInvalidValue", "invalid argument"),
    (CUDA_ERROR_MEMORY_ALLOCATION, "cudaErrorMemoryAllocation", "out of memory"),
    (
        CUDA_ERROR_INITIALIZATION_ERROR,
        "cudaErrorInitializationError",
        "initialization error",
    ),
    (
        CUDA_ERROR_INVALID_CONFIGURATION,
        "cudaErrorInvalidConfiguration",
        "invalid configuration argument",
    ),
    (
        CUDA_ERROR_INSUFFICIENT_DRIVER,
        "cudaErrorInsufficientDriver",
        "CUDA driver version is insufficient for CUDA runtime version",
    ),
    (
        CUDA_ERROR_INVALID_DEVICE_FUNCTION,
        "cudaErrorInvalidDeviceFunction",
        "invalid device function",
    ),
    (
        CUDA_ERROR_NO_DEVICE,
        "cudaErrorNoDevice",
        "no CUDA-capable device is detected",
    ),
    (CUDA_ERROR_INVALID_DEVICE, "cudaErrorInvalidDevice", "invalid device ordinal"),
    (
        CUDA_ERROR_ILLEGAL_ADDRESS,
        "cudaErrorIllegalAddress",
        "an illegal memory access was encountered",
    ),
    (
        CUDA_ERROR_LAUNCH_FAILURE,
        "cudaErrorLaunchFailure",
        "unspecified launch failure",
    ),
    (CUDA_ERROR_UNKNOWN, "cudaErrorUnknown", "unknown error"),
];

/// Look up a code in [`KNOWN_STATUSES`].
///
/// # Example
///
/// ```
/// use diffvg_cuda::ffi::{known_status, CUDA_ERROR_NO_DEVICE};
/// let (name, _) = known_status(CUDA_ERROR_NO_DEVICE).unwrap();
/// assert_eq!(name, "cudaErrorNoDevice");
/// assert!(known_status(12345).is_none());
/// ```
#[must_use]
pub fn known_status(code: cudaError_t) -> Option<(&'static str, &'static str)> {
    KNOWN_STATUSES
        .iter()
        .find(|(known, _, _)| *known == code)
        .map(|&(_, name, description)| (name, description))
}
