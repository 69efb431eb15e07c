//! Error types for CUDA runtime calls.
//!
//! There is exactly one failure kind: a non-success status from the CUDA
//! runtime. Most call sites never see this type because [`crate::check()`]
//! terminates the process instead. It exists for the explicit, non-fatal
//! entry points ([`crate::CudaStatus::into_result`],
//! [`crate::try_synchronize_device`]).

use thiserror::Error;

use crate::status::CudaStatus;

/// Result type alias for CUDA runtime operations.
pub type CudaResult<T> = Result<T, CudaError>;

/// CUDA runtime error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CudaError {
    /// A CUDA runtime call returned a non-success status.
    #[error("CUDA Runtime Error: {description} ({name}, code {code})")]
    RuntimeFailure {
        /// Raw `cudaError_t` value.
        code: i32,
        /// Runtime enum name, e.g. `cudaErrorInvalidValue`.
        name: &'static str,
        /// Runtime description, e.g. `invalid argument`.
        description: &'static str,
    },
}

impl CudaError {
    /// Build the error for a failed status.
    ///
    /// Name and description come from the runtime when it is linked, from
    /// the known-status table otherwise.
    #[must_use]
    pub fn from_status(status: CudaStatus) -> Self {
        Self::RuntimeFailure {
            code: status.code(),
            name: status.name(),
            description: status.description(),
        }
    }

    /// The status that produced this error.
    #[must_use]
    pub fn status(&self) -> CudaStatus {
        match self {
            Self::RuntimeFailure { code, .. } => CudaStatus::new(*code),
        }
    }

    /// Human-readable description reported by the runtime.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::RuntimeFailure { description, .. } => *description,
        }
    }
}
