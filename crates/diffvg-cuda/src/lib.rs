#![cfg_attr(target_arch = "nvptx64", no_std)]
#![deny(deprecated)]

//! Host/accelerator primitives shared by the diffvg geometry and rendering
//! kernels.
//!
//! This crate provides:
//! - [`check()`]: fail-fast checking of CUDA runtime statuses
//! - [`infinity()`]: IEEE-754 `+inf` that is bit-identical on host and device
//! - [`synchronize_device()`]: block until all outstanding device work retires
//! - [`capability`]: compile-time host/device and runtime-binding flags
//!
//! # Feature Flags
//!
//! - `cuda`: Bind the CUDA runtime (libcudart). Without it, or when vetoed
//!   at build time with `DIFFVG_CUDA=0` / `DIFFVG_NO_CUDA_RUNTIME`, status
//!   checks and synchronization compile to nothing.
//! - `half`: [`Infinity`] for `half::f16` and `half::bf16`.
//!
//! # Device Builds
//!
//! On `nvptx64` targets the crate is `no_std`. Only the infinity resolver and
//! the capability constants do real work there; `check` and
//! `synchronize_device` remain callable as no-ops so shared code compiles
//! unchanged for both targets.
//!
//! # Example
//!
//! ```
//! use diffvg_cuda::{check, infinity, synchronize_device, CudaStatus};
//!
//! let mut closest = infinity::<f32>();
//! for d in [4.0_f32, 2.5, 7.0] {
//!     closest = closest.min(d);
//! }
//! assert_eq!(closest, 2.5);
//!
//! check(CudaStatus::SUCCESS);
//! synchronize_device();
//! ```

pub mod capability;
pub mod check;
#[cfg(not(target_arch = "nvptx64"))]
pub mod error;
pub mod ffi;
pub mod infinity;
pub mod status;
pub mod sync;

pub use capability::{
    Capabilities, CompilationContext, COMPILING_FOR_DEVICE, RUNTIME_LINKED,
};
#[cfg(not(target_arch = "nvptx64"))]
pub use capability::log_capabilities;
pub use check::{check, check_last_launch, peek_last_launch, FAILURE_EXIT_CODE};
#[cfg(not(target_arch = "nvptx64"))]
pub use check::fail_fast;
#[cfg(not(target_arch = "nvptx64"))]
pub use error::{CudaError, CudaResult};
pub use infinity::{infinity, infinity_of, Infinity};
pub use status::CudaStatus;
pub use sync::synchronize_device;
#[cfg(not(target_arch = "nvptx64"))]
pub use sync::try_synchronize_device;
