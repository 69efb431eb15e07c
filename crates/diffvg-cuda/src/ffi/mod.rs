//! CUDA runtime FFI bindings.
//!
//! ALL CUDA runtime `extern "C"` declarations used by diffvg live here.
//!
//! # Safety
//!
//! Every function in [`cuda_runtime`] is unsafe FFI into `libcudart`. The
//! declarations are only compiled when the build script binds the runtime
//! (`cfg(diffvg_cuda_runtime)`); see `build.rs` for the switches.
//!
//! The status-code constants in [`codes`] are always available, on the host
//! and on the device, so a status can be named and described even when the
//! runtime is not linked into this build.

pub mod codes;

#[cfg(diffvg_cuda_runtime)]
pub mod cuda_runtime;

pub use codes::*;

#[cfg(diffvg_cuda_runtime)]
pub use cuda_runtime::*;
