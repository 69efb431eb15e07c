//! Build script deciding whether this crate binds the CUDA runtime.
//!
//! The runtime is bound (and `cfg(diffvg_cuda_runtime)` set) only when all of
//! the following hold:
//!
//! 1. The `cuda` feature is enabled
//! 2. `DIFFVG_CUDA` is not `0`
//! 3. `DIFFVG_NO_CUDA_RUNTIME` is unset
//! 4. The target is a host target (never `nvptx64-*`)
//!
//! Otherwise the status check and device synchronization compile to no-ops.
//!
//! # Environment Variables
//!
//! - `DIFFVG_CUDA`: Set to `0` for a CPU-only build even with `cuda` enabled
//! - `DIFFVG_NO_CUDA_RUNTIME`: Opt this crate out of runtime binding; used to
//!   sidestep toolchain/runtime header incompatibilities in specific builds
//! - `CUDA_PATH`: Path to CUDA toolkit (common install paths probed if not set)

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=DIFFVG_CUDA");
    println!("cargo:rerun-if-env-changed=DIFFVG_NO_CUDA_RUNTIME");
    println!("cargo:rerun-if-env-changed=CUDA_PATH");
    println!("cargo::rustc-check-cfg=cfg(diffvg_cuda_runtime)");

    if !runtime_requested() {
        return;
    }

    println!("cargo:rustc-cfg=diffvg_cuda_runtime");
    link_cuda_runtime();
}

fn runtime_requested() -> bool {
    if env::var_os("CARGO_FEATURE_CUDA").is_none() {
        return false;
    }

    if env::var("DIFFVG_CUDA").map(|v| v.trim() == "0").unwrap_or(false) {
        println!("cargo:warning=DIFFVG_CUDA=0: building without the CUDA runtime");
        return false;
    }

    if env::var_os("DIFFVG_NO_CUDA_RUNTIME").is_some() {
        println!("cargo:warning=DIFFVG_NO_CUDA_RUNTIME set: CUDA status checks are no-ops");
        return false;
    }

    // Device code never links the host runtime.
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    target_arch != "nvptx64"
}

fn link_cuda_runtime() {
    // cudart: CUDA runtime API (cudaDeviceSynchronize, cudaGetErrorString, ...)
    println!("cargo:rustc-link-lib=cudart");

    if let Ok(cuda_path) = env::var("CUDA_PATH") {
        for sub in ["lib64", "lib", "lib/x64"] {
            let lib_path = PathBuf::from(&cuda_path).join(sub);
            if lib_path.exists() {
                println!("cargo:rustc-link-search=native={}", lib_path.display());
            }
        }
        return;
    }

    // Common CUDA library paths
    for path in ["/usr/local/cuda/lib64", "/usr/local/cuda/lib", "/opt/cuda/lib64"] {
        if PathBuf::from(path).exists() {
            println!("cargo:rustc-link-search=native={}", path);
        }
    }
}
