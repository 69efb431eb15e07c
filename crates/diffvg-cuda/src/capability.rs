//! Compile-time capability detection.
//!
//! Two independent axes, both fixed when this crate is compiled:
//!
//! - [`COMPILING_FOR_DEVICE`]: code is being generated for the accelerator
//!   (`nvptx64`) rather than the host
//! - [`RUNTIME_LINKED`]: the CUDA runtime is bound into this build
//!   (`cuda` feature on, not vetoed by `DIFFVG_CUDA=0` or
//!   `DIFFVG_NO_CUDA_RUNTIME`, host target)
//!
//! The rest of the crate branches on the underlying `cfg`s, never on a
//! runtime value. These constants exist so callers can do the same.

use core::fmt;

use serde::Serialize;

/// True only while compiling for the accelerator core.
pub const COMPILING_FOR_DEVICE: bool = cfg!(target_arch = "nvptx64");

/// True only if the CUDA runtime is bound into this build.
pub const RUNTIME_LINKED: bool = cfg!(diffvg_cuda_runtime);

/// Which processor the current compilation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompilationContext {
    /// General-purpose processor issuing work to the accelerator.
    Host,
    /// Accelerator core.
    Device,
}

impl CompilationContext {
    /// Context of the code currently being compiled.
    pub const CURRENT: Self = if COMPILING_FOR_DEVICE {
        Self::Device
    } else {
        Self::Host
    };

    /// True for accelerator code.
    #[inline]
    #[must_use]
    pub const fn is_device(self) -> bool {
        matches!(self, Self::Device)
    }

    /// Lowercase name used in logs and serialized reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Device => "device",
        }
    }
}

impl fmt::Display for CompilationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both capability axes for one compiled crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Capabilities {
    /// Host or device compilation.
    pub context: CompilationContext,
    /// Whether the CUDA runtime is bound into this build.
    pub runtime_linked: bool,
}

impl Capabilities {
    /// Capabilities of the code currently being compiled.
    pub const CURRENT: Self = Self {
        context: CompilationContext::CURRENT,
        runtime_linked: RUNTIME_LINKED,
    };

    /// Whether [`crate::check()`] actually inspects statuses in this build.
    #[inline]
    #[must_use]
    pub const fn status_checks_enabled(&self) -> bool {
        self.runtime_linked
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "context={} runtime_linked={}",
            self.context, self.runtime_linked
        )
    }
}

/// Log the capabilities of this build once per process.
///
/// Builds without the runtime say so explicitly: their status checks accept
/// anything, which is easy to forget when reading call sites.
#[cfg(not(target_arch = "nvptx64"))]
pub fn log_capabilities() {
    static LOGGED: std::sync::Once = std::sync::Once::new();
    LOGGED.call_once(|| {
        let caps = Capabilities::CURRENT;
        if caps.status_checks_enabled() {
            tracing::info!(
                target: "diffvg::cuda",
                context = caps.context.as_str(),
                runtime_linked = caps.runtime_linked,
                "CUDA runtime linked; runtime failures terminate the process"
            );
        } else {
            tracing::info!(
                target: "diffvg::cuda",
                context = caps.context.as_str(),
                runtime_linked = caps.runtime_linked,
                "CUDA runtime not linked; status checks are no-ops and \
                 device synchronization does nothing. \
                 To enable: build with --features cuda and without \
                 DIFFVG_CUDA=0 / DIFFVG_NO_CUDA_RUNTIME"
            );
        }
    });
}
