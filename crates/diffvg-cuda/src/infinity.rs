//! IEEE-754 positive infinity for host and device code.
//!
//! Distance and bounding-box kernels seed their minimum accumulators with
//! infinity and later compare results computed on the host against results
//! computed on the device. The two must agree bit for bit, so the device path
//! builds the value from the exact IEEE-754 bit pattern instead of relying on
//! host numeric constants, and tests pin both paths to the same bits.
//!
//! ```
//! use diffvg_cuda::infinity;
//!
//! let samples = [3.5_f32, 1.25, 8.0];
//! let min_dist = samples.iter().copied().fold(infinity::<f32>(), f32::min);
//! assert_eq!(min_dist, 1.25);
//! ```

use num_traits::float::FloatCore;

/// Bit pattern of `+inf` in IEEE-754 binary32.
pub const F32_INFINITY_BITS: u32 = 0x7f80_0000;

/// Bit pattern of `+inf` in IEEE-754 binary64.
pub const F64_INFINITY_BITS: u64 = 0x7ff0_0000_0000_0000;

/// Bit pattern of `+inf` in IEEE-754 binary16.
pub const F16_INFINITY_BITS: u16 = 0x7c00;

/// Bit pattern of `+inf` in bfloat16.
pub const BF16_INFINITY_BITS: u16 = 0x7f80;

/// Floating-point types with a positive infinity usable on host and device.
///
/// Both code paths are always compiled so they can be compared on the host;
/// [`Infinity::infinity`] picks one at compile time.
pub trait Infinity: Copy + PartialOrd {
    /// Host path: the type's standard infinity constant.
    fn host_infinity() -> Self;

    /// Device path: reinterpretation of the IEEE-754 infinity bit pattern.
    fn device_infinity() -> Self;

    /// Positive infinity for the current compilation target.
    #[inline(always)]
    fn infinity() -> Self {
        #[cfg(target_arch = "nvptx64")]
        {
            Self::device_infinity()
        }

        #[cfg(not(target_arch = "nvptx64"))]
        {
            Self::host_infinity()
        }
    }
}

impl Infinity for f32 {
    #[inline(always)]
    fn host_infinity() -> Self {
        f32::INFINITY
    }

    #[inline(always)]
    fn device_infinity() -> Self {
        f32::from_bits(F32_INFINITY_BITS)
    }
}

impl Infinity for f64 {
    #[inline(always)]
    fn host_infinity() -> Self {
        f64::INFINITY
    }

    #[inline(always)]
    fn device_infinity() -> Self {
        f64::from_bits(F64_INFINITY_BITS)
    }
}

#[cfg(feature = "half")]
impl Infinity for half::f16 {
    #[inline(always)]
    fn host_infinity() -> Self {
        half::f16::INFINITY
    }

    #[inline(always)]
    fn device_infinity() -> Self {
        half::f16::from_bits(F16_INFINITY_BITS)
    }
}

#[cfg(feature = "half")]
impl Infinity for half::bf16 {
    #[inline(always)]
    fn host_infinity() -> Self {
        half::bf16::INFINITY
    }

    #[inline(always)]
    fn device_infinity() -> Self {
        half::bf16::from_bits(BF16_INFINITY_BITS)
    }
}

/// Positive infinity of `T` for the current compilation target.
#[inline(always)]
#[must_use]
pub fn infinity<T: Infinity>() -> T {
    T::infinity()
}

/// Positive infinity for any other float type with a standard infinite value.
///
/// Goes through the type's own constant on both host and device; use
/// [`infinity`] for types implementing [`Infinity`].
#[inline(always)]
#[must_use]
pub fn infinity_of<T: FloatCore>() -> T {
    T::infinity()
}
