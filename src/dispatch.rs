//! Build-time kernel selection.
//!
//! `build.rs` emits exactly one of the `avx512`, `avx2`, `sse`, `neon` or
//! `fallback` cfgs; [`Active`] names the matching [`Kernel`]. There is no
//! runtime branch: a build targets one instruction set.

use num::Float;

use crate::butterfly;
use crate::simd::{FhtVector, Kernel};

#[cfg(avx512)]
pub type Active = crate::simd::avx512::Avx512;

#[cfg(all(avx2, not(avx512)))]
pub type Active = crate::simd::avx2::Avx2;

#[cfg(all(sse, not(any(avx512, avx2))))]
pub type Active = crate::simd::sse::Sse2;

#[cfg(all(neon, not(any(avx512, avx2, sse))))]
pub type Active = crate::simd::neon::Neon;

#[cfg(not(any(avx512, avx2, sse, neon)))]
pub type Active = crate::simd::scalar::Scalar;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Element types the transform supports: `f32` and `f64`.
///
/// Routes each precision to its entry points on a [`Kernel`].
pub trait FhtFloat: Float + Send + Sync + sealed::Sealed + 'static {
    /// Lanes per register of `K` for this precision.
    fn lanes<K: Kernel>() -> usize;

    /// # Safety
    ///
    /// The CPU must support `K`'s instruction set.
    unsafe fn butterfly_base<K: Kernel>(buf: &mut [Self]);

    /// # Safety
    ///
    /// The CPU must support `K`'s instruction set.
    unsafe fn butterfly_combine<K: Kernel>(lo: &mut [Self], hi: &mut [Self]);

    /// `len` as a float, exact for every supported transform length.
    fn from_len(len: usize) -> Self;
}

impl FhtFloat for f32 {
    #[inline(always)]
    fn lanes<K: Kernel>() -> usize {
        <K::F32 as FhtVector<f32>>::LANES
    }

    #[inline(always)]
    unsafe fn butterfly_base<K: Kernel>(buf: &mut [f32]) {
        unsafe { K::butterfly_base_f32(buf) }
    }

    #[inline(always)]
    unsafe fn butterfly_combine<K: Kernel>(lo: &mut [f32], hi: &mut [f32]) {
        unsafe { K::butterfly_combine_f32(lo, hi) }
    }

    #[inline(always)]
    fn from_len(len: usize) -> f32 {
        len as f32
    }
}

impl FhtFloat for f64 {
    #[inline(always)]
    fn lanes<K: Kernel>() -> usize {
        <K::F64 as FhtVector<f64>>::LANES
    }

    #[inline(always)]
    unsafe fn butterfly_base<K: Kernel>(buf: &mut [f64]) {
        unsafe { K::butterfly_base_f64(buf) }
    }

    #[inline(always)]
    unsafe fn butterfly_combine<K: Kernel>(lo: &mut [f64], hi: &mut [f64]) {
        unsafe { K::butterfly_combine_f64(lo, hi) }
    }

    #[inline(always)]
    fn from_len(len: usize) -> f64 {
        len as f64
    }
}

/// Transforms a power-of-two sized buffer with the compiled-in kernel.
#[inline]
pub(crate) fn transform<T: FhtFloat>(buf: &mut [T]) {
    // SAFETY: build.rs selects `Active` only for an instruction set the
    // target (or, for native builds, the running CPU) supports.
    unsafe { butterfly::transform::<Active, T>(buf) }
}

/// Name of the compiled-in kernel: `"avx512"`, `"avx2"`, `"sse"`, `"neon"`
/// or `"fallback"`.
pub fn backend_name() -> &'static str {
    <Active as Kernel>::NAME
}

/// Register width in bytes used by the vectorized copy, `0` for the fallback.
pub fn vector_bytes() -> usize {
    <Active as Kernel>::VECTOR_BYTES
}

/// Number of `T` lanes per register of the compiled-in kernel.
pub fn lane_count<T: FhtFloat>() -> usize {
    T::lanes::<Active>()
}
