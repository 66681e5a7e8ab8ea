//! Portable kernel.
//!
//! Registers are plain arrays (`4 × f32`, `2 × f64`, the 128-bit shapes), so
//! the same network runs everywhere and the compiler is free to vectorize
//! it. The block copy is left to `copy_from_slice`.

use std::ops::{Add, Sub};

use num::Float;

use crate::butterfly;
use crate::simd::{FhtVector, Kernel};

/// `N` packed values of `T` held in an array.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lanes<T, const N: usize>(pub [T; N]);

impl<T: Float, const N: usize> Add for Lanes<T, N> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        let mut out = self.0;
        out.iter_mut().zip(rhs.0).for_each(|(a, b)| *a = *a + b);
        Lanes(out)
    }
}

impl<T: Float, const N: usize> Sub for Lanes<T, N> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        let mut out = self.0;
        out.iter_mut().zip(rhs.0).for_each(|(a, b)| *a = *a - b);
        Lanes(out)
    }
}

impl<T: Float, const N: usize> FhtVector<T> for Lanes<T, N> {
    const LANES: usize = N;

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const T) -> Self {
        Lanes(unsafe { ptr.cast::<[T; N]>().read_unaligned() })
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut T) {
        unsafe { ptr.cast::<[T; N]>().write_unaligned(self.0) }
    }

    #[inline(always)]
    fn hadamard(self) -> Self {
        let mut v = self.0;
        butterfly::iterative_network(&mut v);
        Lanes(v)
    }
}

/// Kernel used when no vector extension is selected.
pub struct Scalar;

impl Kernel for Scalar {
    const NAME: &'static str = "fallback";
    const VECTOR_BYTES: usize = 0;

    type F32 = Lanes<f32, 4>;
    type F64 = Lanes<f64, 2>;

    #[inline(always)]
    unsafe fn butterfly_base_f32(buf: &mut [f32]) {
        unsafe { butterfly::base_network::<f32, Self::F32>(buf) }
    }

    #[inline(always)]
    unsafe fn butterfly_base_f64(buf: &mut [f64]) {
        unsafe { butterfly::base_network::<f64, Self::F64>(buf) }
    }

    #[inline(always)]
    unsafe fn butterfly_combine_f32(lo: &mut [f32], hi: &mut [f32]) {
        unsafe { butterfly::combine::<f32, Self::F32>(lo, hi) }
    }

    #[inline(always)]
    unsafe fn butterfly_combine_f64(lo: &mut [f64], hi: &mut [f64]) {
        unsafe { butterfly::combine::<f64, Self::F64>(lo, hi) }
    }

    unsafe fn copy_blocks(_dst: *mut u8, _src: *const u8, blocks: usize) {
        debug_assert_eq!(blocks, 0, "the portable kernel has no vector copy");
    }
}
