//! AVX 4-lane f64 register.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Sub};

use crate::simd::FhtVector;

pub(crate) const LANE_COUNT: usize = 4;

/// AVX register containing 4 packed f64 values.
#[derive(Copy, Clone, Debug)]
pub struct F64x4 {
    pub elements: __m256d,
}

impl Add for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_add_pd(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_sub_pd(self.elements, rhs.elements) },
        }
    }
}

impl FhtVector<f64> for F64x4 {
    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f64) -> Self {
        Self {
            elements: unsafe { _mm256_loadu_pd(ptr) },
        }
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f64) {
        unsafe { _mm256_storeu_pd(ptr, self.elements) }
    }

    #[inline(always)]
    fn hadamard(self) -> Self {
        unsafe {
            let v = self.elements;

            // stride 1: partners [1, 0, 3, 2]
            let swapped = _mm256_permute_pd::<0b0101>(v);
            let v = _mm256_blend_pd::<0b1010>(_mm256_add_pd(swapped, v), _mm256_sub_pd(swapped, v));

            // stride 2: swap the 128-bit lanes
            let swapped = _mm256_permute2f128_pd::<0x01>(v, v);
            let v = _mm256_blend_pd::<0b1100>(_mm256_add_pd(swapped, v), _mm256_sub_pd(swapped, v));

            Self { elements: v }
        }
    }
}
