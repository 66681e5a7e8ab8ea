#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Sub};

use crate::simd::FhtVector;

pub(crate) const LANE_COUNT: usize = 8;

/// An 8-lane, 64-bit floating-point register using AVX-512F intrinsics.
#[derive(Copy, Clone, Debug)]
pub struct F64x8 {
    pub elements: __m512d,
}

impl Add for F64x8 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm512_add_pd(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F64x8 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm512_sub_pd(self.elements, rhs.elements) },
        }
    }
}

#[inline(always)]
unsafe fn stage(v: __m512d, swapped: __m512d, upper: __mmask8) -> __m512d {
    unsafe { _mm512_mask_sub_pd(_mm512_add_pd(swapped, v), upper, swapped, v) }
}

impl FhtVector<f64> for F64x8 {
    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f64) -> Self {
        Self {
            elements: unsafe { _mm512_loadu_pd(ptr) },
        }
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f64) {
        unsafe { _mm512_storeu_pd(ptr, self.elements) }
    }

    #[inline(always)]
    fn hadamard(self) -> Self {
        unsafe {
            let v = self.elements;

            // stride 1: swap within 128-bit lanes
            let v = stage(v, _mm512_permute_pd::<0b0101_0101>(v), 0xAA);
            // stride 2: [2, 3, 0, 1] within 256-bit lanes
            let v = stage(v, _mm512_permutex_pd::<0b01_00_11_10>(v), 0xCC);
            // stride 4: swap the 256-bit halves
            let v = stage(v, _mm512_shuffle_f64x2::<0b01_00_11_10>(v, v), 0xF0);

            Self { elements: v }
        }
    }
}
