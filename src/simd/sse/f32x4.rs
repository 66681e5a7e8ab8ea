//! SSE 4-lane f32 register.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Sub};

use crate::simd::FhtVector;

/// Number of f32 elements in a 128-bit register.
pub(crate) const LANE_COUNT: usize = 4;

/// SSE register holding 4 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    pub elements: __m128,
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_add_ps(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_sub_ps(self.elements, rhs.elements) },
        }
    }
}

impl FhtVector<f32> for F32x4 {
    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self {
            elements: unsafe { _mm_loadu_ps(ptr) },
        }
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f32) {
        unsafe { _mm_storeu_ps(ptr, self.elements) }
    }

    /// Two stages. Each swaps partner lanes, then negates the upper lane of
    /// every pair before adding, so the upper lane receives `lower - upper`.
    #[inline(always)]
    fn hadamard(self) -> Self {
        unsafe {
            let v = self.elements;

            // stride 1: partners [1, 0, 3, 2]
            let swapped = _mm_shuffle_ps::<0b10_11_00_01>(v, v);
            let signs = _mm_set_ps(-0.0, 0.0, -0.0, 0.0);
            let v = _mm_add_ps(swapped, _mm_xor_ps(v, signs));

            // stride 2: partners [2, 3, 0, 1]
            let swapped = _mm_shuffle_ps::<0b01_00_11_10>(v, v);
            let signs = _mm_set_ps(-0.0, -0.0, 0.0, 0.0);
            let v = _mm_add_ps(swapped, _mm_xor_ps(v, signs));

            Self { elements: v }
        }
    }
}
