#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Sub};

use crate::simd::FhtVector;

/// The number of f32 lanes in an AVX-512 vector.
pub(crate) const LANE_COUNT: usize = 16;

/// A 16-lane, 32-bit floating-point register using AVX-512F intrinsics.
#[derive(Copy, Clone, Debug)]
pub struct F32x16 {
    pub elements: __m512,
}

impl Add for F32x16 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm512_add_ps(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x16 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm512_sub_ps(self.elements, rhs.elements) },
        }
    }
}

/// One butterfly stage: lanes selected by `upper` get `swapped - v`, the
/// others `swapped + v`.
#[inline(always)]
unsafe fn stage(v: __m512, swapped: __m512, upper: __mmask16) -> __m512 {
    unsafe { _mm512_mask_sub_ps(_mm512_add_ps(swapped, v), upper, swapped, v) }
}

impl FhtVector<f32> for F32x16 {
    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self {
            elements: unsafe { _mm512_loadu_ps(ptr) },
        }
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f32) {
        unsafe { _mm512_storeu_ps(ptr, self.elements) }
    }

    #[inline(always)]
    fn hadamard(self) -> Self {
        unsafe {
            let v = self.elements;

            // strides 1 and 2 stay inside 128-bit lanes
            let v = stage(v, _mm512_permute_ps::<0b10_11_00_01>(v), 0xAAAA);
            let v = stage(v, _mm512_permute_ps::<0b01_00_11_10>(v), 0xCCCC);

            // strides 4 and 8 move whole 128-bit lanes: [1, 0, 3, 2] then [2, 3, 0, 1]
            let v = stage(v, _mm512_shuffle_f32x4::<0b10_11_00_01>(v, v), 0xF0F0);
            let v = stage(v, _mm512_shuffle_f32x4::<0b01_00_11_10>(v, v), 0xFF00);

            Self { elements: v }
        }
    }
}
