//! AVX 8-lane f32 register.
//!
//! `F32x8` wraps a `__m256`. The in-register Hadamard transform uses the
//! in-lane `vpermilps` for strides 1 and 2 and a 128-bit lane swap for
//! stride 4. Each stage computes both `swapped + v` and `swapped - v`, then
//! blends: the lower lane of every pair keeps the sum, the upper lane the
//! difference.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Sandy Bridge / AMD Bulldozer or later (AVX float ops)
//! - **Target Architecture**: x86 or x86_64

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Sub};

use crate::simd::FhtVector;

/// Number of f32 elements that fit in a 256-bit register.
pub(crate) const LANE_COUNT: usize = 8;

/// AVX register containing 8 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub struct F32x8 {
    /// AVX 256-bit register containing 8 packed f32 values
    pub elements: __m256,
}

impl Add for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_add_ps(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_sub_ps(self.elements, rhs.elements) },
        }
    }
}

impl FhtVector<f32> for F32x8 {
    const LANES: usize = LANE_COUNT;

    /// Loads 8 elements from unaligned memory with `_mm256_loadu_ps`.
    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self {
            elements: unsafe { _mm256_loadu_ps(ptr) },
        }
    }

    /// Stores 8 elements to unaligned memory with `_mm256_storeu_ps`.
    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f32) {
        unsafe { _mm256_storeu_ps(ptr, self.elements) }
    }

    #[inline(always)]
    fn hadamard(self) -> Self {
        unsafe {
            let v = self.elements;

            // stride 1: partners [1, 0, 3, 2] in each 128-bit lane
            let swapped = _mm256_permute_ps::<0b10_11_00_01>(v);
            let v = _mm256_blend_ps::<0b1010_1010>(
                _mm256_add_ps(swapped, v),
                _mm256_sub_ps(swapped, v),
            );

            // stride 2: partners [2, 3, 0, 1] in each 128-bit lane
            let swapped = _mm256_permute_ps::<0b01_00_11_10>(v);
            let v = _mm256_blend_ps::<0b1100_1100>(
                _mm256_add_ps(swapped, v),
                _mm256_sub_ps(swapped, v),
            );

            // stride 4: swap the 128-bit lanes
            let swapped = _mm256_permute2f128_ps::<0x01>(v, v);
            let v = _mm256_blend_ps::<0b1111_0000>(
                _mm256_add_ps(swapped, v),
                _mm256_sub_ps(swapped, v),
            );

            Self { elements: v }
        }
    }
}
