#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, Sub};

use crate::simd::FhtVector;

pub const LANE_COUNT: usize = 4;

// Upper lane of each pair for strides 1 and 2
const STRIDE1_UPPER: [u32; 4] = [0, u32::MAX, 0, u32::MAX];
const STRIDE2_UPPER: [u32; 4] = [0, 0, u32::MAX, u32::MAX];

/// A NEON register of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    pub elements: float32x4_t,
}

/// Implementing the `Add` trait for F32x4
/// This allows for using the `+` operator with F32x4 vectors.
impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vaddq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vsubq_f32(self.elements, rhs.elements) },
        }
    }
}

#[inline(always)]
unsafe fn stage(v: float32x4_t, swapped: float32x4_t, upper: &[u32; 4]) -> float32x4_t {
    unsafe {
        let mask = vld1q_u32(upper.as_ptr());
        vbslq_f32(mask, vsubq_f32(swapped, v), vaddq_f32(swapped, v))
    }
}

impl FhtVector<f32> for F32x4 {
    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self {
            elements: unsafe { vld1q_f32(ptr) },
        }
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f32) {
        unsafe { vst1q_f32(ptr, self.elements) }
    }

    #[inline(always)]
    fn hadamard(self) -> Self {
        unsafe {
            let v = self.elements;

            // [1, 0, 3, 2]
            let v = stage(v, vrev64q_f32(v), &STRIDE1_UPPER);
            // [2, 3, 0, 1]
            let v = stage(v, vextq_f32::<2>(v, v), &STRIDE2_UPPER);

            Self { elements: v }
        }
    }
}
