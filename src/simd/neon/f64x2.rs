#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, Sub};

use crate::simd::FhtVector;

pub const LANE_COUNT: usize = 2;

const UPPER: [u64; 2] = [0, u64::MAX];

/// A NEON register of 2 64-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F64x2 {
    pub elements: float64x2_t,
}

impl Add for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vaddq_f64(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vsubq_f64(self.elements, rhs.elements) },
        }
    }
}

impl FhtVector<f64> for F64x2 {
    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f64) -> Self {
        Self {
            elements: unsafe { vld1q_f64(ptr) },
        }
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f64) {
        unsafe { vst1q_f64(ptr, self.elements) }
    }

    #[inline(always)]
    fn hadamard(self) -> Self {
        unsafe {
            let v = self.elements;
            let swapped = vextq_f64::<1>(v, v);
            let mask = vld1q_u64(UPPER.as_ptr());

            Self {
                elements: vbslq_f64(mask, vsubq_f64(swapped, v), vaddq_f64(swapped, v)),
            }
        }
    }
}
