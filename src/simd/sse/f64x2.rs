#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Sub};

use crate::simd::FhtVector;

pub(crate) const LANE_COUNT: usize = 2;

/// SSE2 register holding 2 packed f64 values.
#[derive(Copy, Clone, Debug)]
pub struct F64x2 {
    pub elements: __m128d,
}

impl Add for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_add_pd(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_sub_pd(self.elements, rhs.elements) },
        }
    }
}

impl FhtVector<f64> for F64x2 {
    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f64) -> Self {
        Self {
            elements: unsafe { _mm_loadu_pd(ptr) },
        }
    }

    #[inline(always)]
    unsafe fn store_unaligned(self, ptr: *mut f64) {
        unsafe { _mm_storeu_pd(ptr, self.elements) }
    }

    #[inline(always)]
    fn hadamard(self) -> Self {
        unsafe {
            let v = self.elements;
            let swapped = _mm_shuffle_pd::<0b01>(v, v);
            let signs = _mm_set_pd(-0.0, 0.0);

            Self {
                elements: _mm_add_pd(swapped, _mm_xor_pd(v, signs)),
            }
        }
    }
}
