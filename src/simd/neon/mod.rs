//! ARM NEON kernel for 128-bit registers.
//!
//! NEON is part of every AArch64 processor, including Apple Silicon and AWS
//! Graviton, so this kernel is always selected on aarch64 targets.
//!
//! # Performance Characteristics
//!
//! - **Vector Width**: 128 bits (4 × f32, 2 × f64)
//! - **Base case**: up to 8 f32 / 4 f64 elements
//! - **Copy**: 16-byte `vld1q_u8`/`vst1q_u8` pairs

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::butterfly;
use crate::simd::Kernel;

pub mod f32x4;
pub mod f64x2;

use f32x4::F32x4;
use f64x2::F64x2;

/// Kernel built on NEON.
pub struct Neon;

#[target_feature(enable = "neon")]
unsafe fn base_f32(buf: &mut [f32]) {
    unsafe { butterfly::base_network::<f32, F32x4>(buf) }
}

#[target_feature(enable = "neon")]
unsafe fn base_f64(buf: &mut [f64]) {
    unsafe { butterfly::base_network::<f64, F64x2>(buf) }
}

#[target_feature(enable = "neon")]
unsafe fn combine_f32(lo: &mut [f32], hi: &mut [f32]) {
    unsafe { butterfly::combine::<f32, F32x4>(lo, hi) }
}

#[target_feature(enable = "neon")]
unsafe fn combine_f64(lo: &mut [f64], hi: &mut [f64]) {
    unsafe { butterfly::combine::<f64, F64x2>(lo, hi) }
}

#[target_feature(enable = "neon")]
unsafe fn copy_registers(dst: *mut u8, src: *const u8, blocks: usize) {
    for i in 0..blocks {
        unsafe { vst1q_u8(dst.add(16 * i), vld1q_u8(src.add(16 * i))) };
    }
}

impl Kernel for Neon {
    const NAME: &'static str = "neon";
    const VECTOR_BYTES: usize = 16;

    type F32 = F32x4;
    type F64 = F64x2;

    #[inline(always)]
    unsafe fn butterfly_base_f32(buf: &mut [f32]) {
        unsafe { base_f32(buf) }
    }

    #[inline(always)]
    unsafe fn butterfly_base_f64(buf: &mut [f64]) {
        unsafe { base_f64(buf) }
    }

    #[inline(always)]
    unsafe fn butterfly_combine_f32(lo: &mut [f32], hi: &mut [f32]) {
        unsafe { combine_f32(lo, hi) }
    }

    #[inline(always)]
    unsafe fn butterfly_combine_f64(lo: &mut [f64], hi: &mut [f64]) {
        unsafe { combine_f64(lo, hi) }
    }

    #[inline(always)]
    unsafe fn copy_blocks(dst: *mut u8, src: *const u8, blocks: usize) {
        unsafe { copy_registers(dst, src, blocks) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::FhtVector;

    #[test]
    fn test_f32x4_hadamard() {
        let data = [1.0f32, 2.0, 3.0, 4.0];
        let mut out = [0.0f32; 4];

        unsafe { F32x4::load_unaligned(data.as_ptr()).hadamard().store_unaligned(out.as_mut_ptr()) };

        assert_eq!(out, [10.0, -2.0, -4.0, 0.0]);
    }

    #[test]
    fn test_register_from_raw_elements() {
        let mut out = [0.0f32; 4];
        let v = F32x4 {
            elements: unsafe { vdupq_n_f32(1.0) },
        };

        unsafe { v.hadamard().store_unaligned(out.as_mut_ptr()) };

        assert_eq!(out, [4.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_f64x2_hadamard() {
        let data = [3.0f64, 5.0];
        let mut out = [0.0f64; 2];

        unsafe { F64x2::load_unaligned(data.as_ptr()).hadamard().store_unaligned(out.as_mut_ptr()) };

        assert_eq!(out, [8.0, -2.0]);
    }
}
