//! SSE2 kernel for 128-bit registers.
//!
//! SSE2 is part of the x86_64 baseline, so this is the narrowest vector
//! kernel the build script can pick on x86.
//!
//! - **Vector Width**: 128 bits (4 × f32, 2 × f64)
//! - **Base case**: up to 8 f32 / 4 f64 elements

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::butterfly;
use crate::simd::Kernel;

pub mod f32x4;
pub mod f64x2;

use f32x4::F32x4;
use f64x2::F64x2;

/// Kernel built on SSE2.
pub struct Sse2;

#[target_feature(enable = "sse2")]
unsafe fn base_f32(buf: &mut [f32]) {
    unsafe { butterfly::base_network::<f32, F32x4>(buf) }
}

#[target_feature(enable = "sse2")]
unsafe fn base_f64(buf: &mut [f64]) {
    unsafe { butterfly::base_network::<f64, F64x2>(buf) }
}

#[target_feature(enable = "sse2")]
unsafe fn combine_f32(lo: &mut [f32], hi: &mut [f32]) {
    unsafe { butterfly::combine::<f32, F32x4>(lo, hi) }
}

#[target_feature(enable = "sse2")]
unsafe fn combine_f64(lo: &mut [f64], hi: &mut [f64]) {
    unsafe { butterfly::combine::<f64, F64x2>(lo, hi) }
}

#[target_feature(enable = "sse2")]
unsafe fn copy_registers(dst: *mut u8, src: *const u8, blocks: usize) {
    let mut ov = dst.cast::<__m128i>();
    let mut iv = src.cast::<__m128i>();

    for _ in 0..blocks {
        unsafe {
            _mm_storeu_si128(ov, _mm_loadu_si128(iv));
            ov = ov.add(1);
            iv = iv.add(1);
        }
    }
}

impl Kernel for Sse2 {
    const NAME: &'static str = "sse";
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
