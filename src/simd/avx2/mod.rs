//! AVX2 kernel for 256-bit registers.
//!
//! The floating-point work only needs AVX, but the build script keys this
//! kernel on AVX2 (Haswell and later), which always comes with it.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell (2013+) or AMD Excavator (2015+)
//! - **Target Architecture**: x86 or x86_64
//! - **Runtime Detection**: The build system detects AVX2 availability
//!
//! # Performance Characteristics
//!
//! - **Vector Width**: 256 bits (8 × f32, 4 × f64)
//! - **Base case**: up to 16 f32 / 8 f64 elements handled in registers
//! - **Copy**: 32-byte unaligned loads/stores

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::butterfly;
use crate::simd::Kernel;

pub mod f32x8;
pub mod f64x4;

use f32x8::F32x8;
use f64x4::F64x4;

/// Kernel built on AVX/AVX2.
pub struct Avx2;

#[target_feature(enable = "avx,avx2")]
unsafe fn base_f32(buf: &mut [f32]) {
    unsafe { butterfly::base_network::<f32, F32x8>(buf) }
}

#[target_feature(enable = "avx,avx2")]
unsafe fn base_f64(buf: &mut [f64]) {
    unsafe { butterfly::base_network::<f64, F64x4>(buf) }
}

#[target_feature(enable = "avx,avx2")]
unsafe fn combine_f32(lo: &mut [f32], hi: &mut [f32]) {
    unsafe { butterfly::combine::<f32, F32x8>(lo, hi) }
}

#[target_feature(enable = "avx,avx2")]
unsafe fn combine_f64(lo: &mut [f64], hi: &mut [f64]) {
    unsafe { butterfly::combine::<f64, F64x4>(lo, hi) }
}

#[target_feature(enable = "avx,avx2")]
unsafe fn copy_registers(dst: *mut u8, src: *const u8, blocks: usize) {
    let mut ov = dst.cast::<__m256i>();
    let mut iv = src.cast::<__m256i>();

    for _ in 0..blocks {
        unsafe {
            _mm256_storeu_si256(ov, _mm256_loadu_si256(iv));
            ov = ov.add(1);
            iv = iv.add(1);
        }
    }
}

impl Kernel for Avx2 {
    const NAME: &'static str = "avx2";
    const VECTOR_BYTES: usize = 32;

    type F32 = F32x8;
    type F64 = F64x4;

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
