//! AVX-512F kernel for 512-bit registers.
//!
//! Selected only when the compiler can build AVX-512F code (nightly, or a
//! stable release new enough) and the target supports it.
//!
//! - **Vector Width**: 512 bits (16 × f32, 8 × f64)
//! - **Base case**: up to 32 f32 / 16 f64 elements
//! - **Copy**: 64-byte unaligned loads/stores

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::butterfly;
use crate::simd::Kernel;

pub mod f32x16;
pub mod f64x8;

use f32x16::F32x16;
use f64x8::F64x8;

/// Kernel built on AVX-512F.
pub struct Avx512;

#[target_feature(enable = "avx512f")]
unsafe fn base_f32(buf: &mut [f32]) {
    unsafe { butterfly::base_network::<f32, F32x16>(buf) }
}

#[target_feature(enable = "avx512f")]
unsafe fn base_f64(buf: &mut [f64]) {
    unsafe { butterfly::base_network::<f64, F64x8>(buf) }
}

#[target_feature(enable = "avx512f")]
unsafe fn combine_f32(lo: &mut [f32], hi: &mut [f32]) {
    unsafe { butterfly::combine::<f32, F32x16>(lo, hi) }
}

#[target_feature(enable = "avx512f")]
unsafe fn combine_f64(lo: &mut [f64], hi: &mut [f64]) {
    unsafe { butterfly::combine::<f64, F64x8>(lo, hi) }
}

// Moves raw bits through float registers; loads and stores do not touch NaN payloads.
#[target_feature(enable = "avx512f")]
unsafe fn copy_registers(dst: *mut u8, src: *const u8, blocks: usize) {
    let mut ov = dst.cast::<f32>();
    let mut iv = src.cast::<f32>();

    for _ in 0..blocks {
        unsafe {
            _mm512_storeu_ps(ov, _mm512_loadu_ps(iv));
            ov = ov.add(16);
            iv = iv.add(16);
        }
    }
}

impl Kernel for Avx512 {
    const NAME: &'static str = "avx512";
    const VECTOR_BYTES: usize = 64;

    type F32 = F32x16;
    type F64 = F64x8;

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
    fn test_f32x16_hadamard_matches_portable() {
        let data: [f32; 16] = std::array::from_fn(|i| ((i * 5 + 2) % 7) as f32 - 3.0);
        let mut out = [0.0f32; 16];
        let mut expected = data;

        unsafe { F32x16::load_unaligned(data.as_ptr()).hadamard().store_unaligned(out.as_mut_ptr()) };
        butterfly::iterative_network(&mut expected);

        assert_eq!(out, expected);
    }

    #[test]
    fn test_f64x8_hadamard_matches_portable() {
        let data: [f64; 8] = std::array::from_fn(|i| ((i * 3 + 1) % 5) as f64 - 2.0);
        let mut out = [0.0f64; 8];
        let mut expected = data;

        unsafe { F64x8::load_unaligned(data.as_ptr()).hadamard().store_unaligned(out.as_mut_ptr()) };
        butterfly::iterative_network(&mut expected);

        assert_eq!(out, expected);
    }
}
