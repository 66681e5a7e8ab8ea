//! Vector-width-aware copy of power-of-two sized buffers.
//!
//! Three regimes, decided on the byte count `n`:
//!
//! - `n >= COPY_MEMCPY_THRESHOLD` (1 MiB): `copy_from_slice`, the platform copy
//!   is better at transfers that stream past the cache anyway.
//! - `n < VECTOR_BYTES`, or `n` not a power of two: `copy_from_slice`.
//! - otherwise: `n >> log2(VECTOR_BYTES)` unaligned register loads/stores.
//!
//! The second gate matters: shifting a byte count smaller than one register
//! by the register width yields zero iterations and silently copies nothing.

use crate::dispatch::{Active, FhtFloat};
use crate::simd::Kernel;
use crate::COPY_MEMCPY_THRESHOLD;

/// Copies `src` into `dst` with the compiled-in kernel.
///
/// # Panics
///
/// Panics if the slices have different lengths.
#[inline]
pub fn bulk_copy<T: FhtFloat>(dst: &mut [T], src: &[T]) {
    assert_eq!(dst.len(), src.len(), "Buffers must be the same length");

    let n = std::mem::size_of_val(src);

    // SAFETY: f32 and f64 have no padding, so both slices are plain bytes.
    let (dst_bytes, src_bytes) = unsafe {
        (
            std::slice::from_raw_parts_mut(dst.as_mut_ptr().cast::<u8>(), n),
            std::slice::from_raw_parts(src.as_ptr().cast::<u8>(), n),
        )
    };

    bulk_copy_bytes(dst_bytes, src_bytes);
}

/// Copies raw bytes with the compiled-in kernel.
///
/// # Panics
///
/// Panics if the slices have different lengths.
#[inline]
pub fn bulk_copy_bytes(dst: &mut [u8], src: &[u8]) {
    assert_eq!(dst.len(), src.len(), "Buffers must be the same length");

    // SAFETY: build.rs selects `Active` only for a supported instruction set.
    unsafe { copy_with::<Active>(dst, src) }
}

/// Returns `true` when an `n`-byte copy takes the register loop of a kernel
/// with `vector_bytes`-wide registers.
#[inline(always)]
pub(crate) fn uses_vector_loop(n: usize, vector_bytes: usize) -> bool {
    vector_bytes != 0
        && n >= vector_bytes
        && n < COPY_MEMCPY_THRESHOLD
        && n.is_power_of_two()
}

/// # Safety
///
/// The CPU must support `K`'s instruction set.
#[inline(always)]
pub(crate) unsafe fn copy_with<K: Kernel>(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());

    let n = src.len();

    if !uses_vector_loop(n, K::VECTOR_BYTES) {
        dst.copy_from_slice(src);
        return;
    }

    let shift = K::VECTOR_BYTES.trailing_zeros();

    // SAFETY: n is a power of two no smaller than one register, so
    // `n >> shift` registers cover both slices exactly. `&mut` rules out overlap.
    unsafe { K::copy_blocks(dst.as_mut_ptr(), src.as_ptr(), n >> shift) };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::scalar::Scalar;

    fn bytes(n: usize) -> Vec<u8> {
        (0..n).map(|i| (i * 31 + 7) as u8).collect()
    }

    #[test]
    fn test_gate_rejects_sub_register_sizes() {
        for vector_bytes in [16usize, 32, 64] {
            for n in [0usize, 1, 2, 4, 8, vector_bytes / 2] {
                assert!(!uses_vector_loop(n, vector_bytes), "n={n}, width={vector_bytes}");
            }
            assert!(uses_vector_loop(vector_bytes, vector_bytes));
            assert!(uses_vector_loop(4 * vector_bytes, vector_bytes));
            assert!(!uses_vector_loop(3 * vector_bytes, vector_bytes));
            assert!(!uses_vector_loop(COPY_MEMCPY_THRESHOLD, vector_bytes));
        }

        assert!(!uses_vector_loop(1024, 0));
    }

    #[test]
    fn test_active_copy_small_powers_of_two() {
        let width = Active::VECTOR_BYTES.max(16);
        let mut n = 1;

        while n <= 4 * width {
            let src = bytes(n);
            let mut dst = vec![0u8; n];

            unsafe { copy_with::<Active>(&mut dst, &src) };
            assert_eq!(dst, src, "n={n}");

            n *= 2;
        }
    }

    #[test]
    fn test_portable_copy() {
        let src = bytes(256);
        let mut dst = vec![0u8; 256];

        unsafe { copy_with::<Scalar>(&mut dst, &src) };

        assert_eq!(dst, src);
    }

    #[test]
    fn test_copy_above_threshold() {
        let n = COPY_MEMCPY_THRESHOLD * 2;
        let src = bytes(n);
        let mut dst = vec![0u8; n];

        bulk_copy_bytes(&mut dst, &src);

        assert_eq!(dst, src);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_length_mismatch_panics() {
        let src = [1.0f32; 4];
        let mut dst = [0.0f32; 8];

        bulk_copy(&mut dst, &src);
    }
}
