//! # fhtly
//!
//! Vectorized Fast Hadamard Transform (FHT) for `f32` and `f64` buffers.
//!
//! The transform computes `y = Hₙx`, where `Hₙ` is the Sylvester-ordered
//! Hadamard matrix of order `n = 2^log_n`, in `O(n log n)` without ever
//! materializing the matrix. The build script selects exactly one kernel at
//! compile time (AVX-512, AVX2, SSE2, NEON or a portable fallback) and the
//! public API is identical whichever one is compiled in.
//!
//! No normalization is applied: transforming twice returns `n · x`. Use
//! [`Fht::ifht_inplace`] for the normalized inverse.
//!
//! ```rust
//! let mut data = vec![1.0f32, -1.0, 1.0, -1.0];
//! fhtly::fht_f32(&mut data, 2).unwrap();
//! assert_eq!(data, vec![0.0, 4.0, 0.0, 0.0]);
//!
//! let input = vec![1.0f64; 8];
//! let mut output = vec![0.0f64; 8];
//! fhtly::fht_f64_oop(&input, &mut output, 3).unwrap();
//! assert_eq!(output[0], 8.0);
//! ```

#![cfg_attr(
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        unstable_avx512
    ),
    feature(avx512_target_feature, stdarch_x86_avx512)
)]

pub mod array;
pub mod batch;
mod butterfly;
pub mod copy;
pub mod dispatch;
pub mod error;
mod oop;
pub mod simd;
pub mod size;

pub use array::FhtArray;
pub use batch::{fht_batch, par_fht_batch, par_fht_rows};
pub use copy::{bulk_copy, bulk_copy_bytes};
pub use dispatch::{backend_name, lane_count, vector_bytes, FhtFloat};
pub use error::{status_code, FhtError, Result};
pub use size::MAX_LOG_N;

/// Byte count at and above which [`bulk_copy`] hands over to the generic copy.
pub const COPY_MEMCPY_THRESHOLD: usize = 1 << 20;

/// Total element count below which batch transforms stay on the calling thread.
pub const PARALLEL_BATCH_THRESHOLD: usize = 1 << 16;

/// Transforms `buf` in place.
///
/// `buf.len()` must be exactly `2^log_n`. On error the buffer is untouched.
///
/// # Errors
///
/// - [`FhtError::InvalidSize`] when `log_n` is outside `[0, 30]`.
/// - [`FhtError::LengthMismatch`] when `buf.len() != 2^log_n`.
#[inline]
pub fn transform_inplace<T: FhtFloat>(buf: &mut [T], log_n: i32) -> Result<()> {
    size::check_len(buf.len(), log_n)?;
    dispatch::transform(buf);
    Ok(())
}

/// Copies `input` into `output`, then transforms `output` in place.
///
/// `input` is never modified. Both slices must hold exactly `2^log_n`
/// elements.
///
/// # Errors
///
/// Same as [`transform_inplace`], checked against both slices before
/// anything is written.
#[inline]
pub fn transform_out_of_place<T: FhtFloat>(input: &[T], output: &mut [T], log_n: i32) -> Result<()> {
    oop::transform_out_of_place(input, output, log_n)
}

/// In-place transform of a single-precision buffer.
pub fn fht_f32(buf: &mut [f32], log_n: i32) -> Result<()> {
    transform_inplace(buf, log_n)
}

/// In-place transform of a double-precision buffer.
pub fn fht_f64(buf: &mut [f64], log_n: i32) -> Result<()> {
    transform_inplace(buf, log_n)
}

/// Out-of-place transform of a single-precision buffer.
pub fn fht_f32_oop(input: &[f32], output: &mut [f32], log_n: i32) -> Result<()> {
    transform_out_of_place(input, output, log_n)
}

/// Out-of-place transform of a double-precision buffer.
pub fn fht_f64_oop(input: &[f64], output: &mut [f64], log_n: i32) -> Result<()> {
    transform_out_of_place(input, output, log_n)
}

/// Slice-level transforms that derive `log_n` from the slice length.
pub trait Fht: Sized {
    /// Transforms `data` in place. The length must be a power of two no
    /// larger than `2^30`.
    fn fht_inplace(data: &mut [Self]) -> Result<()>;

    /// Writes the transform of `input` into `output`.
    fn fht(input: &[Self], output: &mut [Self]) -> Result<()>;

    /// Normalized inverse: transforms `data` and scales it by `1/n`.
    fn ifht_inplace(data: &mut [Self]) -> Result<()>;
}

impl<T: FhtFloat> Fht for T {
    fn fht_inplace(data: &mut [T]) -> Result<()> {
        let log_n = size::log_n_for_len(data.len())?;
        transform_inplace(data, log_n)
    }

    fn fht(input: &[T], output: &mut [T]) -> Result<()> {
        let log_n = size::log_n_for_len(input.len())?;
        transform_out_of_place(input, output, log_n)
    }

    fn ifht_inplace(data: &mut [T]) -> Result<()> {
        T::fht_inplace(data)?;

        let scale = T::one() / T::from_len(data.len());
        data.iter_mut().for_each(|x| *x = *x * scale);

        Ok(())
    }
}
