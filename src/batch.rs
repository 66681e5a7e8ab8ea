//! Many independent transforms over one buffer.
//!
//! The kernel itself is single-threaded; parallelism lives here, one chunk
//! per task, the way the rest of the crate uses `rayon`.

use ndarray::{ArrayBase, Axis, DataMut, Ix2};
use rayon::prelude::*;

use crate::array::FhtArray;
use crate::dispatch::{self, FhtFloat};
use crate::error::{FhtError, Result};
use crate::{size, PARALLEL_BATCH_THRESHOLD};

fn check_batch(len: usize, log_n: i32) -> Result<usize> {
    let n = size::validate_log_n(log_n)?;

    if len % n != 0 {
        return Err(FhtError::RaggedBatch {
            len,
            transform_len: n,
        });
    }

    Ok(n)
}

/// Transforms every consecutive `2^log_n` chunk of `data` in place.
///
/// # Errors
///
/// - [`FhtError::InvalidSize`] when `log_n` is outside `[0, 30]`.
/// - [`FhtError::RaggedBatch`] when `data.len()` is not a multiple of `2^log_n`.
pub fn fht_batch<T: FhtFloat>(data: &mut [T], log_n: i32) -> Result<()> {
    let n = check_batch(data.len(), log_n)?;

    data.chunks_exact_mut(n).for_each(|chunk| dispatch::transform(chunk));

    Ok(())
}

/// Parallel [`fht_batch`]. Batches smaller than
/// [`PARALLEL_BATCH_THRESHOLD`] elements run on the calling thread.
pub fn par_fht_batch<T: FhtFloat>(data: &mut [T], log_n: i32) -> Result<()> {
    let n = check_batch(data.len(), log_n)?;

    if data.len() < PARALLEL_BATCH_THRESHOLD || data.len() == n {
        data.chunks_exact_mut(n).for_each(|chunk| dispatch::transform(chunk));
    } else {
        data.par_chunks_exact_mut(n).for_each(|chunk| dispatch::transform(chunk));
    }

    Ok(())
}

/// Transforms every row of a 2-D array in place.
///
/// Standard-layout arrays are batched straight from their backing slice.
/// Other layouts hand one row view to each rayon task, and each task copies
/// its strided row through a contiguous buffer.
///
/// # Errors
///
/// [`FhtError::NotPowerOfTwo`] (or [`FhtError::InvalidSize`]) when the row
/// length is not a supported transform length.
pub fn par_fht_rows<T, S>(rows: &mut ArrayBase<S, Ix2>) -> Result<()>
where
    T: FhtFloat,
    S: DataMut<Elem = T>,
{
    let log_n = size::log_n_for_len(rows.ncols())?;

    if let Some(data) = rows.as_slice_mut() {
        return par_fht_batch(data, log_n);
    }

    rows.axis_iter_mut(Axis(0))
        .into_par_iter()
        .try_for_each(|mut row| row.fht_inplace())
}
