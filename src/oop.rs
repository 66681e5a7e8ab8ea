//! Two-buffer transform: bulk copy, then in-place transform of the copy.

use crate::copy::bulk_copy;
use crate::dispatch::{self, FhtFloat};
use crate::error::{length_mismatch, Result};
use crate::size;

/// Copies `input` into `output` and transforms `output` in place.
///
/// Both lengths are checked before the copy, so a failed call writes nothing.
/// The borrow rules keep `input` and `output` from aliasing.
pub(crate) fn transform_out_of_place<T: FhtFloat>(input: &[T], output: &mut [T], log_n: i32) -> Result<()> {
    let n = size::check_len(input.len(), log_n)?;

    if output.len() != n {
        return Err(length_mismatch(n, output.len()));
    }

    bulk_copy(output, input);
    dispatch::transform(output);

    Ok(())
}
