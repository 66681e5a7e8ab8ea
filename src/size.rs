//! Size validation.
//!
//! Everything here runs before a buffer is touched, so a rejected call
//! leaves its buffers exactly as they were.

use crate::error::{invalid_size, length_mismatch, FhtError, Result};

/// Largest supported size exponent.
pub const MAX_LOG_N: i32 = 30;

/// Checks that `log_n` is in `[0, MAX_LOG_N]` and returns `2^log_n`.
///
/// `log_n = 0` is valid: a single element is its own transform.
#[inline]
pub fn validate_log_n(log_n: i32) -> Result<usize> {
    if !(0..=MAX_LOG_N).contains(&log_n) {
        return Err(invalid_size(log_n));
    }

    Ok(1usize << log_n)
}

/// Validates `log_n`, then checks that a buffer of `len` elements holds
/// exactly `2^log_n` of them.
#[inline]
pub fn check_len(len: usize, log_n: i32) -> Result<usize> {
    let n = validate_log_n(log_n)?;

    if len != n {
        return Err(length_mismatch(n, len));
    }

    Ok(n)
}

/// Derives `log_n` from a buffer length.
pub fn log_n_for_len(len: usize) -> Result<i32> {
    if !len.is_power_of_two() {
        return Err(FhtError::NotPowerOfTwo { len });
    }

    let log_n = len.trailing_zeros() as i32;
    validate_log_n(log_n)?;

    Ok(log_n)
}
