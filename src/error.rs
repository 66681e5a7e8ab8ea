//! Error types for fhtly operations.
//!
//! The kernel itself can only fail with [`FhtError::InvalidSize`]. The other
//! variants come from the slice, ndarray and batch layers, which know the
//! buffer length and refuse to run on a buffer that does not match it.

use std::fmt;

/// Errors that can occur during fhtly operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FhtError {
    /// `log_n` is outside the supported range `[0, 30]`.
    InvalidSize {
        /// The rejected size exponent.
        log_n: i32,
    },
    /// A buffer does not hold exactly `2^log_n` elements.
    LengthMismatch {
        /// Length implied by `log_n`.
        expected: usize,
        /// Length of the buffer that was passed.
        actual: usize,
    },
    /// A length-derived transform was asked for a length that is not a power of two.
    NotPowerOfTwo {
        /// The offending length.
        len: usize,
    },
    /// A batch buffer is not a whole number of transforms long.
    RaggedBatch {
        /// Length of the batch buffer.
        len: usize,
        /// Length of a single transform.
        transform_len: usize,
    },
}

impl FhtError {
    /// Integer status for callers that speak status codes. `0` is reserved
    /// for success.
    pub fn status(&self) -> i32 {
        match self {
            FhtError::InvalidSize { .. } => -1,
            FhtError::LengthMismatch { .. } => -2,
            FhtError::NotPowerOfTwo { .. } => -3,
            FhtError::RaggedBatch { .. } => -4,
        }
    }
}

impl fmt::Display for FhtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FhtError::InvalidSize { log_n } => {
                write!(f, "Invalid size: log_n = {} is outside [0, 30]", log_n)
            }
            FhtError::LengthMismatch { expected, actual } => write!(
                f,
                "Length mismatch: expected {} elements, got {}",
                expected, actual
            ),
            FhtError::NotPowerOfTwo { len } => {
                write!(f, "Invalid length: {} is not a power of two", len)
            }
            FhtError::RaggedBatch { len, transform_len } => write!(
                f,
                "Ragged batch: {} elements is not a multiple of {}",
                len, transform_len
            ),
        }
    }
}

impl std::error::Error for FhtError {}

/// Result type alias for fhtly operations.
pub type Result<T> = std::result::Result<T, FhtError>;

/// Maps a transform result to its integer status (`0` on success).
pub fn status_code(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => error.status(),
    }
}

/// Creates an invalid size error.
pub fn invalid_size(log_n: i32) -> FhtError {
    FhtError::InvalidSize { log_n }
}

/// Creates a length mismatch error.
pub fn length_mismatch(expected: usize, actual: usize) -> FhtError {
    FhtError::LengthMismatch { expected, actual }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_size_display() {
        let error = invalid_size(31);
        let display = format!("{}", error);
        assert!(display.contains("Invalid size"));
        assert!(display.contains("log_n = 31"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let error = length_mismatch(8, 7);
        let display = format!("{}", error);
        assert!(display.contains("Length mismatch"));
        assert!(display.contains("expected 8"));
        assert!(display.contains("got 7"));
    }

    #[test]
    fn test_ragged_batch_display() {
        let error = FhtError::RaggedBatch {
            len: 10,
            transform_len: 4,
        };
        let display = format!("{}", error);
        assert!(display.contains("10 elements"));
        assert!(display.contains("multiple of 4"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(status_code(&Ok(())), 0);
        assert_eq!(status_code(&Err(invalid_size(-1))), -1);
        assert_eq!(status_code(&Err(length_mismatch(4, 2))), -2);
        assert_eq!(status_code(&Err(FhtError::NotPowerOfTwo { len: 3 })), -3);
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(invalid_size(31), invalid_size(31));
        assert_ne!(invalid_size(31), invalid_size(-1));
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = invalid_size(40);

        let _: &dyn std::error::Error = &error;

        assert!(std::error::Error::source(&error).is_none());
    }
}
