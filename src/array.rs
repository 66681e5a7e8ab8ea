//! `ndarray` integration.
//!
//! ```rust
//! use fhtly::FhtArray;
//! use ndarray::Array1;
//!
//! let mut data = Array1::from(vec![1.0f64, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0]);
//! data.fht_inplace().unwrap();
//! assert_eq!(data[1], 8.0);
//! ```

use ndarray::{Array1, ArrayBase, DataMut, Ix1};

use crate::dispatch::FhtFloat;
use crate::error::Result;
use crate::{size, transform_inplace, transform_out_of_place};

/// Transforms on one-dimensional arrays and mutable views. The length must
/// be a power of two no larger than `2^30`.
pub trait FhtArray<T: FhtFloat> {
    /// Transforms the array in place.
    fn fht_inplace(&mut self) -> Result<()>;

    /// Returns the transform as a new array, leaving `self` unchanged.
    fn fht(&self) -> Result<Array1<T>>;
}

impl<T, S> FhtArray<T> for ArrayBase<S, Ix1>
where
    T: FhtFloat,
    S: DataMut<Elem = T>,
{
    fn fht_inplace(&mut self) -> Result<()> {
        let log_n = size::log_n_for_len(self.len())?;

        if let Some(buf) = self.as_slice_mut() {
            return transform_inplace(buf, log_n);
        }

        // Strided views go through a contiguous copy
        let mut buf = self.to_vec();
        transform_inplace(&mut buf, log_n)?;
        self.iter_mut().zip(buf).for_each(|(dst, src)| *dst = src);

        Ok(())
    }

    fn fht(&self) -> Result<Array1<T>> {
        let log_n = size::log_n_for_len(self.len())?;

        let output = match self.as_slice() {
            Some(input) => {
                let mut output = vec![T::zero(); input.len()];
                transform_out_of_place(input, &mut output, log_n)?;
                output
            }
            None => {
                let mut output = self.to_vec();
                transform_inplace(&mut output, log_n)?;
                output
            }
        };

        Ok(Array1::from_vec(output))
    }
}
