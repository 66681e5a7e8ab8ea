//! Per-instruction-set kernels.
//!
//! Only the module matching the cfg emitted by `build.rs` is compiled, next
//! to the portable [`scalar`] kernel, which is always available.

#[cfg(avx512)]
pub mod avx512;

#[cfg(avx2)]
pub mod avx2;

#[cfg(sse)]
pub mod sse;

#[cfg(neon)]
pub mod neon;

pub mod scalar;

pub mod traits;

pub use traits::{FhtVector, Kernel};
