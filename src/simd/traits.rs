use std::ops::{Add, Sub};

/// A fixed-width register of `LANES` packed values of `T`.
///
/// Everything the butterfly network needs from an instruction set: unaligned
/// load/store, lane-wise add/sub and the Hadamard transform of the lanes of
/// a single register.
pub trait FhtVector<T: Copy>: Copy + Add<Output = Self> + Sub<Output = Self> {
    /// Number of `T` lanes in one register.
    const LANES: usize;

    /// Loads `LANES` values from `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `LANES` values. No alignment is required.
    unsafe fn load_unaligned(ptr: *const T) -> Self;

    /// Stores all lanes to `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `LANES` values. No alignment is required.
    unsafe fn store_unaligned(self, ptr: *mut T);

    /// Hadamard transform across the lanes of this register.
    ///
    /// Stage `s` (for `s = 1, 2, 4, ...`) maps lane `i` with bit `s` clear
    /// to `v[i] + v[i + s]` and its partner to `v[i] - v[i + s]`.
    fn hadamard(self) -> Self;
}

/// One instruction-set specialization of the transform: the two butterfly
/// entry points per precision plus the block copy.
///
/// Methods are `unsafe` because an implementation may execute instructions
/// the CPU has to support. The build script only selects a kernel the
/// target supports; [`crate::simd::scalar::Scalar`] is always safe.
pub trait Kernel {
    /// Short name, matching the `cfg` the build script emits.
    const NAME: &'static str;

    /// Width in bytes of the register used by [`Kernel::copy_blocks`].
    /// Zero means the kernel has no vector copy.
    const VECTOR_BYTES: usize;

    type F32: FhtVector<f32>;
    type F64: FhtVector<f64>;

    /// Transforms a buffer of at most `2 * F32::LANES` elements.
    ///
    /// # Safety
    ///
    /// The CPU must support the kernel's instruction set.
    unsafe fn butterfly_base_f32(buf: &mut [f32]);

    /// Transforms a buffer of at most `2 * F64::LANES` elements.
    ///
    /// # Safety
    ///
    /// The CPU must support the kernel's instruction set.
    unsafe fn butterfly_base_f64(buf: &mut [f64]);

    /// `lo[i], hi[i] = lo[i] + hi[i], lo[i] - hi[i]` for every `i`.
    ///
    /// # Safety
    ///
    /// The CPU must support the kernel's instruction set.
    unsafe fn butterfly_combine_f32(lo: &mut [f32], hi: &mut [f32]);

    /// `lo[i], hi[i] = lo[i] + hi[i], lo[i] - hi[i]` for every `i`.
    ///
    /// # Safety
    ///
    /// The CPU must support the kernel's instruction set.
    unsafe fn butterfly_combine_f64(lo: &mut [f64], hi: &mut [f64]);

    /// Copies `blocks` registers of `VECTOR_BYTES` bytes from `src` to `dst`.
    ///
    /// # Safety
    ///
    /// The CPU must support the kernel's instruction set, both pointers must
    /// be valid for `blocks * VECTOR_BYTES` bytes and the regions must not
    /// overlap.
    unsafe fn copy_blocks(dst: *mut u8, src: *const u8, blocks: usize);
}
