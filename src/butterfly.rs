//! Instruction-set independent parts of the butterfly network.
//!
//! The recursion splits a buffer into two disjoint halves with
//! `split_at_mut`, transforms each and combines them in place. Buffers of at
//! most two registers are handled by a closed-form network instead. The ISA
//! modules instantiate [`base_network`] and [`combine`] with their own vector
//! types inside `#[target_feature]` functions.

use num::Float;

use crate::dispatch::FhtFloat;
use crate::simd::{FhtVector, Kernel};

/// Transforms `buf` with kernel `K`.
///
/// # Safety
///
/// The CPU must support `K`'s instruction set. `buf.len()` must be a power of two.
pub(crate) unsafe fn transform<K: Kernel, T: FhtFloat>(buf: &mut [T]) {
    debug_assert!(buf.len().is_power_of_two());

    let n = buf.len();

    if n <= 2 * T::lanes::<K>() {
        unsafe { T::butterfly_base::<K>(buf) };
        return;
    }

    let (lo, hi) = buf.split_at_mut(n / 2);

    unsafe {
        transform::<K, T>(lo);
        transform::<K, T>(hi);
        T::butterfly_combine::<K>(lo, hi);
    }
}

/// Closed-form transform of a buffer of at most two registers.
///
/// # Safety
///
/// Same as the vector type's loads. `buf.len()` must be a power of two no
/// larger than `2 * V::LANES`.
#[inline(always)]
pub(crate) unsafe fn base_network<T: Float, V: FhtVector<T>>(buf: &mut [T]) {
    let n = buf.len();

    if n < V::LANES {
        scalar_network(buf);
        return;
    }

    let ptr = buf.as_mut_ptr();

    if n == V::LANES {
        unsafe { V::load_unaligned(ptr).hadamard().store_unaligned(ptr) };
        return;
    }

    debug_assert_eq!(n, 2 * V::LANES, "base case holds at most two registers");

    unsafe {
        let a = V::load_unaligned(ptr).hadamard();
        let b = V::load_unaligned(ptr.add(V::LANES)).hadamard();

        (a + b).store_unaligned(ptr);
        (a - b).store_unaligned(ptr.add(V::LANES));
    }
}

/// Combines two transformed halves in place, one register at a time, with
/// a scalar loop for whatever does not fill a register.
///
/// # Safety
///
/// Same as the vector type's loads.
#[inline(always)]
pub(crate) unsafe fn combine<T: Float, V: FhtVector<T>>(lo: &mut [T], hi: &mut [T]) {
    debug_assert_eq!(lo.len(), hi.len());

    let half = lo.len().min(hi.len());
    let body = half - half % V::LANES;

    let lo_ptr = lo.as_mut_ptr();
    let hi_ptr = hi.as_mut_ptr();

    for i in (0..body).step_by(V::LANES) {
        unsafe {
            let a = V::load_unaligned(lo_ptr.add(i));
            let b = V::load_unaligned(hi_ptr.add(i));

            (a + b).store_unaligned(lo_ptr.add(i));
            (a - b).store_unaligned(hi_ptr.add(i));
        }
    }

    for (a, b) in lo[body..half].iter_mut().zip(hi[body..half].iter_mut()) {
        let (u, v) = (*a, *b);
        *a = u + v;
        *b = u - v;
    }
}

/// Hand-unrolled networks for buffers smaller than one register.
#[inline(always)]
pub(crate) fn scalar_network<T: Float>(buf: &mut [T]) {
    match buf.len() {
        0 | 1 => {}
        2 => butterfly2(buf),
        4 => butterfly4(buf),
        8 => butterfly8(buf),
        _ => iterative_network(buf),
    }
}

#[inline(always)]
fn butterfly2<T: Float>(buf: &mut [T]) {
    let (u, v) = (buf[0], buf[1]);
    buf[0] = u + v;
    buf[1] = u - v;
}

#[inline(always)]
fn butterfly4<T: Float>(buf: &mut [T]) {
    let (a, b, c, d) = (buf[0], buf[1], buf[2], buf[3]);

    let t0 = a + b;
    let t1 = a - b;
    let t2 = c + d;
    let t3 = c - d;

    buf[0] = t0 + t2;
    buf[1] = t1 + t3;
    buf[2] = t0 - t2;
    buf[3] = t1 - t3;
}

#[inline(always)]
fn butterfly8<T: Float>(buf: &mut [T]) {
    let (lo, hi) = buf.split_at_mut(4);
    butterfly4(lo);
    butterfly4(hi);

    for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
        let (u, v) = (*a, *b);
        *a = u + v;
        *b = u - v;
    }
}

/// Radix-2 network over any power-of-two length.
pub(crate) fn iterative_network<T: Float>(buf: &mut [T]) {
    let n = buf.len();
    let mut stride = 1;

    while stride < n {
        for block in buf.chunks_exact_mut(2 * stride) {
            let (lo, hi) = block.split_at_mut(stride);
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let (u, v) = (*a, *b);
                *a = u + v;
                *b = u - v;
            }
        }
        stride *= 2;
    }
}
