//! Index-arithmetic kernels: addresses recomputed from integer counters.
//!
//! Running in/out counters, one multiply per line start; the compiler is
//! trusted to hoist the rest. All accesses are unchecked after the entry
//! capacity check, so every offset below stays under
//! `plan.span(permutation)` on the strided side and `plan.buf_len()` on the
//! contiguous side.

use remap_plan::{PackPlan3d, Permutation};

use crate::check_capacity;

// ============================================================================
// Identity order
// ============================================================================

/// Pack a strided subvolume into contiguous `buf`.
pub fn pack<T: Copy>(data: &[T], buf: &mut [T], plan: &PackPlan3d) {
    check_capacity(data, buf, plan, Permutation::None);
    let nline = plan.nfast * plan.nqty;
    let mut out = 0usize;
    for slow in 0..plan.nslow {
        let plane = slow * plan.stride_plane;
        for mid in 0..plan.nmid {
            let mut idx = plane + mid * plan.stride_line;
            for _ in 0..nline {
                unsafe { *buf.get_unchecked_mut(out) = *data.get_unchecked(idx) };
                out += 1;
                idx += 1;
            }
        }
    }
}

/// Unpack contiguous `buf` into a strided subvolume, same axis order.
pub fn unpack<T: Copy>(buf: &[T], data: &mut [T], plan: &PackPlan3d) {
    check_capacity(data, buf, plan, Permutation::None);
    let nline = plan.nfast * plan.nqty;
    let mut out = 0usize;
    for slow in 0..plan.nslow {
        let plane = slow * plan.stride_plane;
        for mid in 0..plan.nmid {
            let mut idx = plane + mid * plan.stride_line;
            for _ in 0..nline {
                unsafe { *data.get_unchecked_mut(idx) = *buf.get_unchecked(out) };
                out += 1;
                idx += 1;
            }
        }
    }
}

// ============================================================================
// One-axis rotation
// ============================================================================

/// Unpack with a one-axis rotation, 1 scalar per element.
pub fn unpack_permute1_1<T: Copy>(buf: &[T], data: &mut [T], plan: &PackPlan3d) {
    assert_eq!(plan.nqty, 1, "kernel specialised for nqty = 1");
    check_capacity(data, buf, plan, Permutation::One);
    let mut out = 0usize;
    for slow in 0..plan.nslow {
        let plane = slow * plan.stride_line;
        for mid in 0..plan.nmid {
            let mut idx = plane + mid;
            for _ in 0..plan.nfast {
                unsafe { *data.get_unchecked_mut(idx) = *buf.get_unchecked(out) };
                out += 1;
                idx += plan.stride_plane;
            }
        }
    }
}

/// Unpack with a one-axis rotation, 2 scalars per element.
pub fn unpack_permute1_2<T: Copy>(buf: &[T], data: &mut [T], plan: &PackPlan3d) {
    assert_eq!(plan.nqty, 2, "kernel specialised for nqty = 2");
    check_capacity(data, buf, plan, Permutation::One);
    let mut out = 0usize;
    for slow in 0..plan.nslow {
        let plane = slow * plan.stride_line;
        for mid in 0..plan.nmid {
            let mut idx = plane + 2 * mid;
            for _ in 0..plan.nfast {
                unsafe {
                    *data.get_unchecked_mut(idx) = *buf.get_unchecked(out);
                    *data.get_unchecked_mut(idx + 1) = *buf.get_unchecked(out + 1);
                }
                out += 2;
                idx += plan.stride_plane;
            }
        }
    }
}

/// Unpack with a one-axis rotation, any multiplicity.
pub fn unpack_permute1_n<T: Copy>(buf: &[T], data: &mut [T], plan: &PackPlan3d) {
    check_capacity(data, buf, plan, Permutation::One);
    let mut out = 0usize;
    for slow in 0..plan.nslow {
        let plane = slow * plan.stride_line;
        for mid in 0..plan.nmid {
            let mut start = plane + plan.nqty * mid;
            for _ in 0..plan.nfast {
                let mut idx = start;
                for _ in 0..plan.nqty {
                    unsafe { *data.get_unchecked_mut(idx) = *buf.get_unchecked(out) };
                    out += 1;
                    idx += 1;
                }
                start += plan.stride_plane;
            }
        }
    }
}

// ============================================================================
// Two-axis rotation
// ============================================================================

/// Unpack with a two-axis rotation, 1 scalar per element.
pub fn unpack_permute2_1<T: Copy>(buf: &[T], data: &mut [T], plan: &PackPlan3d) {
    assert_eq!(plan.nqty, 1, "kernel specialised for nqty = 1");
    check_capacity(data, buf, plan, Permutation::Two);
    let mut out = 0usize;
    for slow in 0..plan.nslow {
        for mid in 0..plan.nmid {
            let mut idx = slow + mid * plan.stride_plane;
            for _ in 0..plan.nfast {
                unsafe { *data.get_unchecked_mut(idx) = *buf.get_unchecked(out) };
                out += 1;
                idx += plan.stride_line;
            }
        }
    }
}

/// Unpack with a two-axis rotation, 2 scalars per element.
pub fn unpack_permute2_2<T: Copy>(buf: &[T], data: &mut [T], plan: &PackPlan3d) {
    assert_eq!(plan.nqty, 2, "kernel specialised for nqty = 2");
    check_capacity(data, buf, plan, Permutation::Two);
    let mut out = 0usize;
    for slow in 0..plan.nslow {
        for mid in 0..plan.nmid {
            let mut idx = 2 * slow + mid * plan.stride_plane;
            for _ in 0..plan.nfast {
                unsafe {
                    *data.get_unchecked_mut(idx) = *buf.get_unchecked(out);
                    *data.get_unchecked_mut(idx + 1) = *buf.get_unchecked(out + 1);
                }
                out += 2;
                idx += plan.stride_line;
            }
        }
    }
}

/// Unpack with a two-axis rotation, any multiplicity.
pub fn unpack_permute2_n<T: Copy>(buf: &[T], data: &mut [T], plan: &PackPlan3d) {
    check_capacity(data, buf, plan, Permutation::Two);
    let mut out = 0usize;
    for slow in 0..plan.nslow {
        for mid in 0..plan.nmid {
            let mut start = plan.nqty * slow + mid * plan.stride_plane;
            for _ in 0..plan.nfast {
                let mut idx = start;
                for _ in 0..plan.nqty {
                    unsafe { *data.get_unchecked_mut(idx) = *buf.get_unchecked(out) };
                    out += 1;
                    idx += 1;
                }
                start += plan.stride_line;
            }
        }
    }
}
