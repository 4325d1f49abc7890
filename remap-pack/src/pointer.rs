//! Pointer-walking kernels: an advancing cursor per logical axis.
//!
//! Contiguous runs walk `ptr < end`; strided advances use `wrapping_add`,
//! so the cursor left one step past the final line is never materialised as
//! an out-of-bounds `add`. Dereferences stay under the entry capacity
//! check, exactly as in [`crate::array`].

use remap_plan::{PackPlan3d, Permutation};

use crate::check_capacity;

// ============================================================================
// Identity order
// ============================================================================

/// Pack a strided subvolume into contiguous `buf`.
pub fn pack<T: Copy>(data: &[T], buf: &mut [T], plan: &PackPlan3d) {
    check_capacity(data, buf, plan, Permutation::None);
    let nline = plan.nfast * plan.nqty;
    if nline == 0 {
        return;
    }
    let src = data.as_ptr();
    let mut out = buf.as_mut_ptr();
    for slow in 0..plan.nslow {
        let plane = slow * plan.stride_plane;
        for mid in 0..plan.nmid {
            unsafe {
                let mut line = src.add(plane + mid * plan.stride_line);
                let end = line.add(nline);
                while line < end {
                    *out = *line;
                    out = out.add(1);
                    line = line.add(1);
                }
            }
        }
    }
}

/// Unpack contiguous `buf` into a strided subvolume, same axis order.
pub fn unpack<T: Copy>(buf: &[T], data: &mut [T], plan: &PackPlan3d) {
    check_capacity(data, buf, plan, Permutation::None);
    let nline = plan.nfast * plan.nqty;
    if nline == 0 {
        return;
    }
    let mut out = buf.as_ptr();
    let dst = data.as_mut_ptr();
    for slow in 0..plan.nslow {
        let plane = slow * plan.stride_plane;
        for mid in 0..plan.nmid {
            unsafe {
                let mut line = dst.add(plane + mid * plan.stride_line);
                let end = line.add(nline);
                while line < end {
                    *line = *out;
                    out = out.add(1);
                    line = line.add(1);
                }
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
    let mut out = buf.as_ptr();
    let dst = data.as_mut_ptr();
    for slow in 0..plan.nslow {
        let plane = slow * plan.stride_line;
        for mid in 0..plan.nmid {
            let mut cell = dst.wrapping_add(plane + mid);
            for _ in 0..plan.nfast {
                unsafe {
                    *cell = *out;
                    out = out.add(1);
                }
                cell = cell.wrapping_add(plan.stride_plane);
            }
        }
    }
}

/// Unpack with a one-axis rotation, 2 scalars per element.
pub fn unpack_permute1_2<T: Copy>(buf: &[T], data: &mut [T], plan: &PackPlan3d) {
    assert_eq!(plan.nqty, 2, "kernel specialised for nqty = 2");
    check_capacity(data, buf, plan, Permutation::One);
    let mut out = buf.as_ptr();
    let dst = data.as_mut_ptr();
    for slow in 0..plan.nslow {
        let plane = slow * plan.stride_line;
        for mid in 0..plan.nmid {
            let mut cell = dst.wrapping_add(plane + 2 * mid);
            for _ in 0..plan.nfast {
                unsafe {
                    *cell = *out;
                    *cell.add(1) = *out.add(1);
                    out = out.add(2);
                }
                cell = cell.wrapping_add(plan.stride_plane);
            }
        }
    }
}

/// Unpack with a one-axis rotation, any multiplicity.
pub fn unpack_permute1_n<T: Copy>(buf: &[T], data: &mut [T], plan: &PackPlan3d) {
    check_capacity(data, buf, plan, Permutation::One);
    let mut out = buf.as_ptr();
    let dst = data.as_mut_ptr();
    for slow in 0..plan.nslow {
        let plane = slow * plan.stride_line;
        for mid in 0..plan.nmid {
            let mut start = dst.wrapping_add(plane + plan.nqty * mid);
            for _ in 0..plan.nfast {
                unsafe {
                    let mut cell = start;
                    for _ in 0..plan.nqty {
                        *cell = *out;
                        out = out.add(1);
                        cell = cell.add(1);
                    }
                }
                start = start.wrapping_add(plan.stride_plane);
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
    let mut out = buf.as_ptr();
    let dst = data.as_mut_ptr();
    for slow in 0..plan.nslow {
        for mid in 0..plan.nmid {
            let mut cell = dst.wrapping_add(slow + mid * plan.stride_plane);
            for _ in 0..plan.nfast {
                unsafe {
                    *cell = *out;
                    out = out.add(1);
                }
                cell = cell.wrapping_add(plan.stride_line);
            }
        }
    }
}

/// Unpack with a two-axis rotation, 2 scalars per element.
pub fn unpack_permute2_2<T: Copy>(buf: &[T], data: &mut [T], plan: &PackPlan3d) {
    assert_eq!(plan.nqty, 2, "kernel specialised for nqty = 2");
    check_capacity(data, buf, plan, Permutation::Two);
    let mut out = buf.as_ptr();
    let dst = data.as_mut_ptr();
    for slow in 0..plan.nslow {
        for mid in 0..plan.nmid {
            let mut cell = dst.wrapping_add(2 * slow + mid * plan.stride_plane);
            for _ in 0..plan.nfast {
                unsafe {
                    *cell = *out;
                    *cell.add(1) = *out.add(1);
                    out = out.add(2);
                }
                cell = cell.wrapping_add(plan.stride_line);
            }
        }
    }
}

/// Unpack with a two-axis rotation, any multiplicity.
pub fn unpack_permute2_n<T: Copy>(buf: &[T], data: &mut [T], plan: &PackPlan3d) {
    check_capacity(data, buf, plan, Permutation::Two);
    let mut out = buf.as_ptr();
    let dst = data.as_mut_ptr();
    for slow in 0..plan.nslow {
        for mid in 0..plan.nmid {
            let mut start = dst.wrapping_add(plan.nqty * slow + mid * plan.stride_plane);
            for _ in 0..plan.nfast {
                unsafe {
                    let mut cell = start;
                    for _ in 0..plan.nqty {
                        *cell = *out;
                        out = out.add(1);
                        cell = cell.add(1);
                    }
                }
                start = start.wrapping_add(plan.stride_line);
            }
        }
    }
}
