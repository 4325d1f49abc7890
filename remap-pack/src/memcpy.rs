//! Block-copy kernels: each fast line moves as one contiguous copy.
//!
//! Identity order only. The fast axis is contiguous across `nfast * nqty`
//! scalars on both sides, so the innermost loop collapses to
//! `ptr::copy_nonoverlapping` per (slow, mid) line. Permuted unpacks have a
//! non-unit fast stride on the strided side and use [`crate::pointer`]
//! instead.

use remap_plan::{PackPlan3d, Permutation};

use crate::check_capacity;

/// Pack a strided subvolume into contiguous `buf`.
pub fn pack<T: Copy>(data: &[T], buf: &mut [T], plan: &PackPlan3d) {
    check_capacity(data, buf, plan, Permutation::None);
    let nline = plan.nfast * plan.nqty;
    if nline == 0 {
        return;
    }
    let src = data.as_ptr();
    let dst = buf.as_mut_ptr();
    for slow in 0..plan.nslow {
        let plane = slow * plan.stride_plane;
        let upto = slow * plan.nmid * nline;
        for mid in 0..plan.nmid {
            unsafe {
                std::ptr::copy_nonoverlapping(
                    src.add(plane + mid * plan.stride_line),
                    dst.add(upto + mid * nline),
                    nline,
                );
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
    let src = buf.as_ptr();
    let dst = data.as_mut_ptr();
    for slow in 0..plan.nslow {
        let plane = slow * plan.stride_plane;
        let upto = slow * plan.nmid * nline;
        for mid in 0..plan.nmid {
            unsafe {
                std::ptr::copy_nonoverlapping(
                    src.add(upto + mid * nline),
                    dst.add(plane + mid * plan.stride_line),
                    nline,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;

    #[test]
    fn test_pack_matches_array_style() {
        let plan = PackPlan3d::new(5, 3, 4, 11, 37, 1).unwrap();
        let data: Vec<f32> = (0..plan.span(Permutation::None))
            .map(|i| i as f32)
            .collect();
        let mut a = vec![0.0f32; plan.buf_len()];
        let mut m = vec![0.0f32; plan.buf_len()];
        array::pack(&data, &mut a, &plan);
        pack(&data, &mut m, &plan);
        assert_eq!(a, m);
    }

    #[test]
    fn test_unpack_matches_array_style() {
        let plan = PackPlan3d::new(5, 3, 4, 11, 37, 1).unwrap();
        let buf: Vec<f32> = (0..plan.buf_len()).map(|i| i as f32).collect();
        let span = plan.span(Permutation::None);
        let mut a = vec![-1.0f32; span];
        let mut m = vec![-1.0f32; span];
        array::unpack(&buf, &mut a, &plan);
        unpack(&buf, &mut m, &plan);
        assert_eq!(a, m);
    }

    #[test]
    fn test_round_trip_through_block_copies() {
        let plan = PackPlan3d::new(4, 2, 3, 8, 16, 2).unwrap();
        let span = plan.span(Permutation::None);
        let data: Vec<f64> = (0..span).map(|i| (i * i) as f64).collect();
        let mut buf = vec![0.0f64; plan.buf_len()];
        pack(&data, &mut buf, &plan);
        let mut back = data.clone();
        unpack(&buf, &mut back, &plan);
        assert_eq!(back, data);
    }
}
