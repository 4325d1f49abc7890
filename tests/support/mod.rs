//! Shared helpers for the integration tests.
#![allow(dead_code)] // each test binary uses a different subset

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use remap3d::{PackPlan3d, Permutation};

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn normal_f64(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.sample(StandardNormal)).collect()
}

/// Random plan with extents in `1..=max_extent` and strides padded past the
/// minimum non-aliasing layout for the given permutation class.
pub fn random_plan(rng: &mut StdRng, max_extent: usize, nqty: usize, perm: Permutation) -> PackPlan3d {
    let nfast = rng.gen_range(1..=max_extent);
    let nmid = rng.gen_range(1..=max_extent);
    let nslow = rng.gen_range(1..=max_extent);
    let pad_a = rng.gen_range(0..4);
    let pad_b = rng.gen_range(0..4);
    let (stride_line, stride_plane) = match perm {
        // Identity: fast line of nfast*nqty scalars, then mid, then slow.
        Permutation::None => {
            let line = nfast * nqty + pad_a;
            (line, nmid * line + pad_b)
        }
        // Permute1: mid blocks of nmid*nqty scalars step by stride_line
        // along slow, and stride_plane steps along fast past all of them.
        Permutation::One => {
            let line = nmid * nqty + pad_a;
            (line, nslow * line + pad_b)
        }
        // Permute2: slow blocks of nslow*nqty scalars step by stride_plane
        // along mid, and stride_line steps along fast past all of them.
        Permutation::Two => {
            let plane = nslow * nqty + pad_a;
            (nmid * plane + pad_b, plane)
        }
    };
    PackPlan3d::new(nfast, nmid, nslow, stride_line, stride_plane, nqty).unwrap()
}
