//! Observational equivalence across the kernel matrix: every style and
//! every multiplicity specialisation must produce bit-identical output.

mod support;

use remap3d::{array, memcpy, pointer, KernelFn, PackPlan3d, Permutation};
use support::{normal_f64, random_plan, rng};

fn bits(v: &[f64]) -> Vec<u64> {
    v.iter().map(|x| x.to_bits()).collect()
}

fn run_pack(kernel: KernelFn<f64>, src: &[f64], plan: &PackPlan3d) -> Vec<f64> {
    let mut buf = vec![0.0f64; plan.buf_len()];
    kernel(src, &mut buf, plan);
    buf
}

fn run_unpack(
    kernel: KernelFn<f64>,
    buf: &[f64],
    plan: &PackPlan3d,
    perm: Permutation,
) -> Vec<f64> {
    let mut data = vec![-0.0f64; plan.span(perm)];
    kernel(buf, &mut data, plan);
    data
}

#[test]
fn test_identity_styles_bit_identical() {
    let mut r = rng(7);
    for nqty in [1usize, 2, 3, 5] {
        for _ in 0..20 {
            let plan = random_plan(&mut r, 16, nqty, Permutation::None);
            let src = normal_f64(&mut r, plan.span(Permutation::None));
            let a = run_pack(array::pack, &src, &plan);
            let p = run_pack(pointer::pack, &src, &plan);
            let m = run_pack(memcpy::pack, &src, &plan);
            assert_eq!(bits(&a), bits(&p), "pack pointer vs array: {plan:?}");
            assert_eq!(bits(&p), bits(&m), "pack memcpy vs pointer: {plan:?}");

            let buf = normal_f64(&mut r, plan.buf_len());
            let a = run_unpack(array::unpack, &buf, &plan, Permutation::None);
            let p = run_unpack(pointer::unpack, &buf, &plan, Permutation::None);
            let m = run_unpack(memcpy::unpack, &buf, &plan, Permutation::None);
            assert_eq!(bits(&a), bits(&p), "unpack pointer vs array: {plan:?}");
            assert_eq!(bits(&p), bits(&m), "unpack memcpy vs pointer: {plan:?}");
        }
    }
}

#[test]
fn test_permute1_styles_bit_identical() {
    let mut r = rng(11);
    let table: [(usize, KernelFn<f64>, KernelFn<f64>); 3] = [
        (1, array::unpack_permute1_1, pointer::unpack_permute1_1),
        (2, array::unpack_permute1_2, pointer::unpack_permute1_2),
        (3, array::unpack_permute1_n, pointer::unpack_permute1_n),
    ];
    for (nqty, ka, kp) in table {
        for _ in 0..20 {
            let plan = random_plan(&mut r, 12, nqty, Permutation::One);
            let buf = normal_f64(&mut r, plan.buf_len());
            let a = run_unpack(ka, &buf, &plan, Permutation::One);
            let p = run_unpack(kp, &buf, &plan, Permutation::One);
            assert_eq!(bits(&a), bits(&p), "nqty {nqty}: {plan:?}");
        }
    }
}

#[test]
fn test_permute2_styles_bit_identical() {
    let mut r = rng(13);
    let table: [(usize, KernelFn<f64>, KernelFn<f64>); 3] = [
        (1, array::unpack_permute2_1, pointer::unpack_permute2_1),
        (2, array::unpack_permute2_2, pointer::unpack_permute2_2),
        (4, array::unpack_permute2_n, pointer::unpack_permute2_n),
    ];
    for (nqty, ka, kp) in table {
        for _ in 0..20 {
            let plan = random_plan(&mut r, 12, nqty, Permutation::Two);
            let buf = normal_f64(&mut r, plan.buf_len());
            let a = run_unpack(ka, &buf, &plan, Permutation::Two);
            let p = run_unpack(kp, &buf, &plan, Permutation::Two);
            assert_eq!(bits(&a), bits(&p), "nqty {nqty}: {plan:?}");
        }
    }
}

#[test]
fn test_generic_multiplicity_matches_specialisations() {
    let mut r = rng(17);
    for _ in 0..20 {
        let plan = random_plan(&mut r, 10, 1, Permutation::One);
        let buf = normal_f64(&mut r, plan.buf_len());
        let s = run_unpack(array::unpack_permute1_1, &buf, &plan, Permutation::One);
        let g = run_unpack(array::unpack_permute1_n, &buf, &plan, Permutation::One);
        assert_eq!(bits(&s), bits(&g), "{plan:?}");

        let plan = random_plan(&mut r, 10, 2, Permutation::Two);
        let buf = normal_f64(&mut r, plan.buf_len());
        let s = run_unpack(array::unpack_permute2_2, &buf, &plan, Permutation::Two);
        let g = run_unpack(array::unpack_permute2_n, &buf, &plan, Permutation::Two);
        assert_eq!(bits(&s), bits(&g), "{plan:?}");
    }
}

/// Random identity plans with `f64` contents: the block-copy pack output
/// byte-equals the pointer pack output.
#[test]
fn test_memcpy_equals_pointer_random_plans() {
    let mut r = rng(19);
    for _ in 0..50 {
        let plan = random_plan(&mut r, 16, 1, Permutation::None);
        let src = normal_f64(&mut r, plan.span(Permutation::None));
        let p = run_pack(pointer::pack, &src, &plan);
        let m = run_pack(memcpy::pack, &src, &plan);
        assert_eq!(bits(&p), bits(&m), "{plan:?}");
    }
}
