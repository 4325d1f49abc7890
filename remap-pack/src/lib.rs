//! Pack/unpack kernel family for 3D FFT remap stages.
//!
//! Eighteen kernels organised on three axes:
//!
//! - **operation**: pack (strided → contiguous), identity unpack, and
//!   unpack with a one- or two-axis rotation of the destination order;
//! - **multiplicity**: specialised inner bodies for 1 and 2 scalars per
//!   element plus a generic fallback (permuted unpacks only; identity
//!   kernels fold the multiplicity into the contiguous line length);
//! - **style**: [`array`] recomputes integer indices, [`pointer`] walks raw
//!   cursors, [`memcpy`] block-copies whole fast lines (identity only).
//!
//! The three styles are observationally equivalent: for any plan they
//! produce bit-identical destinations. They exist so a caller or runtime
//! tuner can pick whichever the target compiler optimises best; there is no
//! internal autotuner. [`select`] names one kernel from the matrix.
//!
//! Kernels never allocate, never touch values (scalars move verbatim), and
//! run synchronously on the calling thread. Each call checks buffer
//! capacity once at entry, two comparisons and never per iteration, then
//! runs the hot loops unchecked.

pub mod array;
pub mod dispatch;
pub mod memcpy;
pub mod pointer;

pub use dispatch::{select, DispatchError, KernelFn, KernelStyle, Multiplicity, Operation};
pub use remap_plan::{PackPlan3d, Permutation, PlanError};

/// Entry-point capacity check shared by every kernel.
///
/// Panics if either side is too small for the plan; after this the kernel
/// may address both sides unchecked. `span` also rejects plans whose
/// address arithmetic overflows `usize`.
#[inline]
pub(crate) fn check_capacity<T>(
    strided: &[T],
    contiguous: &[T],
    plan: &PackPlan3d,
    perm: Permutation,
) {
    let needed = plan.buf_len();
    assert!(
        contiguous.len() >= needed,
        "contiguous buffer holds {} of {} scalars",
        contiguous.len(),
        needed
    );
    let span = plan.span(perm);
    assert!(
        strided.len() >= span,
        "strided array holds {} of {} addressed scalars",
        strided.len(),
        span
    );
}
