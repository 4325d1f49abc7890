//! 3D pack/unpack kernels for distributed FFT transposes.
//!
//! A parallel 3D FFT runs 1D transforms along each axis in turn; between
//! passes the distributed array is redistributed so the next axis becomes
//! contiguous in local memory. This crate is the intra-process half of that
//! redistribution: gather a strided subvolume of a local 3D array into a
//! contiguous exchange buffer (pack), and scatter a received buffer back
//! into a strided subvolume (unpack), optionally composed with a one- or
//! two-axis rotation of the destination's axis order.
//!
//! # Core Types
//!
//! - [`PackPlan3d`]: six loop counters and strides describing one pack or
//!   unpack; a plain value object, reused across timesteps
//! - [`Permutation`]: destination axis rotation of an unpack
//! - [`KernelFn`]: the shared kernel signature `(source, destination, plan)`
//!
//! # Kernel Matrix
//!
//! Eighteen kernels over three axes (operation, multiplicity, and the
//! addressing styles [`array`], [`pointer`], [`memcpy`]), resolved by
//! [`select`] or called directly:
//!
//! - `pack`, `unpack`: identity order, any multiplicity, all three styles
//! - `unpack_permute1_{1,2,n}`, `unpack_permute2_{1,2,n}`: permuted
//!   destination order, array and pointer styles
//!
//! All styles produce bit-identical output; they exist so the caller can
//! pick whichever the target compiler optimises best. The contiguous
//! buffer layout (slow-major, fast-minor, `nqty` scalars per element) is
//! the on-the-wire format of the surrounding exchange and is preserved
//! exactly by every kernel.
//!
//! # Example
//!
//! ```rust
//! use remap3d::{array, PackPlan3d, Permutation};
//!
//! // A 4x3x2 (fast x mid x slow) subvolume embedded in a padded host array.
//! let plan = PackPlan3d::new(4, 3, 2, 8, 40, 1)?;
//! let mut host = vec![0.0f64; plan.span(Permutation::None)];
//! for slow in 0..2 {
//!     for mid in 0..3 {
//!         for fast in 0..4 {
//!             host[slow * 40 + mid * 8 + fast] = (100 * slow + 10 * mid + fast) as f64;
//!         }
//!     }
//! }
//!
//! let mut buf = vec![0.0f64; plan.buf_len()];
//! array::pack(&host, &mut buf, &plan);
//! assert_eq!(&buf[..4], &[0.0, 1.0, 2.0, 3.0]);
//! assert_eq!(buf[12], 100.0);
//!
//! // The identity unpack is the exact inverse.
//! let mut back = vec![0.0f64; plan.span(Permutation::None)];
//! array::unpack(&buf, &mut back, &plan);
//! assert_eq!(back, host);
//! # Ok::<(), remap3d::PlanError>(())
//! ```

pub use remap_pack::{
    array, dispatch, memcpy, pointer, select, DispatchError, KernelFn, KernelStyle, Multiplicity,
    Operation,
};
pub use remap_plan::{PackPlan3d, Permutation, PlanError};
