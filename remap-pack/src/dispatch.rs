//! Kernel selection: one name per cell of the operation matrix.
//!
//! A remap stage is planned once and executed every timestep; the planner
//! resolves its kernel up front with [`select`] and stores the returned
//! function pointer next to the plan. The table is a static `match`; no
//! registration, no state.

use remap_plan::{PackPlan3d, Permutation};

use crate::{array, memcpy, pointer};

/// Transfer direction relative to the contiguous buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Strided subvolume into contiguous buffer.
    Pack,
    /// Contiguous buffer into strided subvolume.
    Unpack,
}

/// Which inner-body specialisation to use for the element multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplicity {
    /// Single assignment per element (`nqty == 1`).
    One,
    /// Two adjacent scalars per element (`nqty == 2`, interleaved complex).
    Two,
    /// Generic inner loop over `nqty` scalars.
    Any,
}

impl Multiplicity {
    /// Narrowest specialisation that handles `nqty`.
    pub fn for_nqty(nqty: usize) -> Self {
        match nqty {
            1 => Multiplicity::One,
            2 => Multiplicity::Two,
            _ => Multiplicity::Any,
        }
    }
}

/// Addressing style of the kernel body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelStyle {
    /// Integer-index arithmetic ([`crate::array`]).
    Array,
    /// Advancing raw-pointer cursors ([`crate::pointer`]).
    Pointer,
    /// Whole-line block copies ([`crate::memcpy`]); identity order only.
    Memcpy,
}

/// Signature shared by all eighteen kernels: `(source, destination, plan)`.
pub type KernelFn<T> = fn(&[T], &mut [T], &PackPlan3d);

/// Errors from naming a kernel outside the matrix.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Packing always reads the strided side in identity order.
    #[error("packing is only defined for the identity permutation")]
    PermutedPack,

    /// Block copies need a unit fast-axis stride on the strided side.
    #[error("block-copy style cannot express a permuted unpack; use the pointer style")]
    MemcpyPermute,
}

/// Resolve one kernel by (operation, permutation, multiplicity, style).
///
/// Identity-order kernels fold the multiplicity into the contiguous line
/// length, so `mult` only selects a body for permuted unpacks.
pub fn select<T: Copy>(
    op: Operation,
    perm: Permutation,
    mult: Multiplicity,
    style: KernelStyle,
) -> Result<KernelFn<T>, DispatchError> {
    match (op, perm) {
        (Operation::Pack, Permutation::None) => Ok(match style {
            KernelStyle::Array => array::pack::<T>,
            KernelStyle::Pointer => pointer::pack::<T>,
            KernelStyle::Memcpy => memcpy::pack::<T>,
        }),
        (Operation::Pack, _) => Err(DispatchError::PermutedPack),
        (Operation::Unpack, Permutation::None) => Ok(match style {
            KernelStyle::Array => array::unpack::<T>,
            KernelStyle::Pointer => pointer::unpack::<T>,
            KernelStyle::Memcpy => memcpy::unpack::<T>,
        }),
        (Operation::Unpack, Permutation::One) => match style {
            KernelStyle::Array => Ok(match mult {
                Multiplicity::One => array::unpack_permute1_1::<T>,
                Multiplicity::Two => array::unpack_permute1_2::<T>,
                Multiplicity::Any => array::unpack_permute1_n::<T>,
            }),
            KernelStyle::Pointer => Ok(match mult {
                Multiplicity::One => pointer::unpack_permute1_1::<T>,
                Multiplicity::Two => pointer::unpack_permute1_2::<T>,
                Multiplicity::Any => pointer::unpack_permute1_n::<T>,
            }),
            KernelStyle::Memcpy => Err(DispatchError::MemcpyPermute),
        },
        (Operation::Unpack, Permutation::Two) => match style {
            KernelStyle::Array => Ok(match mult {
                Multiplicity::One => array::unpack_permute2_1::<T>,
                Multiplicity::Two => array::unpack_permute2_2::<T>,
                Multiplicity::Any => array::unpack_permute2_n::<T>,
            }),
            KernelStyle::Pointer => Ok(match mult {
                Multiplicity::One => pointer::unpack_permute2_1::<T>,
                Multiplicity::Two => pointer::unpack_permute2_2::<T>,
                Multiplicity::Any => pointer::unpack_permute2_n::<T>,
            }),
            KernelStyle::Memcpy => Err(DispatchError::MemcpyPermute),
        },
    }
}
