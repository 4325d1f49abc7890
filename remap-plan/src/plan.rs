//! The pack/unpack plan descriptor and its address arithmetic.

use crate::{PlanError, Result};

/// Axis rotation applied by an unpack to its destination.
///
/// Between successive 1D FFT passes the next pass wants a different axis
/// contiguous in local memory; the three variants are the three possible
/// destination orderings relative to the contiguous buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permutation {
    /// Destination keeps the buffer's axis order.
    None,
    /// One-axis rotation: the buffer's fast axis is walked with the
    /// destination's plane stride.
    One,
    /// Two-axis rotation: the buffer's fast axis is walked with the
    /// destination's line stride.
    Two,
}

/// Loop counters and strides for one pack or unpack operation.
///
/// The strided side is addressed as
/// `slow * stride_plane + mid * stride_line + fast` (identity order, in
/// units of scalars), with each logical element occupying `nqty` adjacent
/// scalars on both sides. The contiguous side holds
/// `nslow * nmid * nfast * nqty` scalars in slow-major, fast-minor order.
///
/// This is a plain value object: fields are public, copies are trivial, and
/// nothing mutates a plan during kernel execution. [`PackPlan3d::new`]
/// validates the invariants up front; a plan assembled from a struct
/// literal is also accepted by every kernel, which re-checks buffer
/// capacity in O(1) at entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackPlan3d {
    /// Element count along the fast (innermost, contiguous) axis.
    pub nfast: usize,
    /// Element count along the mid axis.
    pub nmid: usize,
    /// Element count along the slow (outermost) axis.
    pub nslow: usize,
    /// Scalar distance between successive mid indices on the strided side.
    pub stride_line: usize,
    /// Scalar distance between successive slow indices on the strided side.
    pub stride_plane: usize,
    /// Scalars per logical element, contiguous on both sides.
    pub nqty: usize,
}

impl PackPlan3d {
    /// Create a validated plan.
    ///
    /// Extents of zero are legal (every kernel becomes a no-op); zero
    /// strides and zero multiplicity are rejected, as is any plan whose
    /// buffer capacity or address span overflows `usize`.
    pub fn new(
        nfast: usize,
        nmid: usize,
        nslow: usize,
        stride_line: usize,
        stride_plane: usize,
        nqty: usize,
    ) -> Result<Self> {
        if nqty == 0 {
            return Err(PlanError::ZeroQuantity);
        }
        if stride_line == 0 {
            return Err(PlanError::ZeroStride("mid"));
        }
        if stride_plane == 0 {
            return Err(PlanError::ZeroStride("slow"));
        }
        let plan = Self {
            nfast,
            nmid,
            nslow,
            stride_line,
            stride_plane,
            nqty,
        };
        plan.checked_buf_len().ok_or(PlanError::OffsetOverflow)?;
        for perm in [Permutation::None, Permutation::One, Permutation::Two] {
            plan.checked_span(perm).ok_or(PlanError::OffsetOverflow)?;
        }
        Ok(plan)
    }

    /// Plan for a tightly packed subvolume: `stride_line = nfast * nqty`,
    /// `stride_plane = nmid * stride_line`.
    ///
    /// This is the layout of the receive side of an exchange, where the
    /// unpacked volume is a whole local array rather than a window into
    /// one. Zero extents clamp the strides to 1 so the (no-op) plan stays
    /// valid.
    pub fn contiguous(nfast: usize, nmid: usize, nslow: usize, nqty: usize) -> Result<Self> {
        let stride_line = nfast
            .checked_mul(nqty)
            .ok_or(PlanError::OffsetOverflow)?
            .max(1);
        let stride_plane = nmid
            .checked_mul(stride_line)
            .ok_or(PlanError::OffsetOverflow)?
            .max(1);
        Self::new(nfast, nmid, nslow, stride_line, stride_plane, nqty)
    }

    /// Scalar capacity required of the contiguous side.
    ///
    /// Panics if the product overflows `usize`; [`PackPlan3d::new`] rejects
    /// such plans up front.
    #[inline]
    pub fn buf_len(&self) -> usize {
        self.checked_buf_len()
            .expect("plan element count overflows usize")
    }

    /// Exclusive upper bound of strided-side offsets touched by a kernel of
    /// the given permutation class; zero when any extent is zero.
    ///
    /// Panics if the span overflows `usize`.
    #[inline]
    pub fn span(&self, perm: Permutation) -> usize {
        self.checked_span(perm)
            .expect("plan address span overflows usize")
    }

    /// Whether any extent is zero, making every kernel a no-op.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nfast == 0 || self.nmid == 0 || self.nslow == 0
    }

    fn checked_buf_len(&self) -> Option<usize> {
        self.nslow
            .checked_mul(self.nmid)?
            .checked_mul(self.nfast)?
            .checked_mul(self.nqty)
    }

    /// Span arithmetic shared by `new` and `span`.
    ///
    /// Each class's bound is the offset of the last addressed scalar plus
    /// one: the extent-minus-one corner contribution of the two outer axes
    /// plus the full extent of the contiguous run.
    fn checked_span(&self, perm: Permutation) -> Option<usize> {
        if self.is_empty() {
            return Some(0);
        }
        let corner = |count: usize, step: usize| (count - 1).checked_mul(step);
        match perm {
            Permutation::None => corner(self.nslow, self.stride_plane)?
                .checked_add(corner(self.nmid, self.stride_line)?)?
                .checked_add(self.nfast.checked_mul(self.nqty)?),
            Permutation::One => corner(self.nslow, self.stride_line)?
                .checked_add(corner(self.nmid, self.nqty)?)?
                .checked_add(corner(self.nfast, self.stride_plane)?)?
                .checked_add(self.nqty),
            Permutation::Two => corner(self.nslow, self.nqty)?
                .checked_add(corner(self.nmid, self.stride_plane)?)?
                .checked_add(corner(self.nfast, self.stride_line)?)?
                .checked_add(self.nqty),
        }
    }
}
