//! Plan descriptors for 3D pack/unpack remap stages.
//!
//! A distributed 3D FFT redistributes its array between 1D passes; the
//! intra-process half of that redistribution copies a strided subvolume of a
//! local array into a contiguous exchange buffer (pack) or back out of one
//! (unpack). This crate provides the value object describing one such
//! operation: three extent counters, two strides, and an element
//! multiplicity.
//!
//! The descriptor carries no operation identity: the same plan drives a
//! pack and the matching unpack; the caller picks the kernel. Kernels live
//! in the companion `remap-pack` crate.

mod plan;

// ============================================================================
// Plan types
// ============================================================================
pub use plan::{PackPlan3d, Permutation};

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur while constructing a plan.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Element multiplicity must be at least 1.
    #[error("element multiplicity must be at least 1")]
    ZeroQuantity,

    /// A stride between successive indices is zero.
    #[error("stride between successive {0} indices is zero")]
    ZeroStride(&'static str),

    /// Integer overflow while computing buffer capacity or address span.
    #[error("offset overflow while sizing the plan")]
    OffsetOverflow,
}

/// Result type for plan construction.
pub type Result<T> = std::result::Result<T, PlanError>;
