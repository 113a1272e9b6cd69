//! Cross-section extraction
//!
//! The pipeline runs once per tetrahedron:
//!
//! 1. [`classify`] each vertex against the hyperplane `w = s`
//! 2. [`intersect`] edges whose endpoints have strictly opposite signs
//! 3. [`sample_faces`] keeps faces crossed by exactly two edges
//! 4. [`CellAssembler`] welds the segments into one or two triangles
//! 5. [`slice`] collects the triangles and gives each a flat normal

mod builder;
mod cell;
mod edge;
mod face;
mod vertex_pool;

pub use builder::{slice, slice_all, slice_all_with, slice_with};
pub use cell::{CellAssembler, CellOutcome};
pub use edge::{classify, intersect};
pub use face::{sample_faces, sample_faces_into, Segment, FACES};
pub use vertex_pool::VertexPool;

use crate::error::SliceError;

/// Default per-coordinate welding tolerance
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Tunables for [`slice_with`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceOptions {
    /// Points closer than this on every axis are welded together
    ///
    /// Absolute, so it should be small relative to the mesh's scale.
    pub tolerance: f64,
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self { tolerance: DEFAULT_TOLERANCE }
    }
}

impl SliceOptions {
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn validate(&self) -> Result<(), SliceError> {
        if self.tolerance.is_finite() && self.tolerance > 0.0 {
            Ok(())
        } else {
            Err(SliceError::InvalidTolerance(self.tolerance))
        }
    }
}
