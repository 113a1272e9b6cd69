//! Shape traits and primitives for 4D geometry
//!
//! A 4D solid is described by its boundary: a set of tetrahedral cells.
//! Slicing those cells with the hyperplane `w = s` yields the triangulated
//! surface of the 3D cross-section.

use crate::Vec4;

/// A tetrahedron (3-simplex) defined by vertex indices
///
/// Tetrahedra are the cells the slicer works on. Each one is cut by the
/// hyperplane into nothing, a triangle or a quadrilateral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tetrahedron {
    /// Indices into the parent shape's vertex array
    pub indices: [usize; 4],
}

impl Tetrahedron {
    /// Create a new tetrahedron with the given vertex indices
    #[inline]
    pub fn new(indices: [usize; 4]) -> Self {
        Self { indices }
    }

    /// Get the indices as a sorted array (canonical form)
    pub fn canonical(&self) -> [usize; 4] {
        let mut sorted = self.indices;
        sorted.sort();
        sorted
    }

    /// Shift every index by `offset`
    #[inline]
    pub fn offset(self, offset: usize) -> Self {
        let [a, b, c, d] = self.indices;
        Self::new([a + offset, b + offset, c + offset, d + offset])
    }
}

/// Trait for 4D shapes that expose a tetrahedral decomposition
///
/// Shapes are pure geometry. Anything that wants to slice them converts
/// the vertices and tetrahedra into a flat mesh first.
pub trait Shape4D: Send + Sync {
    /// Get the vertices of this shape
    fn vertices(&self) -> &[Vec4];

    /// Get the tetrahedral cells of this shape
    fn tetrahedra(&self) -> &[Tetrahedron];

    /// Get the number of vertices
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Get the number of tetrahedra
    #[inline]
    fn tetrahedron_count(&self) -> usize {
        self.tetrahedra().len()
    }

    /// Smallest and largest w over all vertices, `None` for an empty shape
    fn w_range(&self) -> Option<(f64, f64)> {
        let mut vertices = self.vertices().iter();
        let first = vertices.next()?;
        Some(vertices.fold((first.w, first.w), |(lo, hi), v| (lo.min(v.w), hi.max(v.w))))
    }
}
