//! Pentachoron (5-cell, 4-simplex) geometry
//!
//! The simplest 4D polytope: 5 vertices, 10 edges, 10 triangles and
//! 5 tetrahedral cells. Its cells are already simplices.

use crate::{Vec4, shape::{Shape4D, Tetrahedron}};

/// A regular pentachoron centered at the origin
///
/// Four vertices share the lowest w; the fifth is the apex on the +w axis.
/// Slices between the base and the apex are shrinking tetrahedra.
#[derive(Clone, Debug)]
pub struct Pentachoron4D {
    scale: f64,
    vertices: [Vec4; 5],
    tetrahedra: [Tetrahedron; 5],
}

impl Pentachoron4D {
    /// Create a pentachoron whose base vertices sit at `(±s, ±s, ±s)` in xyz
    ///
    /// Edge length is `2√2 · scale`.
    pub fn new(scale: f64) -> Self {
        let s = scale;
        let base_w = -s / 5f64.sqrt();
        let apex_w = 4.0 * s / 5f64.sqrt();

        let vertices = [
            Vec4::new(s, s, s, base_w),
            Vec4::new(s, -s, -s, base_w),
            Vec4::new(-s, s, -s, base_w),
            Vec4::new(-s, -s, s, base_w),
            Vec4::new(0.0, 0.0, 0.0, apex_w),
        ];

        // Cell i omits vertex i
        let tetrahedra = std::array::from_fn(|omit| {
            let mut indices = [0usize; 4];
            for (slot, vertex) in (0..5).filter(|&v| v != omit).enumerate() {
                indices[slot] = vertex;
            }
            Tetrahedron::new(indices)
        });

        Self { scale, vertices, tetrahedra }
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Shape4D for Pentachoron4D {
    fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    fn tetrahedra(&self) -> &[Tetrahedron] {
        &self.tetrahedra
    }
}
