//! Hexadecachoron (16-cell) geometry
//!
//! The 4D cross-polytope: 8 vertices at `±r` on each axis and 16
//! tetrahedral cells, one for each choice of sign on the four axes.

use crate::{Vec4, shape::{Shape4D, Tetrahedron}};

/// A 16-cell centered at the origin
#[derive(Clone, Debug)]
pub struct Hexadecachoron4D {
    radius: f64,
    /// Vertex `2a` is `+r` on axis `a`, vertex `2a + 1` is `-r`
    vertices: [Vec4; 8],
    tetrahedra: Vec<Tetrahedron>,
}

impl Hexadecachoron4D {
    /// Create a 16-cell with vertices at distance `radius` from the origin
    pub fn new(radius: f64) -> Self {
        let vertices = std::array::from_fn(|i| {
            let axis = [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W][i / 2];
            if i % 2 == 0 { axis * radius } else { axis * -radius }
        });

        let tetrahedra = (0..16usize)
            .map(|signs| {
                Tetrahedron::new(std::array::from_fn(|axis| 2 * axis + ((signs >> axis) & 1)))
            })
            .collect();

        Self { radius, vertices, tetrahedra }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape4D for Hexadecachoron4D {
    fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    fn tetrahedra(&self) -> &[Tetrahedron] {
        &self.tetrahedra
    }
}
