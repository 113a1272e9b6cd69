//! Tetrahedral prism geometry
//!
//! A tetrahedron extruded along w. Its boundary is two tetrahedral caps
//! plus one triangular prism per face of the base tetrahedron. Any slice
//! strictly between the caps is a copy of the base tetrahedron.

use crate::{Vec4, decompose::prism_tetrahedra, shape::{Shape4D, Tetrahedron}};

#[derive(Clone, Debug)]
pub struct TetrahedralPrism4D {
    w_extent: f64,
    /// Base vertices at `w = -w_extent` (0..4) then the same at `+w_extent` (4..8)
    vertices: [Vec4; 8],
    tetrahedra: Vec<Tetrahedron>,
}

impl TetrahedralPrism4D {
    /// Extrude a regular tetrahedron with corners at `(±s, ±s, ±s)`
    ///
    /// # Arguments
    /// * `scale` - Base tetrahedron corner offset
    /// * `w_extent` - Half the prism's length along w
    pub fn new(scale: f64, w_extent: f64) -> Self {
        let s = scale;
        let base = [
            [s, s, s],
            [s, -s, -s],
            [-s, s, -s],
            [-s, -s, s],
        ];

        let vertices = std::array::from_fn(|i| {
            let [x, y, z] = base[i % 4];
            let w = if i < 4 { -w_extent } else { w_extent };
            Vec4::new(x, y, z, w)
        });

        let mut tetrahedra = vec![
            Tetrahedron::new([0, 1, 2, 3]),
            Tetrahedron::new([4, 5, 6, 7]),
        ];
        for omit in 0..4 {
            let face: Vec<usize> = (0..4).filter(|&v| v != omit).collect();
            tetrahedra.extend(prism_tetrahedra([
                face[0], face[1], face[2],
                face[0] + 4, face[1] + 4, face[2] + 4,
            ]));
        }

        Self { w_extent, vertices, tetrahedra }
    }

    #[inline]
    pub fn w_extent(&self) -> f64 {
        self.w_extent
    }
}

impl Shape4D for TetrahedralPrism4D {
    fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    fn tetrahedra(&self) -> &[Tetrahedron] {
        &self.tetrahedra
    }
}
