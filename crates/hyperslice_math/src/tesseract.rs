//! Tesseract (4D Hypercube) geometry
//!
//! A tesseract has 16 vertices (all combinations of ±h for x,y,z,w),
//! 32 edges, 24 faces (squares), and 8 cells (cubes).
//!
//! Each cubic cell is split into 5 tetrahedra, giving 40 boundary cells.

use crate::{Vec4, decompose::cube_tetrahedra, shape::{Shape4D, Tetrahedron}};

/// A tesseract (4D hypercube) centered at the origin
#[derive(Clone, Debug)]
pub struct Tesseract4D {
    /// Half the side length
    half_size: f64,
    /// The 16 vertices of the tesseract
    vertices: [Vec4; 16],
    /// Boundary cells, 5 per cube
    tetrahedra: Vec<Tetrahedron>,
}

impl Tesseract4D {
    /// Create a new tesseract centered at origin with given size
    ///
    /// # Arguments
    /// * `size` - The full side length of the tesseract
    pub fn new(size: f64) -> Self {
        let h = size * 0.5;

        // Vertex i has bit 0 = x, bit 1 = y, bit 2 = z, bit 3 = w
        let vertices: [Vec4; 16] = std::array::from_fn(|i| {
            let coord = |bit: usize| if (i >> bit) & 1 == 1 { h } else { -h };
            Vec4::new(coord(0), coord(1), coord(2), coord(3))
        });

        Self {
            half_size: h,
            vertices,
            tetrahedra: Self::compute_tetrahedra(),
        }
    }

    /// Get the half-size (half the side length)
    #[inline]
    pub fn half_size(&self) -> f64 {
        self.half_size
    }

    /// Get the full size (side length)
    #[inline]
    pub fn size(&self) -> f64 {
        self.half_size * 2.0
    }

    /// Split the 8 cubic cells into tetrahedra
    ///
    /// The cell on axis `a` with side `s` holds every vertex whose bit `a`
    /// equals `s`. The remaining three bits, in ascending order, give the
    /// vertex's corner number within that cube.
    fn compute_tetrahedra() -> Vec<Tetrahedron> {
        let mut tetrahedra = Vec::with_capacity(40);

        for axis in 0..4 {
            let free_bits: Vec<usize> = (0..4).filter(|&b| b != axis).collect();
            for side in 0..2 {
                let corners: [usize; 8] = std::array::from_fn(|corner| {
                    let mut vertex = side << axis;
                    for (local_bit, &bit) in free_bits.iter().enumerate() {
                        vertex |= ((corner >> local_bit) & 1) << bit;
                    }
                    vertex
                });
                tetrahedra.extend(cube_tetrahedra(corners));
            }
        }

        tetrahedra
    }
}

impl Shape4D for Tesseract4D {
    fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    fn tetrahedra(&self) -> &[Tetrahedron] {
        &self.tetrahedra
    }
}
