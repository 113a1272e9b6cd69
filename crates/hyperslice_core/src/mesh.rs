//! Slicer input and output meshes
//!
//! [`Mesh4D`] is a flat vertex list plus a flat cell index buffer, four
//! indices per tetrahedron. [`Mesh3D`] is an unindexed list of flat-shaded
//! triangles, each owning its three corners.

use bytemuck::{Pod, Zeroable};
use hyperslice_math::{Shape4D, Vec3, Vec4};
use serde::{Serialize, Deserialize};

use crate::error::MeshDefect;

/// A 4D mesh of tetrahedral cells
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh4D {
    /// Vertex positions
    pub positions: Vec<Vec4>,
    /// Flat cell index buffer, each consecutive group of 4 is one tetrahedron
    pub cells: Vec<usize>,
}

impl Mesh4D {
    pub fn new(positions: Vec<Vec4>, cells: Vec<usize>) -> Self {
        Self { positions, cells }
    }

    /// Flatten a shape's tetrahedra into a cell buffer
    pub fn from_shape(shape: &dyn Shape4D) -> Self {
        let cells = shape
            .tetrahedra()
            .iter()
            .flat_map(|tet| tet.indices)
            .collect();
        Self::new(shape.vertices().to_vec(), cells)
    }

    /// Copy of this mesh with every vertex moved by `offset`
    pub fn translated(&self, offset: Vec4) -> Self {
        Self {
            positions: self.positions.iter().map(|&p| p + offset).collect(),
            cells: self.cells.clone(),
        }
    }

    /// Number of complete cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len() / 4
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Iterate the cells as index quadruples
    pub fn iter_cells(&self) -> impl Iterator<Item = [usize; 4]> + '_ {
        self.cells
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
    }

    /// Smallest and largest w over all vertices, `None` for an empty mesh
    pub fn w_range(&self) -> Option<(f64, f64)> {
        let mut positions = self.positions.iter();
        let first = positions.next()?;
        Some(positions.fold((first.w, first.w), |(lo, hi), p| (lo.min(p.w), hi.max(p.w))))
    }

    /// Check the cell buffer shape, every index, and every coordinate
    pub fn validate(&self) -> Result<(), MeshDefect> {
        if self.cells.len() % 4 != 0 {
            return Err(MeshDefect::RaggedCells { len: self.cells.len() });
        }

        let vertex_count = self.positions.len();
        if let Some((slot, &index)) = self
            .cells
            .iter()
            .enumerate()
            .find(|&(_, &index)| index >= vertex_count)
        {
            return Err(MeshDefect::IndexOutOfBounds { cell: slot / 4, index, vertex_count });
        }

        if let Some(index) = self.positions.iter().position(|p| !p.is_finite()) {
            return Err(MeshDefect::NonFinitePosition { index });
        }

        Ok(())
    }
}

/// A flat-shaded triangle of the cross-section
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle3 {
    pub corners: [Vec3; 3],
    /// Unit normal shared by all three corners
    pub normal: Vec3,
}

impl Triangle3 {
    /// Build a triangle and its normal `normalize((p0 - p1) x (p0 - p2))`
    ///
    /// Returns `None` when the cross product is shorter than `min_cross`,
    /// i.e. the triangle has (near) zero area.
    pub fn with_flat_normal(corners: [Vec3; 3], min_cross: f64) -> Option<Self> {
        let [p0, p1, p2] = corners;
        let cross = (p0 - p1).cross(p0 - p2);
        if !(cross.length() > min_cross) {
            return None;
        }
        Some(Self { corners, normal: cross.normalized() })
    }

    #[inline]
    pub fn area(&self) -> f64 {
        let [p0, p1, p2] = self.corners;
        0.5 * (p1 - p0).cross(p2 - p0).length()
    }
}

/// The cross-section of one [`Mesh4D`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh3D {
    pub triangles: Vec<Triangle3>,
}

impl Mesh3D {
    pub fn new() -> Self {
        Self { triangles: Vec::new() }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Corners are never shared, so this is three per triangle
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Total surface area
    pub fn area(&self) -> f64 {
        self.triangles.iter().map(Triangle3::area).sum()
    }

    /// Flatten into a GPU-layout vertex buffer and a sequential index buffer
    ///
    /// Precision drops to `f32`. Every vertex carries `mesh_index` so several
    /// meshes can share one buffer.
    pub fn to_render_buffers(&self, mesh_index: i32) -> (Vec<RenderVertex>, Vec<u32>) {
        let mut vertices = Vec::with_capacity(self.vertex_count());
        for tri in &self.triangles {
            for corner in tri.corners {
                vertices.push(RenderVertex::new(corner, tri.normal, mesh_index));
            }
        }
        let indices = (0..vertices.len() as u32).collect();
        (vertices, indices)
    }
}

/// A cross-section vertex laid out for a GPU storage buffer
///
/// Layout: 48 bytes, 4-byte aligned. Position and normal are padded to
/// vec4 (w = 0) to match std430 rules.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct RenderVertex {
    pub position: [f32; 4],
    pub normal: [f32; 4],
    pub tex_coords: [f32; 2],
    pub mesh_index: i32,
    pub _padding: u32,
}

impl RenderVertex {
    pub fn new(position: Vec3, normal: Vec3, mesh_index: i32) -> Self {
        Self {
            position: [position.x as f32, position.y as f32, position.z as f32, 0.0],
            normal: [normal.x as f32, normal.y as f32, normal.z as f32, 0.0],
            tex_coords: [0.0; 2],
            mesh_index,
            _padding: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperslice_math::Tesseract4D;
    use std::mem::size_of;

    fn unit_triangle() -> Triangle3 {
        Triangle3::with_flat_normal(
            [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            1e-12,
        )
        .unwrap()
    }

    #[test]
    fn test_from_shape_flattens_cells() {
        let tesseract = Tesseract4D::new(2.0);
        let mesh = Mesh4D::from_shape(&tesseract);
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.cell_count(), 40);
        assert_eq!(mesh.cells.len(), 160);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_translated_moves_positions_only() {
        let mesh = Mesh4D::new(vec![Vec4::ZERO, Vec4::X], vec![]);
        let moved = mesh.translated(Vec4::new(0.0, 0.0, 0.0, 2.0));
        assert_eq!(moved.positions[1], Vec4::new(1.0, 0.0, 0.0, 2.0));
        assert_eq!(moved.cells, mesh.cells);
        assert_eq!(moved.w_range(), Some((2.0, 2.0)));
    }

    #[test]
    fn test_iter_cells() {
        let mesh = Mesh4D::new(vec![Vec4::ZERO; 5], vec![0, 1, 2, 3, 4, 3, 2, 1]);
        let cells: Vec<[usize; 4]> = mesh.iter_cells().collect();
        assert_eq!(cells, vec![[0, 1, 2, 3], [4, 3, 2, 1]]);
    }

    #[test]
    fn test_validate_ragged() {
        let mesh = Mesh4D::new(vec![Vec4::ZERO; 4], vec![0, 1, 2, 3, 0]);
        assert_eq!(mesh.validate(), Err(MeshDefect::RaggedCells { len: 5 }));
    }

    #[test]
    fn test_validate_out_of_bounds() {
        let mesh = Mesh4D::new(vec![Vec4::ZERO; 4], vec![0, 1, 2, 3, 0, 1, 2, 4]);
        assert_eq!(
            mesh.validate(),
            Err(MeshDefect::IndexOutOfBounds { cell: 1, index: 4, vertex_count: 4 })
        );
    }

    #[test]
    fn test_validate_non_finite() {
        let mesh = Mesh4D::new(vec![Vec4::ZERO, Vec4::new(0.0, f64::NAN, 0.0, 0.0)], vec![]);
        assert_eq!(mesh.validate(), Err(MeshDefect::NonFinitePosition { index: 1 }));
    }

    #[test]
    fn test_flat_normal_direction() {
        // (p0 - p1) x (p0 - p2) = (-1,0,0) x (0,-1,0) = (0,0,1)
        let tri = unit_triangle();
        assert_eq!(tri.normal, Vec3::new(0.0, 0.0, 1.0));
        assert!((tri.area() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_flat_normal_rejects_collinear() {
        let tri = Triangle3::with_flat_normal(
            [
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(2.0, 2.0, 2.0),
            ],
            1e-12,
        );
        assert!(tri.is_none());
    }

    #[test]
    fn test_render_vertex_size() {
        // 4 + 4 + 2 + 1 + 1 = 12 four-byte fields
        assert_eq!(size_of::<RenderVertex>(), 48);
        assert_eq!(std::mem::align_of::<RenderVertex>(), 4);
    }

    #[test]
    fn test_render_buffers() {
        let mesh = Mesh3D { triangles: vec![unit_triangle(), unit_triangle()] };
        let (vertices, indices) = mesh.to_render_buffers(3);
        assert_eq!(vertices.len(), 6);
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(vertices[1].position, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(vertices[1].normal, [0.0, 0.0, 1.0, 0.0]);
        assert!(vertices.iter().all(|v| v.mesh_index == 3));

        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 6 * 48);
    }

    #[test]
    fn test_empty_mesh3d() {
        let mesh = Mesh3D::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.area(), 0.0);
    }
}
