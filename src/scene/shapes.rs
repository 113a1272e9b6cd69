//! Serializable shape templates
//!
//! ShapeTemplate is the scene-file form of a 4D mesh. Each variant stores
//! the parameters needed to build the mesh, or the raw cells themselves.
//!
//! All shapes are created centered at the origin; a [`MeshTemplate`]'s
//! offset moves them into place.
//!
//! [`MeshTemplate`]: super::MeshTemplate

use hyperslice_core::{
    Hexadecachoron4D, Mesh4D, Pentachoron4D, Tesseract4D, TetrahedralPrism4D, Vec4,
};
use serde::{Deserialize, Serialize};

/// Serializable shape template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeTemplate {
    /// A regular 5-cell with base corners at `(±scale, ±scale, ±scale)`
    Pentachoron { scale: f64 },
    /// A 4D hypercube spanning `±size/2` on every axis
    Tesseract { size: f64 },
    /// A 16-cell with vertices at distance `radius` along each axis
    Hexadecachoron { radius: f64 },
    /// A tetrahedron extruded along w over `±w_extent`
    TetrahedralPrism { scale: f64, w_extent: f64 },
    /// Explicit vertex positions and a flat tetrahedral cell buffer
    Cells {
        positions: Vec<[f64; 4]>,
        cells: Vec<usize>,
    },
}

impl ShapeTemplate {
    pub fn pentachoron(scale: f64) -> Self {
        ShapeTemplate::Pentachoron { scale }
    }

    pub fn tesseract(size: f64) -> Self {
        ShapeTemplate::Tesseract { size }
    }

    pub fn hexadecachoron(radius: f64) -> Self {
        ShapeTemplate::Hexadecachoron { radius }
    }

    pub fn tetrahedral_prism(scale: f64, w_extent: f64) -> Self {
        ShapeTemplate::TetrahedralPrism { scale, w_extent }
    }

    /// Build the mesh this template describes
    ///
    /// `Cells` is copied as-is and may still be malformed; the slicer
    /// reports that.
    pub fn create_mesh(&self) -> Mesh4D {
        match self {
            ShapeTemplate::Pentachoron { scale } => Mesh4D::from_shape(&Pentachoron4D::new(*scale)),
            ShapeTemplate::Tesseract { size } => Mesh4D::from_shape(&Tesseract4D::new(*size)),
            ShapeTemplate::Hexadecachoron { radius } => Mesh4D::from_shape(&Hexadecachoron4D::new(*radius)),
            ShapeTemplate::TetrahedralPrism { scale, w_extent } => {
                Mesh4D::from_shape(&TetrahedralPrism4D::new(*scale, *w_extent))
            }
            ShapeTemplate::Cells { positions, cells } => Mesh4D::new(
                positions.iter().copied().map(Vec4::from).collect(),
                cells.clone(),
            ),
        }
    }

    /// Size parameters that must be finite and positive, with their names
    pub fn size_parameters(&self) -> Vec<(&'static str, f64)> {
        match self {
            ShapeTemplate::Pentachoron { scale } => vec![("scale", *scale)],
            ShapeTemplate::Tesseract { size } => vec![("size", *size)],
            ShapeTemplate::Hexadecachoron { radius } => vec![("radius", *radius)],
            ShapeTemplate::TetrahedralPrism { scale, w_extent } => {
                vec![("scale", *scale), ("w_extent", *w_extent)]
            }
            ShapeTemplate::Cells { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tesseract_template() {
        let mesh = ShapeTemplate::tesseract(2.0).create_mesh();
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.cell_count(), 40);
    }

    #[test]
    fn test_builtin_shape_counts() {
        assert_eq!(ShapeTemplate::pentachoron(1.0).create_mesh().cell_count(), 5);
        assert_eq!(ShapeTemplate::hexadecachoron(1.0).create_mesh().cell_count(), 16);
        assert_eq!(ShapeTemplate::tetrahedral_prism(1.0, 0.5).create_mesh().cell_count(), 14);
    }

    #[test]
    fn test_cells_template() {
        let template = ShapeTemplate::Cells {
            positions: vec![
                [0.0, 0.0, 0.0, -1.0],
                [1.0, 0.0, 0.0, 1.0],
                [0.0, 1.0, 0.0, 1.0],
                [0.0, 0.0, 1.0, 1.0],
            ],
            cells: vec![0, 1, 2, 3],
        };
        let mesh = template.create_mesh();
        assert_eq!(mesh.positions[1], Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(mesh.cells, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_tesseract_serialization() {
        let template = ShapeTemplate::tesseract(2.5);
        let serialized = ron::to_string(&template).unwrap();
        let deserialized: ShapeTemplate = ron::from_str(&serialized).unwrap();

        match deserialized {
            ShapeTemplate::Tesseract { size } => assert_eq!(size, 2.5),
            _ => panic!("Expected Tesseract variant"),
        }
    }

    #[test]
    fn test_prism_from_ron_text() {
        let template: ShapeTemplate =
            ron::from_str(r#"(type: "TetrahedralPrism", scale: 1.5, w_extent: 0.25)"#).unwrap();
        assert_eq!(template, ShapeTemplate::tetrahedral_prism(1.5, 0.25));
    }

    #[test]
    fn test_size_parameters() {
        assert_eq!(ShapeTemplate::tesseract(3.0).size_parameters(), vec![("size", 3.0)]);
        assert_eq!(
            ShapeTemplate::tetrahedral_prism(1.0, 2.0).size_parameters(),
            vec![("scale", 1.0), ("w_extent", 2.0)]
        );
    }
}
