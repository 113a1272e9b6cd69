//! Core types for hyperslice
//!
//! This crate turns tetrahedral 4D meshes into the triangle soup of their
//! cross-section with a hyperplane `w = s`:
//!
//! - [`Mesh4D`] - Vertex positions plus a flat buffer of tetrahedral cells
//! - [`Mesh3D`] - Triangles with one flat normal each
//! - [`slice`] - Cut one mesh at a given `w`
//! - [`slice_all`] - Cut a batch of meshes at the same `w`
//! - [`SliceError`] - Why a mesh could not be sliced
//!
//! The individual pipeline stages live in [`slice`](mod@slice) and are
//! public for reuse and testing.

mod error;
mod mesh;
pub mod slice;

pub use error::{MeshDefect, SliceError};
pub use mesh::{Mesh3D, Mesh4D, RenderVertex, Triangle3};
pub use slice::{slice, slice_all, slice_all_with, slice_with, SliceOptions, DEFAULT_TOLERANCE};

// Re-export commonly used types from hyperslice_math for convenience
pub use hyperslice_math::{Vec3, Vec4, Shape4D, Tetrahedron};
pub use hyperslice_math::{Hexadecachoron4D, Pentachoron4D, Tesseract4D, TetrahedralPrism4D};
