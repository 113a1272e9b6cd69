//! 4D Mathematics Library
//!
//! This crate provides the vector and shape types for hyperslice.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D point with x, y, z, w components
//! - [`Vec3`] - 3D point or normal in the cross-section
//!
//! ## Shape Types
//!
//! - [`Shape4D`] - Trait for 4D shapes decomposed into tetrahedra
//! - [`Tetrahedron`] - A 3-simplex defined by vertex indices
//! - [`Pentachoron4D`] - The 4-simplex
//! - [`Tesseract4D`] - A 4D hypercube
//! - [`Hexadecachoron4D`] - The 16-cell
//! - [`TetrahedralPrism4D`] - A tetrahedron extruded along w

mod vec3;
mod vec4;
pub mod decompose;
pub mod shape;
pub mod pentachoron;
pub mod tesseract;
pub mod hexadecachoron;
pub mod tetrahedral_prism;

pub use vec3::Vec3;
pub use vec4::Vec4;
pub use shape::{Shape4D, Tetrahedron};
pub use pentachoron::Pentachoron4D;
pub use tesseract::Tesseract4D;
pub use hexadecachoron::Hexadecachoron4D;
pub use tetrahedral_prism::TetrahedralPrism4D;
