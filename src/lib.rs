//! hyperslice - exact 3D cross-sections of 4D meshes
//!
//! Library half of the `hyperslice` binary: configuration loading and
//! scene files. The slicing itself lives in `hyperslice_core`.

pub mod config;
pub mod scene;
