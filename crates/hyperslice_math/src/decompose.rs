//! Tetrahedral decompositions of 3D cell primitives
//!
//! Boundary cells of 4D polytopes are often cubes or prisms rather than
//! tetrahedra. These tables split them into tetrahedra so the slicer only
//! ever has to deal with simplices.

use crate::Tetrahedron;

/// Five-tetrahedron split of a cube
///
/// Corners are in binary order with x as the least significant bit:
/// `0 = (-x,-y,-z)`, `1 = (+x,-y,-z)`, `2 = (-x,+y,-z)`, ... `7 = (+x,+y,+z)`.
/// Four corner tetrahedra surround the central one `{1, 2, 4, 7}`.
pub const CUBE_TETRAHEDRA: [[usize; 4]; 5] = [
    [0, 1, 2, 4],
    [1, 4, 5, 7],
    [2, 4, 6, 7],
    [1, 2, 3, 7],
    [1, 2, 4, 7],
];

/// Three-tetrahedron split of a triangular prism
///
/// Corners are the bottom triangle `0, 1, 2` followed by the top triangle
/// `3, 4, 5`, where corner `i + 3` sits directly above corner `i`.
pub const TRIANGULAR_PRISM_TETRAHEDRA: [[usize; 4]; 3] = [
    [1, 3, 4, 5],
    [0, 1, 2, 3],
    [1, 2, 3, 5],
];

/// Split a cube whose corners are given in binary order
pub fn cube_tetrahedra(corners: [usize; 8]) -> [Tetrahedron; 5] {
    CUBE_TETRAHEDRA.map(|local| Tetrahedron::new(local.map(|i| corners[i])))
}

/// Split a triangular prism, bottom triangle first
pub fn prism_tetrahedra(corners: [usize; 6]) -> [Tetrahedron; 3] {
    TRIANGULAR_PRISM_TETRAHEDRA.map(|local| Tetrahedron::new(local.map(|i| corners[i])))
}
