//! Face sampling
//!
//! Each triangular face of a tetrahedron is crossed by the hyperplane in
//! either zero or two edges. Two crossings make one edge of the cell's
//! cross-section polygon.

use hyperslice_math::{Vec3, Vec4};

use super::edge::intersect;

/// Faces of a tetrahedron, face `i` omits local vertex `i`
pub const FACES: [[usize; 3]; 4] = [
    [1, 2, 3],
    [0, 2, 3],
    [0, 1, 3],
    [0, 1, 2],
];

/// One edge of a cell's cross-section, from a single face
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vec3,
    pub b: Vec3,
}

/// Collect the cross-section segments of one tetrahedron into `out`
///
/// `out` is cleared first. Faces that yield anything other than exactly two
/// crossings contribute nothing, as do faces whose two crossings coincide
/// within `tolerance`. Every edge is interpolated from its lower local
/// vertex, so an edge shared by two faces produces the same point for both.
pub fn sample_faces_into(points: &[Vec4; 4], slice: f64, tolerance: f64, out: &mut Vec<Segment>) {
    out.clear();

    for face in &FACES {
        let mut hits = [Vec3::ZERO; 3];
        let mut count = 0;

        for k in 0..3 {
            let (i, j) = (face[k], face[(k + 1) % 3]);
            let (lo, hi) = (i.min(j), i.max(j));
            if let Some(p) = intersect(points[lo], points[hi], slice) {
                hits[count] = p;
                count += 1;
            }
        }

        if count == 2 && !hits[0].approx_eq(hits[1], tolerance) {
            out.push(Segment { a: hits[0], b: hits[1] });
        }
    }
}

/// Allocating convenience wrapper around [`sample_faces_into`]
pub fn sample_faces(points: &[Vec4; 4], slice: f64, tolerance: f64) -> Vec<Segment> {
    let mut out = Vec::with_capacity(4);
    sample_faces_into(points, slice, tolerance, &mut out);
    out
}
