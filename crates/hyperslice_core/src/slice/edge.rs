//! Vertex classification and edge intersection

use hyperslice_math::{Vec3, Vec4};

/// Signed distance of `p` from the hyperplane `w = slice`
#[inline]
pub fn classify(p: Vec4, slice: f64) -> f64 {
    p.w - slice
}

/// Where the segment from `a` to `b` crosses the hyperplane `w = slice`
///
/// Only a strict sign change counts. An endpoint lying exactly on the
/// hyperplane produces no point, so a vertex touched by the slice is never
/// reported through the edges that meet at it.
#[inline]
pub fn intersect(a: Vec4, b: Vec4, slice: f64) -> Option<Vec3> {
    let da = classify(a, slice);
    let db = classify(b, slice);
    if da * db >= 0.0 {
        return None;
    }

    let t = da / (a.w - b.w);
    Some(a.xyz() * (1.0 - t) + b.xyz() * t)
}
