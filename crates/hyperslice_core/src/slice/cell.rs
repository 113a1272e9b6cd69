//! Cell assembly
//!
//! Turns the segments of one tetrahedron into one triangle (3 segments) or
//! two triangles (4 segments). Endpoints are welded into a shared vertex
//! pool first; a cell whose cross-section collapses after welding is
//! discarded and every vertex it added is rolled back.

use super::face::Segment;
use super::vertex_pool::VertexPool;

/// What happened to one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellOutcome {
    /// The hyperplane does not cut the cell
    Missed,
    /// A segment count other than 3 or 4 (vertex exactly on the slice, or
    /// faces dropped as degenerate)
    Pathological { segments: usize },
    /// The segments did not weld into a closed loop of distinct points
    Collapsed,
    /// One triangle emitted
    Triangle,
    /// Two triangles emitted
    Quad,
}

impl CellOutcome {
    pub fn triangle_count(self) -> usize {
        match self {
            CellOutcome::Triangle => 1,
            CellOutcome::Quad => 2,
            _ => 0,
        }
    }
}

/// Accumulates welded vertices and triangle index triples for one mesh
#[derive(Debug, Clone)]
pub struct CellAssembler {
    pool: VertexPool,
    triangles: Vec<[usize; 3]>,
}

impl CellAssembler {
    pub fn new(tolerance: f64) -> Self {
        Self {
            pool: VertexPool::new(tolerance),
            triangles: Vec::new(),
        }
    }

    #[inline]
    pub fn pool(&self) -> &VertexPool {
        &self.pool
    }

    /// Triangles emitted so far, as indices into [`Self::pool`]
    #[inline]
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Assemble one cell's segments
    pub fn assemble(&mut self, segments: &[Segment]) -> CellOutcome {
        let n = segments.len();
        match n {
            0 => return CellOutcome::Missed,
            3 | 4 => {}
            _ => return CellOutcome::Pathological { segments: n },
        }

        let mark = self.pool.len();
        let mut ends = [[0usize; 2]; 4];
        for (slot, segment) in segments.iter().enumerate() {
            ends[slot] = [self.pool.insert(segment.a).0, self.pool.insert(segment.b).0];
        }

        let Some(ring) = close_loop(&ends[..n]) else {
            self.pool.truncate(mark);
            return CellOutcome::Collapsed;
        };

        // Ring order c0 c1 c2 [c3]; the quad is split along c1-c3
        if n == 3 {
            self.triangles.push([ring[0], ring[1], ring[2]]);
            CellOutcome::Triangle
        } else {
            let (i0, i1, i2, i3) = (ring[0], ring[1], ring[3], ring[2]);
            self.triangles.push([i0, i1, i2]);
            self.triangles.push([i1, i3, i2]);
            CellOutcome::Quad
        }
    }

    /// Hand back the welded vertices and triangle indices
    pub fn finish(self) -> (VertexPool, Vec<[usize; 3]>) {
        (self.pool, self.triangles)
    }
}

/// Order the welded endpoints as a polygon by walking segment to segment
///
/// Returns `None` unless the segments form a single closed loop through
/// exactly `ends.len()` distinct vertices.
fn close_loop(ends: &[[usize; 2]]) -> Option<[usize; 4]> {
    let n = ends.len();
    let mut ring = [0usize; 4];
    let mut used = [false; 4];

    ring[0] = ends[0][0];
    ring[1] = ends[0][1];
    used[0] = true;
    if ring[0] == ring[1] {
        return None;
    }

    for len in 2..n {
        let tail = ring[len - 1];
        let next = (0..n).find(|&i| !used[i] && ends[i].contains(&tail))?;
        used[next] = true;
        let other = if ends[next][0] == tail { ends[next][1] } else { ends[next][0] };
        if ring[..len].contains(&other) {
            return None;
        }
        ring[len] = other;
    }

    let closing = (0..n).find(|&i| !used[i])?;
    let [a, b] = ends[closing];
    let (first, last) = (ring[0], ring[n - 1]);
    if (a == last && b == first) || (a == first && b == last) {
        Some(ring)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperslice_math::Vec3;

    const TOL: f64 = 1e-6;

    fn seg(a: [f64; 3], b: [f64; 3]) -> Segment {
        Segment {
            a: Vec3::new(a[0], a[1], a[2]),
            b: Vec3::new(b[0], b[1], b[2]),
        }
    }

    #[test]
    fn test_missed_and_pathological() {
        let mut asm = CellAssembler::new(TOL);
        assert_eq!(asm.assemble(&[]), CellOutcome::Missed);

        let one = [seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0])];
        assert_eq!(asm.assemble(&one), CellOutcome::Pathological { segments: 1 });
        assert!(asm.pool().is_empty());
        assert!(asm.triangles().is_empty());
    }

    #[test]
    fn test_triangle_from_three_segments() {
        let a = [1.0, 0.0, 0.0];
        let b = [0.0, 1.0, 0.0];
        let c = [0.0, 0.0, 1.0];
        let segments = [seg(a, b), seg(c, a), seg(b, c)];

        let mut asm = CellAssembler::new(TOL);
        assert_eq!(asm.assemble(&segments), CellOutcome::Triangle);
        assert_eq!(asm.pool().len(), 3);
        assert_eq!(asm.triangles(), &[[0, 1, 2]]);
    }

    #[test]
    fn test_quad_split_along_diagonal() {
        // Unit square, segments listed out of ring order
        let p = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]];
        let segments = [seg(p[0], p[1]), seg(p[2], p[3]), seg(p[1], p[2]), seg(p[3], p[0])];

        let mut asm = CellAssembler::new(TOL);
        assert_eq!(asm.assemble(&segments), CellOutcome::Quad);

        let tris = asm.triangles();
        assert_eq!(tris.len(), 2);
        // Both triangles share the diagonal 1-3 and are otherwise disjoint
        assert_eq!(tris[0], [0, 1, 3]);
        assert_eq!(tris[1], [1, 2, 3]);
    }

    #[test]
    fn test_collapsed_cell_rolls_back() {
        let mut asm = CellAssembler::new(TOL);
        let keep = [seg([5.0, 0.0, 0.0], [6.0, 0.0, 0.0]), seg([6.0, 0.0, 0.0], [5.0, 1.0, 0.0]), seg([5.0, 1.0, 0.0], [5.0, 0.0, 0.0])];
        assert_eq!(asm.assemble(&keep), CellOutcome::Triangle);
        assert_eq!(asm.pool().len(), 3);

        // Welds down to two distinct points
        let e = 1e-7;
        let collapsed = [
            seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            seg([1.0, 0.0, 0.0], [e, 0.0, 0.0]),
            seg([e, e, 0.0], [0.0, 0.0, 0.0]),
        ];
        assert_eq!(asm.assemble(&collapsed), CellOutcome::Collapsed);
        assert_eq!(asm.pool().len(), 3);
        assert_eq!(asm.triangles().len(), 1);
    }

    #[test]
    fn test_open_chain_is_collapsed() {
        let segments = [
            seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
            seg([1.0, 0.0, 0.0], [1.0, 1.0, 0.0]),
            seg([1.0, 1.0, 0.0], [0.0, 2.0, 0.0]),
        ];
        let mut asm = CellAssembler::new(TOL);
        assert_eq!(asm.assemble(&segments), CellOutcome::Collapsed);
        assert!(asm.pool().is_empty());
    }

    #[test]
    fn test_reuses_vertices_from_earlier_cells() {
        let mut asm = CellAssembler::new(TOL);
        let first = [seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]), seg([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), seg([0.0, 1.0, 0.0], [0.0, 0.0, 0.0])];
        let second = [seg([1.0, 0.0, 0.0], [1.0, 1.0, 0.0]), seg([1.0, 1.0, 0.0], [0.0, 1.0, 0.0]), seg([0.0, 1.0, 0.0], [1.0, 0.0, 0.0])];
        asm.assemble(&first);
        asm.assemble(&second);
        assert_eq!(asm.pool().len(), 4);
        assert_eq!(asm.triangles()[1], [1, 3, 2]);
    }

    #[test]
    fn test_triangle_count() {
        assert_eq!(CellOutcome::Quad.triangle_count(), 2);
        assert_eq!(CellOutcome::Triangle.triangle_count(), 1);
        assert_eq!(CellOutcome::Collapsed.triangle_count(), 0);
    }
}
