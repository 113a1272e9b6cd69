//! Tolerance-based vertex welding
//!
//! Two points weld when every coordinate differs by less than the
//! tolerance. This is not an equivalence relation (it is not transitive),
//! so a lookup always returns the earliest vertex within tolerance, exactly
//! as a front-to-back linear scan would.
//!
//! Vertices are bucketed on a grid whose cell edge equals the tolerance.
//! Any vertex within tolerance of a query lies in one of the 27 grid cells
//! around it, which keeps lookups constant time on average.

use std::collections::HashMap;

use hyperslice_math::Vec3;

type GridKey = [i64; 3];

#[derive(Debug, Clone)]
pub struct VertexPool {
    tolerance: f64,
    positions: Vec<Vec3>,
    /// Indices into `positions`, ascending within each bucket
    grid: HashMap<GridKey, Vec<usize>>,
}

impl VertexPool {
    /// Create an empty pool; `tolerance` must be finite and positive
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            positions: Vec::new(),
            grid: HashMap::new(),
        }
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn get(&self, index: usize) -> Vec3 {
        self.positions[index]
    }

    fn key(&self, p: Vec3) -> GridKey {
        let cell = |c: f64| (c / self.tolerance).floor() as i64;
        [cell(p.x), cell(p.y), cell(p.z)]
    }

    /// Index of the earliest vertex within tolerance of `p`
    pub fn find(&self, p: Vec3) -> Option<usize> {
        let [kx, ky, kz] = self.key(p);
        let mut best: Option<usize> = None;

        for dx in -1..=1i64 {
            for dy in -1..=1i64 {
                for dz in -1..=1i64 {
                    let key = [
                        kx.saturating_add(dx),
                        ky.saturating_add(dy),
                        kz.saturating_add(dz),
                    ];
                    let Some(bucket) = self.grid.get(&key) else {
                        continue;
                    };
                    let hit = bucket
                        .iter()
                        .copied()
                        .find(|&i| self.positions[i].approx_eq(p, self.tolerance));
                    if let Some(i) = hit {
                        best = Some(best.map_or(i, |b| b.min(i)));
                    }
                }
            }
        }

        best
    }

    /// Reuse a vertex within tolerance of `p` or append `p`
    ///
    /// Returns the index and whether a new vertex was appended.
    pub fn insert(&mut self, p: Vec3) -> (usize, bool) {
        if let Some(index) = self.find(p) {
            return (index, false);
        }

        let index = self.positions.len();
        self.positions.push(p);
        let key = self.key(p);
        self.grid.entry(key).or_default().push(index);
        (index, true)
    }

    /// Drop every vertex at or after `len`
    pub fn truncate(&mut self, len: usize) {
        while self.positions.len() > len {
            let Some(p) = self.positions.pop() else {
                break;
            };
            let key = self.key(p);
            if let Some(bucket) = self.grid.get_mut(&key) {
                // The removed vertex is the newest, so it is last in its bucket
                bucket.pop();
                if bucket.is_empty() {
                    self.grid.remove(&key);
                }
            }
        }
    }
}
