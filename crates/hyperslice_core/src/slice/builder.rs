//! Mesh builder: drives the per-cell stages over whole meshes

use hyperslice_math::Vec4;

use crate::error::SliceError;
use crate::mesh::{Mesh3D, Mesh4D, Triangle3};

use super::cell::{CellAssembler, CellOutcome};
use super::face::sample_faces_into;
use super::SliceOptions;

/// Slice one mesh with the default tolerance
pub fn slice(mesh: &Mesh4D, slice_value: f64) -> Result<Mesh3D, SliceError> {
    slice_with(mesh, slice_value, &SliceOptions::default())
}

/// Slice one mesh
///
/// The mesh is validated in full before any cell is processed.
pub fn slice_with(mesh: &Mesh4D, slice_value: f64, options: &SliceOptions) -> Result<Mesh3D, SliceError> {
    options.validate()?;
    if !slice_value.is_finite() {
        return Err(SliceError::NonFiniteSlice(slice_value));
    }
    mesh.validate()?;

    Ok(build(mesh, slice_value, options.tolerance))
}

/// Slice every mesh at the same value, one output per input in order
///
/// Fails on the first invalid mesh without returning partial results.
pub fn slice_all(meshes: &[Mesh4D], slice_value: f64) -> Result<Vec<Mesh3D>, SliceError> {
    slice_all_with(meshes, slice_value, &SliceOptions::default())
}

pub fn slice_all_with(
    meshes: &[Mesh4D],
    slice_value: f64,
    options: &SliceOptions,
) -> Result<Vec<Mesh3D>, SliceError> {
    options.validate()?;
    if !slice_value.is_finite() {
        return Err(SliceError::NonFiniteSlice(slice_value));
    }
    for mesh in meshes {
        mesh.validate()?;
    }

    Ok(meshes
        .iter()
        .map(|mesh| build(mesh, slice_value, options.tolerance))
        .collect())
}

/// Run the pipeline over a validated mesh
fn build(mesh: &Mesh4D, slice_value: f64, tolerance: f64) -> Mesh3D {
    let mut assembler = CellAssembler::new(tolerance);
    let mut segments = Vec::with_capacity(4);
    let mut skipped = 0usize;

    for (cell_index, cell) in mesh.iter_cells().enumerate() {
        let points: [Vec4; 4] = cell.map(|i| mesh.positions[i]);
        sample_faces_into(&points, slice_value, tolerance, &mut segments);

        match assembler.assemble(&segments) {
            outcome @ (CellOutcome::Pathological { .. } | CellOutcome::Collapsed) => {
                skipped += 1;
                log::trace!("Cell {} skipped at w={}: {:?}", cell_index, slice_value, outcome);
            }
            _ => {}
        }
    }

    let (pool, indices) = assembler.finish();
    let min_cross = tolerance * tolerance;

    let mut triangles = Vec::with_capacity(indices.len());
    for [a, b, c] in indices {
        let corners = [pool.get(a), pool.get(b), pool.get(c)];
        match Triangle3::with_flat_normal(corners, min_cross) {
            Some(tri) => triangles.push(tri),
            None => skipped += 1,
        }
    }

    log::debug!(
        "Sliced {} cells at w={}: {} triangles, {} welded vertices, {} degenerate",
        mesh.cell_count(),
        slice_value,
        triangles.len(),
        pool.len(),
        skipped
    );

    Mesh3D { triangles }
}
