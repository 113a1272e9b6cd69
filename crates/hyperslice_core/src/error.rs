//! Slice error types
//!
//! Only malformed input is an error. Degenerate geometry at a particular
//! slice is skipped silently and an empty result is a valid result.

use std::fmt;

/// What is wrong with a [`Mesh4D`](crate::Mesh4D)
#[derive(Debug, Clone, PartialEq)]
pub enum MeshDefect {
    /// The cell index buffer length is not a multiple of four
    RaggedCells { len: usize },
    /// A cell refers to a vertex that does not exist
    IndexOutOfBounds { cell: usize, index: usize, vertex_count: usize },
    /// A vertex has a NaN or infinite coordinate
    NonFinitePosition { index: usize },
}

impl fmt::Display for MeshDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshDefect::RaggedCells { len } => {
                write!(f, "cell index buffer has {} entries, not a multiple of 4", len)
            }
            MeshDefect::IndexOutOfBounds { cell, index, vertex_count } => write!(
                f,
                "cell {} refers to vertex {} but the mesh has {} vertices",
                cell, index, vertex_count
            ),
            MeshDefect::NonFinitePosition { index } => {
                write!(f, "vertex {} has a non-finite coordinate", index)
            }
        }
    }
}

/// Error type for slice operations
#[derive(Debug, Clone, PartialEq)]
pub enum SliceError {
    /// The input mesh violates its contract
    InvalidMesh(MeshDefect),
    /// The slice value is NaN or infinite
    NonFiniteSlice(f64),
    /// The deduplication tolerance is not a finite positive number
    InvalidTolerance(f64),
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::InvalidMesh(defect) => write!(f, "Invalid mesh: {}", defect),
            SliceError::NonFiniteSlice(value) => write!(f, "Slice value must be finite, got {}", value),
            SliceError::InvalidTolerance(value) => {
                write!(f, "Tolerance must be finite and positive, got {}", value)
            }
        }
    }
}

impl std::error::Error for SliceError {}

impl From<MeshDefect> for SliceError {
    fn from(defect: MeshDefect) -> Self {
        SliceError::InvalidMesh(defect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_cells_display() {
        let err: SliceError = MeshDefect::RaggedCells { len: 5 }.into();
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid mesh"));
        assert!(msg.contains("5 entries"));
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = SliceError::InvalidMesh(MeshDefect::IndexOutOfBounds {
            cell: 2,
            index: 17,
            vertex_count: 16,
        });
        let msg = format!("{}", err);
        assert!(msg.contains("cell 2"));
        assert!(msg.contains("vertex 17"));
        assert!(msg.contains("16 vertices"));
    }

    #[test]
    fn test_non_finite_slice_display() {
        let msg = format!("{}", SliceError::NonFiniteSlice(f64::INFINITY));
        assert!(msg.contains("finite"));
        assert!(msg.contains("inf"));
    }

    #[test]
    fn test_error_source_is_none() {
        use std::error::Error;

        let err = SliceError::InvalidTolerance(-1.0);
        assert!(err.source().is_none());
    }

    #[test]
    fn test_debug_format() {
        let err = SliceError::InvalidMesh(MeshDefect::NonFinitePosition { index: 3 });
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidMesh"));
        assert!(debug.contains("NonFinitePosition"));
    }
}
