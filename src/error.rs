//! Error type shared by every fallible operation in the crate.
//!
//! Dimension problems a caller can reasonably hit with runtime data (a flat
//! buffer of the wrong length, two matrices that don't line up) come back as
//! a `LinalgError`. Mismatches that can only come from a programming mistake
//! (pointwise ops on vectors of different lengths, slice bounds past the
//! edge) are asserted instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinalgError {
    /// Row `row` has `found` columns while row 0 has `expected`.
    #[error("inconsistent shape: row {row} has {found} columns, expected {expected}")]
    Shape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix has no rows")]
    Empty,

    #[error("length {len} doesn't match rows {rows} and columns {cols}")]
    ShapeMismatch { len: usize, rows: usize, cols: usize },

    #[error("incompatible matrices: left has {left_cols} columns, right has {right_rows} rows")]
    IncompatibleShape { left_cols: usize, right_rows: usize },

    #[error("bad shapes: rows must match ({left_rows} vs {right_rows})")]
    RowMismatch { left_rows: usize, right_rows: usize },

    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Raised only on the rejecting reduction path.
    #[error("singular matrix: pivot {pivot} in column {column}")]
    Singular { column: usize, pivot: f64 },

    #[error("cannot normalize a vector of length zero")]
    ZeroVector,
}

pub type Result<T> = std::result::Result<T, LinalgError>;
