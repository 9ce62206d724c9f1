//! Gauss-Jordan elimination and the inverse built on it.
//!
//! Reduction works over the leading `min(rows, cols)` square block with
//! partial pivoting (largest `|value|` in the pivot column, lowest row on
//! ties). Every row operation is applied to the whole row, so trailing
//! columns of an augmented matrix pick up the same transformation. Forward
//! elimination and back-substitution happen in one pass: each pivot clears
//! its column in the rows above as well as below.
//!
//! By default a zero pivot is divided through and the result fills with
//! `inf`/`NaN`. Pass `ReduceOptions` with `Degeneracy::Reject` to get
//! `LinalgError::Singular` instead.

use crate::config::{Degeneracy, ReduceOptions};
use crate::error::{LinalgError, Result};
use crate::math::matrix::Matrix;

/// Row-reduce `m` to reduced row-echelon form, propagating IEEE values on
/// degenerate pivots.
pub fn reduce(m: &Matrix) -> Result<Matrix> {
    reduce_with(m, &ReduceOptions::default())
}

pub fn reduce_with(m: &Matrix, options: &ReduceOptions) -> Result<Matrix> {
    let (nrows, ncols) = m.checked_shape()?;
    let mn = nrows.min(ncols);
    let mut result = m.clone();

    for col in 0..mn {
        let pivot_row = select_pivot(&result, col, mn);
        if pivot_row != col {
            log::trace!("reduce: column {} swaps rows {} and {}", col, col, pivot_row);
            result.swap_rows(col, pivot_row);
        }

        let pivot = result[(col, col)];
        if options.is_degenerate(pivot) {
            match options.degeneracy {
                Degeneracy::Reject => {
                    return Err(LinalgError::Singular { column: col, pivot });
                }
                Degeneracy::Propagate => {
                    log::debug!(
                        "reduce: degenerate pivot {} in column {}, result will contain inf/NaN",
                        pivot,
                        col
                    );
                }
            }
        }

        let normalized = result.row(col).scale(1.0 / pivot);
        for row in 0..mn {
            if row == col {
                continue;
            }
            let factor = result[(row, col)];
            let adjusted = result.row(row).add(&normalized.scale(-factor));
            result.set_row(row, adjusted);
        }
        result.set_row(col, normalized);
    }

    Ok(result)
}

/// Row in `col..mn` holding the largest `|value|` in column `col`. Strict
/// comparison keeps the first one found on ties.
fn select_pivot(m: &Matrix, col: usize, mn: usize) -> usize {
    let mut best_row = col;
    let mut best_value = m[(col, col)].abs();
    for row in (col + 1)..mn {
        let candidate = m[(row, col)].abs();
        if candidate > best_value {
            best_value = candidate;
            best_row = row;
        }
    }
    log::trace!("reduce: pivot for column {} is row {} (|p| = {})", col, best_row, best_value);
    best_row
}

/// Inverse of a square matrix via `reduce([m | I])`.
pub fn inverse(m: &Matrix) -> Result<Matrix> {
    inverse_with(m, &ReduceOptions::default())
}

pub fn inverse_with(m: &Matrix, options: &ReduceOptions) -> Result<Matrix> {
    let (nrows, ncols) = m.checked_shape()?;
    if nrows != ncols {
        return Err(LinalgError::NotSquare {
            rows: nrows,
            cols: ncols,
        });
    }
    let dim = nrows;
    let augmented = m.shelf(&Matrix::eye(dim))?;
    log::trace!("inverse: reducing augmented {:?} matrix", augmented.shape());
    let reduced = reduce_with(&augmented, options)?;
    Ok(reduced.slice(0, dim, dim, 2 * dim))
}
