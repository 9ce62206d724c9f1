use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TOLERANCE;
use crate::error::{LinalgError, Result};
use crate::math::vector::Vector;

/// Dense matrix stored as a sequence of row vectors.
///
/// Rows are expected to share one length. Nothing enforces that at
/// construction; [`Matrix::checked_shape`] is the guard, and every operation
/// that combines matrices runs it on its inputs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    rows: Vec<Vector>,
}

impl Matrix {
    pub fn from_rows(rows: Vec<Vector>) -> Self {
        Self { rows }
    }

    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Matrix::from_rows(vec![Vector::zeros(ncols); nrows])
    }

    /// `n x n` identity.
    pub fn eye(n: usize) -> Self {
        let mut result = Matrix::zeros(n, n);
        for i in 0..n {
            result[(i, i)] = 1.0;
        }
        result
    }

    /// Unflatten a row-major buffer.
    pub fn from_list(list: &[f64], nrows: usize, ncols: usize) -> Result<Self> {
        if list.len() != nrows * ncols {
            return Err(LinalgError::ShapeMismatch {
                len: list.len(),
                rows: nrows,
                cols: ncols,
            });
        }
        if ncols == 0 {
            return Ok(Matrix::zeros(nrows, 0));
        }
        let rows = list
            .chunks(ncols)
            .map(|chunk| Vector::from_vec(chunk.to_vec()))
            .collect();
        Ok(Matrix::from_rows(rows))
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Column count taken from row 0.
    pub fn ncols(&self) -> usize {
        self.rows.first().map_or(0, Vector::len)
    }

    /// `(rows, columns)` without looking past row 0.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    /// `(rows, columns)`, failing if the matrix is empty or any row length
    /// differs from row 0.
    pub fn checked_shape(&self) -> Result<(usize, usize)> {
        let Some(first) = self.rows.first() else {
            return Err(LinalgError::Empty);
        };
        let expected = first.len();
        for (row, values) in self.rows.iter().enumerate() {
            if values.len() != expected {
                return Err(LinalgError::Shape {
                    row,
                    expected,
                    found: values.len(),
                });
            }
        }
        Ok((self.rows.len(), expected))
    }

    pub fn row(&self, row: usize) -> &Vector {
        &self.rows[row]
    }

    pub fn rows(&self) -> &[Vector] {
        &self.rows
    }

    pub(crate) fn set_row(&mut self, row: usize, values: Vector) {
        self.rows[row] = values;
    }

    pub fn column(&self, col: usize) -> Vector {
        assert!(col < self.ncols(), "column index out of bounds");
        self.rows.iter().map(|row| row[col]).collect()
    }

    pub fn mapv<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix::from_rows(self.rows.iter().map(|row| row.mapv(&mut f)).collect())
    }

    /// Row-major flatten.
    pub fn as_list(&self) -> Vec<f64> {
        let mut result = Vec::with_capacity(self.rows.iter().map(Vector::len).sum());
        for row in &self.rows {
            result.extend_from_slice(row.as_slice());
        }
        result
    }

    /// Snap every element within `epsilon` of an integer onto that integer.
    ///
    /// The nearest integer rounds halves toward `+inf`, so with
    /// `epsilon > 0.5` both `-2.5` and `2.5` move up.
    pub fn tolerate(&self, epsilon: f64) -> Matrix {
        self.mapv(|v| {
            let rounded = (v + 0.5).floor();
            if (v - rounded).abs() < epsilon {
                rounded
            } else {
                v
            }
        })
    }

    pub fn tolerate_default(&self) -> Matrix {
        self.tolerate(DEFAULT_TOLERANCE)
    }

    /// Matrix-vector product.
    pub fn mul_vector(&self, v: &Vector) -> Vector {
        let (nrows, ncols) = self.shape();
        assert_eq!(
            v.len(),
            ncols,
            "Matrix-vector product requires vector length to match column count"
        );
        let mut result = Vector::zeros(nrows);
        for (i, row) in self.rows.iter().enumerate() {
            result[i] = row.dot(v);
        }
        result
    }

    /// Matrix-matrix product.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        let (nrows1, ncols1) = self.checked_shape()?;
        let (nrows2, ncols2) = other.checked_shape()?;
        if ncols1 != nrows2 {
            return Err(LinalgError::IncompatibleShape {
                left_cols: ncols1,
                right_rows: nrows2,
            });
        }
        let inner = ncols1;
        let mut result = Matrix::zeros(nrows1, ncols2);
        for i in 0..nrows1 {
            for j in 0..ncols2 {
                let mut rij = 0.0;
                for k in 0..inner {
                    rij += self[(i, k)] * other[(k, j)];
                }
                result[(i, j)] = rij;
            }
        }
        Ok(result)
    }

    pub fn transpose(&self) -> Matrix {
        let ncols = self.ncols();
        Matrix::from_rows((0..ncols).map(|col| self.column(col)).collect())
    }

    pub fn row_major_order(&self) -> Vec<f64> {
        self.as_list()
    }

    pub fn column_major_order(&self) -> Vec<f64> {
        let (nrows, ncols) = self.shape();
        let mut result = Vec::with_capacity(nrows * ncols);
        for col in 0..ncols {
            for row in &self.rows {
                result.push(row[col]);
            }
        }
        result
    }

    /// Swap rows `i` and `j` in place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        assert!(
            i < self.nrows() && j < self.nrows(),
            "row index out of bounds"
        );
        self.rows.swap(i, j);
    }

    /// Copy of `self` with rows `i` and `j` exchanged.
    pub fn with_rows_swapped(&self, i: usize, j: usize) -> Matrix {
        let mut result = self.clone();
        result.swap_rows(i, j);
        result
    }

    /// Horizontal concatenation `[self | other]`.
    pub fn shelf(&self, other: &Matrix) -> Result<Matrix> {
        let (nrows1, ncols1) = self.checked_shape()?;
        let (nrows2, ncols2) = other.checked_shape()?;
        if nrows1 != nrows2 {
            return Err(LinalgError::RowMismatch {
                left_rows: nrows1,
                right_rows: nrows2,
            });
        }
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(left, right)| {
                let mut data = Vec::with_capacity(ncols1 + ncols2);
                data.extend_from_slice(left.as_slice());
                data.extend_from_slice(right.as_slice());
                Vector::from_vec(data)
            })
            .collect();
        Ok(Matrix::from_rows(rows))
    }

    /// The half-open block `[min_row, max_row) x [min_col, max_col)`.
    pub fn slice(&self, min_row: usize, min_col: usize, max_row: usize, max_col: usize) -> Matrix {
        assert!(
            min_row <= max_row && max_row <= self.nrows(),
            "row slice out of bounds"
        );
        let rows = self.rows[min_row..max_row]
            .iter()
            .map(|row| {
                assert!(
                    min_col <= max_col && max_col <= row.len(),
                    "column slice out of bounds"
                );
                Vector::from_vec(row.as_slice()[min_col..max_col].to_vec())
            })
            .collect();
        Matrix::from_rows(rows)
    }
}

impl From<Vec<Vec<f64>>> for Matrix {
    fn from(value: Vec<Vec<f64>>) -> Self {
        Matrix::from_rows(value.into_iter().map(Vector::from_vec).collect())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.rows[index.0][index.1]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.rows[index.0][index.1]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, row) in self.rows.iter().enumerate() {
            write!(f, "{}", row)?;
            if idx + 1 != self.rows.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
