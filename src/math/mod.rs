//! Vector and matrix containers plus the elimination engine.
//!
//! `Vector` is a fixed-length `f64` buffer and `Matrix` a list of row
//! vectors. Both are plain owned values: every operation returns a fresh
//! result and leaves its inputs alone, except `Matrix::swap_rows`.
pub mod matrix;
pub mod reduce;
pub mod vector;

pub use matrix::Matrix;
pub use reduce::{inverse, inverse_with, reduce, reduce_with};
pub use vector::Vector;
