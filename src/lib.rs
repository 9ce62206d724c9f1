//! qd-vector: small dense linear-algebra primitives.
//!
//! This crate provides fixed-length vectors and row-list matrices with
//! element-wise arithmetic, products, reshaping helpers, a Gauss-Jordan
//! row reduction with partial pivoting and the inverse built on it, and a
//! few fixed-form rotation / affine constructors for 3D work.
//!
//! Everything is synchronous and allocation-per-result; nothing holds
//! global state.
pub mod affine;
pub mod config;
pub mod error;
pub mod math;

pub use config::{Degeneracy, ReduceOptions, DEFAULT_TOLERANCE};
pub use error::{LinalgError, Result};
pub use math::{inverse, inverse_with, reduce, reduce_with, Matrix, Vector};

/// Library name.
pub const NAME: &str = "qd_vector";
