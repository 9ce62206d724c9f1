use std::fmt;
use std::iter::FromIterator;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};

/// Fixed-length `f64` vector.
///
/// The backing buffer is allocated once at its final length; there is no
/// way to grow a `Vector` after construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    pub fn zeros(len: usize) -> Self {
        Vector::from_vec(vec![0.0; len])
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn mapv<F>(&self, mut f: F) -> Vector
    where
        F: FnMut(f64) -> f64,
    {
        self.data.iter().map(|&v| f(v)).collect()
    }

    fn zip_with<F>(&self, other: &Vector, op: &str, mut f: F) -> Vector
    where
        F: FnMut(f64, f64) -> f64,
    {
        assert_eq!(
            self.len(),
            other.len(),
            "{} requires vectors of equal length",
            op
        );
        self.iter()
            .zip(other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect()
    }

    pub fn add(&self, other: &Vector) -> Vector {
        self.zip_with(other, "Vector addition", |a, b| a + b)
    }

    /// `self + (-1 * other)`.
    pub fn sub(&self, other: &Vector) -> Vector {
        self.add(&other.scale(-1.0))
    }

    pub fn scale(&self, s: f64) -> Vector {
        self.mapv(|v| s * v)
    }

    /// Pointwise minimum. A `NaN` in either operand yields `NaN`.
    pub fn minimum(&self, other: &Vector) -> Vector {
        self.zip_with(other, "Pointwise minimum", |a, b| {
            if a.is_nan() || b.is_nan() {
                f64::NAN
            } else {
                a.min(b)
            }
        })
    }

    /// Pointwise maximum. A `NaN` in either operand yields `NaN`.
    pub fn maximum(&self, other: &Vector) -> Vector {
        self.zip_with(other, "Pointwise maximum", |a, b| {
            if a.is_nan() || b.is_nan() {
                f64::NAN
            } else {
                a.max(b)
            }
        })
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        assert_eq!(
            self.len(),
            other.len(),
            "Dot product requires equal length vectors"
        );
        self.iter().zip(other.iter()).map(|(a, b)| a * b).sum()
    }

    /// Right-handed cross product of two 3-vectors.
    pub fn cross(&self, other: &Vector) -> Vector {
        assert!(
            self.len() == 3 && other.len() == 3,
            "Cross product is only defined for 3-vectors"
        );
        let (a1, a2, a3) = (self[0], self[1], self[2]);
        let (b1, b2, b3) = (other[0], other[1], other[2]);
        Vector::from_vec(vec![
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        ])
    }

    /// Euclidean norm.
    pub fn length(&self) -> f64 {
        self.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Scale to unit length.
    ///
    /// A zero vector has no direction: every component comes back `NaN`.
    /// Use [`Vector::try_normalize`] to get an error instead.
    pub fn normalize(&self) -> Vector {
        self.scale(1.0 / self.length())
    }

    pub fn try_normalize(&self) -> Result<Vector> {
        let length = self.length();
        if length == 0.0 {
            return Err(LinalgError::ZeroVector);
        }
        Ok(self.scale(1.0 / length))
    }
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Vector::from_vec(value)
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<'a, 'b> Add<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn add(self, rhs: &'b Vector) -> Self::Output {
        Vector::add(self, rhs)
    }
}

impl<'a, 'b> Sub<&'b Vector> for &'a Vector {
    type Output = Vector;

    fn sub(self, rhs: &'b Vector) -> Self::Output {
        Vector::sub(self, rhs)
    }
}

impl<'a> Mul<&'a Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: &'a Vector) -> Self::Output {
        rhs.scale(self)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
