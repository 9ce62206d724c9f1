//! Aircraft-style rotation matrices and 4×4 homogeneous transforms.
//!
//! Angles are radians. All matrices are row-major `Matrix` values, applied
//! to column vectors.

use crate::math::{Matrix, Vector};

/// Roll rotation (3×3).
pub fn roll(angle: f64) -> Matrix {
    let (sr, cr) = angle.sin_cos();
    Matrix::from(vec![
        vec![cr, -sr, 0.0],
        vec![sr, cr, 0.0],
        vec![0.0, 0.0, 1.0],
    ])
}

/// Pitch rotation (3×3).
pub fn pitch(angle: f64) -> Matrix {
    let (sp, cp) = angle.sin_cos();
    Matrix::from(vec![
        vec![cp, 0.0, sp],
        vec![0.0, 1.0, 0.0],
        vec![-sp, 0.0, cp],
    ])
}

/// Yaw rotation (3×3).
pub fn yaw(angle: f64) -> Matrix {
    let (sy, cy) = angle.sin_cos();
    Matrix::from(vec![
        vec![1.0, 0.0, 0.0],
        vec![0.0, cy, sy],
        vec![0.0, -sy, cy],
    ])
}

/// Build a 4×4 affine transform from an optional 3×3 rotation and an
/// optional translation. Missing parts stay at identity / zero.
pub fn affine3d(rotation: Option<&Matrix>, translation: Option<&Vector>) -> Matrix {
    let mut result = Matrix::eye(4);
    if let Some(rotation) = rotation {
        for i in 0..3 {
            for j in 0..3 {
                result[(i, j)] = rotation[(i, j)];
            }
        }
    }
    if let Some(translation) = translation {
        for i in 0..3 {
            result[(i, 3)] = translation[i];
        }
    }
    result
}

/// Transform a 3-vector by a 4×4 affine matrix.
///
/// The homogeneous coordinate is dropped without dividing, which is only
/// correct while the bottom row of `affine` is `[0, 0, 0, 1]`.
pub fn apply_affine3d(affine: &Matrix, v: &Vector) -> Vector {
    assert_eq!(v.len(), 3, "apply_affine3d expects a 3-vector");
    let v4: Vector = v.iter().copied().chain(std::iter::once(1.0)).collect();
    let transformed = affine.mul_vector(&v4);
    transformed.iter().take(3).copied().collect()
}
