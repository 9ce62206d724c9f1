//! Integration tests for reduction options and JSON interchange.

use qd_vector::{Degeneracy, Matrix, ReduceOptions, Vector, DEFAULT_TOLERANCE};

// ---------------------------------------------------------------------------
// ReduceOptions / Degeneracy
// ---------------------------------------------------------------------------

#[test]
fn reduce_options_default_propagates() {
    let opts = ReduceOptions::default();
    assert_eq!(opts.degeneracy, Degeneracy::Propagate);
    assert_eq!(opts.pivot_tolerance, 0.0);
    assert_eq!(Degeneracy::default(), Degeneracy::Propagate);
}

#[test]
fn reduce_options_strict_rejects() {
    let opts = ReduceOptions::strict();
    assert_eq!(opts.degeneracy, Degeneracy::Reject);
    assert_eq!(opts.pivot_tolerance, 0.0);
}

#[test]
fn degeneracy_from_str() {
    assert_eq!("propagate".parse::<Degeneracy>(), Ok(Degeneracy::Propagate));
    assert_eq!("REJECT".parse::<Degeneracy>(), Ok(Degeneracy::Reject));
    assert!("panic".parse::<Degeneracy>().is_err());
}

#[test]
fn reduce_options_from_json_fills_defaults() {
    let opts: ReduceOptions = serde_json::from_str(r#"{"degeneracy": "reject"}"#).unwrap();
    assert_eq!(opts, ReduceOptions::strict());

    let opts: ReduceOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, ReduceOptions::default());
}

#[test]
fn reduce_options_round_trips_json() -> anyhow::Result<()> {
    let opts = ReduceOptions::new(Degeneracy::Reject, 1e-9);
    let json = serde_json::to_string(&opts)?;
    assert!(json.contains("pivot_tolerance"));
    assert!(json.contains("reject"));
    let back: ReduceOptions = serde_json::from_str(&json)?;
    assert_eq!(back, opts);
    Ok(())
}

#[test]
fn default_tolerance_value() {
    assert_eq!(DEFAULT_TOLERANCE, 0.001);
}

// ---------------------------------------------------------------------------
// Vector / Matrix serialization
// ---------------------------------------------------------------------------

#[test]
fn vector_serializes_as_array() -> anyhow::Result<()> {
    let v = Vector::from_vec(vec![1.0, 2.5]);
    assert_eq!(serde_json::to_string(&v)?, "[1.0,2.5]");
    let back: Vector = serde_json::from_str("[1, -3.5]")?;
    assert_eq!(back, Vector::from_vec(vec![1.0, -3.5]));
    Ok(())
}

#[test]
fn matrix_serializes_as_nested_arrays() -> anyhow::Result<()> {
    let a = Matrix::eye(2);
    assert_eq!(serde_json::to_string(&a)?, "[[1.0,0.0],[0.0,1.0]]");
    let back: Matrix = serde_json::from_str("[[1, 2], [3, 4]]")?;
    assert_eq!(back.shape(), (2, 2));
    assert_eq!(back[(1, 0)], 3.0);
    Ok(())
}

#[test]
fn ragged_json_is_caught_by_shape_check() {
    let ragged: Matrix = serde_json::from_str("[[1, 2], [3]]").unwrap();
    assert!(ragged.checked_shape().is_err());
}
