use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Epsilon used by `Matrix::tolerate_default`.
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// What the elimination engine does when it meets a zero (or tiny) pivot.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Degeneracy {
    /// Divide anyway and let `inf`/`NaN` flow into the result.
    #[default]
    Propagate,
    /// Stop with `LinalgError::Singular`.
    Reject,
}

impl FromStr for Degeneracy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "propagate" => Ok(Degeneracy::Propagate),
            "reject" => Ok(Degeneracy::Reject),
            _ => Err(format!(
                "Unknown degeneracy policy: {}. Expected `propagate` or `reject`",
                s
            )),
        }
    }
}

/// Options for `reduce_with` and `inverse_with`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ReduceOptions {
    #[serde(default)]
    pub degeneracy: Degeneracy,

    /// Pivots with `|p| <= pivot_tolerance` count as degenerate.
    #[serde(default)]
    pub pivot_tolerance: f64,
}

impl ReduceOptions {
    pub fn new(degeneracy: Degeneracy, pivot_tolerance: f64) -> Self {
        Self {
            degeneracy,
            pivot_tolerance,
        }
    }

    /// Reject exact-zero pivots.
    pub fn strict() -> Self {
        Self::new(Degeneracy::Reject, 0.0)
    }

    pub(crate) fn is_degenerate(&self, pivot: f64) -> bool {
        !pivot.is_finite() || pivot.abs() <= self.pivot_tolerance
    }
}

impl Default for ReduceOptions {
    fn default() -> Self {
        Self {
            degeneracy: Degeneracy::Propagate,
            pivot_tolerance: 0.0,
        }
    }
}
