//! Dataset containers for linear-normal regression.
//!
//! Purpose
//! -------
//! Provide small, validated value objects for a regression dataset and its
//! generating truth. [`RegressionData`] pairs a design matrix with a response
//! vector and enforces the one invariant that must never be violated for any
//! downstream code path: row counts agree. [`TrueParams`] records the ground
//! truth a synthetic dataset was generated from and is used only for later
//! comparison, never for estimation.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x.nrows() == y.len()` always holds after construction.
//! - Finiteness and non-emptiness are **not** enforced here; they are checked
//!   at the entry of each estimator (see
//!   [`crate::regression::core::validation`]) so that a malformed dataset
//!   makes the estimation call itself fail, with partial results never mixed
//!   into a report.
//! - Both types are immutable after construction; components exchange them
//!   by reference with no shared mutable state.
use crate::regression::errors::{RegError, RegResult};
use ndarray::{Array1, Array2};

/// A design matrix and response vector with matching row counts.
///
/// The first column of `x` is the intercept (all ones) when the dataset comes
/// from [`crate::regression::generator::generate`]; nothing downstream relies
/// on that beyond parameter naming.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionData {
    /// Design matrix, `n_obs × n_params`.
    pub x: Array2<f64>,
    /// Response vector, length `n_obs`.
    pub y: Array1<f64>,
}

impl RegressionData {
    /// Construct a dataset, rejecting mismatched shapes.
    ///
    /// # Errors
    /// - [`RegError::ShapeMismatch`] when `x.nrows() != y.len()`.
    pub fn new(x: Array2<f64>, y: Array1<f64>) -> RegResult<Self> {
        if x.nrows() != y.len() {
            return Err(RegError::ShapeMismatch { x_rows: x.nrows(), y_len: y.len() });
        }
        Ok(RegressionData { x, y })
    }

    /// Number of observations (rows of the design matrix).
    pub fn n_obs(&self) -> usize {
        self.x.nrows()
    }

    /// Number of coefficients (columns of the design matrix).
    pub fn n_coeffs(&self) -> usize {
        self.x.ncols()
    }
}

/// Ground-truth parameters a synthetic dataset was generated from.
///
/// Used only to generate data and for later comparison; never estimated,
/// never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct TrueParams {
    /// True coefficient vector (intercept first).
    pub beta: Array1<f64>,
    /// True error standard deviation.
    pub sigma: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction behavior of `RegressionData::new` (shape agreement).
    // - Dimension accessors.
    //
    // They intentionally DO NOT cover:
    // - Finiteness/emptiness policies, which belong to `core::validation`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `RegressionData::new` accepts matching shapes and preserves
    // its inputs exactly.
    //
    // Given
    // -----
    // - A 3×2 design matrix and a length-3 response.
    //
    // Expect
    // ------
    // - Construction succeeds; `n_obs` and `n_coeffs` report (3, 2).
    fn regression_data_new_accepts_matching_shapes() {
        // Arrange
        let x = array![[1.0, 0.5], [1.0, 1.5], [1.0, 2.5]];
        let y = array![1.0, 2.0, 3.0];

        // Act
        let data = RegressionData::new(x.clone(), y.clone()).unwrap();

        // Assert
        assert_eq!(data.x, x);
        assert_eq!(data.y, y);
        assert_eq!(data.n_obs(), 3);
        assert_eq!(data.n_coeffs(), 2);
    }

    #[test]
    // Purpose
    // -------
    // Ensure that `RegressionData::new` rejects a response whose length does
    // not match the design matrix row count.
    //
    // Given
    // -----
    // - A 3×2 design matrix and a length-2 response.
    //
    // Expect
    // ------
    // - `Err(RegError::ShapeMismatch { x_rows: 3, y_len: 2 })`.
    fn regression_data_new_rejects_shape_mismatch() {
        // Arrange
        let x = array![[1.0, 0.5], [1.0, 1.5], [1.0, 2.5]];
        let y = array![1.0, 2.0];

        // Act
        let result = RegressionData::new(x, y);

        // Assert
        assert_eq!(result.unwrap_err(), RegError::ShapeMismatch { x_rows: 3, y_len: 2 });
    }
}
