//! Shared input validation for regression estimators.
//!
//! Both the closed-form OLS path and the likelihood model's pre-flight
//! `check` hook run [`validate_dataset`] before touching the numbers, so a
//! malformed dataset fails the estimation call itself rather than producing
//! NaN estimates downstream. Checks stop at the first offending element.
use crate::regression::{
    core::data::RegressionData,
    errors::{RegError, RegResult},
};

/// Validate a dataset for estimation: non-empty and all-finite.
///
/// Shape agreement between `x` and `y` is already guaranteed by
/// [`RegressionData::new`]; this adds the policies estimators rely on.
///
/// # Errors
/// - [`RegError::EmptyDesign`] when there are no observations.
/// - [`RegError::NonFiniteDesign`] for the first NaN/±∞ design entry.
/// - [`RegError::NonFiniteResponse`] for the first NaN/±∞ response entry.
pub fn validate_dataset(data: &RegressionData) -> RegResult<()> {
    if data.n_obs() == 0 {
        return Err(RegError::EmptyDesign);
    }
    for ((row, col), &value) in data.x.indexed_iter() {
        if !value.is_finite() {
            return Err(RegError::NonFiniteDesign { row, col, value });
        }
    }
    for (index, &value) in data.y.iter().enumerate() {
        if !value.is_finite() {
            return Err(RegError::NonFiniteResponse { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The happy path for a small finite dataset.
    // - Rejection of empty, non-finite-design, and non-finite-response inputs,
    //   including first-offender index reporting.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a small, finite dataset passes validation.
    //
    // Given
    // -----
    // - A 2×2 finite design matrix and a finite response.
    //
    // Expect
    // ------
    // - `validate_dataset` returns `Ok(())`.
    fn validate_dataset_accepts_finite_data() {
        // Arrange
        let data = RegressionData::new(array![[1.0, 0.5], [1.0, 1.5]], array![1.0, 2.0]).unwrap();

        // Act + Assert
        assert!(validate_dataset(&data).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Ensure an empty dataset is rejected before any numeric work.
    //
    // Given
    // -----
    // - A 0×2 design matrix and a length-0 response.
    //
    // Expect
    // ------
    // - `Err(RegError::EmptyDesign)`.
    fn validate_dataset_rejects_empty_design() {
        // Arrange
        let data =
            RegressionData::new(Array2::zeros((0, 2)), Array1::zeros(0)).unwrap();

        // Act + Assert
        assert_eq!(validate_dataset(&data).unwrap_err(), RegError::EmptyDesign);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a NaN in the design matrix is reported with its position.
    //
    // Given
    // -----
    // - A 2×2 design with NaN at (1, 0).
    //
    // Expect
    // ------
    // - `Err(RegError::NonFiniteDesign { row: 1, col: 0, .. })`.
    fn validate_dataset_reports_first_non_finite_design_entry() {
        // Arrange
        let data =
            RegressionData::new(array![[1.0, 0.5], [f64::NAN, 1.5]], array![1.0, 2.0]).unwrap();

        // Act
        let err = validate_dataset(&data).unwrap_err();

        // Assert
        match err {
            RegError::NonFiniteDesign { row: 1, col: 0, value } => assert!(value.is_nan()),
            other => panic!("Expected NonFiniteDesign at (1, 0), got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure an infinite response entry is reported with its index.
    //
    // Given
    // -----
    // - A finite design and a response with +∞ at index 1.
    //
    // Expect
    // ------
    // - `Err(RegError::NonFiniteResponse { index: 1, .. })`.
    fn validate_dataset_reports_first_non_finite_response_entry() {
        // Arrange
        let data = RegressionData::new(
            array![[1.0, 0.5], [1.0, 1.5]],
            array![1.0, f64::INFINITY],
        )
        .unwrap();

        // Act
        let err = validate_dataset(&data).unwrap_err();

        // Assert
        assert_eq!(err, RegError::NonFiniteResponse { index: 1, value: f64::INFINITY });
    }
}
