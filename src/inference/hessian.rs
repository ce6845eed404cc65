//! Standard errors from the observed information matrix.
//!
//! Purpose
//! -------
//! Convert the Hessian of the negated log-likelihood at the optimum (the
//! observed information) into per-parameter standard errors. The covariance
//! of the estimates is the inverse information matrix; rather than inverting
//! directly, the diagonal of the inverse is assembled from a symmetric
//! eigendecomposition, which also yields a principled singularity check: any
//! eigenvalue at or below [`EIGEN_EPS`] means the likelihood surface is flat
//! (or concave the wrong way) along some direction and standard errors are
//! undefined.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{types::Hessian, validation::validate_hessian},
    numerical_stability::transformations::EIGEN_EPS,
};
use nalgebra::DMatrix;
use ndarray::Array1;

/// Standard errors from a Hessian of the negated log-likelihood.
///
/// # Behavior
/// - Validates the matrix (square, all-finite).
/// - Eigendecomposes it symmetrically; rejects the matrix if the smallest
///   eigenvalue is ≤ [`EIGEN_EPS`].
/// - Assembles `Var_i = Σ_k Q[i,k]² / λ_k` (the diagonal of `H⁻¹`) and
///   returns the elementwise square roots.
///
/// # Errors
/// - [`OptError::HessianDimMismatch`] / [`OptError::InvalidHessian`] for a
///   malformed matrix.
/// - [`OptError::SingularHessian`] when the matrix is not numerically
///   positive definite, carrying the smallest eigenvalue.
pub fn standard_errors_from_hessian(hessian: &Hessian) -> OptResult<Array1<f64>> {
    let dim = hessian.nrows();
    validate_hessian(hessian, dim)?;

    let eigen = fill_dmatrix(hessian, dim).symmetric_eigen();
    let min_eigenvalue = eigen.eigenvalues.iter().copied().fold(f64::INFINITY, f64::min);
    if min_eigenvalue <= EIGEN_EPS {
        return Err(OptError::SingularHessian { min_eigenvalue });
    }

    let mut se = Array1::<f64>::zeros(dim);
    for i in 0..dim {
        let mut var = 0.0;
        for k in 0..dim {
            let q = eigen.eigenvectors[(i, k)];
            var += q * q / eigen.eigenvalues[k];
        }
        se[i] = var.sqrt();
    }
    Ok(se)
}

/// Copy an `ndarray` Hessian into a nalgebra matrix for factorization.
fn fill_dmatrix(hessian: &Hessian, dim: usize) -> DMatrix<f64> {
    DMatrix::from_fn(dim, dim, |i, j| hessian[[i, j]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Diagonal and correlated information matrices against closed-form
    //   inverses.
    // - The singularity guard and malformed-matrix rejection.
    //
    // They intentionally DO NOT cover:
    // - Statistical calibration of the resulting intervals (integration
    //   tests compare ML and OLS standard errors).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify standard errors for a diagonal information matrix equal the
    // inverse square roots of the diagonal.
    //
    // Given
    // -----
    // - H = diag(4, 0.25).
    //
    // Expect
    // ------
    // - SEs (0.5, 2.0) to 1e-12.
    fn diagonal_information_yields_inverse_sqrt() {
        // Arrange
        let h: Hessian = array![[4.0, 0.0], [0.0, 0.25]];

        // Act
        let se = standard_errors_from_hessian(&h).unwrap();

        // Assert
        assert!((se[0] - 0.5).abs() < 1e-12);
        assert!((se[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Check a correlated 2×2 information matrix against the analytic
    // inverse diagonal.
    //
    // Given
    // -----
    // - H = [[2, 1], [1, 2]], whose inverse has diagonal 2/3.
    //
    // Expect
    // ------
    // - Both SEs equal sqrt(2/3) to 1e-12.
    fn correlated_information_matches_analytic_inverse() {
        // Arrange
        let h: Hessian = array![[2.0, 1.0], [1.0, 2.0]];
        let expected = (2.0_f64 / 3.0).sqrt();

        // Act
        let se = standard_errors_from_hessian(&h).unwrap();

        // Assert
        assert!((se[0] - expected).abs() < 1e-12);
        assert!((se[1] - expected).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a flat direction is reported as SingularHessian with the
    // offending eigenvalue rather than producing infinite errors.
    //
    // Given
    // -----
    // - The rank-one matrix [[1, 1], [1, 1]] (eigenvalues 2 and 0).
    //
    // Expect
    // ------
    // - Err(SingularHessian) with min_eigenvalue ≈ 0.
    fn flat_direction_is_rejected() {
        // Arrange
        let h: Hessian = array![[1.0, 1.0], [1.0, 1.0]];

        // Act + Assert
        match standard_errors_from_hessian(&h).unwrap_err() {
            OptError::SingularHessian { min_eigenvalue } => {
                assert!(min_eigenvalue.abs() < 1e-12);
            }
            other => panic!("Expected SingularHessian, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Confirm malformed matrices fail validation before any factorization.
    //
    // Given
    // -----
    // - A matrix containing NaN.
    //
    // Expect
    // ------
    // - Err(OptError::InvalidHessian { .. }).
    fn non_finite_entries_are_rejected() {
        // Arrange
        let mut h: Hessian = Array2::eye(2);
        h[[0, 1]] = f64::NAN;

        // Act + Assert
        assert!(matches!(
            standard_errors_from_hessian(&h),
            Err(OptError::InvalidHessian { row: 0, col: 1, .. })
        ));
    }
}
