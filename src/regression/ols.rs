//! Closed-form OLS estimation with analytic standard errors.
//!
//! Purpose
//! -------
//! Fit the linear model by solving the normal equations `XᵗX·β = Xᵗy` with a
//! Cholesky factorization — never an explicit matrix inverse — and report the
//! residual scale and per-parameter standard errors. This is the analytic
//! benchmark the likelihood maximizer is checked against: for the
//! correctly-specified linear-normal model the two coincide.
//!
//! Conventions
//! -----------
//! - `residual_scale = sqrt(rss / (n − k))`, the unbiased-variance flavor
//!   (the ML scale estimate divides by `n` instead; the two agree up to
//!   `sqrt((n − k)/n)`).
//! - The standard-error vector has length `k + 1`: coefficient SEs
//!   `s·sqrt([(XᵗX)⁻¹]_jj)` followed by the large-sample scale SE
//!   `s / sqrt(2(n − k))`, so it aligns one-to-one with the ML SE vector.
//! - Diagonal entries of `(XᵗX)⁻¹` come from Cholesky solves against unit
//!   vectors.
use crate::regression::{
    core::{
        data::RegressionData,
        params::{FitMethod, ParamEstimate},
        validation::validate_dataset,
    },
    errors::{RegError, RegResult},
};
use nalgebra::{Cholesky, DMatrix, DVector};
use ndarray::Array1;

/// Closed-form fit: estimate plus analytic standard errors.
#[derive(Debug, Clone, PartialEq)]
pub struct OlsFit {
    /// Coefficients and residual scale, tagged [`FitMethod::Ols`].
    pub estimate: ParamEstimate,
    /// Standard errors, length `k + 1` (coefficients, then scale).
    pub standard_errors: Array1<f64>,
}

/// Fit the linear model by ordinary least squares.
///
/// # Behavior
/// - Validates the dataset (non-empty, finite, shapes agree).
/// - Requires strictly more observations than coefficients.
/// - Solves the normal equations via Cholesky; factorization failure means
///   `XᵗX` is not positive definite.
///
/// # Errors
/// - Propagates [`validate_dataset`] errors.
/// - [`RegError::DegenerateInput`] when `n_obs <= n_params`.
/// - [`RegError::SingularMatrix`] when the Cholesky factorization fails.
pub fn fit_ols(data: &RegressionData) -> RegResult<OlsFit> {
    validate_dataset(data)?;
    let n = data.n_obs();
    let k = data.n_coeffs();
    if n <= k {
        return Err(RegError::DegenerateInput { n_obs: n, n_params: k });
    }

    let xtx = data.x.t().dot(&data.x);
    let xty = data.x.t().dot(&data.y);
    let xtx_na = DMatrix::from_fn(k, k, |i, j| xtx[[i, j]]);
    let xty_na = DVector::from_fn(k, |i, _| xty[i]);

    let chol = Cholesky::new(xtx_na).ok_or(RegError::SingularMatrix)?;
    let beta_na = chol.solve(&xty_na);
    let beta = Array1::from_iter(beta_na.iter().copied());

    let residuals = &data.y - &data.x.dot(&beta);
    let rss = residuals.dot(&residuals);
    let dof = (n - k) as f64;
    let residual_scale = (rss / dof).sqrt();

    let mut standard_errors = Array1::<f64>::zeros(k + 1);
    for j in 0..k {
        let mut unit = DVector::<f64>::zeros(k);
        unit[j] = 1.0;
        let col = chol.solve(&unit);
        standard_errors[j] = residual_scale * col[j].sqrt();
    }
    standard_errors[k] = residual_scale / (2.0 * dof).sqrt();

    Ok(OlsFit {
        estimate: ParamEstimate { beta, sigma: residual_scale, method: FitMethod::Ols },
        standard_errors,
    })
}
