//! Parameter estimates with provenance.
//!
//! Two independent [`ParamEstimate`] instances exist per run — one from
//! closed-form OLS, one from likelihood maximization — and the comparison
//! report keeps them apart by their [`FitMethod`]. Estimates are immutable
//! snapshots; nothing downstream ever writes back into them.
use ndarray::Array1;

/// Which estimator produced a [`ParamEstimate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMethod {
    /// Closed-form ordinary least squares.
    Ols,
    /// Direct numerical maximization of the log-likelihood.
    MaximumLikelihood,
}

impl std::fmt::Display for FitMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitMethod::Ols => write!(f, "OLS"),
            FitMethod::MaximumLikelihood => write!(f, "ML"),
        }
    }
}

/// A coefficient vector plus scale estimate, tagged with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamEstimate {
    /// Estimated coefficients (intercept first).
    pub beta: Array1<f64>,
    /// Estimated error standard deviation.
    pub sigma: f64,
    /// Which estimator produced this instance.
    pub method: FitMethod,
}

impl ParamEstimate {
    /// Total number of estimated parameters (coefficients plus scale).
    pub fn n_params(&self) -> usize {
        self.beta.len() + 1
    }
}

/// Canonical parameter names for a model with `n_coeffs` coefficients:
/// `const, x1, …, x{n_coeffs-1}, sigma`.
///
/// Used by the comparison report and by anything that labels SE vectors.
pub fn param_names(n_coeffs: usize) -> Vec<String> {
    let mut names = Vec::with_capacity(n_coeffs + 1);
    for j in 0..n_coeffs {
        if j == 0 {
            names.push("const".to_string());
        } else {
            names.push(format!("x{j}"));
        }
    }
    names.push("sigma".to_string());
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Verify the canonical naming scheme: intercept, numbered regressors,
    // then the scale parameter.
    //
    // Given
    // -----
    // - A model with 3 coefficients.
    //
    // Expect
    // ------
    // - Names are ["const", "x1", "x2", "sigma"].
    fn param_names_follow_canonical_scheme() {
        let names = param_names(3);
        assert_eq!(names, vec!["const", "x1", "x2", "sigma"]);
    }

    #[test]
    // Purpose
    // -------
    // Confirm `n_params` counts the scale parameter.
    //
    // Given
    // -----
    // - An estimate with 2 coefficients.
    //
    // Expect
    // ------
    // - `n_params()` returns 3.
    fn n_params_counts_scale() {
        let est =
            ParamEstimate { beta: array![1.0, 2.0], sigma: 0.5, method: FitMethod::Ols };
        assert_eq!(est.n_params(), 3);
    }
}
