//! Linear-normal likelihood model and its optimization driver.
//!
//! Purpose
//! -------
//! Define the Gaussian log-likelihood for `y = Xβ + ε`, `ε ~ N(0, σ²)`, and
//! drive its direct numerical maximization through the generic optimizer.
//! The closed-form OLS path in [`crate::regression::ols`] answers the same
//! question analytically; this module exists to check that the numerical
//! route lands on the same answer.
//!
//! Parameter spaces
//! ----------------
//! Three coordinate systems are in play:
//!
//! - **Natural space**: `(β₀, …, β_{k−1}, σ)`, length `k + 1`, with σ > 0.
//!   Estimates, standard errors, and the report all live here.
//! - **Free natural space**: natural space with any fixed parameters removed.
//!   The inference Hessian is taken over these coordinates.
//! - **Optimizer space**: free natural space with the scale coordinate
//!   replaced by `s` where `σ = softplus(s)`, so L-BFGS runs unconstrained.
//!
//! Equality constraints (`β_j = c`, or a fixed σ) are handled by
//! **elimination**: fixed parameters are dropped from the optimizer vector
//! entirely and re-inserted when mapping back to natural space. The
//! maximization then runs over the reduced objective, and the reported
//! Hessian is the reduced-objective Hessian.
//!
//! Likelihood scale
//! ----------------
//! The log-likelihood is the **sum** over observations, not the mean:
//! `ℓ(β, σ) = −n·ln√(2π) − n·ln σ − ‖y − Xβ‖² / (2σ²)`.
use std::collections::BTreeMap;

use crate::{
    inference::hessian::standard_errors_from_hessian,
    optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::{
            Cost, Grad, Hessian, LogLikelihood, MLEOptions, OptimOutcome, Theta,
            finite_diff::compute_hessian, maximize,
        },
        numerical_stability::transformations::{safe_logistic, safe_softplus, safe_softplus_inv},
    },
    regression::{
        core::{
            data::RegressionData,
            params::{FitMethod, ParamEstimate},
            validation::validate_dataset,
        },
        errors::{RegError, RegResult},
    },
};
use ndarray::Array1;
use statrs::consts::LN_SQRT_2PI;

/// Floor for the data-driven initial scale guess. Keeps `softplus⁻¹` away
/// from its pole when the response is (near-)constant.
const MIN_INITIAL_SCALE: f64 = 1e-3;

/// Gaussian log-likelihood of the linear model at `(β, σ)`.
///
/// Sum scale: `ℓ = −n·ln√(2π) − n·ln σ − rss / (2σ²)`. No clamping or
/// reparameterization happens here; a non-positive `σ` yields a non-finite
/// value that the optimizer boundary rejects.
pub fn log_likelihood(beta: &Array1<f64>, sigma: f64, data: &RegressionData) -> f64 {
    let n = data.n_obs() as f64;
    let residuals = &data.y - &data.x.dot(beta);
    let rss = residuals.dot(&residuals);
    -n * LN_SQRT_2PI - n * sigma.ln() - rss / (2.0 * sigma * sigma)
}

/// Equality constraints on natural parameters, by index.
///
/// Indices `0..k` refer to coefficients; index `k` refers to the scale σ.
/// Constrained parameters are eliminated from the optimizer vector, so the
/// maximization runs over the remaining free coordinates only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedCoefficients {
    fixed: BTreeMap<usize, f64>,
}

impl FixedCoefficients {
    /// No constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the natural parameter at `index` to `value` (builder style).
    /// Fixing the same index twice keeps the latest value.
    pub fn fix(mut self, index: usize, value: f64) -> Self {
        self.fixed.insert(index, value);
        self
    }

    /// Value the parameter at `index` is fixed to, if any.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.fixed.get(&index).copied()
    }

    /// Number of constrained parameters.
    pub fn len(&self) -> usize {
        self.fixed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty()
    }

    /// Validate the constraint set against a model with `n_coeffs`
    /// coefficients (natural dimension `n_coeffs + 1`).
    ///
    /// # Errors
    /// - [`RegError::FixedIndexOutOfRange`] for indices past the scale slot.
    /// - [`RegError::InvalidFixedValue`] for non-finite values, or a
    ///   non-positive value fixed on the scale parameter.
    pub fn validate(&self, n_coeffs: usize) -> RegResult<()> {
        let dim = n_coeffs + 1;
        for (&index, &value) in &self.fixed {
            if index >= dim {
                return Err(RegError::FixedIndexOutOfRange { index, dim });
            }
            if !value.is_finite() {
                return Err(RegError::InvalidFixedValue {
                    index,
                    value,
                    reason: "Fixed values must be finite.",
                });
            }
            if index == n_coeffs && value <= 0.0 {
                return Err(RegError::InvalidFixedValue {
                    index,
                    value,
                    reason: "The scale parameter must be strictly positive.",
                });
            }
        }
        if self.fixed.len() >= dim {
            return Err(RegError::InvalidFixedValue {
                index: n_coeffs,
                value: f64::NAN,
                reason: "At least one parameter must remain free.",
            });
        }
        Ok(())
    }
}

/// The linear-normal likelihood model, optionally with equality constraints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearNormalModel {
    fixed: FixedCoefficients,
}

/// Result of a likelihood maximization run.
#[derive(Debug, Clone, PartialEq)]
pub struct LikelihoodFit {
    /// Full-length natural-space estimate (fixed slots carry their fixed
    /// values), tagged [`FitMethod::MaximumLikelihood`].
    pub estimate: ParamEstimate,
    /// Maximized log-likelihood `ℓ(β̂, σ̂)`.
    pub loglik: f64,
    /// Hessian of the **negated** log-likelihood over the free natural
    /// parameters at the optimum (the observed information matrix of the
    /// reduced objective).
    pub hessian: Hessian,
    /// Natural indices of the free parameters, ascending; positions match
    /// the Hessian's rows/columns.
    pub free_indices: Vec<usize>,
    /// Raw optimizer diagnostics.
    pub outcome: OptimOutcome,
}

impl LikelihoodFit {
    /// Standard errors in natural space, length `k + 1`.
    ///
    /// Free slots carry `sqrt` of the corresponding diagonal entry of the
    /// inverse observed information; fixed slots carry `0.0` (a fixed
    /// parameter has no sampling variability).
    ///
    /// # Errors
    /// - [`OptError::SingularHessian`] when the information matrix is not
    ///   positive definite.
    pub fn standard_errors(&self) -> OptResult<Array1<f64>> {
        let free_se = standard_errors_from_hessian(&self.hessian)?;
        let mut full = Array1::<f64>::zeros(self.estimate.n_params());
        for (pos, &index) in self.free_indices.iter().enumerate() {
            full[index] = free_se[pos];
        }
        Ok(full)
    }
}

impl LinearNormalModel {
    /// Unconstrained model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Model with equality constraints; validated at fit time against the
    /// dataset's dimension.
    pub fn with_fixed(fixed: FixedCoefficients) -> Self {
        Self { fixed }
    }

    /// Natural indices of the free parameters for a model with `n_coeffs`
    /// coefficients, ascending.
    pub fn free_indices(&self, n_coeffs: usize) -> Vec<usize> {
        (0..=n_coeffs).filter(|index| self.fixed.get(*index).is_none()).collect()
    }

    /// Map an optimizer-space vector back to natural space.
    ///
    /// Fixed slots take their fixed values; the scale coordinate, when free,
    /// is mapped through `σ = softplus(s)`.
    ///
    /// # Errors
    /// - [`OptError::ThetaLengthMismatch`] when `theta` does not match the
    ///   free dimension.
    pub fn embed(&self, theta: &Theta, n_coeffs: usize) -> OptResult<(Array1<f64>, f64)> {
        let free = self.free_indices(n_coeffs);
        if theta.len() != free.len() {
            return Err(OptError::ThetaLengthMismatch {
                expected: free.len(),
                actual: theta.len(),
            });
        }
        let mut beta = Array1::<f64>::zeros(n_coeffs);
        let mut sigma = self.fixed.get(n_coeffs).unwrap_or(f64::NAN);
        for (pos, &index) in free.iter().enumerate() {
            if index < n_coeffs {
                beta[index] = theta[pos];
            } else {
                sigma = safe_softplus(theta[pos]);
            }
        }
        for j in 0..n_coeffs {
            if let Some(value) = self.fixed.get(j) {
                beta[j] = value;
            }
        }
        Ok((beta, sigma))
    }

    /// Maximize the likelihood over the free parameters.
    ///
    /// # Behavior
    /// - Starts coefficients at zero and the scale at the sample standard
    ///   deviation of the response (floored at `1e-3`), mapped into optimizer
    ///   space.
    /// - Runs L-BFGS via [`maximize`]; pre-flight validation (dataset
    ///   finiteness, constraint sanity, degeneracy) happens in
    ///   [`LogLikelihood::check`].
    /// - Treats any non-converged termination (including iteration
    ///   exhaustion) as a failure.
    /// - Computes the observed information over the free **natural**
    ///   parameters by finite-differencing the analytic gradient of the
    ///   negated log-likelihood at the optimum.
    ///
    /// # Errors
    /// - [`OptError::Regression`] for dataset or constraint defects.
    /// - [`OptError::OptimizationFailed`] when the solver stopped without
    ///   reaching an optimum.
    /// - Any optimizer runtime error, propagated.
    pub fn fit(&self, data: &RegressionData, opts: &MLEOptions) -> OptResult<LikelihoodFit> {
        let free = self.free_indices(data.n_coeffs());
        let mut theta0 = Array1::<f64>::zeros(free.len());
        if let Some(pos) = free.iter().position(|&index| index == data.n_coeffs()) {
            theta0[pos] = safe_softplus_inv(response_sd(data).max(MIN_INITIAL_SCALE));
        }
        self.fit_from(data, theta0, opts)
    }

    /// Maximize the likelihood from an explicit optimizer-space start.
    ///
    /// Same behavior as [`LinearNormalModel::fit`] with a caller-supplied
    /// `theta0` (free coordinates; the scale coordinate, when free, is in
    /// softplus space).
    ///
    /// # Errors
    /// As for [`LinearNormalModel::fit`], plus
    /// [`OptError::ThetaLengthMismatch`] when `theta0` does not match the
    /// free dimension.
    pub fn fit_from(
        &self, data: &RegressionData, theta0: Theta, opts: &MLEOptions,
    ) -> OptResult<LikelihoodFit> {
        let n_coeffs = data.n_coeffs();
        let free = self.free_indices(n_coeffs);

        let outcome = maximize(self, theta0, data, opts)?;
        if !outcome.converged {
            return Err(OptError::OptimizationFailed { status: outcome.status });
        }

        let (beta, sigma) = self.embed(&outcome.theta_hat, n_coeffs)?;

        let mut natural = Array1::<f64>::zeros(free.len());
        for (pos, &index) in free.iter().enumerate() {
            natural[pos] = if index < n_coeffs { beta[index] } else { sigma };
        }
        let fixed = self.fixed.clone();
        let free_for_grad = free.clone();
        let grad_fn = move |point: &Theta| {
            neg_loglik_grad_natural(point, data, &fixed, &free_for_grad)
        };
        let hessian = compute_hessian(&grad_fn, &natural)?;

        Ok(LikelihoodFit {
            estimate: ParamEstimate { beta, sigma, method: FitMethod::MaximumLikelihood },
            loglik: outcome.value,
            hessian,
            free_indices: free,
            outcome,
        })
    }
}

impl LogLikelihood for LinearNormalModel {
    type Data = RegressionData;

    /// Evaluate `ℓ(θ)` at an optimizer-space point.
    fn value(&self, theta: &Theta, data: &RegressionData) -> OptResult<Cost> {
        let (beta, sigma) = self.embed(theta, data.n_coeffs())?;
        Ok(log_likelihood(&beta, sigma, data))
    }

    /// Pre-flight validation: finite θ of the right length, a usable
    /// dataset, sane constraints, and more observations than coefficients.
    fn check(&self, theta: &Theta, data: &RegressionData) -> OptResult<()> {
        let n_coeffs = data.n_coeffs();
        let free = self.free_indices(n_coeffs);
        if theta.len() != free.len() {
            return Err(OptError::ThetaLengthMismatch {
                expected: free.len(),
                actual: theta.len(),
            });
        }
        for (index, &value) in theta.iter().enumerate() {
            if !value.is_finite() {
                return Err(OptError::InvalidThetaInput { index, value });
            }
        }
        validate_dataset(data)?;
        self.fixed.validate(n_coeffs)?;
        if data.n_obs() <= n_coeffs {
            return Err(RegError::DegenerateInput {
                n_obs: data.n_obs(),
                n_params: n_coeffs,
            }
            .into());
        }
        Ok(())
    }

    /// Analytic gradient `∇ℓ(θ)` in optimizer space.
    ///
    /// Coefficient coordinates: `∂ℓ/∂β_j = (Xᵗr)_j / σ²`. The scale
    /// coordinate chains through the softplus map:
    /// `∂ℓ/∂s = (−n/σ + rss/σ³) · logistic(s)`.
    fn grad(&self, theta: &Theta, data: &RegressionData) -> OptResult<Grad> {
        let n_coeffs = data.n_coeffs();
        let (beta, sigma) = self.embed(theta, n_coeffs)?;
        let n = data.n_obs() as f64;
        let residuals = &data.y - &data.x.dot(&beta);
        let rss = residuals.dot(&residuals);
        let xtr = data.x.t().dot(&residuals);
        let sigma_sq = sigma * sigma;

        let free = self.free_indices(n_coeffs);
        let mut grad = Array1::<f64>::zeros(free.len());
        for (pos, &index) in free.iter().enumerate() {
            grad[pos] = if index < n_coeffs {
                xtr[index] / sigma_sq
            } else {
                (-n / sigma + rss / (sigma_sq * sigma)) * safe_logistic(theta[pos])
            };
        }
        Ok(grad)
    }
}

// ---- Helper methods ----

/// Sample standard deviation of the response; 0.0 for fewer than two
/// observations (the caller floors the result anyway).
fn response_sd(data: &RegressionData) -> f64 {
    let n = data.n_obs();
    if n < 2 {
        return 0.0;
    }
    let mean = data.y.sum() / n as f64;
    let ss = data.y.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>();
    (ss / (n as f64 - 1.0)).sqrt()
}

/// Gradient of the **negated** log-likelihood over the free natural
/// parameters at `point`. Used to finite-difference the observed
/// information; no softplus chain applies in natural space.
fn neg_loglik_grad_natural(
    point: &Theta, data: &RegressionData, fixed: &FixedCoefficients, free_indices: &[usize],
) -> Grad {
    let n_coeffs = data.n_coeffs();
    let n = data.n_obs() as f64;

    let mut beta = Array1::<f64>::zeros(n_coeffs);
    let mut sigma = fixed.get(n_coeffs).unwrap_or(f64::NAN);
    for (pos, &index) in free_indices.iter().enumerate() {
        if index < n_coeffs {
            beta[index] = point[pos];
        } else {
            sigma = point[pos];
        }
    }
    for j in 0..n_coeffs {
        if let Some(value) = fixed.get(j) {
            beta[j] = value;
        }
    }

    let residuals = &data.y - &data.x.dot(&beta);
    let rss = residuals.dot(&residuals);
    let xtr = data.x.t().dot(&residuals);
    let sigma_sq = sigma * sigma;

    let mut grad = Array1::<f64>::zeros(free_indices.len());
    for (pos, &index) in free_indices.iter().enumerate() {
        grad[pos] = if index < n_coeffs {
            -xtr[index] / sigma_sq
        } else {
            n / sigma - rss / (sigma_sq * sigma)
        };
    }
    grad
}
