//! linreg_mle — maximum-likelihood estimation of linear-normal regression.
//!
//! Purpose
//! -------
//! Provide a small, self-contained estimation stack for the linear-normal
//! model `y = X·β + ε`, `ε ~ N(0, σ²)`:
//!
//! - generate a reproducible synthetic panel dataset with known ground truth
//!   ([`regression::generator`]),
//! - fit the model in closed form by OLS ([`regression::ols`]),
//! - fit the same model by direct numerical maximization of the
//!   log-likelihood through an argmin-backed optimizer layer
//!   ([`optimization::loglik_optimizer`], [`regression::models`]),
//! - convert the Hessian of the negated log-likelihood at the optimum into
//!   standard errors and assemble a comparison report ([`inference`]).
//!
//! Key behaviors
//! -------------
//! - The optimizer boundary is a single trait,
//!   [`optimization::loglik_optimizer::LogLikelihood`]; any model that
//!   implements it can be maximized with
//!   [`optimization::loglik_optimizer::maximize`].
//! - All heavy numerical work flows through `ndarray` containers; `nalgebra`
//!   is used at the linear-algebra seams (Cholesky, symmetric eigen).
//! - Errors are value-returned at the point of detection and propagate
//!   unmodified across layers via `From` conversions; no retries, no silent
//!   recovery.
//!
//! Conventions
//! -----------
//! - Log-likelihoods are maximized; the optimizer internally minimizes the
//!   cost `c(θ) = -ℓ(θ)` and all user-facing values are on the
//!   log-likelihood scale.
//! - The scale parameter σ lives in unconstrained optimizer space via a
//!   softplus map; the public likelihood and all reported estimates are in
//!   natural (β, σ) space.
//! - Hessians handed to [`inference::hessian`] are of the **negated**
//!   log-likelihood with respect to the free natural parameters.
//!
//! Downstream usage
//! ----------------
//! - Callers orchestrate runs programmatically: choose (N, T, seed), call
//!   [`regression::generator::generate`], fit with
//!   [`regression::ols::fit_ols`] and
//!   [`regression::models::linear_normal::LinearNormalModel::fit`], then
//!   report via [`inference::report::compare`].
//! - There is no CLI, network, or persisted state; the crate is a library.

pub mod inference;
pub mod optimization;
pub mod regression;
