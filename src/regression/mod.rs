//! Linear-normal regression: data containers, synthetic generation, closed-form
//! OLS, and the likelihood model handed to the optimizer.
//!
//! Layout
//! ------
//! - [`core`]: validated dataset containers ([`core::data::RegressionData`]),
//!   ground truth ([`core::data::TrueParams`]), provenance-carrying estimates
//!   ([`core::params::ParamEstimate`]), and shared input validation.
//! - [`generator`]: seeded synthetic panel generation with a fixed covariate
//!   law table and fixed true coefficients.
//! - [`ols`]: closed-form estimation via Cholesky of the normal equations,
//!   with analytic standard errors.
//! - [`models`]: the linear-normal log-likelihood and the optimization driver
//!   ([`models::linear_normal::LinearNormalModel`]).
//! - [`errors`]: the domain error taxonomy ([`errors::RegError`]).
//!
//! Conventions
//! -----------
//! - The design matrix carries the intercept as its first column (all ones).
//! - Parameter index `k` (one past the last coefficient) refers to the scale
//!   parameter σ throughout.
//! - OLS and ML both report a standard-error vector of length `k + 1`
//!   (coefficients, then scale).

pub mod core;
pub mod errors;
pub mod generator;
pub mod models;
pub mod ols;
