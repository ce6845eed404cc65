//! loglik_optimizer — argmin-powered log-likelihood maximization.
//!
//! Purpose
//! -------
//! Provide a high-level optimization layer for **maximizing log-likelihoods**
//! `ℓ(θ)`. Callers implement a single trait, [`LogLikelihood`], and invoke
//! [`maximize`] to run L-BFGS with a configurable line search, tolerances,
//! and finite-difference fallbacks.
//!
//! Key behaviors
//! -------------
//! - Convert user log-likelihoods into argmin-compatible cost functions
//!   `c(θ) = -ℓ(θ)` via [`adapter::ArgMinAdapter`].
//! - Expose a single entrypoint [`maximize`] that validates the initial
//!   guess with [`LogLikelihood::check`], selects a solver via [`builders`],
//!   executes it via [`run::run_lbfgs`], and normalizes results into an
//!   [`OptimOutcome`].
//! - Provide finite-difference helpers in [`finite_diff`] for gradients and
//!   Hessians when analytic derivatives are missing, with post-hoc
//!   validation and error capture.
//!
//! Invariants & assumptions
//! ------------------------
//! - User code implements `ℓ(θ)` and optionally `∇ℓ(θ)`, never the cost
//!   directly; the adapter owns all sign flips.
//! - Parameters live in an unconstrained optimizer space as [`Theta`]; any
//!   mapping from constrained space (e.g. a positive scale parameter)
//!   happens in the model layer.
//! - Invalid inputs are recoverable [`OptError`] values, never panics.
//! - An [`OptimOutcome`] reports `converged = true` only for terminations
//!   that reached an optimum; hitting the iteration cap is a failure signal
//!   left to the caller.
//!
//! [`OptError`]: crate::optimization::errors::OptError

pub mod adapter;
pub mod api;
pub mod builders;
pub mod finite_diff;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::traits::{LineSearcher, LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
pub use self::types::{Cost, DEFAULT_LBFGS_MEM, FnEvalMap, Grad, Hessian, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use linreg_mle::optimization::loglik_optimizer::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::maximize;
    pub use super::traits::{LineSearcher, LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
    pub use super::types::{Cost, Grad, Theta};
}
