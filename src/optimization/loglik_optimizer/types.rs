//! Shared numeric aliases and solver wiring for the likelihood optimizer.
//!
//! Centralizes the parameter/gradient/Hessian container types and the
//! pre-wired L-BFGS solver aliases so the rest of the optimizer stays
//! agnostic to `ndarray` and argmin generics.
//!
//! Conventions
//! -----------
//! - `Theta` and `Grad` are column vectors over the free parameters.
//! - `Cost` is a scalar in log-likelihood space; sign flips between cost
//!   and log-likelihood happen in the adapter, never here.
//! - `Hessian` is dense and square, `theta.len() × theta.len()`.
use argmin::solver::{
    linesearch::{HagerZhangLineSearch, MoreThuenteLineSearch},
    quasinewton::LBFGS,
};
use ndarray::{Array1, Array2};
use std::collections::HashMap;

/// Parameter vector `θ` in unconstrained optimizer space.
pub type Theta = Array1<f64>;

/// Gradient vector matching the shape of [`Theta`].
pub type Grad = Array1<f64>;

/// Dense Hessian matrix, `n × n` for `n = theta.len()`.
pub type Hessian = Array2<f64>;

/// Scalar objective value; internally the cost `c(θ) = -ℓ(θ)`.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver,
/// e.g. `"cost_count"` or `"gradient_count"`.
pub type FnEvalMap = HashMap<String, u64>;

/// Default history size (`m`) for L-BFGS runs.
pub const DEFAULT_LBFGS_MEM: usize = 7;

/// Hager–Zhang line search specialized to this crate's numeric types.
pub type HagerZhangLS = HagerZhangLineSearch<Theta, Grad, Cost>;

/// More–Thuente line search specialized to this crate's numeric types.
pub type MoreThuenteLS = MoreThuenteLineSearch<Theta, Grad, Cost>;

/// L-BFGS solver wired to the Hager–Zhang line search.
pub type LbfgsHagerZhang = LBFGS<HagerZhangLS, Theta, Grad, Cost>;

/// L-BFGS solver wired to the More–Thuente line search.
pub type LbfgsMoreThuente = LBFGS<MoreThuenteLS, Theta, Grad, Cost>;
