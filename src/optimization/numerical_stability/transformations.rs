//! Numerical stability utilities.
//!
//! Provides guarded implementations of nonlinear transforms that are prone to
//! overflow/underflow in naïve form, using explicit cutoffs (`x > 20.0`) to
//! keep `f64` arithmetic in a well-conditioned regime.
//!
//! # Provided items
//! - [`EIGEN_EPS`]: the eigenvalue threshold below which the information
//!   matrix is treated as numerically singular.
//! - [`safe_softplus(x)`]: stable `ln(1 + exp(x))`, mapping ℝ → (0, ∞).
//!   Used to keep the scale parameter σ strictly positive in optimizer space.
//! - [`safe_softplus_inv(x)`]: inverse of softplus on (0, ∞).
//! - [`safe_logistic(x)`]: stable `1 / (1 + exp(-x))`, the derivative of
//!   softplus, used in chain-rule gradient mappings.

/// Eigenvalues of the information matrix at or below this threshold are
/// treated as numerically nonpositive; standard-error computation fails with
/// `SingularHessian` rather than dividing by them.
pub const EIGEN_EPS: f64 = 1e-10;

/// Numerically stable softplus: `softplus(x) = ln(1 + exp(x))`.
///
/// For large positive `x`, `softplus(x) ≈ x`; otherwise `ln1p(exp(x))` is
/// exact enough. The `x > 20.0` cutoff keeps the calculation well-conditioned
/// for `f64`.
pub fn safe_softplus(x: f64) -> f64 {
    if x > 20.0 { x } else { x.exp().ln_1p() }
}

/// Stable inverse of softplus on `(0, ∞)`: solves `softplus(t) = x` for `t`.
///
/// For large `x`, `ln(exp(x) - 1) ≈ x`; otherwise `ln(expm1(x))` avoids
/// catastrophic cancellation. The argument must be finite and `> 0`.
pub fn safe_softplus_inv(x: f64) -> f64 {
    if x > 20.0 { x } else { x.exp_m1().ln() }
}

/// Numerically stable logistic function `σ(x) = 1 / (1 + exp(-x))`.
///
/// Evaluates via `exp(x) / (1 + exp(x))` for negative `x` so the exponential
/// never overflows. This is the derivative of [`safe_softplus`].
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
