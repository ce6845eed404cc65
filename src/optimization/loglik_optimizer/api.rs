//! High-level entry point for maximizing a user-provided `LogLikelihood`.
//!
//! Selects an L-BFGS solver with either Hager–Zhang or More–Thuente line
//! search, wraps the model in an [`ArgMinAdapter`] (which *minimizes*
//! `-ℓ(θ)`), and delegates the run to [`run_lbfgs`].
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        adapter::ArgMinAdapter,
        builders::{build_optimizer_hager_zhang, build_optimizer_more_thuente},
        run::run_lbfgs,
        traits::{LineSearcher, LogLikelihood, MLEOptions, OptimOutcome},
        types::Theta,
    },
};

/// Maximize a log-likelihood `ℓ(θ)` using L-BFGS with the chosen line search.
///
/// # Behavior
/// - Validates the initial guess via `f.check(theta0, data)`.
/// - Wraps `(f, data)` in an [`ArgMinAdapter`] that exposes the minimization
///   problem `c(θ) = -ℓ(θ)`.
/// - Builds an L-BFGS solver based on `opts.line_searcher` and delegates to
///   [`run_lbfgs`].
///
/// # Errors
/// - Propagates any error from `f.check`.
/// - Propagates builder errors from `build_optimizer_*`.
/// - Propagates runtime errors from [`run_lbfgs`] (e.g. line-search
///   failures).
///
/// # Returns
/// An [`OptimOutcome`] with `theta_hat`, the best value `ℓ(θ̂)`, termination
/// status, iteration and function-evaluation counts, and the gradient norm
/// when available.
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data);
    match opts.line_searcher {
        LineSearcher::MoreThuente => {
            let solver = build_optimizer_more_thuente(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
        LineSearcher::HagerZhang => {
            let solver = build_optimizer_hager_zhang(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{
        errors::{OptError, OptResult},
        loglik_optimizer::{
            traits::Tolerances,
            types::{Cost, Grad},
        },
    };
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - End-to-end maximization of a concave toy likelihood with both line
    //   searches.
    // - Propagation of check failures before any solver work.
    //
    // They intentionally DO NOT cover:
    // - Regression-model likelihoods (integration tests).
    // -------------------------------------------------------------------------

    /// Concave quadratic ℓ(θ) = -(θ - c)ᵀ(θ - c) with maximum at c.
    struct ShiftedQuadratic {
        center: Theta,
    }

    impl LogLikelihood for ShiftedQuadratic {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            let diff = theta - &self.center;
            Ok(-diff.dot(&diff))
        }

        fn check(&self, theta: &Theta, _data: &()) -> OptResult<()> {
            for (index, &value) in theta.iter().enumerate() {
                if !value.is_finite() {
                    return Err(OptError::InvalidThetaInput { index, value });
                }
            }
            Ok(())
        }

        fn grad(&self, theta: &Theta, _data: &()) -> OptResult<Grad> {
            Ok((theta - &self.center).mapv(|d| -2.0 * d))
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify maximize finds the maximum of a concave quadratic with both
    // line-search choices and reports convergence.
    //
    // Given
    // -----
    // - ℓ(θ) = -(θ - (1, -2))ᵀ(θ - (1, -2)) starting from the origin.
    //
    // Expect
    // ------
    // - theta_hat ≈ (1, -2) to 1e-4, value ≈ 0, converged = true.
    fn maximize_finds_quadratic_maximum_with_both_line_searches() {
        for ls in [LineSearcher::MoreThuente, LineSearcher::HagerZhang] {
            // Arrange
            let model = ShiftedQuadratic { center: array![1.0, -2.0] };
            let tols = Tolerances::new(Some(1e-8), None, Some(200)).unwrap();
            let opts = MLEOptions::new(tols, ls, None).unwrap();

            // Act
            let out = maximize(&model, array![0.0, 0.0], &(), &opts).unwrap();

            // Assert
            assert!(out.converged, "solver should converge for {ls:?}: {}", out.status);
            assert!((out.theta_hat[0] - 1.0).abs() < 1e-4);
            assert!((out.theta_hat[1] + 2.0).abs() < 1e-4);
            assert!(out.value.abs() < 1e-6);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a failing pre-flight check aborts before any solver iteration.
    //
    // Given
    // -----
    // - An initial guess containing NaN.
    //
    // Expect
    // ------
    // - Err(OptError::InvalidThetaInput { index: 1, .. }).
    fn maximize_propagates_check_failures() {
        // Arrange
        let model = ShiftedQuadratic { center: array![0.0, 0.0] };
        let opts = MLEOptions::default();

        // Act
        let err = maximize(&model, array![0.0, f64::NAN], &(), &opts).unwrap_err();

        // Assert
        assert!(matches!(err, OptError::InvalidThetaInput { index: 1, .. }));
    }
}
