//! Adapter that exposes a user `LogLikelihood` as an `argmin` problem.
//!
//! Converts a *maximization* of a log-likelihood `ℓ(θ)` into a *minimization*
//! problem with cost `c(θ) = -ℓ(θ)`. Analytic gradients provided by the user
//! are negated accordingly; when no gradient is implemented, the **cost**
//! closure is finite-differenced, so no sign flip is needed on that branch.
use std::cell::RefCell;

use crate::optimization::{
    errors::OptError,
    loglik_optimizer::{
        finite_diff::run_fd_diff,
        traits::LogLikelihood,
        types::{Cost, Grad, Theta},
        validation::validate_grad,
    },
};
use argmin::core::{CostFunction, Error, Gradient};
use finitediff::FiniteDiff;

/// Bridges a user `LogLikelihood` to `argmin`'s `CostFunction` and `Gradient`.
///
/// - `CostFunction::cost` returns `-ℓ(θ)`.
/// - `Gradient::gradient` returns `-∇ℓ(θ)` when an analytic gradient exists,
///   or a finite-difference gradient of the cost otherwise.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: LogLikelihood> {
    pub f: &'a F,
    pub data: &'a F::Data,
}

impl<'a, F: LogLikelihood> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the cost `c(θ) = -ℓ(θ)`.
    ///
    /// # Errors
    /// - Propagates any `OptError` from the user's `value`.
    /// - [`OptError::NonFiniteCost`] when the returned value is not finite.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(theta, self.data)?;
        if !output.is_finite() {
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(-output)
    }
}

impl<'a, F: LogLikelihood> Gradient for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Gradient = Grad;

    /// Evaluate the gradient of the cost at `θ`.
    ///
    /// Behavior:
    /// - If the user implements `grad(θ, data)`, validate it and return the
    ///   negation (the cost is `-ℓ`).
    /// - Otherwise finite-difference the cost: central differences first,
    ///   falling back to forward differences when the cost closure errored
    ///   during evaluation or the central gradient fails validation.
    ///
    /// The FD closure must return `f64`, so evaluation errors are captured
    /// into `closure_err` with `NaN` returned from the closure; the captured
    /// error is re-raised afterwards.
    ///
    /// # Errors
    /// - Propagates user errors from `grad` other than
    ///   `GradientNotImplemented`.
    /// - Propagates cost-evaluation errors raised during differencing.
    /// - Validation errors for wrong-dimension or non-finite gradients.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        let dim = theta.len();
        match self.f.grad(theta, self.data) {
            Ok(g) => {
                validate_grad(&g, dim)?;
                Ok(-g)
            }
            Err(OptError::GradientNotImplemented) => {
                let closure_err: RefCell<Option<Error>> = RefCell::new(None);
                let cost_func = |theta: &Theta| -> f64 {
                    match self.cost(theta) {
                        Ok(val) => val,
                        Err(e) => {
                            let mut slot = closure_err.borrow_mut();
                            if slot.is_none() {
                                *slot = Some(e);
                            }
                            f64::NAN
                        }
                    }
                };
                let fd_grad = theta.central_diff(&cost_func);
                if closure_err.borrow().is_some() {
                    return Ok(run_fd_diff(theta, &cost_func, &closure_err)?);
                }
                match validate_grad(&fd_grad, dim) {
                    Ok(()) => Ok(fd_grad),
                    Err(_) => Ok(run_fd_diff(theta, &cost_func, &closure_err)?),
                }
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl<'a, F: LogLikelihood> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a user `LogLikelihood` and its data.
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptResult;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Sign conventions: cost = -value, gradient = -grad.
    // - The finite-difference fallback when grad is not implemented.
    // - Non-finite value rejection in the cost path.
    //
    // They intentionally DO NOT cover:
    // - Full L-BFGS runs over the adapter (integration tests).
    // -------------------------------------------------------------------------

    /// Concave toy likelihood ℓ(θ) = -θᵀθ with an analytic gradient.
    struct WithGrad;

    impl LogLikelihood for WithGrad {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            Ok(-theta.dot(theta))
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }

        fn grad(&self, theta: &Theta, _data: &()) -> OptResult<Grad> {
            Ok(theta.mapv(|x| -2.0 * x))
        }
    }

    /// Same likelihood without an analytic gradient, forcing the FD path.
    struct WithoutGrad;

    impl LogLikelihood for WithoutGrad {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            Ok(-theta.dot(theta))
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }
    }

    /// Likelihood whose value is NaN everywhere.
    struct NanValue;

    impl LogLikelihood for NanValue {
        type Data = ();

        fn value(&self, _theta: &Theta, _data: &()) -> OptResult<Cost> {
            Ok(f64::NAN)
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the cost is the negated log-likelihood and the analytic
    // gradient is negated into cost space.
    //
    // Given
    // -----
    // - ℓ(θ) = -θᵀθ with ∇ℓ(θ) = -2θ, evaluated at θ = (1, 2).
    //
    // Expect
    // ------
    // - cost = 5 and gradient = (2, 4) (the gradient of θᵀθ).
    fn adapter_flips_signs_for_cost_and_gradient() {
        // Arrange
        let model = WithGrad;
        let adapter = ArgMinAdapter::new(&model, &());
        let theta = array![1.0, 2.0];

        // Act
        let cost = adapter.cost(&theta).unwrap();
        let grad = adapter.gradient(&theta).unwrap();

        // Assert
        assert!((cost - 5.0).abs() < 1e-12);
        assert!((grad[0] - 2.0).abs() < 1e-12);
        assert!((grad[1] - 4.0).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ensure the finite-difference fallback produces a gradient close to the
    // analytic cost gradient when grad is not implemented.
    //
    // Given
    // -----
    // - ℓ(θ) = -θᵀθ without a grad implementation, at θ = (1, 2).
    //
    // Expect
    // ------
    // - An FD gradient within 1e-4 of (2, 4).
    fn adapter_falls_back_to_finite_differences() {
        // Arrange
        let model = WithoutGrad;
        let adapter = ArgMinAdapter::new(&model, &());
        let theta = array![1.0, 2.0];

        // Act
        let grad = adapter.gradient(&theta).unwrap();

        // Assert
        assert!((grad[0] - 2.0).abs() < 1e-4);
        assert!((grad[1] - 4.0).abs() < 1e-4);
    }

    #[test]
    // Purpose
    // -------
    // Confirm a NaN log-likelihood value is rejected at the cost boundary.
    //
    // Given
    // -----
    // - A model whose value is always NaN.
    //
    // Expect
    // ------
    // - cost returns an error mapping to OptError::NonFiniteCost.
    fn adapter_rejects_non_finite_values() {
        // Arrange
        let model = NanValue;
        let adapter = ArgMinAdapter::new(&model, &());
        let theta = array![0.0];

        // Act
        let err: OptError = adapter.cost(&theta).unwrap_err().into();

        // Assert
        assert!(matches!(err, OptError::NonFiniteCost { .. }));
    }
}
