//! Finite-difference gradient and Hessian helpers.
//!
//! Purpose
//! -------
//! Provide finite-difference derivative approximations around a parameter
//! vector, together with validation and symmetry cleanup, so the rest of the
//! optimizer and the inference layer can request derivatives without
//! depending directly on the `finitediff` API.
//!
//! Key behaviors
//! -------------
//! - Forward-difference gradients with closure error capture and post-hoc
//!   validation via [`run_fd_diff`].
//! - Central-difference Hessians with a forward-difference fallback via
//!   [`compute_hessian`], symmetrized in-place before return.
//!
//! Conventions
//! -----------
//! - Differences are taken with respect to the unconstrained vector `Theta`;
//!   any reparameterization happens in the model layer.
//! - The objective closure passed to [`run_fd_diff`] cannot return `Result`,
//!   so callers route evaluation errors into the shared `closure_err` cell
//!   and return `NaN`; this module converts the captured error back into a
//!   real failure after the finite-difference call.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        types::{Grad, Hessian, Theta},
        validation::{validate_grad, validate_hessian},
    },
};
use argmin::core::Error;
use finitediff::FiniteDiff;
use std::cell::RefCell;

/// Forward-difference gradient of `func` at `theta`, with error capture.
///
/// Clears `closure_err`, runs `forward_diff`, then:
/// - if an error was captured during evaluation, returns it converted into
///   an `OptError`;
/// - otherwise validates the gradient's shape and finiteness.
///
/// # Errors
/// - Any error captured in `closure_err` during evaluation of `func`.
/// - [`OptError::GradientDimMismatch`] / [`OptError::InvalidGradient`] from
///   validation of the resulting gradient.
///
/// [`OptError::GradientDimMismatch`]: crate::optimization::errors::OptError::GradientDimMismatch
/// [`OptError::InvalidGradient`]: crate::optimization::errors::OptError::InvalidGradient
pub fn run_fd_diff<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> OptResult<Grad> {
    closure_err.replace(None);
    let fd_grad = theta.forward_diff(func);
    let dim = theta.len();
    if let Some(err) = closure_err.take() {
        return Err(err.into());
    }
    validate_grad(&fd_grad, dim)?;
    Ok(fd_grad)
}

/// Finite-difference Hessian of a gradient function at `theta`.
///
/// Central differences are attempted first; if the central approximation
/// fails validation (shape or finiteness), the forward-difference Hessian is
/// computed and validated instead. The returned matrix is symmetrized by
/// averaging each off-diagonal pair.
///
/// # Errors
/// - [`OptError::HessianDimMismatch`] / [`OptError::InvalidHessian`] when
///   both difference schemes fail validation; the central-difference error
///   is discarded and the forward-difference diagnostic surfaced.
///
/// [`OptError::HessianDimMismatch`]: crate::optimization::errors::OptError::HessianDimMismatch
/// [`OptError::InvalidHessian`]: crate::optimization::errors::OptError::InvalidHessian
pub fn compute_hessian<F: Fn(&Theta) -> Grad>(f: &F, theta: &Theta) -> OptResult<Hessian> {
    let dim = theta.len();
    let mut cent_hess = theta.central_hessian(f);
    match validate_hessian(&cent_hess, dim) {
        Ok(_) => {
            symmetrize_hess(&mut cent_hess);
            Ok(cent_hess)
        }
        Err(_) => {
            let mut forward_hess = theta.forward_hessian(f);
            validate_hessian(&forward_hess, dim)?;
            symmetrize_hess(&mut forward_hess);
            Ok(forward_hess)
        }
    }
}

// ---- Helper methods ----

/// Enforce symmetry in-place by averaging each off-diagonal pair. The
/// diagonal is left untouched. Called only on matrices that already passed
/// validation.
fn symmetrize_hess(hess: &mut Hessian) {
    for i in 0..hess.nrows() {
        for j in 0..i {
            let avg = 0.5 * (hess[[i, j]] + hess[[j, i]]);
            hess[[i, j]] = avg;
            hess[[j, i]] = avg;
        }
    }
}
