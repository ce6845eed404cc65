//! L-BFGS solver construction helpers.
//!
//! Small builders that hide argmin's generic wiring: they pair an L-BFGS
//! solver with the chosen line search, apply the history size from
//! [`MLEOptions`], and wire in optional tolerances. The initial parameter
//! vector and iteration cap are runtime concerns applied by the runner, so
//! these builders stay side-effect free.
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        traits::MLEOptions,
        types::{
            Cost, DEFAULT_LBFGS_MEM, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente,
            MoreThuenteLS, Theta,
        },
    },
};

/// Construct L-BFGS with a Hager–Zhang line search.
///
/// Uses `opts.lbfgs_mem` for the history size (`m`), falling back to
/// [`DEFAULT_LBFGS_MEM`], and applies any tolerances in `opts.tols`.
///
/// # Errors
/// Surfaces argmin configuration errors (via `From<argmin::core::Error>`)
/// when a tolerance is rejected.
pub fn build_optimizer_hager_zhang(opts: &MLEOptions) -> OptResult<LbfgsHagerZhang> {
    let hager_zhang = HagerZhangLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsHagerZhang::new(hager_zhang, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Construct L-BFGS with a More–Thuente line search.
///
/// Same configuration behavior as [`build_optimizer_hager_zhang`] with the
/// alternative line-search strategy.
///
/// # Errors
/// Surfaces argmin configuration errors when a tolerance is rejected.
pub fn build_optimizer_more_thuente(opts: &MLEOptions) -> OptResult<LbfgsMoreThuente> {
    let more_thuente = MoreThuenteLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsMoreThuente::new(more_thuente, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Apply optional tolerances to an L-BFGS solver, generic over the
/// line-search type.
///
/// When a tolerance is `None` the corresponding `with_tolerance_*` call is
/// skipped and argmin's default remains in effect. Initial parameters,
/// iteration caps, and line-search settings are untouched.
///
/// # Errors
/// Surfaces argmin errors from `with_tolerance_grad` / `with_tolerance_cost`.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &MLEOptions,
) -> OptResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::loglik_optimizer::traits::{LineSearcher, Tolerances};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction of both line-search variants with default and explicit
    //   L-BFGS memory.
    // - Tolerance application via configure_lbfgs, present and absent.
    //
    // They intentionally DO NOT cover:
    // - Executor behavior (runner layer) or real likelihood models.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure both builders succeed with default memory (lbfgs_mem = None)
    // and valid tolerances.
    //
    // Given
    // -----
    // - MLEOptions with tol_grad, tol_cost, and max_iter all set.
    //
    // Expect
    // ------
    // - Both builders return Ok.
    fn builders_use_default_memory_when_none() {
        // Arrange
        let tols = Tolerances::new(Some(1e-6), Some(1e-8), Some(50)).unwrap();
        let hz = MLEOptions::new(tols, LineSearcher::HagerZhang, None).unwrap();
        let mt = MLEOptions::new(tols, LineSearcher::MoreThuente, None).unwrap();

        // Act + Assert
        assert!(build_optimizer_hager_zhang(&hz).is_ok());
        assert!(build_optimizer_more_thuente(&mt).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Verify the builders accept an explicit L-BFGS memory value.
    //
    // Given
    // -----
    // - MLEOptions with lbfgs_mem = Some(11).
    //
    // Expect
    // ------
    // - Both builders return Ok.
    fn builders_respect_explicit_memory() {
        // Arrange
        let tols = Tolerances::new(Some(1e-6), None, Some(25)).unwrap();
        let hz = MLEOptions::new(tols, LineSearcher::HagerZhang, Some(11)).unwrap();
        let mt = MLEOptions::new(tols, LineSearcher::MoreThuente, Some(11)).unwrap();

        // Act + Assert
        assert!(build_optimizer_hager_zhang(&hz).is_ok());
        assert!(build_optimizer_more_thuente(&mt).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Confirm configure_lbfgs succeeds both when tolerances are present and
    // when both are None (argmin defaults).
    //
    // Given
    // -----
    // - Raw L-BFGS solvers and options with and without tolerances.
    //
    // Expect
    // ------
    // - Both configurations return Ok.
    fn configure_lbfgs_handles_present_and_absent_tolerances() {
        // Arrange
        let with_tols = MLEOptions::new(
            Tolerances::new(Some(1e-6), Some(1e-8), Some(100)).unwrap(),
            LineSearcher::HagerZhang,
            None,
        )
        .unwrap();
        let without_tols = MLEOptions::new(
            Tolerances::new(None, None, Some(50)).unwrap(),
            LineSearcher::MoreThuente,
            None,
        )
        .unwrap();

        // Act
        let configured_with =
            configure_lbfgs(LBFGS::new(HagerZhangLS::new(), DEFAULT_LBFGS_MEM), &with_tols);
        let configured_without =
            configure_lbfgs(LBFGS::new(MoreThuenteLS::new(), DEFAULT_LBFGS_MEM), &without_tols);

        // Assert
        assert!(configured_with.is_ok());
        assert!(configured_without.is_ok());
    }
}
