//! Synthetic panel data generation with known ground truth.
//!
//! Purpose
//! -------
//! Build an `N × T` panel dataset for the linear-normal model with fixed,
//! literal true parameters, so that estimator output can be checked against a
//! known truth. The intercept column is constant 1.0; the 15 stochastic
//! covariates are drawn from a fixed table of independent normal and uniform
//! laws with varying location and scale, mirroring a realistic panel.
//!
//! Determinism
//! -----------
//! The PRNG is `rand::rngs::StdRng` seeded via `seed_from_u64`; all draws are
//! `f64`. Draw order is fixed and documented:
//!
//! 1. covariates, row by row, stochastic columns in table order — one
//!    standard-normal draw (`rand_distr::StandardNormal`) for normal laws,
//!    one `rng.gen::<f64>()` draw for uniform laws;
//! 2. noise, one standard-normal draw per row, in row order.
//!
//! Identical `(cross_section_size, panel_length, seed)` arguments therefore
//! reproduce the dataset bit-for-bit on the same `rand` version. The exact
//! numeric values are a property of this PRNG choice; consumers should treat
//! published point estimates as tolerance targets, not exact matches.
use crate::regression::{
    core::data::{RegressionData, TrueParams},
    errors::{RegError, RegResult},
};
use ndarray::{Array1, Array2};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::StandardNormal;

/// True coefficients (intercept first) used by [`generate`].
pub const TRUE_BETA: [f64; 16] = [
    2.15, 0.10, 0.50, 0.10, 0.75, 1.20, 0.10, 0.50, 0.10, 0.75, 1.20, 0.10, 0.50, 0.10, 0.75, 1.20,
];

/// True error standard deviation used by [`generate`].
pub const TRUE_SIGMA: f64 = 0.3;

/// Sampling law for one stochastic covariate column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CovariateLaw {
    /// `mean + sd · z`, `z ~ N(0, 1)`.
    Normal { mean: f64, sd: f64 },
    /// `lo + (hi − lo) · u`, `u ~ U[0, 1)`.
    Uniform { lo: f64, hi: f64 },
}

/// Laws for design columns 1..=15, in column order. Column 0 is the constant.
pub const COVARIATE_LAWS: [CovariateLaw; 15] = [
    CovariateLaw::Normal { mean: 0.0, sd: 1.0 },
    CovariateLaw::Uniform { lo: 0.0, hi: 1.0 },
    CovariateLaw::Normal { mean: 2.0, sd: 1.0 },
    CovariateLaw::Uniform { lo: -1.0, hi: 1.0 },
    CovariateLaw::Normal { mean: 0.0, sd: 2.0 },
    CovariateLaw::Normal { mean: 5.0, sd: 1.5 },
    CovariateLaw::Uniform { lo: 0.0, hi: 2.0 },
    CovariateLaw::Normal { mean: -2.0, sd: 1.0 },
    CovariateLaw::Uniform { lo: 0.0, hi: 1.0 },
    CovariateLaw::Normal { mean: 0.0, sd: 3.0 },
    CovariateLaw::Normal { mean: 1.0, sd: 0.5 },
    CovariateLaw::Uniform { lo: -2.0, hi: 2.0 },
    CovariateLaw::Normal { mean: 3.0, sd: 2.0 },
    CovariateLaw::Uniform { lo: 0.0, hi: 5.0 },
    CovariateLaw::Normal { mean: 0.0, sd: 1.0 },
];

impl CovariateLaw {
    /// Draw one value from this law, consuming exactly one PRNG draw.
    fn sample(&self, rng: &mut StdRng) -> f64 {
        match *self {
            CovariateLaw::Normal { mean, sd } => {
                let z: f64 = rng.sample(StandardNormal);
                mean + sd * z
            }
            CovariateLaw::Uniform { lo, hi } => lo + (hi - lo) * rng.gen::<f64>(),
        }
    }
}

/// Generate an `N × T` synthetic panel with known ground truth.
///
/// # Behavior
/// - `n_obs = cross_section_size × panel_length` rows.
/// - Column 0 is constant 1.0; columns 1..=15 follow [`COVARIATE_LAWS`].
/// - `y = X · TRUE_BETA + ε`, `ε ~ N(0, TRUE_SIGMA²)` i.i.d. per row.
///
/// # Errors
/// - [`RegError::InvalidArgument`] when either size argument is zero.
///
/// # Returns
/// The dataset and the [`TrueParams`] it was generated from.
pub fn generate(
    cross_section_size: usize, panel_length: usize, seed: u64,
) -> RegResult<(RegressionData, TrueParams)> {
    if cross_section_size == 0 {
        return Err(RegError::InvalidArgument {
            name: "cross_section_size",
            value: cross_section_size,
        });
    }
    if panel_length == 0 {
        return Err(RegError::InvalidArgument { name: "panel_length", value: panel_length });
    }
    let n_obs = cross_section_size * panel_length;
    let n_coeffs = TRUE_BETA.len();
    let mut rng = StdRng::seed_from_u64(seed);

    let mut x = Array2::<f64>::zeros((n_obs, n_coeffs));
    for i in 0..n_obs {
        x[[i, 0]] = 1.0;
        for (j, law) in COVARIATE_LAWS.iter().enumerate() {
            x[[i, j + 1]] = law.sample(&mut rng);
        }
    }

    let beta = Array1::from(TRUE_BETA.to_vec());
    let mut y = x.dot(&beta);
    for i in 0..n_obs {
        let z: f64 = rng.sample(StandardNormal);
        y[i] += TRUE_SIGMA * z;
    }

    let data = RegressionData::new(x, y)?;
    Ok((data, TrueParams { beta, sigma: TRUE_SIGMA }))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Argument validation for zero sizes.
    // - Output shapes and the constant intercept column.
    // - Bit-for-bit determinism for identical arguments, and divergence for
    //   differing seeds.
    //
    // They intentionally DO NOT cover:
    // - Estimator recovery of the true parameters (integration tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure zero-size arguments are rejected with `InvalidArgument` naming
    // the offending parameter.
    //
    // Given
    // -----
    // - `(0, 5, seed)` and `(5, 0, seed)`.
    //
    // Expect
    // ------
    // - Each call fails with `InvalidArgument` for the zero argument.
    fn generate_rejects_zero_sizes() {
        // Act + Assert
        assert_eq!(
            generate(0, 5, 1).unwrap_err(),
            RegError::InvalidArgument { name: "cross_section_size", value: 0 }
        );
        assert_eq!(
            generate(5, 0, 1).unwrap_err(),
            RegError::InvalidArgument { name: "panel_length", value: 0 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify output shapes, the constant intercept column, and that the
    // returned truth matches the module constants.
    //
    // Given
    // -----
    // - N = 7, T = 3, any seed.
    //
    // Expect
    // ------
    // - X is 21×16 with a unit first column; y has length 21; truth equals
    //   (TRUE_BETA, TRUE_SIGMA).
    fn generate_produces_expected_shapes_and_intercept() {
        // Act
        let (data, truth) = generate(7, 3, 42).unwrap();

        // Assert
        assert_eq!(data.x.nrows(), 21);
        assert_eq!(data.x.ncols(), 16);
        assert_eq!(data.y.len(), 21);
        assert!(data.x.column(0).iter().all(|&v| v == 1.0));
        assert_eq!(truth.beta.len(), 16);
        assert_eq!(truth.sigma, TRUE_SIGMA);
        assert!(data.x.iter().all(|v| v.is_finite()));
        assert!(data.y.iter().all(|v| v.is_finite()));
    }

    #[test]
    // Purpose
    // -------
    // Verify determinism: identical arguments reproduce the dataset
    // bit-for-bit, and a different seed produces a different dataset.
    //
    // Given
    // -----
    // - Two calls with (4, 2, seed=1234) and one with seed=1235.
    //
    // Expect
    // ------
    // - The first two datasets compare equal (exact f64 equality); the third
    //   differs from them.
    fn generate_is_deterministic_in_the_seed() {
        // Act
        let (a, _) = generate(4, 2, 1234).unwrap();
        let (b, _) = generate(4, 2, 1234).unwrap();
        let (c, _) = generate(4, 2, 1235).unwrap();

        // Assert
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
