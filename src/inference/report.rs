//! Truth/OLS/ML comparison report.
//!
//! Assembles a per-parameter table pairing the generating truth with both
//! estimates and their standard errors, so the closed-form and numerical
//! routes can be read side by side. The table is a plain value; rendering is
//! a `Display` impl, and nothing here writes to stdout on its own.
use crate::regression::{
    core::{
        data::TrueParams,
        params::{ParamEstimate, param_names},
    },
    errors::{RegError, RegResult},
};
use ndarray::Array1;

/// One parameter's worth of comparison: truth, both estimates, both SEs.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Canonical parameter name (`const`, `x1`, …, `sigma`).
    pub name: String,
    /// Generating truth.
    pub truth: f64,
    /// Closed-form estimate and standard error.
    pub ols: f64,
    pub ols_se: f64,
    /// Likelihood-maximization estimate and standard error.
    pub ml: f64,
    pub ml_se: f64,
}

impl ComparisonRow {
    /// Absolute gap between the two estimates.
    pub fn estimate_gap(&self) -> f64 {
        (self.ml - self.ols).abs()
    }

    /// Absolute gap between the two standard errors.
    pub fn se_gap(&self) -> f64 {
        (self.ml_se - self.ols_se).abs()
    }
}

/// The full per-parameter comparison, row order `const, x1, …, sigma`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Largest absolute estimate gap across all parameters.
    pub fn max_estimate_gap(&self) -> f64 {
        self.rows.iter().map(ComparisonRow::estimate_gap).fold(0.0, f64::max)
    }

    /// Largest absolute standard-error gap across all parameters.
    pub fn max_se_gap(&self) -> f64 {
        self.rows.iter().map(ComparisonRow::se_gap).fold(0.0, f64::max)
    }
}

/// Build the comparison table from both fits and the generating truth.
///
/// All vectors must cover the same `k + 1` natural parameters
/// (coefficients, then scale); the scale slot of each estimate comes from
/// its `sigma` field.
///
/// # Errors
/// - [`RegError::LengthMismatch`] naming the first input whose length
///   disagrees with the truth's dimension.
pub fn compare(
    truth: &TrueParams, ols: &ParamEstimate, ols_se: &Array1<f64>, ml: &ParamEstimate,
    ml_se: &Array1<f64>,
) -> RegResult<ComparisonTable> {
    let n_coeffs = truth.beta.len();
    let dim = n_coeffs + 1;
    if ols.beta.len() != n_coeffs {
        return Err(RegError::LengthMismatch {
            name: "ols.beta",
            expected: n_coeffs,
            actual: ols.beta.len(),
        });
    }
    if ml.beta.len() != n_coeffs {
        return Err(RegError::LengthMismatch {
            name: "ml.beta",
            expected: n_coeffs,
            actual: ml.beta.len(),
        });
    }
    if ols_se.len() != dim {
        return Err(RegError::LengthMismatch {
            name: "ols_se",
            expected: dim,
            actual: ols_se.len(),
        });
    }
    if ml_se.len() != dim {
        return Err(RegError::LengthMismatch {
            name: "ml_se",
            expected: dim,
            actual: ml_se.len(),
        });
    }

    let names = param_names(n_coeffs);
    let mut rows = Vec::with_capacity(dim);
    for index in 0..dim {
        let (truth_value, ols_value, ml_value) = if index < n_coeffs {
            (truth.beta[index], ols.beta[index], ml.beta[index])
        } else {
            (truth.sigma, ols.sigma, ml.sigma)
        };
        rows.push(ComparisonRow {
            name: names[index].clone(),
            truth: truth_value,
            ols: ols_value,
            ols_se: ols_se[index],
            ml: ml_value,
            ml_se: ml_se[index],
        });
    }
    Ok(ComparisonTable { rows })
}

impl std::fmt::Display for ComparisonTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<8} {:>10} {:>10} {:>9} {:>10} {:>9}",
            "param", "truth", "OLS", "OLS se", "ML", "ML se"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<8} {:>10.4} {:>10.4} {:>9.4} {:>10.4} {:>9.4}",
                row.name, row.truth, row.ols, row.ols_se, row.ml, row.ml_se
            )?;
        }
        Ok(())
    }
}
