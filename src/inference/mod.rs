//! Inference layer: standard errors from the observed information matrix and
//! the truth/OLS/ML comparison report.
//!
//! - [`hessian`]: eigendecomposition-based standard errors from the Hessian
//!   of the negated log-likelihood.
//! - [`report`]: per-parameter comparison rows and a printable table.

pub mod hessian;
pub mod report;

pub use self::hessian::standard_errors_from_hessian;
pub use self::report::{ComparisonRow, ComparisonTable, compare};
