//! Errors for the regression layer (generator argument checks, data
//! validation, closed-form estimation, and constraint configuration).
//!
//! ## Conventions
//! - Indices are 0-based; parameter index `k` (the number of coefficients)
//!   refers to the scale parameter σ.
//! - Validation reports the **first** offending element only.
//! - Optimizer-side failures live in
//!   [`crate::optimization::errors::OptError`]; this module covers everything
//!   reachable without a solver run.

/// Crate-wide result alias for regression operations.
pub type RegResult<T> = Result<T, RegError>;

/// Unified error type for data generation, validation, and OLS estimation.
#[derive(Debug, Clone, PartialEq)]
pub enum RegError {
    // ---- Generator arguments ----
    /// A size argument to the generator was zero.
    InvalidArgument { name: &'static str, value: usize },

    // ---- Input/data validation ----
    /// Design matrix has no rows.
    EmptyDesign,

    /// Design matrix row count and response length disagree.
    ShapeMismatch { x_rows: usize, y_len: usize },

    /// A design-matrix entry is NaN/±inf.
    NonFiniteDesign { row: usize, col: usize, value: f64 },

    /// A response entry is NaN/±inf.
    NonFiniteResponse { index: usize, value: f64 },

    // ---- Closed-form estimation ----
    /// Too few observations relative to the number of coefficients.
    DegenerateInput { n_obs: usize, n_params: usize },

    /// The normal-equations matrix XᵗX is not positive definite.
    SingularMatrix,

    // ---- Reporting ----
    /// A vector handed to the comparison report has the wrong length.
    LengthMismatch { name: &'static str, expected: usize, actual: usize },

    // ---- Constraint configuration ----
    /// A fixed-parameter index is outside `0..=k`.
    FixedIndexOutOfRange { index: usize, dim: usize },

    /// A fixed-parameter value is unusable (non-finite, or a non-positive
    /// value for the scale parameter).
    InvalidFixedValue { index: usize, value: f64, reason: &'static str },
}

impl std::error::Error for RegError {}

impl std::fmt::Display for RegError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegError::InvalidArgument { name, value } => {
                write!(f, "Invalid generator argument {name}: {value}, must be positive")
            }
            RegError::EmptyDesign => {
                write!(f, "Design matrix has no rows")
            }
            RegError::ShapeMismatch { x_rows, y_len } => {
                write!(f, "Design matrix has {x_rows} rows but response has {y_len} entries")
            }
            RegError::NonFiniteDesign { row, col, value } => {
                write!(f, "Design entry at ({row}, {col}) is non-finite: {value}")
            }
            RegError::NonFiniteResponse { index, value } => {
                write!(f, "Response entry at index {index} is non-finite: {value}")
            }
            RegError::DegenerateInput { n_obs, n_params } => {
                write!(
                    f,
                    "Degenerate input: {n_obs} observations for {n_params} coefficients \
                     (need n_obs > n_params)"
                )
            }
            RegError::SingularMatrix => {
                write!(f, "Normal-equations matrix XtX is not positive definite")
            }
            RegError::LengthMismatch { name, expected, actual } => {
                write!(f, "{name} has length {actual}, expected {expected}")
            }
            RegError::FixedIndexOutOfRange { index, dim } => {
                write!(f, "Fixed parameter index {index} out of range for dimension {dim}")
            }
            RegError::InvalidFixedValue { index, value, reason } => {
                write!(f, "Invalid fixed value at index {index}: {value}: {reason}")
            }
        }
    }
}
