//! Model layer: likelihood definitions handed to the optimizer.

pub mod linear_normal;

pub use self::linear_normal::{FixedCoefficients, LikelihoodFit, LinearNormalModel, log_likelihood};
