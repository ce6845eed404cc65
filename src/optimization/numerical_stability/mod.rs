//! Numerical stability helpers shared by the optimizer and inference layers.

pub mod transformations;
