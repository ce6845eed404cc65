//! Optimization layer: the argmin-backed boundary to the external maximizer.
//!
//! - [`loglik_optimizer`]: the user-facing surface — implement
//!   [`loglik_optimizer::LogLikelihood`] and call [`loglik_optimizer::maximize`].
//! - [`numerical_stability`]: guarded nonlinear transforms used to map
//!   constrained parameters into unconstrained optimizer space.
//! - [`errors`]: optimizer-side error taxonomy and argmin error mapping.

pub mod errors;
pub mod loglik_optimizer;
pub mod numerical_stability;
