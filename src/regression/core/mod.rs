//! Core value objects for the regression layer.
//!
//! - [`data`]: validated dataset container and ground-truth parameters.
//! - [`params`]: provenance-carrying parameter estimates and naming.
//! - [`validation`]: shared finiteness/shape checks reused by OLS and by the
//!   likelihood model's pre-flight hook.

pub mod data;
pub mod params;
pub mod validation;
