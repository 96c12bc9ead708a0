//! Redundancy/fault model evaluator
//!
//! This crate evaluates three closed-form probability metrics for a population of
//! `K` independent groups, each built from `L` independent subunits. Every subunit
//! fails with probability `qF` and is compromised with probability `qA`.
//!
//! The pipeline is strictly `parse -> validate -> compute -> format`:
//! - [`validate`] turns untyped text fields into [`ModelParams`]
//! - [`evaluate::compute`] produces the raw [`Metrics`] triple
//! - [`format`] renders each value in normalized scientific notation
//!
//! # Example
//!
//! ```
//! use faultcalc_core::evaluate;
//!
//! let results = evaluate("0.1", "0.2", "2", "3").unwrap();
//! assert_eq!(results.result2, "6.8590e-03");
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod config;
pub mod error;
pub mod evaluate;
pub mod format;
pub mod validate;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{ClampPolicy, EvaluatorConfig};
pub use error::{InputError, InputField};
pub use evaluate::{Evaluator, compute, evaluate};
pub use model::{EvaluationOutcome, FormattedMetrics, Metrics, ModelParams, RawInputs};
