//! End-to-end tests for the evaluator
//!
//! Tests are organized by topic:
//! - `regression` - Literal fixtures that pin formatted output
//! - `boundaries` - Behavior at the edges of the parameter domain
//! - `properties` - Finiteness, monotonicity and determinism over a grid of inputs
//! - `outcome` - Tagged success/error values and their serialized form

mod boundaries;
mod regression;
