//! Evaluator configuration

use serde::{Deserialize, Serialize};

/// What to do with results that drift outside `[0, 1]`.
///
/// The closed forms are probabilities, but `result1` is a difference of two
/// powers and can land a few ulps below zero near the domain boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampPolicy {
    /// Report values exactly as computed
    #[default]
    PassThrough,
    /// Clamp each result into `[0, 1]`
    Clamp,
}

impl ClampPolicy {
    /// Apply the policy to a single computed probability
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            ClampPolicy::PassThrough => value,
            ClampPolicy::Clamp => value.clamp(0.0, 1.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClampPolicy::PassThrough => "pass_through",
            ClampPolicy::Clamp => "clamp",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    #[serde(default)]
    pub clamp: ClampPolicy,
}

impl EvaluatorConfig {
    pub fn with_clamp(clamp: ClampPolicy) -> Self {
        Self { clamp }
    }
}
