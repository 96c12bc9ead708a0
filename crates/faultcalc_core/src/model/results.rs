//! Evaluation results.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::format::format_probability;

/// Raw result triple.
///
/// - `result1`: every group is disrupted (each holds a failed or compromised
///   subunit) while not every group has failed
/// - `result2`: every group holds at least one failed subunit
/// - `result3`: at least one group is fully compromised with no failures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub result1: f64,
    pub result2: f64,
    pub result3: f64,
}

impl Metrics {
    /// Render all three values in scientific notation
    #[must_use]
    pub fn format(&self) -> FormattedMetrics {
        FormattedMetrics {
            result1: format_probability(self.result1),
            result2: format_probability(self.result2),
            result3: format_probability(self.result3),
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.result1, self.result2, self.result3]
    }
}

/// Result triple ready for display, e.g. `6.8590e-03`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedMetrics {
    pub result1: String,
    pub result2: String,
    pub result3: String,
}

impl FormattedMetrics {
    /// (label, value) pairs in display order
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("result1", self.result1.as_str()),
            ("result2", self.result2.as_str()),
            ("result3", self.result3.as_str()),
        ]
    }
}

/// Either a full result triple or a single user-facing error message.
///
/// Serializes without a tag: `{"result1":..,"result2":..,"result3":..}` or
/// `{"error":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvaluationOutcome {
    Success(FormattedMetrics),
    Failure { error: String },
}

impl EvaluationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, EvaluationOutcome::Success(_))
    }

    pub fn metrics(&self) -> Option<&FormattedMetrics> {
        match self {
            EvaluationOutcome::Success(metrics) => Some(metrics),
            EvaluationOutcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            EvaluationOutcome::Success(_) => None,
            EvaluationOutcome::Failure { error } => Some(error),
        }
    }
}

impl From<Result<FormattedMetrics, InputError>> for EvaluationOutcome {
    fn from(result: Result<FormattedMetrics, InputError>) -> Self {
        match result {
            Ok(metrics) => EvaluationOutcome::Success(metrics),
            Err(err) => EvaluationOutcome::Failure {
                error: err.user_message().to_string(),
            },
        }
    }
}
