//! Submitted inputs and validated model parameters.

use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};

/// The four fields of a submission, exactly as the caller supplied them.
///
/// Evaluation never mutates these, so a caller can show them again next to an
/// error message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    #[serde(rename = "qF", default)]
    pub q_f: String,
    #[serde(rename = "qA", default)]
    pub q_a: String,
    #[serde(rename = "L", default)]
    pub group_size: String,
    #[serde(rename = "K", default)]
    pub group_count: String,
}

impl RawInputs {
    pub fn new(
        q_f: impl Into<String>,
        q_a: impl Into<String>,
        group_size: impl Into<String>,
        group_count: impl Into<String>,
    ) -> Self {
        Self {
            q_f: q_f.into(),
            q_a: q_a.into(),
            group_size: group_size.into(),
            group_count: group_count.into(),
        }
    }
}

/// Validated parameters of the redundancy model.
///
/// Only obtainable through [`ModelParams::new`] or
/// [`parse_inputs`](crate::validate::parse_inputs), so every instance satisfies
/// the domain constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    q_f: f64,
    q_a: f64,
    group_size: u64,
    group_count: u64,
}

impl ModelParams {
    /// Check the numeric domain and build parameters.
    ///
    /// Order: probabilities first, then `L`, then `K`. The first failing check
    /// is reported. `L` and `K` arrive as reals and must have no fractional part.
    pub fn new(q_f: f64, q_a: f64, group_size: f64, group_count: f64) -> Result<Self> {
        if !is_probability(q_f) || !is_probability(q_a) {
            return Err(InputError::Range { q_f, q_a });
        }
        if !(is_integral(group_size) && group_size >= 2.0) {
            return Err(InputError::GroupSize(group_size));
        }
        if !(is_integral(group_count) && group_count >= 1.0) {
            return Err(InputError::GroupCount(group_count));
        }

        // Saturates above u64::MAX; the powers involved are already 0 or 1 there.
        Ok(Self {
            q_f,
            q_a,
            group_size: group_size as u64,
            group_count: group_count as u64,
        })
    }

    /// Per-subunit failure probability (`qF`)
    pub fn failure_probability(&self) -> f64 {
        self.q_f
    }

    /// Per-subunit compromise probability (`qA`)
    pub fn attack_probability(&self) -> f64 {
        self.q_a
    }

    /// Subunits per group (`L`)
    pub fn group_size(&self) -> u64 {
        self.group_size
    }

    /// Number of groups (`K`)
    pub fn group_count(&self) -> u64 {
        self.group_count
    }
}

fn is_probability(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
