use crate::config::{ClampPolicy, EvaluatorConfig};
use crate::error::InputError;
use crate::model::{EvaluationOutcome, FormattedMetrics, Metrics, ModelParams, RawInputs};
use crate::validate::parse_inputs;

/// Compute the result triple for validated parameters.
///
/// With `p = (1 - qF)^L` (a group has no failed subunit):
/// - `result2 = (1 - p)^K`
/// - `result1 = (1 - p * (1 - qA)^L)^K - result2`
/// - `result3 = 1 - (1 - p * qA^L)^K`
///
/// The three values are computed independently from the same intermediates, in
/// that order, and the clamp policy is applied to each one afterwards.
pub fn compute(params: &ModelParams, clamp: ClampPolicy) -> Metrics {
    let q_f = params.failure_probability();
    let q_a = params.attack_probability();
    let l = params.group_size() as f64;
    let k = params.group_count() as f64;

    let term_f = (1.0 - q_f).powf(l);
    let term_a = (1.0 - q_a).powf(l);
    let result2 = (1.0 - term_f).powf(k);

    let part1 = 1.0 - term_f * term_a;
    let result1 = part1.powf(k) - result2;

    let term_a_raw = q_a.powf(l);
    let part2 = 1.0 - term_f * term_a_raw;
    let result3 = 1.0 - part2.powf(k);

    Metrics {
        result1: clamp.apply(result1),
        result2: clamp.apply(result2),
        result3: clamp.apply(result3),
    }
}

/// Parse, validate, compute and format with the default configuration.
///
/// ```
/// use faultcalc_core::{InputError, evaluate};
///
/// let err = evaluate("0.1", "0.2", "2.5", "3").unwrap_err();
/// assert!(matches!(err, InputError::GroupSize(_)));
/// ```
pub fn evaluate(q_f: &str, q_a: &str, l: &str, k: &str) -> Result<FormattedMetrics, InputError> {
    Evaluator::default().evaluate(&RawInputs::new(q_f, q_a, l, k))
}

/// Stateless evaluator carrying an output policy.
///
/// Cheap to copy and safe to share between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Unformatted results for a raw submission
    pub fn metrics(&self, inputs: &RawInputs) -> Result<Metrics, InputError> {
        let params = parse_inputs(inputs)?;
        Ok(compute(&params, self.config.clamp))
    }

    /// Formatted results for a raw submission
    pub fn evaluate(&self, inputs: &RawInputs) -> Result<FormattedMetrics, InputError> {
        self.metrics(inputs).map(|metrics| metrics.format())
    }

    /// Tagged success/error value for presentation layers
    pub fn outcome(&self, inputs: &RawInputs) -> EvaluationOutcome {
        self.evaluate(inputs).into()
    }
}
