//! Rendering of evaluation outcomes for the terminal.

use clap::ValueEnum;
use color_eyre::eyre::eyre;
use faultcalc_core::{EvaluationOutcome, FormattedMetrics, RawInputs};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `result1 = 1.0484e-01` lines
    #[default]
    Text,
    Json,
    Yaml,
}

/// Render an outcome.
///
/// Text output repeats the submitted fields under an error so they can be
/// corrected; structured formats emit the outcome object alone.
pub fn render(
    outcome: &EvaluationOutcome,
    inputs: &RawInputs,
    format: OutputFormat,
) -> color_eyre::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(outcome, inputs)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(outcome)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => serde_saphyr::to_string(outcome)
            .map_err(|e| eyre!("failed to serialize outcome as YAML: {e}")),
    }
}

fn render_text(outcome: &EvaluationOutcome, inputs: &RawInputs) -> String {
    match outcome {
        EvaluationOutcome::Success(metrics) => render_metrics(metrics),
        EvaluationOutcome::Failure { error } => {
            let mut text = format!("{error}\n");
            text.push_str(&render_inputs(inputs));
            text
        }
    }
}

fn render_metrics(metrics: &FormattedMetrics) -> String {
    metrics
        .entries()
        .iter()
        .map(|(label, value)| format!("{label} = {value}\n"))
        .collect()
}

/// The submitted fields, verbatim
pub fn render_inputs(inputs: &RawInputs) -> String {
    [
        ("qF", &inputs.q_f),
        ("qA", &inputs.q_a),
        ("L", &inputs.group_size),
        ("K", &inputs.group_count),
    ]
    .iter()
    .map(|(name, value)| format!("  {name:<2} = {value}\n"))
    .collect()
}
