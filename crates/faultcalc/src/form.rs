//! Interactive form session.
//!
//! Prompts for the four fields in turn, evaluates the submission and shows the
//! results or the error. An empty answer keeps the value from the previous
//! submission, so a rejected submission can be corrected one field at a time.

use std::io::{BufRead, Write};

use faultcalc_core::{Evaluator, InputField, RawInputs};

use crate::output::{OutputFormat, render};

const FIELDS: [InputField; 4] = [
    InputField::FailureProbability,
    InputField::AttackProbability,
    InputField::GroupSize,
    InputField::GroupCount,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormSummary {
    pub submissions: usize,
    pub rejected: usize,
}

pub struct FormSession<R, W> {
    evaluator: Evaluator,
    format: OutputFormat,
    input: R,
    output: W,
    fields: RawInputs,
}

impl<R: BufRead, W: Write> FormSession<R, W> {
    pub fn new(evaluator: Evaluator, format: OutputFormat, input: R, output: W) -> Self {
        Self {
            evaluator,
            format,
            input,
            output,
            fields: RawInputs::default(),
        }
    }

    /// Values currently shown in the form
    pub fn fields(&self) -> &RawInputs {
        &self.fields
    }

    /// Run until the input is exhausted. A submission cut short by EOF is dropped.
    pub fn run(&mut self) -> color_eyre::Result<FormSummary> {
        let mut summary = FormSummary::default();
        writeln!(
            self.output,
            "Enter qF, qA, L and K. Empty answers keep the previous value; end input to quit."
        )?;

        loop {
            let mut submission = self.fields.clone();
            for field in FIELDS {
                let current = field_value(&submission, field).to_string();
                match self.prompt(field, &current)? {
                    Some(value) => *field_value_mut(&mut submission, field) = value,
                    None => {
                        tracing::debug!(?summary, "Form session finished");
                        return Ok(summary);
                    }
                }
            }
            self.fields = submission;

            let outcome = self.evaluator.outcome(&self.fields);
            summary.submissions += 1;
            if outcome.is_success() {
                tracing::debug!(inputs = ?self.fields, "Form submission evaluated");
            } else {
                summary.rejected += 1;
                tracing::info!(inputs = ?self.fields, error = ?outcome.error(), "Form submission rejected");
            }

            let rendered = render(&outcome, &self.fields, self.format)?;
            write!(self.output, "{rendered}")?;
            writeln!(self.output)?;
        }
    }

    /// Ask for one field. `None` means the input ended.
    fn prompt(&mut self, field: InputField, current: &str) -> std::io::Result<Option<String>> {
        if current.is_empty() {
            write!(self.output, "{field}: ")?;
        } else {
            write!(self.output, "{field} [{current}]: ")?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        if answer.trim().is_empty() {
            Ok(Some(current.to_string()))
        } else {
            Ok(Some(answer.to_string()))
        }
    }
}

fn field_value(inputs: &RawInputs, field: InputField) -> &str {
    match field {
        InputField::FailureProbability => &inputs.q_f,
        InputField::AttackProbability => &inputs.q_a,
        InputField::GroupSize => &inputs.group_size,
        InputField::GroupCount => &inputs.group_count,
    }
}

fn field_value_mut(inputs: &mut RawInputs, field: InputField) -> &mut String {
    match field {
        InputField::FailureProbability => &mut inputs.q_f,
        InputField::AttackProbability => &mut inputs.q_a,
        InputField::GroupSize => &mut inputs.group_size,
        InputField::GroupCount => &mut inputs.group_count,
    }
}
