//! Parsing and validation of submitted text fields.
//!
//! All four fields are parsed before any domain check runs, so a submission with
//! both a non-numeric field and an out-of-range probability reports the parse
//! failure.

use std::borrow::Cow;

use crate::error::{InputError, InputField, Result};
use crate::model::{ModelParams, RawInputs};

/// Parse a single field as a real number.
///
/// Surrounding whitespace is ignored and single underscores between digits are
/// accepted as separators (`1_000`). Overflowing values such as `1e400` parse to
/// infinity and are left for the domain checks; only NaN is refused here.
pub fn parse_field(field: InputField, text: &str) -> Result<f64> {
    match strip_digit_separators(text.trim()).parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(InputError::Parse {
            field,
            value: text.to_string(),
        }),
    }
}

/// Remove `_` that sits between two digits. Any other underscore is kept so the
/// number parser rejects it.
fn strip_digit_separators(text: &str) -> Cow<'_, str> {
    if !text.contains('_') {
        return Cow::Borrowed(text);
    }

    let bytes = text.as_bytes();
    let stripped = text
        .char_indices()
        .filter(|&(i, c)| {
            let between_digits = i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
            !(c == '_' && between_digits)
        })
        .map(|(_, c)| c)
        .collect();
    Cow::Owned(stripped)
}

/// Turn a raw submission into validated model parameters
pub fn parse_inputs(inputs: &RawInputs) -> Result<ModelParams> {
    let q_f = parse_field(InputField::FailureProbability, &inputs.q_f)?;
    let q_a = parse_field(InputField::AttackProbability, &inputs.q_a)?;
    let group_size = parse_field(InputField::GroupSize, &inputs.group_size)?;
    let group_count = parse_field(InputField::GroupCount, &inputs.group_count)?;

    ModelParams::new(q_f, q_a, group_size, group_count)
}
