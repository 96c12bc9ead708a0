use std::fmt;

/// One of the four submitted fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    FailureProbability,
    AttackProbability,
    GroupSize,
    GroupCount,
}

impl InputField {
    /// Name of the field as it appears on a submission
    pub fn name(&self) -> &'static str {
        match self {
            InputField::FailureProbability => "qF",
            InputField::AttackProbability => "qA",
            InputField::GroupSize => "L",
            InputField::GroupCount => "K",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while turning a submission into model parameters.
///
/// Checks run in a fixed order and only the first failure is reported, so the
/// variants are mutually exclusive for any given submission.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// A field is not a finite real number
    Parse { field: InputField, value: String },
    /// `qF` or `qA` lies outside `[0, 1]`
    Range { q_f: f64, q_a: f64 },
    /// `L` is not an integer greater than or equal to 2
    GroupSize(f64),
    /// `K` is not an integer greater than or equal to 1
    GroupCount(f64),
}

impl InputError {
    /// The message shown to the person who submitted the inputs.
    ///
    /// Unlike [`Display`](fmt::Display), this never leaks the offending value.
    pub fn user_message(&self) -> &'static str {
        match self {
            InputError::Parse { .. } => "Error: Invalid input. Please enter numeric values.",
            InputError::Range { .. } => "Error: qF and qA must be between 0 and 1.",
            InputError::GroupSize(_) => "Error: L must be an integer greater than or equal to 2.",
            InputError::GroupCount(_) => "Error: K must be an integer greater than or equal to 1.",
        }
    }

    /// The field the error is attributed to, if it names a single one
    pub fn field(&self) -> Option<InputField> {
        match self {
            InputError::Parse { field, .. } => Some(*field),
            InputError::Range { .. } => None,
            InputError::GroupSize(_) => Some(InputField::GroupSize),
            InputError::GroupCount(_) => Some(InputField::GroupCount),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Parse { field, value } => {
                write!(f, "invalid input for {field}: {value:?} is not a number")
            }
            InputError::Range { q_f, q_a } => {
                write!(f, "qF and qA must be between 0 and 1 (qF={q_f}, qA={q_a})")
            }
            InputError::GroupSize(l) => {
                write!(f, "L must be an integer greater than or equal to 2 (L={l})")
            }
            InputError::GroupCount(k) => {
                write!(f, "K must be an integer greater than or equal to 1 (K={k})")
            }
        }
    }
}

impl std::error::Error for InputError {}

pub type Result<T> = std::result::Result<T, InputError>;
