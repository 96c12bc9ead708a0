//! Scientific-notation formatting for result values.

/// Digits after the decimal point of every reported mantissa
pub const RESULT_PRECISION: usize = 4;

/// Format a value as `d.dddde±XX`.
///
/// Rust's `{:e}` writes exponents without sign padding (`6.859e-3`); results are
/// reported with an explicit sign and at least two exponent digits instead
/// (`6.8590e-03`, `1.0000e+00`).
pub fn format_scientific(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let raw = format!("{value:.precision$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        }
        None => raw,
    }
}

/// Format a result probability with the standard precision
pub fn format_probability(value: f64) -> String {
    format_scientific(value, RESULT_PRECISION)
}
