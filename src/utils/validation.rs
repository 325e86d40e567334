use crate::utils::error::{AdjustmentError, DoseError, InputField, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn decimal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d*\.?\d*$").expect("decimal pattern compiles"))
}

/// Whether `text` is acceptable while typing a decimal number: empty, digits,
/// and at most one decimal point. Signs and exponents are rejected.
pub fn is_decimal_text(text: &str) -> bool {
    text.is_empty() || decimal_pattern().is_match(text)
}

/// A dosage input must be a finite number strictly greater than zero.
pub fn validate_positive_finite(
    field: InputField,
    value: f64,
) -> std::result::Result<f64, AdjustmentError> {
    if !value.is_finite() {
        return Err(AdjustmentError::InvalidInput {
            field,
            reason: format!("{} is not a finite number", value),
        });
    }

    if value <= 0.0 {
        return Err(AdjustmentError::InvalidInput {
            field,
            reason: format!("{} must be greater than zero", value),
        });
    }

    Ok(value)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DoseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
