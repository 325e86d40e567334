use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The two numeric inputs of a dosage calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Inr,
    CurrentWeeklyDose,
}

impl InputField {
    pub fn label(&self) -> &'static str {
        match self {
            InputField::Inr => "INR",
            InputField::CurrentWeeklyDose => "Current Weekly Dose",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Failure of the dosage rule itself. Validation is the only way it can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdjustmentError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: InputField, reason: String },
}

impl AdjustmentError {
    pub fn field(&self) -> InputField {
        match self {
            AdjustmentError::InvalidInput { field, .. } => *field,
        }
    }
}

#[derive(Error, Debug)]
pub enum DoseError {
    #[error(transparent)]
    Adjustment(#[from] AdjustmentError),

    #[error("Input rejected for {field}: {value:?} is not a decimal number")]
    InputFormatError { field: InputField, value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DoseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DoseError::Adjustment(_) | DoseError::InputFormatError { .. } => ErrorCategory::Input,
            DoseError::ConfigValidationError { .. } | DoseError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            DoseError::IoError(_) | DoseError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DoseError::Adjustment(_) => {
                "Provide a positive INR result and a positive weekly dose in mg"
            }
            DoseError::InputFormatError { .. } => {
                "Use digits with an optional decimal point, e.g. 2.3 or 35"
            }
            DoseError::ConfigValidationError { .. } => {
                "Check the configuration file is valid TOML and uses the documented keys"
            }
            DoseError::InvalidConfigValueError { .. } => {
                "Correct the reported configuration value and try again"
            }
            DoseError::IoError(_) => "Check the file path exists and is readable",
            DoseError::SerializationError(_) => "Retry with --format text",
        }
    }

    /// Message suitable for showing next to the form fields.
    pub fn user_friendly_message(&self) -> String {
        match self {
            DoseError::Adjustment(_) => {
                "Please enter valid positive numbers for both INR and Current Weekly Dose."
                    .to_string()
            }
            DoseError::InputFormatError { field, .. } => {
                format!("Please enter a valid number for {}.", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DoseError>;
