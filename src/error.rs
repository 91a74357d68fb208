// ⚠️ Error Types - one taxonomy for validation, storage and charting
// Validation and "no data" errors are recoverable and map to a single user message.
// Storage I/O errors propagate to the outermost boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, BmiError>;

/// Message shown for any rejected calculation request.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter correct values.";

/// Message shown when there is nothing to chart.
pub const NO_DATA_MESSAGE: &str = "No data available to show graph.";

// ============================================================================
// FIELD ERROR
// ============================================================================

/// A single rejected field of a calculation request.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// ============================================================================
// BMI ERROR
// ============================================================================

#[derive(Debug, Error)]
pub enum BmiError {
    /// One or more fields of the request failed to parse
    #[error("Invalid input. Please enter correct values. ({})", join_fields(.0))]
    Validation(Vec<FieldError>),

    /// Neither feet/inches nor centimeters were supplied
    #[error("No valid height supplied: enter feet/inches or centimeters")]
    MissingHeight,

    /// Height reached the engine without being positive
    #[error("Height must be greater than zero, got {0} m")]
    InvalidHeight(f64),

    /// Inputs were accepted but the ratio overflowed or underflowed
    #[error("BMI is not a finite number: {0}")]
    NonFiniteBmi(f64),

    /// No persisted collection exists yet
    #[error("No record store at {}", .0.display())]
    StoreUnavailable(PathBuf),

    /// Nothing to aggregate
    #[error("No data available to show graph.")]
    NoData,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BmiError {
    /// True for every error that rejects a calculation request as a whole.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BmiError::Validation(_)
                | BmiError::MissingHeight
                | BmiError::InvalidHeight(_)
                | BmiError::NonFiniteBmi(_)
        )
    }

    /// True when there is simply nothing saved to chart yet.
    pub fn is_no_data(&self) -> bool {
        matches!(self, BmiError::StoreUnavailable(_) | BmiError::NoData)
    }

    /// The message the presentation layer shows to the user.
    pub fn user_message(&self) -> String {
        if self.is_validation() {
            INVALID_INPUT_MESSAGE.to_string()
        } else if self.is_no_data() {
            NO_DATA_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
