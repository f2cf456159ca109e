use thiserror::Error;

/// Result type for boundary validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Input rejected at the store boundary.
///
/// Raising one of these never changes any state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("unknown dietary filter: {0}")]
    UnknownFilter(String),
}
