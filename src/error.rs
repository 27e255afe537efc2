use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HealthError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Event not found: {0}")]
    EventNotFound(u32),

    #[error("Tip not found: {0}")]
    TipNotFound(u32),
}

pub type Result<T> = std::result::Result<T, HealthError>;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// One or more field-level rejections. The triggering operation is not performed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }

    /// Whether a given field was rejected.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Message for a given field, if it was rejected.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_joins_fields() {
        let err = ValidationError::new(vec![
            FieldError::new("name", "Food name is required"),
            FieldError::new("calories", "Calories are required"),
        ]);
        assert_eq!(
            err.to_string(),
            "name: Food name is required; calories: Calories are required"
        );
        assert!(err.has_field("calories"));
        assert!(!err.has_field("fat"));
        assert_eq!(err.message_for("name"), Some("Food name is required"));
    }

    #[test]
    fn test_validation_converts_into_health_error() {
        let err: HealthError =
            ValidationError::single("age", "Age must be between 1 and 120").into();
        assert!(matches!(err, HealthError::Validation(_)));
    }
}
