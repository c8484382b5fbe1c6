//! Validation error types

use std::fmt;

/// Validation error for request input
///
/// Messages name the offending field; they end up verbatim in the JSON
/// error body, so wording is part of the API contract.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is absent or null
    Missing { field: &'static str },

    /// A field is present but outside its domain
    Invalid { field: &'static str },

    /// The request body could not be deserialized at all
    Body { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "missing required field '{}'", field),
            Self::Invalid { field } => write!(f, "invalid value for '{}' parameter", field),
            Self::Body { reason } => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_names_the_field() {
        let err = ValidationError::Missing { field: "score" };
        assert_eq!(err.to_string(), "missing required field 'score'");
    }

    #[test]
    fn invalid_names_the_field() {
        let err = ValidationError::Invalid { field: "score_over" };
        assert_eq!(err.to_string(), "invalid value for 'score_over' parameter");
    }
}
