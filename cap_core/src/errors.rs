//! # Error Types
//!
//! Structured error types for cap_core. Every failure carries enough context
//! (which field, what was entered, why it was rejected) for a front end to
//! point the user at the offending input.
//!
//! ## Example
//!
//! ```rust
//! use cap_core::errors::{CalcError, CalcResult};
//!
//! fn validate_cells(num_cells: f64) -> CalcResult<()> {
//!     if num_cells <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "num_cells".to_string(),
//!             value: num_cells.to_string(),
//!             reason: "Cell count must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_cells(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for cap_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (not a number, out of domain, volume unresolvable)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True when the user's input was rejected (as opposed to an I/O failure).
    ///
    /// Missing and malformed fields are both input errors: the calculation was
    /// never attempted.
    pub fn is_input_error(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. } | CalcError::MissingField { .. })
    }

    /// Name of the offending field, if the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } | CalcError::MissingField { field } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("current_draw", "abc", "Not a number");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));

        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("num_cells").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::serialization("eof").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_input_error_kind() {
        assert!(CalcError::missing_field("num_cells").is_input_error());
        assert!(CalcError::invalid_input("num_cells", "x", "bad").is_input_error());
        assert!(!CalcError::file_error("read", "a.json", "not found").is_input_error());
    }

    #[test]
    fn test_field_accessor() {
        let err = CalcError::invalid_input("mass_one_cell", "-", "Not a number");
        assert_eq!(err.field(), Some("mass_one_cell"));
        assert_eq!(CalcError::serialization("x").field(), None);
    }

    #[test]
    fn test_display_message() {
        let err = CalcError::missing_field("capacitance_one_cell");
        assert_eq!(err.to_string(), "Missing required field: capacitance_one_cell");
    }
}
