//! # Error Types
//!
//! Structured error types for sim_core. The simulation engine never fails
//! for in-domain inputs; the only error source is the boundary validation
//! that rejects degenerate geometry before any arithmetic runs.
//!
//! ## Example
//!
//! ```rust
//! use sim_core::errors::{SimError, SimResult};
//!
//! fn validate_length(length_m: f64) -> SimResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(SimError::InvalidInput {
//!             field: "length_m".to_string(),
//!             value: length_m.to_string(),
//!             reason: "Length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for sim_core operations
pub type SimResult<T> = Result<T, SimError>;

/// Structured error type for simulation operations.
///
/// Each variant provides specific context about what went wrong, enabling
/// programmatic handling by input forms and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SimError {
    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SimError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SimError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SimError::InvalidInput { .. } => "INVALID_INPUT",
            SimError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SimError::invalid_input("length_m", "-5.0", "Length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: SimError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        let error = SimError::invalid_input("width_m", "0", "Width must be positive");
        assert_eq!(error.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_error_display() {
        let error = SimError::invalid_input("height_m", "0", "Height must be positive");
        let text = error.to_string();
        assert!(text.contains("height_m"));
        assert!(text.contains("Height must be positive"));
    }
}
