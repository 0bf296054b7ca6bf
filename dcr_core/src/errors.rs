//! # Error Types
//!
//! Structured error types for dcr_core. Every analysis either returns a
//! complete result or one of these errors; nothing partial is ever handed
//! back to the caller.
//!
//! ## Example
//!
//! ```rust
//! use dcr_core::errors::{CalcError, CalcResult};
//!
//! fn validate_extent(extent_m: f64) -> CalcResult<()> {
//!     if extent_m <= 0.0 {
//!         return Err(CalcError::invalid_domain(
//!             "extent_m",
//!             extent_m.to_string(),
//!             "Extent must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_extent(-1.0).unwrap_err().error_code(), "INVALID_DOMAIN");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for dcr_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for engine operations.
///
/// The presentation shell is expected to catch these, show them to the
/// user and let them re-enter corrected inputs. No variant is retryable.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Bad extent, sample count or increment for a discretized domain
    #[error("Invalid domain for '{field}': {value} - {reason}")]
    InvalidDomain {
        field: String,
        value: String,
        reason: String,
    },

    /// Input outside its physical range (negative length, φ ≥ 90°, f'c ≤ 0, ...)
    #[error("Invalid parameter '{field}': {value} - {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    /// Zero capacity or zero range reached in a ratio/normalization step
    #[error("Division by zero computing {quantity}: {reason}")]
    DivisionByZero { quantity: String, reason: String },

    /// JSON request or settings could not be parsed
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidDomain error
    pub fn invalid_domain(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidDomain {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidParameter error
    pub fn invalid_parameter(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidParameter {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(quantity: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            quantity: quantity.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError { reason: reason.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidDomain { .. } => "INVALID_DOMAIN",
            CalcError::InvalidParameter { .. } => "INVALID_PARAMETER",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

/// Reject NaN/Inf inputs before any arithmetic touches them.
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_parameter(field, value.to_string(), "Value must be finite"))
    }
}

/// Finite and strictly positive.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_parameter(field, value.to_string(), "Value must be positive"));
    }
    Ok(value)
}

/// Finite and zero or greater.
pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<f64> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_parameter(field, value.to_string(), "Value must not be negative"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_parameter("fc_mpa", "-5", "Concrete strength must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("InvalidParameter"));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_domain("n", "1", "too few").error_code(), "INVALID_DOMAIN");
        assert_eq!(CalcError::division_by_zero("ratio", "zero capacity").error_code(), "DIVISION_BY_ZERO");
        assert_eq!(CalcError::serialization("bad json").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::division_by_zero("M/φMn", "flexural capacity is zero");
        assert_eq!(error.to_string(), "Division by zero computing M/φMn: flexural capacity is zero");
    }

    #[test]
    fn test_require_helpers() {
        assert!(require_finite("x", f64::NAN).is_err());
        assert!(require_finite("x", f64::INFINITY).is_err());
        assert!(require_positive("x", 0.0).is_err());
        assert_eq!(require_positive("x", 2.5), Ok(2.5));
        assert!(require_non_negative("x", -0.1).is_err());
        assert_eq!(require_non_negative("x", 0.0), Ok(0.0));
    }
}
