//! Error types for the onboarding library.
//!
//! State operations on the wizard never fail: a call that violates its
//! preconditions is ignored. The errors below come from the layers around the
//! controller (parsing raw input, configuring a wizard, joining the
//! provisioning task, serializing snapshots).

use thiserror::Error;

/// Comprehensive error type for onboarding operations.
#[derive(Error, Debug)]
pub enum WizardError {
    /// No form field is known under the given key
    #[error("Unknown field '{key}'")]
    UnknownField { key: String },
    /// A raw value could not be turned into a value for the field
    #[error("Invalid value for field '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The provisioning task ended without signalling completion
    #[error("Provisioning error: {message}")]
    Provisioning { message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating invalid value errors.
pub struct InvalidValueBuilder {
    field: String,
}

impl InvalidValueBuilder {
    /// Create a new invalid value error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WizardError {
        WizardError::InvalidValue {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WizardError {
    /// Creates a builder for invalid value errors.
    pub fn invalid_value(field: impl Into<String>) -> InvalidValueBuilder {
        InvalidValueBuilder::new(field)
    }

    /// Creates an unknown field error.
    pub fn unknown_field(key: impl Into<String>) -> Self {
        Self::UnknownField { key: key.into() }
    }
}

/// Result type alias for onboarding operations
pub type Result<T> = std::result::Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_builder() {
        let err = WizardError::invalid_value("companySize").with_reason("no such size");
        assert_eq!(
            err.to_string(),
            "Invalid value for field 'companySize': no such size"
        );
    }

    #[test]
    fn test_unknown_field_message() {
        let err = WizardError::unknown_field("favouriteColour");
        assert_eq!(err.to_string(), "Unknown field 'favouriteColour'");
    }
}
