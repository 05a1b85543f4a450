//! Per-field failure reasons.

use thiserror::Error;

/// Why a single field failed its check.
///
/// Both variants carry the message shown next to the field; `Display`
/// yields just that message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field is required but empty.
    #[error("{message}")]
    Required {
        /// Inline message for the missing value.
        message: String,
    },

    /// The value is present but does not satisfy the field's pattern.
    #[error("{message}")]
    Invalid {
        /// Inline message from the field's validation profile.
        message: String,
    },
}

impl FieldError {
    /// Creates a required-field error.
    #[must_use]
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    /// Creates a pattern-mismatch error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// The inline message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Required { message } | Self::Invalid { message } => message,
        }
    }

    /// Returns `true` for [`FieldError::Required`].
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self, Self::Required { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let error = FieldError::required("Full Name is required");
        assert_eq!(error.to_string(), "Full Name is required");
        assert_eq!(error.message(), "Full Name is required");
        assert!(error.is_required());
    }

    #[test]
    fn test_invalid_is_not_required() {
        let error = FieldError::invalid("Please enter a valid email address");
        assert!(!error.is_required());
        assert_eq!(
            format!("{error}"),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_equality_and_clone() {
        let error = FieldError::invalid("Invalid input");
        assert_eq!(error.clone(), error);
        assert_ne!(error, FieldError::required("Invalid input"));
    }
}
