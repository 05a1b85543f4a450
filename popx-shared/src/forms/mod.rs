//! # Forms
//!
//! Field aggregation and the two account workflows built on it.

pub mod create_account;
pub mod login;
pub mod session;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::directory::StoreError;
use crate::models::FieldError;
use crate::validation::ProfileError;

pub use create_account::CreateAccountForm;
pub use login::LoginForm;
pub use session::FormSession;

/// Result type alias for form operations.
pub type FormResult<T> = Result<T, FormError>;

/// Everything that can stop a form from being edited or submitted.
#[derive(Debug, Error)]
pub enum FormError {
    /// One or more fields failed their required/pattern checks.
    #[error("{} field(s) need attention", .0.len())]
    Validation(BTreeMap<String, FieldError>),

    /// A form-level required input was missing.
    #[error("{message}")]
    RequiredFieldMissing {
        /// Form-level message.
        message: String,
    },

    /// The submitted email is already registered.
    #[error("an account with email '{email}' already exists")]
    DuplicateRecord {
        /// The conflicting email as submitted.
        email: String,
    },

    /// No account matched the submitted credentials.
    #[error("Invalid email or password")]
    AuthenticationFailure,

    /// No field is registered under the key.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// A field is already registered under the key.
    #[error("field '{0}' is already registered")]
    DuplicateField(String),

    /// A field's options were rejected.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// The user directory failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl FormError {
    /// Field-level failures, when this is a validation error.
    #[must_use]
    pub fn field_errors(&self) -> Option<&BTreeMap<String, FieldError>> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_counts_fields() {
        let mut errors = BTreeMap::new();
        errors.insert("email".to_string(), FieldError::required("Email is required"));
        errors.insert("password".to_string(), FieldError::invalid("too short"));
        let error = FormError::Validation(errors);
        assert_eq!(error.to_string(), "2 field(s) need attention");
        assert_eq!(error.field_errors().map(BTreeMap::len), Some(2));
    }

    #[test]
    fn test_authentication_failure_message() {
        assert_eq!(
            FormError::AuthenticationFailure.to_string(),
            "Invalid email or password"
        );
        assert!(FormError::AuthenticationFailure.field_errors().is_none());
    }
}
