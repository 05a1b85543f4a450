//! Login: resolves an email/password pair through a credential lookup.

use tracing::{info, warn};

use super::{FormError, FormResult, FormSession};
use crate::directory::CredentialLookup;
use crate::models::UserRecord;
use crate::validation::{FieldController, FieldOptions, InputKind};

/// Field key for the login email.
pub const EMAIL: &str = "email";
/// Field key for the login password.
pub const PASSWORD: &str = "password";

const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter both email and password";

/// The login form bound to a credential lookup.
#[derive(Debug)]
pub struct LoginForm<C> {
    session: FormSession,
    credentials: C,
}

impl<C: CredentialLookup> LoginForm<C> {
    /// Builds the form.
    ///
    /// # Errors
    /// Returns [`FormError::Profile`] if a field's options are rejected.
    pub fn new(credentials: C) -> FormResult<Self> {
        // Existing accounts may predate the sign-up password rule, so login
        // only requires a non-empty password.
        let session = FormSession::new()
            .with_field(
                EMAIL,
                FieldController::new(
                    FieldOptions::new(InputKind::Email)
                        .required()
                        .with_label("Email Address")
                        .with_placeholder("Enter email address"),
                )?,
            )?
            .with_field(
                PASSWORD,
                FieldController::new(
                    FieldOptions::new(InputKind::Password)
                        .required()
                        .with_label("Password")
                        .with_placeholder("Enter password")
                        .with_pattern(r"^.+$"),
                )?,
            )?;

        Ok(Self {
            session,
            credentials,
        })
    }

    /// The underlying field session.
    #[must_use]
    pub const fn session(&self) -> &FormSession {
        &self.session
    }

    /// Mutable access for focus/blur handling.
    pub fn session_mut(&mut self) -> &mut FormSession {
        &mut self.session
    }

    /// Edits one field and clears the form-level message.
    ///
    /// # Errors
    /// Returns [`FormError::UnknownField`] for an unregistered key.
    pub fn set_value(&mut self, key: &str, text: impl Into<String>) -> FormResult<()> {
        self.session.set_value(key, text)
    }

    /// The form-level message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.session.form_error()
    }

    /// Resolves the entered credentials.
    ///
    /// Unknown emails and wrong passwords produce the same message.
    ///
    /// # Errors
    /// - [`FormError::RequiredFieldMissing`] when either input is empty.
    /// - [`FormError::Validation`] when the email is malformed.
    /// - [`FormError::AuthenticationFailure`] when no account matches.
    pub fn submit(&mut self) -> FormResult<UserRecord> {
        if self.session.value(EMAIL).is_empty() || self.session.value(PASSWORD).is_empty() {
            self.session.set_form_error(MISSING_CREDENTIALS_MESSAGE);
            return Err(FormError::RequiredFieldMissing {
                message: MISSING_CREDENTIALS_MESSAGE.to_string(),
            });
        }

        let failures = self.session.validate_all();
        if !failures.is_empty() {
            return Err(FormError::Validation(failures));
        }

        let email = self.session.value(EMAIL);
        let password = self.session.value(PASSWORD);
        if let Some(user) = self.credentials.find_by_email_and_password(email, password) {
            info!("login succeeded");
            Ok(user)
        } else {
            warn!("login rejected");
            let message = FormError::AuthenticationFailure.to_string();
            self.session.set_form_error(message);
            Err(FormError::AuthenticationFailure)
        }
    }
}
