//! Account creation: collects the sign-up fields and appends a new record
//! to the user directory when the email is not yet registered.

use tracing::{info, warn};

use super::{FormError, FormResult, FormSession};
use crate::directory::{KeyValueStore, UserDirectory};
use crate::models::UserRecord;
use crate::validation::{FieldController, FieldOptions, InputKind};

/// Field key for the full name.
pub const FULL_NAME: &str = "fullName";
/// Field key for the phone number.
pub const PHONE_NUMBER: &str = "phoneNumber";
/// Field key for the email address.
pub const EMAIL: &str = "email";
/// Field key for the password.
pub const PASSWORD: &str = "password";
/// Field key for the optional company name.
pub const COMPANY_NAME: &str = "companyName";

const DUPLICATE_EMAIL_MESSAGE: &str = "Email already exists";

/// The sign-up form bound to a user directory.
#[derive(Debug)]
pub struct CreateAccountForm<S> {
    session: FormSession,
    is_agency: bool,
    directory: UserDirectory<S>,
}

impl<S: KeyValueStore> CreateAccountForm<S> {
    /// Builds the form. `show_success` turns on success indication for the
    /// required fields.
    ///
    /// # Errors
    /// Returns [`FormError::Profile`] if a field's options are rejected.
    pub fn new(directory: UserDirectory<S>, show_success: bool) -> FormResult<Self> {
        let required = |options: FieldOptions| {
            let options = options.required();
            if show_success {
                options.show_success()
            } else {
                options
            }
        };

        let session = FormSession::new()
            .with_field(
                FULL_NAME,
                FieldController::new(required(
                    FieldOptions::new(InputKind::Name).with_label("Full Name*"),
                ))?,
            )?
            .with_field(
                PHONE_NUMBER,
                FieldController::new(required(
                    FieldOptions::new(InputKind::Numeric)
                        .with_label("Phone number*")
                        .with_required_message("Phone Number is required"),
                ))?,
            )?
            .with_field(
                EMAIL,
                FieldController::new(required(
                    FieldOptions::new(InputKind::Email)
                        .with_label("Email address*")
                        .with_error_message("Invalid email format")
                        .with_required_message("Email is required"),
                ))?,
            )?
            .with_field(
                PASSWORD,
                FieldController::new(required(
                    FieldOptions::new(InputKind::Password).with_label("Password*"),
                ))?,
            )?
            .with_field(
                COMPANY_NAME,
                FieldController::new(
                    FieldOptions::new(InputKind::Address).with_label("Company name"),
                )?,
            )?;

        Ok(Self {
            session,
            is_agency: false,
            directory,
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

    /// Edits one field.
    ///
    /// # Errors
    /// Returns [`FormError::UnknownField`] for an unregistered key.
    pub fn set_value(&mut self, key: &str, text: impl Into<String>) -> FormResult<()> {
        self.session.set_value(key, text)
    }

    /// Answers the "are you an agency" question.
    pub fn set_agency(&mut self, is_agency: bool) {
        self.is_agency = is_agency;
    }

    /// Current agency answer.
    #[must_use]
    pub const fn is_agency(&self) -> bool {
        self.is_agency
    }

    /// The directory this form submits into.
    #[must_use]
    pub fn directory(&self) -> &UserDirectory<S> {
        &self.directory
    }

    /// Consumes the form, returning the directory.
    #[must_use]
    pub fn into_directory(self) -> UserDirectory<S> {
        self.directory
    }

    /// The record the current values describe.
    #[must_use]
    pub fn record(&self) -> UserRecord {
        UserRecord {
            full_name: self.session.value(FULL_NAME).to_string(),
            phone_number: self.session.value(PHONE_NUMBER).to_string(),
            email: self.session.value(EMAIL).to_string(),
            password: self.session.value(PASSWORD).to_string(),
            company_name: self.session.value(COMPANY_NAME).to_string(),
            is_agency: self.is_agency,
        }
    }

    /// Validates, checks for an existing account, and appends the record.
    ///
    /// On a duplicate email the email field carries the error and the
    /// directory is left untouched.
    ///
    /// # Errors
    /// - [`FormError::Validation`] when any field fails its check.
    /// - [`FormError::DuplicateRecord`] when the email is registered.
    /// - [`FormError::Store`] when the directory cannot be read or written.
    pub fn submit(&mut self) -> FormResult<UserRecord> {
        let failures = self.session.validate_all();
        if !failures.is_empty() {
            warn!(fields = ?failures.keys().collect::<Vec<_>>(), "sign-up rejected by validation");
            return Err(FormError::Validation(failures));
        }

        let record = self.record();
        self.session.clear_error(EMAIL)?;
        if self.directory.find_by_email(&record.email)?.is_some() {
            self.session.attach_error(EMAIL, DUPLICATE_EMAIL_MESSAGE)?;
            warn!("sign-up rejected: email already registered");
            return Err(FormError::DuplicateRecord {
                email: record.email,
            });
        }

        self.directory.append(record.clone())?;
        info!(agency = record.is_agency, "account created");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::store::MockKeyValueStore;
    use crate::directory::{MemoryStore, USERS_KEY};
    use crate::validation::FieldState;

    fn marry() -> UserRecord {
        UserRecord {
            full_name: "Marry Doe".to_string(),
            phone_number: "1234567890".to_string(),
            email: "marry@gmail.com".to_string(),
            password: "Password123".to_string(),
            company_name: "PopX Inc".to_string(),
            is_agency: true,
        }
    }

    fn fill(form: &mut CreateAccountForm<impl KeyValueStore>, email: &str) {
        form.set_value(FULL_NAME, "Jane Roe").unwrap();
        form.set_value(PHONE_NUMBER, "5550100").unwrap();
        form.set_value(EMAIL, email).unwrap();
        form.set_value(PASSWORD, "supersecret").unwrap();
    }

    #[test]
    fn test_empty_submit_lists_required_fields() {
        let mut form = CreateAccountForm::new(UserDirectory::new(MemoryStore::new()), true).unwrap();
        let error = form.submit().unwrap_err();
        let failures = error.field_errors().unwrap();

        assert_eq!(failures.len(), 4);
        assert_eq!(failures[FULL_NAME].message(), "Full Name is required");
        assert_eq!(failures[PHONE_NUMBER].message(), "Phone Number is required");
        assert_eq!(failures[EMAIL].message(), "Email is required");
        assert_eq!(failures[PASSWORD].message(), "Password is required");
        assert!(!failures.contains_key(COMPANY_NAME));
        assert!(form.directory().all().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_email_and_short_password() {
        let mut form = CreateAccountForm::new(UserDirectory::new(MemoryStore::new()), true).unwrap();
        fill(&mut form, "jane-at-example");
        form.set_value(PASSWORD, "short").unwrap();

        let error = form.submit().unwrap_err();
        let failures = error.field_errors().unwrap();
        assert_eq!(failures[EMAIL].message(), "Invalid email format");
        assert_eq!(
            failures[PASSWORD].message(),
            "Password must be at least 8 characters"
        );
    }

    #[test]
    fn test_successful_submit_appends_record() {
        let mut form = CreateAccountForm::new(UserDirectory::new(MemoryStore::new()), true).unwrap();
        fill(&mut form, "jane@example.com");
        form.set_value(COMPANY_NAME, "Roe and Co.").unwrap();
        form.set_agency(true);

        let record = form.submit().unwrap();
        assert_eq!(record.email, "jane@example.com");
        assert!(record.is_agency);
        assert_eq!(record.company_name, "Roe and Co.");
        assert!(form.session().is_valid());

        let stored = form.into_directory().all().unwrap();
        assert_eq!(stored, vec![record]);
    }

    #[test]
    fn test_duplicate_email_leaves_directory_unchanged() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .withf(|key| key == USERS_KEY)
            .returning(|_| Ok(vec![marry()]));
        store.expect_put().never();

        let mut form = CreateAccountForm::new(UserDirectory::new(store), true).unwrap();
        fill(&mut form, "Marry@Gmail.com");

        let error = form.submit().unwrap_err();
        assert!(matches!(error, FormError::DuplicateRecord { ref email } if email == "Marry@Gmail.com"));
        assert!(!form.session().is_valid());

        let email = form.session().field(EMAIL).unwrap();
        assert_eq!(email.state(), FieldState::Error);
        assert_eq!(email.error_text(), Some("Email already exists"));
    }

    #[test]
    fn test_duplicate_error_clears_on_edit() {
        let store = MemoryStore::with_records(USERS_KEY, vec![marry()]);
        let mut form = CreateAccountForm::new(UserDirectory::new(store), false).unwrap();
        fill(&mut form, "marry@gmail.com");
        assert!(form.submit().is_err());

        form.set_value(EMAIL, "marry.new@gmail.com").unwrap();
        assert!(form.session().field(EMAIL).unwrap().error_text().is_none());
        assert!(form.submit().is_ok());
        assert_eq!(form.directory().all().unwrap().len(), 2);
    }

    #[test]
    fn test_resubmit_drops_stale_duplicate_error() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Ok(vec![marry()]));
        store.expect_get().returning(|_| Ok(Vec::new()));
        store.expect_put().times(1).returning(|_, _| Ok(()));

        let mut form = CreateAccountForm::new(UserDirectory::new(store), true).unwrap();
        fill(&mut form, "marry@gmail.com");
        assert!(matches!(form.submit(), Err(FormError::DuplicateRecord { .. })));

        assert!(form.submit().is_ok());
        let email = form.session().field(EMAIL).unwrap();
        assert_eq!(email.external_error(), None);
        assert_eq!(email.state(), FieldState::Success);
    }

    #[test]
    fn test_success_indication_follows_flag() {
        let mut with = CreateAccountForm::new(UserDirectory::new(MemoryStore::new()), true).unwrap();
        with.set_value(FULL_NAME, "Jane").unwrap();
        assert_eq!(
            with.session().field(FULL_NAME).unwrap().state(),
            FieldState::Success
        );

        let mut without =
            CreateAccountForm::new(UserDirectory::new(MemoryStore::new()), false).unwrap();
        without.set_value(FULL_NAME, "Jane").unwrap();
        assert_eq!(
            without.session().field(FULL_NAME).unwrap().state(),
            FieldState::Default
        );
    }
}
