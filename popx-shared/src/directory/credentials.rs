//! Credential lookups for the login form.

use tracing::error;

use super::store::KeyValueStore;
use super::users::UserDirectory;
use crate::models::UserRecord;

/// Resolves a login attempt to a user record.
///
/// Email comparison ignores case; the password must match exactly. Passwords
/// are stored and compared in plaintext.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialLookup {
    /// The record matching both `email` and `password`, if any.
    fn find_by_email_and_password(&self, email: &str, password: &str) -> Option<UserRecord>;
}

/// A fixed list of accounts.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    users: Vec<UserRecord>,
}

impl StaticCredentials {
    /// Lookup over `users`.
    #[must_use]
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// The single demo account available out of the box.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(vec![UserRecord {
            full_name: "Marry Doe".to_string(),
            phone_number: "1234567890".to_string(),
            email: "marry@gmail.com".to_string(),
            password: "Password123".to_string(),
            company_name: "PopX Inc".to_string(),
            is_agency: true,
        }])
    }

    /// The accounts in this list.
    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }
}

impl CredentialLookup for StaticCredentials {
    fn find_by_email_and_password(&self, email: &str, password: &str) -> Option<UserRecord> {
        self.users
            .iter()
            .find(|user| user.email_matches(email) && user.password == password)
            .cloned()
    }
}

impl<S: KeyValueStore> CredentialLookup for UserDirectory<S> {
    fn find_by_email_and_password(&self, email: &str, password: &str) -> Option<UserRecord> {
        match self.find_by_email(email) {
            Ok(found) => found.filter(|user| user.password == password),
            Err(err) => {
                error!(error = %err, "user directory unavailable during login");
                None
            }
        }
    }
}

/// Tries `primary`, then `fallback`.
#[derive(Debug, Clone)]
pub struct ChainedCredentials<A, B> {
    primary: A,
    fallback: B,
}

impl<A, B> ChainedCredentials<A, B> {
    /// Chains two lookups.
    #[must_use]
    pub const fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: CredentialLookup, B: CredentialLookup> CredentialLookup for ChainedCredentials<A, B> {
    fn find_by_email_and_password(&self, email: &str, password: &str) -> Option<UserRecord> {
        self.primary
            .find_by_email_and_password(email, password)
            .or_else(|| self.fallback.find_by_email_and_password(email, password))
    }
}
