//! The namespaced user list.

use tracing::{debug, info};

use super::store::{KeyValueStore, StoreError};
use crate::models::UserRecord;

/// Key the user list is stored under.
pub const USERS_KEY: &str = "popx_users";

/// The user list kept under one namespaced key of a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct UserDirectory<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> UserDirectory<S> {
    /// A directory using [`USERS_KEY`].
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, USERS_KEY)
    }

    /// A directory using a custom key.
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The key records are stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the directory, returning the store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Every stored record, in insertion order.
    ///
    /// # Errors
    /// Propagates store read failures.
    pub fn all(&self) -> Result<Vec<UserRecord>, StoreError> {
        self.store.get(&self.key)
    }

    /// The record registered under `email`, compared case-insensitively.
    ///
    /// # Errors
    /// Propagates store read failures.
    pub fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self
            .all()?
            .into_iter()
            .find(|record| record.email_matches(email)))
    }

    /// Appends `record` to the stored list.
    ///
    /// No duplicate check happens here; callers look up the email first.
    ///
    /// # Errors
    /// Propagates store read or write failures.
    pub fn append(&mut self, record: UserRecord) -> Result<(), StoreError> {
        let mut records = self.all()?;
        debug!(existing = records.len(), "appending user record");
        records.push(record);
        self.store.put(&self.key, records)?;
        info!(key = %self.key, "user record stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::MemoryStore;

    fn record(name: &str, email: &str) -> UserRecord {
        UserRecord {
            full_name: name.to_string(),
            phone_number: "1234567890".to_string(),
            email: email.to_string(),
            password: "Password123".to_string(),
            company_name: String::new(),
            is_agency: false,
        }
    }

    #[test]
    fn test_new_directory_is_empty() {
        let directory = UserDirectory::new(MemoryStore::new());
        assert_eq!(directory.key(), "popx_users");
        assert!(directory.all().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_find_case_insensitive() {
        let mut directory = UserDirectory::new(MemoryStore::new());
        directory.append(record("Marry Doe", "marry@gmail.com")).unwrap();
        directory.append(record("John Roe", "john@example.com")).unwrap();

        let found = directory.find_by_email("MARRY@GMAIL.COM").unwrap();
        assert_eq!(found.map(|r| r.full_name), Some("Marry Doe".to_string()));
        assert!(directory.find_by_email("nobody@example.com").unwrap().is_none());
        assert_eq!(directory.all().unwrap().len(), 2);
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let store = MemoryStore::with_records(USERS_KEY, vec![record("A", "a@b.co")]);
        let directory = UserDirectory::with_key(store, "other_users");
        assert!(directory.all().unwrap().is_empty());
        assert_eq!(directory.into_store().get(USERS_KEY).unwrap().len(), 1);
    }
}
