//! # Directory
//!
//! The collaborators the forms submit into: a key-value store holding user
//! record lists, the namespaced user directory on top of it, and credential
//! lookups used by the login form.

pub mod credentials;
pub mod store;
pub mod users;

pub use credentials::{ChainedCredentials, CredentialLookup, StaticCredentials};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use users::{USERS_KEY, UserDirectory};
