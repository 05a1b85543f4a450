#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]
#![warn(missing_docs, missing_debug_implementations)]

//! Validation profiles, field controllers, and form sessions for the `PopX`
//! account screens, plus the user directory they submit into.

pub mod config;
pub mod directory;
pub mod forms;
pub mod models;
pub mod validation;

pub use directory::{
    ChainedCredentials, CredentialLookup, JsonFileStore, KeyValueStore, MemoryStore,
    StaticCredentials, StoreError, USERS_KEY, UserDirectory,
};
pub use forms::{CreateAccountForm, FormError, FormSession, LoginForm};
pub use models::{FieldError, UserRecord};
pub use validation::{
    FieldController, FieldOptions, FieldState, InputKind, Pattern, ProfileError,
    ProfileOverrides, ValidationProfile,
};
