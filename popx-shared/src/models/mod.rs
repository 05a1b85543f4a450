//! Records and error values shared across the form layer.

pub mod errors;
pub mod user;

pub use errors::FieldError;
pub use user::{AccountSummary, UserRecord};
