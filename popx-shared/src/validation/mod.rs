//! # Validation
//!
//! Input kinds, their built-in validation profiles, and the field
//! controller that derives presentation state from a value and its
//! interaction flags.

pub mod field;
pub mod pattern;
pub mod profile;

pub use field::{FieldController, FieldOptions, FieldState};
pub use pattern::{Pattern, ProfileError};
pub use profile::{InputKind, ProfileOverrides, ValidationProfile, builtin, resolve, resolve_named};
