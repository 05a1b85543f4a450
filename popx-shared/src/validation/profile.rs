//! Input kinds and the built-in profile table.
//!
//! Each kind maps to one immutable profile holding its placeholder, its
//! failure message, and its pattern. Per-field overrides are layered on
//! top by [`resolve`].

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use super::pattern::Pattern;

/// The validation preset a field is configured with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum InputKind {
    /// Anything alphanumeric. Used when no preset applies.
    #[default]
    FreeForm,
    /// Letters and spaces.
    Name,
    /// Letters, digits, and underscores.
    Username,
    /// Letters, digits, spaces, and `, . / -`.
    Address,
    /// Integer or decimal number.
    Numeric,
    /// `local@domain.tld` shape.
    Email,
    /// At least eight characters of anything.
    Password,
}

impl InputKind {
    /// Parses a kind name, falling back to [`InputKind::FreeForm`] for
    /// anything unrecognised.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.trim().parse().unwrap_or_default()
    }
}

impl Serialize for InputKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> Deserialize<'de> for InputKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Placeholder, error message, and pattern for one input kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationProfile {
    kind: InputKind,
    placeholder: String,
    error_message: String,
    pattern: Pattern,
}

impl ValidationProfile {
    /// The kind this profile was resolved from.
    #[must_use]
    pub const fn kind(&self) -> InputKind {
        self.kind
    }

    /// Hint text shown in an empty input.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Message shown when a value fails the pattern.
    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// The matching rule for non-empty values.
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns `true` if `value` satisfies this profile's pattern.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}

/// Per-field replacements for parts of a built-in profile.
///
/// The pattern is already compiled, so resolving a profile cannot fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileOverrides {
    /// Replacement hint text.
    pub placeholder: Option<String>,
    /// Replacement failure message.
    pub error_message: Option<String>,
    /// Replacement matching rule.
    pub pattern: Option<Pattern>,
}

fn built_in_parts(kind: InputKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        InputKind::FreeForm => ("Enter text", "Invalid input", r"^[a-zA-Z0-9]+$"),
        InputKind::Name => (
            "Enter your full name",
            "Name should only contain letters and spaces",
            r"^[a-zA-Z\s]+$",
        ),
        InputKind::Username => (
            "Enter your username",
            "Username can only contain letters, numbers, and underscores",
            r"^[a-zA-Z0-9_]+$",
        ),
        InputKind::Address => (
            "Enter your address",
            "Address can only contain letters, numbers, spaces, commas, periods, slashes, and dashes",
            r"^[a-zA-Z0-9\s,./-]+$",
        ),
        InputKind::Numeric => (
            "Enter a number",
            "Only numeric values are allowed",
            r"^[0-9]+(\.[0-9]+)?$",
        ),
        InputKind::Email => (
            "Enter your email",
            "Please enter a valid email address",
            r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
        ),
        InputKind::Password => (
            "Enter your password",
            "Password must be at least 8 characters",
            r"^.{8,}$",
        ),
    }
}

static BUILT_IN: Lazy<HashMap<InputKind, ValidationProfile>> = Lazy::new(|| {
    InputKind::iter()
        .map(|kind| {
            let (placeholder, error_message, pattern) = built_in_parts(kind);
            let profile = ValidationProfile {
                kind,
                placeholder: placeholder.to_string(),
                error_message: error_message.to_string(),
                pattern: Pattern::new(pattern).expect("built-in patterns compile"),
            };
            (kind, profile)
        })
        .collect()
});

/// The built-in profile for `kind`.
#[must_use]
pub fn builtin(kind: InputKind) -> &'static ValidationProfile {
    // Every kind is inserted when the table is built.
    &BUILT_IN[&kind]
}

/// Resolves the effective profile for `kind`, substituting any overrides.
#[must_use]
pub fn resolve(kind: InputKind, overrides: &ProfileOverrides) -> ValidationProfile {
    let base = builtin(kind);
    ValidationProfile {
        kind,
        placeholder: overrides
            .placeholder
            .clone()
            .unwrap_or_else(|| base.placeholder.clone()),
        error_message: overrides
            .error_message
            .clone()
            .unwrap_or_else(|| base.error_message.clone()),
        pattern: overrides
            .pattern
            .clone()
            .unwrap_or_else(|| base.pattern.clone()),
    }
}

/// Like [`resolve`], but takes a kind name. Unknown names resolve to the
/// free-form profile.
#[must_use]
pub fn resolve_named(name: &str, overrides: &ProfileOverrides) -> ValidationProfile {
    resolve(InputKind::from_name(name), overrides)
}
