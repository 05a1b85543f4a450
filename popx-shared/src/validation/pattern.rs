//! Compiled matching rules.

use regex::Regex;
use thiserror::Error;

/// Errors raised while building a validation profile.
///
/// These only occur at construction time; evaluating a field never fails.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// An override pattern is not a valid regular expression.
    #[error("invalid validation pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// The compiler's diagnostic.
        #[source]
        source: regex::Error,
    },
}

/// A compiled matching rule.
///
/// Matching follows regular-expression `test` semantics: the pattern
/// decides its own anchoring. Built-in patterns are fully anchored.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles `source` into a pattern.
    ///
    /// # Errors
    /// Returns [`ProfileError::InvalidPattern`] if `source` does not compile.
    pub fn new(source: &str) -> Result<Self, ProfileError> {
        Regex::new(source)
            .map(|regex| Self { regex })
            .map_err(|source_error| ProfileError::InvalidPattern {
                pattern: source.to_string(),
                source: source_error,
            })
    }

    /// Returns `true` if `value` satisfies the pattern.
    #[must_use]
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// The pattern source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pattern_matches() {
        let pattern = Pattern::new(r"^[0-9]+$").unwrap();
        assert!(pattern.is_match("12345"));
        assert!(!pattern.is_match("12a45"));
        assert_eq!(pattern.as_str(), r"^[0-9]+$");
    }

    #[test]
    fn test_unanchored_pattern_matches_substring() {
        let pattern = Pattern::new("abc").unwrap();
        assert!(pattern.is_match("xxabcxx"));
    }

    #[test]
    fn test_malformed_pattern_is_rejected() {
        let error = Pattern::new("[a-z").unwrap_err();
        match &error {
            ProfileError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "[a-z"),
        }
        assert!(error.to_string().contains("invalid validation pattern '[a-z'"));
    }

    #[test]
    fn test_equality_by_source() {
        assert_eq!(Pattern::new("^a$").unwrap(), Pattern::new("^a$").unwrap());
        assert_ne!(Pattern::new("^a$").unwrap(), Pattern::new("^b$").unwrap());
    }
}
