//! Wrapper type that carries validity as a property of the value.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::rules;

/// A candidate password as typed by a new user.
///
/// Unlike a wrapper that rejects bad input at construction, any string is a
/// legitimate candidate here; construction never fails. Validity is a
/// question you ask the value, via [`Password::is_valid`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
pub struct Password(String);

impl Password {
    pub fn new(candidate: impl Into<String>) -> Self {
        Self(candidate.into())
    }

    /// Whether the candidate satisfies the whole rule set
    pub fn is_valid(&self) -> bool {
        rules::is_valid(&self.0)
    }

    /// Returns the raw candidate text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Password {
    fn from(candidate: String) -> Self {
        Self(candidate)
    }
}

impl From<&str> for Password {
    fn from(candidate: &str) -> Self {
        Self(candidate.to_owned())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_agrees_with_predicate() {
        let test_cases = vec!["PythonR0cks!", "Ab1!23", "short1!", "NoDigits!", ""];

        for candidate in test_cases {
            assert_eq!(
                Password::new(candidate).is_valid(),
                rules::is_valid(candidate),
                "Wrapper and predicate disagree on '{}'",
                candidate
            );
        }
    }

    #[test]
    fn test_construction_never_fails() {
        // Invalid candidates are ordinary values, not errors
        let password = Password::from("");
        assert!(!password.is_valid());

        let password = Password::from(String::from("short"));
        assert!(!password.is_valid());
    }

    #[test]
    fn test_password_display() {
        let password = Password::new("JavaR0cks!");
        assert_eq!(password.to_string(), "JavaR0cks!");
    }

    #[test]
    fn test_password_as_ref() {
        let password = Password::new("JavaR0cks!");
        assert_eq!(password.as_ref(), "JavaR0cks!");
        assert_eq!(password.as_str(), "JavaR0cks!");
    }

    #[test]
    fn test_serde_round_trip() {
        let password = Password::new("PythonR0cks!");

        let json = serde_json::to_string(&password).unwrap();
        assert_eq!(json, "\"PythonR0cks!\"");

        let back: Password = serde_json::from_str(&json).unwrap();
        assert_eq!(back, password);
        assert!(back.is_valid());
    }
}
