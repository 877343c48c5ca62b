//! User Password Value Object
//!
//! The stored credential. It is kept and compared exactly as submitted;
//! the type exists so the value cannot be logged through `Debug` and is
//! never serialized into a response.

use std::fmt;

/// Stored user password
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(String);

impl UserPassword {
    /// Wrap a submitted password verbatim
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Check a submitted password against the stored one.
    ///
    /// Plain string equality: the submission must match byte for byte.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    /// Get the raw value for database storage
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_exact_value_only() {
        let password = UserPassword::new("x");
        assert!(password.matches("x"));
        assert!(!password.matches("X"));
        assert!(!password.matches("x "));
        assert!(!password.matches(""));
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = UserPassword::new("hunter2");
        let debug = format!("{:?}", password);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("hunter2"));
    }
}
