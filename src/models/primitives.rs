//! Primitive types and newtypes for type-safe API interactions.

use std::fmt;

use uuid::Uuid;

/// An opaque session key correlating all requests within one login lifetime.
///
/// Keys are generated client-side and embedded verbatim in every request
/// body. A fresh key must be generated per login attempt; a `Session`'s key
/// never changes for its lifetime.
///
/// # Example
///
/// ```
/// use qube_pm_rs::SessionKey;
///
/// let key = SessionKey::generate();
/// assert_ne!(key, SessionKey::generate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey(String);

impl SessionKey {
    /// Generate a fresh random session key (UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing key, e.g. one agreed with the vendor out of band.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SessionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_fresh_per_call() {
        // The key default must never be evaluated once and shared.
        let a = SessionKey::generate();
        let b = SessionKey::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_round_trips() {
        let key = SessionKey::new("0c5ad33c-5cf4-4a53-9de2-05b0f47510f1");
        assert_eq!(key.to_string(), "0c5ad33c-5cf4-4a53-9de2-05b0f47510f1");
        assert_eq!(key.as_str(), key.as_ref());
    }
}
