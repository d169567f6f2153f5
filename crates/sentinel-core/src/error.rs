//! Error types for sentinel registration and resolution
//!
//! Every failure is surfaced synchronously to the caller. None of them is
//! recoverable inside the registry: a miss is never answered by minting a
//! new identity, and nothing in this crate retries.

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SentinelError>;

/// Errors for sentinel operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SentinelError {
    /// Empty or malformed qualified name
    #[error("invalid sentinel name '{name}': {reason}")]
    InvalidName {
        /// The rejected input
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Name already bound to a sentinel with a conflicting representation
    #[error("sentinel '{name}' already registered as {existing}, refusing {requested}")]
    DuplicateName {
        /// Canonical qualified name
        name: String,
        /// Representation of the instance that stays registered
        existing: String,
        /// Representation the caller asked for
        requested: String,
    },

    /// Name not present in the registry
    #[error("no sentinel registered under '{name}'")]
    Resolution {
        /// Canonical qualified name that missed
        name: String,
    },

    /// Invalid registry configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl SentinelError {
    /// Create an invalid-name error
    #[inline]
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Qualified name the error refers to, if any
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::InvalidName { name, .. }
            | Self::DuplicateName { name, .. }
            | Self::Resolution { name } => Some(name),
            Self::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_name_accessor() {
        let err = SentinelError::Resolution { name: "a.B".into() };
        assert_eq!(err.name(), Some("a.B"));
        assert_eq!(SentinelError::Config("x".into()).name(), None);
    }

    #[test]
    fn duplicate_message_mentions_both_reprs() {
        let err = SentinelError::DuplicateName {
            name: "m.MISSING".into(),
            existing: "<MISSING>".into(),
            requested: "custom".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("m.MISSING"));
        assert!(msg.contains("<MISSING>"));
        assert!(msg.contains("custom"));
    }
}
