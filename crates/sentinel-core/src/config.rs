//! Registry configuration

use crate::error::{Result, SentinelError};
use crate::name::NamePolicy;
use serde::{Deserialize, Serialize};

/// Default upper bound on canonical name length, in bytes
pub const DEFAULT_MAX_NAME_LEN: usize = 256;

/// Configuration for a [`SentinelRegistry`](crate::SentinelRegistry)
///
/// # Example
/// ```
/// use sentinel_core::{NamePolicy, RegistryConfig};
///
/// let config = RegistryConfig::from_toml_str(r#"
///     name_policy = "lenient"
///     create_on_resolve = true
/// "#).unwrap();
///
/// assert_eq!(config.name_policy, NamePolicy::Lenient);
/// assert_eq!(config.max_name_len, 256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Segment validation rules
    pub name_policy: NamePolicy,
    /// Maximum canonical name length in bytes
    pub max_name_len: usize,
    /// Allocate a fresh sentinel when a resolve misses instead of failing
    pub create_on_resolve: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            name_policy: NamePolicy::Identifier,
            max_name_len: DEFAULT_MAX_NAME_LEN,
            create_on_resolve: false,
        }
    }
}

impl RegistryConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With name policy
    #[inline]
    #[must_use]
    pub fn with_name_policy(mut self, policy: NamePolicy) -> Self {
        self.name_policy = policy;
        self
    }

    /// With maximum name length
    #[inline]
    #[must_use]
    pub fn with_max_name_len(mut self, max: usize) -> Self {
        self.max_name_len = max;
        self
    }

    /// With create-on-resolve behavior
    #[inline]
    #[must_use]
    pub fn with_create_on_resolve(mut self, enabled: bool) -> Self {
        self.create_on_resolve = enabled;
        self
    }

    /// Check the configuration is usable
    ///
    /// # Errors
    /// Returns [`SentinelError::Config`] if `max_name_len` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_name_len == 0 {
            return Err(SentinelError::Config(
                "max_name_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse from TOML, filling missing fields with defaults
    ///
    /// # Errors
    /// Returns [`SentinelError::Config`] on malformed TOML, unknown keys or a
    /// configuration that fails [`validate`](Self::validate).
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| SentinelError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RegistryConfig::new();
        assert_eq!(config.name_policy, NamePolicy::Identifier);
        assert_eq!(config.max_name_len, DEFAULT_MAX_NAME_LEN);
        assert!(!config.create_on_resolve);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = RegistryConfig::new()
            .with_name_policy(NamePolicy::Lenient)
            .with_max_name_len(32)
            .with_create_on_resolve(true);

        assert_eq!(config.name_policy, NamePolicy::Lenient);
        assert_eq!(config.max_name_len, 32);
        assert!(config.create_on_resolve);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(RegistryConfig::from_toml_str("").unwrap(), RegistryConfig::default());
    }

    #[test]
    fn toml_overrides() {
        let config = RegistryConfig::from_toml_str("max_name_len = 64\n").unwrap();
        assert_eq!(config.max_name_len, 64);
        assert_eq!(config.name_policy, NamePolicy::Identifier);
    }

    #[test]
    fn toml_rejects_zero_length_limit() {
        let err = RegistryConfig::from_toml_str("max_name_len = 0").unwrap_err();
        assert!(matches!(err, SentinelError::Config(_)));
    }

    #[test]
    fn toml_rejects_unknown_keys_and_policies() {
        assert!(RegistryConfig::from_toml_str("colour = \"red\"").is_err());
        assert!(RegistryConfig::from_toml_str("name_policy = \"anything\"").is_err());
    }
}
