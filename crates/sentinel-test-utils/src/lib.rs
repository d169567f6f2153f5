//! Testing utilities for the sentinel workspace
//!
//! Shared test helpers and fixtures.

#![allow(missing_docs)]

use sentinel_core::{RegistryConfig, SentinelRegistry};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber honouring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

pub fn fresh_registry() -> SentinelRegistry {
    SentinelRegistry::new()
}

pub fn fresh_registry_with(config: RegistryConfig) -> SentinelRegistry {
    SentinelRegistry::with_config(config)
}

/// Qualified name no other test will ever use, for tests that share the
/// global registry
pub fn unique_name(prefix: &str) -> String {
    format!("tests.{prefix}.S{}", uuid::Uuid::new_v4().simple())
}
