//! By-reference serde support
//!
//! A sentinel serializes as its canonical qualified name and nothing else.
//! Deserializing looks the name up in a registry and hands back the bound
//! instance, so identity survives the round trip. A structurally rebuilt
//! copy would compare unequal to every live handle.

use crate::registry::SentinelRegistry;
use crate::sentinel::Sentinel;
use serde::de::{self, DeserializeSeed, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

impl Serialize for Sentinel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.qualified_name().as_str())
    }
}

/// Resolves against [`SentinelRegistry::global`]
impl<'de> Deserialize<'de> for Sentinel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        SentinelSeed::new(SentinelRegistry::global()).deserialize(deserializer)
    }
}

/// Deserializes a [`Sentinel`] against a specific registry
///
/// # Example
/// ```
/// use serde::de::DeserializeSeed;
/// use sentinel_core::{SentinelRegistry, SentinelSeed};
///
/// let registry = SentinelRegistry::new();
/// let marker = registry.create("jobs.NOT_STARTED", None).unwrap();
///
/// let mut de = serde_json::Deserializer::from_str("\"jobs.NOT_STARTED\"");
/// let back = SentinelSeed::new(&registry).deserialize(&mut de).unwrap();
/// assert!(back.is(&marker));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SentinelSeed<'r> {
    registry: &'r SentinelRegistry,
}

impl<'r> SentinelSeed<'r> {
    /// Seed bound to `registry`
    #[inline]
    #[must_use]
    pub fn new(registry: &'r SentinelRegistry) -> Self {
        Self { registry }
    }
}

impl<'de, 'r> DeserializeSeed<'de> for SentinelSeed<'r> {
    type Value = Sentinel;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Sentinel, D::Error> {
        deserializer.deserialize_str(NameVisitor {
            registry: self.registry,
        })
    }
}

struct NameVisitor<'r> {
    registry: &'r SentinelRegistry,
}

impl<'de, 'r> Visitor<'de> for NameVisitor<'r> {
    type Value = Sentinel;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a registered sentinel name")
    }

    fn visit_str<E: de::Error>(self, name: &str) -> Result<Sentinel, E> {
        self.registry.resolve_reference(name).map_err(E::custom)
    }
}
