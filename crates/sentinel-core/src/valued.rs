//! Typed "value or marker" slots
//!
//! [`Valued<T>`] lets a signature say "either a real `T` or one of these
//! sentinels" without giving every sentinel its own nominal type.

use crate::sentinel::Sentinel;
use serde::{Deserialize, Serialize};

/// Either a real value or a sentinel marker
///
/// # Example
/// ```
/// use sentinel_core::{SentinelRegistry, Valued};
///
/// let registry = SentinelRegistry::new();
/// let unset = registry.create("cfg.UNSET", None).unwrap();
///
/// let timeout: Valued<u32> = Valued::Marker(unset.clone());
/// assert!(timeout.is(&unset));
/// assert_eq!(timeout.unwrap_or(30), 30);
///
/// let timeout: Valued<u32> = 5.into();
/// assert_eq!(timeout.value(), Some(&5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Valued<T> {
    /// A real value
    Value(T),
    /// A marker standing in for a value
    Marker(Sentinel),
}

impl<T> Valued<T> {
    /// Check if this holds any marker
    #[inline]
    #[must_use]
    pub fn is_marker(&self) -> bool {
        matches!(self, Self::Marker(_))
    }

    /// Check if this holds exactly `sentinel`
    #[inline]
    #[must_use]
    pub fn is(&self, sentinel: &Sentinel) -> bool {
        matches!(self, Self::Marker(s) if s.is(sentinel))
    }

    /// Borrow the value, if any
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Marker(_) => None,
        }
    }

    /// Borrow the marker, if any
    #[inline]
    #[must_use]
    pub fn marker(&self) -> Option<&Sentinel> {
        match self {
            Self::Value(_) => None,
            Self::Marker(s) => Some(s),
        }
    }

    /// Drop the marker distinction
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Marker(_) => None,
        }
    }

    /// Value, or `default` for any marker
    #[inline]
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    /// Map the value, keeping markers as they are
    #[inline]
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Valued<U> {
        match self {
            Self::Value(v) => Valued::Value(f(v)),
            Self::Marker(s) => Valued::Marker(s),
        }
    }
}

impl<T> From<T> for Valued<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SentinelRegistry;

    #[test]
    fn marker_checks() {
        let registry = SentinelRegistry::new();
        let unset = registry.create("m.UNSET", None).unwrap();
        let other = registry.create("m.OTHER", None).unwrap();

        let slot: Valued<i32> = Valued::Marker(unset.clone());
        assert!(slot.is_marker());
        assert!(slot.is(&unset));
        assert!(!slot.is(&other));
        assert_eq!(slot.marker(), Some(&unset));
        assert_eq!(slot.value(), None);
    }

    #[test]
    fn value_accessors() {
        let slot: Valued<i32> = 7.into();
        assert!(!slot.is_marker());
        assert_eq!(slot.value(), Some(&7));
        assert_eq!(slot.clone().map(|v| v * 2), Valued::Value(14));
        assert_eq!(slot.into_option(), Some(7));
    }

    #[test]
    fn map_keeps_marker_identity() {
        let registry = SentinelRegistry::new();
        let unset = registry.create("m.UNSET", None).unwrap();

        let mapped = Valued::<i32>::Marker(unset.clone()).map(|v| v.to_string());
        assert!(mapped.is(&unset));
    }

    #[test]
    fn markers_with_same_name_in_different_registries_differ() {
        let a = SentinelRegistry::new().create("m.UNSET", None).unwrap();
        let b = SentinelRegistry::new().create("m.UNSET", None).unwrap();
        assert_ne!(Valued::<()>::Marker(a), Valued::Marker(b));
    }

    #[test]
    fn serializes_externally_tagged() {
        let registry = SentinelRegistry::new();
        let unset = registry.create("m.UNSET", None).unwrap();

        let json = serde_json::to_string(&Valued::<u8>::Marker(unset)).unwrap();
        assert_eq!(json, r#"{"marker":"m.UNSET"}"#);
        assert_eq!(serde_json::to_string(&Valued::<u8>::Value(3)).unwrap(), r#"{"value":3}"#);
    }
}
