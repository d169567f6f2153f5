//! Sentinel handles
//!
//! A [`Sentinel`] is an opaque handle to one registration event. Two handles
//! are equal only if they point at the same allocation, no matter what names
//! or representations they carry.

use crate::name::QualifiedName;
use once_cell::sync::OnceCell;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a sentinel allocation
///
/// Ids are handed out monotonically and never reused, even across registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SentinelId(u64);

impl SentinelId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value
    #[inline]
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for SentinelId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Inner {
    id: SentinelId,
    name: QualifiedName,
    default_repr: String,
    // Set at most once: at allocation, or when a declaration adopts a
    // provisionally restored instance.
    custom_repr: OnceCell<String>,
}

/// Unique marker value
///
/// Cloning is cheap and preserves identity: every clone compares equal to the
/// original and to nothing else.
#[derive(Clone)]
pub struct Sentinel {
    inner: Arc<Inner>,
}

impl Sentinel {
    /// Allocate a new identity. Only the registry calls this, under its lock.
    pub(crate) fn allocate(name: QualifiedName, repr: String) -> Self {
        let sentinel = Self::allocate_default(name);
        sentinel.adopt_repr(repr);
        sentinel
    }

    /// Allocate with the default representation
    pub(crate) fn allocate_default(name: QualifiedName) -> Self {
        Self {
            inner: Arc::new(Inner {
                id: SentinelId::next(),
                default_repr: name.default_repr(),
                name,
                custom_repr: OnceCell::new(),
            }),
        }
    }

    /// Fix the representation of an instance still showing its default
    ///
    /// Returns false if a different custom representation is already set.
    pub(crate) fn adopt_repr(&self, repr: String) -> bool {
        if repr == self.repr() {
            return true;
        }
        if repr == self.inner.default_repr {
            return false;
        }
        self.inner.custom_repr.set(repr).is_ok()
    }

    /// Identity token
    #[inline]
    #[must_use]
    pub fn id(&self) -> SentinelId {
        self.inner.id
    }

    /// Registry key
    #[inline]
    #[must_use]
    pub fn qualified_name(&self) -> &QualifiedName {
        &self.inner.name
    }

    /// Trailing segment of the qualified name
    #[inline]
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.inner.name.short_name()
    }

    /// Qualified name minus the trailing segment
    #[inline]
    #[must_use]
    pub fn module(&self) -> Option<&str> {
        self.inner.name.module()
    }

    /// Display representation
    #[inline]
    #[must_use]
    pub fn repr(&self) -> &str {
        self.inner
            .custom_repr
            .get()
            .map_or(self.inner.default_repr.as_str(), String::as_str)
    }

    /// Identity comparison, same as `==`
    #[inline]
    #[must_use]
    pub fn is(&self, other: &Sentinel) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Sentinel {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Eq for Sentinel {}

impl PartialEq<Option<Sentinel>> for Sentinel {
    fn eq(&self, other: &Option<Sentinel>) -> bool {
        other.as_ref().is_some_and(|o| self.is(o))
    }
}

// Ids are one-to-one with allocations, so hashing the id agrees with `eq`.
impl Hash for Sentinel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl Display for Sentinel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.repr())
    }
}

impl Debug for Sentinel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.repr())
    }
}
