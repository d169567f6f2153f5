//! Lazily registered sentinels for `static` declarations

use crate::error::Result;
use crate::registry::SentinelRegistry;
use crate::sentinel::Sentinel;
use once_cell::sync::OnceCell;
use std::fmt;

/// Sentinel registered in the global registry on first access
///
/// Usually declared through [`declare_sentinel!`](crate::declare_sentinel).
pub struct LazySentinel {
    name: &'static str,
    repr: Option<&'static str>,
    cell: OnceCell<Sentinel>,
}

impl LazySentinel {
    /// Declare with the default representation
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            repr: None,
            cell: OnceCell::new(),
        }
    }

    /// Declare with a custom representation
    #[must_use]
    pub const fn with_repr(name: &'static str, repr: &'static str) -> Self {
        Self {
            name,
            repr: Some(repr),
            cell: OnceCell::new(),
        }
    }

    /// Name as declared, before canonicalization
    #[inline]
    #[must_use]
    pub fn declared_name(&self) -> &'static str {
        self.name
    }

    /// Register (first call) or return the cached sentinel
    ///
    /// # Errors
    /// Propagates [`SentinelRegistry::create`] failures. A failed attempt is
    /// not cached; the next call tries again.
    pub fn get(&self) -> Result<&Sentinel> {
        self.cell
            .get_or_try_init(|| SentinelRegistry::global().create(self.name, self.repr))
    }
}

impl fmt::Debug for LazySentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySentinel")
            .field("name", &self.name)
            .field("repr", &self.repr)
            .field("initialized", &self.cell.get().is_some())
            .finish()
    }
}

/// Declare a `static` [`LazySentinel`] named after the enclosing module
///
/// ```
/// use sentinel_core::declare_sentinel;
///
/// declare_sentinel!(pub static NOT_GIVEN);
/// declare_sentinel!(static DEFAULT = "<default value>");
///
/// let a = NOT_GIVEN.get().unwrap();
/// assert_eq!(a.to_string(), "<NOT_GIVEN>");
/// assert!(a.is(NOT_GIVEN.get().unwrap()));
/// assert_eq!(DEFAULT.get().unwrap().repr(), "<default value>");
/// ```
#[macro_export]
macro_rules! declare_sentinel {
    ($(#[$meta:meta])* $vis:vis static $name:ident) => {
        $(#[$meta])*
        $vis static $name: $crate::LazySentinel =
            $crate::LazySentinel::new(concat!(module_path!(), "::", stringify!($name)));
    };
    ($(#[$meta:meta])* $vis:vis static $name:ident = $repr:expr) => {
        $(#[$meta])*
        $vis static $name: $crate::LazySentinel =
            $crate::LazySentinel::with_repr(concat!(module_path!(), "::", stringify!($name)), $repr);
    };
}
