//! Sentinel Registry
//!
//! Unique marker values that compare by identity and survive serialization.
//!
//! # Overview
//!
//! - **Sentinel**: opaque handle, equal only to itself and its clones
//! - **QualifiedName**: dotted registry key (`app.config.MISSING`)
//! - **SentinelRegistry**: name → instance bindings behind one lock
//! - **Valued**: typed "value or marker" slot for signatures
//!
//! Serialization is by reference: only the qualified name is written, and
//! deserializing looks the name up again, returning the very same instance.
//!
//! # Example
//!
//! ```rust
//! use sentinel_core::{create_sentinel, Sentinel};
//!
//! let missing = create_sentinel("docs.example.MISSING", None).unwrap();
//! assert_eq!(missing.to_string(), "<MISSING>");
//! assert!(missing.is(&create_sentinel("docs.example.MISSING", None).unwrap()));
//!
//! let json = serde_json::to_string(&missing).unwrap();
//! let back: Sentinel = serde_json::from_str(&json).unwrap();
//! assert!(back.is(&missing));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod lazy;
pub mod name;
pub mod registry;
pub mod sentinel;
pub mod serialization;
pub mod valued;

// Re-exports
pub use config::RegistryConfig;
pub use error::{Result, SentinelError};
pub use lazy::LazySentinel;
pub use name::{NamePolicy, QualifiedName};
pub use registry::SentinelRegistry;
pub use sentinel::{Sentinel, SentinelId};
pub use serialization::SentinelSeed;
pub use valued::Valued;

/// Create (or fetch) a sentinel in the process-wide registry
///
/// Shorthand for [`SentinelRegistry::global`]`().create(..)`.
///
/// # Errors
/// - [`SentinelError::InvalidName`] for an empty or malformed name
/// - [`SentinelError::DuplicateName`] if the name is already bound with a
///   different representation
pub fn create_sentinel(qualified_name: &str, display_repr: Option<&str>) -> Result<Sentinel> {
    SentinelRegistry::global().create(qualified_name, display_repr)
}

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for sentinel declarations
    pub use crate::{
        create_sentinel, declare_sentinel, LazySentinel, Sentinel, SentinelError,
        SentinelRegistry, Valued,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
