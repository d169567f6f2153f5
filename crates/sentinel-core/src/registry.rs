//! Name → sentinel registry
//!
//! Provides [`SentinelRegistry`], the single owner of name bindings. Every
//! "check, then insert" runs under one write-lock acquisition, so concurrent
//! registrations of a name can never publish two different instances.
//!
//! A binding made by [`SentinelRegistry::resolve_or_create`] is provisional:
//! the first declaration of that name adopts the restored instance and fixes
//! its representation instead of conflicting with it.

use crate::config::RegistryConfig;
use crate::error::{Result, SentinelError};
use crate::name::QualifiedName;
use crate::sentinel::Sentinel;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::collections::HashMap;

static GLOBAL: OnceCell<SentinelRegistry> = OnceCell::new();

/// Registry of sentinels keyed by canonical qualified name
///
/// Use [`SentinelRegistry::global`] for process-wide sentinels, or create
/// an owned registry to keep tests and subsystems isolated.
///
/// # Example
/// ```
/// use sentinel_core::SentinelRegistry;
///
/// let registry = SentinelRegistry::new();
/// let missing = registry.create("app.MISSING", None).unwrap();
///
/// assert_eq!(missing.to_string(), "<MISSING>");
/// assert_eq!(registry.create("app.MISSING", None).unwrap(), missing);
/// assert_eq!(registry.resolve("app::MISSING").unwrap(), missing);
/// ```
#[derive(Debug, Default)]
pub struct SentinelRegistry {
    config: RegistryConfig,
    entries: RwLock<HashMap<String, Binding>>,
}

#[derive(Debug)]
struct Binding {
    sentinel: Sentinel,
    provisional: bool,
}

impl SentinelRegistry {
    /// Create empty registry with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create empty registry with custom configuration
    #[inline]
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Process-wide registry, initialized with defaults on first use
    #[must_use]
    pub fn global() -> &'static SentinelRegistry {
        GLOBAL.get_or_init(SentinelRegistry::new)
    }

    /// Configure the process-wide registry before anything touches it
    ///
    /// # Errors
    /// Returns [`SentinelError::Config`] if the configuration is invalid or
    /// the global registry already exists.
    pub fn install_global(config: RegistryConfig) -> Result<&'static SentinelRegistry> {
        config.validate()?;
        GLOBAL
            .set(Self::with_config(config))
            .map_err(|_| SentinelError::Config("global registry already initialized".to_string()))?;
        Ok(Self::global())
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn parse_name(&self, raw: &str) -> Result<QualifiedName> {
        QualifiedName::parse(raw, self.config.name_policy, self.config.max_name_len)
    }

    /// Create a sentinel, or return the one already bound to `name`
    ///
    /// `display_repr` defaults to `<short_name>`. Re-creating a bound name
    /// with the same effective representation returns the existing instance.
    ///
    /// A provisional binding left by [`resolve_or_create`](Self::resolve_or_create)
    /// is adopted: the same instance is returned, now carrying `display_repr`.
    ///
    /// # Errors
    /// - [`SentinelError::InvalidName`] if `name` fails validation
    /// - [`SentinelError::DuplicateName`] if `name` is bound with a different
    ///   representation; the existing binding is left untouched
    pub fn create(&self, name: &str, display_repr: Option<&str>) -> Result<Sentinel> {
        let name = self.parse_name(name)?;
        let repr = display_repr.map_or_else(|| name.default_repr(), str::to_owned);

        let mut entries = self.entries.write();
        if let Some(binding) = entries.get_mut(name.as_str()) {
            if let Some(adopted) = Self::adopt(binding, &name, &repr) {
                return Ok(adopted);
            }
            let existing = &binding.sentinel;
            if existing.repr() == repr {
                tracing::debug!(name = %name, id = %existing.id(), "sentinel already registered");
                return Ok(existing.clone());
            }
            tracing::warn!(
                name = %name,
                existing = existing.repr(),
                requested = %repr,
                "conflicting sentinel registration"
            );
            return Err(SentinelError::DuplicateName {
                name: name.to_string(),
                existing: existing.repr().to_string(),
                requested: repr,
            });
        }

        Ok(Self::insert_new(&mut entries, name, repr))
    }

    /// Bind a new sentinel, failing if `name` is bound at all
    ///
    /// Provisional bindings are adopted as in [`create`](Self::create).
    ///
    /// # Errors
    /// - [`SentinelError::InvalidName`] if `name` fails validation
    /// - [`SentinelError::DuplicateName`] if `name` is already declared
    pub fn register(&self, name: &str, display_repr: Option<&str>) -> Result<Sentinel> {
        let name = self.parse_name(name)?;
        let repr = display_repr.map_or_else(|| name.default_repr(), str::to_owned);

        let mut entries = self.entries.write();
        if let Some(binding) = entries.get_mut(name.as_str()) {
            if let Some(adopted) = Self::adopt(binding, &name, &repr) {
                return Ok(adopted);
            }
            tracing::warn!(name = %name, "sentinel name already bound");
            return Err(SentinelError::DuplicateName {
                name: name.to_string(),
                existing: binding.sentinel.repr().to_string(),
                requested: repr,
            });
        }

        Ok(Self::insert_new(&mut entries, name, repr))
    }

    /// Turn a provisional binding into a declared one carrying `repr`
    fn adopt(binding: &mut Binding, name: &QualifiedName, repr: &str) -> Option<Sentinel> {
        if !binding.provisional || !binding.sentinel.adopt_repr(repr.to_owned()) {
            return None;
        }
        binding.provisional = false;
        tracing::debug!(name = %name, id = %binding.sentinel.id(), repr, "adopted restored sentinel");
        Some(binding.sentinel.clone())
    }

    fn insert_new(
        entries: &mut HashMap<String, Binding>,
        name: QualifiedName,
        repr: String,
    ) -> Sentinel {
        let key = name.as_str().to_owned();
        let sentinel = Sentinel::allocate(name, repr);
        tracing::debug!(name = %key, id = %sentinel.id(), repr = sentinel.repr(), "registered sentinel");
        entries.insert(
            key,
            Binding {
                sentinel: sentinel.clone(),
                provisional: false,
            },
        );
        sentinel
    }

    fn get(&self, name: &QualifiedName) -> Option<Sentinel> {
        self.entries
            .read()
            .get(name.as_str())
            .map(|binding| binding.sentinel.clone())
    }

    /// Find the sentinel bound to `name`
    ///
    /// Invalid names simply miss.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Sentinel> {
        let name = self.parse_name(name).ok()?;
        self.get(&name)
    }

    /// Find the sentinel bound to `name`, failing on a miss
    ///
    /// # Errors
    /// - [`SentinelError::InvalidName`] if `name` fails validation
    /// - [`SentinelError::Resolution`] if nothing is bound to `name`
    pub fn resolve(&self, name: &str) -> Result<Sentinel> {
        let name = self.parse_name(name)?;
        self.get(&name).ok_or_else(|| {
            tracing::warn!(name = %name, "unresolved sentinel reference");
            SentinelError::Resolution {
                name: name.to_string(),
            }
        })
    }

    /// Find the sentinel bound to `name`, creating a provisional one with the
    /// default representation on a miss
    ///
    /// The declaring code can still give the restored instance its own
    /// representation later through [`create`](Self::create).
    ///
    /// # Errors
    /// Returns [`SentinelError::InvalidName`] if `name` fails validation.
    pub fn resolve_or_create(&self, name: &str) -> Result<Sentinel> {
        let name = self.parse_name(name)?;
        if let Some(found) = self.get(&name) {
            return Ok(found);
        }

        let mut entries = self.entries.write();
        // Another caller may have bound the name between the two locks.
        if let Some(binding) = entries.get(name.as_str()) {
            return Ok(binding.sentinel.clone());
        }
        let key = name.as_str().to_owned();
        let sentinel = Sentinel::allocate_default(name);
        tracing::debug!(name = %key, id = %sentinel.id(), "provisionally restored sentinel");
        entries.insert(
            key,
            Binding {
                sentinel: sentinel.clone(),
                provisional: true,
            },
        );
        Ok(sentinel)
    }

    /// Resolution used when rebuilding a sentinel from its serialized name
    pub(crate) fn resolve_reference(&self, name: &str) -> Result<Sentinel> {
        if self.config.create_on_resolve {
            self.resolve_or_create(name)
        } else {
            self.resolve(name)
        }
    }

    /// Check if `name` is bound
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// All bound names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of bound names
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
