//! Qualified sentinel names
//!
//! Provides [`QualifiedName`], the registry key for a sentinel. Names are
//! hierarchical (`app.config.MISSING`) and always rendered with `.` between
//! segments. `::` is accepted on input so `module_path!()` output can be used
//! directly.

use crate::error::{Result, SentinelError};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Canonical segment separator
pub const SEPARATOR: char = '.';

/// Rules applied to each segment of a qualified name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamePolicy {
    /// Segments contain only alphanumerics and `_`
    #[default]
    Identifier,

    /// Segments contain anything except whitespace, control characters and
    /// separators
    Lenient,
}

impl NamePolicy {
    fn check_segment(self, segment: &str) -> std::result::Result<(), String> {
        if segment.is_empty() {
            return Err("empty segment".to_string());
        }
        let bad = match self {
            Self::Identifier => segment.chars().find(|c| !c.is_alphanumeric() && *c != '_'),
            Self::Lenient => segment
                .chars()
                .find(|c| c.is_whitespace() || c.is_control() || *c == ':'),
        };
        match bad {
            Some(c) => Err(format!("invalid character {c:?} in segment '{segment}'")),
            None => Ok(()),
        }
    }
}

/// Validated, globally unique sentinel key
///
/// # Examples
/// - `"Demo"` → single segment, short name `Demo`
/// - `"app::config::MISSING"` → `app.config.MISSING`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifiedName {
    canonical: String,
    short_start: usize,
}

impl QualifiedName {
    /// Parse and validate a name
    ///
    /// # Errors
    /// Returns [`SentinelError::InvalidName`] for empty input, empty
    /// segments, characters the policy rejects, or names longer than
    /// `max_len` once canonicalized.
    pub fn parse(raw: &str, policy: NamePolicy, max_len: usize) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(SentinelError::invalid_name(raw, "name is empty"));
        }

        let normalized = raw.replace("::", ".");
        for segment in normalized.split(SEPARATOR) {
            policy
                .check_segment(segment)
                .map_err(|reason| SentinelError::invalid_name(raw, reason))?;
        }

        if normalized.len() > max_len {
            return Err(SentinelError::invalid_name(
                raw,
                format!("name is {} bytes, limit is {max_len}", normalized.len()),
            ));
        }

        let short_start = normalized.rfind(SEPARATOR).map_or(0, |i| i + 1);
        Ok(Self {
            canonical: normalized,
            short_start,
        })
    }

    /// Canonical dotted form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Trailing segment
    #[inline]
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.canonical[self.short_start..]
    }

    /// Everything before the trailing segment, `None` for single-segment names
    #[inline]
    #[must_use]
    pub fn module(&self) -> Option<&str> {
        if self.short_start == 0 {
            None
        } else {
            Some(&self.canonical[..self.short_start - 1])
        }
    }

    /// Iterator over segments from outermost to the short name
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.canonical.split(SEPARATOR)
    }

    /// Number of segments
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Representation used when the caller does not supply one
    #[must_use]
    pub fn default_repr(&self) -> String {
        format!("<{}>", self.short_name())
    }
}

impl Display for QualifiedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl FromStr for QualifiedName {
    type Err = SentinelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, NamePolicy::default(), crate::config::DEFAULT_MAX_NAME_LEN)
    }
}
