//! Mapping stack entries to destinations.
//!
//! The router treats paths as opaque. A host that has to turn each entry into
//! something displayable registers builders here, keyed by path pattern.
//! Patterns use [`matchit`] syntax: `/users/{id}` captures one segment and
//! `/files/{*rest}` captures the remainder. Captured segments are handed to
//! the builder as a [`Query`], separate from the entry's own query.
//!
//! # Example
//!
//! ```
//! use stack_navigator::{Destinations, NavEntry};
//!
//! let destinations = Destinations::new()
//!     .route("/users/{id}", |_entry, params| {
//!         format!("profile {}", params.get("id").unwrap_or("?"))
//!     })?
//!     .route("/settings", |entry, _| {
//!         format!("settings tab={}", entry.query().get("tab").unwrap_or("general"))
//!     })?;
//!
//! let title = destinations.resolve(&NavEntry::new("/users/42"))?;
//! assert_eq!(title, "profile 42");
//! # Ok::<(), stack_navigator::DestinationError>(())
//! ```

use crate::{NavEntry, Query};
use std::fmt;

type Builder<V> = Box<dyn Fn(&NavEntry, &Query) -> V>;

/// Errors from registering or resolving destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationError {
    /// The pattern is malformed or conflicts with one already registered.
    InvalidPattern { pattern: String, message: String },

    /// No pattern matched and no fallback is set.
    NotFound { path: String },
}

impl fmt::Display for DestinationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestinationError::InvalidPattern { pattern, message } => {
                write!(f, "Invalid destination pattern '{}': {}", pattern, message)
            }
            DestinationError::NotFound { path } => {
                write!(f, "No destination for path: {}", path)
            }
        }
    }
}

impl std::error::Error for DestinationError {}

/// Registry of destination builders.
pub struct Destinations<V> {
    routes: matchit::Router<Builder<V>>,
    patterns: Vec<String>,
    fallback: Option<Builder<V>>,
}

impl<V> Destinations<V> {
    /// Create an empty registry with no fallback.
    pub fn new() -> Self {
        Self {
            routes: matchit::Router::new(),
            patterns: Vec::new(),
            fallback: None,
        }
    }

    /// Builder-style [`add`](Self::add).
    pub fn route<F>(
        mut self,
        pattern: impl Into<String>,
        builder: F,
    ) -> Result<Self, DestinationError>
    where
        F: Fn(&NavEntry, &Query) -> V + 'static,
    {
        self.add(pattern, builder)?;
        Ok(self)
    }

    /// Register `builder` for paths matching `pattern`.
    pub fn add<F>(
        &mut self,
        pattern: impl Into<String>,
        builder: F,
    ) -> Result<(), DestinationError>
    where
        F: Fn(&NavEntry, &Query) -> V + 'static,
    {
        let pattern = pattern.into();
        self.routes
            .insert(pattern.clone(), Box::new(builder) as Builder<V>)
            .map_err(|err| DestinationError::InvalidPattern {
                pattern: pattern.clone(),
                message: err.to_string(),
            })?;
        self.patterns.push(pattern);
        Ok(())
    }

    /// Builder used when no pattern matches. It receives empty params.
    pub fn fallback<F>(mut self, builder: F) -> Self
    where
        F: Fn(&NavEntry, &Query) -> V + 'static,
    {
        self.fallback = Some(Box::new(builder));
        self
    }

    /// Registered patterns in registration order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Build the destination for one entry.
    pub fn resolve(&self, entry: &NavEntry) -> Result<V, DestinationError> {
        if let Ok(matched) = self.routes.at(entry.path()) {
            let params: Query = matched.params.iter().collect();
            return Ok((matched.value)(entry, &params));
        }
        match &self.fallback {
            Some(fallback) => Ok(fallback(entry, &Query::new())),
            None => Err(DestinationError::NotFound {
                path: entry.path().to_string(),
            }),
        }
    }

    /// Build destinations for a whole stack, bottom-to-top.
    pub fn resolve_stack(&self, entries: &[NavEntry]) -> Vec<Result<V, DestinationError>> {
        entries.iter().map(|entry| self.resolve(entry)).collect()
    }
}

impl<V> Default for Destinations<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for Destinations<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destinations")
            .field("patterns", &self.patterns)
            .field("has_fallback", &self.fallback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(entry: &NavEntry, params: &Query) -> String {
        format!("{} [{}] [{}]", entry.path(), params, entry.query())
    }

    #[test]
    fn test_static_and_param_patterns() {
        let destinations = Destinations::new()
            .route("/home", describe)
            .and_then(|d| d.route("/users/{id}", describe))
            .unwrap();

        assert_eq!(
            destinations.resolve(&NavEntry::new("/home")).unwrap(),
            "/home [] []"
        );
        assert_eq!(
            destinations
                .resolve(&NavEntry::with_params("/users/7", [("tab", "posts")]))
                .unwrap(),
            "/users/7 [id=7] [tab=posts]"
        );
    }

    #[test]
    fn test_not_found_without_fallback() {
        let destinations: Destinations<String> = Destinations::new();
        let err = destinations.resolve(&NavEntry::new("/nowhere")).unwrap_err();
        assert_eq!(
            err,
            DestinationError::NotFound {
                path: "/nowhere".to_string()
            }
        );
        assert_eq!(err.to_string(), "No destination for path: /nowhere");
    }

    #[test]
    fn test_fallback() {
        let destinations = Destinations::new()
            .route("/home", |_, _| 1)
            .unwrap()
            .fallback(|_, params| if params.is_empty() { 0 } else { -1 });

        assert_eq!(destinations.resolve(&NavEntry::new("/home")), Ok(1));
        assert_eq!(destinations.resolve(&NavEntry::new("/other")), Ok(0));
    }

    #[test]
    fn test_conflicting_pattern_is_rejected() {
        let mut destinations = Destinations::new();
        destinations.add("/users/{id}", |_, _| ()).unwrap();
        let err = destinations.add("/users/{name}", |_, _| ()).unwrap_err();
        assert!(matches!(
            err,
            DestinationError::InvalidPattern { ref pattern, .. } if pattern == "/users/{name}"
        ));
        assert_eq!(destinations.patterns(), ["/users/{id}".to_string()]);
    }

    #[test]
    fn test_resolve_stack() {
        let destinations = Destinations::new().route("/a", |_, _| "a").unwrap();
        let resolved = destinations.resolve_stack(&[NavEntry::new("/a"), NavEntry::new("/b")]);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0], Ok("a"));
        assert!(resolved[1].is_err());
    }
}
