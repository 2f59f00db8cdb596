//! Navigation stack entries.

use crate::Query;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Completion callback attached to a [`NavEntry`].
///
/// Clones share one slot, so the callback runs at most once no matter how
/// many copies of the entry exist.
#[derive(Clone)]
pub struct OnFinish {
    slot: Rc<RefCell<Option<Box<dyn FnOnce()>>>>,
}

impl OnFinish {
    /// Wrap a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            slot: Rc::new(RefCell::new(Some(Box::new(callback)))),
        }
    }

    /// Run the callback if it has not run yet. Returns `true` if it ran.
    pub fn fire(&self) -> bool {
        // Release the borrow before calling out; the callback may clone or
        // drop entries sharing this slot.
        let callback = self.slot.borrow_mut().take();
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Whether the callback has already run.
    pub fn is_spent(&self) -> bool {
        self.slot.borrow().is_none()
    }
}

impl fmt::Debug for OnFinish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnFinish")
            .field("spent", &self.is_spent())
            .finish()
    }
}

/// One frame of the navigation stack.
///
/// Identity is `(path, query)`: the completion callback plays no part in
/// equality, so two entries built from the same path and query match each
/// other even if only one of them carries an [`OnFinish`].
///
/// # Example
///
/// ```
/// use stack_navigator::{NavEntry, Query};
///
/// let a = NavEntry::new("/users").with_query(Query::new().with("id", "7"));
/// let b = NavEntry::with_params("/users", [("id", "7")]).on_finish(|| {});
/// assert_eq!(a, b);
/// ```
#[derive(Clone)]
pub struct NavEntry {
    path: String,
    query: Query,
    on_finish: Option<OnFinish>,
}

impl NavEntry {
    /// Entry with an empty query and no completion callback.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Query::new(),
            on_finish: None,
        }
    }

    /// Entry with query parameters built from pairs.
    pub fn with_params<I, K, V>(path: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(path).with_query(Query::from_pairs(params))
    }

    /// Replace the query.
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Attach a callback that runs once, after this entry leaves the stack.
    pub fn on_finish<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        self.on_finish = Some(OnFinish::new(callback));
        self
    }

    /// The entry's path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The entry's query parameters.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Mutable access to the query parameters.
    pub fn query_mut(&mut self) -> &mut Query {
        &mut self.query
    }

    /// Whether a completion callback is attached.
    pub fn has_on_finish(&self) -> bool {
        self.on_finish.is_some()
    }

    /// Run the completion callback if present and not yet spent.
    pub(crate) fn finish(&self) -> bool {
        self.on_finish.as_ref().is_some_and(OnFinish::fire)
    }
}

impl PartialEq for NavEntry {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.query == other.query
    }
}

impl Eq for NavEntry {}

impl fmt::Debug for NavEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavEntry")
            .field("path", &self.path)
            .field("query", &self.query)
            .field("has_on_finish", &self.has_on_finish())
            .finish()
    }
}

/// `path` or `path?k=v&...` when the query is non-empty.
impl fmt::Display for NavEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query)
        }
    }
}

impl From<&str> for NavEntry {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for NavEntry {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl<P: Into<String>> From<(P, Query)> for NavEntry {
    fn from((path, query): (P, Query)) -> Self {
        Self::new(path).with_query(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_equality_ignores_on_finish() {
        let plain = NavEntry::new("/a");
        let with_callback = NavEntry::new("/a").on_finish(|| {});
        assert_eq!(plain, with_callback);
    }

    #[test]
    fn test_equality_includes_query() {
        let a = NavEntry::with_params("/a", [("id", "1")]);
        let b = NavEntry::with_params("/a", [("id", "2")]);
        assert_ne!(a, b);
        assert_ne!(a, NavEntry::new("/a"));
    }

    #[test]
    fn test_on_finish_fires_once_across_clones() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let entry = NavEntry::new("/a").on_finish(move || counter.set(counter.get() + 1));
        let copy = entry.clone();

        assert!(entry.finish());
        assert!(!copy.finish());
        assert!(!entry.finish());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_finish_without_callback() {
        assert!(!NavEntry::new("/a").finish());
    }

    #[test]
    fn test_conversions() {
        let from_str: NavEntry = "/home".into();
        assert_eq!(from_str.path(), "/home");
        assert!(from_str.query().is_empty());

        let from_tuple: NavEntry = ("/users", Query::new().with("id", "3")).into();
        assert_eq!(from_tuple.query().get("id"), Some("3"));
    }

    #[test]
    fn test_display() {
        assert_eq!(NavEntry::new("/a").to_string(), "/a");
        let entry = NavEntry::with_params("/a", [("y", "2"), ("x", "1")]);
        assert_eq!(entry.to_string(), "/a?x=1&y=2");
    }
}
