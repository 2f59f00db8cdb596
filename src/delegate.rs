//! Lifecycle notifications for stack changes.
//!
//! A [`RouterDelegate`] observes what each reconciliation pass did to the
//! stack. Hooks run only from the reconciler, after all queued intents of the
//! pass have been applied, so they describe the *net* change:
//!
//! 1. `before_pop` for every removed entry, top-most first
//! 2. the entry's completion callback, then `after_pop`, top-most first
//! 3. `before_push` then `after_push` for every added entry, bottom-most first
//!
//! # Creating a delegate
//!
//! | Approach | When to use |
//! |----------|-------------|
//! | Implement [`RouterDelegate`] | Stateful observers, several hooks |
//! | [`delegate_fn`] | One or two hooks from closures |

use crate::NavEntry;

/// Observer of stack lifecycle events.
///
/// Every hook has a default: `before_push` returns the entry unchanged and
/// the others do nothing, so implementors override only what they need.
///
/// # Example
///
/// ```
/// use stack_navigator::{NavEntry, RouterDelegate};
///
/// /// Stamps every pushed entry with the current locale.
/// struct Locale(&'static str);
///
/// impl RouterDelegate for Locale {
///     fn before_push(&mut self, mut entry: NavEntry) -> NavEntry {
///         entry.query_mut().insert("lang", self.0);
///         entry
///     }
/// }
/// ```
pub trait RouterDelegate {
    /// Called before an added entry is shown. The returned entry replaces it
    /// on the stack.
    fn before_push(&mut self, entry: NavEntry) -> NavEntry {
        entry
    }

    /// Called after an added entry is on the stack.
    fn after_push(&mut self, _entry: &NavEntry) {}

    /// Called before the completion callback of a removed entry.
    fn before_pop(&mut self, _entry: &NavEntry) {}

    /// Called after the completion callback of a removed entry.
    fn after_pop(&mut self, _entry: &NavEntry) {}
}

type PushMap = Box<dyn FnMut(NavEntry) -> NavEntry>;
type EntryHook = Box<dyn FnMut(&NavEntry)>;

/// Delegate assembled from optional closures. See [`delegate_fn`].
#[derive(Default)]
pub struct FnDelegate {
    before_push: Option<PushMap>,
    after_push: Option<EntryHook>,
    before_pop: Option<EntryHook>,
    after_pop: Option<EntryHook>,
}

/// Start building a delegate from closures.
///
/// # Example
///
/// ```
/// use stack_navigator::{delegate_fn, NavRouter};
///
/// let mut router = NavRouter::builder()
///     .delegate(delegate_fn().after_push(|entry| println!("shown {}", entry)))
///     .build();
/// router.navigator().push("/home");
/// router.reconcile();
/// ```
pub fn delegate_fn() -> FnDelegate {
    FnDelegate::default()
}

impl FnDelegate {
    /// Set the hook that may rewrite an entry before it is shown.
    pub fn before_push<F>(mut self, hook: F) -> Self
    where
        F: FnMut(NavEntry) -> NavEntry + 'static,
    {
        self.before_push = Some(Box::new(hook));
        self
    }

    /// Set the hook run after an entry is shown.
    pub fn after_push<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&NavEntry) + 'static,
    {
        self.after_push = Some(Box::new(hook));
        self
    }

    /// Set the hook run before a removed entry finishes.
    pub fn before_pop<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&NavEntry) + 'static,
    {
        self.before_pop = Some(Box::new(hook));
        self
    }

    /// Set the hook run after a removed entry finishes.
    pub fn after_pop<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&NavEntry) + 'static,
    {
        self.after_pop = Some(Box::new(hook));
        self
    }
}

impl RouterDelegate for FnDelegate {
    fn before_push(&mut self, entry: NavEntry) -> NavEntry {
        match self.before_push.as_mut() {
            Some(hook) => hook(entry),
            None => entry,
        }
    }

    fn after_push(&mut self, entry: &NavEntry) {
        if let Some(hook) = self.after_push.as_mut() {
            hook(entry);
        }
    }

    fn before_pop(&mut self, entry: &NavEntry) {
        if let Some(hook) = self.before_pop.as_mut() {
            hook(entry);
        }
    }

    fn after_pop(&mut self, entry: &NavEntry) {
        if let Some(hook) = self.after_pop.as_mut() {
            hook(entry);
        }
    }
}

impl std::fmt::Debug for FnDelegate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnDelegate")
            .field("before_push", &self.before_push.is_some())
            .field("after_push", &self.after_push.is_some())
            .field("before_pop", &self.before_pop.is_some())
            .field("after_pop", &self.after_pop.is_some())
            .finish()
    }
}
