//! Queued navigation intents and the handle used to issue them.
//!
//! Nothing here touches the stack. [`Navigator`] only records what the caller
//! wants; the router applies the queue during its next reconciliation pass.
//! A `Navigator` is cheap to clone, so UI handlers, delegates and completion
//! callbacks can each keep one.

use crate::NavEntry;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A requested stack mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    /// Append an entry.
    Push(NavEntry),
    /// Remove the top entry.
    Pop,
    /// Remove the top entry only if its path matches.
    PopIfMatch(NavEntry),
    /// Remove the top `n` entries only if their paths match, listed top-most first.
    PopMultiIfMatch(Vec<NavEntry>),
    /// Remove every entry.
    PopToRoot,
}

impl NavAction {
    /// Short name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            NavAction::Push(_) => "push",
            NavAction::Pop => "pop",
            NavAction::PopIfMatch(_) => "pop_if_match",
            NavAction::PopMultiIfMatch(_) => "pop_multi_if_match",
            NavAction::PopToRoot => "pop_to_root",
        }
    }
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavAction::Push(entry) | NavAction::PopIfMatch(entry) => {
                write!(f, "{}({})", self.kind(), entry)
            }
            NavAction::PopMultiIfMatch(entries) => {
                write!(f, "{}([", self.kind())?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", entry)?;
                }
                f.write_str("])")
            }
            NavAction::Pop | NavAction::PopToRoot => f.write_str(self.kind()),
        }
    }
}

/// Listener notified with the new change count after every enqueue.
pub type ChangeListener = Rc<dyn Fn(u64)>;

#[derive(Default)]
struct IntentQueue {
    pending: Vec<NavAction>,
    change_count: u64,
    listener: Option<ChangeListener>,
}

/// Handle for issuing navigation intents.
///
/// Every method appends to the shared queue and bumps the change counter.
/// Calls are fire-and-forget: a `pop` that turns out to have nothing to pop is
/// dropped during reconciliation without reporting back here.
///
/// The handle is `!Send`; all intents must be issued from the execution
/// context that owns the router.
///
/// # Example
///
/// ```
/// use stack_navigator::NavRouter;
///
/// let mut router = NavRouter::new();
/// let nav = router.navigator();
///
/// nav.push("/inbox").push("/inbox/thread");
/// assert_eq!(nav.change_count(), 2);
/// assert!(router.is_empty());
///
/// router.reconcile();
/// assert_eq!(router.len(), 2);
/// ```
///
/// Handles only come from [`NavRouter::navigator`](crate::NavRouter::navigator),
/// so every queued intent belongs to a router that will drain it:
///
/// ```compile_fail
/// let nav = stack_navigator::Navigator::default();
/// ```
#[derive(Clone)]
pub struct Navigator {
    queue: Rc<RefCell<IntentQueue>>,
}

impl Navigator {
    pub(crate) fn new() -> Self {
        Self {
            queue: Rc::default(),
        }
    }

    /// Queue an intent.
    pub fn enqueue(&self, action: NavAction) -> &Self {
        let (count, listener) = {
            let mut queue = self.queue.borrow_mut();
            queue.pending.push(action);
            queue.change_count += 1;
            (queue.change_count, queue.listener.clone())
        };
        if let Some(listener) = listener {
            listener(count);
        }
        self
    }

    /// Take every pending intent, leaving the queue empty.
    pub(crate) fn drain_all(&self) -> Vec<NavAction> {
        std::mem::take(&mut self.queue.borrow_mut().pending)
    }

    pub(crate) fn set_listener(&self, listener: Option<ChangeListener>) {
        self.queue.borrow_mut().listener = listener;
    }

    /// Push `entry` on top of the stack.
    pub fn push(&self, entry: impl Into<NavEntry>) -> &Self {
        self.enqueue(NavAction::Push(entry.into()))
    }

    /// Pop the top entry.
    pub fn pop(&self) -> &Self {
        self.enqueue(NavAction::Pop)
    }

    /// Pop the top entry if its path equals `entry`'s path.
    pub fn pop_if_match(&self, entry: impl Into<NavEntry>) -> &Self {
        self.enqueue(NavAction::PopIfMatch(entry.into()))
    }

    /// Pop `entries.len()` entries if the stack ends with them.
    ///
    /// `entries` is listed top-most first: on a stack `[a, b, c]`,
    /// `pop_multi_if_match(["c", "b"])` pops `c` and `b`. Only paths are
    /// compared.
    pub fn pop_multi_if_match<I, E>(&self, entries: I) -> &Self
    where
        I: IntoIterator<Item = E>,
        E: Into<NavEntry>,
    {
        self.enqueue(NavAction::PopMultiIfMatch(
            entries.into_iter().map(Into::into).collect(),
        ))
    }

    /// Pop every entry.
    pub fn pop_to_root(&self) -> &Self {
        self.enqueue(NavAction::PopToRoot)
    }

    /// Pop the top entry and push `entry`, as two queued intents.
    pub fn replace(&self, entry: impl Into<NavEntry>) -> &Self {
        self.pop().push(entry)
    }

    /// Number of intents issued so far. Never decreases.
    pub fn change_count(&self) -> u64 {
        self.queue.borrow().change_count
    }

    /// Whether intents are waiting for the next reconciliation pass.
    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().pending.is_empty()
    }

    /// Number of intents waiting for the next reconciliation pass.
    pub fn pending_len(&self) -> usize {
        self.queue.borrow().pending.len()
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.queue.borrow();
        f.debug_struct("Navigator")
            .field("pending", &queue.pending)
            .field("change_count", &queue.change_count)
            .field("has_listener", &queue.listener.is_some())
            .finish()
    }
}
