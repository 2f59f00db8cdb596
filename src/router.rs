//! The navigation router.
//!
//! [`NavRouter`] owns the displayed stack. Intents issued through its
//! [`Navigator`] wait in a queue until the host calls
//! [`reconcile`](NavRouter::reconcile), which:
//!
//! 1. drains the whole queue and applies the intents in issue order,
//! 2. diffs the stack as it was before the pass against the result,
//! 3. notifies the delegate and runs completion callbacks for the diff.
//!
//! Intents issued while a pass runs (from a delegate hook or a completion
//! callback) stay queued for the following pass.
//!
//! The host is expected to call `reconcile` once per batch of intents, before
//! the stack is next read for display. [`RouterBuilder::on_change`] and
//! [`NavRouter::has_pending`] exist to drive that.

use crate::delegate::RouterDelegate;
use crate::delta::StackDelta;
use crate::intent::{ChangeListener, NavAction, Navigator};
use crate::logging::{FacadeLog, LogLevel, RouterLog};
use crate::outcome::{ReconcileReport, SkipReason, SkippedIntent};
use crate::NavEntry;
use std::fmt;
use std::rc::Rc;

/// Navigation stack with queued intents and lifecycle notifications.
///
/// # Example
///
/// ```
/// use stack_navigator::NavRouter;
///
/// let mut router = NavRouter::new();
/// router.push("/a").push("/b").push("/c");
/// router.reconcile();
///
/// router.pop().pop();
/// let report = router.reconcile();
///
/// assert_eq!(router.top().map(|e| e.path()), Some("/a"));
/// assert_eq!(report.removed.len(), 2);
/// ```
pub struct NavRouter {
    stack: Vec<NavEntry>,
    navigator: Navigator,
    delegate: Option<Box<dyn RouterDelegate>>,
    log: Rc<dyn RouterLog>,
}

impl NavRouter {
    /// Router with an empty stack, no delegate and [`FacadeLog`] logging.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring a router.
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// A handle sharing this router's intent queue.
    pub fn navigator(&self) -> Navigator {
        self.navigator.clone()
    }

    /// Replace the delegate. `None` makes every hook a no-op.
    pub fn set_delegate(&mut self, delegate: Option<Box<dyn RouterDelegate>>) {
        self.delegate = delegate;
    }

    /// Remove and return the current delegate.
    pub fn take_delegate(&mut self) -> Option<Box<dyn RouterDelegate>> {
        self.delegate.take()
    }

    /// Replace the diagnostics sink.
    pub fn set_logger(&mut self, log: Rc<dyn RouterLog>) {
        self.log = log;
    }

    // ========================================================================
    // Intent issuing
    // ========================================================================

    /// See [`Navigator::push`].
    pub fn push(&self, entry: impl Into<NavEntry>) -> &Self {
        self.navigator.push(entry);
        self
    }

    /// See [`Navigator::pop`].
    pub fn pop(&self) -> &Self {
        self.navigator.pop();
        self
    }

    /// See [`Navigator::pop_if_match`].
    pub fn pop_if_match(&self, entry: impl Into<NavEntry>) -> &Self {
        self.navigator.pop_if_match(entry);
        self
    }

    /// See [`Navigator::pop_multi_if_match`].
    pub fn pop_multi_if_match<I, E>(&self, entries: I) -> &Self
    where
        I: IntoIterator<Item = E>,
        E: Into<NavEntry>,
    {
        self.navigator.pop_multi_if_match(entries);
        self
    }

    /// See [`Navigator::pop_to_root`].
    pub fn pop_to_root(&self) -> &Self {
        self.navigator.pop_to_root();
        self
    }

    /// See [`Navigator::replace`].
    pub fn replace(&self, entry: impl Into<NavEntry>) -> &Self {
        self.navigator.replace(entry);
        self
    }

    // ========================================================================
    // Read-only state
    // ========================================================================

    /// The displayed stack, bottom-to-top.
    pub fn entries(&self) -> &[NavEntry] {
        &self.stack
    }

    /// The top-most entry, if any.
    pub fn top(&self) -> Option<&NavEntry> {
        self.stack.last()
    }

    /// Number of entries on the stack.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Return `true` if the stack has no entries.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Whether only the root view is showing, i.e. the stack has no entries.
    pub fn is_root(&self) -> bool {
        self.stack.is_empty()
    }

    /// Whether intents are waiting for the next pass.
    pub fn has_pending(&self) -> bool {
        self.navigator.has_pending()
    }

    /// Number of intents issued so far.
    pub fn change_count(&self) -> u64 {
        self.navigator.change_count()
    }

    // ========================================================================
    // Reconciliation
    // ========================================================================

    /// Apply every queued intent, then notify for the net stack change.
    pub fn reconcile(&mut self) -> ReconcileReport {
        let actions = self.navigator.drain_all();
        let mut report = ReconcileReport::default();
        if actions.is_empty() {
            return report;
        }

        self.log.log(
            LogLevel::Trace,
            format_args!(
                "reconcile: {} intent(s) against stack depth {}",
                actions.len(),
                self.stack.len()
            ),
        );

        let before = self.stack.clone();
        for action in actions {
            match self.apply(&action) {
                Ok(()) => report.applied += 1,
                Err(reason) => {
                    self.log.log(
                        LogLevel::Debug,
                        format_args!("{} skipped: {}", action, reason),
                    );
                    report.skipped.push(SkippedIntent { action, reason });
                }
            }
        }

        let delta = StackDelta::between(&before, &self.stack);
        self.dispatch(delta, &mut report);

        self.log.log(
            LogLevel::Trace,
            format_args!(
                "reconcile done: {} applied, {} skipped, -{} +{}, depth {}",
                report.applied,
                report.skipped.len(),
                report.removed.len(),
                report.added.len(),
                self.stack.len()
            ),
        );
        report
    }

    /// Adopt a stack the host changed on its own (for example a back-swipe)
    /// and notify for the difference. Pending intents are left queued.
    pub fn sync_displayed(&mut self, displayed: Vec<NavEntry>) -> ReconcileReport {
        let before = std::mem::replace(&mut self.stack, displayed);
        let delta = StackDelta::between(&before, &self.stack);
        let mut report = ReconcileReport::default();
        if !delta.is_empty() {
            self.log.log(
                LogLevel::Debug,
                format_args!(
                    "displayed stack changed outside the router: -{} +{}",
                    delta.removed.len(),
                    delta.added.len()
                ),
            );
            self.dispatch(delta, &mut report);
        }
        report
    }

    fn apply(&mut self, action: &NavAction) -> Result<(), SkipReason> {
        match action {
            NavAction::Push(entry) => {
                self.stack.push(entry.clone());
                Ok(())
            }
            NavAction::Pop => self
                .stack
                .pop()
                .map(|_| ())
                .ok_or(SkipReason::EmptyStack),
            NavAction::PopIfMatch(entry) => {
                self.pop_multi_if_match_now(std::slice::from_ref(entry))
            }
            NavAction::PopMultiIfMatch(entries) => self.pop_multi_if_match_now(entries),
            NavAction::PopToRoot => {
                self.stack.clear();
                Ok(())
            }
        }
    }

    /// Only paths are compared here, while the diff compares path and query.
    fn pop_multi_if_match_now(&mut self, entries: &[NavEntry]) -> Result<(), SkipReason> {
        let start = self.stack.len().saturating_sub(entries.len());
        let actual: Vec<&str> = self.stack[start..].iter().map(NavEntry::path).collect();
        let expected: Vec<&str> = entries.iter().rev().map(NavEntry::path).collect();

        if actual == expected {
            self.stack.truncate(start);
            Ok(())
        } else {
            Err(SkipReason::Mismatch {
                expected: expected.into_iter().map(str::to_owned).collect(),
                actual: actual.into_iter().map(str::to_owned).collect(),
            })
        }
    }

    fn dispatch(&mut self, delta: StackDelta, report: &mut ReconcileReport) {
        let StackDelta {
            common,
            removed,
            added,
        } = delta;

        if let Some(delegate) = self.delegate.as_mut() {
            for entry in removed.iter().rev() {
                delegate.before_pop(entry);
            }
        }
        for entry in removed.iter().rev() {
            entry.finish();
            if let Some(delegate) = self.delegate.as_mut() {
                delegate.after_pop(entry);
            }
        }

        for (offset, entry) in added.into_iter().enumerate() {
            let processed = match self.delegate.as_mut() {
                Some(delegate) => delegate.before_push(entry),
                None => entry,
            };
            if let Some(slot) = self.stack.get_mut(common + offset) {
                *slot = processed.clone();
            }
            if let Some(delegate) = self.delegate.as_mut() {
                delegate.after_push(&processed);
            }
            report.added.push(processed);
        }

        report.removed = removed;
    }
}

impl Default for NavRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NavRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavRouter")
            .field("stack", &self.stack)
            .field("navigator", &self.navigator)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}

/// Configures a [`NavRouter`].
///
/// # Example
///
/// ```
/// use stack_navigator::{NavRouter, SilentLog};
///
/// let router = NavRouter::builder()
///     .initial_stack(["/home", "/home/settings"])
///     .logger(SilentLog)
///     .on_change(|count| println!("schedule a pass ({count})"))
///     .build();
/// assert_eq!(router.len(), 2);
/// ```
pub struct RouterBuilder {
    stack: Vec<NavEntry>,
    delegate: Option<Box<dyn RouterDelegate>>,
    log: Rc<dyn RouterLog>,
    listener: Option<ChangeListener>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            delegate: None,
            log: Rc::new(FacadeLog),
            listener: None,
        }
    }

    /// Start with entries already displayed. No hooks fire for them.
    pub fn initial_stack<I, E>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<NavEntry>,
    {
        self.stack = entries.into_iter().map(Into::into).collect();
        self
    }

    pub fn delegate(mut self, delegate: impl RouterDelegate + 'static) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    pub fn logger(mut self, log: impl RouterLog + 'static) -> Self {
        self.log = Rc::new(log);
        self
    }

    /// Use a logger the caller keeps a handle to.
    pub fn shared_logger(mut self, log: Rc<dyn RouterLog>) -> Self {
        self.log = log;
        self
    }

    /// Called with the new change count after every issued intent. Use it to
    /// schedule a [`reconcile`](NavRouter::reconcile); do not reconcile from
    /// inside it.
    pub fn on_change<F>(mut self, listener: F) -> Self
    where
        F: Fn(u64) + 'static,
    {
        self.listener = Some(Rc::new(listener));
        self
    }

    pub fn build(self) -> NavRouter {
        let navigator = Navigator::new();
        navigator.set_listener(self.listener);
        NavRouter {
            stack: self.stack,
            navigator,
            delegate: self.delegate,
            log: self.log,
        }
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
