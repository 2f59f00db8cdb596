//! Stack diffing.
//!
//! The reconciler does not track *how* the stack changed, only *what*
//! changed: it compares the stack before and after a pass and notifies for the
//! difference. This also covers changes the host made on its own, such as a
//! back-swipe that popped the displayed stack.

use crate::NavEntry;

/// Difference between two stacks, split at their longest common prefix.
///
/// Entries are compared by `(path, query)`; both lists are bottom-to-top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackDelta {
    /// Length of the shared prefix.
    pub common: usize,
    /// Entries of the old stack above the shared prefix.
    pub removed: Vec<NavEntry>,
    /// Entries of the new stack above the shared prefix.
    pub added: Vec<NavEntry>,
}

impl StackDelta {
    /// Diff `old` against `new`.
    ///
    /// # Example
    ///
    /// ```
    /// use stack_navigator::{NavEntry, StackDelta};
    ///
    /// let old = [NavEntry::new("a"), NavEntry::new("b"), NavEntry::new("c")];
    /// let new = [NavEntry::new("a"), NavEntry::new("x")];
    /// let delta = StackDelta::between(&old, &new);
    ///
    /// assert_eq!(delta.common, 1);
    /// assert_eq!(delta.removed, [NavEntry::new("b"), NavEntry::new("c")]);
    /// assert_eq!(delta.added, [NavEntry::new("x")]);
    /// ```
    pub fn between(old: &[NavEntry], new: &[NavEntry]) -> Self {
        let common = common_prefix_len(old, new);
        Self {
            common,
            removed: old[common..].to_vec(),
            added: new[common..].to_vec(),
        }
    }

    /// Whether nothing was added or removed.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

fn common_prefix_len(old: &[NavEntry], new: &[NavEntry]) -> usize {
    old.iter()
        .zip(new)
        .take_while(|(before, after)| before == after)
        .count()
}
