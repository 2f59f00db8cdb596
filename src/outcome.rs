//! Results of a reconciliation pass.
//!
//! Issuing an intent never reports back to the caller. The host that runs
//! [`NavRouter::reconcile`](crate::NavRouter::reconcile) does get a
//! [`ReconcileReport`], which lists the intents that were dropped and why.
//!
//! - [`SkipReason`] — why an intent turned into a no-op.
//! - [`SkippedIntent`] — the intent together with its reason.
//! - [`ReconcileReport`] — everything one pass did.

use crate::{NavAction, NavEntry};
use std::fmt;

/// Why an intent was dropped during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `pop` with nothing on the stack.
    EmptyStack,

    /// `pop_if_match` / `pop_multi_if_match` whose paths did not match the
    /// top of the stack. Both lists are bottom-to-top.
    Mismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyStack => write!(f, "navigation stack is empty"),
            SkipReason::Mismatch { expected, actual } => {
                write!(
                    f,
                    "stack top does not match: expected {:?}, found {:?}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for SkipReason {}

/// An intent dropped during a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedIntent {
    pub action: NavAction,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} skipped: {}", self.action, self.reason)
    }
}

/// What one reconciliation pass did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconcileReport {
    /// Intents that changed, or were allowed to change, the stack.
    pub applied: usize,
    /// Intents dropped as no-ops, in queue order.
    pub skipped: Vec<SkippedIntent>,
    /// Entries that left the stack, bottom-to-top.
    pub removed: Vec<NavEntry>,
    /// Entries that joined the stack after `before_push`, bottom-to-top.
    pub added: Vec<NavEntry>,
}

impl ReconcileReport {
    /// Whether the pass left the stack as it found it.
    pub fn is_unchanged(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }

    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::EmptyStack.to_string(), "navigation stack is empty");

        let reason = SkipReason::Mismatch {
            expected: vec!["a".into(), "b".into()],
            actual: vec!["b".into(), "a".into()],
        };
        assert_eq!(
            reason.to_string(),
            r#"stack top does not match: expected ["a", "b"], found ["b", "a"]"#
        );
    }

    #[test]
    fn test_skipped_intent_display() {
        let skipped = SkippedIntent {
            action: NavAction::Pop,
            reason: SkipReason::EmptyStack,
        };
        assert_eq!(skipped.to_string(), "pop skipped: navigation stack is empty");
    }

    #[test]
    fn test_default_report_is_unchanged() {
        let report = ReconcileReport::default();
        assert!(report.is_unchanged());
        assert!(!report.has_skipped());
        assert_eq!(report.applied, 0);
    }

    #[test]
    fn test_skip_reason_is_error() {
        let err: Box<dyn std::error::Error> = Box::new(SkipReason::EmptyStack);
        assert_eq!(err.to_string(), "navigation stack is empty");
    }
}
