//! Navigation stack router.
//!
//! `stack-navigator` keeps an ordered stack of [`NavEntry`] values and changes
//! it only through queued intents:
//!
//! - [`Navigator`] issues intents (`push`, `pop`, `pop_if_match`,
//!   `pop_multi_if_match`, `pop_to_root`, `replace`) into a shared queue.
//! - [`NavRouter::reconcile`] drains the queue, applies the intents in order
//!   and diffs the stack before and after the pass.
//! - A [`RouterDelegate`] is notified for the diff: removed entries top-most
//!   first, added entries bottom-most first. Removed entries also run their
//!   [`OnFinish`] callback.
//!
//! The router is single-threaded by construction (`!Send`); it is meant to
//! live on the UI thread of its host.
//!
//! # Example
//!
//! ```
//! use stack_navigator::{delegate_fn, NavEntry, NavRouter};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let events = Rc::new(RefCell::new(Vec::new()));
//! let (pushed, popped) = (Rc::clone(&events), Rc::clone(&events));
//!
//! let mut router = NavRouter::builder()
//!     .delegate(
//!         delegate_fn()
//!             .after_push(move |e| pushed.borrow_mut().push(format!("+{}", e.path())))
//!             .after_pop(move |e| popped.borrow_mut().push(format!("-{}", e.path()))),
//!     )
//!     .build();
//!
//! router.push("A").push("B").push("C");
//! router.reconcile();
//! router.pop().pop();
//! router.reconcile();
//!
//! assert_eq!(*events.borrow(), ["+A", "+B", "+C", "-C", "-B"]);
//! assert_eq!(router.entries(), [NavEntry::new("A")]);
//! ```
//!
//! # Features
//!
//! | Feature   | Effect                                      | Default |
//! |-----------|---------------------------------------------|---------|
//! | `log`     | Diagnostics through the `log` crate         | yes     |
//! | `tracing` | Diagnostics through the `tracing` crate     | no      |
//! | `gpui`    | [`host`] module: router as a GPUI global    | no      |

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod delegate;
pub mod delta;
pub mod destination;
pub mod entry;
#[cfg(feature = "gpui")]
#[cfg_attr(docsrs, doc(cfg(feature = "gpui")))]
pub mod host;
pub mod intent;
pub mod logging;
pub mod outcome;
pub mod query;
pub mod router;

pub use delegate::{delegate_fn, FnDelegate, RouterDelegate};
pub use delta::StackDelta;
pub use destination::{DestinationError, Destinations};
pub use entry::{NavEntry, OnFinish};
pub use intent::{ChangeListener, NavAction, Navigator};
pub use logging::{FacadeLog, LogLevel, RouterLog, SilentLog};
pub use outcome::{ReconcileReport, SkipReason, SkippedIntent};
pub use query::Query;
pub use router::{NavRouter, RouterBuilder};
