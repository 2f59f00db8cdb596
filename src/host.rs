//! GPUI integration (feature `gpui`).
//!
//! Stores a [`NavRouter`] as a GPUI global so any view can issue intents and
//! the app can run reconciliation passes from its update loop.
//!
//! ```ignore
//! use stack_navigator::host::{init_nav_router, reconcile, UseNavRouter};
//!
//! init_nav_router(cx, |builder| builder.initial_stack(["/home"]));
//!
//! // in a click handler
//! cx.nav_router().navigator().push("/settings");
//!
//! // once per frame, or from a scheduled task
//! if cx.nav_router().has_pending() {
//!     reconcile(cx);
//! }
//! ```

use crate::outcome::ReconcileReport;
use crate::router::{NavRouter, RouterBuilder};
use crate::Navigator;
use gpui::{App, Global};

impl Global for NavRouter {}

/// Access to the global router from a GPUI context.
pub trait UseNavRouter {
    fn nav_router(&self) -> &NavRouter;

    fn update_nav_router<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut NavRouter, &mut App) -> R;
}

impl UseNavRouter for App {
    fn nav_router(&self) -> &NavRouter {
        self.global::<NavRouter>()
    }

    fn update_nav_router<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut NavRouter, &mut App) -> R,
    {
        self.update_global(f)
    }
}

/// Install the global router.
pub fn init_nav_router<F>(cx: &mut App, configure: F)
where
    F: FnOnce(RouterBuilder) -> RouterBuilder,
{
    let router = configure(NavRouter::builder()).build();
    cx.set_global(router);
}

/// A handle to the global router's intent queue.
pub fn navigator(cx: &App) -> Navigator {
    cx.nav_router().navigator()
}

/// Run one reconciliation pass on the global router and refresh all windows
/// when the stack changed.
pub fn reconcile(cx: &mut App) -> ReconcileReport {
    let report = cx.update_nav_router(|router, _cx| router.reconcile());
    if !report.is_unchanged() {
        cx.refresh_windows();
    }
    report
}
