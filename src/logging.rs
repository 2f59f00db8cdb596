//! Logging for the router.
//!
//! The router never writes to a global logger on its own: diagnostics go
//! through a [`RouterLog`] handed to it at construction. The default,
//! [`FacadeLog`], forwards to the [`log`](https://docs.rs/log) or
//! [`tracing`](https://docs.rs/tracing) crate depending on which feature is
//! enabled. The two features are **mutually exclusive**.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! Any `Fn(LogLevel, fmt::Arguments<'_>)` closure is also a [`RouterLog`]:
//!
//! ```
//! use stack_navigator::{LogLevel, NavRouter};
//!
//! let router = NavRouter::builder()
//!     .logger(|level: LogLevel, args: std::fmt::Arguments<'_>| {
//!         eprintln!("[{level}] {args}");
//!     })
//!     .build();
//! assert!(router.is_empty());
//! ```

use std::fmt;

macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

macro_rules! info_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::info!($($arg)*);
        #[cfg(feature = "log")]
        ::log::info!($($arg)*);
    };
}

macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}

macro_rules! error_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::error!($($arg)*);
        #[cfg(feature = "log")]
        ::log::error!($($arg)*);
    };
}

/// Severity of a router diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// Sink for router diagnostics.
///
/// No-op intents (a `pop` on an empty stack, a failed `pop_if_match`) are
/// reported here at [`LogLevel::Debug`]; the reconciler reports pass summaries
/// at [`LogLevel::Trace`].
pub trait RouterLog {
    /// Record one message.
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>);
}

impl<F> RouterLog for F
where
    F: Fn(LogLevel, fmt::Arguments<'_>),
{
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self(level, args);
    }
}

/// Forwards diagnostics to the enabled logging backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacadeLog;

impl RouterLog for FacadeLog {
    #[allow(unused_variables)]
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        match level {
            LogLevel::Trace => {
                trace_log!("{}", args);
            }
            LogLevel::Debug => {
                debug_log!("{}", args);
            }
            LogLevel::Info => {
                info_log!("{}", args);
            }
            LogLevel::Warn => {
                warn_log!("{}", args);
            }
            LogLevel::Error => {
                error_log!("{}", args);
            }
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentLog;

impl RouterLog for SilentLog {
    fn log(&self, _level: LogLevel, _args: fmt::Arguments<'_>) {}
}
