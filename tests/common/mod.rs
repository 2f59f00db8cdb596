//! Test utilities for router scenarios
//!
//! Provides a delegate and completion callbacks that record into one shared
//! event log, so tests can assert on the exact interleaving of hooks.

#![allow(dead_code)]

use stack_navigator::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared, ordered record of lifecycle events.
pub type Events = Rc<RefCell<Vec<String>>>;

pub fn events() -> Events {
    Rc::new(RefCell::new(Vec::new()))
}

/// Take the recorded events, leaving the log empty.
pub fn drain(events: &Events) -> Vec<String> {
    std::mem::take(&mut *events.borrow_mut())
}

/// Delegate that records every hook as `"<hook> <entry>"`.
pub struct Recorder {
    events: Events,
}

impl Recorder {
    pub fn new(events: &Events) -> Self {
        Self {
            events: Rc::clone(events),
        }
    }

    fn record(&self, hook: &str, entry: &NavEntry) {
        self.events
            .borrow_mut()
            .push(format!("{} {}", hook, entry));
    }
}

impl RouterDelegate for Recorder {
    fn before_push(&mut self, entry: NavEntry) -> NavEntry {
        self.record("before_push", &entry);
        entry
    }

    fn after_push(&mut self, entry: &NavEntry) {
        self.record("after_push", entry);
    }

    fn before_pop(&mut self, entry: &NavEntry) {
        self.record("before_pop", entry);
    }

    fn after_pop(&mut self, entry: &NavEntry) {
        self.record("after_pop", entry);
    }
}

/// Logger that keeps every message as `"<LEVEL> <message>"`.
#[derive(Default)]
pub struct RecordingLog {
    lines: RefCell<Vec<String>>,
}

impl RecordingLog {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Messages logged at `level`, oldest first.
    pub fn at(&self, level: LogLevel) -> Vec<String> {
        let prefix = format!("{} ", level);
        self.lines
            .borrow()
            .iter()
            .filter_map(|line| line.strip_prefix(&prefix).map(str::to_string))
            .collect()
    }
}

impl RouterLog for RecordingLog {
    fn log(&self, level: LogLevel, args: std::fmt::Arguments<'_>) {
        self.lines.borrow_mut().push(format!("{} {}", level, args));
    }
}

/// Entry whose completion callback records `"on_finish <path>"`.
pub fn tracked(path: &str, events: &Events) -> NavEntry {
    let sink = Rc::clone(events);
    let name = path.to_string();
    NavEntry::new(path).on_finish(move || sink.borrow_mut().push(format!("on_finish {}", name)))
}

/// Router with a [`Recorder`] delegate, logging through `env_logger`.
pub fn recording_router(events: &Events) -> NavRouter {
    init_logging();
    NavRouter::builder()
        .delegate(Recorder::new(events))
        .build()
}

/// Paths of the displayed stack, bottom-to-top.
pub fn paths(router: &NavRouter) -> Vec<String> {
    router
        .entries()
        .iter()
        .map(|entry| entry.path().to_string())
        .collect()
}

/// Route facade logging to the test harness output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
