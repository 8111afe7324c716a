//! Testing utilities for hookreg.
//!
//! This module provides handlers that make dispatch behaviour observable.
//!
//! # Features
//!
//! - [`CallLog`]: A shared, ordered record of handler invocations
//! - [`RecordingHandler`]: A handler that appends to a [`CallLog`]
//! - [`FailingHandler`]: A handler that always returns an error
//! - [`CountingHandler`]: A handler that counts invocations

use hookreg_core::{BoxError, Handler, HookArgs};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Call Log
// ============================================================================

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// The label of the handler that ran.
    pub label: String,
    /// The arguments it received.
    pub args: HookArgs,
}

/// A shared, ordered record of handler invocations.
///
/// Clones share the same log, so one log can be handed to many handlers and
/// inspected afterwards.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// let catalog = Catalog::builder()
///     .register("handlers/a.ext", "handleA", RecordingHandler::new("A", &log))
///     .build();
///
/// registry.process_hook("event_x", "1", &args)?;
/// assert_eq!(log.labels(), vec!["A"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an invocation.
    pub fn record(&self, label: impl Into<String>, args: &HookArgs) {
        self.calls.lock().unwrap().push(Call {
            label: label.into(),
            args: args.clone(),
        });
    }

    /// All recorded invocations, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// The labels of all recorded invocations, oldest first.
    pub fn labels(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|call| call.label.clone())
            .collect()
    }

    /// Number of recorded invocations.
    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }

    /// Forget all recorded invocations.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records each call in a [`CallLog`] under a label.
#[derive(Debug, Clone)]
pub struct RecordingHandler {
    label: String,
    log: CallLog,
}

impl RecordingHandler {
    /// Create a handler that records into `log` as `label`.
    pub fn new(label: impl Into<String>, log: &CallLog) -> Self {
        Self {
            label: label.into(),
            log: log.clone(),
        }
    }
}

impl Handler for RecordingHandler {
    fn call(&self, args: &HookArgs) -> Result<(), BoxError> {
        self.log.record(self.label.clone(), args);
        Ok(())
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A handler that always fails with the same message.
#[derive(Debug, Clone)]
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a handler failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Handler for FailingHandler {
    fn call(&self, _args: &HookArgs) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations.
#[derive(Debug, Clone, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Handler for CountingHandler {
    fn call(&self, _args: &HookArgs) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
