//! Shared test support utilities
//!
//! Provides a `MockSink` capturing every dispatched line per severity, with
//! a switchable failure mode, for use in unit and integration tests.

use crate::domain::Severity;
use crate::error::ConsoleError;
use crate::port::{LogSink, SinkFuture};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock sink that records `(severity, line)` pairs in dispatch order.
pub struct MockSink {
    calls: Arc<Mutex<Vec<(Severity, String)>>>,
    should_fail: AtomicBool,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<(Severity, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, severity: Severity, line: String) -> SinkFuture<'_> {
        let calls = self.calls.clone();
        Box::pin(async move {
            if self.should_fail.load(Ordering::SeqCst) {
                return Err(ConsoleError::Sink("mock sink unavailable".to_string()));
            }
            calls.lock().unwrap().push((severity, line));
            Ok(())
        })
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for MockSink {
    fn debug(&self, line: String) -> SinkFuture<'_> {
        self.record(Severity::Debug, line)
    }

    fn info(&self, line: String) -> SinkFuture<'_> {
        self.record(Severity::Info, line)
    }

    fn warn(&self, line: String) -> SinkFuture<'_> {
        self.record(Severity::Warn, line)
    }

    fn error(&self, line: String) -> SinkFuture<'_> {
        self.record(Severity::Error, line)
    }
}
