use crate::domain::Severity;
use crate::error::ConsoleError;
use std::future::Future;
use std::pin::Pin;

pub type SinkFuture<'a> = Pin<Box<dyn Future<Output = Result<(), ConsoleError>> + Send + 'a>>;

/// Severity-specific write operations of the logging backend. Each accepts
/// one preformatted line.
///
/// This trait is dyn-compatible by using boxed futures instead of `impl Future`.
pub trait LogSink: Send + Sync {
    fn debug(&self, line: String) -> SinkFuture<'_>;
    fn info(&self, line: String) -> SinkFuture<'_>;
    fn warn(&self, line: String) -> SinkFuture<'_>;
    fn error(&self, line: String) -> SinkFuture<'_>;
}

/// Route a line to the sink operation matching the severity. Pure routing,
/// no retry or fallback.
pub fn dispatch(sink: &dyn LogSink, severity: Severity, line: String) -> SinkFuture<'_> {
    match severity {
        Severity::Debug => sink.debug(line),
        Severity::Info => sink.info(line),
        Severity::Warn => sink.warn(line),
        Severity::Error => sink.error(line),
    }
}
