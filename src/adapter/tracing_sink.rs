use crate::port::{LogSink, SinkFuture};
use tracing::{debug, error, info, warn};

/// Sink that hands lines to the in-process tracing subscriber at the
/// matching level. Used when no monitor address is configured.
pub struct TracingSink;

impl LogSink for TracingSink {
    fn debug(&self, line: String) -> SinkFuture<'_> {
        Box::pin(async move {
            debug!("{line}");
            Ok(())
        })
    }

    fn info(&self, line: String) -> SinkFuture<'_> {
        Box::pin(async move {
            info!("{line}");
            Ok(())
        })
    }

    fn warn(&self, line: String) -> SinkFuture<'_> {
        Box::pin(async move {
            warn!("{line}");
            Ok(())
        })
    }

    fn error(&self, line: String) -> SinkFuture<'_> {
        Box::pin(async move {
            error!("{line}");
            Ok(())
        })
    }
}
