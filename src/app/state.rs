use crate::adapter::{MonitorSink, TracingSink};
use crate::config::Settings;
use crate::flash::FlashStore;
use crate::port::LogSink;
use std::sync::Arc;
use tracing::info;

/// Flash texts, resolved once from configuration.
pub struct Messages {
    pub success: String,
    pub empty: String,
    pub failure_prefix: String,
}

/// Shared application state: the sink, the flash store, and the flash texts.
#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<dyn LogSink>,
    pub flash: Arc<FlashStore>,
    pub messages: Arc<Messages>,
}

impl AppState {
    /// Create `AppState` from configuration settings. A configured monitor
    /// address selects the TCP forwarding sink; otherwise lines stay with
    /// the local tracing subscriber.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let sink: Arc<dyn LogSink> = match &settings.monitor_addr {
            Some(addr) => {
                info!("Forwarding submissions to MemoryLogMonitor at {addr}");
                Arc::new(MonitorSink::new(addr.clone()))
            }
            None => {
                info!("No monitor address configured, logging submissions locally");
                Arc::new(TracingSink)
            }
        };

        Self {
            sink,
            flash: Arc::new(FlashStore::new()),
            messages: Arc::new(Messages {
                success: settings.success_message.clone(),
                empty: settings.empty_message.clone(),
                failure_prefix: settings.failure_prefix.clone(),
            }),
        }
    }

    /// State over an explicit sink, with default texts. Used by tests.
    pub fn with_sink(sink: Arc<dyn LogSink>, messages: Messages) -> Self {
        Self {
            sink,
            flash: Arc::new(FlashStore::new()),
            messages: Arc::new(messages),
        }
    }
}
