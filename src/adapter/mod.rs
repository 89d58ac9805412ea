pub mod monitor;
pub mod tracing_sink;

pub use monitor::MonitorSink;
pub use tracing_sink::TracingSink;
