pub mod log_sink;

pub use log_sink::{LogSink, SinkFuture, dispatch};
