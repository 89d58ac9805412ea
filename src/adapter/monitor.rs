// Forward formatted lines to the MemoryLogMonitor TCP receiver.
// The receiver accepts newline-delimited lines; one buffered connection is
// kept behind a mutex and dropped on write failure, so the next submission
// reconnects. A failed line is reported, not retried.

use crate::domain::Severity;
use crate::error::ConsoleError;
use crate::port::{LogSink, SinkFuture};
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

pub struct MonitorSink {
    addr: String,
    conn: Mutex<Option<BufWriter<TcpStream>>>,
}

impl MonitorSink {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            conn: Mutex::new(None),
        }
    }

    /// Send one line, connecting first if needed. On any I/O error the
    /// connection is discarded so a later call starts fresh.
    async fn send(&self, line: &str) -> Result<(), ConsoleError> {
        let mut guard = self.conn.lock().await;

        let writer = match guard.take() {
            Some(conn) => guard.insert(conn),
            None => {
                let stream = TcpStream::connect(&self.addr).await.map_err(|e| {
                    ConsoleError::Sink(format!("connect {}: {e}", self.addr))
                })?;
                debug!("Connected to monitor at {}", self.addr);
                guard.insert(BufWriter::new(stream))
            }
        };

        if let Err(e) = write_line(writer, line).await {
            *guard = None;
            return Err(ConsoleError::Sink(format!("write to {}: {e}", self.addr)));
        }
        Ok(())
    }

    /// Mirror the forwarded line to the local subscriber at the same level.
    async fn forward(&self, severity: Severity, line: String) -> Result<(), ConsoleError> {
        self.send(&line).await?;
        match severity {
            Severity::Debug => debug!("{line}"),
            Severity::Info => info!("{line}"),
            Severity::Warn => warn!("{line}"),
            Severity::Error => error!("{line}"),
        }
        Ok(())
    }
}

async fn write_line(writer: &mut BufWriter<TcpStream>, line: &str) -> std::io::Result<()> {
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}

impl LogSink for MonitorSink {
    fn debug(&self, line: String) -> SinkFuture<'_> {
        Box::pin(self.forward(Severity::Debug, line))
    }

    fn info(&self, line: String) -> SinkFuture<'_> {
        Box::pin(self.forward(Severity::Info, line))
    }

    fn warn(&self, line: String) -> SinkFuture<'_> {
        Box::pin(self.forward(Severity::Warn, line))
    }

    fn error(&self, line: String) -> SinkFuture<'_> {
        Box::pin(self.forward(Severity::Error, line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncBufReadExt;

    async fn spawn_receiver() -> (std::net::SocketAddr, tokio::sync::mpsc::Receiver<String>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = tokio::sync::mpsc::channel(16);
        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut lines = tokio::io::BufReader::new(stream).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if tx.send(line).await.is_err() {
                    break;
                }
            }
        });
        (addr, rx)
    }

    #[tokio::test]
    async fn test_forwards_newline_delimited_lines() {
        let (addr, mut rx) = spawn_receiver().await;
        let sink = MonitorSink::new(addr.to_string());

        sink.info("[ts] [INFO] first".to_string()).await.unwrap();
        sink.error("[ts] [ERROR] second".to_string()).await.unwrap();

        assert_eq!(rx.recv().await.unwrap(), "[ts] [INFO] first");
        assert_eq!(rx.recv().await.unwrap(), "[ts] [ERROR] second");
    }

    #[tokio::test]
    async fn test_connect_failure_is_a_sink_error() {
        // Port 1 on localhost should refuse the connection
        let sink = MonitorSink::new("127.0.0.1:1");
        let err = sink.info("[ts] [INFO] lost".to_string()).await.unwrap_err();
        match err {
            ConsoleError::Sink(msg) => assert!(msg.contains("connect"), "msg: {msg}"),
            other => panic!("expected sink error, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_failed_send_clears_the_connection() {
        let sink = MonitorSink::new("127.0.0.1:1");
        let _ = sink.warn("[ts] [WARN] lost".to_string()).await;
        assert!(sink.conn.lock().await.is_none());
    }
}
