use chrono::Local;

/// Timestamp layout of a formatted line (yyyy-MM-dd HH:mm:ss.SSS)
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Default level token when the form field is absent or blank
pub const DEFAULT_LEVEL: &str = "INFO";

/// Severity of a submission. Selects the sink operation only; the line
/// itself carries the uppercased token as supplied, so an unrecognized
/// token still appears verbatim while routing to the info sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Case-insensitive token match; anything unrecognized maps to `Info`.
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_uppercase().as_str() {
            "DEBUG" => Self::Debug,
            "WARN" => Self::Warn,
            "ERROR" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// One validated form submission. Lives for a single request: built,
/// formatted into one line, dispatched, discarded.
#[derive(Debug, Clone)]
pub struct LogSubmission {
    message: String,
    label: String,
    severity: Severity,
    timestamp: String,
}

impl LogSubmission {
    /// Build a submission from the raw form fields.
    ///
    /// Returns `None` when the message is empty or whitespace-only; the
    /// raw (untrimmed) message is kept for the formatted line. The level
    /// defaults to `INFO` when absent or blank.
    pub fn new(message: String, level: Option<&str>) -> Option<Self> {
        if message.trim().is_empty() {
            return None;
        }

        let token = match level.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => DEFAULT_LEVEL,
        };

        Some(Self {
            message,
            label: token.to_ascii_uppercase(),
            severity: Severity::from_token(token),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        })
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// `[<timestamp>] [<LEVEL>] <message>`
    pub fn format_line(&self) -> String {
        format!("[{}] [{}] {}", self.timestamp, self.label, self.message)
    }
}
