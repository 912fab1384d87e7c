pub use super::model::{FallbackLevel, LogEntry, LogFormat, ParseError};

pub trait LineClassifier: Send + Sync {
    /// classify one non-empty unit of log text
    fn classify(&self, unit: &str) -> Result<LogEntry, ParseError>;
    fn format(&self) -> LogFormat;
}
