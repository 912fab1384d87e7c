use thiserror::Error;
use serde::{Serialize, Deserialize};

/// Default module name when a format does not encode one.
pub const UNKNOWN_MODULE: &str = "unknown";
/// Default process / thread / line identifier.
pub const DEFAULT_ID: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// `[04/Jun/2025 10:51:18] INFO [worker:42] 123 456 [TASK id] message`
    BracketedModule,
    /// `[04/Jun/2025 10:51:18] INFO message`
    BracketedSimple,
    /// `[04/Jun/2025 10:51:18: INFO/MainProcess] message`
    CeleryHeader,
    /// `INFO 2025-06-04 10:51:18,412 module 123 456 message`
    DjangoThreaded,
    /// `INFO 2025-06-04 10:51:18,412 module 123 message`
    DjangoProcess,
    /// Synthesized entry for content no pattern recognised
    Fallback,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::BracketedModule => "bracketed_module",
            LogFormat::BracketedSimple => "bracketed_simple",
            LogFormat::CeleryHeader => "celery_header",
            LogFormat::DjangoThreaded => "django_threaded",
            LogFormat::DjangoProcess => "django_process",
            LogFormat::Fallback => "fallback",
        }
    }
}

/// Level assigned to fallback entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FallbackLevel {
    /// Whole-block views (debug, celery)
    Raw,
    /// Per-record view (translation)
    Unknown,
}

impl FallbackLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackLevel::Raw => "RAW",
            FallbackLevel::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("No pattern matched")]
    NoMatch,

    #[error("Line too large: {0} bytes (max: {1} bytes)")]
    LineTooLarge(usize, usize),
}

/// One structured log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Severity token, uppercased (`ERROR`, `INFO`, ... or `RAW` / `UNKNOWN`)
    pub level: String,

    /// Timestamp exactly as it appeared in the source; may be empty
    pub timestamp: String,

    /// Logger / component / celery process name
    pub module: String,

    /// Source line from the `[module:NNN]` segment
    pub line_number: String,

    pub process_id: String,

    pub thread_id: String,

    /// Correlation id from a `[TASK <uuid>]` marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    /// Free-text payload
    pub message: String,

    /// Original source text (multi-line once continuations are folded in)
    pub raw_line: String,

    /// Pattern that produced this entry
    pub format: LogFormat,
}

impl LogEntry {
    /// Entry for content no pattern recognised.
    pub fn fallback(raw: &str, level: FallbackLevel, timestamp: String) -> Self {
        Self {
            level: level.as_str().to_string(),
            timestamp,
            module: UNKNOWN_MODULE.to_string(),
            line_number: DEFAULT_ID.to_string(),
            process_id: DEFAULT_ID.to_string(),
            thread_id: DEFAULT_ID.to_string(),
            task_id: None,
            message: raw.to_string(),
            raw_line: raw.to_string(),
            format: LogFormat::Fallback,
        }
    }

    /// Fold an unmatched line into this entry.
    pub fn append_continuation(&mut self, line: &str) {
        self.message.push(' ');
        self.message.push_str(line);
        self.raw_line.push('\n');
        self.raw_line.push_str(line);
    }

    /// Alias used by the per-record view, where the raw text is the record content.
    pub fn content(&self) -> &str {
        &self.raw_line
    }

    pub fn is_fallback(&self) -> bool {
        self.format == LogFormat::Fallback
    }
}

/// Builder used by the format parsers so every entry gets the documented defaults.
#[derive(Debug, Default)]
pub(crate) struct EntryParts<'a> {
    pub level: &'a str,
    pub timestamp: &'a str,
    pub module: Option<&'a str>,
    pub line_number: Option<&'a str>,
    pub process_id: Option<&'a str>,
    pub thread_id: Option<&'a str>,
    pub task_id: Option<&'a str>,
    pub message: &'a str,
}

impl EntryParts<'_> {
    pub fn build(self, raw: &str, format: LogFormat) -> LogEntry {
        LogEntry {
            level: self.level.to_ascii_uppercase(),
            timestamp: self.timestamp.to_string(),
            module: non_empty_or(self.module, UNKNOWN_MODULE),
            line_number: non_empty_or(self.line_number, DEFAULT_ID),
            process_id: non_empty_or(self.process_id, DEFAULT_ID),
            thread_id: non_empty_or(self.thread_id, DEFAULT_ID),
            task_id: self
                .task_id
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            message: self.message.trim().to_string(),
            raw_line: raw.to_string(),
            format,
        }
    }
}

fn non_empty_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
