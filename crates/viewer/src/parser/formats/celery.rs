use std::sync::LazyLock;

use regex::Regex;

use crate::parser::model::EntryParts;
use crate::parser::traits::{LineClassifier, LogEntry, LogFormat, ParseError};

// `[10/Jul/2025 13:25:13: INFO/MainProcess] message`
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\[(\d{2}/\w{3}/\d{4}\s+\d{2}:\d{2}:\d{2}):\s+(\w+)/([\w.\-]+)\]\s+(.*)$")
        .expect("celery line pattern is valid")
});

// Header alone, unanchored, for locating entries inside a concatenated blob.
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(\d{2}/\w{3}/\d{4}\s+\d{2}:\d{2}:\d{2}):\s+(\w+)/([\w.\-]+)\]")
        .expect("celery header pattern is valid")
});

/// Celery worker header, `[timestamp: LEVEL/ProcessName] message`.
pub struct CeleryClassifier;

impl LineClassifier for CeleryClassifier {
    fn classify(&self, unit: &str) -> Result<LogEntry, ParseError> {
        let caps = LINE_PATTERN.captures(unit).ok_or(ParseError::NoMatch)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str());

        Ok(EntryParts {
            timestamp: group(1).unwrap_or_default(),
            level: group(2).unwrap_or_default(),
            module: group(3),
            message: group(4).unwrap_or_default(),
            ..Default::default()
        }
        .build(unit, LogFormat::CeleryHeader))
    }

    fn format(&self) -> LogFormat {
        LogFormat::CeleryHeader
    }
}

/// Result of cutting a blob at every celery header.
#[derive(Debug, Default)]
pub struct SpanSplit<'a> {
    /// Non-blank text before the first header, if any
    pub preamble: Option<&'a str>,
    /// One entry per header, in order of appearance
    pub entries: Vec<LogEntry>,
}

/// Cut `content` into one entry per celery header. Each entry spans from its
/// header up to the next header or the end of content, so messages that were
/// concatenated without newlines, or that wrap across lines, stay attached to
/// the header that owns them.
pub fn split_spans(content: &str) -> SpanSplit<'_> {
    let headers: Vec<_> = HEADER_PATTERN.captures_iter(content).collect();

    let Some(first) = headers.first().and_then(|c| c.get(0)) else {
        return SpanSplit::default();
    };

    let preamble = Some(&content[..first.start()]).filter(|s| !s.trim().is_empty());

    let mut entries = Vec::with_capacity(headers.len());
    for (idx, caps) in headers.iter().enumerate() {
        let Some(whole) = caps.get(0) else { continue };
        let end = headers
            .get(idx + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(content.len());

        let group = |i: usize| caps.get(i).map(|m| m.as_str());
        let entry = EntryParts {
            timestamp: group(1).unwrap_or_default(),
            level: group(2).unwrap_or_default(),
            module: group(3),
            message: &content[whole.end()..end],
            ..Default::default()
        }
        .build(&content[whole.start()..end], LogFormat::CeleryHeader);

        entries.push(entry);
    }

    tracing::trace!(headers = entries.len(), "celery: span split complete");

    SpanSplit { preamble, entries }
}
