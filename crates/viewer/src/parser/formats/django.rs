use std::sync::LazyLock;

use regex::Regex;

use crate::parser::model::EntryParts;
use crate::parser::traits::{LineClassifier, LogEntry, LogFormat, ParseError};

// `INFO 2025-06-04 10:51:18,412 vendor.tasks 123 456 message`
static THREADED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(\w+)\s+(\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}:\d{2},\d{3})\s+(\S+)\s+(\d+)\s+(\d+)\s+(.*)$")
        .expect("django threaded pattern is valid")
});

// `INFO 2025-06-04 10:51:18,412 vendor.tasks 123 message`
static PROCESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(\w+)\s+(\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}:\d{2},\d{3})\s+(\S+)\s+(\d+)\s+(.*)$")
        .expect("django process pattern is valid")
});

/// Space-delimited Django logging header with both process and thread ids.
pub struct DjangoThreadedClassifier;

impl LineClassifier for DjangoThreadedClassifier {
    fn classify(&self, unit: &str) -> Result<LogEntry, ParseError> {
        let caps = THREADED_PATTERN.captures(unit).ok_or(ParseError::NoMatch)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str());

        Ok(EntryParts {
            level: group(1).unwrap_or_default(),
            timestamp: group(2).unwrap_or_default(),
            module: group(3),
            process_id: group(4),
            thread_id: group(5),
            message: group(6).unwrap_or_default(),
            ..Default::default()
        }
        .build(unit, LogFormat::DjangoThreaded))
    }

    fn format(&self) -> LogFormat {
        LogFormat::DjangoThreaded
    }
}

/// Same header without the thread id. Must sit after [`DjangoThreadedClassifier`]
/// in a table, otherwise the thread id would be swallowed into the message.
pub struct DjangoProcessClassifier;

impl LineClassifier for DjangoProcessClassifier {
    fn classify(&self, unit: &str) -> Result<LogEntry, ParseError> {
        let caps = PROCESS_PATTERN.captures(unit).ok_or(ParseError::NoMatch)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str());

        Ok(EntryParts {
            level: group(1).unwrap_or_default(),
            timestamp: group(2).unwrap_or_default(),
            module: group(3),
            process_id: group(4),
            message: group(5).unwrap_or_default(),
            ..Default::default()
        }
        .build(unit, LogFormat::DjangoProcess))
    }

    fn format(&self) -> LogFormat {
        LogFormat::DjangoProcess
    }
}
