use std::sync::LazyLock;

use regex::Regex;

use crate::parser::model::EntryParts;
use crate::parser::traits::{LineClassifier, LogEntry, LogFormat, ParseError};

// `[29/Oct/2025 20:57:22] ERROR [vendor.background:236] 1483094 140349782585408 [TASK ebd19c10-...] message`
static MODULE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)^\[(\d{2}/\w{3}/\d{4}\s+\d{2}:\d{2}:\d{2})\]\s+(\w+)\s+\[([^:\]]+):(\d+)\]\s+(\d+)\s+(\d+)\s+(?:\[TASK\s+([^\]]+)\]\s+)?(.*)$",
    )
    .expect("bracketed module pattern is valid")
});

// `[04/Jun/2025 10:51:18] INFO message`
static SIMPLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\[(\d{2}/\w{3}/\d{4}\s+\d{2}:\d{2}:\d{2})\]\s+(\w+)\s+(.*)$")
        .expect("bracketed simple pattern is valid")
});

/// Django debug-log lines carrying `[module:line] pid tid` and an optional
/// `[TASK <uuid>]` marker.
pub struct BracketedModuleClassifier;

impl LineClassifier for BracketedModuleClassifier {
    fn classify(&self, unit: &str) -> Result<LogEntry, ParseError> {
        let caps = MODULE_PATTERN.captures(unit).ok_or(ParseError::NoMatch)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str());

        Ok(EntryParts {
            timestamp: group(1).unwrap_or_default(),
            level: group(2).unwrap_or_default(),
            module: group(3),
            line_number: group(4),
            process_id: group(5),
            thread_id: group(6),
            task_id: group(7),
            message: group(8).unwrap_or_default(),
        }
        .build(unit, LogFormat::BracketedModule))
    }

    fn format(&self) -> LogFormat {
        LogFormat::BracketedModule
    }
}

/// Bracketed timestamp and level with no module segment.
pub struct BracketedSimpleClassifier;

impl LineClassifier for BracketedSimpleClassifier {
    fn classify(&self, unit: &str) -> Result<LogEntry, ParseError> {
        let caps = SIMPLE_PATTERN.captures(unit).ok_or(ParseError::NoMatch)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str());

        Ok(EntryParts {
            timestamp: group(1).unwrap_or_default(),
            level: group(2).unwrap_or_default(),
            message: group(3).unwrap_or_default(),
            ..Default::default()
        }
        .build(unit, LogFormat::BracketedSimple))
    }

    fn format(&self) -> LogFormat {
        LogFormat::BracketedSimple
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_line() {
        let entry = BracketedModuleClassifier
            .classify("[04/Jun/2025 10:51:18] INFO [worker:42] 123 456 job started")
            .unwrap();

        assert_eq!(entry.level, "INFO");
        assert_eq!(entry.timestamp, "04/Jun/2025 10:51:18");
        assert_eq!(entry.module, "worker");
        assert_eq!(entry.line_number, "42");
        assert_eq!(entry.process_id, "123");
        assert_eq!(entry.thread_id, "456");
        assert_eq!(entry.task_id, None);
        assert_eq!(entry.message, "job started");
        assert_eq!(entry.format, LogFormat::BracketedModule);
    }

    #[test]
    fn test_module_line_with_task_marker() {
        let raw = "[29/Oct/2025 20:57:22] ERROR [vendor.background:236] 1483094 140349782585408 [TASK ebd19c10-db79-4eac-9881-e1c85ee7caa6] translation failed";
        let entry = BracketedModuleClassifier.classify(raw).unwrap();

        assert_eq!(entry.task_id.as_deref(), Some("ebd19c10-db79-4eac-9881-e1c85ee7caa6"));
        assert_eq!(entry.message, "translation failed");
        assert_eq!(entry.module, "vendor.background");
        assert_eq!(entry.line_number, "236");
        assert_eq!(entry.raw_line, raw);
    }

    #[test]
    fn test_module_message_trimmed() {
        let entry = BracketedModuleClassifier
            .classify("[04/Jun/2025 10:51:18] DEBUG [a.b:1] 1 2    spaced out   ")
            .unwrap();
        assert_eq!(entry.message, "spaced out");
    }

    #[test]
    fn test_module_rejects_simple_line() {
        let result = BracketedModuleClassifier.classify("[04/Jun/2025 10:51:18] INFO plain message");
        assert_eq!(result, Err(ParseError::NoMatch));
    }

    #[test]
    fn test_simple_line_defaults() {
        let entry = BracketedSimpleClassifier
            .classify("[04/Jun/2025 10:51:18] warning disk almost full")
            .unwrap();

        assert_eq!(entry.level, "WARNING");
        assert_eq!(entry.module, "unknown");
        assert_eq!(entry.process_id, "0");
        assert_eq!(entry.thread_id, "0");
        assert_eq!(entry.message, "disk almost full");
    }

    #[test]
    fn test_simple_rejects_celery_header() {
        // the colon after the time keeps the celery header out of this pattern
        let result = BracketedSimpleClassifier.classify("[04/Jun/2025 10:51:18: INFO/MainProcess] ready");
        assert_eq!(result, Err(ParseError::NoMatch));
    }

    #[test]
    fn test_reclassifying_raw_line_is_stable() {
        let first = BracketedModuleClassifier
            .classify("[04/Jun/2025 10:51:18] INFO [worker:42] 123 456 job started")
            .unwrap();
        let second = BracketedModuleClassifier.classify(&first.raw_line).unwrap();
        assert_eq!(first, second);
    }
}
