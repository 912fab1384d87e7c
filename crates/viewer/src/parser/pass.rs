//! Parse passes: whole-block and per-record entry points.

use std::sync::LazyLock;

use super::fold::{EntryFolder, FallbackPolicy};
use super::formats::split_spans;
use super::metrics::ParsingMetrics;
use super::split::{split_escaped_lines, split_lines};
use super::table::ClassifierTable;
use super::traits::LogEntry;

static DEBUG_TABLE: LazyLock<ClassifierTable> = LazyLock::new(ClassifierTable::debug);
static CELERY_TABLE: LazyLock<ClassifierTable> = LazyLock::new(ClassifierTable::celery_lines);
static TRANSLATION_TABLE: LazyLock<ClassifierTable> = LazyLock::new(ClassifierTable::translation);

/// Whole-block pass over newline-separated content.
pub fn parse_block(
    content: &str,
    table: &ClassifierTable,
    policy: FallbackPolicy,
    metrics: Option<&ParsingMetrics>,
) -> Vec<LogEntry> {
    let mut folder = EntryFolder::new(table, policy);
    if let Some(m) = metrics {
        folder = folder.with_metrics(m);
        m.record_pass();
    }

    for line in split_lines(content) {
        folder.push(line);
    }

    let entries = folder.finish();
    tracing::debug!(entries = entries.len(), "parse: block pass complete");
    entries
}

/// Application debug log.
pub fn parse_debug(content: &str, metrics: Option<&ParsingMetrics>) -> Vec<LogEntry> {
    parse_block(content, &DEBUG_TABLE, FallbackPolicy::RAW, metrics)
}

/// Celery log. Span mode first, so headers concatenated without newlines
/// still become separate entries; when the content carries no celery header
/// at all, falls back to line mode over the celery and Django formats.
pub fn parse_celery(content: &str, metrics: Option<&ParsingMetrics>) -> Vec<LogEntry> {
    let split = split_spans(content);

    let mut folder = EntryFolder::new(&CELERY_TABLE, FallbackPolicy::RAW);
    if let Some(m) = metrics {
        folder = folder.with_metrics(m);
        m.record_pass();
    }

    if !split.entries.is_empty() {
        if let Some(preamble) = split.preamble {
            folder.push_fallback(preamble.trim());
        }
        if let Some(m) = metrics {
            m.record_span_entries(split.entries.len());
        }
        for entry in split.entries {
            folder.push_entry(entry);
        }

        let entries = folder.finish();
        tracing::debug!(entries = entries.len(), mode = "span", "parse: celery pass complete");
        return entries;
    }

    for unit in split_escaped_lines(content) {
        folder.push(unit);
    }

    let entries = folder.finish();
    tracing::debug!(entries = entries.len(), mode = "line", "parse: celery pass complete");
    entries
}

/// Per-record mode: one already-delimited record, never split, never folded.
pub fn parse_record(content: &str, metrics: Option<&ParsingMetrics>) -> LogEntry {
    match TRANSLATION_TABLE.classify(content) {
        Ok(entry) => {
            if let Some(m) = metrics {
                m.record_match(entry.format);
            }
            entry
        }
        Err(err) => {
            tracing::trace!(error = %err, "parse: record unmatched, using UNKNOWN fallback");
            if let Some(m) = metrics {
                if matches!(err, super::ParseError::LineTooLarge(..)) {
                    m.record_too_large();
                }
                m.record_recovery(super::metrics::RecoveryKind::Fallback);
            }
            FallbackPolicy::UNKNOWN.entry(content)
        }
    }
}

/// Per-record mode over a list of records, one entry per record.
pub fn parse_records<'r, I>(records: I, metrics: Option<&ParsingMetrics>) -> Vec<LogEntry>
where
    I: IntoIterator<Item = &'r str>,
{
    if let Some(m) = metrics {
        m.record_pass();
    }
    records
        .into_iter()
        .map(|content| parse_record(content, metrics))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LogFormat;

    #[test]
    fn test_debug_scenario() {
        let entries = parse_debug("[04/Jun/2025 10:51:18] INFO [worker:42] 123 456 job started\n", None);
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.level, "INFO");
        assert_eq!(e.timestamp, "04/Jun/2025 10:51:18");
        assert_eq!(e.module, "worker");
        assert_eq!(e.process_id, "123");
        assert_eq!(e.thread_id, "456");
        assert_eq!(e.message, "job started");
    }

    #[test]
    fn test_debug_two_continuations() {
        let content = "[04/Jun/2025 10:51:18] ERROR [worker:42] 123 456 job failed\nline1\nline2\n";
        let entries = parse_debug(content, None);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].message.ends_with(" line1 line2"));
        assert!(entries[0].raw_line.ends_with("\nline1\nline2"));
    }

    #[test]
    fn test_debug_blank_lines_skipped() {
        let content = "\n\n[04/Jun/2025 10:51:18] INFO a\n   \n[04/Jun/2025 10:51:19] INFO b\n";
        let entries = parse_debug(content, None);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_debug_empty_content() {
        assert!(parse_debug("", None).is_empty());
    }

    #[test]
    fn test_celery_django_line_mode() {
        let content = "INFO 2025-06-04 10:51:18,412 vendor.tasks 123 456 starting run\nWARNING 2025-06-04 10:51:19,000 vendor.tasks 123 retrying\n  detail";
        let entries = parse_celery(content, None);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].module, "vendor.tasks");
        assert_eq!(entries[0].thread_id, "456");
        assert_eq!(entries[0].message, "starting run");
        assert_eq!(entries[1].format, LogFormat::DjangoProcess);
        assert_eq!(entries[1].message, "retrying   detail");
    }

    #[test]
    fn test_celery_escaped_newlines_in_line_mode() {
        let content = "INFO 2025-06-04 10:51:18,412 vendor.tasks 123 456 a\\nINFO 2025-06-04 10:51:19,412 vendor.tasks 123 456 b";
        let entries = parse_celery(content, None);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].message, "b");
    }

    #[test]
    fn test_celery_span_mode_counts_headers() {
        let content = "[10/Jul/2025 13:25:13: INFO/MainProcess] a[10/Jul/2025 13:25:14: INFO/MainProcess] b[10/Jul/2025 13:25:15: ERROR/MainProcess] c\nmore";
        let metrics = ParsingMetrics::new();
        let entries = parse_celery(content, Some(&metrics));

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].level, "ERROR");
        assert_eq!(entries[2].message, "c\nmore");
        assert_eq!(metrics.snapshot().span_entries, 3);
    }

    #[test]
    fn test_celery_span_preamble_becomes_raw() {
        let content = "booting\n[10/Jul/2025 13:25:13: INFO/MainProcess] ready";
        let entries = parse_celery(content, None);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, "RAW");
        assert_eq!(entries[0].message, "booting");
        assert_eq!(entries[1].message, "ready");
    }

    #[test]
    fn test_celery_unmatched_first_line_is_raw() {
        let entries = parse_celery("nothing structured", None);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, "RAW");
        assert_eq!(entries[0].message, "nothing structured");
        assert_eq!(entries[0].raw_line, "nothing structured");
    }

    #[test]
    fn test_record_with_task() {
        let entry = parse_record(
            "[29/Oct/2025 20:57:22] ERROR [vendor.background:236] 1483094 140349782585408 [TASK ebd19c10-db79-4eac-9881-e1c85ee7caa6] translation failed",
            None,
        );
        assert_eq!(entry.task_id.as_deref(), Some("ebd19c10-db79-4eac-9881-e1c85ee7caa6"));
        assert_eq!(entry.message, "translation failed");
    }

    #[test]
    fn test_record_unknown_fallback() {
        let entry = parse_record("some free text", None);
        assert_eq!(entry.level, "UNKNOWN");
        assert_eq!(entry.timestamp, "");
        assert_eq!(entry.message, "some free text");
        assert_eq!(entry.content(), "some free text");
    }

    #[test]
    fn test_records_never_fold() {
        let entries = parse_records(
            ["[29/Oct/2025 20:57:22] INFO [a:1] 1 2 started", "free text", "more free text"],
            None,
        );
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].message, "started");
        assert_eq!(entries[1].level, "UNKNOWN");
        assert_eq!(entries[2].level, "UNKNOWN");
    }

    #[test]
    fn test_multiline_record_keeps_message_body() {
        let entry = parse_record("[29/Oct/2025 20:57:22] ERROR [a:1] 1 2 failed\nTraceback", None);
        assert_eq!(entry.format, LogFormat::BracketedModule);
        assert_eq!(entry.message, "failed\nTraceback");
    }
}
