use chrono::{SecondsFormat, Utc};

use super::metrics::{ParsingMetrics, RecoveryKind};
use super::table::ClassifierTable;
use super::traits::*;

/// Timestamp given to fallback entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackTimestamp {
    /// Current wall-clock time, RFC 3339 UTC with milliseconds
    Now,
    Empty,
}

impl FallbackTimestamp {
    fn render(&self) -> String {
        match self {
            FallbackTimestamp::Now => Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            FallbackTimestamp::Empty => String::new(),
        }
    }
}

/// How unmatched content becomes an entry when there is nothing to fold into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackPolicy {
    pub level: FallbackLevel,
    pub timestamp: FallbackTimestamp,
}

impl FallbackPolicy {
    /// Debug and celery views
    pub const RAW: Self = Self {
        level: FallbackLevel::Raw,
        timestamp: FallbackTimestamp::Now,
    };

    /// Translation view
    pub const UNKNOWN: Self = Self {
        level: FallbackLevel::Unknown,
        timestamp: FallbackTimestamp::Empty,
    };

    pub fn entry(&self, raw: &str) -> LogEntry {
        LogEntry::fallback(raw, self.level, self.timestamp.render())
    }
}

enum FoldAction {
    StartNew(LogEntry),
    AppendToLast,
    Fallback,
}

/// Accumulator for one parse pass.
///
/// Each unit becomes a new entry, an append onto the last entry, or (only
/// while the sequence is still empty) a fallback entry. Entries are never
/// reordered.
pub struct EntryFolder<'a> {
    table: &'a ClassifierTable,
    policy: FallbackPolicy,
    metrics: Option<&'a ParsingMetrics>,
    entries: Vec<LogEntry>,
}

impl<'a> EntryFolder<'a> {
    pub fn new(table: &'a ClassifierTable, policy: FallbackPolicy) -> Self {
        Self {
            table,
            policy,
            metrics: None,
            entries: Vec::new(),
        }
    }

    pub fn with_metrics(mut self, metrics: &'a ParsingMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Feed one non-blank unit.
    pub fn push(&mut self, unit: &str) {
        let action = match self.table.classify(unit) {
            Ok(entry) => FoldAction::StartNew(entry),
            Err(err) => {
                if let ParseError::LineTooLarge(len, max) = err {
                    tracing::debug!(len, max, "fold: unit exceeds size limit, not matched");
                    if let Some(m) = self.metrics {
                        m.record_too_large();
                    }
                }
                if self.entries.is_empty() {
                    FoldAction::Fallback
                } else {
                    FoldAction::AppendToLast
                }
            }
        };

        match action {
            FoldAction::StartNew(entry) => {
                if let Some(m) = self.metrics {
                    m.record_match(entry.format);
                }
                self.entries.push(entry);
            }
            FoldAction::AppendToLast => {
                if let Some(last) = self.entries.last_mut() {
                    tracing::trace!("fold: continuation appended to previous entry");
                    last.append_continuation(unit);
                }
                if let Some(m) = self.metrics {
                    m.record_recovery(RecoveryKind::Continuation);
                }
            }
            FoldAction::Fallback => {
                tracing::trace!("fold: no previous entry, emitting fallback");
                self.push_fallback(unit);
            }
        }
    }

    /// Append an already-built entry (used for celery span output).
    pub fn push_entry(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Append a fallback entry regardless of what precedes it.
    pub fn push_fallback(&mut self, raw: &str) {
        self.entries.push(self.policy.entry(raw));
        if let Some(m) = self.metrics {
            m.record_recovery(RecoveryKind::Fallback);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish the pass.
    pub fn finish(self) -> Vec<LogEntry> {
        self.entries
    }
}
