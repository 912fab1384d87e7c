//! Render: one entry per block of terminal text.

use colored::Colorize;

use super::style::LevelStyle;
use super::timestamp::format_timestamp;
use crate::parser::LogEntry;
use crate::source::{FileInfo, Pagination};

pub const EMPTY_LIST: &str = "No logs found";

/// Render one entry: a header line, then the message indented below it.
pub fn render_entry(entry: &LogEntry, color: bool) -> String {
    let style = LevelStyle::for_level(&entry.level);
    let level = format!("{:<7}", entry.level);
    let timestamp = format_timestamp(&entry.timestamp);
    let ids = format!("PID: {} | TID: {}", entry.process_id, entry.thread_id);

    let mut header = if color {
        format!(
            "{} {} {} {}",
            level.color(style.color()).bold(),
            timestamp.dimmed(),
            entry.module.cyan(),
            ids.dimmed()
        )
    } else {
        format!("{} {} {} {}", level, timestamp, entry.module, ids)
    };

    if let Some(task) = &entry.task_id {
        header.push_str(" TASK: ");
        header.push_str(task);
    }

    let mut out = header;
    for line in entry.message.lines() {
        out.push_str("\n    ");
        out.push_str(line);
    }
    out
}

/// One-line summary of a translation page.
pub fn render_page_summary(file_info: Option<&FileInfo>, pagination: Option<&Pagination>) -> Option<String> {
    let mut parts = Vec::new();

    if let Some(info) = file_info {
        let presence = if info.exists { "" } else { " (missing)" };
        parts.push(format!("File: {} [{}]{}", info.filename, info.path, presence));
    }
    if let Some(page) = pagination {
        parts.push(format!(
            "Showing {} of {} lines (limit {})",
            page.lines_returned, page.total_lines_in_file, page.limit
        ));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" | "))
    }
}
