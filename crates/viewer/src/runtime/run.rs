//! Run: load the selected view once and write it to stdout.

use std::io::{self, Write};

use crate::display::{render_entry, render_page_summary, EMPTY_LIST};
use crate::runtime::boot::Booted;
use crate::runtime::cli::Cli;
use crate::source::SourceError;
use crate::view::LoadedLogs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text { color: bool },
    JsonLines,
}

/// Fetch, parse and print. Retrieval failures come back to the caller as
/// the single human-readable error they carry.
pub async fn run(booted: Booted, cli: &Cli) -> Result<(), SourceError> {
    let query = cli.command.query(&booted.config.translation);

    let loaded = match booted.viewer.initial_load(query).await {
        Some(result) => result?,
        None => return Ok(()),
    };

    let mode = if cli.json {
        OutputMode::JsonLines
    } else {
        OutputMode::Text { color: booted.config.color }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_loaded(&mut out, &loaded, mode) {
        // closed pipe (e.g. `| head`) is not a failure of the viewer
        if e.kind() != io::ErrorKind::BrokenPipe {
            tracing::error!(error = %e, "Failed to write output");
        }
    }

    if cli.stats {
        let snapshot = booted.metrics.snapshot();
        match serde_json::to_string(&snapshot) {
            Ok(json) => eprintln!("{}", json),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize metrics"),
        }
    }

    Ok(())
}

pub fn write_loaded<W: Write>(out: &mut W, loaded: &LoadedLogs, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::JsonLines => {
            for entry in &loaded.entries {
                serde_json::to_writer(&mut *out, entry)?;
                writeln!(out)?;
            }
        }
        OutputMode::Text { color } => {
            writeln!(out, "{}", loaded.view.title())?;
            if let Some(summary) = render_page_summary(loaded.file_info.as_ref(), loaded.pagination.as_ref()) {
                writeln!(out, "{}", summary)?;
            }
            writeln!(out)?;

            if loaded.is_empty() {
                writeln!(out, "{}", EMPTY_LIST)?;
            }
            for entry in &loaded.entries {
                writeln!(out, "{}", render_entry(entry, color))?;
            }
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_debug;
    use crate::view::LogView;

    fn loaded(content: &str) -> LoadedLogs {
        LoadedLogs {
            view: LogView::Debug,
            entries: parse_debug(content, None),
            file_info: None,
            pagination: None,
        }
    }

    #[test]
    fn test_write_text() {
        let mut buf = Vec::new();
        write_loaded(
            &mut buf,
            &loaded("[04/Jun/2025 10:51:18] INFO [worker:42] 123 456 job started"),
            OutputMode::Text { color: false },
        )
        .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Debug Logs\n\n"));
        assert!(text.contains("worker PID: 123 | TID: 456"));
    }

    #[test]
    fn test_write_empty_list() {
        let mut buf = Vec::new();
        write_loaded(&mut buf, &loaded(""), OutputMode::Text { color: false }).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains(EMPTY_LIST));
    }

    #[test]
    fn test_write_json_lines() {
        let mut buf = Vec::new();
        write_loaded(
            &mut buf,
            &loaded("[04/Jun/2025 10:51:18] INFO a\n[04/Jun/2025 10:51:19] ERROR b"),
            OutputMode::JsonLines,
        )
        .unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["level"], "ERROR");
        assert_eq!(second["message"], "b");
        assert_eq!(second["format"], "bracketed_simple");
        assert!(second.get("task_id").is_none());
    }
}
