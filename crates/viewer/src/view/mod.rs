//! View module: the three log sources and how each one is fetched and parsed.

pub mod latch;
pub mod load;

use serde::{Deserialize, Serialize};

pub use latch::LoadLatch;
pub use load::{LoadedLogs, LogViewer};

/// Which log a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogView {
    /// Application debug log, newline-split, bracketed formats
    Debug,
    /// Task-queue log, span-split celery headers or Django lines
    Celery,
    /// Translation pipeline, one record per entry
    Translation,
}

impl LogView {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogView::Debug => "debug",
            LogView::Celery => "celery",
            LogView::Translation => "translation",
        }
    }

    /// Heading shown above the list.
    pub fn title(&self) -> &'static str {
        match self {
            LogView::Debug => "Debug Logs",
            LogView::Celery => "Celery Logs",
            LogView::Translation => "Translation Logs",
        }
    }

    /// Endpoint path for this view.
    pub fn path<'a>(&self, sources: &'a crate::conf::SourcesConfig) -> &'a str {
        match self {
            LogView::Debug => &sources.debug,
            LogView::Celery => &sources.celery,
            LogView::Translation => &sources.translation,
        }
    }
}

impl std::fmt::Display for LogView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
