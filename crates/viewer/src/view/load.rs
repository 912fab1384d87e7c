//! Load: fetch a view's raw text and run the matching parse pass.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::latch::LoadLatch;
use super::LogView;
use crate::conf::SourcesConfig;
use crate::parser::{self, LogEntry, ParsingMetrics};
use crate::source::{self, FileInfo, LogSource, Pagination, SourceError, TranslationQuery};

/// Outcome of one successful load.
#[derive(Debug, Clone, Serialize)]
pub struct LoadedLogs {
    pub view: LogView,
    pub entries: Vec<LogEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_info: Option<FileInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl LoadedLogs {
    fn entries_only(view: LogView, entries: Vec<LogEntry>) -> Self {
        Self {
            view,
            entries,
            file_info: None,
            pagination: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Drives one view: fetches from its endpoint and parses the result.
pub struct LogViewer {
    view: LogView,
    source: Arc<dyn LogSource>,
    sources: SourcesConfig,
    metrics: Arc<ParsingMetrics>,
    latch: LoadLatch,
}

impl LogViewer {
    pub fn new(
        view: LogView,
        source: Arc<dyn LogSource>,
        sources: SourcesConfig,
        metrics: Arc<ParsingMetrics>,
    ) -> Self {
        Self {
            view,
            source,
            sources,
            metrics,
            latch: LoadLatch::new(),
        }
    }

    pub fn view(&self) -> LogView {
        self.view
    }

    /// First load of the view. Returns `None` when a load was already
    /// started, so a duplicate trigger never issues a second request.
    pub async fn initial_load(&self, query: TranslationQuery) -> Option<Result<LoadedLogs, SourceError>> {
        if !self.latch.try_start() {
            debug!(view = %self.view, "view: initial load already started, skipping");
            return None;
        }
        Some(self.load(query).await)
    }

    /// Fetch and parse. Each call settles exactly once; failures are never retried.
    pub async fn load(&self, query: TranslationQuery) -> Result<LoadedLogs, SourceError> {
        let path = self.view.path(&self.sources);
        let metrics = Some(self.metrics.as_ref());

        let result = match self.view {
            LogView::Debug => source::fetch_content(self.source.as_ref(), path)
                .await
                .map(|content| LoadedLogs::entries_only(self.view, parser::parse_debug(&content, metrics))),
            LogView::Celery => source::fetch_content(self.source.as_ref(), path)
                .await
                .map(|content| LoadedLogs::entries_only(self.view, parser::parse_celery(&content, metrics))),
            LogView::Translation => source::fetch_translation(self.source.as_ref(), path, &query)
                .await
                .map(|page| {
                    let entries = parser::parse_records(page.records.iter().map(|r| r.content.as_str()), metrics);
                    LoadedLogs {
                        view: self.view,
                        entries,
                        file_info: page.file_info,
                        pagination: page.pagination,
                    }
                }),
        };

        match &result {
            Ok(loaded) => info!(view = %self.view, entries = loaded.entries.len(), "Loaded logs"),
            Err(e) => warn!(view = %self.view, error = %e, "Failed to load logs"),
        }
        result
    }
}
