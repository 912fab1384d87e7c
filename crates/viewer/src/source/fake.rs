//! Fake: test double for log retrieval.
//!
//! Serves canned bodies (or errors) per endpoint path from memory and
//! records every request, so views can be exercised without a network.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use tokio::sync::Mutex;

use super::client::LogSource;
use super::error::SourceError;

#[derive(Debug, Clone)]
pub enum FakeResponse {
    Body(String),
    /// Transport failure with the given detail
    Fail(String),
    /// Non-success HTTP status
    Status(u16),
}

/// One observed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeRequest {
    pub path: String,
    pub params: Vec<(String, String)>,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<String, FakeResponse>,
    requests: Vec<FakeRequest>,
}

/// In-memory [`LogSource`].
#[derive(Default)]
pub struct FakeSource {
    inner: Mutex<Inner>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `path`.
    pub async fn respond(&self, path: &str, body: impl Into<String>) {
        self.inner
            .lock()
            .await
            .responses
            .insert(path.to_string(), FakeResponse::Body(body.into()));
    }

    /// Serve a JSON value for `path`.
    pub async fn respond_json(&self, path: &str, body: serde_json::Value) {
        self.respond(path, body.to_string()).await;
    }

    pub async fn fail(&self, path: &str, detail: impl Into<String>) {
        self.inner
            .lock()
            .await
            .responses
            .insert(path.to_string(), FakeResponse::Fail(detail.into()));
    }

    pub async fn status(&self, path: &str, code: u16) {
        self.inner
            .lock()
            .await
            .responses
            .insert(path.to_string(), FakeResponse::Status(code));
    }

    /// Requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<FakeRequest> {
        self.inner.lock().await.requests.clone()
    }

    async fn serve(&self, path: &str, params: &[(&'static str, String)]) -> Result<String, SourceError> {
        let mut state = self.inner.lock().await;
        state.requests.push(FakeRequest {
            path: path.to_string(),
            params: params.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
        });

        match state.responses.get(path) {
            Some(FakeResponse::Body(body)) => Ok(body.clone()),
            Some(FakeResponse::Fail(detail)) => Err(SourceError::Transport(detail.clone())),
            Some(FakeResponse::Status(code)) => Err(SourceError::Status(*code)),
            None => Err(SourceError::Status(404)),
        }
    }
}

impl LogSource for FakeSource {
    fn get<'a>(
        &'a self,
        path: &'a str,
        params: &'a [(&'static str, String)],
    ) -> Pin<Box<dyn Future<Output = Result<String, SourceError>> + Send + 'a>> {
        Box::pin(self.serve(path, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{fetch_content, fetch_translation, TranslationQuery};

    #[tokio::test]
    async fn test_fetch_content_from_fake() {
        let source = FakeSource::new();
        source
            .respond_json("/debug/", serde_json::json!({"content": "[04/Jun/2025 10:51:18] INFO hi"}))
            .await;

        let content = fetch_content(&source, "/debug/").await.unwrap();
        assert_eq!(content, "[04/Jun/2025 10:51:18] INFO hi");
    }

    #[tokio::test]
    async fn test_transport_failure_message() {
        let source = FakeSource::new();
        source.fail("/debug/", "connection refused").await;

        let err = fetch_content(&source, "/debug/").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch logs: connection refused");
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let source = FakeSource::new();
        let err = fetch_content(&source, "/nowhere/").await.unwrap_err();
        assert!(matches!(err, SourceError::Status(404)));
    }

    #[tokio::test]
    async fn test_translation_query_recorded() {
        let source = FakeSource::new();
        source
            .respond_json("/translation/", serde_json::json!({"success": true, "data": {"logs": []}}))
            .await;

        let page = fetch_translation(&source, "/translation/", &TranslationQuery::new(Some(6), Some(100)))
            .await
            .unwrap();
        assert!(page.records.is_empty());

        let requests = source.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].params,
            vec![("hours".to_string(), "6".to_string()), ("limit".to_string(), "100".to_string())]
        );
    }

    #[tokio::test]
    async fn test_invalid_query_never_reaches_source() {
        let source = FakeSource::new();
        let err = fetch_translation(&source, "/translation/", &TranslationQuery::new(Some(500), None))
            .await
            .unwrap_err();

        assert!(matches!(err, SourceError::InvalidQuery(_)));
        assert!(source.requests().await.is_empty());
    }
}
