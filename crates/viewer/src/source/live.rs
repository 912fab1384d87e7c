//! Live: implements `LogSource` over HTTP with reqwest.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use super::client::LogSource;
use super::error::SourceError;

#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Build a client rooted at `base_url`. `timeout` of `None` means the
    /// request waits as long as the transport allows.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, SourceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_body(&self, path: &str, params: &[(&'static str, String)]) -> Result<String, SourceError> {
        let url = self.url_for(path);
        tracing::info!(%url, "Fetching logs");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(%url, error = %e, "Log request failed");
                SourceError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "Log endpoint returned error status");
            return Err(SourceError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

impl LogSource for HttpSource {
    fn get<'a>(
        &'a self,
        path: &'a str,
        params: &'a [(&'static str, String)],
    ) -> Pin<Box<dyn Future<Output = Result<String, SourceError>> + Send + 'a>> {
        Box::pin(self.get_body(path, params))
    }
}
