//! Source trait: abstract interface over the log retrieval endpoints.
//!
//! `live.rs` provides the reqwest-backed implementation.
//! `fake.rs` provides an in-memory test double.

use std::future::Future;
use std::pin::Pin;

use super::error::SourceError;
use super::model::{self, TranslationPage, TranslationQuery};

/// Async GET against a log endpoint, returning the raw response body.
///
/// Object-safe thanks to `Pin<Box<…>>` returns. Implementations never retry;
/// each call settles exactly once.
pub trait LogSource: Send + Sync {
    fn get<'a>(
        &'a self,
        path: &'a str,
        params: &'a [(&'static str, String)],
    ) -> Pin<Box<dyn Future<Output = Result<String, SourceError>> + Send + 'a>>;
}

/// Fetch a `{ content }` endpoint and return the raw log text.
pub async fn fetch_content<S>(source: &S, path: &str) -> Result<String, SourceError>
where
    S: LogSource + ?Sized,
{
    let body = source.get(path, &[]).await?;
    let content = model::decode_content(&body)?;
    tracing::debug!(path, bytes = content.len(), "source: content fetched");
    Ok(content)
}

/// Fetch one page of translation records.
pub async fn fetch_translation<S>(
    source: &S,
    path: &str,
    query: &TranslationQuery,
) -> Result<TranslationPage, SourceError>
where
    S: LogSource + ?Sized,
{
    query.validate()?;
    let params = query.to_params();
    let body = source.get(path, &params).await?;
    let page = model::decode_translation(&body)?;
    tracing::debug!(path, records = page.records.len(), "source: translation page fetched");
    Ok(page)
}
