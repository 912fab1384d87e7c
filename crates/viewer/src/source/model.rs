//! Model: response envelopes and query parameters of the log endpoints.

use serde::{Deserialize, Serialize};

use super::error::SourceError;

/// Allowed range for the translation `hours` parameter.
pub const HOURS_RANGE: std::ops::RangeInclusive<u32> = 1..=168;
/// Allowed range for the translation `limit` parameter.
pub const LIMIT_RANGE: std::ops::RangeInclusive<u32> = 1..=1000;

/// `{ "content": "..." }` from the debug and celery endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentResponse {
    #[serde(default)]
    pub content: Option<String>,
}

impl ContentResponse {
    /// The raw log text, rejecting a missing or empty field.
    pub fn into_content(self) -> Result<String, SourceError> {
        match self.content {
            Some(content) if !content.is_empty() => Ok(content),
            _ => Err(SourceError::MissingContent),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub exists: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub lines_returned: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub total_lines_in_file: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub endpoint: String,
}

/// One already-delimited record from the translation endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogRecord {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub content: String,
    /// Any other per-record keys the endpoint sends
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationData {
    #[serde(default)]
    pub file_info: Option<FileInfo>,
    #[serde(default)]
    pub logs: Vec<LogRecord>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<TranslationData>,
    #[serde(default)]
    pub meta: Option<ResponseMeta>,
}

/// A successful translation page.
#[derive(Debug, Clone, Default)]
pub struct TranslationPage {
    pub records: Vec<LogRecord>,
    pub file_info: Option<FileInfo>,
    pub pagination: Option<Pagination>,
    pub meta: Option<ResponseMeta>,
}

impl TranslationResponse {
    pub fn into_page(self) -> Result<TranslationPage, SourceError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(TranslationPage {
                records: data.logs,
                file_info: data.file_info,
                pagination: data.pagination,
                meta: self.meta,
            }),
            _ => Err(SourceError::Unsuccessful),
        }
    }
}

/// `hours` / `limit` filter for the translation endpoint. Unset values
/// are left off the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationQuery {
    pub hours: Option<u32>,
    pub limit: Option<u32>,
}

impl TranslationQuery {
    pub fn new(hours: Option<u32>, limit: Option<u32>) -> Self {
        Self { hours, limit }
    }

    pub fn validate(&self) -> Result<(), SourceError> {
        if let Some(hours) = self.hours {
            if !HOURS_RANGE.contains(&hours) {
                return Err(SourceError::InvalidQuery(format!(
                    "hours must be between {} and {}, got {}",
                    HOURS_RANGE.start(),
                    HOURS_RANGE.end(),
                    hours
                )));
            }
        }
        if let Some(limit) = self.limit {
            if !LIMIT_RANGE.contains(&limit) {
                return Err(SourceError::InvalidQuery(format!(
                    "limit must be between {} and {}, got {}",
                    LIMIT_RANGE.start(),
                    LIMIT_RANGE.end(),
                    limit
                )));
            }
        }
        Ok(())
    }

    /// Query-string pairs in wire order.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(hours) = self.hours {
            params.push(("hours", hours.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

/// Decode a debug / celery response body.
pub fn decode_content(body: &str) -> Result<String, SourceError> {
    let response: ContentResponse = serde_json::from_str(body)?;
    response.into_content()
}

/// Decode a translation response body.
pub fn decode_translation(body: &str) -> Result<TranslationPage, SourceError> {
    let response: TranslationResponse = serde_json::from_str(body)?;
    response.into_page()
}
