//! Source module: retrieval of raw log text from the log endpoints.

pub mod client;
pub mod error;
pub mod fake;
pub mod live;
pub mod model;

pub use client::{fetch_content, fetch_translation, LogSource};
pub use error::SourceError;
pub use fake::FakeSource;
pub use live::HttpSource;
pub use model::{FileInfo, LogRecord, Pagination, ResponseMeta, TranslationPage, TranslationQuery};
