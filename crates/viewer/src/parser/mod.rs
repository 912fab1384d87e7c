//! Log line classification and recovery
//!
//! Turns raw log text into ordered, structured [`LogEntry`] records.
//!
//! # Architecture
//!
//! - `traits.rs`: the `LineClassifier` trait
//! - `formats/`: one classifier per textual format, plus celery span splitting
//! - `table.rs`: ordered first-match-wins classifier tables per log source
//! - `fold.rs`: continuation folding and fallback synthesis for one pass
//! - `split.rs`: cutting content into classifier units
//! - `pass.rs`: the whole-block and per-record entry points
//! - `metrics.rs`: parse outcome counters
//!
//! Classification failure is never an error for callers: every pass returns
//! a sequence of entries, possibly all fallbacks.

pub mod traits;
pub mod model;
pub mod formats;
pub mod table;
pub mod fold;
pub mod split;
pub mod pass;
pub mod metrics;

// Re-export commonly used types
pub use traits::LineClassifier;
pub use model::{FallbackLevel, LogEntry, LogFormat, ParseError};
pub use table::ClassifierTable;
pub use fold::{EntryFolder, FallbackPolicy, FallbackTimestamp};
pub use pass::{parse_block, parse_celery, parse_debug, parse_record, parse_records};
pub use metrics::ParsingMetrics;

// Constants
pub const MAX_LINE_SIZE: usize = 1_048_576; // 1MB
