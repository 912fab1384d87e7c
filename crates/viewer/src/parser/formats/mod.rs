/// Individual log format classifiers

pub mod bracketed;
pub mod celery;
pub mod django;

// Re-export classifier implementations
pub use bracketed::{BracketedModuleClassifier, BracketedSimpleClassifier};
pub use celery::{split_spans, CeleryClassifier, SpanSplit};
pub use django::{DjangoProcessClassifier, DjangoThreadedClassifier};
