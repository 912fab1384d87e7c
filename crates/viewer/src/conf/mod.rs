//! Conf module: configuration model and loading.

pub mod model;
pub mod load;

pub use model::{SourcesConfig, TranslationDefaults, ViewerConfig};
pub use load::ConfigError;
