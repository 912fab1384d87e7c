// Domain-driven module structure for the log viewer.

// Core
pub mod parser;

// Retrieval and presentation
pub mod source;
pub mod view;
pub mod display;

// Process
pub mod conf;
pub mod runtime;
