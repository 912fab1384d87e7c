//! Runtime module: process lifecycle: CLI, boot, run.

pub mod boot;
pub mod cli;
pub mod run;
