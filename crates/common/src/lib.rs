//! Shared building blocks for the acronyms workspace: log setup, runtime checks,
//! and small response types used across crates.

pub mod types;
pub mod utils;
pub mod env;
