//! advcounter library - Advanced statistics for text files
//!
//! This library exposes the statistics engines, text sources and
//! configuration used by the `advcounter` binary.

pub mod config;
pub mod error;
pub mod source;
pub mod stats;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::CounterError;
pub use source::TextSource;
pub use stats::{EngineRegistry, Report, StatisticsEngine};
