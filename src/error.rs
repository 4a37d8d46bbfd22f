use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CounterError {
    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unknown engine '{name}'. Available engines: {available}")]
    UnknownEngine { name: String, available: String },

    #[error("Invalid precision {0} (expected 0 to {})", crate::stats::MAX_PRECISION)]
    InvalidPrecision(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
