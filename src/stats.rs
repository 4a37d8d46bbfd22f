//! Text statistics engines
//!
//! This module provides the classification rules shared by every engine
//! (what counts as a letter, a word and a line), the value types for the
//! computed statistics, and the engines themselves behind the
//! [`StatisticsEngine`] trait.

mod average;
mod classify;
mod engine;
mod frequency;
mod onepass;
mod registry;
mod report;
mod stattext;

// Re-export public types
pub use average::{AverageLetters, DEFAULT_PRECISION, MAX_PRECISION};
pub use classify::{count_letters, count_words, is_word, scan_lines};
pub use engine::StatisticsEngine;
pub use frequency::{LetterFrequency, MostCommonLetters};
pub use onepass::{OnePass, TextSummary};
pub use registry::{EngineFactory, EngineRegistry};
pub use report::Report;
pub use stattext::Stattext;
