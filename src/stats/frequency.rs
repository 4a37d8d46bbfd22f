//! Letter frequency tally and most-common-letter ranking

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::stats::classify::letter;

/// Occurrence count per lowercase letter, in first-encountered order
///
/// Digits and punctuation are never tallied, only general category L.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequency {
    counts: IndexMap<char, usize>,
}

impl LetterFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercase the line and tally every letter in it
    pub fn add_line(&mut self, line: &str) {
        let lowered = line.to_lowercase();
        for found in letter().find_iter(&lowered) {
            for ch in found.as_str().chars() {
                *self.counts.entry(ch).or_insert(0) += 1;
            }
        }
    }

    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Every letter tied for the highest count, or `None` if nothing was tallied
    ///
    /// Ties keep the order in which the letters were first seen.
    pub fn most_common(&self) -> Option<MostCommonLetters> {
        let max = self.counts.values().copied().max()?;
        let letters = self
            .counts
            .iter()
            .filter(|&(_, &count)| count == max)
            .map(|(&letter, _)| letter)
            .collect();
        Some(MostCommonLetters(letters))
    }
}

/// The set of letters sharing the highest frequency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MostCommonLetters(Vec<char>);

impl MostCommonLetters {
    pub fn letters(&self) -> &[char] {
        &self.0
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }
}

impl fmt::Display for MostCommonLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "frequency_tests.rs"]
mod frequency_tests;
