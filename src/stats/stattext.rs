//! Reference engine: one scan per statistic, counts memoized

use crate::error::CounterError;
use crate::source::TextSource;
use crate::stats::average::{AverageLetters, DEFAULT_PRECISION, validate_precision};
use crate::stats::classify::{count_letters, count_words, scan_lines};
use crate::stats::engine::StatisticsEngine;
use crate::stats::frequency::{LetterFrequency, MostCommonLetters};

/// Engine that scans the source once for each statistic it is asked for
///
/// Line, word and letter counts and the average are computed at most once
/// per instance. The most common letters are recomputed on every call.
#[derive(Debug, Clone)]
pub struct Stattext {
    precision: u32,
    total_lines: Option<usize>,
    total_words: Option<usize>,
    total_letters: Option<usize>,
    avg_letters_per_word: Option<AverageLetters>,
}

impl Default for Stattext {
    fn default() -> Self {
        Stattext {
            precision: DEFAULT_PRECISION,
            total_lines: None,
            total_words: None,
            total_letters: None,
            avg_letters_per_word: None,
        }
    }
}

impl Stattext {
    pub const NAME: &'static str = "stattext";

    pub fn new() -> Self {
        Self::default()
    }
}

impl StatisticsEngine for Stattext {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn precision(&self) -> u32 {
        self.precision
    }

    fn set_precision(&mut self, precision: u32) -> Result<(), CounterError> {
        let precision = validate_precision(precision)?;
        if precision != self.precision {
            self.precision = precision;
            self.avg_letters_per_word = None;
        }
        Ok(())
    }

    fn total_lines(&mut self, source: &mut dyn TextSource) -> Result<usize, CounterError> {
        if let Some(lines) = self.total_lines {
            return Ok(lines);
        }
        let lines = scan_lines(source, |_| {})?;
        log::debug!("{}: counted {} lines", Self::NAME, lines);
        self.total_lines = Some(lines);
        Ok(lines)
    }

    fn total_words(&mut self, source: &mut dyn TextSource) -> Result<usize, CounterError> {
        if let Some(words) = self.total_words {
            return Ok(words);
        }
        let mut words = 0;
        scan_lines(source, |line| words += count_words(line))?;
        log::debug!("{}: counted {} words", Self::NAME, words);
        self.total_words = Some(words);
        Ok(words)
    }

    fn total_letters(&mut self, source: &mut dyn TextSource) -> Result<usize, CounterError> {
        if let Some(letters) = self.total_letters {
            return Ok(letters);
        }
        let mut letters = 0;
        scan_lines(source, |line| letters += count_letters(line))?;
        log::debug!("{}: counted {} letters", Self::NAME, letters);
        self.total_letters = Some(letters);
        Ok(letters)
    }

    fn avg_letters_per_word(
        &mut self,
        source: &mut dyn TextSource,
    ) -> Result<AverageLetters, CounterError> {
        if let Some(avg) = self.avg_letters_per_word {
            return Ok(avg);
        }
        let words = self.total_words(source)?;
        // Skip the letter scan entirely when there is nothing to divide by
        let avg = if words == 0 {
            AverageLetters::NoWords
        } else {
            let letters = self.total_letters(source)?;
            AverageLetters::from_counts(letters, words, self.precision)
        };
        self.avg_letters_per_word = Some(avg);
        Ok(avg)
    }

    fn most_common_letters(
        &mut self,
        source: &mut dyn TextSource,
    ) -> Result<Option<MostCommonLetters>, CounterError> {
        let mut frequency = LetterFrequency::new();
        scan_lines(source, |line| frequency.add_line(line))?;
        Ok(frequency.most_common())
    }
}

#[cfg(test)]
#[path = "stattext_tests.rs"]
mod stattext_tests;
