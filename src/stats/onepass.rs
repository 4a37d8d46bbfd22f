//! Engine that computes every statistic in a single scan

use crate::error::CounterError;
use crate::source::TextSource;
use crate::stats::average::{AverageLetters, DEFAULT_PRECISION, validate_precision};
use crate::stats::classify::{count_letters, count_words, scan_lines};
use crate::stats::engine::StatisticsEngine;
use crate::stats::frequency::{LetterFrequency, MostCommonLetters};

/// Everything one pass over a source can tell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSummary {
    pub lines: usize,
    pub words: usize,
    pub letters: usize,
    pub frequency: LetterFrequency,
}

impl TextSummary {
    /// Scan the source from its start and tally all counts at once
    pub fn scan(source: &mut dyn TextSource) -> Result<Self, CounterError> {
        let mut words = 0;
        let mut letters = 0;
        let mut frequency = LetterFrequency::new();

        let lines = scan_lines(source, |line| {
            words += count_words(line);
            letters += count_letters(line);
            frequency.add_line(line);
        })?;

        Ok(TextSummary {
            lines,
            words,
            letters,
            frequency,
        })
    }
}

/// Engine backed by a cached [`TextSummary`]
///
/// The first request of any statistic scans the source once; every later
/// request, including the most common letters, is answered from the cache.
#[derive(Debug, Clone)]
pub struct OnePass {
    precision: u32,
    summary: Option<TextSummary>,
}

impl Default for OnePass {
    fn default() -> Self {
        OnePass {
            precision: DEFAULT_PRECISION,
            summary: None,
        }
    }
}

impl OnePass {
    pub const NAME: &'static str = "onepass";

    pub fn new() -> Self {
        Self::default()
    }

    fn summary(&mut self, source: &mut dyn TextSource) -> Result<&TextSummary, CounterError> {
        let summary = match self.summary.take() {
            Some(summary) => summary,
            None => {
                let summary = TextSummary::scan(source)?;
                log::debug!(
                    "{}: scanned {} lines, {} words, {} letters",
                    Self::NAME,
                    summary.lines,
                    summary.words,
                    summary.letters
                );
                summary
            }
        };
        Ok(self.summary.insert(summary))
    }
}

impl StatisticsEngine for OnePass {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn precision(&self) -> u32 {
        self.precision
    }

    fn set_precision(&mut self, precision: u32) -> Result<(), CounterError> {
        self.precision = validate_precision(precision)?;
        Ok(())
    }

    fn total_lines(&mut self, source: &mut dyn TextSource) -> Result<usize, CounterError> {
        Ok(self.summary(source)?.lines)
    }

    fn total_words(&mut self, source: &mut dyn TextSource) -> Result<usize, CounterError> {
        Ok(self.summary(source)?.words)
    }

    fn total_letters(&mut self, source: &mut dyn TextSource) -> Result<usize, CounterError> {
        Ok(self.summary(source)?.letters)
    }

    fn avg_letters_per_word(
        &mut self,
        source: &mut dyn TextSource,
    ) -> Result<AverageLetters, CounterError> {
        let precision = self.precision;
        let summary = self.summary(source)?;
        Ok(AverageLetters::from_counts(
            summary.letters,
            summary.words,
            precision,
        ))
    }

    fn most_common_letters(
        &mut self,
        source: &mut dyn TextSource,
    ) -> Result<Option<MostCommonLetters>, CounterError> {
        Ok(self.summary(source)?.frequency.most_common())
    }
}

#[cfg(test)]
#[path = "onepass_tests.rs"]
mod onepass_tests;
