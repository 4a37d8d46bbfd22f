//! The capability set every statistics engine provides

use crate::error::CounterError;
use crate::source::TextSource;
use crate::stats::average::AverageLetters;
use crate::stats::frequency::MostCommonLetters;
use crate::stats::report::Report;

/// Statistics computed over one text source
///
/// An engine is created once per invocation (usually through
/// [`EngineRegistry`](crate::stats::EngineRegistry)), configured with a
/// precision, and then queried against a single source. Every computation
/// rewinds the source before scanning it, so callers never need to reseek
/// between calls. Engines may cache results, which is only valid because the
/// source does not change during the engine's lifetime.
pub trait StatisticsEngine {
    /// Registry name of this engine
    fn name(&self) -> &'static str;

    /// Number of decimal digits for the average
    fn precision(&self) -> u32;

    /// Set the precision for the average; `0` truncates
    ///
    /// Fails with [`CounterError::InvalidPrecision`] above
    /// [`MAX_PRECISION`](crate::stats::MAX_PRECISION).
    fn set_precision(&mut self, precision: u32) -> Result<(), CounterError>;

    fn total_lines(&mut self, source: &mut dyn TextSource) -> Result<usize, CounterError>;

    fn total_words(&mut self, source: &mut dyn TextSource) -> Result<usize, CounterError>;

    /// Total letters, digits included
    fn total_letters(&mut self, source: &mut dyn TextSource) -> Result<usize, CounterError>;

    fn avg_letters_per_word(
        &mut self,
        source: &mut dyn TextSource,
    ) -> Result<AverageLetters, CounterError>;

    /// Letters tied for the highest frequency, `None` when there are no letters
    fn most_common_letters(
        &mut self,
        source: &mut dyn TextSource,
    ) -> Result<Option<MostCommonLetters>, CounterError>;

    /// Compute all five statistics in display order
    fn report(&mut self, source: &mut dyn TextSource) -> Result<Report, CounterError> {
        let lines = self.total_lines(source)?;
        let words = self.total_words(source)?;
        let most_common_letters = self.most_common_letters(source)?;
        let avg_letters_per_word = self.avg_letters_per_word(source)?;
        let letters = self.total_letters(source)?;

        Ok(Report {
            lines,
            words,
            most_common_letters,
            avg_letters_per_word,
            letters,
        })
    }
}
