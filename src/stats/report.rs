//! The five statistics printed for a file

use std::fmt;

use serde::Serialize;

use crate::stats::average::AverageLetters;
use crate::stats::frequency::MostCommonLetters;

/// All statistics for one source, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub lines: usize,
    pub words: usize,
    pub most_common_letters: Option<MostCommonLetters>,
    pub avg_letters_per_word: AverageLetters,
    pub letters: usize,
}

impl Report {
    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of lines {}", self.lines)?;
        writeln!(f, "Number of words {}", self.words)?;
        match &self.most_common_letters {
            Some(letters) => writeln!(f, "most common letter {}", letters)?,
            None => writeln!(f, "most common letter none")?,
        }
        writeln!(f, "average letter per word {}", self.avg_letters_per_word)?;
        write!(f, "total letters {}", self.letters)
    }
}
