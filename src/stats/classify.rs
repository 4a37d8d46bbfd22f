//! Classification rules shared by every engine
//!
//! A letter is a code point in Unicode general category L, a digit one in
//! category N. A word is a whitespace-delimited token holding at least one
//! letter or digit. Lines end at `\n`, `\r\n` or a lone `\r`.

use std::io::{BufRead, Seek, SeekFrom};
use std::sync::OnceLock;

use regex::Regex;

use crate::error::CounterError;
use crate::source::TextSource;

static LETTER: OnceLock<Regex> = OnceLock::new();
static LETTER_OR_DIGIT: OnceLock<Regex> = OnceLock::new();

pub(crate) fn letter() -> &'static Regex {
    LETTER.get_or_init(|| Regex::new(r"\p{L}").expect("letter pattern is valid"))
}

fn letter_or_digit() -> &'static Regex {
    LETTER_OR_DIGIT.get_or_init(|| Regex::new(r"[\p{L}\p{N}]").expect("letter/digit pattern is valid"))
}

/// Returns true if the token contains at least one letter or digit
pub fn is_word(token: &str) -> bool {
    letter_or_digit().is_match(token)
}

/// Count the words in a single line
///
/// Runs of whitespace collapse into one delimiter, and tokens made only of
/// punctuation or symbols (`...`, `!!`, `'`) are skipped.
pub fn count_words(line: &str) -> usize {
    line.split_whitespace().filter(|token| is_word(token)).count()
}

/// Count the letters and digits in a single line
pub fn count_letters(line: &str) -> usize {
    letter_or_digit().find_iter(line).count()
}

/// Scan the whole source line by line, calling `visit` with each line's content
///
/// The source is rewound to its start first, so the result never depends on
/// where a previous computation left the cursor. Line terminators are not
/// passed to `visit`. Returns the number of lines seen: a final line without
/// a terminator counts only if it is non-empty, and an empty source has none.
pub fn scan_lines(
    source: &mut dyn TextSource,
    mut visit: impl FnMut(&str),
) -> Result<usize, CounterError> {
    source.seek(SeekFrom::Start(0))?;

    let mut buf = String::new();
    let mut lines = 0;

    loop {
        buf.clear();
        if source.read_line(&mut buf)? == 0 {
            break;
        }

        // read_line stops at '\n' only; a lone '\r' inside the chunk also ends a line
        let chunk = buf.strip_suffix('\n').unwrap_or(&buf);
        let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
        for line in chunk.split('\r') {
            visit(line);
            lines += 1;
        }
    }

    Ok(lines)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod classify_tests;
