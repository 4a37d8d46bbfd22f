//! Average letters per word

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::CounterError;

/// Precision used when neither the command line nor the config sets one
pub const DEFAULT_PRECISION: u32 = 1;

/// Largest supported precision; keeps `letters * 10^precision` within `u128`
pub const MAX_PRECISION: u32 = 18;

pub(crate) fn validate_precision(precision: u32) -> Result<u32, CounterError> {
    if precision > MAX_PRECISION {
        return Err(CounterError::InvalidPrecision(precision));
    }
    Ok(precision)
}

/// Average number of letters per word, rounded to a fixed number of decimals
///
/// The value is kept as an integer scaled by `10^precision` so that
/// rounding happens once, on the exact ratio, and display never drifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AverageLetters {
    /// The source has no words; displayed as `0`
    NoWords,
    /// `scaled / 10^precision` is the rounded average
    Rounded { scaled: u128, precision: u32 },
}

impl AverageLetters {
    /// Compute `letters / words` at the given precision
    ///
    /// With `precision > 0` the exact ratio is rounded half to even, so
    /// `15 / 4 = 3.75` becomes `3.8` and `1 / 4 = 0.25` becomes `0.2`.
    /// With `precision == 0` the fractional part is dropped.
    pub fn from_counts(letters: usize, words: usize, precision: u32) -> Self {
        if words == 0 {
            return AverageLetters::NoWords;
        }

        let words = words as u128;
        let numerator = letters as u128 * 10u128.pow(precision);
        let quotient = numerator / words;

        let scaled = if precision == 0 {
            quotient
        } else {
            let twice_remainder = 2 * (numerator % words);
            let round_up =
                twice_remainder > words || (twice_remainder == words && quotient % 2 == 1);
            quotient + u128::from(round_up)
        };

        AverageLetters::Rounded { scaled, precision }
    }

    /// The average as a float
    pub fn value(&self) -> f64 {
        match *self {
            AverageLetters::NoWords => 0.0,
            AverageLetters::Rounded { scaled, precision } => {
                scaled as f64 / 10f64.powi(precision as i32)
            }
        }
    }
}

impl fmt::Display for AverageLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AverageLetters::NoWords => write!(f, "0"),
            AverageLetters::Rounded {
                scaled,
                precision: 0,
            } => write!(f, "{}", scaled),
            AverageLetters::Rounded { scaled, precision } => {
                let unit = 10u128.pow(precision);
                write!(
                    f,
                    "{}.{:0width$}",
                    scaled / unit,
                    scaled % unit,
                    width = precision as usize
                )
            }
        }
    }
}

impl Serialize for AverageLetters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}
