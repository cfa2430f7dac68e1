use super::iupac;
use crate::core::models::sequence::Sequence;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "violation", rename_all = "kebab-case")]
pub enum AlphabetError {
    #[error("sequence is empty after removing whitespace")]
    Empty,
    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Normalizes a raw nucleotide string into a [`Sequence`].
///
/// Whitespace anywhere in the input is dropped and symbols are upper-cased. Positions in
/// [`AlphabetError::InvalidSymbol`] are 1-based over the stripped sequence.
pub fn validate(raw: &str) -> Result<Sequence, AlphabetError> {
    let mut symbols = String::with_capacity(raw.len());
    for c in raw.chars().filter(|c| !c.is_whitespace()) {
        let upper = c.to_ascii_uppercase();
        if !iupac::is_valid_symbol(upper) {
            return Err(AlphabetError::InvalidSymbol {
                symbol: c,
                position: symbols.len() + 1,
            });
        }
        symbols.push(upper);
    }

    if symbols.is_empty() {
        return Err(AlphabetError::Empty);
    }
    Ok(Sequence::new_unchecked(symbols))
}
