use serde::Serialize;
use std::fmt;

/// A normalized primer sequence, 5′→3′, drawn from the IUPAC nucleotide alphabet.
///
/// Instances are only produced by [`crate::core::sequence::validator::validate`], which
/// guarantees that the sequence is non-empty, upper-case and free of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sequence {
    symbols: String,
}

impl Sequence {
    pub(crate) fn new_unchecked(symbols: String) -> Self {
        Self { symbols }
    }

    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn is_degenerate(&self) -> bool {
        self.symbols.chars().any(|c| !is_standard_base(c))
    }

    /// Fraction of literal `G` and `C` symbols over the full length.
    ///
    /// Degenerate codes such as `S` are not counted, even when every base they stand for is
    /// G or C.
    pub fn gc_fraction(&self) -> f64 {
        let gc = self
            .symbols
            .chars()
            .filter(|c| matches!(c, 'G' | 'C'))
            .count();
        gc as f64 / self.len() as f64
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols)
    }
}

/// A sequence made only of the four standard bases, one member of a degenerate expansion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConcreteSequence {
    bases: String,
}

impl ConcreteSequence {
    pub(crate) fn new_unchecked(bases: String) -> Self {
        Self { bases }
    }

    pub fn as_str(&self) -> &str {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn reverse_complement(&self) -> ConcreteSequence {
        let bases = self.bases.chars().rev().map(complement).collect();
        Self { bases }
    }

    /// True when the strand equals its own reverse complement.
    pub fn is_self_complementary(&self) -> bool {
        self.reverse_complement() == *self
    }
}

impl fmt::Display for ConcreteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bases)
    }
}

#[inline]
pub fn is_standard_base(c: char) -> bool {
    matches!(c, 'A' | 'C' | 'G' | 'T')
}

#[inline]
fn complement(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        other => other,
    }
}
