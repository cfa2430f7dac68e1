use phf::{Map, phf_map};

/// Base set of every accepted nucleotide symbol, each listed in A < C < G < T order so that
/// expansions come out lexicographically sorted.
static IUPAC_BASES: Map<char, &'static str> = phf_map! {
    'A' => "A",
    'C' => "C",
    'G' => "G",
    'T' => "T",
    'R' => "AG",
    'Y' => "CT",
    'S' => "CG",
    'W' => "AT",
    'K' => "GT",
    'M' => "AC",
    'B' => "CGT",
    'D' => "AGT",
    'H' => "ACT",
    'V' => "ACG",
    'N' => "ACGT",
};

/// Expects an upper-case symbol.
pub fn bases_for(symbol: char) -> Option<&'static str> {
    IUPAC_BASES.get(&symbol).copied()
}

pub fn is_valid_symbol(symbol: char) -> bool {
    IUPAC_BASES.contains_key(&symbol)
}
