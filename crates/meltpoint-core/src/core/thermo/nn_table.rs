//! Nearest-neighbor parameters for Watson-Crick DNA/DNA stacks.
//!
//! SantaLucia & Hicks (2004), "The Thermodynamics of DNA Structural Motifs",
//! Annu. Rev. Biophys. Biomol. Struct. 33:415-440.

use phf::{Map, phf_map};
use serde::Serialize;

/// Enthalpy (kcal/mol) and entropy (cal/(mol·K)) contribution of one model term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NnParameter {
    pub delta_h: f64,
    pub delta_s: f64,
}

impl NnParameter {
    pub const fn new(delta_h: f64, delta_s: f64) -> Self {
        Self { delta_h, delta_s }
    }
}

/// Keyed by the top-strand dinucleotide, 5′→3′. Each of the ten unique stacks appears
/// under both of its equivalent spellings (e.g. `AA` and `TT` are the same AA/TT stack).
static NN_STEPS: Map<&'static str, NnParameter> = phf_map! {
    "AA" => NnParameter::new(-7.6, -21.3),
    "TT" => NnParameter::new(-7.6, -21.3),
    "AT" => NnParameter::new(-7.2, -20.4),
    "TA" => NnParameter::new(-7.2, -21.3),
    "CA" => NnParameter::new(-8.5, -22.7),
    "TG" => NnParameter::new(-8.5, -22.7),
    "GT" => NnParameter::new(-8.4, -22.4),
    "AC" => NnParameter::new(-8.4, -22.4),
    "CT" => NnParameter::new(-7.8, -21.0),
    "AG" => NnParameter::new(-7.8, -21.0),
    "GA" => NnParameter::new(-8.2, -22.2),
    "TC" => NnParameter::new(-8.2, -22.2),
    "CG" => NnParameter::new(-10.6, -27.2),
    "GC" => NnParameter::new(-9.8, -24.4),
    "GG" => NnParameter::new(-8.0, -19.9),
    "CC" => NnParameter::new(-8.0, -19.9),
};

/// Duplex initiation, added once per duplex.
pub const INITIATION: NnParameter = NnParameter::new(0.2, -5.7);

/// Added once for each duplex end closed by an A·T pair.
pub const TERMINAL_AT: NnParameter = NnParameter::new(2.2, 6.9);

pub const TERMINAL_GC: NnParameter = NnParameter::new(0.0, 0.0);

/// Entropic penalty for self-complementary duplexes.
pub const SYMMETRY: NnParameter = NnParameter::new(0.0, -1.4);

pub fn step(dinucleotide: &str) -> Option<NnParameter> {
    NN_STEPS.get(dinucleotide).copied()
}

pub fn terminal(base: char) -> NnParameter {
    match base {
        'A' | 'T' => TERMINAL_AT,
        _ => TERMINAL_GC,
    }
}
