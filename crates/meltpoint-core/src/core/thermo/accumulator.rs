use super::nn_table::{self, NnParameter};
use super::{GAS_CONSTANT, KELVIN_OFFSET};
use crate::core::models::conditions::ReactionConditions;
use crate::core::models::sequence::ConcreteSequence;
use serde::Serialize;
use thiserror::Error;

const MICROMOLAR: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThermoError {
    #[error("sequence of length {length} has no dinucleotide step")]
    TooShort { length: usize },
    #[error("no nearest-neighbor parameters for step '{step}' at position {position}")]
    UnknownStep { step: String, position: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Symmetry {
    SelfComplementary,
    NonSelfComplementary,
}

impl Symmetry {
    pub fn of(concrete: &ConcreteSequence) -> Self {
        if concrete.is_self_complementary() {
            Self::SelfComplementary
        } else {
            Self::NonSelfComplementary
        }
    }

    /// The `x` in `ln(Ct/x)`.
    pub fn factor(&self) -> f64 {
        match self {
            Self::SelfComplementary => 1.0,
            Self::NonSelfComplementary => 4.0,
        }
    }
}

/// Summed duplex formation terms: ΔH in kcal/mol, ΔS in cal/(mol·K).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DuplexThermodynamics {
    pub enthalpy: f64,
    pub entropy: f64,
    pub symmetry: Symmetry,
}

impl DuplexThermodynamics {
    fn add(&mut self, param: NnParameter) {
        self.enthalpy += param.delta_h;
        self.entropy += param.delta_s;
    }
}

/// Sums ΔH and ΔS over every dinucleotide step of `concrete`, plus initiation, one terminal
/// term per end and, for self-complementary duplexes, the symmetry entropy.
pub fn compute_raw(concrete: &ConcreteSequence) -> Result<DuplexThermodynamics, ThermoError> {
    let bases = concrete.as_str();
    if bases.len() < 2 {
        return Err(ThermoError::TooShort {
            length: bases.len(),
        });
    }

    let symmetry = Symmetry::of(concrete);
    let mut thermo = DuplexThermodynamics {
        enthalpy: nn_table::INITIATION.delta_h,
        entropy: nn_table::INITIATION.delta_s,
        symmetry,
    };

    // Concrete sequences are ASCII, so byte offsets are character offsets.
    for i in 0..bases.len() - 1 {
        let pair = &bases[i..i + 2];
        let param = nn_table::step(pair).ok_or_else(|| ThermoError::UnknownStep {
            step: pair.to_string(),
            position: i + 1,
        })?;
        thermo.add(param);
    }

    for end in [bases.chars().next(), bases.chars().next_back()]
        .into_iter()
        .flatten()
    {
        thermo.add(nn_table::terminal(end));
    }

    if symmetry == Symmetry::SelfComplementary {
        thermo.add(nn_table::SYMMETRY);
    }

    Ok(thermo)
}

/// Two-state melting temperature in °C at the 1 M monovalent-salt reference:
/// `Tm = ΔH·1000 / (ΔS + R·ln(Ct/x)) − 273.15`, with `Ct` the primer concentration in M.
pub fn compute_tm(
    enthalpy: f64,
    entropy: f64,
    symmetry: Symmetry,
    conditions: &ReactionConditions,
) -> f64 {
    let strand_conc = conditions.primer_conc * MICROMOLAR;
    enthalpy * 1000.0 / (entropy + GAS_CONSTANT * (strand_conc / symmetry.factor()).ln())
        - KELVIN_OFFSET
}
