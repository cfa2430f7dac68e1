use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// DNA polymerase used in the reaction.
///
/// Known enzymes are matched by name, case-insensitively; anything else is kept verbatim
/// as a [`Polymerase::Custom`] label. A blank name selects the default. The polymerase is recorded with each result but does
/// not enter the thermodynamic arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Polymerase {
    #[default]
    Taq,
    OneTaq,
    OneTaqHotStart,
    Q5HighFidelity,
    Q5HotStartHighFidelity,
    PhusionHighFidelity,
    PhusionHotStartFlex,
    LongAmpTaq,
    BstLargeFragment,
    Bst2,
    Bst3,
    Vent,
    DeepVent,
    Therminator,
    Custom(String),
}

impl Polymerase {
    pub fn catalog() -> [Polymerase; 14] {
        [
            Self::Taq,
            Self::OneTaq,
            Self::OneTaqHotStart,
            Self::Q5HighFidelity,
            Self::Q5HotStartHighFidelity,
            Self::PhusionHighFidelity,
            Self::PhusionHotStartFlex,
            Self::LongAmpTaq,
            Self::BstLargeFragment,
            Self::Bst2,
            Self::Bst3,
            Self::Vent,
            Self::DeepVent,
            Self::Therminator,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Taq => "Taq DNA Polymerase",
            Self::OneTaq => "OneTaq DNA Polymerase",
            Self::OneTaqHotStart => "OneTaq Hot Start DNA Polymerase",
            Self::Q5HighFidelity => "Q5 High-Fidelity DNA Polymerase",
            Self::Q5HotStartHighFidelity => "Q5 Hot Start High-Fidelity DNA Polymerase",
            Self::PhusionHighFidelity => "Phusion High-Fidelity DNA Polymerase",
            Self::PhusionHotStartFlex => "Phusion Hot Start Flex DNA Polymerase",
            Self::LongAmpTaq => "LongAmp Taq DNA Polymerase",
            Self::BstLargeFragment => "Bst DNA Polymerase, Large Fragment",
            Self::Bst2 => "Bst 2.0 DNA Polymerase",
            Self::Bst3 => "Bst 3.0 DNA Polymerase",
            Self::Vent => "Vent DNA Polymerase",
            Self::DeepVent => "Deep Vent DNA Polymerase",
            Self::Therminator => "Therminator DNA Polymerase",
            Self::Custom(label) => label,
        }
    }

    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        Self::catalog()
            .into_iter()
            .find(|known| known.name().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Self::Custom(trimmed.to_string()))
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl From<String> for Polymerase {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Polymerase> for String {
    fn from(polymerase: Polymerase) -> Self {
        match polymerase {
            Polymerase::Custom(label) => label,
            known => known.name().to_string(),
        }
    }
}

impl fmt::Display for Polymerase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Requirement {
    Positive,
    NonNegative,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Positive => f.write_str("a finite value greater than zero"),
            Requirement::NonNegative => f.write_str("a finite value of zero or more"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("invalid reaction condition '{field}' = {value}: expected {requirement}")]
pub struct ConditionsError {
    pub field: &'static str,
    pub value: f64,
    pub requirement: Requirement,
}

/// Physical conditions of the PCR reaction.
///
/// Units: primer in µM, monovalent salt, Mg²⁺ and dNTP in mM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionConditions {
    pub primer_conc: f64,
    pub salt_conc: f64,
    #[serde(default)]
    pub mg_conc: f64,
    #[serde(default)]
    pub dntp_conc: f64,
    #[serde(default)]
    pub polymerase: Polymerase,
}

impl ReactionConditions {
    pub fn new(primer_conc: f64, salt_conc: f64, mg_conc: f64, dntp_conc: f64) -> Self {
        Self {
            primer_conc,
            salt_conc,
            mg_conc,
            dntp_conc,
            polymerase: Polymerase::default(),
        }
    }

    pub fn with_polymerase(mut self, polymerase: Polymerase) -> Self {
        self.polymerase = polymerase;
        self
    }

    pub fn validate(&self) -> Result<(), ConditionsError> {
        check("primerConc", self.primer_conc, Requirement::Positive)?;
        check("saltConc", self.salt_conc, Requirement::Positive)?;
        check("mgConc", self.mg_conc, Requirement::NonNegative)?;
        check("dntpConc", self.dntp_conc, Requirement::NonNegative)?;
        Ok(())
    }

    /// Mg²⁺ left unbound after one-to-one chelation by dNTPs, in mM.
    pub fn free_mg_conc(&self) -> f64 {
        (self.mg_conc - self.dntp_conc).max(0.0)
    }
}

impl Default for ReactionConditions {
    fn default() -> Self {
        Self::new(0.5, 50.0, 2.0, 0.8)
    }
}

fn check(field: &'static str, value: f64, requirement: Requirement) -> Result<(), ConditionsError> {
    let ok = value.is_finite()
        && match requirement {
            Requirement::Positive => value > 0.0,
            Requirement::NonNegative => value >= 0.0,
        };
    if ok {
        Ok(())
    } else {
        Err(ConditionsError {
            field,
            value,
            requirement,
        })
    }
}
