use super::config::ConfigError;
use crate::core::models::conditions::ConditionsError;
use crate::core::models::sequence::is_standard_base;
use crate::core::sequence::expander::ComplexityExceeded;
use crate::core::sequence::validator::AlphabetError;
use crate::core::thermo::accumulator::ThermoError;
use serde::Serialize;
use thiserror::Error;

/// Why a single calculation failed. Every variant stems from the input or a configured limit,
/// so none of them is worth retrying.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FailureReason {
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(#[from] AlphabetError),

    #[error("Sequence too short: {length} base(s), at least 2 are required")]
    SequenceTooShort { length: usize },

    #[error("Invalid conditions: {0}")]
    InvalidConditions(#[from] ConditionsError),

    #[error("Degenerate complexity exceeded: {0}")]
    DegenerateComplexityExceeded(#[from] ComplexityExceeded),
}

impl From<ThermoError> for FailureReason {
    fn from(err: ThermoError) -> Self {
        match err {
            ThermoError::TooShort { length } => Self::SequenceTooShort { length },
            ThermoError::UnknownStep { step, position } => {
                Self::InvalidAlphabet(AlphabetError::InvalidSymbol {
                    symbol: step.chars().find(|c| !is_standard_base(*c)).unwrap_or('?'),
                    position,
                })
            }
        }
    }
}

/// A failed calculation, with the offending raw sequence echoed back for diagnostics.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{reason} (input: {input:?})")]
pub struct CalculationFailure {
    pub reason: FailureReason,
    pub input: String,
}

impl CalculationFailure {
    pub fn new(reason: impl Into<FailureReason>, input: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            input: input.into(),
        }
    }
}

/// Failures that affect a whole engine invocation rather than one item.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid engine configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build a worker pool with {workers} thread(s): {message}")]
    WorkerPool { workers: usize, message: String },
}
