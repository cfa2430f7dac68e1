use super::conditions::ReactionConditions;
use serde::{Deserialize, Serialize};

/// A single calculation request: a raw sequence plus the reaction conditions, in the flat
/// camelCase shape `{sequence, primerConc, saltConc, mgConc, dntpConc, polymerase}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub sequence: String,
    #[serde(flatten)]
    pub conditions: ReactionConditions,
}

impl CalculationRequest {
    pub fn new(sequence: impl Into<String>, conditions: ReactionConditions) -> Self {
        Self {
            sequence: sequence.into(),
            conditions,
        }
    }
}

/// One labeled entry of a batch. Labels are caller-supplied and need not be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub label: String,
    pub sequence: String,
    pub conditions: ReactionConditions,
}

impl BatchEntry {
    pub fn new(
        label: impl Into<String>,
        sequence: impl Into<String>,
        conditions: ReactionConditions,
    ) -> Self {
        Self {
            label: label.into(),
            sequence: sequence.into(),
            conditions,
        }
    }
}
