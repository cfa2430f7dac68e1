use super::config::{ConfigError, EngineConfig};
use super::error::{CalculationFailure, FailureReason};
use crate::core::models::conditions::ReactionConditions;
use crate::core::models::result::{TmResult, TmResultParts};
use crate::core::models::sequence::ConcreteSequence;
use crate::core::sequence::{expander, validator};
use crate::core::thermo::accumulator::{self, ThermoError};
use crate::core::thermo::salt;
use tracing::{debug, warn};

/// Computes the melting temperature of one primer under one set of reaction conditions.
#[derive(Debug, Clone)]
pub struct TmEngine {
    config: EngineConfig,
}

impl TmEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs validation, expansion, accumulation, aggregation and salt correction.
    ///
    /// Failures are returned as data carrying the raw `sequence`; this never panics on bad
    /// input.
    pub fn calculate(
        &self,
        sequence: &str,
        conditions: &ReactionConditions,
    ) -> Result<TmResult, CalculationFailure> {
        self.evaluate(sequence, conditions).map_err(|reason| {
            debug!(input = sequence, %reason, "Calculation rejected.");
            CalculationFailure::new(reason, sequence)
        })
    }

    fn evaluate(
        &self,
        raw: &str,
        conditions: &ReactionConditions,
    ) -> Result<TmResult, FailureReason> {
        let sequence = validator::validate(raw)?;
        conditions.validate()?;

        let length = sequence.len();
        if length < 2 {
            return Err(FailureReason::SequenceTooShort { length });
        }

        let variants = expander::expand(&sequence, self.config.expansion_cap)?;
        let variant_tms = variants
            .iter()
            .map(|variant| reference_tm(variant, conditions))
            .collect::<Result<Vec<_>, _>>()?;

        // Expansion of a non-empty sequence is never empty.
        let raw_tm = self
            .config
            .aggregation
            .aggregate(&variant_tms)
            .ok_or(FailureReason::SequenceTooShort { length })?;

        // The ionic correction is a constant shift for a given reaction, so correcting the
        // aggregate equals aggregating the corrected variants.
        let corrected_tm = salt::correct(raw_tm, conditions);

        if length > self.config.recommended_max_length {
            warn!(
                length,
                recommended_max = self.config.recommended_max_length,
                "Sequence is longer than the recommended primer range; nearest-neighbor Tm may be less accurate."
            );
        }

        debug!(
            sequence = %sequence,
            variants = variants.len(),
            raw_tm,
            corrected_tm,
            "Calculated melting temperature."
        );

        Ok(TmResult::from_parts(TmResultParts {
            sequence,
            raw_tm,
            corrected_tm,
            annealing_offset: self.config.annealing_offset,
            gradient_span: self.config.gradient_span,
            conditions: conditions.clone(),
            variant_count: variants.len(),
            aggregation: self.config.aggregation,
            recommended_max_length: self.config.recommended_max_length,
        }))
    }
}

impl Default for TmEngine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }
}

fn reference_tm(
    variant: &ConcreteSequence,
    conditions: &ReactionConditions,
) -> Result<f64, ThermoError> {
    let thermo = accumulator::compute_raw(variant)?;
    Ok(accumulator::compute_tm(
        thermo.enthalpy,
        thermo.entropy,
        thermo.symmetry,
        conditions,
    ))
}
