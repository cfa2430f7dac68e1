use crate::core::models::request::CalculationRequest;
use crate::core::models::result::TmResult;
use crate::engine::config::EngineConfig;
use crate::engine::error::{CalculationFailure, EngineError};
use crate::engine::tm::TmEngine;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum CalculateError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Calculation failed: {0}")]
    Failed(#[from] CalculationFailure),
}

impl CalculateError {
    /// The per-input failure, if the engine itself was configured correctly.
    pub fn failure(&self) -> Option<&CalculationFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::Engine(_) => None,
        }
    }
}

#[instrument(skip_all, name = "calculate_workflow")]
pub fn run(request: &CalculationRequest, config: &EngineConfig) -> Result<TmResult, CalculateError> {
    let engine = TmEngine::new(config.clone()).map_err(EngineError::from)?;
    let result = engine.calculate(&request.sequence, &request.conditions)?;

    info!(
        sequence = %result.sequence(),
        tm = result.corrected_tm(),
        ta = result.annealing_temp(),
        "Melting temperature calculated."
    );
    Ok(result)
}
