use meltpoint::engine::error::{CalculationFailure, EngineError};
use meltpoint::workflows::calculate::CalculateError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalculationFailure),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to write file '{path}': {source}", path = path.display())]
    FileWriting {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<CalculateError> for CliError {
    fn from(err: CalculateError) -> Self {
        match err {
            CalculateError::Engine(e) => Self::Engine(e),
            CalculateError::Failed(f) => Self::Calculation(f),
        }
    }
}
