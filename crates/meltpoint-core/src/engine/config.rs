use crate::core::models::result::AggregationPolicy;
use crate::core::sequence::expander::DEFAULT_EXPANSION_CAP;
use thiserror::Error;

pub const DEFAULT_ANNEALING_OFFSET: f64 = 5.0;
pub const DEFAULT_GRADIENT_SPAN: f64 = 3.0;
pub const DEFAULT_RECOMMENDED_MAX_LENGTH: usize = 200;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Largest number of concrete variants a degenerate primer may expand into.
    pub expansion_cap: usize,
    /// Degrees subtracted from the corrected Tm to give the recommended annealing temperature.
    pub annealing_offset: f64,
    /// Half-width of the suggested annealing gradient around the recommended Ta.
    pub gradient_span: f64,
    pub aggregation: AggregationPolicy,
    /// Batch worker threads; `None` runs on the global rayon pool.
    pub workers: Option<usize>,
    /// Longer sequences still compute but are flagged in the result.
    pub recommended_max_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            expansion_cap: DEFAULT_EXPANSION_CAP,
            annealing_offset: DEFAULT_ANNEALING_OFFSET,
            gradient_span: DEFAULT_GRADIENT_SPAN,
            aggregation: AggregationPolicy::default(),
            workers: None,
            recommended_max_length: DEFAULT_RECOMMENDED_MAX_LENGTH,
        }
    }
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.expansion_cap == 0 {
            return Err(invalid("expansion_cap", "must be at least 1"));
        }
        if !self.annealing_offset.is_finite() {
            return Err(invalid("annealing_offset", "must be a finite number"));
        }
        if !(self.gradient_span.is_finite() && self.gradient_span >= 0.0) {
            return Err(invalid(
                "gradient_span",
                "must be a finite, non-negative number",
            ));
        }
        if self.workers == Some(0) {
            return Err(invalid("workers", "must be at least 1 when set"));
        }
        if self.recommended_max_length < 2 {
            return Err(invalid("recommended_max_length", "must be at least 2"));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidParameter {
        name,
        reason: reason.to_string(),
    }
}

#[derive(Default)]
pub struct EngineConfigBuilder {
    expansion_cap: Option<usize>,
    annealing_offset: Option<f64>,
    gradient_span: Option<f64>,
    aggregation: Option<AggregationPolicy>,
    workers: Option<usize>,
    recommended_max_length: Option<usize>,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expansion_cap(mut self, cap: usize) -> Self {
        self.expansion_cap = Some(cap);
        self
    }
    pub fn annealing_offset(mut self, offset: f64) -> Self {
        self.annealing_offset = Some(offset);
        self
    }
    pub fn gradient_span(mut self, span: f64) -> Self {
        self.gradient_span = Some(span);
        self
    }
    pub fn aggregation(mut self, policy: AggregationPolicy) -> Self {
        self.aggregation = Some(policy);
        self
    }
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }
    pub fn recommended_max_length(mut self, length: usize) -> Self {
        self.recommended_max_length = Some(length);
        self
    }

    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        let defaults = EngineConfig::default();
        let config = EngineConfig {
            expansion_cap: self.expansion_cap.unwrap_or(defaults.expansion_cap),
            annealing_offset: self.annealing_offset.unwrap_or(defaults.annealing_offset),
            gradient_span: self.gradient_span.unwrap_or(defaults.gradient_span),
            aggregation: self.aggregation.unwrap_or(defaults.aggregation),
            workers: self.workers.or(defaults.workers),
            recommended_max_length: self
                .recommended_max_length
                .unwrap_or(defaults.recommended_max_length),
        };
        config.validate()?;
        Ok(config)
    }
}
