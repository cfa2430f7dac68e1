use super::conditions::{Polymerase, ReactionConditions};
use super::sequence::Sequence;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const GC_LOW_PERCENT: f64 = 40.0;
const GC_HIGH_PERCENT: f64 = 60.0;

/// How per-variant melting temperatures of a degenerate primer collapse into one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AggregationPolicy {
    /// The least stable variant. A protocol designed around this value binds every
    /// template the degenerate primer can match.
    #[default]
    Minimum,
    Maximum,
    Mean,
}

impl AggregationPolicy {
    /// Returns `None` for an empty slice.
    pub fn aggregate(&self, values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let value = match self {
            Self::Minimum => values.iter().copied().fold(f64::INFINITY, f64::min),
            Self::Maximum => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Self::Mean => values.iter().sum::<f64>() / values.len() as f64,
        };
        Some(value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::Mean => "mean",
        }
    }
}

impl fmt::Display for AggregationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown aggregation policy '{0}'. Expected 'minimum', 'maximum' or 'mean'.")]
pub struct UnknownPolicyError(pub String);

impl FromStr for AggregationPolicy {
    type Err = UnknownPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimum" | "min" => Ok(Self::Minimum),
            "maximum" | "max" => Ok(Self::Maximum),
            "mean" => Ok(Self::Mean),
            _ => Err(UnknownPolicyError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GcAssessment {
    Low,
    Optimal,
    High,
}

impl GcAssessment {
    /// Classifies the GC percent as displayed, rounded to one decimal place.
    pub fn from_fraction(gc_fraction: f64) -> Self {
        let percent = (gc_fraction * 1000.0).round() / 10.0;
        if percent < GC_LOW_PERCENT {
            Self::Low
        } else if percent > GC_HIGH_PERCENT {
            Self::High
        } else {
            Self::Optimal
        }
    }
}

impl fmt::Display for GcAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("low"),
            Self::Optimal => f.write_str("optimal"),
            Self::High => f.write_str("high"),
        }
    }
}

/// Temperature range for an annealing gradient centered on the recommended Ta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnealingWindow {
    pub low: f64,
    pub high: f64,
}

/// The outcome of one successful melting-temperature calculation. Temperatures are in °C.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TmResult {
    sequence: Sequence,
    length: usize,
    gc_fraction: f64,
    raw_tm: f64,
    corrected_tm: f64,
    annealing_temp: f64,
    annealing_window: AnnealingWindow,
    conditions: ReactionConditions,
    variant_count: usize,
    aggregation: Option<AggregationPolicy>,
    exceeds_recommended_length: bool,
}

pub(crate) struct TmResultParts {
    pub sequence: Sequence,
    pub raw_tm: f64,
    pub corrected_tm: f64,
    pub annealing_offset: f64,
    pub gradient_span: f64,
    pub conditions: ReactionConditions,
    pub variant_count: usize,
    pub aggregation: AggregationPolicy,
    pub recommended_max_length: usize,
}

impl TmResult {
    pub(crate) fn from_parts(parts: TmResultParts) -> Self {
        let annealing_temp = parts.corrected_tm - parts.annealing_offset;
        let length = parts.sequence.len();
        Self {
            length,
            gc_fraction: parts.sequence.gc_fraction(),
            raw_tm: parts.raw_tm,
            corrected_tm: parts.corrected_tm,
            annealing_temp,
            annealing_window: AnnealingWindow {
                low: annealing_temp - parts.gradient_span,
                high: annealing_temp + parts.gradient_span,
            },
            variant_count: parts.variant_count,
            aggregation: (parts.variant_count > 1).then_some(parts.aggregation),
            exceeds_recommended_length: length > parts.recommended_max_length,
            sequence: parts.sequence,
            conditions: parts.conditions,
        }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn gc_fraction(&self) -> f64 {
        self.gc_fraction
    }

    pub fn gc_percent(&self) -> f64 {
        self.gc_fraction * 100.0
    }

    pub fn gc_assessment(&self) -> GcAssessment {
        GcAssessment::from_fraction(self.gc_fraction)
    }

    /// Tm at the 1 M monovalent-salt reference, before ionic correction.
    pub fn raw_tm(&self) -> f64 {
        self.raw_tm
    }

    pub fn corrected_tm(&self) -> f64 {
        self.corrected_tm
    }

    pub fn annealing_temp(&self) -> f64 {
        self.annealing_temp
    }

    pub fn annealing_window(&self) -> AnnealingWindow {
        self.annealing_window
    }

    pub fn conditions(&self) -> &ReactionConditions {
        &self.conditions
    }

    pub fn polymerase(&self) -> &Polymerase {
        &self.conditions.polymerase
    }

    pub fn variant_count(&self) -> usize {
        self.variant_count
    }

    /// The policy used to combine variants; `None` when the input was not degenerate.
    pub fn aggregation(&self) -> Option<AggregationPolicy> {
        self.aggregation
    }

    pub fn exceeds_recommended_length(&self) -> bool {
        self.exceeds_recommended_length
    }
}
