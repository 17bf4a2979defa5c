use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::domain::action_unit::ActionUnit;

/// Action-unit values of a neutral, relaxed face.
pub const NEUTRAL_BASELINE: [(ActionUnit, f64); 12] = [
    (ActionUnit::BrowLowerer, 0.070),
    (ActionUnit::UpperLidRaiser, 0.060),
    (ActionUnit::CheekRaiser, 0.250),
    (ActionUnit::LidTightener, 0.060),
    (ActionUnit::NoseWrinkler, 0.130),
    (ActionUnit::UpperLipRaiser, 0.090),
    (ActionUnit::LipCornerDepressor, 0.030),
    (ActionUnit::ChinRaiser, 0.180),
    (ActionUnit::LipTightener, 0.390),
    (ActionUnit::LipPressor, 0.015),
    (ActionUnit::JawClencher, 0.480),
    (ActionUnit::EyeTightening, 0.055),
];

/// Relative importance of each action unit; brow, lids and lip width dominate.
pub const DEFAULT_WEIGHTS: [(ActionUnit, f64); 12] = [
    (ActionUnit::BrowLowerer, 0.15),
    (ActionUnit::UpperLidRaiser, 0.10),
    (ActionUnit::CheekRaiser, 0.05),
    (ActionUnit::LidTightener, 0.15),
    (ActionUnit::NoseWrinkler, 0.05),
    (ActionUnit::UpperLipRaiser, 0.05),
    (ActionUnit::LipCornerDepressor, 0.05),
    (ActionUnit::ChinRaiser, 0.10),
    (ActionUnit::LipTightener, 0.15),
    (ActionUnit::LipPressor, 0.05),
    (ActionUnit::JawClencher, 0.05),
    (ActionUnit::EyeTightening, 0.05),
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("baseline for {0} has no matching weight")]
    MissingWeight(ActionUnit),
    #[error("weight for {unit} must be finite and non-negative, got {weight}")]
    InvalidWeight { unit: ActionUnit, weight: f64 },
    #[error("baseline for {unit} must be finite, got {value}")]
    InvalidBaseline { unit: ActionUnit, value: f64 },
    #[error("weights must sum to a positive total")]
    ZeroTotalWeight,
}

/// Immutable baseline and weight tables injected into the scorer.
///
/// Validated on construction, so scoring itself cannot fail. The baseline
/// may cover a subset of action units; units it omits are not scored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScoringConfig")]
pub struct ScoringConfig {
    baseline: BTreeMap<ActionUnit, f64>,
    weights: BTreeMap<ActionUnit, f64>,
}

#[derive(Deserialize)]
struct RawScoringConfig {
    #[serde(default = "neutral_baseline")]
    baseline: BTreeMap<ActionUnit, f64>,
    #[serde(default = "default_weights")]
    weights: BTreeMap<ActionUnit, f64>,
}

impl TryFrom<RawScoringConfig> for ScoringConfig {
    type Error = ConfigError;

    fn try_from(raw: RawScoringConfig) -> Result<Self, Self::Error> {
        ScoringConfig::new(raw.baseline, raw.weights)
    }
}

pub fn neutral_baseline() -> BTreeMap<ActionUnit, f64> {
    BTreeMap::from(NEUTRAL_BASELINE)
}

pub fn default_weights() -> BTreeMap<ActionUnit, f64> {
    BTreeMap::from(DEFAULT_WEIGHTS)
}

impl ScoringConfig {
    pub fn new(
        baseline: BTreeMap<ActionUnit, f64>,
        weights: BTreeMap<ActionUnit, f64>,
    ) -> Result<Self, ConfigError> {
        for (&unit, &weight) in &weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidWeight { unit, weight });
            }
        }
        for (&unit, &value) in &baseline {
            if !value.is_finite() {
                return Err(ConfigError::InvalidBaseline { unit, value });
            }
            if !weights.contains_key(&unit) {
                return Err(ConfigError::MissingWeight(unit));
            }
        }
        if weights.values().sum::<f64>() <= 0.0 {
            return Err(ConfigError::ZeroTotalWeight);
        }
        Ok(Self { baseline, weights })
    }

    /// Replaces the baseline, keeping the current weights.
    pub fn with_baseline(self, baseline: BTreeMap<ActionUnit, f64>) -> Result<Self, ConfigError> {
        Self::new(baseline, self.weights)
    }

    pub fn baseline(&self) -> &BTreeMap<ActionUnit, f64> {
        &self.baseline
    }

    pub fn weights(&self) -> &BTreeMap<ActionUnit, f64> {
        &self.weights
    }

    pub fn weight(&self, unit: ActionUnit) -> f64 {
        self.weights.get(&unit).copied().unwrap_or(0.0)
    }

    /// Sum of all configured weights, including units absent from the baseline.
    pub fn total_weight(&self) -> f64 {
        self.weights.values().sum()
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            baseline: neutral_baseline(),
            weights: default_weights(),
        }
    }
}
