//! Baseline deviation model, weighted score aggregation and the one-call
//! `analyze` entry point.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::landmarks::domain::face_landmarks::{FaceLandmarks, MetricsError};
use crate::scoring::domain::action_unit::ActionUnit;
use crate::scoring::domain::au_metrics::AuMetrics;
use crate::scoring::domain::interpretation::StressLevel;
use crate::scoring::domain::scoring_config::ScoringConfig;
use crate::shared::constants::{
    AU_VALUE_DECIMALS, BASELINE_EPSILON, MAX_STRESS_SCORE, SCORE_DECIMALS,
};
use crate::shared::math::round_half_even;
use crate::shared::point::Point;

/// Relative deviation of each scored action unit from its baseline.
pub type Deviations = BTreeMap<ActionUnit, f64>;

#[derive(Clone, Debug, PartialEq)]
pub struct StressScore {
    /// In `[0, 10]`, rounded half-to-even to two decimals.
    pub score: f64,
    pub deviations: Deviations,
}

/// Result of a full landmark analysis, shaped like the service response.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StressReport {
    pub score: f64,
    pub interpretation: StressLevel,
    /// Rounded to four decimals for display.
    pub au_values: AuMetrics,
    #[serde(skip)]
    pub deviations: Deviations,
    /// Jaw span in input pixels, the normalization denominator.
    #[serde(skip)]
    pub face_width: f64,
}

/// `|value - base| / base` for every unit present in both tables.
///
/// Units missing from the baseline are skipped, not reported. A zero
/// baseline divides by [`BASELINE_EPSILON`] instead.
pub fn compute_deviations(
    au_values: &AuMetrics,
    baseline: &BTreeMap<ActionUnit, f64>,
) -> Deviations {
    au_values
        .iter()
        .filter_map(|(unit, value)| {
            let base = *baseline.get(&unit)?;
            let divisor = if base != 0.0 { base } else { BASELINE_EPSILON };
            Some((unit, (value - base).abs() / divisor))
        })
        .collect()
}

/// Weighted mean deviation scaled to 0-10, clamped at the top and rounded.
pub fn score_deviations(deviations: &Deviations, config: &ScoringConfig) -> f64 {
    let weighted_sum: f64 = deviations
        .iter()
        .map(|(unit, deviation)| deviation * config.weight(*unit))
        .sum();
    let raw = weighted_sum / config.total_weight() * MAX_STRESS_SCORE;
    round_half_even(raw.min(MAX_STRESS_SCORE), SCORE_DECIMALS)
}

pub fn compute_stress_score(au_values: &AuMetrics, config: &ScoringConfig) -> StressScore {
    let deviations = compute_deviations(au_values, config.baseline());
    let score = score_deviations(&deviations, config);
    StressScore { score, deviations }
}

/// Scores landmark sets against an injected baseline and weight table.
///
/// Holds no mutable state; share one instance freely across threads.
#[derive(Clone, Debug, Default)]
pub struct StressScorer {
    config: ScoringConfig,
}

impl StressScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, au_values: &AuMetrics) -> StressScore {
        compute_stress_score(au_values, &self.config)
    }

    pub fn analyze(&self, landmarks: &[Point]) -> Result<StressReport, MetricsError> {
        let landmarks = FaceLandmarks::try_from(landmarks)?;
        let face_width = landmarks.face_width()?;
        let au_values = AuMetrics::from_landmarks(&landmarks)?;
        let StressScore { score, deviations } = self.score(&au_values);
        Ok(StressReport {
            score,
            interpretation: StressLevel::from_score(score),
            au_values: au_values.rounded(AU_VALUE_DECIMALS),
            deviations,
            face_width,
        })
    }
}
