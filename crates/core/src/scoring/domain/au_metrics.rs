//! Geometric action-unit ratios derived from a 68-point landmark set.
//!
//! Every ratio is normalized by face width so the metrics are invariant to
//! image scale and translation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::landmarks::domain::face_landmarks::*;
use crate::scoring::domain::action_unit::ActionUnit;
use crate::shared::math::round_half_even;
use crate::shared::point::Point;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuMetrics {
    values: BTreeMap<ActionUnit, f64>,
}

impl AuMetrics {
    pub fn get(&self, unit: ActionUnit) -> Option<f64> {
        self.values.get(&unit).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionUnit, f64)> + '_ {
        self.values.iter().map(|(unit, value)| (*unit, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy with every value rounded half-to-even to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> AuMetrics {
        self.iter()
            .map(|(unit, value)| (unit, round_half_even(value, decimals)))
            .collect()
    }

    pub fn as_map(&self) -> &BTreeMap<ActionUnit, f64> {
        &self.values
    }

    pub fn from_landmarks(landmarks: &FaceLandmarks) -> Result<AuMetrics, MetricsError> {
        let face_width = landmarks.face_width()?;
        let ratio = |a: usize, b: usize| landmarks.dist(a, b) / face_width;
        let paired = |a: (usize, usize), b: (usize, usize)| {
            (landmarks.dist(a.0, a.1) + landmarks.dist(b.0, b.1)) / (2.0 * face_width)
        };

        let lid_closure = paired(
            (LEFT_EYE_UPPER_OUTER, LEFT_EYE_LOWER_OUTER),
            (RIGHT_EYE_UPPER_INNER, RIGHT_EYE_LOWER_INNER),
        );

        // Signed: positive when the lip corners sit below the upper lip top.
        let corner_mid_y =
            (landmarks.point(MOUTH_LEFT).y + landmarks.point(MOUTH_RIGHT).y) / 2.0;
        let lip_corner_offset = (corner_mid_y - landmarks.point(UPPER_LIP_TOP).y) / face_width;

        let values = BTreeMap::from([
            (ActionUnit::BrowLowerer, ratio(BROW_LEFT_INNER, BROW_RIGHT_INNER)),
            (ActionUnit::UpperLidRaiser, lid_closure),
            (
                ActionUnit::CheekRaiser,
                paired((LEFT_EYE_OUTER, MOUTH_LEFT), (RIGHT_EYE_OUTER, MOUTH_RIGHT)),
            ),
            (
                ActionUnit::LidTightener,
                paired(
                    (LEFT_EYE_UPPER_INNER, LEFT_EYE_LOWER_INNER),
                    (RIGHT_EYE_UPPER_OUTER, RIGHT_EYE_LOWER_OUTER),
                ),
            ),
            (ActionUnit::NoseWrinkler, ratio(NOSE_BRIDGE_TOP, NOSE_BASE)),
            (ActionUnit::UpperLipRaiser, ratio(NOSE_BASE, UPPER_LIP_TOP)),
            (ActionUnit::LipCornerDepressor, lip_corner_offset),
            (ActionUnit::ChinRaiser, ratio(LOWER_LIP_BOTTOM, CHIN)),
            (ActionUnit::LipTightener, ratio(MOUTH_LEFT, MOUTH_RIGHT)),
            (ActionUnit::LipPressor, ratio(INNER_LIP_TOP, INNER_LIP_BOTTOM)),
            (ActionUnit::JawClencher, ratio(JAW_LOWER_LEFT, JAW_LOWER_RIGHT)),
            // Same measurement as AU5, weighted separately downstream.
            (ActionUnit::EyeTightening, lid_closure),
        ]);

        Ok(AuMetrics { values })
    }
}

impl FromIterator<(ActionUnit, f64)> for AuMetrics {
    fn from_iter<I: IntoIterator<Item = (ActionUnit, f64)>>(iter: I) -> Self {
        AuMetrics {
            values: iter.into_iter().collect(),
        }
    }
}

/// Computes all twelve action units from exactly 68 landmarks.
pub fn compute_au_metrics(landmarks: &[Point]) -> Result<AuMetrics, MetricsError> {
    let landmarks = FaceLandmarks::try_from(landmarks)?;
    AuMetrics::from_landmarks(&landmarks)
}
