//! Validated 68-point facial landmark set (iBUG 300-W layout).
//!
//! Index groups: jaw 0-16, brows 17-26, nose 27-35, eyes 36-47, mouth 48-67.

use thiserror::Error;

use crate::shared::constants::{LANDMARK_COUNT, MIN_FACE_WIDTH};
use crate::shared::point::Point;

pub const JAW_LEFT: usize = 0;
pub const JAW_LOWER_LEFT: usize = 5;
pub const CHIN: usize = 8;
pub const JAW_LOWER_RIGHT: usize = 11;
pub const JAW_RIGHT: usize = 16;
pub const BROW_LEFT_INNER: usize = 21;
pub const BROW_RIGHT_INNER: usize = 22;
pub const NOSE_BRIDGE_TOP: usize = 27;
pub const NOSE_BASE: usize = 33;
pub const LEFT_EYE_OUTER: usize = 36;
pub const LEFT_EYE_UPPER_OUTER: usize = 37;
pub const LEFT_EYE_UPPER_INNER: usize = 38;
pub const LEFT_EYE_LOWER_INNER: usize = 40;
pub const LEFT_EYE_LOWER_OUTER: usize = 41;
pub const RIGHT_EYE_UPPER_INNER: usize = 43;
pub const RIGHT_EYE_UPPER_OUTER: usize = 44;
pub const RIGHT_EYE_OUTER: usize = 45;
pub const RIGHT_EYE_LOWER_OUTER: usize = 46;
pub const RIGHT_EYE_LOWER_INNER: usize = 47;
pub const MOUTH_LEFT: usize = 48;
pub const UPPER_LIP_TOP: usize = 51;
pub const MOUTH_RIGHT: usize = 54;
pub const LOWER_LIP_BOTTOM: usize = 57;
pub const INNER_LIP_TOP: usize = 62;
pub const INNER_LIP_BOTTOM: usize = 66;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("expected {expected} facial landmarks, got {actual}")]
    InvalidLandmarkCount { expected: usize, actual: usize },
    #[error("degenerate face geometry: face width is {face_width}")]
    DegenerateGeometry { face_width: f64 },
    #[error("landmark {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaceLandmarks {
    points: Vec<Point>,
}

impl FaceLandmarks {
    /// Rejects anything other than exactly 68 finite points.
    pub fn new(points: Vec<Point>) -> Result<Self, MetricsError> {
        if points.len() != LANDMARK_COUNT {
            return Err(MetricsError::InvalidLandmarkCount {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(MetricsError::NonFiniteCoordinate { index });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Point {
        self.points[index]
    }

    pub fn dist(&self, a: usize, b: usize) -> f64 {
        self.points[a].distance(&self.points[b])
    }

    /// Jaw-to-jaw span (landmarks 0 and 16), the normalization denominator
    /// for every action unit.
    pub fn face_width(&self) -> Result<f64, MetricsError> {
        let face_width = self.dist(JAW_LEFT, JAW_RIGHT);
        if !face_width.is_finite() || face_width <= MIN_FACE_WIDTH {
            return Err(MetricsError::DegenerateGeometry { face_width });
        }
        Ok(face_width)
    }
}

impl TryFrom<&[Point]> for FaceLandmarks {
    type Error = MetricsError;

    fn try_from(points: &[Point]) -> Result<Self, Self::Error> {
        Self::new(points.to_vec())
    }
}
