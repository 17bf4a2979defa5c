use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::landmarks::domain::landmark_provider::LandmarkProvider;
use crate::shared::point::Point;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Pair([f64; 2]),
    Object(Point),
}

impl From<RawPoint> for Point {
    fn from(raw: RawPoint) -> Self {
        match raw {
            RawPoint::Pair(pair) => Point::from(pair),
            RawPoint::Object(point) => point,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LandmarkDocument {
    Points(Vec<RawPoint>),
    Faces {
        faces: Vec<Vec<RawPoint>>,
    },
    // The key is required; only an explicit `null` means no face.
    Single {
        #[serde(deserialize_with = "Option::deserialize")]
        landmarks: Option<Vec<RawPoint>>,
    },
}

/// Parses a landmark export produced by an external 68-point detector.
///
/// Accepted shapes:
/// - `[[x, y], ...]` or `[{"x": .., "y": ..}, ...]`
/// - `{"landmarks": [...]}`, where `null` means no face was found
/// - `{"faces": [[...], ...]}`; the first face is used, an empty list
///   means no face was found
///
/// Any other object is an error, never a "no face" result. Point counts
/// are not checked here; validation belongs to the scorer.
pub fn parse_landmarks(text: &str) -> Result<Option<Vec<Point>>, serde_json::Error> {
    let points = match serde_json::from_str::<Option<LandmarkDocument>>(text)? {
        None => None,
        Some(LandmarkDocument::Points(points)) => Some(points),
        Some(LandmarkDocument::Faces { faces }) => {
            if faces.len() > 1 {
                log::debug!("{} faces in landmark export, using the first", faces.len());
            }
            faces.into_iter().next()
        }
        Some(LandmarkDocument::Single { landmarks }) => landmarks,
    };
    Ok(points.map(|raw| raw.into_iter().map(Point::from).collect()))
}

/// Reads landmark exports from JSON files on disk.
#[derive(Debug, Default)]
pub struct JsonLandmarkProvider;

impl JsonLandmarkProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LandmarkProvider for JsonLandmarkProvider {
    fn locate(&mut self, source: &Path) -> Result<Option<Vec<Point>>, Box<dyn std::error::Error>> {
        let text = fs::read_to_string(source)
            .map_err(|e| format!("Failed to read landmarks from {}: {e}", source.display()))?;
        let points = parse_landmarks(&text)
            .map_err(|e| format!("Invalid landmark file {}: {e}", source.display()))?;
        if let Some(points) = &points {
            log::debug!("Read {} landmarks from {}", points.len(), source.display());
        }
        Ok(points)
    }
}
