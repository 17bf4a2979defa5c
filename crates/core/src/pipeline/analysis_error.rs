use thiserror::Error;

use crate::landmarks::domain::face_landmarks::MetricsError;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("no face detected")]
    NoFaceDetected,
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    #[error("landmark provider failed: {0}")]
    Provider(Box<dyn std::error::Error>),
}

impl AnalysisError {
    /// Message suitable for showing to the person who submitted the image.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::NoFaceDetected => "No face detected in the image. Please ensure the \
                 face is clearly visible and front-facing."
                .to_string(),
            AnalysisError::Metrics(MetricsError::InvalidLandmarkCount { expected, actual }) => {
                format!("Landmark detection returned {actual} points instead of {expected}.")
            }
            AnalysisError::Metrics(MetricsError::DegenerateGeometry { .. }) => {
                "Facial landmarks are degenerate (zero face width); try a clearer, \
                 front-facing photo."
                    .to_string()
            }
            AnalysisError::Metrics(MetricsError::NonFiniteCoordinate { index }) => {
                format!("Landmark {index} has an invalid coordinate.")
            }
            AnalysisError::Provider(e) => format!("Error processing image: {e}"),
        }
    }
}
