use std::path::Path;

use crate::landmarks::domain::landmark_provider::LandmarkProvider;
use crate::pipeline::analysis_error::AnalysisError;
use crate::scoring::domain::stress_scorer::{StressReport, StressScorer};

/// Single-face stress analysis: locate landmarks → AU metrics → score →
/// interpretation.
pub struct AnalyzeFaceUseCase {
    provider: Box<dyn LandmarkProvider>,
    scorer: StressScorer,
}

impl AnalyzeFaceUseCase {
    pub fn new(provider: Box<dyn LandmarkProvider>, scorer: StressScorer) -> Self {
        Self { provider, scorer }
    }

    pub fn execute(&mut self, source: &Path) -> Result<StressReport, AnalysisError> {
        let landmarks = self
            .provider
            .locate(source)
            .map_err(AnalysisError::Provider)?
            .ok_or_else(|| {
                log::warn!("No face found in {}", source.display());
                AnalysisError::NoFaceDetected
            })?;

        let report = self.scorer.analyze(&landmarks)?;
        log::debug!(
            "{}: face width {:.1}px, score {:.2}, deviations {:?}",
            source.display(),
            report.face_width,
            report.score,
            report.deviations
        );
        log::info!("{}: {}", source.display(), report.interpretation);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::domain::face_landmarks::MetricsError;
    use crate::scoring::domain::interpretation::StressLevel;
    use crate::scoring::domain::scoring_config::ScoringConfig;
    use crate::shared::point::Point;
    use crate::test_support::synthetic_face;
    use std::sync::{Arc, Mutex};

    // --- Stubs ---

    struct StubProvider {
        result: Option<Vec<Point>>,
        sources: Arc<Mutex<Vec<std::path::PathBuf>>>,
    }

    impl StubProvider {
        fn new(result: Option<Vec<Point>>) -> Self {
            Self {
                result,
                sources: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl LandmarkProvider for StubProvider {
        fn locate(
            &mut self,
            source: &Path,
        ) -> Result<Option<Vec<Point>>, Box<dyn std::error::Error>> {
            self.sources.lock().unwrap().push(source.to_path_buf());
            Ok(self.result.clone())
        }
    }

    struct FailingProvider;

    impl LandmarkProvider for FailingProvider {
        fn locate(
            &mut self,
            _source: &Path,
        ) -> Result<Option<Vec<Point>>, Box<dyn std::error::Error>> {
            Err("detector model not loaded".into())
        }
    }

    fn use_case(provider: impl LandmarkProvider + 'static) -> AnalyzeFaceUseCase {
        AnalyzeFaceUseCase::new(Box::new(provider), StressScorer::default())
    }

    // --- Tests ---

    #[test]
    fn test_scores_located_face() {
        let report = use_case(StubProvider::new(Some(synthetic_face())))
            .execute(Path::new("face.json"))
            .unwrap();

        assert_eq!(report.score, 0.05);
        assert_eq!(report.interpretation, StressLevel::VeryLow);
        assert_eq!(report.face_width, 200.0);
    }

    #[test]
    fn test_passes_source_to_provider() {
        let provider = StubProvider::new(Some(synthetic_face()));
        let sources = provider.sources.clone();

        use_case(provider).execute(Path::new("in/face.json")).unwrap();

        assert_eq!(*sources.lock().unwrap(), vec![Path::new("in/face.json")]);
    }

    #[test]
    fn test_no_face_is_distinct_error() {
        let err = use_case(StubProvider::new(None))
            .execute(Path::new("empty.json"))
            .unwrap_err();

        assert!(matches!(err, AnalysisError::NoFaceDetected));
    }

    #[test]
    fn test_short_landmark_list_is_invalid_count() {
        let mut points = synthetic_face();
        points.truncate(67);

        let err = use_case(StubProvider::new(Some(points)))
            .execute(Path::new("short.json"))
            .unwrap_err();

        assert!(matches!(
            err,
            AnalysisError::Metrics(MetricsError::InvalidLandmarkCount { actual: 67, .. })
        ));
    }

    #[test]
    fn test_provider_failure_is_wrapped() {
        let err = use_case(FailingProvider)
            .execute(Path::new("face.json"))
            .unwrap_err();

        assert!(matches!(err, AnalysisError::Provider(_)));
        assert!(err.to_string().contains("detector model not loaded"));
    }

    #[test]
    fn test_uses_injected_config() {
        let au = crate::scoring::domain::au_metrics::compute_au_metrics(&synthetic_face()).unwrap();
        let config = ScoringConfig::default()
            .with_baseline(au.as_map().clone())
            .unwrap();
        let mut uc = AnalyzeFaceUseCase::new(
            Box::new(StubProvider::new(Some(synthetic_face()))),
            StressScorer::new(config),
        );

        assert_eq!(uc.execute(Path::new("face.json")).unwrap().score, 0.0);
    }

    #[test]
    fn test_reusable_across_calls() {
        let mut uc = use_case(StubProvider::new(Some(synthetic_face())));
        let first = uc.execute(Path::new("a.json")).unwrap();
        let second = uc.execute(Path::new("b.json")).unwrap();
        assert_eq!(first, second);
    }
}
