use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::scoring::domain::scoring_config::ScoringConfig;

#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("failed to read scoring config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scoring config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a [`ScoringConfig`] from a JSON file.
///
/// Both sections are optional and default to the neutral tables:
///
/// ```json
/// { "baseline": { "AU4": 0.07, "AU5": 0.06 }, "weights": { "AU4": 0.15 } }
/// ```
pub fn load(path: &Path) -> Result<ScoringConfig, ConfigFileError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ScoringConfig =
        serde_json::from_str(&text).map_err(|source| ConfigFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!(
        "Loaded scoring config from {} ({} baseline units, total weight {:.3})",
        path.display(),
        config.baseline().len(),
        config.total_weight()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::domain::action_unit::ActionUnit;
    use crate::scoring::domain::scoring_config::default_weights;

    fn write_config(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("scoring.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_empty_object_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "{}");
        assert_eq!(load(&path).unwrap(), ScoringConfig::default());
    }

    #[test]
    fn test_load_custom_baseline() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{"baseline": {"AU4": 0.09, "AU31": 0.5}}"#);
        let config = load(&path).unwrap();
        assert_eq!(config.baseline().len(), 2);
        assert_eq!(config.baseline()[&ActionUnit::JawClencher], 0.5);
        assert_eq!(config.weights(), &default_weights());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigFileError::Read { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "{ baseline: ");
        assert!(matches!(load(&path).unwrap_err(), ConfigFileError::Parse { .. }));
    }

    #[test]
    fn test_unknown_unit_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{"baseline": {"AU99": 0.1}}"#);
        assert!(matches!(load(&path).unwrap_err(), ConfigFileError::Parse { .. }));
    }

    #[test]
    fn test_invalid_weights_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{"weights": {"AU4": -1.0}}"#);
        let message = load(&path).unwrap_err().to_string();
        assert!(message.contains("scoring.json"));
        assert!(message.contains("AU4"));
    }
}
