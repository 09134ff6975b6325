//! # Configuration
//!
//! YAML configuration for the estimation engine. Loaded from the first match of:
//! 1. the path in the `ESTIMATION_CONFIG` environment variable
//! 2. `./estimation.yaml`
//!
//! and falls back to defaults when neither exists.
//!
//! ```yaml
//! spline_boundary: not_a_knot
//! dense_resolution: 200
//! parallel: false
//! logging:
//!   level: info
//!   format: compact
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::interpolation::cubic_spline_interpolator::SplineBoundary;
use crate::observe::logging::LogConfig;

pub const CONFIG_ENV_VAR: &str = "ESTIMATION_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "estimation.yaml";

/// Points per curve the original plot used
pub const DEFAULT_DENSE_RESOLUTION: usize = 200;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("config not found: {0}")]
    NotFound(String),
    #[error("failed to read config: {0}")]
    ReadError(String),
    #[error("failed to parse config: {0}")]
    ParseError(String),
    #[error("invalid config: {0}")]
    ValidationError(String),
    #[error("failed to serialize config: {0}")]
    SerializeError(String),
    #[error("failed to write config: {0}")]
    WriteError(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationConfig {
    /// End condition of the cubic spline
    pub spline_boundary: SplineBoundary,
    /// Points per method in `dense_curve`
    pub dense_resolution: usize,
    /// Run the four methods on the rayon pool
    pub parallel: bool,
    /// Not applied by the library, the embedding application passes it to
    /// `observe::logging::init_logging` at startup
    pub logging: LogConfig,
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            spline_boundary: SplineBoundary::NotAKnot,
            dense_resolution: DEFAULT_DENSE_RESOLUTION,
            parallel: false,
            logging: LogConfig::default(),
        }
    }
}

impl EstimationConfig {
    /// Load from the search path, defaults if nothing is found.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::search(explicit.as_deref(), Path::new(DEFAULT_CONFIG_FILE))
    }

    /// An explicit path must exist. Otherwise `local` is used if present, else defaults.
    fn search(explicit: Option<&Path>, local: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.display().to_string()));
            }
            return Self::load_from(path);
        }
        if local.exists() {
            return Self::load_from(local);
        }
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    /// Parse and validate a YAML document
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::WriteError(format!("{}: {}", path.display(), e)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dense_resolution < 2 {
            return Err(ConfigError::ValidationError(format!(
                "dense_resolution must be at least 2, got {}",
                self.dense_resolution
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::observe::logging::{LogFormat, LogLevel};

    #[test]
    fn test_defaults() {
        let config = EstimationConfig::default();
        assert_eq!(config.spline_boundary, SplineBoundary::NotAKnot);
        assert_eq!(config.dense_resolution, 200);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = "spline_boundary: natural\nlogging:\n  level: debug\n  format: json\n";
        let config = EstimationConfig::parse(yaml).unwrap();
        assert_eq!(config.spline_boundary, SplineBoundary::Natural);
        assert_eq!(config.dense_resolution, 200);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(matches!(
            EstimationConfig::parse("dense_resolution: 1\n"),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            EstimationConfig::parse("spline_boundary: clamped\n"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estimation.yaml");
        let config = EstimationConfig {
            parallel: true,
            dense_resolution: 50,
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(EstimationConfig::load_from(&path).unwrap(), config);
        assert!(matches!(
            EstimationConfig::load_from(&dir.path().join("missing.yaml")),
            Err(ConfigError::ReadError(_))
        ));
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("estimation.yaml");
        assert!(matches!(
            EstimationConfig::default().save(&path),
            Err(ConfigError::WriteError(_))
        ));
    }

    #[test]
    fn test_search_order() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("explicit.yaml");
        let local = dir.path().join("estimation.yaml");
        std::fs::write(&explicit, "dense_resolution: 10\n").unwrap();
        std::fs::write(&local, "dense_resolution: 20\n").unwrap();

        // The explicit path wins over the local file
        let config = EstimationConfig::search(Some(&explicit), &local).unwrap();
        assert_eq!(config.dense_resolution, 10);
        // Without one the local file is used
        let config = EstimationConfig::search(None, &local).unwrap();
        assert_eq!(config.dense_resolution, 20);
        // Neither present gives defaults
        let missing = dir.path().join("missing.yaml");
        assert_eq!(
            EstimationConfig::search(None, &missing).unwrap(),
            EstimationConfig::default()
        );
        // A named but absent file is an error, not a silent fallback
        assert!(matches!(
            EstimationConfig::search(Some(&missing), &local),
            Err(ConfigError::NotFound(_))
        ));
    }

    // The only test touching the environment variable
    #[test]
    fn test_load_from_env_var() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estimation.yaml");

        std::env::set_var(CONFIG_ENV_VAR, &path);
        assert!(matches!(
            EstimationConfig::load(),
            Err(ConfigError::NotFound(_))
        ));

        std::fs::write(&path, "spline_boundary: natural\nparallel: true\n").unwrap();
        let loaded = EstimationConfig::load();
        std::env::remove_var(CONFIG_ENV_VAR);

        let config = loaded.unwrap();
        assert_eq!(config.spline_boundary, SplineBoundary::Natural);
        assert!(config.parallel);
    }
}
