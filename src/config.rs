//! Configuration for the simulator.

use crate::registry::SensorRegistry;
use crate::sensor::{PressureSensor, SensorKind, TemperatureSensor};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Sensors created at startup, in order.
    #[serde(default)]
    pub preload: Vec<SensorSeed>,
}

/// One sensor to create at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorSeed {
    pub identifier: String,
    pub kind: SensorKind,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Config {
    /// Load configuration from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Default location under the platform config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("polysensor")
            .join("config.json")
    }

    /// Create and register every preloaded sensor, in declaration order.
    pub fn seed(&self, registry: &mut SensorRegistry) {
        for seed in &self.preload {
            match seed.kind {
                SensorKind::Temperature => {
                    registry.insert(Box::new(TemperatureSensor::new(&seed.identifier)));
                }
                SensorKind::Pressure => {
                    registry.insert(Box::new(PressureSensor::new(&seed.identifier)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::Sensor;

    fn sample() -> Config {
        Config {
            preload: vec![
                SensorSeed {
                    identifier: "T-001".to_string(),
                    kind: SensorKind::Temperature,
                },
                SensorSeed {
                    identifier: "P-100".to_string(),
                    kind: SensorKind::Pressure,
                },
            ],
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = sample();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.preload, config.preload);
    }

    #[test]
    fn test_seed_registers_sensors_in_order() {
        let mut registry = SensorRegistry::new();
        sample().seed(&mut registry);

        assert_eq!(registry.len(), 2);
        let first = registry.find_by_identifier("T-001").unwrap();
        assert_eq!(first.kind(), SensorKind::Temperature);
    }

    #[test]
    fn test_missing_preload_defaults_to_empty() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.preload.is_empty());
    }
}
