use crate::error::RaceError;
use crate::trip::{CONSUMPTION_GROWTH, TripModel};
use crate::vehicle::RateTable;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Multiplicative fuel penalty per km/h above the reference speed
    #[serde(default = "default_consumption_growth")]
    pub consumption_growth: f64,
    #[serde(default)]
    pub vehicles: RateTable,
    #[serde(default)]
    pub animation: AnimationConfig,
}

fn default_consumption_growth() -> f64 {
    CONSUMPTION_GROWTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            consumption_growth: default_consumption_growth(),
            vehicles: RateTable::default(),
            animation: AnimationConfig::default(),
        }
    }
}

/// Lane timing used to pace each car relative to the other.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    #[serde(default = "default_base_ms")]
    pub base_ms: u64,
    #[serde(default = "default_min_ms")]
    pub min_ms: u64,
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
    /// Pause before both cars start
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_base_ms() -> u64 {
    1500
}

fn default_min_ms() -> u64 {
    500
}

fn default_max_ms() -> u64 {
    5000
}

fn default_delay_ms() -> u64 {
    500
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            base_ms: default_base_ms(),
            min_ms: default_min_ms(),
            max_ms: default_max_ms(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), RaceError> {
        if self.min_ms == 0 {
            return Err(RaceError::InvalidConfig {
                key: "animation.min_ms".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.min_ms > self.max_ms {
            return Err(RaceError::InvalidConfig {
                key: "animation.min_ms".to_string(),
                reason: format!("{} exceeds animation.max_ms ({})", self.min_ms, self.max_ms),
            });
        }
        Ok(())
    }
}

fn check_positive(key: &str, value: f64) -> Result<(), RaceError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RaceError::InvalidConfig {
            key: key.to_string(),
            reason: format!("{} is not a finite number greater than 0", value),
        });
    }
    Ok(())
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        check_positive("consumption_growth", self.consumption_growth)?;
        if self.consumption_growth <= 1.0 {
            warn!(
                "consumption_growth {} does not penalise higher speeds",
                self.consumption_growth
            );
        }

        for (vehicle, rate) in self.vehicles.entries() {
            check_positive(&format!("vehicles.{}", vehicle.config_key()), rate)?;
        }

        self.animation.validate()?;
        Ok(())
    }

    pub fn trip_model(&self) -> TripModel {
        TripModel {
            consumption_growth: self.consumption_growth,
            rates: self.vehicles,
        }
    }
}

/// `~/.car-race/config.toml`
pub fn default_path() -> Result<PathBuf> {
    let config_dir = home::home_dir()
        .context("Could not find home directory")?
        .join(".car-race");
    Ok(config_dir.join("config.toml"))
}

/// Loads a config file, falling back to defaults for anything missing.
///
/// A file that does not exist yields the default config.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading config from {}", path.display());

    let loader = ConfigBuilder::builder()
        .add_source(File::from(path).format(FileFormat::Toml).required(false))
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;

    config.validate()?;
    Ok(config)
}

/// Writes `config` as TOML, creating the parent directory if needed.
pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let path = path.as_ref();
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    std::fs::write(path, toml_string).context("Failed to write config file")?;
    debug!("Saved config to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_trip_model_carries_constants() {
        let mut config = Config::default();
        config.consumption_growth = 1.02;
        config.vehicles.b = 7.0;

        let model = config.trip_model();
        assert_eq!(model.consumption_growth, 1.02);
        assert_eq!(model.rates.b, 7.0);
    }
}
