//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! waterer-config.toml file. It provides a centralized way to configure GPIO
//! pin assignments, the watering policy, and the event-log location.
//!
//! Configuration is loaded once at process start and never mutated; every
//! component receives the values it needs explicitly rather than reaching
//! into process-wide state. Note that no validation happens at load time -
//! the pump actuator checks the watering duration before it drives any pin
//! (see [`crate::pump`]).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration loaded from waterer-config.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// GPIO pin assignments (BCM numbering)
    pub pins: PinConfig,
    /// Watering policy: threshold, interval, pump run time
    pub watering: WateringConfig,
    /// Event log location
    pub log: LogConfig,
}

/// GPIO pin assignments, BCM numbering as used by rppal.
///
/// Pin identifiers are `u8`, so "must be a non-negative integer" holds by
/// construction; a typo'd pin number fails when the pin is requested, not
/// mid-watering.
#[derive(Debug, Deserialize, Serialize)]
pub struct PinConfig {
    /// GPIO pin connected to the soil-moisture sensor (digital input)
    pub moisture_sensor: u8,
    /// GPIO pin connected to the relay module (digital output, active-low)
    pub relay: u8,
}

/// Watering policy configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct WateringConfig {
    /// Readings strictly below this value count as "dry" and trigger watering
    pub moisture_threshold: u16,
    /// Seconds to wait between consecutive moisture checks
    pub check_interval_secs: u64,
    /// Seconds the pump stays on during one watering event; must be a
    /// positive finite number, enforced by the pump before any pin write
    pub water_duration_secs: f64,
}

/// Event log configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log file path; the parent directory is created on first write
    pub path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pins: PinConfig {
                moisture_sensor: 17,
                relay: 27,
            },
            watering: WateringConfig {
                moisture_threshold: 300,
                check_interval_secs: 60 * 15, // check every 15 minutes
                water_duration_secs: 5.0,
            },
            log: LogConfig {
                path: "logs/watering_log.txt".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from waterer-config.toml file
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path("waterer-config.toml")
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Invalid config file format: {}", e);
                    eprintln!("Using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                eprintln!("Info: No config file found, using default configuration");
                Self::default()
            }
        }
    }

    /// Save current configuration to waterer-config.toml
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to_path("waterer-config.toml")
    }

    /// Save current configuration to specified path
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.pins.moisture_sensor, 17);
        assert_eq!(config.pins.relay, 27);
        assert_eq!(config.watering.moisture_threshold, 300);
        assert_eq!(config.watering.check_interval_secs, 900);
        assert_eq!(config.watering.water_duration_secs, 5.0);
        assert_eq!(config.log.path, "logs/watering_log.txt");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.pins.relay, parsed.pins.relay);
        assert_eq!(
            config.watering.moisture_threshold,
            parsed.watering.moisture_threshold
        );
        assert_eq!(config.log.path, parsed.log.path);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = Config::load_from_path("/nonexistent/path");
        // Should fallback to default
        assert_eq!(config.pins.moisture_sensor, 17);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("waterer-config.toml");

        let mut config = Config::default();
        config.watering.moisture_threshold = 42;
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path);
        assert_eq!(loaded.watering.moisture_threshold, 42);
        assert_eq!(loaded.pins.relay, config.pins.relay);
    }

    #[test]
    fn test_load_invalid_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        fs::write(temp.path(), "this is not toml {{{").unwrap();
        let config = Config::load_from_path(temp.path());
        // Should fallback to default
        assert_eq!(config.pins.relay, 27);
    }
}
