//! Engine configuration
//!
//! A flat set of numeric options loaded from a RON file, with defaults
//! matching the classic 1280x720, 90 degree setup.

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Output width in pixels
    pub width: f32,
    /// Output height in pixels
    pub height: f32,
    /// Target tick rate driving the rotation angle
    pub fps: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
    /// Vertical field of view
    pub fov_degrees: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            fps: 60.0,
            near: 0.5,
            far: 100.0,
            fov_degrees: 90.0,
        }
    }
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse a config from a RON string (for embedded configs or testing)
pub fn parse_config(s: &str) -> Result<EngineConfig, ConfigError> {
    Ok(ron::from_str(s)?)
}

/// Load a config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Load a config, falling back to defaults when the file is absent or
/// unreadable
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> EngineConfig {
    if !path.as_ref().exists() {
        return EngineConfig::default();
    }
    match load_config(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {}, using defaults", path.as_ref().display(), e);
            EngineConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.width, 1280.0);
        assert_eq!(config.height, 720.0);
        assert_eq!(config.fps, 60.0);
        assert_eq!(config.near, 0.5);
        assert_eq!(config.far, 100.0);
        assert_eq!(config.fov_degrees, 90.0);
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            "(width: 640.0, height: 480.0, fps: 30.0, near: 0.1, far: 50.0, fov_degrees: 60.0)",
        )
        .unwrap();
        assert_eq!(config.width, 640.0);
        assert_eq!(config.fps, 30.0);
        assert_eq!(config.fov_degrees, 60.0);
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let config = parse_config("(width: 800.0, height: 600.0)").unwrap();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.height, 600.0);
        assert_eq!(config.fps, 60.0);
        assert_eq!(config.far, 100.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_config("(width: \"wide\")").is_err());
    }
}
