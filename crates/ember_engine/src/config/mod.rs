//! Configuration system
//!
//! Any serde-able settings struct gains file persistence through the
//! [`Config`] trait. TOML is the usual format for hand-edited files; RON
//! round-trips richer structures.

pub use serde::{Deserialize, Serialize};

/// File-backed configuration
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a TOML or RON file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to a TOML or RON file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Load from a file, falling back to defaults when it does not exist
    fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no config at {path}, using defaults");
                Self::default()
            }
            Err(err) => {
                log::warn!("failed to load config from {path}: {err}, using defaults");
                Self::default()
            }
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Top-level engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window title
    pub window_title: String,
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Scene file loaded at startup, if any
    pub startup_scene: Option<String>,
    /// Whether the simulation starts running or paused in the editor
    pub start_in_play_mode: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_title: "Ember Engine".to_string(),
            window_width: 1280,
            window_height: 720,
            startup_scene: None,
            start_in_play_mode: false,
        }
    }
}

impl Config for EngineConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip() {
        let mut config = EngineConfig::default();
        config.window_title = "Sandbox".to_string();
        config.startup_scene = Some("scenes/main.json".to_string());

        let path = std::env::temp_dir().join(format!("ember_cfg_{}.toml", std::process::id()));
        let path = path.to_string_lossy().to_string();
        config.save_to_file(&path).unwrap();

        let restored = EngineConfig::load_from_file(&path).unwrap();
        assert_eq!(restored.window_title, "Sandbox");
        assert_eq!(restored.startup_scene.as_deref(), Some("scenes/main.json"));
        assert_eq!(restored.window_width, 1280);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_unsupported_format() {
        let config = EngineConfig::default();
        assert!(matches!(
            config.save_to_file("settings.yaml"),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = EngineConfig::load_or_default("/no/such/config.toml");
        assert_eq!(config.window_width, 1280);
        assert!(!config.start_in_play_mode);
    }
}
