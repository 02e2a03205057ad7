//! Configuration management for Support Copilot
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.support-copilot/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{CopilotError, Result};

/// Complete configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub memory: MemoryConfig,
    pub display: DisplayConfig,
    pub paths: PathsConfig,
}

/// Conversation memory settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Entries shown per category in the prompt summary (all when unset)
    pub summary_window: Option<usize>,
}

/// Terminal output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub default_verbosity: String,
    pub color_output: bool,
}

/// File system paths configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub state_dir: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_verbosity: "normal".to_string(),
            color_output: true,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            state_dir: "~/.support-copilot".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CopilotError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| CopilotError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".support-copilot").join("config.toml");
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.memory.summary_window == Some(0) {
            return Err(CopilotError::Config(
                "summary_window must be greater than 0".to_string(),
            ));
        }

        match self.display.default_verbosity.as_str() {
            "quiet" | "normal" | "verbose" | "very_verbose" => {}
            _ => {
                return Err(CopilotError::Config(format!(
                    "Invalid verbosity level: {}",
                    self.display.default_verbosity
                )))
            }
        }

        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CopilotError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get state directory path
    pub fn state_dir(&self) -> PathBuf {
        Self::expand_path(&self.paths.state_dir)
    }

    /// REPL history file inside the state directory
    pub fn history_file(&self) -> PathBuf {
        self.state_dir().join("history.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.memory.summary_window.is_none());
        assert_eq!(config.display.default_verbosity, "normal");
        assert_eq!(config.paths.state_dir, "~/.support-copilot");
    }

    #[test]
    fn test_config_validation_success() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_window() {
        let mut config = Config::default();
        config.memory.summary_window = Some(0);
        assert!(config.validate().is_err());

        config.memory.summary_window = Some(3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_verbosity() {
        let mut config = Config::default();
        config.display.default_verbosity = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[memory]\nsummary_window = 3\n").unwrap();
        assert_eq!(config.memory.summary_window, Some(3));
        assert_eq!(config.display.default_verbosity, "normal");
        assert!(config.display.color_output);
    }

    #[test]
    fn test_rendered_toml_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.memory.summary_window = Some(5);
        config.display.color_output = false;
        fs::write(&path, config.to_toml().unwrap()).unwrap();

        let loaded = Config::load(Some(path)).unwrap();
        assert_eq!(loaded.memory.summary_window, Some(5));
        assert!(!loaded.display.color_output);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[memory]\nsummary_window = 0\n").unwrap();

        let result = Config::load(Some(path));
        assert!(matches!(result, Err(CopilotError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load_from_file(Path::new("/nonexistent/support-copilot.toml"));
        assert!(matches!(result, Err(CopilotError::Config(_))));
    }

    #[test]
    fn test_expand_path() {
        assert!(!Config::expand_path("~/.support-copilot").to_string_lossy().contains('~'));
        assert_eq!(Config::expand_path("/abs/path"), PathBuf::from("/abs/path"));
    }
}
