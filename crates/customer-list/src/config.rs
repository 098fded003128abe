//! Configuration management for customer-list.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "customer-list";

/// Environment variable prefix.
const ENV_PREFIX: &str = "CUSTOMER_LIST_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CUSTOMER_LIST_`)
/// 2. TOML config file at `~/.config/customer-list/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Record input configuration.
    pub record: RecordConfig,
    /// Menu configuration.
    pub menu: MenuConfig,
}

/// Record input configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordConfig {
    /// Maximum number of characters kept from an entered last name.
    /// Set to 0 for unlimited.
    pub max_last_name_len: usize,
}

/// Menu configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Print the greeting banner when a session starts.
    pub show_banner: bool,
    /// Prompt shown before every menu choice.
    pub prompt: String,
    /// Echo node allocation and release lines to the session output.
    pub allocation_trace: bool,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            max_last_name_len: 49,
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            prompt: "Your choice, H for help: ".to_string(),
            allocation_trace: false,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `CUSTOMER_LIST_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.menu.prompt.trim().is_empty() {
            return Err(Error::config_validation("menu.prompt must not be empty"));
        }
        Ok(())
    }

    /// Cut an entered last name down to `max_last_name_len` characters.
    ///
    /// Truncation happens on a character boundary, never inside a multi-byte
    /// character.
    #[must_use]
    pub fn truncate_last_name<'a>(&self, name: &'a str) -> &'a str {
        let max = self.record.max_last_name_len;
        if max == 0 {
            return name;
        }
        match name.char_indices().nth(max) {
            Some((end, _)) => &name[..end],
            None => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write as _;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.record.max_last_name_len, 49);
        assert!(config.menu.show_banner);
        assert!(!config.menu.allocation_trace);
        assert!(config.menu.prompt.contains('H'));
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_prompt() {
        let mut config = Config::default();
        config.menu.prompt = "   ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("menu.prompt"));
    }

    #[test]
    fn test_truncate_last_name() {
        let mut config = Config::default();
        config.record.max_last_name_len = 4;

        assert_eq!(config.truncate_last_name("Schmidt"), "Schm");
        assert_eq!(config.truncate_last_name("Weber"), "Webe");
        assert_eq!(config.truncate_last_name("Abt"), "Abt");
        assert_eq!(config.truncate_last_name(""), "");
    }

    #[test]
    fn test_truncate_last_name_on_char_boundary() {
        let mut config = Config::default();
        config.record.max_last_name_len = 2;

        assert_eq!(config.truncate_last_name("Müller"), "Mü");
        assert_eq!(config.truncate_last_name("ÄÖÜ"), "ÄÖ");
    }

    #[test]
    fn test_truncate_unlimited() {
        let mut config = Config::default();
        config.record.max_last_name_len = 0;

        let long = "x".repeat(500);
        assert_eq!(config.truncate_last_name(&long), long);
    }

    #[test]
    fn test_truncate_default_limit() {
        let config = Config::default();
        let long = "y".repeat(60);
        assert_eq!(config.truncate_last_name(&long).chars().count(), 49);
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("customer-list"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[record]\nmax_last_name_len = 10\n\n[menu]\nshow_banner = false\nallocation_trace = true"
        )
        .unwrap();

        let config = Config::load_from(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.record.max_last_name_len, 10);
        assert!(!config.menu.show_banner);
        assert!(config.menu.allocation_trace);
        assert_eq!(config.menu.prompt, MenuConfig::default().prompt);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[menu]\nprompt = \"\"").unwrap();

        let result = Config::load_from(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_load_rejects_wrong_type() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[record]\nmax_last_name_len = \"many\"").unwrap();

        let result = Config::load_from(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(Error::ConfigLoad(_))));
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("max_last_name_len"));
        assert!(json.contains("show_banner"));
    }

    #[test]
    fn test_menu_config_deserialize_partial() {
        let json = r#"{"prompt": "> "}"#;
        let menu: MenuConfig = serde_json::from_str(json).unwrap();
        assert_eq!(menu.prompt, "> ");
        assert!(menu.show_banner);
    }
}
