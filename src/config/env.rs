//! Environment variable configuration for morfo
//!
//! This module provides environment-based configuration with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Environment variable names
pub mod vars {
    /// Morpheme dictionary file path
    pub const DICTIONARY_PATH: &str = "MORFO_DICTIONARY_PATH";

    /// Fallback lexicon file path
    pub const LEXICON_PATH: &str = "MORFO_LEXICON_PATH";

    /// Log level (trace, debug, info, warn, error)
    pub const LOG_LEVEL: &str = "MORFO_LOG_LEVEL";

    /// Rarity threshold of the first search pass (0..=4)
    pub const RARITY_THRESHOLD: &str = "MORFO_RARITY_THRESHOLD";

    /// Enable debug mode
    pub const DEBUG_MODE: &str = "MORFO_DEBUG";
}

/// Runtime configuration from environment
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Dictionary file path override
    pub dictionary_path: Option<PathBuf>,

    /// Lexicon file path override
    pub lexicon_path: Option<PathBuf>,

    /// Log level
    pub log_level: String,

    /// Rarity threshold for the first pass
    pub rarity_threshold: u8,

    /// Debug mode
    pub debug_mode: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            lexicon_path: None,
            log_level: "info".to_string(),
            rarity_threshold: crate::analyzer::DEFAULT_RARITY_THRESHOLD,
            debug_mode: false,
        }
    }
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var(vars::DICTIONARY_PATH) {
            config.dictionary_path = Some(PathBuf::from(path));
        }

        if let Ok(path) = env::var(vars::LEXICON_PATH) {
            config.lexicon_path = Some(PathBuf::from(path));
        }

        if let Ok(level) = env::var(vars::LOG_LEVEL) {
            config.log_level = level.to_lowercase();
        }

        if let Ok(threshold) = env::var(vars::RARITY_THRESHOLD) {
            if let Ok(value) = threshold.parse::<u8>() {
                config.rarity_threshold = value.min(4);
            }
        }

        config.debug_mode = env::var(vars::DEBUG_MODE)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => return Err(format!("Invalid log level: {}", self.log_level)),
        }

        if self.rarity_threshold > 4 {
            return Err("Rarity threshold must be at most 4".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnvConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.rarity_threshold, 2);
        assert!(!config.debug_mode);
        assert!(config.dictionary_path.is_none());
    }

    #[test]
    fn test_env_config() {
        env::set_var(vars::LOG_LEVEL, "debug");
        env::set_var(vars::RARITY_THRESHOLD, "3");
        env::set_var(vars::DEBUG_MODE, "1");

        let config = EnvConfig::from_env();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.rarity_threshold, 3);
        assert!(config.debug_mode);

        env::remove_var(vars::LOG_LEVEL);
        env::remove_var(vars::RARITY_THRESHOLD);
        env::remove_var(vars::DEBUG_MODE);
    }

    #[test]
    fn test_validation() {
        let mut config = EnvConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }
}
