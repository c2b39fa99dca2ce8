//! Configuration and initialization for morfo

pub mod env;

use std::path::PathBuf;

use crate::core::{MorfoError, Result};
use self::env::EnvConfig;

/// Analyzer configuration
#[derive(Debug, Clone)]
pub struct MorfoConfig {
    /// Path to the tab-separated morpheme dictionary
    pub dictionary_path: PathBuf,
    /// Path to the pre-segmented fallback lexicon, `None` to disable it
    pub lexicon_path: Option<PathBuf>,
    /// Rarity admitted on the first search pass (0..=4)
    pub rarity_threshold: u8,
}

impl Default for MorfoConfig {
    fn default() -> Self {
        Self {
            dictionary_path: default_dictionary_path(),
            lexicon_path: Some(default_lexicon_path()),
            rarity_threshold: crate::analyzer::DEFAULT_RARITY_THRESHOLD,
        }
    }
}

impl MorfoConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        let env_config = EnvConfig::from_env();
        Self {
            dictionary_path: env_config
                .dictionary_path
                .clone()
                .unwrap_or_else(default_dictionary_path),
            lexicon_path: env_config.lexicon_path.clone().or_else(|| Some(default_lexicon_path())),
            rarity_threshold: env_config.rarity_threshold,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.rarity_threshold > 4 {
            return Err(MorfoError::Config(format!(
                "rarity threshold {} out of range 0..=4",
                self.rarity_threshold
            )));
        }
        if self.dictionary_path.as_os_str().is_empty() {
            return Err(MorfoError::Config("empty dictionary path".to_string()));
        }
        Ok(())
    }
}

/// Default location of the morpheme dictionary: the relative `data/`
/// directory of a source checkout, then the per-user data directory.
pub fn default_dictionary_path() -> PathBuf {
    let local = PathBuf::from("data/vortaro.tsv");
    if local.exists() {
        return local;
    }
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("morfo").join("vortaro.tsv")
    } else {
        local
    }
}

/// Default location of the fallback lexicon, resolved like the dictionary.
pub fn default_lexicon_path() -> PathBuf {
    let local = PathBuf::from("data/pejvo.txt");
    if local.exists() {
        return local;
    }
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("morfo").join("pejvo.txt")
    } else {
        local
    }
}
