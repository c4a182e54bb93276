use crate::error::{KtfixError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = ".ktfix.json";

/// Configuration for ktfix, read from `.ktfix.json` in the working directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KtfixConfig {
    /// Restrict the call-chain repair to one receiver identifier
    /// (e.g. "_uiState"). Unset matches any identifier.
    #[serde(default)]
    pub state_identifier: Option<String>,

    /// Write `<file>.bak` with the original content before overwriting
    #[serde(default)]
    pub backup: bool,
}

impl KtfixConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(KtfixError::Io)?;
        let config: KtfixConfig =
            serde_json::from_str(&content).map_err(KtfixError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(KtfixError::Serialization)?;
        fs::write(config_path, content).map_err(KtfixError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_everything() {
        let config = KtfixConfig::default();
        assert_eq!(config.state_identifier, None);
        assert!(!config.backup);
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = KtfixConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, KtfixConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = KtfixConfig {
            state_identifier: Some("_uiState".to_string()),
            backup: true,
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = KtfixConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"state_identifier": "_state"}"#,
        )
        .unwrap();

        let loaded = KtfixConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.state_identifier.as_deref(), Some("_state"));
        assert!(!loaded.backup);
    }
}
