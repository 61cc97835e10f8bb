use crate::error::{Result, WadmError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_GAM_PATH: &str = "gam";
const DEFAULT_ROLE: &str = "member";

/// Configuration for wadm, stored in the platform config dir as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WadmConfig {
    /// Path or name of the directory tool binary (e.g. "gam", "/opt/gam/gam")
    #[serde(default = "default_gam_path")]
    pub gam_path: String,

    /// Group role used when a membership change doesn't name one
    #[serde(default = "default_role")]
    pub default_role: String,
}

fn default_gam_path() -> String {
    DEFAULT_GAM_PATH.to_string()
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

impl Default for WadmConfig {
    fn default() -> Self {
        Self {
            gam_path: default_gam_path(),
            default_role: default_role(),
        }
    }
}

impl WadmConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WadmError::Io)?;
        let config: WadmConfig =
            serde_json::from_str(&content).map_err(WadmError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(WadmError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(WadmError::Serialization)?;
        fs::write(config_path, content).map_err(WadmError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WadmConfig::default();
        assert_eq!(config.gam_path, "gam");
        assert_eq!(config.default_role, "member");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = WadmConfig::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, WadmConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = WadmConfig::default();
        config.gam_path = "/opt/gamadv/gam".to_string();
        config.default_role = "manager".to_string();
        config.save(temp_dir.path()).unwrap();

        let loaded = WadmConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"gam_path": "gam7"}"#,
        )
        .unwrap();

        let loaded = WadmConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.gam_path, "gam7");
        assert_eq!(loaded.default_role, "member");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = WadmConfig {
            gam_path: "gam".to_string(),
            default_role: "owner".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: WadmConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
