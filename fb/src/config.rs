//! Configuration for feedbackstore

use std::path::{Path, PathBuf};

use eyre::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the JSON feedback slot
    #[serde(default = "default_slot_path")]
    pub slot_path: PathBuf,
}

fn default_slot_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("culturepulse")
        .join("feedback.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slot_path: default_slot_path(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("culturepulse").join("store.yml")),
            Some(PathBuf::from("feedbackstore.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("store.yml");
        std::fs::write(&config_path, "slot_path: /tmp/pulse/feedback.json\n").unwrap();

        let config = Config::load(Some(&config_path)).unwrap();
        assert_eq!(config.slot_path, PathBuf::from("/tmp/pulse/feedback.json"));
    }

    #[test]
    fn test_save_round_trip() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("store.yml");

        let config = Config {
            slot_path: temp.path().join("feedback.json"),
        };
        config.save(&config_path).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.slot_path, config.slot_path);
    }
}
