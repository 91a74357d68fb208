// ⚙️ Configuration - optional bmi_tracker.toml in the working directory

use crate::error::{BmiError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "bmi_tracker.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JSON file holding every saved record
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Log destination (the terminal belongs to the UI)
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// `tracing_subscriber::EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("bmi_data.json")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("bmi_tracker.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: default_data_file(),
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load `path` if it exists, otherwise defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| BmiError::Config(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path().join(CONFIG_FILE)).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.data_file, PathBuf::from("bmi_data.json"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "data_file = \"/tmp/records.json\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/records.json"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "data_flie = \"typo.json\"\n").unwrap();

        assert!(matches!(Config::load(&path), Err(BmiError::Config(_))));
    }
}
