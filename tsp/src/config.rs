use crate::bookmark::STORAGE_KEY;
use crate::environment::{CONFIG_FILE, get_config_file, get_data_file};
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use tsp_types::{TspError, TspResult};

pub const DEFAULT_PROMPT: &str = "arch@zen-browser:~$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Echoed before every submitted line.
    pub prompt: String,
    /// When false, URLs are printed instead of opened.
    pub open_in_browser: bool,
    /// Bookmark storage. Relative names live in the data directory.
    pub storage_file: String,
    /// Default log filter when `TSP_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            open_in_browser: true,
            storage_file: STORAGE_KEY.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(toml_str: &str) -> TspResult<Config> {
        toml::from_str(toml_str).map_err(|err| TspError::Config(err.to_string()))
    }

    /// Read a config file. A missing file means defaults.
    pub fn read(path: &Path) -> TspResult<Config> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let toml_str = std::fs::read_to_string(path)?;
        Config::from_toml(&toml_str)
    }

    /// Read `config.toml` from the config directory.
    pub fn try_load() -> Result<Config> {
        let path = get_config_file(CONFIG_FILE)?;
        Config::read(&path).with_context(|| format!("failed to load {}", path.display()))
    }

    pub fn storage_path(&self) -> Result<PathBuf> {
        let path = Path::new(&self.storage_file);
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            get_data_file(&self.storage_file)
        }
    }
}
