//! CLI-level configuration (`SPEC_FULL.md` §8).
//!
//! The front-end itself is configuration-free — lexing and parsing never
//! consult this struct. `Config` only holds the CLI's own defaults (color
//! mode, whether a bare positional argument is a file path), overridable
//! per-invocation by flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DustcError, Result};

pub const CONFIG_FILE_NAME: &str = "dust.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Default ANSI color mode, overridden by `--no-color`.
    #[serde(default = "default_color")]
    pub color: bool,

    /// Default "the positional argument is a file path" mode, overridden
    /// by `--fp`.
    #[serde(default)]
    pub fp: bool,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: default_color(),
            fp: false,
        }
    }
}

impl Config {
    /// Search current directory, then the user's home/system config dirs,
    /// for `dust.toml`; fall back to defaults if none is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DustcError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| DustcError::Config(format!("failed to parse configuration: {e}")))
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        dirs::home_dir()
            .map(|dir| dir.join(".config").join("dustc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("dustc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_color_and_not_fp() {
        let config = Config::default();
        assert!(config.color);
        assert!(!config.fp);
    }

    #[test]
    fn load_from_path_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dust.toml");
        std::fs::write(&path, "color = false\nfp = true\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert!(!config.color);
        assert!(config.fp);
    }

    #[test]
    fn load_from_nonexistent_path_errors() {
        let result = Config::load_from_path(Path::new("/nonexistent/dust.toml"));
        assert!(result.is_err());
    }
}
