//! Application configuration file.
//!
//! # Responsibility
//! - Load the TOML config naming the export destination directory and the
//!   optional catalog/logging locations.
//!
//! # Invariants
//! - `export_dir` is the only required key.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, io::Error),
    Parse(PathBuf, toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, err) => write!(f, "cannot read config `{}`: {err}", path.display()),
            Self::Parse(path, err) => {
                write!(f, "cannot parse config `{}`: {err}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(_, err) => Some(err),
            Self::Parse(_, err) => Some(err),
        }
    }
}

/// Typed view of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Destination directory for exported spreadsheets.
    pub export_dir: PathBuf,
    /// Master article list location; membership checks are skipped when
    /// absent.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Loads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        toml::from_str(&contents).map_err(|err| ConfigError::Parse(path.to_path_buf(), err))
    }
}
