//! Optional `ferrule.toml` configuration.
//!
//! The config file only supplies defaults for `ferrule exercise`; flags
//! always win over it, and a missing file is not an error.

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "ferrule.toml";

pub const CONFIG_TEMPLATE: &str = "\
# Ferrule CLI defaults, read from the working directory.
#
# Library to load for `ferrule exercise` when none is given on the command
# line. Either a path or a bare stem resolved per platform.
# library = \"target/release/ferrule_analysis\"
#
# Symbol set the library exports: \"demo\" or \"analysis\".
# symbols = \"analysis\"
";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Defaults for the `exercise` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Library path or stem to load.
    pub library: Option<String>,
    /// Symbol set name ("demo" or "analysis").
    pub symbols: Option<String>,
}

impl CliConfig {
    /// Load `ferrule.toml` from `dir`, or defaults when the file is absent.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
    }
}
