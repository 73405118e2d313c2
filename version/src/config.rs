use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{ReplaceMode, Result, ResultExt, VersionError};

/// Name of the optional configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "py-version.toml";

/// How an updated file reaches the disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    /// Write a sibling temporary file, then rename it over the target
    #[default]
    Atomic,
    /// Truncate and rewrite the target directly
    InPlace,
}

/// Contents of `py-version.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Files used when none are given on the command line
    pub files: Vec<PathBuf>,
    pub replace: ReplaceMode,
    pub write: WriteMode,
}

/// Knobs for a single file update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub replace: ReplaceMode,
    pub write: WriteMode,
}

impl Config {
    /// Load configuration from an explicit path. The file must exist.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => VersionError::FileNotFound(path.to_path_buf()),
            _ => VersionError::ReadFailure {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Load `py-version.toml` from `dir` if present, defaults otherwise.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Config> {
        let candidate = dir.as_ref().join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load_from_file(candidate)
        } else {
            Ok(Config::default())
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            replace: self.replace,
            write: self.write,
        }
    }
}
