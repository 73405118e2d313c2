use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;
use version::{Config, Settings};

use crate::error::{CliError, Result, ResultExt};

const DEFAULT_FILE: &str = "pyproject.toml";

/// Files to process, in order, with the settings that apply to them.
#[derive(Debug)]
pub struct Targets {
    pub files: Vec<PathBuf>,
    pub settings: Settings,
}

/// Work out which files a command acts on.
///
/// Explicit `--files` entries win, then the `files` list of the configuration
/// file, then `pyproject.toml` in the working directory.
pub fn resolve(explicit: &[String], config_path: Option<&Path>) -> Result<Targets> {
    let cwd = env::current_dir().with_context(|| "failed to get current directory")?;

    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::discover(&cwd)?,
    };

    let patterns: Vec<String> = if !explicit.is_empty() {
        explicit.to_vec()
    } else {
        config
            .files
            .iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect()
    };

    let files = if patterns.is_empty() {
        vec![default_file(&cwd)?]
    } else {
        let mut files = Vec::new();
        for pattern in &patterns {
            files.extend(expand(pattern)?);
        }
        files
    };

    debug!(?files, settings = ?config.settings(), "resolved target files");
    Ok(Targets {
        files,
        settings: config.settings(),
    })
}

fn default_file(cwd: &Path) -> Result<PathBuf> {
    let candidate = cwd.join(DEFAULT_FILE);
    if candidate.is_file() {
        Ok(candidate)
    } else {
        Err(CliError::NoProjectFile(cwd.to_path_buf()))
    }
}

/// Expand a glob pattern. Plain paths are returned as-is so that a missing
/// file is reported when it is read.
fn expand(pattern: &str) -> Result<Vec<PathBuf>> {
    if !pattern.contains(['*', '?', '[']) {
        return Ok(vec![PathBuf::from(pattern)]);
    }

    let mut matches = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry.map_err(|e| CliError::Io(e.into()))?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::NoMatches(pattern.to_string()));
    }
    Ok(matches)
}
