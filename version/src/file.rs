use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{
    locate, show, substitute, Operation, ReplaceMode, Result, Settings, Version, VersionError,
    WriteMode,
};

/// Result of a successful update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Update {
    pub old: Version,
    pub new: Version,
}

/// A text file holding a version marker, read fully into memory.
#[derive(Debug, Clone)]
pub struct VersionFile {
    path: PathBuf,
    content: String,
}

impl VersionFile {
    /// Read `path` from disk.
    ///
    /// # Errors
    /// `FileNotFound` when the path does not exist, `ReadFailure` for any other
    /// I/O problem (including content that is not UTF-8).
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => VersionError::FileNotFound(path.clone()),
            _ => VersionError::ReadFailure {
                path: path.clone(),
                source,
            },
        })?;

        debug!(path = %path.display(), bytes = content.len(), "read version file");
        Ok(Self { path, content })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The version currently declared in the file.
    pub fn version(&self) -> Result<Version> {
        show(&self.content).map_err(|e| self.in_context(e))
    }

    /// Transform the version in memory. Nothing is written until [`VersionFile::write`].
    pub fn apply(&mut self, operation: &Operation, mode: ReplaceMode) -> Result<Update> {
        let marker = locate(&self.content).map_err(|e| self.in_context(e))?;
        let new = operation.apply(marker.version).map_err(|e| self.in_context(e))?;

        self.content = substitute(&self.content, &marker, new, mode);
        Ok(Update {
            old: marker.version,
            new,
        })
    }

    /// Persist the full content back to the file's path.
    pub fn write(&self, mode: WriteMode) -> Result<()> {
        let written = match mode {
            WriteMode::Atomic => self.write_atomic(),
            WriteMode::InPlace => fs::write(&self.path, self.content.as_bytes()),
        };

        written.map_err(|source| VersionError::WriteFailure {
            path: self.path.clone(),
            source,
        })?;

        info!(path = %self.path.display(), ?mode, "wrote version file");
        Ok(())
    }

    fn write_atomic(&self) -> io::Result<()> {
        // Rename over the file a symlink points to, not over the link itself.
        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(self.content.as_bytes())?;
        tmp.as_file().sync_all()?;

        if let Ok(metadata) = fs::metadata(&target) {
            tmp.as_file().set_permissions(metadata.permissions())?;
        }

        tmp.persist(&target).map_err(|e| e.error)?;
        Ok(())
    }

    fn in_context(&self, err: VersionError) -> VersionError {
        err.with_context(self.path.display().to_string())
    }
}

/// Read `path`, apply `operation` and write the result back.
///
/// The file is left untouched when the version cannot be found or transformed.
pub fn update_file<P: AsRef<Path>>(
    path: P,
    operation: &Operation,
    settings: &Settings,
) -> Result<Update> {
    let mut file = VersionFile::read(path)?;
    let update = file.apply(operation, settings.replace)?;
    file.write(settings.write)?;
    Ok(update)
}
