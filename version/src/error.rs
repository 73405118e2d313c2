use std::io;
use std::path::PathBuf;
use std::result;
use thiserror::Error;

use crate::Component;

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("invalid component: {0} (must be 'major', 'minor', or 'patch')")]
    InvalidComponent(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read file {}: {source}", path.display())]
    ReadFailure { path: PathBuf, source: io::Error },

    #[error("failed to write to file {}: {source}", path.display())]
    WriteFailure { path: PathBuf, source: io::Error },

    #[error("version not found")]
    VersionNotFound,

    #[error("invalid version format: {0}")]
    MalformedVersion(String),

    #[error("{component} component overflows when adding {amount}")]
    Overflow { component: Component, amount: u64 },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{0}: {1}")]
    WithContext(String, Box<VersionError>),
}

impl VersionError {
    /// Add context to an error
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        VersionError::WithContext(context.into(), Box::new(self))
    }

    /// The innermost error, looking through any context layers
    pub fn root(&self) -> &VersionError {
        match self {
            VersionError::WithContext(_, inner) => inner.root(),
            other => other,
        }
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            VersionError::VersionNotFound => "version not found".to_string(),
            VersionError::Overflow { component, amount } => {
                format!("cannot add {amount} to the {component} component without overflowing")
            }
            VersionError::WithContext(ctx, err) => match err.as_ref() {
                VersionError::VersionNotFound => format!("version not found in {ctx}"),
                inner => format!("{ctx}: {}", inner.user_message()),
            },
            _ => format!("{self}"),
        }
    }
}

pub type Result<T> = result::Result<T, VersionError>;

// Helper trait for adding context to results
pub trait ResultExt<T> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for result::Result<T, E>
where
    E: Into<VersionError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let version_err: VersionError = err.into();
            version_err.with_context(context())
        })
    }
}

impl From<toml::de::Error> for VersionError {
    fn from(err: toml::de::Error) -> Self {
        VersionError::Config(err.to_string())
    }
}
