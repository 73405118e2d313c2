use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

mod config;
mod error;
mod file;
mod marker;
mod operation;

pub use config::{Config, Settings, WriteMode, CONFIG_FILE_NAME};
pub use error::{Result, ResultExt, VersionError};
pub use file::{update_file, Update, VersionFile};
pub use marker::{locate, show, substitute, Marker, ReplaceMode};
pub use operation::{parse_component_value, Component, Operation};

static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("version pattern is valid")
});

/// A three component `major.minor.patch` version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }

    /// Parse a `M.N.P` string. Leading zeros are accepted and read as their
    /// numeric value, so `01.2.3` is `1.2.3`.
    pub fn parse(version: &str) -> Result<Version> {
        let caps = VERSION_PATTERN
            .captures(version)
            .ok_or_else(|| VersionError::MalformedVersion(version.to_string()))?;

        let number = |idx: usize| {
            caps[idx]
                .parse::<u64>()
                .map_err(|_| VersionError::MalformedVersion(version.to_string()))
        };

        Ok(Version {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
        })
    }

    pub fn get(&self, component: Component) -> u64 {
        match component {
            Component::Major => self.major,
            Component::Minor => self.minor,
            Component::Patch => self.patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(serde::de::Error::custom)
    }
}
