use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::debug;

use crate::{Result, Version, VersionError};

/// `version = "X.Y.Z"` with either quote style and ASCII spacing around `=`.
static MARKER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(version[\t\n\x0C\r ]*=[\t\n\x0C\r ]*["'])([0-9]+\.[0-9]+\.[0-9]+)(["'])"#)
        .expect("marker pattern is valid")
});

/// How many markers a substitution rewrites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplaceMode {
    /// Only the marker returned by [`locate`]
    #[default]
    First,
    /// Every marker in the content, all set to the same new version
    All,
}

/// The first version marker found in a file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub version: Version,
    /// Byte range of the `X.Y.Z` run inside the content
    pub span: Range<usize>,
}

/// Find the first version marker in `content`.
///
/// # Errors
/// Returns `VersionNotFound` when the content has no marker.
pub fn locate(content: &str) -> Result<Marker> {
    let digits = MARKER_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(2))
        .ok_or(VersionError::VersionNotFound)?;

    let version = Version::parse(digits.as_str())?;
    debug!(%version, start = digits.start(), end = digits.end(), "located version marker");

    Ok(Marker {
        version,
        span: digits.range(),
    })
}

/// Current version declared in `content`, without touching it.
pub fn show(content: &str) -> Result<Version> {
    locate(content).map(|marker| marker.version)
}

/// Write `new` into the marker's digit run, keeping the surrounding
/// `version = "..."` text byte for byte.
pub fn substitute(content: &str, marker: &Marker, new: Version, mode: ReplaceMode) -> String {
    match mode {
        ReplaceMode::First => {
            let mut updated = String::with_capacity(content.len() + 8);
            updated.push_str(&content[..marker.span.start]);
            updated.push_str(&new.to_string());
            updated.push_str(&content[marker.span.end..]);
            updated
        }
        ReplaceMode::All => MARKER_PATTERN
            .replace_all(content, |caps: &Captures| {
                format!("{}{}{}", &caps[1], new, &caps[3])
            })
            .into_owned(),
    }
}
