use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Result, Version, VersionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl FromStr for Component {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(Component::Major),
            "minor" => Ok(Component::Minor),
            "patch" => Ok(Component::Patch),
            _ => Err(VersionError::InvalidComponent(s.to_string())),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        };
        write!(f, "{name}")
    }
}

/// A transformation of a single version component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Add `amount`, zeroing every lower-order component
    Increment { component: Component, amount: u64 },
    /// Subtract `amount`, stopping at zero
    Decrement { component: Component, amount: u64 },
    /// Replace the component, leaving the others untouched
    Set { component: Component, value: u64 },
}

impl Operation {
    pub fn component(&self) -> Component {
        match *self {
            Operation::Increment { component, .. }
            | Operation::Decrement { component, .. }
            | Operation::Set { component, .. } => component,
        }
    }

    /// Apply the operation to `version`, returning the new version.
    ///
    /// # Errors
    /// Returns `Overflow` when an increment does not fit in a `u64`.
    pub fn apply(&self, version: Version) -> Result<Version> {
        let mut next = version;

        match *self {
            Operation::Increment { component, amount } => {
                let bumped = version
                    .get(component)
                    .checked_add(amount)
                    .ok_or(VersionError::Overflow { component, amount })?;

                match component {
                    Component::Major => {
                        next.major = bumped;
                        next.minor = 0;
                        next.patch = 0;
                    }
                    Component::Minor => {
                        next.minor = bumped;
                        next.patch = 0;
                    }
                    Component::Patch => next.patch = bumped,
                }
            }
            Operation::Decrement { component, amount } => {
                let lowered = version.get(component).saturating_sub(amount);
                *slot(&mut next, component) = lowered;
            }
            Operation::Set { component, value } => {
                *slot(&mut next, component) = value;
            }
        }

        Ok(next)
    }
}

fn slot(version: &mut Version, component: Component) -> &mut u64 {
    match component {
        Component::Major => &mut version.major,
        Component::Minor => &mut version.minor,
        Component::Patch => &mut version.patch,
    }
}

/// Parse the textual value given to `set`. Negative or non-numeric input
/// fails with `InvalidValue`.
pub fn parse_component_value(raw: &str) -> Result<u64> {
    if let Ok(negative) = raw.parse::<i128>() {
        if negative < 0 {
            return Err(VersionError::InvalidValue(format!(
                "{raw} (version components cannot be negative)"
            )));
        }
    }

    raw.parse::<u64>()
        .map_err(|_| VersionError::InvalidValue(raw.to_string()))
}
