//! Version record and its textual/JSON rendering

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::split::split_component;

/// One of the four textual fields of a [`Version`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
    Suffix,
}

impl Component {
    /// All components, most significant first
    pub const ALL: [Component; 4] = [
        Component::Major,
        Component::Minor,
        Component::Patch,
        Component::Suffix,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
            Component::Suffix => "suffix",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed version with components kept as raw text
///
/// Numeric meaning is derived only when comparing, so `"12"`, `"alpha"`
/// and `"2b"` are all valid component values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    /// Major component (required)
    pub major: String,
    /// Minor component (required)
    pub minor: String,
    /// Patch component, empty when absent
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub patch: String,
    /// Free-form suffix, empty when absent. Any separator is part of the value.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub suffix: String,
}

impl Version {
    pub fn new(
        major: impl Into<String>,
        minor: impl Into<String>,
        patch: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            major: major.into(),
            minor: minor.into(),
            patch: patch.into(),
            suffix: suffix.into(),
        }
    }

    /// Returns the text of the given component
    pub fn component(&self, component: Component) -> &str {
        match component {
            Component::Major => &self.major,
            Component::Minor => &self.minor,
            Component::Patch => &self.patch,
            Component::Suffix => &self.suffix,
        }
    }

    /// Serialize to JSON, omitting `patch` and `suffix` when empty.
    pub fn to_json(&self) -> Vec<u8> {
        // A record of plain strings always serializes.
        serde_json::to_vec(self).unwrap_or_default()
    }

    /// Returns true when major, minor and patch are purely numeric.
    ///
    /// Major and minor must be present; an absent patch is accepted.
    pub fn is_strict(&self) -> bool {
        let numeric = |text: &str| matches!(split_component(text), Ok((_, "")));

        !self.major.is_empty()
            && !self.minor.is_empty()
            && numeric(&self.major)
            && numeric(&self.minor)
            && numeric(&self.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)?;
        if self.patch.is_empty() {
            return Ok(());
        }
        write!(f, ".{}{}", self.patch, self.suffix)
    }
}
