//! Version string parser
//!
//! Accepts `vMAJOR.MINOR[.PATCH[.SUFFIX]]` with an optional single leading `v`.
//! Parts beyond the fourth are ignored.
//!
//! Two modes are supported:
//! - [`ParseMode::Tolerant`] (default): any text is accepted as a component
//! - [`ParseMode::Strict`]: major and minor are required and major, minor
//!   and patch must be integers; they are stored normalized (`"01"` -> `"1"`)

use std::str::FromStr;

use serde::Deserialize;
use tracing::trace;

use crate::version::error::VersionError;
use crate::version::record::Version;

/// How strictly components are validated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Accept any text as a component
    #[default]
    Tolerant,
    /// Reject non-integer major, minor and patch components
    Strict,
}

/// Parser settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    pub mode: ParseMode,
    /// Split `"3-alpha"` into patch `"3"` and suffix `"-alpha"` when the
    /// version has exactly three dot-separated parts
    pub split_hyphen_suffix: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser {
    options: ParseOptions,
}

impl VersionParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    pub fn parse(&self, text: &str) -> Result<Version, VersionError> {
        let body = text.strip_prefix('v').unwrap_or(text);
        if body.is_empty() {
            return Err(VersionError::InvalidVersion(format!(
                "expecting semver string, got {text:?}"
            )));
        }

        let parts: Vec<&str> = body.split('.').collect();
        let mut version = match parts.as_slice() {
            [major] => Version::new(*major, "", "", ""),
            [major, minor] => Version::new(*major, *minor, "", ""),
            [major, minor, patch] => Version::new(*major, *minor, *patch, ""),
            [major, minor, patch, suffix, ..] => Version::new(*major, *minor, *patch, *suffix),
            [] => {
                return Err(VersionError::InvalidVersion(format!(
                    "expecting semver string, got {text:?}"
                )));
            }
        };

        if self.options.split_hyphen_suffix && parts.len() == 3 {
            if let Some(index) = version.patch.find('-').filter(|&i| i > 0) {
                version.suffix = version.patch.split_off(index);
            }
        }

        if self.options.mode == ParseMode::Strict {
            if parts.len() < 2 {
                return Err(VersionError::InvalidVersion(format!(
                    "expecting at least major and minor, got {text:?}"
                )));
            }
            version.major = normalize_integer("major", &version.major)?;
            version.minor = normalize_integer("minor", &version.minor)?;
            if !version.patch.is_empty() {
                version.patch = normalize_integer("patch", &version.patch)?;
            }
        }

        trace!("Parsed {:?} as {:?}", text, version);
        Ok(version)
    }

    /// Parse raw bytes; input must be valid UTF-8.
    pub fn parse_bytes(&self, src: &[u8]) -> Result<Version, VersionError> {
        let text = std::str::from_utf8(src)
            .map_err(|e| VersionError::InvalidVersion(format!("not valid UTF-8: {e}")))?;
        self.parse(text)
    }
}

fn normalize_integer(name: &str, text: &str) -> Result<String, VersionError> {
    text.parse::<i64>()
        .map(|value| value.to_string())
        .map_err(|_| VersionError::InvalidComponent(format!("{name} value must be an integer")))
}

/// Parse with tolerant defaults
pub fn parse(text: &str) -> Result<Version, VersionError> {
    VersionParser::default().parse(text)
}

/// Parse bytes with tolerant defaults
pub fn parse_bytes(src: &[u8]) -> Result<Version, VersionError> {
    VersionParser::default().parse_bytes(src)
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
