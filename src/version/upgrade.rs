//! Upgrade boundary classification
//!
//! Reports which component boundaries are crossed when moving from one
//! version to another. Only upgrades are reported: a downgrade or an equal
//! version returns all flags unset.

use std::cmp::Ordering;

use serde::Serialize;

use crate::version::error::VersionError;
use crate::version::part::compare_part;
use crate::version::record::{Component, Version};

/// Boundaries crossed by an upgrade
///
/// Flags cascade: a major upgrade also sets minor, patch and suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UpgradeKind {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
    pub suffix: bool,
}

impl UpgradeKind {
    fn from_boundary(boundary: Component) -> Self {
        Self {
            major: boundary == Component::Major,
            minor: matches!(boundary, Component::Major | Component::Minor),
            patch: boundary != Component::Suffix,
            suffix: true,
        }
    }

    /// The most significant boundary crossed, if any
    pub fn boundary(&self) -> Option<Component> {
        if self.major {
            Some(Component::Major)
        } else if self.minor {
            Some(Component::Minor)
        } else if self.patch {
            Some(Component::Patch)
        } else if self.suffix {
            Some(Component::Suffix)
        } else {
            None
        }
    }

    pub fn is_upgrade(&self) -> bool {
        self.boundary().is_some()
    }
}

/// Classify the move from `from` to `to`.
///
/// Every component pair is compared before classifying, so an invalid
/// component anywhere is reported even if a more significant one differs.
pub fn upgrade_kind(from: &Version, to: &Version) -> Result<UpgradeKind, VersionError> {
    let mut upgraded = Vec::with_capacity(Component::ALL.len());
    for component in Component::ALL {
        let cmp = compare_part(to.component(component), from.component(component))?;
        upgraded.push((component, cmp == Ordering::Greater));
    }

    Ok(upgraded
        .into_iter()
        .find(|(_, up)| *up)
        .map(|(component, _)| UpgradeKind::from_boundary(component))
        .unwrap_or_default())
}

impl Version {
    /// See [`upgrade_kind`]
    pub fn upgrade_kind(&self, to: &Version) -> Result<UpgradeKind, VersionError> {
        upgrade_kind(self, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::parser::parse;
    use rstest::rstest;

    fn kind(major: bool, minor: bool, patch: bool, suffix: bool) -> UpgradeKind {
        UpgradeKind {
            major,
            minor,
            patch,
            suffix,
        }
    }

    #[rstest]
    #[case("v1.1.1", "v1.2.0", kind(false, true, true, true))]
    #[case("v1.1.1", "v2.0.0", kind(true, true, true, true))]
    #[case("v1.1.1", "v1.1.2", kind(false, false, true, true))]
    #[case("v1.1.1.alpha", "v1.1.1.beta", kind(false, false, false, true))]
    #[case("v1.1.1", "v1.1.1", kind(false, false, false, false))]
    #[case("v2.0.0", "v1.9.9", kind(false, false, false, false))] // downgrade
    #[case("v1.2.0", "v1.3", kind(false, true, true, true))]
    // the first greater component wins even when a more significant one decreased
    #[case("v2.1.0", "v1.2.0", kind(false, true, true, true))]
    fn upgrade_kind_returns_expected(
        #[case] from: &str,
        #[case] to: &str,
        #[case] expected: UpgradeKind,
    ) {
        let from = parse(from).unwrap();
        let to = parse(to).unwrap();

        assert_eq!(upgrade_kind(&from, &to), Ok(expected));
    }

    #[rstest]
    #[case(kind(true, true, true, true), Some(Component::Major))]
    #[case(kind(false, true, true, true), Some(Component::Minor))]
    #[case(kind(false, false, true, true), Some(Component::Patch))]
    #[case(kind(false, false, false, true), Some(Component::Suffix))]
    #[case(kind(false, false, false, false), None)]
    fn boundary_returns_most_significant_flag(
        #[case] upgrade: UpgradeKind,
        #[case] expected: Option<Component>,
    ) {
        assert_eq!(upgrade.boundary(), expected);
        assert_eq!(upgrade.is_upgrade(), expected.is_some());
    }

    #[test]
    fn upgrade_kind_propagates_invalid_component() {
        let from = Version::new("1", "0", "", "");
        let to = Version::new("2", "0", "", "99999999999999999999999");

        assert!(matches!(
            upgrade_kind(&from, &to),
            Err(VersionError::InvalidComponent(_))
        ));
    }
}
