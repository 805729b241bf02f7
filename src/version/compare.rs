//! Total ordering of version records

use std::cmp::Ordering;

use crate::version::error::VersionError;
use crate::version::part::compare_part;
use crate::version::record::Version;

// Each component comparison is in {-1, 0, 1}, so every weight dominates
// the sum of all weights below it.
const WEIGHTS: [i32; 4] = [1000, 100, 10, 1];

/// Compare two versions component by component, most significant first.
pub fn compare(left: &Version, right: &Version) -> Result<Ordering, VersionError> {
    let pairs = [
        (&left.major, &right.major),
        (&left.minor, &right.minor),
        (&left.patch, &right.patch),
        (&left.suffix, &right.suffix),
    ];

    let mut weighted = 0;
    for ((l, r), weight) in pairs.into_iter().zip(WEIGHTS) {
        weighted += compare_part(l, r)? as i32 * weight;
    }

    Ok(weighted.cmp(&0))
}

impl Version {
    /// See [`compare`]
    pub fn compare(&self, other: &Version) -> Result<Ordering, VersionError> {
        compare(self, other)
    }
}
