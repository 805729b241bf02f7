//! Ordering of two individual version components

use std::cmp::Ordering;

use crate::version::error::VersionError;
use crate::version::split::split_component;

/// Compare two components by leading integer value, then by the remaining
/// text byte-wise.
///
/// An empty component splits to `(0, "")` and therefore sorts before any
/// present component.
pub fn compare_part(left: &str, right: &str) -> Result<Ordering, VersionError> {
    let (left_int, left_str) = split_component(left)?;
    let (right_int, right_str) = split_component(right)?;

    Ok(left_int
        .cmp(&right_int)
        .then_with(|| left_str.as_bytes().cmp(right_str.as_bytes())))
}
