//! Leading-digit split of a single version component
//!
//! A component such as `"2b"` is decomposed into the value of its leading
//! decimal digit run (`2`) and the unmodified remainder (`"b"`).

use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::VersionError;

// ASCII digits only; `\d` would also match other Unicode decimal digits.
static COMPONENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]*)(.*?)$").expect("component pattern is a valid regex")
});

/// Split a component into `(int_part, str_part)`.
///
/// Examples:
/// - `""` -> `(0, "")`
/// - `"12"` -> `(12, "")`
/// - `"2b"` -> `(2, "b")`
/// - `"alpha"` -> `(0, "alpha")`
///
/// Fails with [`VersionError::InvalidComponent`] when the component does not
/// match (it contains a line break) or the digit run overflows `u64`.
pub fn split_component(component: &str) -> Result<(u64, &str), VersionError> {
    let captures = COMPONENT_PATTERN
        .captures(component)
        .ok_or_else(|| VersionError::InvalidComponent(format!("invalid version part: {component}")))?;

    let digits = captures.get(1).map_or("", |m| m.as_str());
    let rest = captures.get(2).map_or("", |m| m.as_str());

    let int_part = if digits.is_empty() {
        0
    } else {
        digits.parse::<u64>().map_err(|_| {
            VersionError::InvalidComponent(format!("invalid integer part: {component}"))
        })?
    };

    Ok((int_part, rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0, "")]
    #[case("12", 12, "")]
    #[case("007", 7, "")]
    #[case("2b", 2, "b")]
    #[case("alpha", 0, "alpha")]
    #[case("3-alpha", 3, "-alpha")]
    #[case("-1", 0, "-1")]
    #[case("10rc2", 10, "rc2")]
    fn split_component_returns_expected(
        #[case] component: &str,
        #[case] int_part: u64,
        #[case] str_part: &str,
    ) {
        assert_eq!(split_component(component), Ok((int_part, str_part)));
    }

    #[test]
    fn split_component_does_not_treat_unicode_digits_as_numeric() {
        assert_eq!(split_component("٣"), Ok((0, "٣")));
    }

    #[test]
    fn split_component_rejects_digit_run_overflow() {
        let result = split_component("99999999999999999999999");
        assert!(matches!(result, Err(VersionError::InvalidComponent(_))));
    }

    #[test]
    fn split_component_rejects_line_break() {
        let result = split_component("1\nrc");
        assert!(matches!(result, Err(VersionError::InvalidComponent(_))));
    }
}
