//! Three-way comparison of dotted and dashed version strings.
//!
//! Versions are split on `.` and `-`. The first segment that differs between
//! the two strings decides the order: two all-digit segments compare by value,
//! anything else compares as case-insensitive text. When one version runs out
//! of segments first, the longer one is higher. That makes `1.0.0-SNAPSHOT`
//! higher than `1.0.0`, unlike semantic versioning.

mod operator;
mod segment;

use std::cmp::Ordering;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};
use tracing::{instrument, trace};

pub use operator::ComparisonOperator;
pub use segment::{Segment, segments};

/// Why a version argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    Missing,
    Blank,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::Missing => f.write_str("missing"),
            InvalidReason::Blank => f.write_str("blank"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum VersionError {
    #[error("invalid argument `{argument}`: version must not be {reason}")]
    #[diagnostic(
        code(vercmp::invalid_argument),
        help("pass a non-blank version such as `1.2.3`")
    )]
    InvalidArgument {
        argument: &'static str,
        reason: InvalidReason,
    },
    #[error("unknown comparison operator `{operator}`")]
    #[diagnostic(
        code(vercmp::unknown_operator),
        help("use one of eq, gt, ge, lt, le (or ==, >, >=, <, <=)")
    )]
    UnknownOperator { operator: String },
}

/// Unicode whitespace, except that the non-breaking spaces (`U+00A0`,
/// `U+2007`, `U+202F`) and `U+0085` are content, and the information
/// separators `U+001C..=U+001F` count as whitespace.
fn is_blank_char(c: char) -> bool {
    match c {
        '\u{1c}'..='\u{1f}' => true,
        '\u{85}' | '\u{a0}' | '\u{2007}' | '\u{202f}' => false,
        c => c.is_whitespace(),
    }
}

fn is_blank(version: &str) -> bool {
    version.chars().all(is_blank_char)
}

fn require<'a>(argument: &'static str, version: Option<&'a str>) -> Result<&'a str, VersionError> {
    match version {
        None => Err(VersionError::InvalidArgument {
            argument,
            reason: InvalidReason::Missing,
        }),
        Some(v) if is_blank(v) => Err(VersionError::InvalidArgument {
            argument,
            reason: InvalidReason::Blank,
        }),
        Some(v) => Ok(v),
    }
}

/// Compares two version strings.
///
/// Both must be non-blank; `left` is checked first. The result is `Less`,
/// `Equal` or `Greater`, which casts to `-1`, `0` or `1`.
pub fn compare(left: &str, right: &str) -> Result<Ordering, VersionError> {
    compare_optional(Some(left), Some(right))
}

/// Like [`compare`], with `None` standing in for an absent version.
#[instrument(level = "trace", ret, err)]
pub fn compare_optional(
    left: Option<&str>,
    right: Option<&str>,
) -> Result<Ordering, VersionError> {
    let left = require("left", left)?;
    let right = require("right", right)?;

    Ok(compare_valid(left, right))
}

fn compare_valid(left: &str, right: &str) -> Ordering {
    if left == right {
        trace!("identical version strings");
        return Ordering::Equal;
    }

    let left_segments = segments(left);
    let right_segments = segments(right);

    let shared = left_segments
        .iter()
        .zip(&right_segments)
        .take_while(|(l, r)| l == r)
        .count();

    match (left_segments.get(shared), right_segments.get(shared)) {
        (Some(l), Some(r)) => {
            let ordering = l.compare(r);
            trace!(
                position = shared,
                left = l.as_str(),
                right = r.as_str(),
                numeric = l.is_numeric() && r.is_numeric(),
                ?ordering,
                "decided by first differing segment"
            );
            ordering
        }
        _ => {
            trace!(
                left_len = left_segments.len(),
                right_len = right_segments.len(),
                "decided by segment count"
            );
            left_segments.len().cmp(&right_segments.len())
        }
    }
}

/// `left == right` under [`compare`], so `2.0` is not equal to `2.0.0`.
pub fn is_equal(left: &str, right: &str) -> Result<bool, VersionError> {
    compare(left, right).map(Ordering::is_eq)
}

/// `left > right`.
pub fn is_greater(left: &str, right: &str) -> Result<bool, VersionError> {
    compare(left, right).map(Ordering::is_gt)
}

/// `left >= right`.
pub fn is_greater_or_equal(left: &str, right: &str) -> Result<bool, VersionError> {
    compare(left, right).map(Ordering::is_ge)
}

/// `left < right`.
pub fn is_less(left: &str, right: &str) -> Result<bool, VersionError> {
    compare(left, right).map(Ordering::is_lt)
}

/// `left <= right`. Errors exactly when [`compare`] would.
pub fn is_less_or_equal(left: &str, right: &str) -> Result<bool, VersionError> {
    compare(left, right).map(Ordering::is_le)
}

/// Returns whichever of the two versions compares higher, `left` on a tie.
pub fn higher_of<'a>(left: &'a str, right: &'a str) -> Result<&'a str, VersionError> {
    Ok(if compare(left, right)?.is_ge() {
        left
    } else {
        right
    })
}

/// A non-blank version string, kept exactly as written.
///
/// `Eq` and `Hash` are byte-wise. The version ordering lives in
/// [`Version::compare`] rather than `Ord`: mixing numeric and textual segments
/// at one position is not transitive, so it cannot be a total order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, DeserializeFromStr, SerializeDisplay)]
pub struct Version(String);

impl Version {
    pub fn new(version: impl Into<String>) -> Result<Self, VersionError> {
        let version = version.into();
        require("version", Some(version.as_str()))?;
        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn segments(&self) -> Vec<Segment<'_>> {
        segments(&self.0)
    }

    pub fn compare(&self, other: &Version) -> Ordering {
        compare_valid(&self.0, &other.0)
    }

    pub fn is_equal_to(&self, other: &Version) -> bool {
        self.compare(other).is_eq()
    }

    pub fn is_greater_than(&self, other: &Version) -> bool {
        self.compare(other).is_gt()
    }

    pub fn is_greater_or_equal_to(&self, other: &Version) -> bool {
        self.compare(other).is_ge()
    }

    pub fn is_less_than(&self, other: &Version) -> bool {
        self.compare(other).is_lt()
    }

    pub fn is_less_or_equal_to(&self, other: &Version) -> bool {
        self.compare(other).is_le()
    }

    pub fn higher_of<'a>(&'a self, other: &'a Version) -> &'a Version {
        if self.is_greater_or_equal_to(other) {
            self
        } else {
            other
        }
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        Version::new(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, VersionError> {
        Version::new(value)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, VersionError> {
        Version::new(value)
    }
}
