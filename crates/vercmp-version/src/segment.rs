use std::cmp::Ordering;

/// One `.`- or `-`-delimited piece of a version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment<'a> {
    /// Only ASCII digits, compared by integer value.
    Numeric(&'a str),
    /// Anything else, including the empty segment between two delimiters.
    Text(&'a str),
}

impl<'a> Segment<'a> {
    pub fn classify(segment: &'a str) -> Self {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            Self::Numeric(segment)
        } else {
            Self::Text(segment)
        }
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Numeric(s) | Self::Text(s) => *s,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    /// Numeric against numeric compares values; every other pairing compares
    /// the lowercased text.
    pub fn compare(&self, other: &Segment<'_>) -> Ordering {
        match (self, other) {
            (Self::Numeric(a), Segment::Numeric(b)) => compare_numeric(a, b),
            _ => compare_text(self.as_str(), other.as_str()),
        }
    }
}

impl std::fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits `version` on `.` and `-` and classifies every piece.
///
/// Empty pieces at the end are dropped, so `"1.0."` has two segments. Empty
/// pieces anywhere else are kept as empty [`Segment::Text`] segments.
pub fn segments(version: &str) -> Vec<Segment<'_>> {
    let mut parts: Vec<&str> = version.split(['.', '-']).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }

    parts.into_iter().map(Segment::classify).collect()
}

// Digit strings of any width: strip leading zeros, then a longer run is larger.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');

    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
