use std::cmp::Ordering;
use std::str::FromStr;

#[cfg(test)]
use proptest_derive::Arbitrary;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{VersionError, compare};

/// A relation between two versions, as written in `LEFT OP RIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DeserializeFromStr, SerializeDisplay)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum ComparisonOperator {
    Equal,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
}

impl ComparisonOperator {
    pub const ALL: [Self; 5] = [
        Self::Equal,
        Self::Greater,
        Self::GreaterEqual,
        Self::Less,
        Self::LessEqual,
    ];

    /// Whether a three-way comparison result satisfies this relation.
    pub fn matches(self, ordering: Ordering) -> bool {
        match self {
            Self::Equal => ordering.is_eq(),
            Self::Greater => ordering.is_gt(),
            Self::GreaterEqual => ordering.is_ge(),
            Self::Less => ordering.is_lt(),
            Self::LessEqual => ordering.is_le(),
        }
    }

    /// Compares `left` with `right` and checks the result against this relation.
    pub fn evaluate(self, left: &str, right: &str) -> Result<bool, VersionError> {
        compare(left, right).map(|ordering| self.matches(ordering))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "eq",
            Self::Greater => "gt",
            Self::GreaterEqual => "ge",
            Self::Less => "lt",
            Self::LessEqual => "le",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
        }
    }
}

impl FromStr for ComparisonOperator {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eq" | "==" | "=" => Ok(Self::Equal),
            "gt" | ">" => Ok(Self::Greater),
            "ge" | ">=" => Ok(Self::GreaterEqual),
            "lt" | "<" => Ok(Self::Less),
            "le" | "<=" => Ok(Self::LessEqual),
            _ => Err(VersionError::UnknownOperator {
                operator: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
