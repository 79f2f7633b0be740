//! Logical attribute values (ANY / NA).

use crate::error::CpeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two special WFN attribute values.
///
/// `Any` is the wildcard ("matches anything"), `Na` marks an attribute that
/// does not apply to the named product. Exactly one of [`is_any`](Self::is_any)
/// and [`is_na`](Self::is_na) is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogicalValue {
    #[serde(rename = "ANY")]
    Any,
    #[serde(rename = "NA")]
    Na,
}

impl LogicalValue {
    /// Returns true for the ANY wildcard
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Returns true for not-applicable
    #[must_use]
    pub const fn is_na(&self) -> bool {
        matches!(self, Self::Na)
    }

    /// Canonical upper-case tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::Na => "NA",
        }
    }
}

impl FromStr for LogicalValue {
    type Err = CpeError;

    /// Parses a tag case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("any") {
            Ok(Self::Any)
        } else if s.eq_ignore_ascii_case("na") {
            Ok(Self::Na)
        } else {
            Err(CpeError::InvalidLogicalValue(s.to_string()))
        }
    }
}

impl fmt::Display for LogicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
