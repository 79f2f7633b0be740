//! WFN attribute names and values.

use super::LogicalValue;
use crate::error::CpeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The eleven attributes of a Well-Formed Name, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Part,
    Vendor,
    Product,
    Version,
    Update,
    Edition,
    Language,
    SwEdition,
    TargetSw,
    TargetHw,
    Other,
}

impl Attribute {
    /// All attributes in formatted-string (v2.3) order.
    pub const ALL: [Self; 11] = [
        Self::Part,
        Self::Vendor,
        Self::Product,
        Self::Version,
        Self::Update,
        Self::Edition,
        Self::Language,
        Self::SwEdition,
        Self::TargetSw,
        Self::TargetHw,
        Self::Other,
    ];

    /// The seven components of a v2.2 URI, in order.
    ///
    /// The four extended attributes have no slot of their own in a URI; they
    /// are packed into `edition`.
    pub const URI_ORDER: [Self; 7] = [
        Self::Part,
        Self::Vendor,
        Self::Product,
        Self::Version,
        Self::Update,
        Self::Edition,
        Self::Language,
    ];

    /// Attributes folded into the URI `edition` component besides edition itself.
    pub const EXTENDED: [Self; 4] = [Self::SwEdition, Self::TargetSw, Self::TargetHw, Self::Other];

    /// Attribute name as written in a WFN
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Part => "part",
            Self::Vendor => "vendor",
            Self::Product => "product",
            Self::Version => "version",
            Self::Update => "update",
            Self::Edition => "edition",
            Self::Language => "language",
            Self::SwEdition => "sw_edition",
            Self::TargetSw => "target_sw",
            Self::TargetHw => "target_hw",
            Self::Other => "other",
        }
    }
}

impl FromStr for Attribute {
    type Err = CpeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|attr| attr.as_str() == s)
            .ok_or_else(|| CpeError::InvalidAttribute(s.to_string()))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value held by a WFN attribute.
///
/// `Str` holds a string already in WFN-quoted form: every non-alphanumeric
/// character other than the `?`/`*` wildcards is preceded by a backslash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    Str(String),
    Logical(LogicalValue),
}

impl AttributeValue {
    /// The ANY wildcard
    pub const ANY: Self = Self::Logical(LogicalValue::Any);
    /// Not applicable
    pub const NA: Self = Self::Logical(LogicalValue::Na);

    /// Returns the logical value, if this is one
    #[must_use]
    pub const fn as_logical(&self) -> Option<LogicalValue> {
        match self {
            Self::Logical(lv) => Some(*lv),
            Self::Str(_) => None,
        }
    }

    /// Returns the quoted string, if this is one
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Logical(_) => None,
        }
    }

    /// Returns true for the ANY wildcard
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Logical(LogicalValue::Any))
    }
}

impl Default for AttributeValue {
    fn default() -> Self {
        Self::ANY
    }
}

impl From<LogicalValue> for AttributeValue {
    fn from(value: LogicalValue) -> Self {
        Self::Logical(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// Text form used on the command line and in config/batch files: the exact
/// tokens `ANY` and `NA` are logical values, anything else is a quoted string.
impl FromStr for AttributeValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ANY" => Self::ANY,
            "NA" => Self::NA,
            other => Self::Str(other.to_string()),
        })
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Logical(lv) => write!(f, "{lv}"),
        }
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Logical(lv) => serializer.serialize_str(lv.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.parse() {
            Ok(value) => value,
            Err(never) => match never {},
        })
    }
}
