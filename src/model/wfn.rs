//! Well-Formed Names.

use super::{Attribute, AttributeValue};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Returned by [`WellFormedName::get`] for attributes that were never set.
static UNSET: AttributeValue = AttributeValue::ANY;

/// A CPE Well-Formed Name: a mapping from the eleven fixed attributes to
/// quoted strings or logical values.
///
/// Unset attributes read as ANY. Keys are typed, so an unknown attribute
/// cannot be stored; the name-based accessors reject unknown names.
///
/// ```
/// use cpe_tools::model::{Attribute, LogicalValue, WellFormedName};
///
/// let wfn = WellFormedName::builder()
///     .part("a")
///     .vendor("microsoft")
///     .update(LogicalValue::Na)
///     .build();
///
/// assert_eq!(wfn.get(Attribute::Vendor).as_str(), Some("microsoft"));
/// assert!(wfn.get(Attribute::Product).is_any());
/// assert_eq!(wfn.to_string(), r#"wfn:[part="a",vendor="microsoft",update=NA]"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WellFormedName {
    values: BTreeMap<Attribute, AttributeValue>,
}

impl WellFormedName {
    /// Create an empty name (every attribute ANY)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder accepting any subset of the eleven attributes
    pub fn builder() -> WellFormedNameBuilder {
        WellFormedNameBuilder::default()
    }

    /// Build a name from `(attribute name, value)` pairs.
    ///
    /// Fails on the first unknown attribute name.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<AttributeValue>,
    {
        let mut wfn = Self::new();
        for (name, value) in pairs {
            wfn.set_by_name(name.as_ref(), value)?;
        }
        Ok(wfn)
    }

    /// Stored value for an attribute, or ANY if never set
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> &AttributeValue {
        self.values.get(&attribute).unwrap_or(&UNSET)
    }

    /// Store a value under an attribute, replacing any previous value
    pub fn set(&mut self, attribute: Attribute, value: impl Into<AttributeValue>) {
        self.values.insert(attribute, value.into());
    }

    /// Like [`get`](Self::get), addressed by attribute name
    pub fn get_by_name(&self, name: &str) -> Result<&AttributeValue> {
        Ok(self.get(name.parse()?))
    }

    /// Like [`set`](Self::set), addressed by attribute name
    pub fn set_by_name(&mut self, name: &str, value: impl Into<AttributeValue>) -> Result<()> {
        self.set(name.parse()?, value);
        Ok(())
    }

    /// Returns the attribute to its unset (ANY) state
    pub fn unset(&mut self, attribute: Attribute) -> Option<AttributeValue> {
        self.values.remove(&attribute)
    }

    /// Whether the attribute was explicitly set
    #[must_use]
    pub fn is_set(&self, attribute: Attribute) -> bool {
        self.values.contains_key(&attribute)
    }

    /// Explicitly set attributes, in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &AttributeValue)> {
        self.values.iter().map(|(attr, value)| (*attr, value))
    }

    /// Number of explicitly set attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for WellFormedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("wfn:[")?;
        for (i, (attr, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match value {
                AttributeValue::Str(s) => write!(f, "{attr}=\"{s}\"")?,
                AttributeValue::Logical(lv) => write!(f, "{attr}={lv}")?,
            }
        }
        f.write_str("]")
    }
}

// ============================================================================
// Builder for WellFormedName
// ============================================================================

/// Builder for constructing a `WellFormedName` with a fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct WellFormedNameBuilder {
    wfn: WellFormedName,
}

impl WellFormedNameBuilder {
    /// Set an arbitrary attribute.
    pub fn attribute(mut self, attribute: Attribute, value: impl Into<AttributeValue>) -> Self {
        self.wfn.set(attribute, value);
        self
    }

    /// Set the part (`a`, `o` or `h`).
    pub fn part(self, value: impl Into<AttributeValue>) -> Self {
        self.attribute(Attribute::Part, value)
    }

    /// Set the vendor.
    pub fn vendor(self, value: impl Into<AttributeValue>) -> Self {
        self.attribute(Attribute::Vendor, value)
    }

    /// Set the product.
    pub fn product(self, value: impl Into<AttributeValue>) -> Self {
        self.attribute(Attribute::Product, value)
    }

    /// Set the version.
    pub fn version(self, value: impl Into<AttributeValue>) -> Self {
        self.attribute(Attribute::Version, value)
    }

    /// Set the update.
    pub fn update(self, value: impl Into<AttributeValue>) -> Self {
        self.attribute(Attribute::Update, value)
    }

    /// Set the legacy edition.
    pub fn edition(self, value: impl Into<AttributeValue>) -> Self {
        self.attribute(Attribute::Edition, value)
    }

    /// Set the language.
    pub fn language(self, value: impl Into<AttributeValue>) -> Self {
        self.attribute(Attribute::Language, value)
    }

    /// Set the software edition.
    pub fn sw_edition(self, value: impl Into<AttributeValue>) -> Self {
        self.attribute(Attribute::SwEdition, value)
    }

    /// Set the target software.
    pub fn target_sw(self, value: impl Into<AttributeValue>) -> Self {
        self.attribute(Attribute::TargetSw, value)
    }

    /// Set the target hardware.
    pub fn target_hw(self, value: impl Into<AttributeValue>) -> Self {
        self.attribute(Attribute::TargetHw, value)
    }

    /// Set the other attribute.
    pub fn other(self, value: impl Into<AttributeValue>) -> Self {
        self.attribute(Attribute::Other, value)
    }

    /// Build the name.
    pub fn build(self) -> WellFormedName {
        self.wfn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CpeError;
    use crate::model::LogicalValue;

    #[test]
    fn test_unset_reads_as_any() {
        let wfn = WellFormedName::new();
        for attr in Attribute::ALL {
            assert!(wfn.get(attr).is_any());
            assert!(!wfn.is_set(attr));
        }
        assert!(wfn.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut wfn = WellFormedName::new();
        wfn.set(Attribute::Product, "internet_explorer");
        wfn.set(Attribute::Update, LogicalValue::Na);
        assert_eq!(wfn.get(Attribute::Product).as_str(), Some("internet_explorer"));
        assert_eq!(wfn.get(Attribute::Update).as_logical(), Some(LogicalValue::Na));
        assert_eq!(wfn.len(), 2);
    }

    #[test]
    fn test_by_name_rejects_unknown() {
        let mut wfn = WellFormedName::new();
        let err = wfn.set_by_name("platform", "x").unwrap_err();
        assert!(matches!(err, CpeError::InvalidAttribute(ref n) if n == "platform"));
        assert!(wfn.is_empty());
        assert!(wfn.get_by_name("Vendor").is_err());

        wfn.set_by_name("target_sw", "win2003").unwrap();
        assert_eq!(wfn.get_by_name("target_sw").unwrap().as_str(), Some("win2003"));
    }

    #[test]
    fn test_from_pairs() {
        let wfn = WellFormedName::from_pairs([("part", "o"), ("vendor", "linux")]).unwrap();
        assert_eq!(wfn.get(Attribute::Part).as_str(), Some("o"));
        assert!(WellFormedName::from_pairs([("part", "o"), ("bogus", "x")]).is_err());
    }

    #[test]
    fn test_unset_restores_any() {
        let mut wfn = WellFormedName::builder().vendor("acme").build();
        assert_eq!(
            wfn.unset(Attribute::Vendor),
            Some(AttributeValue::Str("acme".to_string()))
        );
        assert!(wfn.get(Attribute::Vendor).is_any());
    }

    #[test]
    fn test_display_lists_set_attributes_in_order() {
        let wfn = WellFormedName::builder()
            .language("sp2")
            .part("a")
            .version("8\\.0")
            .edition(LogicalValue::Any)
            .build();
        assert_eq!(
            wfn.to_string(),
            r#"wfn:[part="a",version="8\.0",edition=ANY,language="sp2"]"#
        );
        assert_eq!(WellFormedName::new().to_string(), "wfn:[]");
    }

    #[test]
    fn test_serde_roundtrip_and_unknown_keys() {
        let wfn = WellFormedName::builder()
            .part("a")
            .update(LogicalValue::Na)
            .target_hw("x64")
            .build();
        let json = serde_json::to_string(&wfn).unwrap();
        assert_eq!(json, r#"{"part":"a","update":"NA","target_hw":"x64"}"#);
        let back: WellFormedName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wfn);

        let bad = serde_json::from_str::<WellFormedName>(r#"{"platform":"x"}"#);
        assert!(bad.is_err());
    }
}
