//! Binding to CPE v2.2 URIs.

use super::encoding::transform_for_uri;
use crate::error::{CpeError, MalformedValueKind, Result};
use crate::model::{Attribute, AttributeValue, LogicalValue, WellFormedName};
use std::borrow::Cow;

/// Prefix of every v2.2 URI
pub const URI_PREFIX: &str = "cpe:/";

const EDITION_DELIMITER: char = '~';

/// Bind a WFN to a CPE v2.2 URI.
///
/// The seven legacy components are emitted in order; the four extended
/// attributes are packed into `edition`. Trailing empty components are
/// trimmed, so a name with every attribute ANY binds to `cpe:/`.
///
/// ```
/// use cpe_tools::binding::bind_to_uri;
/// use cpe_tools::model::WellFormedName;
///
/// let wfn = WellFormedName::builder()
///     .part("a")
///     .vendor("microsoft")
///     .product("internet_explorer")
///     .version("8\\.0\\.6001")
///     .update("beta")
///     .language("sp2")
///     .build();
/// assert_eq!(
///     bind_to_uri(&wfn).unwrap(),
///     "cpe:/a:microsoft:internet_explorer:8.0.6001:beta::sp2"
/// );
/// ```
pub fn bind_to_uri(wfn: &WellFormedName) -> Result<String> {
    let mut uri = String::from(URI_PREFIX);

    for attribute in Attribute::URI_ORDER {
        let component = if attribute == Attribute::Edition {
            Cow::Owned(edition_component(wfn)?)
        } else {
            bind_attribute(wfn, attribute)?
        };
        uri.push_str(&component);
        uri.push(':');
    }

    let uri = trim_trailing_colons(&uri).to_string();
    tracing::debug!(wfn = %wfn, %uri, "bound WFN to URI");
    Ok(uri)
}

/// Bind a single value to its URI component text.
///
/// ANY binds to the empty string and NA to `-`.
pub fn bind_value_for_uri(
    value: &AttributeValue,
) -> std::result::Result<Cow<'_, str>, MalformedValueKind> {
    match value {
        AttributeValue::Logical(LogicalValue::Any) => Ok(Cow::Borrowed("")),
        AttributeValue::Logical(LogicalValue::Na) => Ok(Cow::Borrowed("-")),
        AttributeValue::Str(s) => transform_for_uri(s).map(Cow::Owned),
    }
}

fn bind_attribute(wfn: &WellFormedName, attribute: Attribute) -> Result<Cow<'_, str>> {
    bind_value_for_uri(wfn.get(attribute)).map_err(|kind| CpeError::bind(attribute, kind))
}

fn edition_component(wfn: &WellFormedName) -> Result<String> {
    let edition = bind_attribute(wfn, Attribute::Edition)?;
    let [sw_edition, target_sw, target_hw, other] = [
        bind_attribute(wfn, Attribute::SwEdition)?,
        bind_attribute(wfn, Attribute::TargetSw)?,
        bind_attribute(wfn, Attribute::TargetHw)?,
        bind_attribute(wfn, Attribute::Other)?,
    ];
    Ok(pack_edition(&edition, &sw_edition, &target_sw, &target_hw, &other))
}

/// Fold the four extended attributes into the legacy edition slot.
///
/// When all four are empty the plain edition is returned; otherwise the
/// result is `~edition~sw_edition~target_sw~target_hw~other`.
#[must_use]
pub fn pack_edition(
    edition: &str,
    sw_edition: &str,
    target_sw: &str,
    target_hw: &str,
    other: &str,
) -> String {
    if sw_edition.is_empty() && target_sw.is_empty() && target_hw.is_empty() && other.is_empty() {
        return edition.to_string();
    }

    let mut packed = String::with_capacity(
        5 + edition.len() + sw_edition.len() + target_sw.len() + target_hw.len() + other.len(),
    );
    for part in [edition, sw_edition, target_sw, target_hw, other] {
        packed.push(EDITION_DELIMITER);
        packed.push_str(part);
    }
    packed
}

/// Strip every trailing `:` from a string.
///
/// ```
/// use cpe_tools::binding::trim_trailing_colons;
///
/// assert_eq!(trim_trailing_colons("cpe:/a:b::"), "cpe:/a:b");
/// assert_eq!(trim_trailing_colons(":::"), "");
/// assert_eq!(trim_trailing_colons(""), "");
/// ```
#[must_use]
pub fn trim_trailing_colons(s: &str) -> &str {
    s.trim_end_matches(':')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(value: AttributeValue) -> WellFormedName {
        let mut wfn = WellFormedName::new();
        for attr in Attribute::ALL {
            wfn.set(attr, value.clone());
        }
        wfn
    }

    #[test]
    fn test_all_any_binds_to_prefix() {
        assert_eq!(bind_to_uri(&all(AttributeValue::ANY)).unwrap(), "cpe:/");
        assert_eq!(bind_to_uri(&WellFormedName::new()).unwrap(), "cpe:/");
    }

    #[test]
    fn test_all_na() {
        // NA in the extended attributes forces packing
        assert_eq!(
            bind_to_uri(&all(AttributeValue::NA)).unwrap(),
            "cpe:/-:-:-:-:-:~-~-~-~-~-:-"
        );
    }

    #[test]
    fn test_edition_without_extended_attributes_is_bare() {
        let wfn = WellFormedName::builder()
            .part("a")
            .vendor("hp")
            .edition("pro")
            .build();
        assert_eq!(bind_to_uri(&wfn).unwrap(), "cpe:/a:hp::::pro");
    }

    #[test]
    fn test_single_extended_attribute_triggers_packing() {
        for attr in Attribute::EXTENDED {
            let mut wfn = WellFormedName::builder().part("a").edition("pro").build();
            wfn.set(attr, "x");
            let uri = bind_to_uri(&wfn).unwrap();
            let edition = uri.split(':').nth(6).unwrap();
            assert!(edition.starts_with("~pro~"), "{attr}: {uri}");
            assert_eq!(edition.matches('~').count(), 5, "{attr}: {uri}");
        }
    }

    #[test]
    fn test_packed_edition() {
        let wfn = WellFormedName::builder()
            .part("a")
            .vendor("foo\\$bar")
            .update(LogicalValue::Na)
            .sw_edition("online")
            .target_sw("win2003")
            .target_hw("x64")
            .build();
        assert_eq!(
            bind_to_uri(&wfn).unwrap(),
            "cpe:/a:foo%24bar:::-:~~online~win2003~x64~"
        );
    }

    #[test]
    fn test_wildcards_in_uri() {
        let wfn = WellFormedName::builder()
            .part("a")
            .vendor("micro*")
            .product("??plorer")
            .build();
        assert_eq!(bind_to_uri(&wfn).unwrap(), "cpe:/a:micro%02:%01%01plorer");
    }

    #[test]
    fn test_malformed_value_reports_attribute() {
        let wfn = WellFormedName::builder().part("a").product("bad\\").build();
        let err = bind_to_uri(&wfn).unwrap_err();
        assert_eq!(err.attribute(), Some(Attribute::Product));

        let wfn = WellFormedName::builder().other("1.0").build();
        let err = bind_to_uri(&wfn).unwrap_err();
        assert_eq!(err.attribute(), Some(Attribute::Other));
    }

    #[test]
    fn test_pack_edition() {
        assert_eq!(pack_edition("pro", "", "", "", ""), "pro");
        assert_eq!(pack_edition("", "", "", "", ""), "");
        assert_eq!(pack_edition("", "", "", "", "x"), "~~~~~x");
        assert_eq!(pack_edition("e", "s", "t", "h", "o"), "~e~s~t~h~o");
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim_trailing_colons("cpe:/a:b::"), "cpe:/a:b");
        assert_eq!(trim_trailing_colons(":::"), "");
        assert_eq!(trim_trailing_colons(""), "");
        assert_eq!(trim_trailing_colons("a:b"), "a:b");
    }
}
