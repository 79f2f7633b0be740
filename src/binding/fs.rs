//! Binding to CPE v2.3 formatted strings.

use super::encoding::transform_for_fs;
use crate::error::{CpeError, MalformedValueKind, Result};
use crate::model::{Attribute, AttributeValue, LogicalValue, WellFormedName};
use std::borrow::Cow;

/// Prefix of every v2.3 formatted string
pub const FS_PREFIX: &str = "cpe:2.3:";

/// Bind a WFN to a CPE v2.3 formatted string.
///
/// All eleven attributes get their own colon-separated slot; nothing is
/// packed or trimmed.
///
/// ```
/// use cpe_tools::binding::bind_to_fs;
/// use cpe_tools::model::WellFormedName;
///
/// let wfn = WellFormedName::builder().part("a").vendor("foo\\$bar").build();
/// assert_eq!(bind_to_fs(&wfn).unwrap(), r"cpe:2.3:a:foo\$bar:*:*:*:*:*:*:*:*:*");
/// ```
pub fn bind_to_fs(wfn: &WellFormedName) -> Result<String> {
    let mut fs = String::from(FS_PREFIX);

    for (i, attribute) in Attribute::ALL.into_iter().enumerate() {
        if i > 0 {
            fs.push(':');
        }
        let component = bind_value_for_fs(wfn.get(attribute))
            .map_err(|kind| CpeError::bind(attribute, kind))?;
        fs.push_str(&component);
    }

    tracing::debug!(wfn = %wfn, %fs, "bound WFN to formatted string");
    Ok(fs)
}

/// Bind a single value to its formatted-string component text.
///
/// ANY binds to `*` and NA to `-`.
pub fn bind_value_for_fs(
    value: &AttributeValue,
) -> std::result::Result<Cow<'_, str>, MalformedValueKind> {
    match value {
        AttributeValue::Logical(LogicalValue::Any) => Ok(Cow::Borrowed("*")),
        AttributeValue::Logical(LogicalValue::Na) => Ok(Cow::Borrowed("-")),
        AttributeValue::Str(s) => transform_for_fs(s).map(Cow::Owned),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_any() {
        let mut wfn = WellFormedName::new();
        assert_eq!(bind_to_fs(&wfn).unwrap(), "cpe:2.3:*:*:*:*:*:*:*:*:*:*:*");
        for attr in Attribute::ALL {
            wfn.set(attr, LogicalValue::Any);
        }
        assert_eq!(bind_to_fs(&wfn).unwrap(), "cpe:2.3:*:*:*:*:*:*:*:*:*:*:*");
    }

    #[test]
    fn test_extended_attributes_keep_their_slots() {
        let wfn = WellFormedName::builder()
            .vendor("foo\\$bar")
            .update(LogicalValue::Na)
            .sw_edition("online")
            .target_sw("win2003")
            .target_hw("x64")
            .build();
        assert_eq!(
            bind_to_fs(&wfn).unwrap(),
            r"cpe:2.3:*:foo\$bar:*:*:-:*:*:online:win2003:x64:*"
        );
    }

    #[test]
    fn test_quoting_normalized() {
        let wfn = WellFormedName::builder()
            .part("a")
            .vendor("microsoft")
            .product("internet_explorer")
            .version("8\\.0\\.6001")
            .update("beta")
            .edition(LogicalValue::Any)
            .language("sp2")
            .build();
        assert_eq!(
            bind_to_fs(&wfn).unwrap(),
            "cpe:2.3:a:microsoft:internet_explorer:8.0.6001:beta:*:sp2:*:*:*:*"
        );
    }

    #[test]
    fn test_slot_count() {
        let wfn = WellFormedName::builder().other("x").build();
        let fs = bind_to_fs(&wfn).unwrap();
        assert_eq!(fs.split(':').count(), 13);
        assert!(fs.ends_with(":x"));
    }

    #[test]
    fn test_trailing_escape_reports_attribute() {
        let wfn = WellFormedName::builder().target_hw("x64\\").build();
        let err = bind_to_fs(&wfn).unwrap_err();
        assert_eq!(err.attribute(), Some(Attribute::TargetHw));
    }
}
