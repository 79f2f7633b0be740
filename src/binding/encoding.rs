//! Character-level transforms shared by the URI and formatted-string bindings.

use crate::error::MalformedValueKind;
use std::borrow::Cow;

/// Percent-encodings used when a quoted WFN character is bound into a URI.
///
/// `-` and `.` are listed with themselves: they are legal unescaped in a
/// v2.2 URI. `}` and `~` both map to `%7d`; this matches the reference
/// binder this crate is compatible with and is kept as-is.
const PCT_ENCODINGS: &[(char, &str)] = &[
    ('!', "%21"),
    ('"', "%22"),
    ('#', "%23"),
    ('$', "%24"),
    ('%', "%25"),
    ('&', "%26"),
    ('\'', "%27"),
    ('(', "%28"),
    (')', "%29"),
    ('*', "%2a"),
    ('+', "%2b"),
    (',', "%2c"),
    ('-', "-"),
    ('.', "."),
    ('/', "%2f"),
    (':', "%3a"),
    (';', "%3b"),
    ('<', "%3c"),
    ('=', "%3d"),
    ('>', "%3e"),
    ('?', "%3f"),
    ('@', "%40"),
    ('[', "%5b"),
    ('\\', "%5c"),
    (']', "%5d"),
    ('^', "%5e"),
    ('`', "%60"),
    ('{', "%7b"),
    ('|', "%7c"),
    ('}', "%7d"),
    ('~', "%7d"),
];

/// URI text for an unquoted single-character wildcard.
const URI_WILDCARD_ONE: &str = "%01";
/// URI text for an unquoted multi-character wildcard.
const URI_WILDCARD_MANY: &str = "%02";

/// Characters whose quoting is dropped in a formatted string.
const FS_UNQUOTED: [char; 3] = ['.', '-', '_'];

const ESCAPE: char = '\\';

/// Percent-encode one character for a v2.2 URI.
///
/// Characters outside the table are returned unchanged.
///
/// ```
/// use cpe_tools::binding::pct_encode;
///
/// assert_eq!(pct_encode('$'), "%24");
/// assert_eq!(pct_encode('.'), ".");
/// assert_eq!(pct_encode('a'), "a");
/// ```
#[must_use]
pub fn pct_encode(c: char) -> Cow<'static, str> {
    PCT_ENCODINGS
        .iter()
        .find(|(ch, _)| *ch == c)
        .map_or_else(|| Cow::Owned(c.to_string()), |(_, enc)| Cow::Borrowed(*enc))
}

/// Whether a character may appear unquoted in a WFN string
fn is_wfn_alnum(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convert a quoted WFN string to its v2.2 URI form.
///
/// Alphanumerics and `_` pass through, `\X` becomes the percent-encoding of
/// `X`, and the unquoted wildcards `?` and `*` become `%01` and `%02`. Any
/// other unquoted character is rejected.
pub fn transform_for_uri(value: &str) -> Result<String, MalformedValueKind> {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        match c {
            c if is_wfn_alnum(c) => result.push(c),
            ESCAPE => {
                let quoted = chars.next().ok_or_else(|| MalformedValueKind::TrailingEscape {
                    value: value.to_string(),
                })?;
                result.push_str(&pct_encode(quoted));
            }
            '?' => result.push_str(URI_WILDCARD_ONE),
            '*' => result.push_str(URI_WILDCARD_MANY),
            ch => {
                return Err(MalformedValueKind::UnquotedSpecial {
                    ch,
                    value: value.to_string(),
                })
            }
        }
    }

    Ok(result)
}

/// Normalize quoting of a WFN string for a v2.3 formatted string.
///
/// `\.`, `\-` and `\_` lose their backslash; every other escape pair and
/// every unescaped character is copied unchanged.
pub fn transform_for_fs(value: &str) -> Result<String, MalformedValueKind> {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != ESCAPE {
            result.push(c);
            continue;
        }
        let quoted = chars.next().ok_or_else(|| MalformedValueKind::TrailingEscape {
            value: value.to_string(),
        })?;
        if !FS_UNQUOTED.contains(&quoted) {
            result.push(ESCAPE);
        }
        result.push(quoted);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pct_table_is_exact() {
        let expected = [
            ('!', "%21"),
            ('"', "%22"),
            ('#', "%23"),
            ('$', "%24"),
            ('%', "%25"),
            ('&', "%26"),
            ('\'', "%27"),
            ('(', "%28"),
            (')', "%29"),
            ('*', "%2a"),
            ('+', "%2b"),
            (',', "%2c"),
            ('/', "%2f"),
            (':', "%3a"),
            (';', "%3b"),
            ('<', "%3c"),
            ('=', "%3d"),
            ('>', "%3e"),
            ('?', "%3f"),
            ('@', "%40"),
            ('[', "%5b"),
            ('\\', "%5c"),
            (']', "%5d"),
            ('^', "%5e"),
            ('`', "%60"),
            ('{', "%7b"),
            ('|', "%7c"),
            ('}', "%7d"),
            ('~', "%7d"),
        ];
        for (c, enc) in expected {
            assert_eq!(pct_encode(c), enc, "encoding of {c:?}");
        }
    }

    #[test]
    fn test_dot_and_hyphen_stay_literal() {
        assert_eq!(pct_encode('.'), ".");
        assert_eq!(pct_encode('-'), "-");
    }

    #[test]
    fn test_brace_tilde_collision() {
        assert_eq!(pct_encode('}'), pct_encode('~'));
    }

    #[test]
    fn test_pct_fallback_returns_char() {
        assert_eq!(pct_encode('z'), "z");
        assert_eq!(pct_encode('é'), "é");
        assert_eq!(pct_encode(' '), " ");
    }

    #[test]
    fn test_transform_for_uri() {
        assert_eq!(transform_for_uri("internet_explorer").unwrap(), "internet_explorer");
        assert_eq!(transform_for_uri("8\\.0\\.6001").unwrap(), "8.0.6001");
        assert_eq!(transform_for_uri("foo\\$bar").unwrap(), "foo%24bar");
        assert_eq!(transform_for_uri("foo\\~bar").unwrap(), "foo%7dbar");
        assert_eq!(transform_for_uri("\\\\").unwrap(), "%5c");
        assert_eq!(transform_for_uri("").unwrap(), "");
    }

    #[test]
    fn test_transform_for_uri_wildcards() {
        assert_eq!(transform_for_uri("foo?").unwrap(), "foo%01");
        assert_eq!(transform_for_uri("*bar*").unwrap(), "%02bar%02");
        assert_eq!(transform_for_uri("\\?\\*").unwrap(), "%3f%2a");
    }

    #[test]
    fn test_transform_for_uri_rejects_unquoted_special() {
        let err = transform_for_uri("8.0").unwrap_err();
        assert_eq!(
            err,
            MalformedValueKind::UnquotedSpecial {
                ch: '.',
                value: "8.0".to_string()
            }
        );
    }

    #[test]
    fn test_trailing_escape_is_rejected() {
        let expected = MalformedValueKind::TrailingEscape {
            value: "abc\\".to_string(),
        };
        assert_eq!(transform_for_uri("abc\\").unwrap_err(), expected);
        assert_eq!(transform_for_fs("abc\\").unwrap_err(), expected);
        // An escaped backslash at the end is well formed
        assert_eq!(transform_for_fs("abc\\\\").unwrap(), "abc\\\\");
    }

    #[test]
    fn test_transform_for_fs() {
        assert_eq!(transform_for_fs("8\\.0\\.6001").unwrap(), "8.0.6001");
        assert_eq!(transform_for_fs("a\\-b\\_c").unwrap(), "a-b_c");
        assert_eq!(transform_for_fs("foo\\$bar").unwrap(), "foo\\$bar");
        assert_eq!(transform_for_fs("c\\+\\+").unwrap(), "c\\+\\+");
        assert_eq!(transform_for_fs("foo*").unwrap(), "foo*");
        assert_eq!(transform_for_fs("plain").unwrap(), "plain");
    }
}
