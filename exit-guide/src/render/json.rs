//! Canonical JSON encoding of the dataset.
//!
//! Object keys are sorted, separators are compact, and everything outside
//! printable ASCII (plus `<`) is written as a `\uXXXX` escape. The result is
//! stable for a given dataset and can be pasted into a `<script>` element
//! as is.

use std::io;

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter};

/// Compact formatter that escapes non-ASCII characters and `<`.
#[derive(Debug, Default)]
struct ScriptSafeFormatter {
    inner: CompactFormatter,
}

impl Formatter for ScriptSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '<' {
                continue;
            }
            self.inner
                .write_string_fragment(writer, &fragment[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + ch.len_utf8();
        }
        self.inner.write_string_fragment(writer, &fragment[start..])
    }
}

/// Serialise `value` as canonical JSON.
///
/// ```
/// use exit_guide::render::to_canonical_json;
/// use serde_json::json;
///
/// let out = to_canonical_json(&json!({"b": 1, "a": "é</"})).unwrap();
/// assert_eq!(out, r#"{"a":"\u00e9\u003c/","b":1}"#);
/// ```
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    // Going through Value sorts object keys.
    let value = serde_json::to_value(value)?;

    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, ScriptSafeFormatter::default());
    value.serialize(&mut serializer)?;

    String::from_utf8(out).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys_are_sorted_at_every_level() {
        let out = to_canonical_json(&json!({"z": {"b": 1, "a": 2}, "m": [ {"y": 0, "x": 0} ]}))
            .unwrap();
        assert_eq!(out, r#"{"m":[{"x":0,"y":0}],"z":{"a":2,"b":1}}"#);
    }

    #[test]
    fn non_ascii_is_escaped() {
        let out = to_canonical_json(&json!("Gallery Pl–Chinatown")).unwrap();
        assert_eq!(out, r#""Gallery Pl\u2013Chinatown""#);
    }

    #[test]
    fn astral_characters_use_surrogate_pairs() {
        let out = to_canonical_json(&json!("🚇")).unwrap();
        assert_eq!(out, r#""\ud83d\ude87""#);
    }

    #[test]
    fn script_close_tag_cannot_appear() {
        let out = to_canonical_json(&json!("</script>")).unwrap();
        assert!(!out.contains("</"));
        let back: String = serde_json::from_str(&out).unwrap();
        assert_eq!(back, "</script>");
    }

    #[test]
    fn standard_escapes_still_apply() {
        let out = to_canonical_json(&json!("a\"b\\c\n")).unwrap();
        assert_eq!(out, r#""a\"b\\c\n""#);
    }

    #[test]
    fn floats_keep_their_decimal_point() {
        let out = to_canonical_json(&json!({"x": 10.0, "delta": 4.9, "n": null})).unwrap();
        assert_eq!(out, r#"{"delta":4.9,"n":null,"x":10.0}"#);
    }
}
