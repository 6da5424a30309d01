//! JSON encoding for the output files.
//!
//! Output is pretty-printed with a four space indent and carries no trailing
//! newline. Every non-ASCII character is written as a `\uXXXX` escape so the
//! files stay pure ASCII whatever the workbook contains.

use crate::utils::error::{EtlError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;

    let text = String::from_utf8(buf).map_err(|e| EtlError::ValidationError {
        message: format!("serializer produced invalid UTF-8: {}", e),
    })?;
    Ok(escape_non_ascii(&text))
}

fn needs_escape(c: char) -> bool {
    !c.is_ascii() || c == '\u{7f}'
}

/// Rewrites non-ASCII characters and DEL as UTF-16 `\u` escapes.
///
/// Only valid on serialized JSON: serde_json never emits these characters
/// outside string literals, so each escape lands inside a string.
pub fn escape_non_ascii(json: &str) -> String {
    if !json.chars().any(needs_escape) {
        return json.to_string();
    }

    let mut out = String::with_capacity(json.len() + 16);
    let mut units = [0u16; 2];
    for c in json.chars() {
        if !needs_escape(c) {
            out.push(c);
            continue;
        }
        for unit in c.encode_utf16(&mut units) {
            out.push_str(&format!("\\u{:04x}", unit));
        }
    }
    out
}
