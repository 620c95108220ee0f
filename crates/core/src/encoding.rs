//! Text encoding helpers for the video XML fragment.
//!
//! Callers pick the encoding per field before handing values to
//! [`attributes`]; the composition helper itself never re-escapes.

/// Escape XML special characters for element text and attribute values.
///
/// URLs without reserved characters pass through unchanged.
pub fn encode(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Wrap text in a CDATA section.
///
/// A literal `]]>` in the input is split across two sections so the
/// terminator can never close the section early.
pub fn cdata(s: &str) -> String {
    format!("<![CDATA[{}]]>", s.replace("]]>", "]]]]><![CDATA[>"))
}

/// Compose `name="value"` pairs in the given order.
///
/// Returns a string with a single leading space, or an empty string when
/// there are no pairs.
pub fn attributes(pairs: &[(&str, String)]) -> String {
    let mut out = String::new();
    for (name, value) in pairs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out
}
