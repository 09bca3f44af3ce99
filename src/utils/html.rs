//! Markup helpers

/// Character reference written in place of `"`
pub const QUOTE_REF: &str = "&#34;";

/// Make `value` safe inside a double-quoted attribute.
///
/// Only `"` is replaced. Every other character, including `<`, `>` and `&`,
/// passes through unchanged.
pub fn escape_quotes(value: &str) -> String {
    value.replace('"', QUOTE_REF)
}
