/// Escapes `value` for use inside a double-quoted C string literal.
///
/// Backslashes are doubled before quotes are escaped, otherwise the
/// backslash added in front of a quote would itself be doubled.
pub fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
