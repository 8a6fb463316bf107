// crates/citygeo-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// Transliterates Unicode to ASCII with `deunicode`, then lowercases, so
/// `"Sétif"` and `"SETIF"` compare equal.
///
/// # Examples
/// ```rust
/// use citygeo_core::text::fold_key;
///
/// assert_eq!(fold_key("Sétif"), "setif");
/// assert_eq!(fold_key("  Sfax "), "  sfax ");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Equality after [`fold_key`].
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Minimal HTML escaping for text placed into markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
