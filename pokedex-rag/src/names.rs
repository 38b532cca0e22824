//! Name and text normalization helpers.
//!
//! PokeAPI identifiers use hyphens as word separators (`moon-stone`,
//! `mr-mime`). Everything that ends up in rendered text goes through
//! [`clean_name`] first.

/// Placeholder for a name the source did not provide.
pub const UNKNOWN_NAME: &str = "unknown";

/// Replace hyphens with spaces. Missing or empty names become `"unknown"`.
pub fn clean_name(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name.replace('-', " "),
        _ => UNKNOWN_NAME.to_string(),
    }
}

/// Upper-case the first letter of every alphabetic run and lower-case the rest.
///
/// `"mr mime"` becomes `"Mr Mime"`, `"porygon z"` becomes `"Porygon Z"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alphabetic = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}

/// Upper-case the first character and lower-case the remainder.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Collapse every run of whitespace into a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip the line and form feeds PokeAPI embeds in flavor text.
pub fn clean_flavor_text(text: &str) -> String {
    text.replace(['\n', '\x0c'], " ").trim().to_string()
}

/// Canonical form used to compare move names typed by users with stored ones.
pub fn normalize_move(name: &str) -> String {
    collapse_whitespace(&name.to_lowercase().replace('-', " "))
}
