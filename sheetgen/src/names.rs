//! Name transformations applied to raw sheet labels.
//!
//! The casing rules here are intentionally narrow. `var_case` lower-cases
//! exactly the first character and leaves the rest alone; it is not a general
//! camel-case conversion, and generated identifiers depend on that.

/// Lower-cases exactly the first character.
pub fn var_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-cases exactly the first character.
pub fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derives the entity name from the entity-name cell: whitespace-separated
/// parts are joined with the first part unchanged and every later part
/// lower-cased on its first character.
pub fn entity_name(raw: &str) -> String {
    raw.split_whitespace()
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part.to_string()
            } else {
                var_case(part)
            }
        })
        .collect()
}

/// Derives a field identifier from the name cell: slash-separated tokens
/// become separate words, each word keeps a leading capital, and the words
/// are concatenated.
pub fn field_identifier(raw: &str) -> String {
    raw.replace('/', " ")
        .split_whitespace()
        .map(upper_first)
        .collect()
}

/// Derives an enum (or enum value) identifier: slash-separated tokens become
/// words, the whole label is lower-cased, and the words are joined with every
/// word after the first re-capitalized.
pub fn member_identifier(raw: &str) -> String {
    let lowered = raw.replace('/', " ").to_lowercase();
    lowered
        .split_whitespace()
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part.to_string()
            } else {
                upper_first(part)
            }
        })
        .collect()
}

/// Naive English pluralization for human-readable labels.
pub fn pluralize(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let lower = value.to_lowercase();
    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{value}es");
    }
    if let Some(stem) = value.strip_suffix('y') {
        let before = stem.chars().last();
        if before.is_some_and(|c| !matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')) {
            return format!("{stem}ies");
        }
    }
    format!("{value}s")
}
