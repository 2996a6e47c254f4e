//! Naming convention utilities for code generation.
//!
//! Input keys come from arbitrary JSON, so they may be snake_case,
//! kebab-case, space separated, camelCase, or a mix of all four.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `user_name` | [`to_pascal_case`] | `UserName` |
//! | `user-name` | [`to_pascal_case`] | `UserName` |
//! | `userName` | [`to_pascal_case`] | `UserName` |
//! | `user name` | [`split_words`] | `["user", "name"]` |

/// Split a key into words.
///
/// A new word starts after `_`, `-` or a space (the separator is dropped),
/// and before any uppercase letter that is not the first character.
///
/// # Examples
///
/// ```
/// use structgen_core::codegen::naming::split_words;
///
/// assert_eq!(split_words("user_id-field"), vec!["user", "id", "field"]);
/// assert_eq!(split_words("userName"), vec!["user", "Name"]);
/// assert!(split_words("__").is_empty());
/// ```
pub fn split_words(key: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in key.char_indices() {
        if matches!(c, '_' | '-' | ' ') {
            if let Some(s) = start.take() {
                words.push(&key[s..i]);
            }
        } else if i > 0 && c.is_uppercase() {
            if let Some(s) = start.take() {
                words.push(&key[s..i]);
            }
            start = Some(i);
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(s) = start {
        words.push(&key[s..]);
    }

    words
}

/// Convert an arbitrary key to a PascalCase identifier.
///
/// Each word is rendered with its first character uppercased and the rest
/// lowercased. Every uppercase letter starts a word of its own, so
/// `HTTP_status` becomes `HTTPStatus`. Keys that collapse to the same
/// identifier are not disambiguated.
///
/// # Examples
///
/// ```
/// use structgen_core::codegen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("user_name"), "UserName");
/// assert_eq!(to_pascal_case("user-name"), "UserName");
/// assert_eq!(to_pascal_case("userName"), "UserName");
/// assert_eq!(to_pascal_case(""), "");
/// ```
pub fn to_pascal_case(key: &str) -> String {
    split_words(key).into_iter().map(capitalize_word).collect()
}

/// Uppercase the first character and lowercase the rest.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Whether `s` can be used as a bare identifier in C-family languages.
///
/// # Examples
///
/// ```
/// use structgen_core::codegen::naming::is_identifier;
///
/// assert!(is_identifier("userName"));
/// assert!(is_identifier("_private"));
/// assert!(!is_identifier("user-name"));
/// assert!(!is_identifier("1st"));
/// ```
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first == '_' || first == '$' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c == '$' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
