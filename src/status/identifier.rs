//! Conversion of reason phrases into type identifiers.

/// Convert a reason phrase into an identifier.
///
/// Each space-separated word gets its first character upper-cased, the words
/// are joined, and every character outside `[0-9A-Za-z_]` is dropped.
///
/// # Examples
///
/// ```
/// use http_errors::to_identifier;
///
/// assert_eq!(to_identifier("Not Found"), "NotFound");
/// assert_eq!(to_identifier("I'm a Teapot"), "ImATeapot");
/// ```
pub fn to_identifier(phrase: &str) -> String {
    phrase
        .split(' ')
        .flat_map(|word| {
            let mut chars = word.chars();
            let first = chars.next().map(|c| c.to_uppercase());
            first.into_iter().flatten().chain(chars)
        })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
