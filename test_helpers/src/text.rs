//! Normalisation for values captured from `rstest-bdd` step placeholders.

/// Strips surrounding whitespace and one layer of matching quotes.
///
/// Feature files quote string arguments so that empty and padded values stay
/// visible; steps call this before using the value.
///
/// ```
/// use test_helpers::text::unquote;
///
/// assert_eq!(unquote(r#" "was null" "#), "was null");
/// assert_eq!(unquote("''"), "");
/// assert_eq!(unquote("bare"), "bare");
/// ```
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| {
            trimmed
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
        .unwrap_or(trimmed)
}
