//! String formatting helpers: joining, positional templates and substring replacement.
//!
//! All three functions make a single left-to-right pass over their input. Text that
//! has been inserted is never scanned again, so a replacement or a filler that itself
//! contains a placeholder or the replaced substring cannot cascade.

use std::fmt::Display;

use itertools::Itertools;

/// Concatenates `items` in order, separated by `separator` (no trailing separator).
///
/// An empty input yields an empty string.
///
/// ```
/// assert_eq!(seqops::text::join(", ", ["a", "b", "c"]), "a, b, c");
/// assert_eq!(seqops::text::join(", ", Vec::<String>::new()), "");
/// ```
pub fn join<I>(separator: &str, items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items.into_iter().join(separator)
}

/// Substitutes positional placeholders `{0}`, `{1}`, ... in `template` with the
/// matching entry of `fillers`.
///
/// Every occurrence of a placeholder is replaced. Placeholders without a filler, and
/// braces that do not form a placeholder (including zero-padded indices such as
/// `{00}`), are copied verbatim.
///
/// ```
/// use seqops::text::format;
///
/// assert_eq!(format("{0} World, {0}!", &["Hi"]), "Hi World, Hi!");
/// assert_eq!(format("{0} and {1}", &[1]), "1 and {1}");
/// ```
pub fn format<D: Display>(template: &str, fillers: &[D]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let tail = &rest[open..];
        match parse_placeholder(tail) {
            Some((index, len)) if index < fillers.len() => {
                result.push_str(&fillers[index].to_string());
                rest = &tail[len..];
            }
            _ => {
                result.push('{');
                rest = &tail[1..];
            }
        }
    }
    result.push_str(rest);
    result
}

/// Parses `{N}` at the start of `s`, returning `N` and the placeholder length.
///
/// `N` must be written canonically: `{00}` or `{01}` are not placeholders.
fn parse_placeholder(s: &str) -> Option<(usize, usize)> {
    let close = s.find('}')?;
    let digits = &s[1..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    Some((digits.parse().ok()?, close + 1))
}

/// Replaces every non-overlapping occurrence of `from` in `text` with `to`.
///
/// Occurrences are located in the original text, left to right, so `to` may contain
/// `from` without the result growing beyond one substitution per original match. An
/// empty `from` matches nothing and returns `text` unchanged.
///
/// ```
/// use seqops::text::replace_all;
///
/// assert_eq!(replace_all("Hello, Hello World", "Hello", "Bonjour"), "Bonjour, Bonjour World");
/// assert_eq!(replace_all("aa", "a", "aa"), "aaaa");
/// ```
pub fn replace_all(text: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return text.to_string();
    }
    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    for (pos, _) in text.match_indices(from) {
        result.push_str(&text[last..pos]);
        result.push_str(to);
        last = pos + from.len();
    }
    result.push_str(&text[last..]);
    result
}
