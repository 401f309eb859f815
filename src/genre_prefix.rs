//! Removal of the redundant genre name which opens most genre descriptions.
//!
//! Wikipedia articles start by restating their subject in bold (“'''Hip
//! house''', also known as…”). When a description is shown underneath the
//! genre name, that restatement is noise.

use crate::wikitext::find_balanced;
use regex::{Regex, RegexBuilder};

/// Removes a leading restatement of `genre_name` from `description`.
///
/// Tried in order, the first match wins:
///
/// 1. A leading template which contains the genre name is removed entirely.
/// 2. A bold `The '''Name'''` is removed, along with a following `", "`.
/// 3. A bold `The '''Name''',` is removed.
/// 4. A plain `The Name` is removed.
///
/// The genre name is matched case-insensitively, treating runs of whitespace
/// and hyphens as interchangeable. Anything else is returned unchanged.
pub fn strip_genre_name_prefix<'a>(genre_name: &str, description: &'a str) -> &'a str {
    let Some(name) = name_pattern(genre_name) else {
        return description;
    };

    if description.starts_with("{{")
        && let Some(end) = find_balanced(description, b"{{", b"}}")
    {
        let span = &description[..end + 2];
        if build(&name).is_some_and(|re| re.is_match(span)) {
            log::trace!("removing leading template from description of '{genre_name}'");
            return description[end + 2..].trim_start();
        }
    }

    let bold = format!(r"^(?:The\s+)?'''{name}'''\s*");
    if let Some(m) = build(&bold).and_then(|re| re.find(description)) {
        let rest = &description[m.end()..];
        return rest.strip_prefix(", ").unwrap_or(rest);
    }

    let bold_comma = format!(r"^(?:The\s+)?'''{name}''',\s*");
    if let Some(m) = build(&bold_comma).and_then(|re| re.find(description)) {
        return &description[m.end()..];
    }

    let plain = format!(r"^(?:The\s+)?{name}\s*");
    if let Some(m) = build(&plain).and_then(|re| re.find(description)) {
        return &description[m.end()..];
    }

    description
}

/// Converts a genre name into a regular expression fragment where runs of
/// whitespace and hyphens match each other.
fn name_pattern(genre_name: &str) -> Option<String> {
    let words = genre_name
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|word| !word.is_empty())
        .map(regex::escape)
        .collect::<Vec<_>>();
    (!words.is_empty()).then(|| words.join(r"[\s\-]+"))
}

/// Compiles a case-insensitive pattern.
fn build(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .inspect_err(|err| log::warn!("bad genre name pattern: {err}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_label() {
        assert_eq!(
            strip_genre_name_prefix(
                "Hip house",
                "'''Hip house''', also known as '''house rap''', is a genre."
            ),
            "also known as '''house rap''', is a genre."
        );
        assert_eq!(
            strip_genre_name_prefix("Hip house", "The '''hip-house''' genre"),
            "genre",
            "hyphens and spaces should be interchangeable"
        );
    }

    #[test]
    fn different_label() {
        let description = "'''Donk''', also known as '''bouncy house''', is a genre.";
        assert_eq!(strip_genre_name_prefix("Scouse house", description), description);
    }

    #[test]
    fn leading_template() {
        assert_eq!(
            strip_genre_name_prefix(
                "City pop",
                "{{Nihongo|'''City pop'''|シティ・ポップ|shiti poppu}} is a loosely defined genre."
            ),
            "is a loosely defined genre."
        );
        assert_eq!(
            strip_genre_name_prefix(
                "City pop",
                "{{Nihongo|{{lang|en|'''City pop'''}}|シティ・ポップ}} is a genre."
            ),
            "is a genre.",
            "nested templates should be skipped over"
        );
        let description = "{{Short description|Music genre}}'''City pop''' is a genre.";
        assert_eq!(
            strip_genre_name_prefix("City pop", description),
            description,
            "a leading template without the name is not a prefix"
        );
    }

    #[test]
    fn unbalanced_template() {
        assert_eq!(
            strip_genre_name_prefix("City pop", "{{Nihongo|'''City pop'''|シティ・ポップ"),
            "{{Nihongo|'''City pop'''|シティ・ポップ"
        );
    }

    #[test]
    fn plain_label() {
        assert_eq!(
            strip_genre_name_prefix("Eurobeat", "The Eurobeat style is fast."),
            "style is fast."
        );
    }

    #[test]
    fn idempotent() {
        let once = strip_genre_name_prefix("Hip house", "'''Hip house''', also known as house rap");
        assert_eq!(strip_genre_name_prefix("Hip house", once), once);
    }

    #[test]
    fn special_characters() {
        assert_eq!(
            strip_genre_name_prefix("Drum (and) bass+", "'''Drum (and) bass+''' is fast."),
            "is fast."
        );
        assert_eq!(strip_genre_name_prefix("", "'''''' x"), "'''''' x");
    }
}
