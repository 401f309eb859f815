//! Small helpers shared by the template handlers and the title code.

/// Percent-encodes a URL part.
#[inline]
pub fn url_encode(input: &str) -> percent_encoding::PercentEncode<'_> {
    percent_encoding::utf8_percent_encode(input, &ALPHABET)
}

/// The alphabet of characters to percent-encode when encoding URLs.
const ALPHABET: percent_encoding::AsciiSet = percent_encoding::CONTROLS
    .add(b'%')
    .add(b'#')
    .add(b'\'')
    .add(b'"')
    .add(b'&')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b' ');

/// Returns true if a template flag value means “yes”.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "on" | "true" | "1"
    )
}

/// Capitalises the first character of `text`.
pub fn uc_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encode() {
        assert_eq!(url_encode("Rock_&_roll").to_string(), "Rock_%26_roll");
        assert_eq!(url_encode("K-pop").to_string(), "K-pop");
        assert_eq!(url_encode("Что?").to_string(), "%D0%A7%D1%82%D0%BE%3F");
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy("yes"));
        assert!(is_truthy(" Y "));
        assert!(!is_truthy("no"));
        assert!(!is_truthy(""));
    }
}
