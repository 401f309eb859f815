//! Types and functions for normalising MediaWiki page titles.

use crate::common::{uc_first, url_encode};
use html_escape::decode_html_entities;
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization as _;

/// The base URL used for wiki links when the caller did not provide one.
pub const DEFAULT_WIKI_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

/// A normalised main-namespace page title.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Title {
    /// The page name, with the first letter capitalised.
    name: String,
    /// The section heading, if any.
    fragment: Option<String>,
}

impl Title {
    /// Creates a new title from link target text.
    pub fn new(text: &str) -> Self {
        let text = text.trim_start_matches(':');
        let (name, fragment) = text
            .split_once('#')
            .map_or((text, None), |(name, fragment)| (name, Some(fragment)));
        Self {
            name: uc_first(&normalize(name)),
            fragment: fragment
                .map(normalize)
                .filter(|fragment| !fragment.is_empty())
                .map(Cow::into_owned),
        }
    }

    /// The page name, without any fragment.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The section fragment, if any.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// The page name, with its fragment if there is one.
    pub fn full_text(&self) -> Cow<'_, str> {
        match &self.fragment {
            Some(fragment) => Cow::Owned(format!("{}#{fragment}", self.name)),
            None => Cow::Borrowed(&self.name),
        }
    }

    /// Creates the URL for this title on the wiki whose article path is
    /// `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        let mut url = base_url.to_string();
        if !url.ends_with('/') {
            url.push('/');
        }
        url += &url_encode(&self.name.replace(' ', "_")).to_string();
        if let Some(fragment) = &self.fragment {
            url.push('#');
            url += &url_encode(&fragment.replace(' ', "_")).to_string();
        }
        url
    }
}

impl core::fmt::Display for Title {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.full_text())
    }
}

/// Returns true if the given character `c` is a bidirectional text control
/// character.
fn bidi(c: char) -> bool {
    ('\u{200e}'..='\u{200f}').contains(&c) || ('\u{202a}'..='\u{202e}').contains(&c)
}

/// Normalises a title text part by decoding HTML entities, composing
/// Unicode, and converting runs of whitespace + underscore to a single space
/// character.
pub fn normalize(text: &str) -> Cow<'_, str> {
    let decoded = decode_html_entities(text);
    let decoded = if decoded.nfc().eq(decoded.chars()) {
        decoded
    } else {
        Cow::Owned(decoded.nfc().collect())
    };
    let mut out = String::new();
    let mut flushed = 0;
    let mut iter = decoded.char_indices().peekable();

    while let Some((index, c)) = iter.next() {
        // Peek to avoid switching to owned-mode when encountering a single
        // space
        if trimmable(c) && (c != ' ' || matches!(iter.peek(), Some((_, c)) if trimmable(*c))) {
            while iter.next_if(|(_, c)| trimmable(*c)).is_some() {}

            // This acts like `trim`, not emitting a space at the start
            // (`index == 0`) or end (`peek().is_none()`) of the text.
            if let Some((next_index, _)) = iter.peek() {
                out += &decoded[flushed..index];
                flushed = *next_index;
                if index != 0 && spacelike(c) {
                    out.push(' ');
                }
            }
        }
    }

    if flushed == 0 {
        match decoded {
            Cow::Borrowed(b) => Cow::Borrowed(b.trim_matches(trimmable)),
            Cow::Owned(o) => Cow::Owned(o.trim_matches(trimmable).to_string()),
        }
    } else {
        out += decoded[flushed..].trim_end_matches(trimmable);
        Cow::Owned(out)
    }
}

/// Returns true if the character `c` is considered like whitespace in title
/// text.
fn spacelike(c: char) -> bool {
    c == '_' || c.is_whitespace()
}

/// Returns true if the character `c` is trimmable in title text.
fn trimmable(c: char) -> bool {
    bidi(c) || spacelike(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() {
        assert_eq!(super::normalize("A b"), Cow::Borrowed("A b"));
        assert_eq!(super::normalize("A_b"), "A b");
        assert_eq!(super::normalize("A__  __b"), "A b");
        assert_eq!(super::normalize("   A b   "), Cow::Borrowed("A b"));
        assert_eq!(super::normalize("\u{200e}A b   \u{202e}"), "A b");
        assert_eq!(super::normalize("Caf&eacute;"), "Café");
        assert_eq!(super::normalize("Cafe\u{301}"), "Café");
    }

    #[test]
    fn title() {
        let title = Title::new("hip_house#History of  hip house");
        assert_eq!(title.name(), "Hip house");
        assert_eq!(title.fragment(), Some("History of hip house"));
        assert_eq!(title.full_text(), "Hip house#History of hip house");
        assert_eq!(
            title.url("https://en.wikipedia.org/wiki"),
            "https://en.wikipedia.org/wiki/Hip_house#History_of_hip_house"
        );
        assert_eq!(
            Title::new("Drum & bass").url(DEFAULT_WIKI_BASE_URL),
            "https://en.wikipedia.org/wiki/Drum_%26_bass"
        );
    }
}
