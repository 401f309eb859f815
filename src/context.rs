//! The per-render execution context and the genre index it carries.

use crate::title::DEFAULT_WIKI_BASE_URL;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use time::OffsetDateTime;
use unicase::UniCase;

/// A reference to a node in the genre graph.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GenreRef(pub String);

impl GenreRef {
    /// The identifier of the genre.
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// A read-only mapping from Wikipedia page titles to genres.
pub trait GenreIndex: Sync {
    /// Finds the genre whose page has the given normalised title. The lookup
    /// is case-insensitive.
    fn lookup(&self, title: &str) -> Option<GenreRef>;
}

/// A genre index with no genres in it.
impl GenreIndex for () {
    fn lookup(&self, _: &str) -> Option<GenreRef> {
        None
    }
}

/// A genre index backed by an in-memory map of page titles.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(from = "HashMap<String, GenreRef>")]
pub struct GenreTitles(HashMap<UniCase<String>, GenreRef>);

impl GenreTitles {
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads an index from a JSON object of `{ "Page title": "genre id" }`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Adds a page title to the index.
    pub fn insert(&mut self, title: impl Into<String>, genre: GenreRef) {
        self.0.insert(UniCase::new(title.into()), genre);
    }

    /// The number of titles in the index.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, GenreRef>> for GenreTitles {
    fn from(map: HashMap<String, GenreRef>) -> Self {
        Self(map.into_iter().map(|(k, v)| (UniCase::new(k), v)).collect())
    }
}

impl GenreIndex for GenreTitles {
    fn lookup(&self, title: &str) -> Option<GenreRef> {
        self.0.get(&UniCase::new(title.to_string())).cloned()
    }
}

/// Everything a template handler may know about the world outside of its
/// own arguments.
///
/// A context is created once per top-level render so that every nested
/// template sees the same clock.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// The article path of the wiki that links point to.
    wiki_base_url: Option<&'a str>,
    /// The current time.
    now: OffsetDateTime,
    /// The genre index used to resolve links.
    genres: &'a dyn GenreIndex,
}

impl<'a> Context<'a> {
    /// Creates a new context using the system clock.
    pub fn new(genres: &'a dyn GenreIndex) -> Self {
        Self {
            wiki_base_url: None,
            now: OffsetDateTime::now_utc(),
            genres,
        }
    }

    /// Replaces the clock with a fixed time.
    #[must_use]
    pub fn with_now(self, now: OffsetDateTime) -> Self {
        Self { now, ..self }
    }

    /// Sets the article path of the wiki that links point to.
    #[must_use]
    pub fn with_wiki_base_url(self, wiki_base_url: Option<&'a str>) -> Self {
        Self {
            wiki_base_url,
            ..self
        }
    }

    /// The current time.
    pub fn now(&self) -> OffsetDateTime {
        self.now
    }

    /// The configured wiki base URL, if any.
    pub fn configured_wiki_base_url(&self) -> Option<&'a str> {
        self.wiki_base_url
    }

    /// The wiki base URL, falling back to English Wikipedia.
    pub fn wiki_base_url(&self) -> &'a str {
        self.wiki_base_url.unwrap_or(DEFAULT_WIKI_BASE_URL)
    }

    /// Looks up a genre by normalised page title.
    pub fn lookup_genre(&self, title: &str) -> Option<GenreRef> {
        self.genres.lookup(title)
    }
}

impl core::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Context")
            .field("wiki_base_url", &self.wiki_base_url)
            .field("now", &self.now)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_titles() {
        let genres = GenreTitles::from_json(r#"{ "Hip house": "hip-house", "K-pop": "kpop" }"#)
            .unwrap();
        assert_eq!(genres.len(), 2);
        assert_eq!(
            genres.lookup("hip HOUSE"),
            Some(GenreRef("hip-house".into())),
            "lookup should ignore case"
        );
        assert_eq!(genres.lookup("House"), None);
    }

    #[test]
    fn wiki_base_url_fallback() {
        let context = Context::new(&());
        assert_eq!(context.wiki_base_url(), DEFAULT_WIKI_BASE_URL);
        let context = context.with_wiki_base_url(Some("https://wiki.example/w/"));
        assert_eq!(context.wiki_base_url(), "https://wiki.example/w/");
    }
}
