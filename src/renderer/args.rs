//! Template argument lookup.

use crate::{common::is_truthy, wikitext::Parameter};
use std::{collections::HashMap, str::FromStr};

/// The arguments of one template call, indexed by key.
///
/// Unnamed arguments are numbered from 1 in source order. An argument
/// explicitly named with a number (`2=…`) occupies the same slot as the
/// unnamed argument with that number, but does not advance the unnamed
/// counter. When two arguments have the same key, the later one wins.
#[derive(Debug)]
pub struct Args<'a> {
    /// The name of the template, as written.
    name: &'a str,
    /// The raw parameters, in source order.
    raw: &'a [Parameter],
    /// Key to index into [`Self::raw`], and whether the key was explicit.
    indices: HashMap<String, (usize, bool)>,
    /// The last used unnamed key.
    last_unnamed_key: usize,
}

impl<'a> Args<'a> {
    /// Indexes the arguments of a call to template `name`.
    pub fn new(name: &'a str, raw: &'a [Parameter]) -> Self {
        let mut indices = HashMap::with_capacity(raw.len());
        let mut last_unnamed_key = 0;
        for (index, parameter) in raw.iter().enumerate() {
            let (key, is_named) = if let Some(name) = &parameter.name {
                (name.trim().to_string(), true)
            } else {
                last_unnamed_key += 1;
                (last_unnamed_key.to_string(), false)
            };
            indices.insert(key, (index, is_named));
        }
        Self {
            name,
            raw,
            indices,
            last_unnamed_key,
        }
    }

    /// The name of the template, as written.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the value of the argument with the given key. Named arguments
    /// are trimmed; unnamed arguments are returned exactly as written.
    pub fn get_raw(&self, key: &str) -> Option<&'a str> {
        self.indices.get(key).map(|&(index, is_named)| {
            let value = self.raw[index].value.as_str();
            if is_named { value.trim() } else { value }
        })
    }

    /// Returns the trimmed value of the argument with the given key.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.get_raw(key).map(str::trim)
    }

    /// Returns the trimmed value of the argument with the given key, if it is
    /// not blank.
    pub fn nonempty(&self, key: &str) -> Option<&'a str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Returns the first non-blank value among the given keys, in order of
    /// preference.
    pub fn first_of(&self, keys: &[&str]) -> Option<&'a str> {
        keys.iter().find_map(|key| self.nonempty(key))
    }

    /// Returns the value of the positional argument at the 1-based `index`,
    /// trimmed and not blank.
    pub fn at(&self, index: usize) -> Option<&'a str> {
        self.nonempty(&index.to_string())
    }

    /// Returns true if the argument with the given key is a “yes” value.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy)
    }

    /// Parses the argument with the given key.
    pub fn parse<T: FromStr>(&self, key: &str) -> Option<T> {
        self.nonempty(key).and_then(|value| value.parse().ok())
    }

    /// Returns the trimmed values of the positional arguments 1, 2, 3, … up
    /// to the first missing one.
    pub fn positional(&self) -> Vec<&'a str> {
        (1..)
            .map_while(|index| self.get(&index.to_string()))
            .collect()
    }

    /// The number of unnamed arguments.
    pub fn unnamed_len(&self) -> usize {
        self.last_unnamed_key
    }

    /// Returns true if there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let raw = [Parameter::named("1", "a"), Parameter::named("1", "b")];
        let args = Args::new("t", &raw);
        assert_eq!(args.get("1"), Some("b"));

        let raw = [Parameter::positional("a"), Parameter::named("1", "b")];
        assert_eq!(Args::new("t", &raw).get("1"), Some("b"));

        let raw = [Parameter::named("1", "b"), Parameter::positional("a")];
        assert_eq!(Args::new("t", &raw).get("1"), Some("a"));
    }

    #[test]
    fn numbering() {
        let raw = [
            Parameter::positional(" one "),
            Parameter::named("lit", " literal "),
            Parameter::named(" 3 ", "three"),
            Parameter::positional("two"),
        ];
        let args = Args::new("t", &raw);
        assert_eq!(args.get_raw("1"), Some(" one "), "unnamed values keep spaces");
        assert_eq!(args.get("1"), Some("one"));
        assert_eq!(args.get_raw("lit"), Some("literal"), "named values are trimmed");
        assert_eq!(args.get("2"), Some("two"), "numbered names do not advance the counter");
        assert_eq!(args.get("3"), Some("three"));
        assert_eq!(args.positional(), ["one", "two", "three"]);
        assert_eq!(args.unnamed_len(), 2);
    }

    #[test]
    fn helpers() {
        let raw = [
            Parameter::positional(""),
            Parameter::named("df", "y"),
            Parameter::named("filename", "Song.ogg"),
            Parameter::named("n", "12"),
        ];
        let args = Args::new("t", &raw);
        assert_eq!(args.nonempty("1"), None);
        assert_eq!(args.at(1), None);
        assert_eq!(args.first_of(&["1", "filename"]), Some("Song.ogg"));
        assert!(args.flag("df"));
        assert!(!args.flag("missing"));
        assert_eq!(args.parse::<i32>("n"), Some(12));
        assert_eq!(args.parse::<i32>("df"), None);
    }
}
