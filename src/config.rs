//! Renderer configuration.
//!
//! A configuration file is a JSON object. Every key is optional:
//!
//! ```json
//! {
//!   "wiki_base_url": "https://en.wikipedia.org/wiki/",
//!   "genres": "genres.json",
//!   "limits": { "max_expansion_depth": 20 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A configuration loading error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("could not read '{path}': {err}")]
    Io {
        /// The path to the file.
        path: PathBuf,
        /// The error.
        #[source]
        err: std::io::Error,
    },

    /// The configuration file is not valid.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renderer configuration.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The article path of the wiki that links point to.
    pub wiki_base_url: Option<String>,
    /// A JSON file mapping page titles to genre IDs.
    pub genres: Option<PathBuf>,
    /// Resource limits.
    pub limits: Limits,
}

impl Config {
    /// Reads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| Error::Io {
            path: path.to_path_buf(),
            err,
        })?;
        Self::from_json(&json)
    }

    /// Reads a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Resource limits for a single render.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// The maximum number of times template output may be fed back into the
    /// parser within a single template.
    pub max_expansion_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_expansion_depth: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.limits.max_expansion_depth, 20);
    }

    #[test]
    fn partial() {
        let config =
            Config::from_json(r#"{ "limits": { "max_expansion_depth": 3 }, "genres": "g.json" }"#)
                .unwrap();
        assert_eq!(config.limits.max_expansion_depth, 3);
        assert_eq!(config.genres.as_deref(), Some(Path::new("g.json")));
        assert_eq!(config.wiki_base_url, None);
    }

    #[test]
    fn unknown_key() {
        assert!(
            matches!(Config::from_json(r#"{ "nope": 1 }"#), Err(Error::Json(_))),
            "unknown keys should be rejected"
        );
    }
}
