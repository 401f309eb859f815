//! Rendering of Wikipedia music genre descriptions.
//!
//! Genre descriptions are short excerpts of Wikipedia articles. They are
//! parsed into a small node tree ([`wikitext`]), the redundant restatement of
//! the genre name is removed ([`strip_genre_name_prefix`]), and the tree is
//! rendered by a [`Renderer`] which interprets the templates the descriptions
//! use. Links to other genres become references into the genre index instead
//! of links to Wikipedia.
//!
//! ```
//! use genre_wiki::{Context, GenreRef, GenreTitles, Renderer, SimpleParser};
//!
//! let mut genres = GenreTitles::new();
//! genres.insert("House music", GenreRef("house".into()));
//! let renderer = Renderer::new(&SimpleParser, Context::new(&genres));
//! let rendered = renderer.render_description(
//!     Some("Hip house"),
//!     "'''Hip house''', also known as '''house rap''', mixes [[House music|house]] and rap.",
//! );
//! assert_eq!(
//!     rendered.to_html(),
//!     r#"also known as <b>house rap</b>, mixes <a class="genre" data-genre="house">house</a> and rap."#
//! );
//! ```

pub use config::{Config, Limits};
pub use context::{Context, GenreIndex, GenreRef, GenreTitles};
pub use genre_prefix::strip_genre_name_prefix;
pub use hangul::{System, romanize, romanize_hangul};
pub use renderer::{Error, Rendered, Renderer, Style};
pub use wikitext::{Node, Parameter, Parse, SimpleParser};

mod common;
pub mod config;
pub mod context;
pub mod date;
pub mod genre_prefix;
pub mod hangul;
pub mod numbers;
pub mod renderer;
pub mod title;
pub mod wikitext;
