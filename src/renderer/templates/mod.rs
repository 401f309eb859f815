//! Template handlers and the registry which dispatches to them.
//!
//! Only the templates which actually appear in genre descriptions are
//! supported. Templates which exist only to add page furniture (banners,
//! infoboxes, references) are recognised and render nothing; maintenance
//! templates render a small inline flag; anything else is an error, so that
//! new templates get noticed instead of silently disappearing.

// Clippy: Handler signatures all conform to `TemplateFn`; handler modules are
// clearer with wildcard import.
#![allow(clippy::unnecessary_wraps, clippy::wildcard_imports)]

pub(super) use links::wiki_link;

use super::{Args, Rendered, Result, Scope, Style};
use crate::common::is_truthy;
use std::{collections::HashMap, str::FromStr, sync::LazyLock};

mod dates;
mod ipa;
mod language;
mod links;
mod maintenance;
mod measure;
mod media;
mod numeric;
mod text;

/// The result of a template handler.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expansion {
    /// Final output.
    Final(Rendered),
    /// Wikitext which must be parsed and rendered again.
    Reparse(String),
}

impl From<Rendered> for Expansion {
    fn from(rendered: Rendered) -> Self {
        Self::Final(rendered)
    }
}

/// The function signature of a template handler.
pub type TemplateFn = fn(&Args<'_>, &Scope<'_, '_>) -> Result<Expansion>;

/// A registry entry.
struct Entry {
    /// The template names which use the handler.
    aliases: &'static [&'static str],
    /// The handler.
    handler: TemplateFn,
}

/// Shorthand for a registry entry.
macro_rules! entry {
    ($handler:path => $($alias:literal),+ $(,)?) => {
        Entry {
            aliases: &[$($alias),+],
            handler: $handler,
        }
    };
}

/// All supported templates.
static TEMPLATES: &[Entry] = &[
    // Dates
    entry!(dates::age => "Age", "Age in years"),
    entry!(dates::date => "Birth date", "DOB", "Death date", "Start date", "End date", "Release date"),
    entry!(dates::birth_date_and_age => "Birth date and age", "BDA", "Birth-date and age"),
    entry!(dates::death_date_and_age => "Death date and age", "DDA"),
    entry!(dates::birth_year_and_age => "Birth year and age", "BYA"),
    entry!(dates::death_year_and_age => "Death year and age"),
    entry!(dates::start_date_and_age => "Start date and age", "Start date and years ago"),
    entry!(dates::birth_based_on_age_as_of_date => "Birth based on age as of date", "BBAD"),
    entry!(dates::time_ago => "Time ago", "Timeago"),
    entry!(dates::as_of => "As of", "Asof"),
    entry!(dates::circa => "Circa", "c."),
    entry!(dates::floruit => "Floruit", "fl."),
    entry!(dates::decade => "Decade"),
    entry!(dates::current_year => "Current year", "CURRENTYEAR"),
    // Language
    entry!(language::nihongo => "Nihongo"),
    entry!(language::nihongo2 => "Nihongo2"),
    entry!(language::nihongo3 => "Nihongo3"),
    entry!(language::nihongo_foot => "Nihongo foot"),
    entry!(language::lang => "Lang"),
    entry!(language::langx => "Langx"),
    entry!(language::langnf => "Langnf"),
    entry!(language::zh => "Zh"),
    entry!(language::korean => "Korean"),
    entry!(language::korean_auto => "Korean/auto"),
    entry!(language::etymology => "Etymology", "Ety"),
    entry!(language::post_nominals => "Post-nominals", "Postnominals"),
    entry!(language::transl => "Transl", "Transliteration", "Translit"),
    entry!(language::lit => "Lit", "Literally", "Lit."),
    entry!(language::gloss => "Gloss"),
    entry!(language::ipa => "IPA"),
    entry!(ipa::ipac_en => "IPAc-en", "IPAc"),
    // Links
    entry!(links::interlanguage => "Ill", "Interlanguage link", "Interlanguage link multi"),
    entry!(links::section_link => "Section link", "Slink"),
    entry!(links::wiktionary => "Wikt", "Wiktionary"),
    entry!(links::url => "URL"),
    entry!(links::official_website => "Official website", "Official"),
    // Measurement
    entry!(measure::convert => "Convert", "Cvt"),
    // Maintenance and page furniture
    entry!(maintenance::flag_span => "Citation needed span", "CNS", "Clarify span"),
    entry!(maintenance::drop => "Short description", "Use dmy dates", "Use mdy dates",
        "Use British English", "Use American English", "EngvarB", "Italic title", "DISPLAYTITLE",
        "Good article", "Featured article", "Pp-semi-indef", "Pp-protected", "Toc limit", "TOC right",
        "Clear", "-", "Anchor", "Multiple issues", "More citations needed", "Refimprove", "Unreferenced",
        "Original research", "Cleanup", "Copy edit", "Update", "Expand section", "Infobox",
        "Infobox music genre", "Infobox musical artist", "Reflist", "Refn", "Efn", "Sfn", "Sfnp",
        "Harvnb", "Notelist", "Cite web", "Cite book", "Cite news", "Cite journal",
        "Cite magazine", "Cite AV media", "Main", "Main article", "See also", "Further", "About",
        "Redirect", "Distinguish", "Other uses", "For", "Authority control", "Portal", "Portal bar",
        "Commons category", "Stub", "Music-genre-stub", "Rock-music-genre-stub", "Hiphop-genre-stub",
        "Electronic-music-genre-stub", "Pop-music-genre-stub", "Jazz-genre-stub",
        "Metal-genre-stub", "Folk-music-stub", "Dance-music-stub", "Music-stub"),
    // Media
    entry!(media::audio => "Audio"),
    entry!(media::listen => "Listen"),
    entry!(media::music_symbol => "Music", "Flat", "Sharp", "Natural"),
    // Numbers
    entry!(numeric::ordinal => "Ordinal"),
    entry!(numeric::frac => "Frac", "Fraction"),
    entry!(numeric::val => "Val"),
    entry!(numeric::us_dollars => "US$", "USD"),
    entry!(numeric::number_to_word => "Number to word", "Spellnum"),
    // Text
    entry!(text::nowrap => "Nowrap", "Nobr"),
    entry!(text::small => "Small"),
    entry!(text::strong => "Strong"),
    entry!(text::em => "Em"),
    entry!(text::nbsp => "Nbsp"),
    entry!(text::ndash => "Ndash", "En dash"),
    entry!(text::mdash => "Mdash", "Em dash"),
    entry!(text::spaced_ndash => "Snd", "Spaced ndash", "Spnd", "Dash"),
    entry!(text::middot => "Middot", "·", "Dot"),
    entry!(text::bull => "Bull", "Bullet", "•"),
    entry!(text::pipe => "!"),
    entry!(text::equals => "="),
    entry!(text::apostrophe => "'"),
    entry!(text::hlist => "Hlist"),
    entry!(text::flatlist => "Flatlist"),
    entry!(text::plainlist => "Plainlist"),
    entry!(text::unbulleted_list => "Unbulleted list", "UBL"),
    entry!(text::quote => "Quote", "Blockquote", "Quotation"),
    entry!(text::abbr => "Abbr", "Tooltip", "Abbreviation"),
    entry!(text::sic => "Sic"),
    entry!(text::not_a_typo => "Not a typo", "Proper name"),
];

/// The template registry, keyed by canonical name.
static REGISTRY: LazyLock<HashMap<String, TemplateFn>> = LazyLock::new(|| {
    let mut registry = HashMap::new();
    let generated = language::LANGUAGES
        .keys()
        .flat_map(|code| {
            [
                (format!("lang-{code}"), language::langx as TemplateFn),
                (format!("ipa-{code}"), language::ipa as TemplateFn),
            ]
        })
        .chain(
            maintenance::FLAGS
                .keys()
                .map(|name| ((*name).to_string(), maintenance::flag as TemplateFn)),
        );

    for (alias, handler) in TEMPLATES
        .iter()
        .flat_map(|entry| {
            entry
                .aliases
                .iter()
                .map(move |alias| ((*alias).to_string(), entry.handler))
        })
        .chain(generated)
    {
        registry.insert(canonical_name(&alias), handler);
    }
    registry
});

/// Converts a template name into its registry key by removing any
/// `Template:` prefix, converting spaces to underscores, and lowercasing.
pub fn canonical_name(name: &str) -> String {
    let name = name.trim();
    let name = match name.get(..9) {
        Some(prefix) if prefix.eq_ignore_ascii_case("template:") => name[9..].trim_start(),
        _ => name,
    };
    name.replace(' ', "_").to_lowercase()
}

/// Finds the handler for the template with the given name.
pub(super) fn lookup(name: &str) -> Option<TemplateFn> {
    REGISTRY.get(&canonical_name(name)).copied()
}

/// Returns true if the template with the given name is supported.
pub fn is_known_template(name: &str) -> bool {
    lookup(name).is_some()
}

/// Parses the positional argument at the 1-based `index`.
fn number_at<T: FromStr>(args: &Args<'_>, index: usize) -> Option<T> {
    args.parse(&index.to_string())
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use crate::{
        context::{Context, GenreRef, GenreTitles},
        renderer::{Error, Renderer},
        wikitext::{Node, Parameter, Parse as _, SimpleParser},
    };
    use std::{collections::HashSet, sync::LazyLock};
    use time::macros::datetime;

    /// Genres known to the test renders.
    static GENRES: LazyLock<GenreTitles> = LazyLock::new(|| {
        let mut genres = GenreTitles::new();
        genres.insert("Hip house", GenreRef("hip-house".into()));
        genres.insert("House music", GenreRef("house".into()));
        genres.insert("K-pop", GenreRef("k-pop".into()));
        genres
    });

    /// A context with a fixed clock and the test genres.
    pub(crate) fn context() -> Context<'static> {
        Context::new(&*GENRES).with_now(datetime!(2024-03-15 12:00:00 UTC))
    }

    /// Renders some Wikitext to HTML with a fixed clock.
    #[track_caller]
    pub(crate) fn render(wikitext: &str) -> String {
        let _ = env_logger::try_init();
        Renderer::new(&SimpleParser, context())
            .render_wikitext(wikitext)
            .unwrap_or_else(|err| panic!("rendering {wikitext:?} failed: {err}"))
            .to_html()
    }

    /// Renders some Wikitext to plain text with a fixed clock.
    #[track_caller]
    pub(crate) fn render_text(wikitext: &str) -> String {
        let _ = env_logger::try_init();
        Renderer::new(&SimpleParser, context())
            .render_wikitext(wikitext)
            .unwrap_or_else(|err| panic!("rendering {wikitext:?} failed: {err}"))
            .plain_text()
    }

    #[test]
    fn no_duplicate_aliases() {
        let mut seen = HashSet::new();
        for alias in TEMPLATES.iter().flat_map(|entry| entry.aliases) {
            assert!(
                seen.insert(canonical_name(alias)),
                "duplicate template alias '{alias}'"
            );
        }
        for code in language::LANGUAGES.keys() {
            assert!(seen.insert(format!("lang-{code}")), "lang-{code} is also a template");
            assert!(seen.insert(format!("ipa-{code}")), "ipa-{code} is also a template");
        }
        for flag in maintenance::FLAGS.keys() {
            assert!(seen.insert(canonical_name(flag)), "duplicate flag '{flag}'");
        }
        assert_eq!(seen.len(), REGISTRY.len());
    }

    #[test]
    fn canonical_names() {
        assert_eq!(canonical_name("Nihongo"), "nihongo");
        assert_eq!(canonical_name("Template:Birth date"), "birth_date");
        assert_eq!(canonical_name(" template: Birth_date "), "birth_date");
        assert_eq!(canonical_name("nihongo "), "nihongo");
    }

    #[test]
    fn dispatch_ignores_case_and_separators() {
        let expected = render("{{nihongo|City pop|シティ・ポップ|shiti poppu}}");
        for name in ["Nihongo", "Template:Nihongo", "nihongo ", "template:nihongo"] {
            assert_eq!(
                render(&format!("{{{{{name}|City pop|シティ・ポップ|shiti poppu}}}}")),
                expected,
                "'{name}' should dispatch like 'nihongo'"
            );
        }
        assert!(is_known_template("Birth_date"));
        assert!(is_known_template("lang-ja"));
        assert!(is_known_template("IPA-fr"));
        assert!(is_known_template("cn"));
    }

    #[test]
    fn unknown_template() {
        let context = context().with_wiki_base_url(Some("https://wiki.example/wiki/"));
        let renderer = Renderer::new(&SimpleParser, context);
        assert_eq!(
            renderer.render_wikitext("Before {{Frobnicate|x}} after"),
            Err(Error::UnknownTemplate {
                name: "Frobnicate".into(),
                wiki_base_url: Some("https://wiki.example/wiki/".into())
            })
        );
        assert_eq!(
            renderer.render_wikitext("{{nowrap|{{Frobnicate}}}}"),
            Err(Error::UnknownTemplate {
                name: "Frobnicate".into(),
                wiki_base_url: Some("https://wiki.example/wiki/".into())
            }),
            "unknown templates in arguments should also fail"
        );
    }

    #[test]
    fn ignored_template() {
        assert_eq!(render("{{Music-genre-stub}}"), "");
        assert_eq!(render("{{Short description|Music genre}}Text"), "Text");
    }

    #[test]
    fn lossy_render() {
        let renderer = Renderer::new(&SimpleParser, context());
        let nodes = SimpleParser.parse("Kept {{Frobnicate}} dropped");
        assert_eq!(renderer.render_lossy(&nodes).plain_text(), "Kept ");
    }

    #[test]
    fn expansion_depth_is_capped() {
        let _ = env_logger::try_init();
        // Every re-parse produces another template which asks to be re-parsed.
        let parser = |_: &str| {
            vec![Node::template(
                "Nihongo2",
                vec![Parameter::positional("ループ")],
            )]
        };
        let renderer = Renderer::new(&parser, context());
        let rendered = renderer
            .render(&parser(""))
            .expect("depth overflow is not fatal");
        assert!(
            matches!(&rendered, Rendered::Error { message } if message.contains("depth")),
            "expected depth error, got {rendered:?}"
        );
    }
}
