//! Link templates, and the resolution of ordinary wiki links.

use super::*;
use crate::{common::url_encode, context::Context, title::Title};

/// The article path of English Wiktionary.
const WIKTIONARY_BASE_URL: &str = "https://en.wiktionary.org/wiki/";

/// Resolves a wiki link. Links to pages which are known genres become genre
/// references; everything else links to the wiki.
pub fn wiki_link(context: &Context<'_>, title: &str, text: &str) -> Rendered {
    let target = Title::new(title);
    let text = if text.is_empty() { title } else { text }.to_string();
    if let Some(genre) = context.lookup_genre(target.name()) {
        log::trace!("'{target}' is genre '{}'", genre.id());
        Rendered::GenreLink { genre, text }
    } else {
        Rendered::Link {
            url: target.url(context.wiki_base_url()),
            title: target.full_text().into_owned(),
            text,
        }
    }
}

/// `{{Interlanguage link|local title|lang|foreign title|lt=}}`
///
/// Genres are always local, so the foreign link is only shown for pages which
/// are not genres.
pub fn interlanguage(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let Some(local) = args.at(1) else {
        return Ok(Rendered::error("Error: {{Interlanguage link}}: no title").into());
    };
    let text = args.nonempty("lt").unwrap_or(local);
    let link = wiki_link(scope.context(), local, text);
    let (Rendered::Link { .. }, Some(lang)) = (&link, args.at(2)) else {
        return Ok(link.into());
    };

    let foreign = Title::new(args.at(3).unwrap_or(local));
    let url = foreign.url(&format!("https://{lang}.wikipedia.org/wiki/"));
    Ok(Rendered::fragment([
        link,
        Rendered::styled(
            Style::Superscript,
            Rendered::fragment([
                Rendered::text("["),
                Rendered::ExtLink {
                    url,
                    children: vec![Rendered::text(lang)],
                },
                Rendered::text("]"),
            ]),
        ),
    ])
    .into())
}

/// `{{Section link|page|section|section2|…}}`
pub fn section_link(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let page = args.get("1").unwrap_or_default();
    let sections = args
        .positional()
        .into_iter()
        .skip(1)
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>();
    let Some(first) = sections.first() else {
        return Ok(Rendered::error("Error: {{Section link}}: no section").into());
    };
    let text = sections
        .iter()
        .map(|section| format!("§\u{a0}{section}"))
        .collect::<Vec<_>>()
        .join(", ");
    if page.is_empty() {
        return Ok(Rendered::text(text).into());
    }
    Ok(wiki_link(scope.context(), &format!("{page}#{first}"), &format!("{page} {text}")).into())
}

/// `{{Wiktionary|word|text}}`
pub fn wiktionary(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let Some(word) = args.at(1) else {
        return Ok(Rendered::Empty.into());
    };
    let (word, fragment) = word.split_once('#').unwrap_or((word, ""));
    let mut url = format!("{WIKTIONARY_BASE_URL}{}", url_encode(&word.replace(' ', "_")));
    if !fragment.is_empty() {
        url.push('#');
        url += &url_encode(fragment).to_string();
    }
    let text = args.at(2).unwrap_or(word);
    Ok(Rendered::ExtLink {
        url,
        children: vec![Rendered::text(text)],
    }
    .into())
}

/// Adds a scheme to a URL which does not have one.
fn with_scheme(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else if url.contains("://") || url.starts_with("mailto:") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// `{{URL|url|text}}`
///
/// Without text, the URL is shown without its scheme or a trailing slash.
pub fn url(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let Some(address) = args.at(1) else {
        return Ok(Rendered::Empty.into());
    };
    let text = args.at(2).unwrap_or_else(|| {
        let bare = address.split_once("://").map_or(address, |(_, rest)| rest);
        let bare = bare.strip_prefix("//").unwrap_or(bare);
        bare.strip_suffix('/')
            .filter(|host| !host.contains('/'))
            .unwrap_or(bare)
    });
    Ok(Rendered::ExtLink {
        url: with_scheme(address),
        children: vec![Rendered::text(text)],
    }
    .into())
}

/// `{{Official website|url|name=}}`
pub fn official_website(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let Some(address) = args.first_of(&["1", "url", "URL"]) else {
        return Ok(Rendered::Empty.into());
    };
    let text = args.nonempty("name").unwrap_or("Official website");
    Ok(Rendered::ExtLink {
        url: with_scheme(address),
        children: vec![Rendered::text(text)],
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::super::tests::{context, render, render_text};
    use super::*;

    #[test]
    fn genre_links() {
        let context = context();
        assert_eq!(
            wiki_link(&context, "hip house", "hip house"),
            Rendered::GenreLink {
                genre: crate::context::GenreRef("hip-house".into()),
                text: "hip house".into()
            },
            "genre lookup should be case-insensitive after normalisation"
        );
        assert_eq!(
            render("[[House music#History|house]]"),
            r#"<a class="genre" data-genre="house">house</a>"#,
            "fragments should be ignored by the genre lookup"
        );
        assert_eq!(
            render("[[Chicago]]"),
            r#"<a class="wiki" href="https://en.wikipedia.org/wiki/Chicago" title="Chicago">Chicago</a>"#
        );
    }

    #[test]
    fn wiki_base_url() {
        let context = context().with_wiki_base_url(Some("https://wiki.example/w"));
        assert_eq!(
            wiki_link(&context, "rock music#Origins", "rock"),
            Rendered::Link {
                title: "Rock music#Origins".into(),
                text: "rock".into(),
                url: "https://wiki.example/w/Rock_music#Origins".into(),
            }
        );
    }

    #[test]
    fn interlanguage() {
        assert_eq!(
            render("{{ill|Kayōkyoku|ja|歌謡曲}}"),
            concat!(
                r#"<a class="wiki" href="https://en.wikipedia.org/wiki/Kay%C5%8Dkyoku" title="Kayōkyoku">Kayōkyoku</a>"#,
                r#"<sup>[<a class="external" rel="nofollow" href="https://ja.wikipedia.org/wiki/%E6%AD%8C%E8%AC%A1%E6%9B%B2">ja</a>]</sup>"#
            )
        );
        assert_eq!(
            render("{{ill|K-pop|ko|케이팝|lt=Korean pop}}"),
            r#"<a class="genre" data-genre="k-pop">Korean pop</a>"#
        );
    }

    #[test]
    fn section_links() {
        assert_eq!(
            render("{{slink|House music|Origins}}"),
            "<a class=\"genre\" data-genre=\"house\">House music §\u{a0}Origins</a>"
        );
        assert_eq!(render_text("{{slink||Origins|Legacy}}"), "§\u{a0}Origins, §\u{a0}Legacy");
    }

    #[test]
    fn external() {
        assert_eq!(
            render("{{wikt|schlager}}"),
            r#"<a class="external" rel="nofollow" href="https://en.wiktionary.org/wiki/schlager">schlager</a>"#
        );
        assert_eq!(
            render("{{URL|www.example.com/}}"),
            r#"<a class="external" rel="nofollow" href="https://www.example.com/">www.example.com</a>"#
        );
        assert_eq!(
            render("{{URL|http://example.com/music/|Example}}"),
            r#"<a class="external" rel="nofollow" href="http://example.com/music/">Example</a>"#
        );
        assert_eq!(
            render("{{Official website|example.org}}"),
            r#"<a class="external" rel="nofollow" href="https://example.org">Official website</a>"#
        );
        assert_eq!(render("{{URL}}"), "");
    }
}
