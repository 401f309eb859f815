//! A small Wikitext parser producing simplified nodes.
//!
//! This understands only the subset of Wikitext which survives into genre
//! descriptions: templates, links, text styles, a few inline tags, and
//! paragraph breaks. Anything else is passed through as text.

use super::{Node, Parameter, Parse};
use html_escape::decode_html_entities;
use memchr::memchr;

/// A parser for the subset of Wikitext used by genre descriptions.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleParser;

impl Parse for SimpleParser {
    fn parse(&self, wikitext: &str) -> Vec<Node> {
        let mut layers = Layers::default();
        let mut rest = wikitext;
        while !rest.is_empty() {
            rest = parse_one(&mut layers, rest);
        }
        layers.finish()
    }
}

/// An open container kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Style {
    /// `'''`
    Bold,
    /// `''`
    Italic,
    /// `<blockquote>`
    Blockquote,
    /// `<sup>`
    Superscript,
    /// `<sub>`
    Subscript,
    /// `<small>`
    Small,
}

impl Style {
    /// Finds the style for an HTML tag name.
    fn from_tag(name: &str) -> Option<Self> {
        Some(match name {
            "b" | "strong" => Self::Bold,
            "i" | "em" => Self::Italic,
            "blockquote" => Self::Blockquote,
            "sup" => Self::Superscript,
            "sub" => Self::Subscript,
            "small" => Self::Small,
            _ => return None,
        })
    }

    /// Wraps `children` in the node for this style.
    fn into_node(self, children: Vec<Node>) -> Node {
        match self {
            Self::Bold => Node::Bold { children },
            Self::Italic => Node::Italic { children },
            Self::Blockquote => Node::Blockquote { children },
            Self::Superscript => Node::Superscript { children },
            Self::Subscript => Node::Subscript { children },
            Self::Small => Node::Small { children },
        }
    }
}

/// The stack of open containers.
#[derive(Debug, Default)]
struct Layers {
    /// Completed top-level nodes.
    root: Vec<Node>,
    /// Open containers, innermost last.
    open: Vec<(Style, Vec<Node>)>,
    /// Pending undecoded text.
    text: String,
}

impl Layers {
    /// The child list currently receiving nodes.
    fn children(&mut self) -> &mut Vec<Node> {
        match self.open.last_mut() {
            Some((_, children)) => children,
            None => &mut self.root,
        }
    }

    /// Moves pending text into the current child list.
    fn flush(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let text = core::mem::take(&mut self.text);
        let text = decode_html_entities(&text).into_owned();
        let children = self.children();
        if let Some(Node::Text { text: last }) = children.last_mut() {
            last.push_str(&text);
        } else {
            children.push(Node::Text { text });
        }
    }

    /// Appends a leaf node.
    fn push(&mut self, node: Node) {
        self.flush();
        self.children().push(node);
    }

    /// Opens a new container.
    fn open(&mut self, style: Style) {
        self.flush();
        self.open.push((style, Vec::new()));
    }

    /// Closes the innermost container. Empty containers are discarded.
    fn close(&mut self) {
        self.flush();
        if let Some((style, children)) = self.open.pop()
            && !children.is_empty()
        {
            self.children().push(style.into_node(children));
        }
    }

    /// Closes every container up to and including the innermost one with the
    /// given style, reopening any text styles which were closed on the way.
    /// Returns false if no such container was open.
    fn close_style(&mut self, style: Style) -> bool {
        let Some(index) = self.open.iter().rposition(|(open, _)| *open == style) else {
            return false;
        };
        let reopen = self.open[index + 1..]
            .iter()
            .map(|(style, _)| *style)
            .filter(|style| matches!(style, Style::Bold | Style::Italic))
            .collect::<Vec<_>>();
        while self.open.len() > index {
            self.close();
        }
        for style in reopen {
            self.open(style);
        }
        true
    }

    /// Opens a text style, or closes it if it is already open.
    fn toggle(&mut self, style: Style) {
        if !self.close_style(style) {
            self.open(style);
        }
    }

    /// Closes unbalanced text styles at the end of a line.
    fn end_line(&mut self) {
        while let Some(index) = self
            .open
            .iter()
            .rposition(|(style, _)| matches!(style, Style::Bold | Style::Italic))
        {
            while self.open.len() > index {
                self.close();
            }
        }
    }

    /// Implicitly closes everything still open and returns the nodes.
    fn finish(mut self) -> Vec<Node> {
        while !self.open.is_empty() {
            self.close();
        }
        self.flush();
        self.root
    }
}

/// Consumes one token from the start of `src` and returns the remainder.
fn parse_one<'a>(layers: &mut Layers, src: &'a str) -> &'a str {
    if src.starts_with("{{") {
        if let Some(end) = find_balanced(src, b"{{", b"}}") {
            layers.push(parse_template(&src[2..end]));
            return &src[end + 2..];
        }
        layers.text.push_str("{{");
        &src[2..]
    } else if src.starts_with("[[") {
        if let Some(end) = find_balanced(src, b"[[", b"]]") {
            let rest = &src[end + 2..];
            let trail = rest
                .find(|c: char| !c.is_ascii_lowercase())
                .unwrap_or(rest.len());
            if let Some(node) = parse_link(&src[2..end], &rest[..trail]) {
                layers.push(node);
                return &rest[trail..];
            }
            return rest;
        }
        layers.text.push_str("[[");
        &src[2..]
    } else if src.starts_with('[') && is_url_start(&src[1..]) {
        if let Some(end) = memchr(b']', src.as_bytes()) {
            let inner = src[1..end].trim();
            let (link, text) = inner.split_once(' ').unwrap_or((inner, inner));
            layers.push(Node::ExtLink {
                text: text.trim().to_string(),
                link: link.to_string(),
            });
            return &src[end + 1..];
        }
        layers.text.push('[');
        &src[1..]
    } else if src.starts_with('\'') {
        let count = src.bytes().take_while(|b| *b == b'\'').count();
        parse_apostrophes(layers, count);
        &src[count..]
    } else if src.starts_with('\n') {
        let count = src.bytes().take_while(|b| *b == b'\n').count();
        layers.end_line();
        if count > 1 {
            layers.push(Node::ParagraphBreak);
        } else {
            layers.text.push('\n');
        }
        &src[count..]
    } else if src.starts_with("<!--") {
        src.find("-->").map_or("", |end| &src[end + 3..])
    } else if src.starts_with('<')
        && let Some(rest) = parse_tag(layers, src)
    {
        rest
    } else {
        let first = src.chars().next().map_or(1, char::len_utf8);
        let next = src[first..]
            .find(['{', '[', '\'', '\n', '<'])
            .map_or(src.len(), |index| index + first);
        layers.text.push_str(&src[..next]);
        &src[next..]
    }
}

/// Applies a run of `count` apostrophes.
fn parse_apostrophes(layers: &mut Layers, count: usize) {
    let (literal, bold, italic) = match count {
        1 => (1, false, false),
        2 => (0, false, true),
        3 => (0, true, false),
        4 => (1, true, false),
        n => (n - 5, true, true),
    };
    for _ in 0..literal {
        layers.text.push('\'');
    }
    match (bold, italic) {
        (true, true) => {
            if layers.open.last().is_some_and(|(style, _)| *style == Style::Italic) {
                layers.toggle(Style::Italic);
                layers.toggle(Style::Bold);
            } else {
                layers.toggle(Style::Bold);
                layers.toggle(Style::Italic);
            }
        }
        (true, false) => layers.toggle(Style::Bold),
        (false, true) => layers.toggle(Style::Italic),
        (false, false) => {}
    }
}

/// Parses an HTML-like tag at the start of `src`. Returns `None` if `src` does
/// not start with something tag-shaped.
fn parse_tag<'a>(layers: &mut Layers, src: &'a str) -> Option<&'a str> {
    let end = memchr(b'>', src.as_bytes())?;
    let body = &src[1..end];
    let (is_end, body) = body
        .strip_prefix('/')
        .map_or((false, body), |body| (true, body));
    let self_closing = body.ends_with('/');
    let name_len = body
        .bytes()
        .take_while(u8::is_ascii_alphanumeric)
        .count();
    if name_len == 0 || !body.as_bytes()[0].is_ascii_alphabetic() {
        return None;
    }
    let name = body[..name_len].to_ascii_lowercase();
    let rest = &src[end + 1..];

    match name.as_str() {
        "br" => layers.push(Node::Newline),
        "ref" | "nowiki" if !is_end && !self_closing => {
            let close = format!("</{name}>");
            let (inner, rest) = match find_ignore_ascii_case(rest, &close) {
                Some(index) => (&rest[..index], &rest[index + close.len()..]),
                None => (rest, ""),
            };
            if name == "nowiki" {
                layers.push(Node::text(decode_html_entities(inner)));
            }
            return Some(rest);
        }
        _ => {
            if let Some(style) = Style::from_tag(&name) {
                if is_end {
                    layers.close_style(style);
                } else if !self_closing {
                    layers.open(style);
                }
            }
        }
    }

    Some(rest)
}

/// Parses the inside of a `[[link]]`. File and category links are dropped.
fn parse_link(inner: &str, trail: &str) -> Option<Node> {
    let split = top_level_bytes(inner, b'|');
    let (title, text) = match split.first() {
        Some(&index) => (&inner[..index], &inner[index + 1..]),
        None => (inner, ""),
    };
    let title = title.trim();

    let namespace = title
        .split_once(':')
        .map(|(ns, _)| ns.trim().to_ascii_lowercase());
    if matches!(
        namespace.as_deref(),
        Some("file" | "image" | "category" | "media")
    ) {
        return None;
    }

    let title = title.trim_start_matches(':');
    let text = if text.trim().is_empty() {
        title
    } else {
        text.trim()
    };
    let text = text.replace("'''", "").replace("''", "");
    Some(Node::Link {
        text: decode_html_entities(&text).into_owned() + trail,
        title: decode_html_entities(title).into_owned(),
    })
}

/// Parses the inside of a `{{template}}`.
fn parse_template(inner: &str) -> Node {
    let mut parts = split_top_level(inner, b'|').into_iter();
    let name = parts.next().unwrap_or_default().trim();
    let parameters = parts
        .map(|part| match top_level_bytes(part, b'=').first() {
            Some(&index) => Parameter::named(part[..index].trim(), &part[index + 1..]),
            None => Parameter::positional(part),
        })
        .collect();
    Node::template(name, parameters)
}

/// Returns true if `src` starts with something that looks like a URL.
fn is_url_start(src: &str) -> bool {
    ["http://", "https://", "//"]
        .iter()
        .any(|scheme| src.starts_with(scheme))
}

/// Finds `needle` in `haystack` using an ASCII case-insensitive comparison.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Given `src` which starts with `open`, finds the index of the balancing
/// `close`.
pub(crate) fn find_balanced(src: &str, open: &[u8; 2], close: &[u8; 2]) -> Option<usize> {
    let bytes = src.as_bytes();
    let mut depth = 0_usize;
    let mut index = 0;
    while index + 1 < bytes.len() {
        let pair = &bytes[index..index + 2];
        if pair == open {
            depth += 1;
            index += 2;
        } else if pair == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(index);
            }
            index += 2;
        } else {
            index += 1;
        }
    }
    None
}

/// Splits `src` on every `separator` which is not nested inside a template,
/// link, or HTML tag.
pub(crate) fn split_top_level(src: &str, separator: u8) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for index in top_level_bytes(src, separator) {
        parts.push(&src[start..index]);
        start = index + 1;
    }
    parts.push(&src[start..]);
    parts
}

/// Finds every `wanted` byte which is not nested inside a template, link, or
/// HTML tag.
fn top_level_bytes(src: &str, wanted: u8) -> Vec<usize> {
    let bytes = src.as_bytes();
    let mut braces = 0_usize;
    let mut brackets = 0_usize;
    let mut found = Vec::new();
    let mut index = 0;
    while index < bytes.len() {
        let next = bytes.get(index + 1).copied();
        match bytes[index] {
            b'{' if next == Some(b'{') => {
                braces += 1;
                index += 2;
                continue;
            }
            b'}' if next == Some(b'}') && braces > 0 => {
                braces -= 1;
                index += 2;
                continue;
            }
            b'[' if next == Some(b'[') => {
                brackets += 1;
                index += 2;
                continue;
            }
            b']' if next == Some(b']') && brackets > 0 => {
                brackets -= 1;
                index += 2;
                continue;
            }
            b'<' if braces == 0
                && brackets == 0
                && next.is_some_and(|c| c.is_ascii_alphabetic() || c == b'/') =>
            {
                if let Some(end) = memchr(b'>', &bytes[index..]) {
                    index += end + 1;
                    continue;
                }
            }
            byte if byte == wanted && braces == 0 && brackets == 0 => found.push(index),
            _ => {}
        }
        index += 1;
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<Node> {
        SimpleParser.parse(text)
    }

    #[test]
    fn plain_text() {
        assert_eq!(parse("hello &amp; world"), vec![Node::text("hello & world")]);
    }

    #[test]
    fn template_parameters() {
        assert_eq!(
            parse("{{Nihongo|'''City pop'''|シティ・ポップ|lead=yes}} is"),
            vec![
                Node::template(
                    "Nihongo",
                    vec![
                        Parameter::positional("'''City pop'''"),
                        Parameter::positional("シティ・ポップ"),
                        Parameter::named("lead", "yes"),
                    ]
                ),
                Node::text(" is"),
            ]
        );
    }

    #[test]
    fn nested_template_parameters() {
        assert_eq!(
            parse("{{a|{{b|c=d}}|[[e|f]]|g = h}}"),
            vec![Node::template(
                "a",
                vec![
                    Parameter::positional("{{b|c=d}}"),
                    Parameter::positional("[[e|f]]"),
                    Parameter::named("g", " h"),
                ]
            )]
        );
    }

    #[test]
    fn unbalanced_template() {
        assert_eq!(parse("{{oops"), vec![Node::text("{{oops")]);
    }

    #[test]
    fn links() {
        assert_eq!(
            parse("[[house music|house]]s and [[techno]] [https://example.com site]"),
            vec![
                Node::Link {
                    text: "houses".into(),
                    title: "house music".into()
                },
                Node::text(" and "),
                Node::Link {
                    text: "techno".into(),
                    title: "techno".into()
                },
                Node::text(" "),
                Node::ExtLink {
                    text: "site".into(),
                    link: "https://example.com".into()
                },
            ]
        );
        assert_eq!(parse("[[File:Foo.jpg|thumb]]x"), vec![Node::text("x")]);
    }

    #[test]
    fn styles() {
        assert_eq!(
            parse("'''Hip house''' is ''a'' genre"),
            vec![
                Node::Bold {
                    children: vec![Node::text("Hip house")]
                },
                Node::text(" is "),
                Node::Italic {
                    children: vec![Node::text("a")]
                },
                Node::text(" genre"),
            ]
        );
        assert_eq!(
            parse("'''''both'''''"),
            vec![Node::Bold {
                children: vec![Node::Italic {
                    children: vec![Node::text("both")]
                }]
            }]
        );
    }

    #[test]
    fn unclosed_style_ends_at_line() {
        assert_eq!(
            parse("''open\n\nnext"),
            vec![
                Node::Italic {
                    children: vec![Node::text("open")]
                },
                Node::ParagraphBreak,
                Node::text("next"),
            ]
        );
    }

    #[test]
    fn tags() {
        assert_eq!(
            parse("a<ref>cite</ref><br/>b<sup>2</sup><!-- hidden --><small>c</small>"),
            vec![
                Node::text("a"),
                Node::Newline,
                Node::text("b"),
                Node::Superscript {
                    children: vec![Node::text("2")]
                },
                Node::Small {
                    children: vec![Node::text("c")]
                },
            ]
        );
        assert_eq!(parse("1 < 2"), vec![Node::text("1 < 2")]);
    }
}
