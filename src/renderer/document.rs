//! The rendered output tree.

use crate::context::GenreRef;
use html_escape::{encode_double_quoted_attribute_to_string, encode_text_to_string};
use serde::Serialize;

/// A text style which wraps some content.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// Small text.
    Small,
    /// Superscript.
    Superscript,
    /// Subscript.
    Subscript,
    /// A block quotation.
    Blockquote,
    /// Preformatted text.
    Preformatted,
    /// Text which should not wrap across lines.
    Nowrap,
    /// IPA transcription.
    Ipa,
}

impl Style {
    /// The opening and closing HTML tags for the style.
    fn tags(self) -> (&'static str, &'static str) {
        match self {
            Self::Bold => ("<b>", "</b>"),
            Self::Italic => ("<i>", "</i>"),
            Self::Small => ("<small>", "</small>"),
            Self::Superscript => ("<sup>", "</sup>"),
            Self::Subscript => ("<sub>", "</sub>"),
            Self::Blockquote => ("<blockquote>", "</blockquote>"),
            Self::Preformatted => ("<pre>", "</pre>"),
            Self::Nowrap => (r#"<span class="nowrap">"#, "</span>"),
            Self::Ipa => (r#"<span class="IPA">"#, "</span>"),
        }
    }
}

/// A unit of rendered output.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rendered {
    /// Nothing.
    #[default]
    Empty,
    /// Plain text.
    Text {
        /// The text.
        text: String,
    },
    /// A list of rendered units.
    Fragment {
        /// The units.
        children: Vec<Rendered>,
    },
    /// Styled content.
    Styled {
        /// The style.
        style: Style,
        /// The styled content.
        children: Vec<Rendered>,
    },
    /// Content in a specific language.
    Lang {
        /// The BCP 47 language code.
        code: String,
        /// The content.
        children: Vec<Rendered>,
    },
    /// Content with a hover text.
    Tooltip {
        /// The hover text.
        title: String,
        /// An optional presentation class.
        #[serde(skip_serializing_if = "Option::is_none")]
        class: Option<&'static str>,
        /// The content.
        children: Vec<Rendered>,
    },
    /// A link to a wiki page which is not a known genre.
    Link {
        /// The normalised page title.
        title: String,
        /// The visible text.
        text: String,
        /// The full URL of the page.
        url: String,
    },
    /// A link to a genre in the genre graph.
    GenreLink {
        /// The linked genre.
        genre: GenreRef,
        /// The visible text.
        text: String,
    },
    /// A link to an external site.
    ExtLink {
        /// The URL.
        url: String,
        /// The visible content.
        children: Vec<Rendered>,
    },
    /// A date or time, with a machine-readable value.
    Time {
        /// The ISO 8601 value.
        iso: String,
        /// The visible content.
        children: Vec<Rendered>,
    },
    /// A playable audio file.
    Audio {
        /// The name of the file on the wiki.
        file: String,
        /// The visible content.
        children: Vec<Rendered>,
    },
    /// A problem with a template call.
    Error {
        /// The message.
        message: String,
    },
    /// An inline maintenance flag, like “citation needed”.
    Maintenance {
        /// The flag text, without brackets.
        text: String,
    },
    /// A forced line break.
    Newline,
    /// A paragraph break.
    ParagraphBreak,
}

impl Rendered {
    /// Creates a text unit.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Creates an error unit.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Creates a maintenance flag.
    pub fn maintenance(text: impl Into<String>) -> Self {
        Self::Maintenance { text: text.into() }
    }

    /// Creates a styled unit.
    pub fn styled(style: Style, content: Rendered) -> Self {
        Self::Styled {
            style,
            children: content.into_children(),
        }
    }

    /// Creates a unit with a hover text.
    pub fn tooltip(title: impl Into<String>, class: Option<&'static str>, content: Rendered) -> Self {
        Self::Tooltip {
            title: title.into(),
            class,
            children: content.into_children(),
        }
    }

    /// Creates a fragment from a list of units. Empty units are removed,
    /// nested fragments are flattened, and adjacent text is merged.
    pub fn fragment(children: impl IntoIterator<Item = Rendered>) -> Self {
        let mut out = Vec::new();
        for child in children {
            push_flat(&mut out, child);
        }
        match out.len() {
            0 => Self::Empty,
            1 => out.pop().unwrap_or_default(),
            _ => Self::Fragment { children: out },
        }
    }

    /// Returns true if this unit renders nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text { text } => text.is_empty(),
            Self::Fragment { children } => children.iter().all(Self::is_empty),
            _ => false,
        }
    }

    /// Converts this unit into a list of units suitable for a container.
    pub fn into_children(self) -> Vec<Rendered> {
        match self {
            Self::Empty => Vec::new(),
            Self::Fragment { children } => children,
            other => vec![other],
        }
    }

    /// Returns the visible text of this unit, without any markup.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain_text(&mut out);
        out
    }

    /// Writes the visible text of this unit to `out`.
    fn write_plain_text(&self, out: &mut String) {
        match self {
            Self::Empty => {}
            Self::Text { text } | Self::Link { text, .. } | Self::GenreLink { text, .. } => {
                *out += text;
            }
            Self::Fragment { children }
            | Self::Styled { children, .. }
            | Self::Lang { children, .. }
            | Self::Tooltip { children, .. }
            | Self::ExtLink { children, .. }
            | Self::Time { children, .. }
            | Self::Audio { children, .. } => {
                for child in children {
                    child.write_plain_text(out);
                }
            }
            Self::Error { message } => *out += message,
            Self::Maintenance { text } => {
                out.push('[');
                *out += text;
                out.push(']');
            }
            Self::Newline => out.push('\n'),
            Self::ParagraphBreak => *out += "\n\n",
        }
    }

    /// Serialises this unit as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Writes this unit as HTML to `out`.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Empty => {}
            Self::Text { text } => {
                encode_text_to_string(text, out);
            }
            Self::Fragment { children } => write_all(out, children),
            Self::Styled { style, children } => {
                let (open, close) = style.tags();
                *out += open;
                write_all(out, children);
                *out += close;
            }
            Self::Lang { code, children } => {
                *out += r#"<span lang=""#;
                encode_double_quoted_attribute_to_string(code, out);
                *out += r#"">"#;
                write_all(out, children);
                *out += "</span>";
            }
            Self::Tooltip {
                title,
                class,
                children,
            } => {
                *out += r#"<abbr title=""#;
                encode_double_quoted_attribute_to_string(title, out);
                out.push('"');
                if let Some(class) = class {
                    *out += r#" class=""#;
                    *out += class;
                    out.push('"');
                }
                out.push('>');
                write_all(out, children);
                *out += "</abbr>";
            }
            Self::Link { title, text, url } => {
                *out += r#"<a class="wiki" href=""#;
                encode_double_quoted_attribute_to_string(url, out);
                *out += r#"" title=""#;
                encode_double_quoted_attribute_to_string(title, out);
                *out += r#"">"#;
                encode_text_to_string(text, out);
                *out += "</a>";
            }
            Self::GenreLink { genre, text } => {
                *out += r#"<a class="genre" data-genre=""#;
                encode_double_quoted_attribute_to_string(genre.id(), out);
                *out += r#"">"#;
                encode_text_to_string(text, out);
                *out += "</a>";
            }
            Self::ExtLink { url, children } => {
                *out += r#"<a class="external" rel="nofollow" href=""#;
                encode_double_quoted_attribute_to_string(url, out);
                *out += r#"">"#;
                write_all(out, children);
                *out += "</a>";
            }
            Self::Time { iso, children } => {
                *out += r#"<time datetime=""#;
                encode_double_quoted_attribute_to_string(iso, out);
                *out += r#"">"#;
                write_all(out, children);
                *out += "</time>";
            }
            Self::Audio { file, children } => {
                *out += r#"<span class="audio" data-file=""#;
                encode_double_quoted_attribute_to_string(file, out);
                *out += r#"">"#;
                write_all(out, children);
                *out += "</span>";
            }
            Self::Error { message } => {
                *out += r#"<span class="error">"#;
                encode_text_to_string(message, out);
                *out += "</span>";
            }
            Self::Maintenance { text } => {
                *out += r#"<sup class="maintenance">[<i>"#;
                encode_text_to_string(text, out);
                *out += "</i>]</sup>";
            }
            Self::Newline => *out += "<br>",
            Self::ParagraphBreak => *out += "<br><br>",
        }
    }
}

impl From<String> for Rendered {
    fn from(text: String) -> Self {
        Self::Text { text }
    }
}

impl From<&str> for Rendered {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl FromIterator<Rendered> for Rendered {
    fn from_iter<T: IntoIterator<Item = Rendered>>(iter: T) -> Self {
        Self::fragment(iter)
    }
}

/// Appends `child` to `out`, flattening fragments and merging text.
fn push_flat(out: &mut Vec<Rendered>, child: Rendered) {
    match child {
        Rendered::Empty => {}
        Rendered::Fragment { children } => {
            for child in children {
                push_flat(out, child);
            }
        }
        Rendered::Text { text } if text.is_empty() => {}
        Rendered::Text { text } => {
            if let Some(Rendered::Text { text: last }) = out.last_mut() {
                *last += &text;
            } else {
                out.push(Rendered::Text { text });
            }
        }
        child => out.push(child),
    }
}

/// Writes every unit in `children` as HTML to `out`.
fn write_all(out: &mut String, children: &[Rendered]) {
    for child in children {
        child.write_html(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_flattening() {
        let fragment = Rendered::fragment([
            Rendered::text("a"),
            Rendered::Empty,
            Rendered::fragment([Rendered::text("b"), Rendered::Newline]),
            Rendered::text(""),
            Rendered::text("c"),
        ]);
        assert_eq!(
            fragment,
            Rendered::Fragment {
                children: vec![Rendered::text("ab"), Rendered::Newline, Rendered::text("c")]
            }
        );
        assert_eq!(Rendered::fragment([Rendered::text("x")]), Rendered::text("x"));
        assert_eq!(Rendered::fragment([]), Rendered::Empty);
    }

    #[test]
    fn html() {
        let rendered = Rendered::fragment([
            Rendered::text("1 < 2 "),
            Rendered::styled(Style::Italic, Rendered::text("&")),
            Rendered::tooltip("circa \"about\"", None, Rendered::text("c.")),
            Rendered::maintenance("citation needed"),
            Rendered::error("bad"),
        ]);
        assert_eq!(
            rendered.to_html(),
            r#"1 &lt; 2 <i>&amp;</i><abbr title="circa &quot;about&quot;">c.</abbr><sup class="maintenance">[<i>citation needed</i>]</sup><span class="error">bad</span>"#
        );
        assert_eq!(rendered.plain_text(), "1 < 2 &c.[citation needed]bad");
    }

    #[test]
    fn json() {
        let rendered = Rendered::fragment([
            Rendered::GenreLink {
                genre: GenreRef("hip-house".into()),
                text: "hip house".into(),
            },
            Rendered::ParagraphBreak,
        ]);
        assert_eq!(
            serde_json::to_string(&rendered).unwrap(),
            r#"{"type":"fragment","children":[{"type":"genre_link","genre":"hip-house","text":"hip house"},{"type":"paragraph_break"}]}"#
        );
    }
}
