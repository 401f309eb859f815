//! Simplified Wikitext document types.
//!
//! A genre description arrives as a flat list of [`Node`]s produced by a
//! simplifying parser: text styles and a handful of inline HTML tags become
//! containers, links and templates become leaves, and everything the
//! renderer does not care about (comments, references, categories, images)
//! has already been thrown away. Template parameter values are kept as raw
//! Wikitext so that template handlers can decide for themselves whether and
//! when to parse them.

pub use parser::SimpleParser;
pub(crate) use parser::{find_balanced, split_top_level};
use serde::{Deserialize, Serialize};

mod parser;

/// Something which can turn Wikitext into a list of simplified nodes.
///
/// The renderer treats the parser as an opaque collaborator and calls it
/// again whenever a template handler produces new Wikitext.
pub trait Parse {
    /// Parses `wikitext` into a list of nodes. Parsing never fails; markup
    /// which cannot be understood is returned as text.
    fn parse(&self, wikitext: &str) -> Vec<Node>;
}

impl<F> Parse for F
where
    F: Fn(&str) -> Vec<Node>,
{
    fn parse(&self, wikitext: &str) -> Vec<Node> {
        self(wikitext)
    }
}

/// A simplified Wikitext node.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    /// A list of nodes with no semantics of its own.
    #[serde(rename = "fragment")]
    Fragment {
        /// The child nodes.
        children: Vec<Node>,
    },
    /// A template transclusion, `{{name|parameters}}`.
    #[serde(rename = "template")]
    Template {
        /// The name of the template, as written.
        name: String,
        /// The parameters, in source order.
        #[serde(alias = "children")]
        parameters: Vec<Parameter>,
    },
    /// A wiki link, `[[title|text]]`.
    #[serde(rename = "link")]
    Link {
        /// The visible text.
        text: String,
        /// The target page title.
        title: String,
    },
    /// An external link, `[link text]`.
    #[serde(rename = "ext-link")]
    ExtLink {
        /// The visible text.
        text: String,
        /// The target URL.
        link: String,
    },
    /// Bold text.
    #[serde(rename = "bold")]
    Bold {
        /// The child nodes.
        children: Vec<Node>,
    },
    /// Italic text.
    #[serde(rename = "italic")]
    Italic {
        /// The child nodes.
        children: Vec<Node>,
    },
    /// A `<blockquote>`.
    #[serde(rename = "blockquote")]
    Blockquote {
        /// The child nodes.
        children: Vec<Node>,
    },
    /// A `<sup>`.
    #[serde(rename = "superscript")]
    Superscript {
        /// The child nodes.
        children: Vec<Node>,
    },
    /// A `<sub>`.
    #[serde(rename = "subscript")]
    Subscript {
        /// The child nodes.
        children: Vec<Node>,
    },
    /// A `<small>`.
    #[serde(rename = "small")]
    Small {
        /// The child nodes.
        children: Vec<Node>,
    },
    /// Preformatted text.
    #[serde(rename = "preformatted")]
    Preformatted {
        /// The child nodes.
        children: Vec<Node>,
    },
    /// Plain text, with entities already decoded.
    #[serde(rename = "text")]
    Text {
        /// The text.
        text: String,
    },
    /// A paragraph break.
    #[serde(rename = "paragraph_break")]
    ParagraphBreak,
    /// A forced line break, `<br>`.
    #[serde(rename = "newline")]
    Newline,
}

impl Node {
    /// Creates a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Creates a template node.
    pub fn template(name: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self::Template {
            name: name.into(),
            parameters,
        }
    }

    /// Returns the children of a container node.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Self::Fragment { children }
            | Self::Bold { children }
            | Self::Italic { children }
            | Self::Blockquote { children }
            | Self::Superscript { children }
            | Self::Subscript { children }
            | Self::Small { children }
            | Self::Preformatted { children } => Some(children),
            _ => None,
        }
    }

    /// Returns the children of a container node, mutably.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Self::Fragment { children }
            | Self::Bold { children }
            | Self::Italic { children }
            | Self::Blockquote { children }
            | Self::Superscript { children }
            | Self::Subscript { children }
            | Self::Small { children }
            | Self::Preformatted { children } => Some(children),
            _ => None,
        }
    }
}

/// A template parameter.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Parameter {
    /// The name of the parameter. Unnamed parameters are positional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The raw Wikitext value of the parameter.
    pub value: String,
}

impl Parameter {
    /// Creates a named parameter.
    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
        }
    }

    /// Creates a positional parameter.
    pub fn positional(value: impl Into<String>) -> Self {
        Self {
            name: None,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_shape() {
        let json = r#"[
            {"type": "text", "text": "An "},
            {"type": "template", "name": "lang", "children": [
                {"value": "fr"},
                {"name": "lit", "value": "concrete music"}
            ]},
            {"type": "paragraph_break"}
        ]"#;
        let nodes: Vec<Node> = serde_json::from_str(json).unwrap();
        assert_eq!(
            nodes,
            vec![
                Node::text("An "),
                Node::template(
                    "lang",
                    vec![
                        Parameter::positional("fr"),
                        Parameter::named("lit", "concrete music")
                    ]
                ),
                Node::ParagraphBreak,
            ]
        );

        let out = serde_json::to_string(&nodes[1]).unwrap();
        assert!(
            out.contains(r#""parameters":[{"value":"fr"}"#),
            "positional parameters should serialize without a name: {out}"
        );
    }
}
