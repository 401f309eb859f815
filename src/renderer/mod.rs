//! Rendering of simplified Wikitext into display-ready output.
//!
//! Most nodes map directly onto a [`Rendered`] unit. Templates are looked up
//! in a static registry and handed to their handler, which either produces
//! final output or produces new Wikitext. New Wikitext goes back through the
//! parser and is rendered by the same engine; a chain of templates which
//! expand into other templates is unrolled by a loop whose depth is capped by
//! [`Limits::max_expansion_depth`].

pub use args::Args;
pub use document::{Rendered, Style};
pub use templates::{Expansion, TemplateFn, canonical_name, is_known_template};

use crate::{
    config::Limits,
    context::Context,
    genre_prefix::strip_genre_name_prefix,
    wikitext::{Node, Parameter, Parse},
};
use std::borrow::Cow;

mod args;
mod document;
mod templates;
#[cfg(test)]
mod tests;

/// A rendering error.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A template is not in the registry.
    #[error("unknown template '{name}'")]
    UnknownTemplate {
        /// The name of the template, as written.
        name: String,
        /// The wiki base URL of the render, so the template can be looked up
        /// by whoever reads the error.
        wiki_base_url: Option<String>,
    },
}

/// The standard result type used by all fallible renderer functions.
pub type Result<T = Rendered, E = Error> = core::result::Result<T, E>;

/// A simplified Wikitext renderer.
pub struct Renderer<'a> {
    /// The parser used for Wikitext produced by templates.
    parser: &'a dyn Parse,
    /// The render context.
    context: Context<'a>,
    /// Resource limits.
    limits: Limits,
}

impl<'a> Renderer<'a> {
    /// Creates a new renderer with default limits.
    pub fn new(parser: &'a dyn Parse, context: Context<'a>) -> Self {
        Self {
            parser,
            context,
            limits: Limits::default(),
        }
    }

    /// Replaces the resource limits.
    #[must_use]
    pub fn with_limits(self, limits: Limits) -> Self {
        Self { limits, ..self }
    }

    /// The render context.
    pub fn context(&self) -> &Context<'a> {
        &self.context
    }

    /// Renders a list of nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTemplate`] if any template, at any depth, is
    /// not in the registry.
    pub fn render(&self, nodes: &[Node]) -> Result {
        self.render_nodes(nodes, 0)
    }

    /// Parses and renders some Wikitext.
    ///
    /// # Errors
    ///
    /// See [`Self::render`].
    pub fn render_wikitext(&self, wikitext: &str) -> Result {
        self.render(&self.parser.parse(wikitext))
    }

    /// Renders a list of nodes, stopping at the first node which contains an
    /// unknown template and returning whatever was rendered before it.
    pub fn render_lossy(&self, nodes: &[Node]) -> Rendered {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            match self.render_node(node, 0) {
                Ok(rendered) => out.push(rendered),
                Err(err) => {
                    log::warn!("dropping rest of description: {err}");
                    break;
                }
            }
        }
        Rendered::fragment(out)
    }

    /// Renders a genre description. The redundant genre name at the start of
    /// the description is removed first, when a genre name is given.
    pub fn render_description(&self, genre_name: Option<&str>, description: &str) -> Rendered {
        let description = match genre_name {
            Some(genre_name) => strip_genre_name_prefix(genre_name, description),
            None => description,
        };
        self.render_lossy(&self.parser.parse(description))
    }

    /// Renders a list of nodes at the given expansion depth.
    fn render_nodes(&self, nodes: &[Node], depth: usize) -> Result {
        nodes
            .iter()
            .map(|node| self.render_node(node, depth))
            .collect::<Result<Vec<_>>>()
            .map(Rendered::fragment)
    }

    /// Renders a single node at the given expansion depth.
    fn render_node(&self, node: &Node, depth: usize) -> Result {
        let styled = |style: Style, children: &[Node]| -> Result {
            Ok(Rendered::styled(style, self.render_nodes(children, depth)?))
        };
        match node {
            Node::Fragment { children } => self.render_nodes(children, depth),
            Node::Template { name, parameters } => self.render_template(name, parameters, depth),
            Node::Link { text, title } => Ok(templates::wiki_link(&self.context, title, text)),
            Node::ExtLink { text, link } => Ok(Rendered::ExtLink {
                url: link.clone(),
                children: vec![Rendered::text(if text.is_empty() { link } else { text })],
            }),
            Node::Bold { children } => styled(Style::Bold, children),
            Node::Italic { children } => styled(Style::Italic, children),
            Node::Blockquote { children } => styled(Style::Blockquote, children),
            Node::Superscript { children } => styled(Style::Superscript, children),
            Node::Subscript { children } => styled(Style::Subscript, children),
            Node::Small { children } => styled(Style::Small, children),
            Node::Preformatted { children } => styled(Style::Preformatted, children),
            Node::Text { text } => Ok(Rendered::text(text.as_str())),
            Node::ParagraphBreak => Ok(Rendered::ParagraphBreak),
            Node::Newline => Ok(Rendered::Newline),
        }
    }

    /// Expands a template call.
    fn render_template(&self, name: &str, parameters: &[Parameter], mut depth: usize) -> Result {
        let mut name = Cow::Borrowed(name);
        let mut parameters = Cow::Borrowed(parameters);
        loop {
            let Some(handler) = templates::lookup(&name) else {
                return Err(Error::UnknownTemplate {
                    name: name.trim().to_string(),
                    wiki_base_url: self.context.configured_wiki_base_url().map(str::to_string),
                });
            };

            log::trace!("expanding '{name}' at depth {depth}");
            let expansion = {
                let args = Args::new(&name, &parameters);
                handler(&args, &Scope {
                    renderer: self,
                    depth,
                })?
            };

            let markup = match expansion {
                Expansion::Final(rendered) => return Ok(rendered),
                Expansion::Reparse(markup) => markup,
            };

            depth += 1;
            if depth > self.limits.max_expansion_depth {
                log::warn!("expansion of '{name}' exceeded depth {depth}");
                return Ok(depth_exceeded(&name));
            }

            log::debug!("re-parsing output of '{name}': {markup}");
            let mut nodes = self.parser.parse(&markup);
            if nodes.len() == 1
                && matches!(nodes[0], Node::Template { .. })
                && let Some(Node::Template {
                    name: next_name,
                    parameters: next_parameters,
                }) = nodes.pop()
            {
                name = Cow::Owned(next_name);
                parameters = Cow::Owned(next_parameters);
            } else {
                return self.render_nodes(&nodes, depth);
            }
        }
    }
}

impl core::fmt::Debug for Renderer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Renderer")
            .field("context", &self.context)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

/// The environment of a single template handler call.
pub struct Scope<'s, 'a> {
    /// The renderer which called the handler.
    renderer: &'s Renderer<'a>,
    /// The expansion depth of the call.
    depth: usize,
}

impl<'a> Scope<'_, 'a> {
    /// The render context.
    pub fn context(&self) -> &Context<'a> {
        &self.renderer.context
    }

    /// Parses and renders Wikitext from a template argument.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTemplate`] if the Wikitext uses an unknown
    /// template.
    pub fn eval(&self, wikitext: &str) -> Result {
        if wikitext.is_empty() {
            return Ok(Rendered::Empty);
        }
        let depth = self.depth + 1;
        if depth > self.renderer.limits.max_expansion_depth {
            log::warn!("argument evaluation exceeded depth {depth}");
            return Ok(depth_exceeded(wikitext));
        }
        self.renderer
            .render_nodes(&self.renderer.parser.parse(wikitext), depth)
    }

    /// Parses and renders an optional template argument.
    ///
    /// # Errors
    ///
    /// See [`Self::eval`].
    pub fn eval_opt(&self, wikitext: Option<&str>) -> Result {
        wikitext.map_or(Ok(Rendered::Empty), |wikitext| self.eval(wikitext))
    }
}

/// The inline error for output which kept producing more templates.
fn depth_exceeded(what: &str) -> Rendered {
    Rendered::error(format!(
        "Template expansion depth exceeded while rendering '{}'",
        what.trim()
    ))
}
