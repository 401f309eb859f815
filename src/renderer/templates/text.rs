//! Typography, formatting, and list templates.

use super::*;

/// Wraps the first argument in a style.
fn styled(style: Style, args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(Rendered::styled(style, scope.eval_opt(args.get("1"))?).into())
}

/// `{{Nowrap|text}}`
pub fn nowrap(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    styled(Style::Nowrap, args, scope)
}

/// `{{Small|text}}`
pub fn small(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    styled(Style::Small, args, scope)
}

/// `{{Strong|text}}`
pub fn strong(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    styled(Style::Bold, args, scope)
}

/// `{{Em|text}}`
pub fn em(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    styled(Style::Italic, args, scope)
}

/// `{{Nbsp|count}}`
pub fn nbsp(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let count = number_at::<usize>(args, 1).unwrap_or(1).clamp(1, 20);
    Ok(Rendered::text("\u{a0}".repeat(count)).into())
}

/// `{{Ndash}}`
pub fn ndash(_: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(Rendered::text("–").into())
}

/// `{{Mdash}}`
pub fn mdash(_: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(Rendered::text("—").into())
}

/// `{{Snd}}`
pub fn spaced_ndash(_: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(Rendered::text("\u{a0}– ").into())
}

/// `{{Middot}}`
pub fn middot(_: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(Rendered::text("\u{a0}· ").into())
}

/// `{{Bull}}`
pub fn bull(_: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(Rendered::text("\u{a0}• ").into())
}

/// `{{!}}`
pub fn pipe(_: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(Rendered::text("|").into())
}

/// `{{=}}`
pub fn equals(_: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(Rendered::text("=").into())
}

/// `{{'}}`
pub fn apostrophe(_: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(Rendered::text("'").into())
}

/// Renders each item and puts `separator` between them.
fn join<'a>(
    items: impl IntoIterator<Item = &'a str>,
    separator: &Rendered,
    scope: &Scope<'_, '_>,
) -> Result {
    let mut out = Vec::new();
    for item in items {
        if !out.is_empty() {
            out.push(separator.clone());
        }
        out.push(scope.eval(item)?);
    }
    Ok(Rendered::fragment(out))
}

/// The items of a bulleted Wikitext list.
fn list_items(list: &str) -> impl Iterator<Item = &str> {
    list.lines()
        .map(|line| line.trim_start_matches(['*', '#']).trim())
        .filter(|line| !line.is_empty())
}

/// The non-empty positional arguments.
fn items<'a>(args: &Args<'a>) -> impl Iterator<Item = &'a str> {
    args.positional().into_iter().filter(|item| !item.is_empty())
}

/// `{{Hlist|item|item|…}}`
pub fn hlist(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(join(items(args), &Rendered::text(" · "), scope)?.into())
}

/// `{{Flatlist|* item\n* item}}`
pub fn flatlist(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let list = args.get("1").unwrap_or_default();
    Ok(join(list_items(list), &Rendered::text(" · "), scope)?.into())
}

/// `{{Plainlist|* item\n* item}}`
pub fn plainlist(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let list = args.get("1").unwrap_or_default();
    Ok(join(list_items(list), &Rendered::Newline, scope)?.into())
}

/// `{{Unbulleted list|item|item|…}}`
pub fn unbulleted_list(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(join(items(args), &Rendered::Newline, scope)?.into())
}

/// `{{Quote|text|author|source}}`
pub fn quote(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let text = scope.eval_opt(args.first_of(&["text", "quote", "1"]))?;
    let author = args.first_of(&["author", "sign", "2"]);
    let source = args.first_of(&["source", "title", "3"]);

    let mut content = vec![text];
    if author.is_some() || source.is_some() {
        content.push(Rendered::Newline);
        content.push(Rendered::text("— "));
        let cite = match (author, source) {
            (Some(author), Some(source)) => format!("{author}, {source}"),
            (Some(cite), None) | (None, Some(cite)) => cite.to_string(),
            (None, None) => String::new(),
        };
        content.push(scope.eval(&cite)?);
    }
    Ok(Rendered::styled(Style::Blockquote, Rendered::fragment(content)).into())
}

/// `{{Abbr|short|long}}`
pub fn abbr(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let short = scope.eval_opt(args.get("1"))?;
    Ok(match args.at(2) {
        Some(long) => Rendered::tooltip(long, None, short),
        None => short,
    }
    .into())
}

/// `{{Sic|text|hide=}}`
pub fn sic(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let text = format!(
        "{}{}",
        args.get("1").unwrap_or_default(),
        args.get("2").unwrap_or_default()
    );
    let text = scope.eval(&text)?;
    if args.flag("hide") {
        return Ok(text.into());
    }
    let marker = Rendered::fragment([
        Rendered::text("["),
        Rendered::styled(Style::Italic, Rendered::text("sic")),
        Rendered::text("]"),
    ]);
    Ok(if text.is_empty() {
        marker
    } else {
        Rendered::fragment([text, Rendered::text(" "), marker])
    }
    .into())
}

/// `{{Not a typo|text}}`
pub fn not_a_typo(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(scope.eval(&items(args).collect::<String>())?.into())
}

#[cfg(test)]
mod tests {
    use super::super::tests::{render, render_text};

    #[test]
    fn formatting() {
        assert_eq!(render("{{nowrap|Roland TR-808}}"), r#"<span class="nowrap">Roland TR-808</span>"#);
        assert_eq!(render("{{small|(2001)}}"), "<small>(2001)</small>");
        assert_eq!(render("{{strong|not}} {{em|this}}"), "<b>not</b> <i>this</i>");
        assert_eq!(render_text("1970s{{ndash}}1980s"), "1970s–1980s");
        assert_eq!(render_text("Disco{{mdash}}and"), "Disco—and");
        assert_eq!(render_text("a{{snd}}b"), "a\u{a0}– b");
        assert_eq!(render_text("a{{nbsp|3}}b"), "a\u{a0}\u{a0}\u{a0}b");
        assert_eq!(render_text("a{{!}}b{{=}}c{{'}}"), "a|b=c'");
    }

    #[test]
    fn lists() {
        assert_eq!(render_text("{{hlist|Funk|Soul|[[House music|House]]}}"), "Funk · Soul · House");
        assert_eq!(render_text("{{flatlist|\n* Funk\n* Soul\n}}"), "Funk · Soul");
        assert_eq!(render("{{plainlist|\n* Funk\n* Soul}}"), "Funk<br>Soul");
        assert_eq!(render("{{ubl|Funk|Soul}}"), "Funk<br>Soul");
    }

    #[test]
    fn quotes() {
        assert_eq!(
            render("{{quote|Music is life.|Someone|Interview}}"),
            "<blockquote>Music is life.<br>— Someone, Interview</blockquote>"
        );
        assert_eq!(render("{{quote|text=Hi.}}"), "<blockquote>Hi.</blockquote>");
    }

    #[test]
    fn annotations() {
        assert_eq!(
            render("{{abbr|EDM|electronic dance music}}"),
            r#"<abbr title="electronic dance music">EDM</abbr>"#
        );
        assert_eq!(render("{{sic|Teh}}"), "Teh [<i>sic</i>]");
        assert_eq!(render("{{sic|hide=y|Teh}}"), "Teh");
        assert_eq!(render("{{sic}}"), "[<i>sic</i>]");
        assert_eq!(render("{{Not a typo|Beatles}}"), "Beatles");
    }
}
