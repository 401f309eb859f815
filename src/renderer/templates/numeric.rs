//! Number templates.

use super::*;
use crate::numbers::{cardinal, group_decimal, ordinal_suffix};

/// `{{Ordinal|number|sup=}}`
pub fn ordinal(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let Some(n) = number_at::<i64>(args, 1) else {
        return Ok(Rendered::error("Error: {{Ordinal}}: not a whole number").into());
    };
    let suffix = Rendered::text(ordinal_suffix(n));
    Ok(Rendered::fragment([
        Rendered::text(n.to_string()),
        if args.flag("sup") {
            Rendered::styled(Style::Superscript, suffix)
        } else {
            suffix
        },
    ])
    .into())
}

/// `{{Frac|numerator|denominator}}`, `{{Frac|whole|numerator|denominator}}`,
/// and `{{Frac|denominator}}`.
pub fn frac(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let parts = args.positional();
    let (whole, numerator, denominator) = match parts.as_slice() {
        [denominator] => (None, "1", *denominator),
        [numerator, denominator] => (None, *numerator, *denominator),
        [whole, numerator, denominator, ..] => (Some(*whole), *numerator, *denominator),
        [] => return Ok(Rendered::Empty.into()),
    };
    Ok(Rendered::fragment([
        Rendered::text(whole.map(|whole| format!("{whole}+")).unwrap_or_default()),
        Rendered::styled(Style::Superscript, Rendered::text(numerator)),
        Rendered::text("⁄"),
        Rendered::styled(Style::Subscript, Rendered::text(denominator)),
    ])
    .into())
}

/// `{{Val|number|uncertainty|e=|u=|ul=}}`
pub fn val(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let Some(number) = args.at(1).filter(|n| n.parse::<f64>().is_ok()) else {
        return Ok(Rendered::error("Error in {{Val}}: not a number").into());
    };
    let mut out = vec![Rendered::text(group_decimal(number))];
    if let Some(uncertainty) = args.at(2) {
        out.push(Rendered::text(format!(" ± {}", group_decimal(uncertainty))));
    }
    if let Some(exponent) = args.nonempty("e") {
        out.push(Rendered::text("×10"));
        out.push(Rendered::styled(
            Style::Superscript,
            Rendered::text(exponent.replacen('-', "\u{2212}", 1)),
        ));
    }
    if let Some(unit) = args.first_of(&["u", "ul"]) {
        out.push(Rendered::text("\u{a0}"));
        out.push(scope.eval(unit)?);
    }
    Ok(Rendered::fragment(out).into())
}

/// `{{US$|amount|link=}}`
pub fn us_dollars(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let prefix = if args.flag("link") {
        wiki_link(scope.context(), "United States dollar", "US$")
    } else {
        Rendered::text("US$")
    };
    let amount = args.get("1").unwrap_or_default();
    Ok(Rendered::fragment([prefix, Rendered::text(group_decimal(amount))]).into())
}

/// `{{Number to word|number}}`
pub fn number_to_word(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(match args.get("1").and_then(|n| n.replace(',', "").parse::<i64>().ok()) {
        Some(n) => Rendered::text(cardinal(n)),
        None => Rendered::error("Error: {{Number to word}}: not a whole number"),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::super::tests::{render, render_text};

    #[test]
    fn ordinals() {
        assert_eq!(render_text("the {{ordinal|21}} century"), "the 21st century");
        assert_eq!(render("{{ordinal|112|sup=yes}}"), "112<sup>th</sup>");
        assert_eq!(
            render("{{ordinal|many}}"),
            r#"<span class="error">Error: {{Ordinal}}: not a whole number</span>"#
        );
    }

    #[test]
    fn fractions() {
        assert_eq!(render("{{frac|1|2}}"), "<sup>1</sup>⁄<sub>2</sub>");
        assert_eq!(render_text("{{frac|2|3|4}}"), "2+3⁄4");
        assert_eq!(render_text("{{frac|4}}"), "1⁄4");
    }

    #[test]
    fn values() {
        assert_eq!(render_text("{{val|1234.5|u=m}}"), "1,234.5\u{a0}m");
        assert_eq!(render("{{val|1.2|e=-3}}"), "1.2×10<sup>\u{2212}3</sup>");
        assert_eq!(render_text("{{val|5|0.2}}"), "5 ± 0.2");
    }

    #[test]
    fn money_and_words() {
        assert_eq!(render_text("{{US$|1500000}}"), "US$1,500,000");
        assert_eq!(
            render("{{US$|20|link=yes}}"),
            r#"<a class="wiki" href="https://en.wikipedia.org/wiki/United_States_dollar" title="United States dollar">US$</a>20"#
        );
        assert_eq!(render_text("{{Number to word|21}}"), "twenty-one");
        assert_eq!(render_text("{{spellnum|1,005}}"), "one thousand and five");
    }
}
