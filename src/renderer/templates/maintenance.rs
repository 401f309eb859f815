//! Maintenance templates and page furniture.

use super::*;

/// Inline maintenance templates, by canonical name, and the text of the flag
/// each one shows.
pub(super) static FLAGS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "citation_needed" => "citation needed",
    "cn" => "citation needed",
    "fact" => "citation needed",
    "cite_needed" => "citation needed",
    "full_citation_needed" => "full citation needed",
    "better_source_needed" => "better source needed",
    "better_source" => "better source needed",
    "non-primary_source_needed" => "non-primary source needed",
    "third-party_inline" => "third-party source needed",
    "self-published_inline" => "self-published source?",
    "unreliable_source?" => "unreliable source?",
    "failed_verification" => "failed verification",
    "verification_failed" => "failed verification",
    "page_needed" => "page needed",
    "year_needed" => "year needed",
    "dead_link" => "dead link",
    "irrelevant_citation" => "irrelevant citation",
    "clarify" => "clarification needed",
    "clarification_needed" => "clarification needed",
    "vague" => "vague",
    "specify" => "specify",
    "examples_needed" => "examples needed",
    "example_needed" => "example needed",
    "when" => "when?",
    "who" => "who?",
    "which" => "which?",
    "where" => "where?",
    "why" => "why?",
    "by_whom" => "by whom?",
    "according_to_whom" => "according to whom?",
    "dubious" => "dubious – discuss",
    "disputed_inline" => "disputed – discuss",
    "original_research_inline" => "original research?",
    "or?" => "original research?",
    "weasel_inline" => "weasel words",
    "peacock_inline" => "peacock prose",
    "pov_statement" => "neutrality is disputed",
    "synthesis_inline" => "improper synthesis?",
};

/// Any inline maintenance template, e.g. `{{Citation needed|date=}}`.
pub fn flag(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let name = canonical_name(args.name());
    let text = FLAGS.get(name.as_str()).copied().unwrap_or("citation needed");
    Ok(Rendered::maintenance(text).into())
}

/// `{{Citation needed span|text|date=}}` and `{{Clarify span|text}}`, which
/// flag a stretch of text.
pub fn flag_span(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let text = if canonical_name(args.name()).starts_with("clarify") {
        "clarification needed"
    } else {
        "citation needed"
    };
    Ok(Rendered::fragment([
        scope.eval_opt(args.first_of(&["text", "1"]))?,
        Rendered::maintenance(text),
    ])
    .into())
}

/// Templates which only add page furniture and have no place in a
/// description.
pub fn drop(_: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(Rendered::Empty.into())
}

#[cfg(test)]
mod tests {
    use super::super::tests::{render, render_text};

    #[test]
    fn flags() {
        assert_eq!(
            render("Disco{{cn|date=May 2020}}."),
            r#"Disco<sup class="maintenance">[<i>citation needed</i>]</sup>."#
        );
        assert_eq!(render_text("{{Citation needed}}"), "[citation needed]");
        assert_eq!(render_text("{{Clarify|reason=which scene?}}"), "[clarification needed]");
        assert_eq!(render_text("{{According to whom}}"), "[according to whom?]");
        assert_eq!(render_text("{{Dubious}}"), "[dubious – discuss]");
    }

    #[test]
    fn spans() {
        assert_eq!(
            render("{{Citation needed span|the first ''rave''|date=May 2020}}"),
            r#"the first <i>rave</i><sup class="maintenance">[<i>citation needed</i>]</sup>"#
        );
        assert_eq!(
            render_text("{{Clarify span|text=a scene}}"),
            "a scene[clarification needed]"
        );
    }

    #[test]
    fn dropped() {
        for wikitext in [
            "{{Authority control}}",
            "{{Infobox music genre|name=Disco|stylistic_origins=[[Funk]]}}",
            "{{Reflist}}",
            "{{Use dmy dates|date=May 2020}}",
            "{{-}}",
        ] {
            assert_eq!(render(wikitext), "", "{wikitext} should render nothing");
        }
    }
}
