//! Audio file and music notation templates.

use super::*;

/// Musical symbols, by the names `{{Music}}` accepts.
static MUSIC_SYMBOLS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "flat" => "♭", "b" => "♭",
    "sharp" => "♯", "#" => "♯",
    "natural" => "♮", "n" => "♮",
    "doubleflat" => "𝄫", "bb" => "𝄫",
    "doublesharp" => "𝄪", "x" => "𝄪",
    "treble" => "𝄞", "trebleclef" => "𝄞",
    "bass" => "𝄢", "bassclef" => "𝄢",
    "time" => "𝄴", "common" => "𝄴",
    "quarter" => "♩", "crotchet" => "♩",
    "eighth" => "♪", "quaver" => "♪",
    "beamed" => "♫", "beamedeighth" => "♫",
};

/// `{{Audio|filename|text}}`
pub fn audio(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let Some(file) = args.first_of(&["filename", "1"]) else {
        return Ok(Rendered::error("Error: {{Audio}}: no file").into());
    };
    let text = scope.eval(args.nonempty("2").unwrap_or(file))?;
    Ok(Rendered::Audio {
        file: file.to_string(),
        children: text.into_children(),
    }
    .into())
}

/// `{{Listen|filename=|title=|description=}}`
///
/// Only the first file is shown. The description is a caption for a media
/// player and is dropped.
pub fn listen(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let Some(file) = args.first_of(&["filename", "filename1"]) else {
        return Ok(Rendered::error("Error: {{Listen}}: no file").into());
    };
    let title = scope.eval(args.first_of(&["title", "title1"]).unwrap_or(file))?;
    Ok(Rendered::Audio {
        file: file.to_string(),
        children: title.into_children(),
    }
    .into())
}

/// `{{Music|symbol}}`, and the shortcuts `{{Flat}}`, `{{Sharp}}`, and
/// `{{Natural}}`.
pub fn music_symbol(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let name = canonical_name(args.name());
    let symbol = if name == "music" {
        args.get("1").unwrap_or_default().to_ascii_lowercase()
    } else {
        name
    };
    Ok(match MUSIC_SYMBOLS.get(symbol.as_str()) {
        Some(symbol) => Rendered::text(*symbol),
        None => Rendered::error(format!("Error: {{{{Music}}}}: unknown symbol '{symbol}'")),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::super::tests::{render, render_text};

    #[test]
    fn audio() {
        assert_eq!(
            render("{{Audio|Bossa nova sample.ogg|listen}}"),
            r#"<span class="audio" data-file="Bossa nova sample.ogg">listen</span>"#
        );
        assert_eq!(
            render("{{Audio|filename=Samba.ogg}}"),
            r#"<span class="audio" data-file="Samba.ogg">Samba.ogg</span>"#
        );
        assert_eq!(
            render("{{Listen|filename=Reggae.ogg|title=''Reggae beat''|description=A one drop rhythm}}"),
            r#"<span class="audio" data-file="Reggae.ogg"><i>Reggae beat</i></span>"#
        );
    }

    #[test]
    fn symbols() {
        assert_eq!(render_text("B{{music|flat}} major"), "B♭ major");
        assert_eq!(render_text("F{{sharp}} and C{{Natural}}"), "F♯ and C♮");
        assert_eq!(render_text("{{music|treble}}"), "𝄞");
        assert_eq!(
            render("{{music|kazoo}}"),
            r#"<span class="error">Error: {{Music}}: unknown symbol 'kazoo'</span>"#
        );
    }
}
