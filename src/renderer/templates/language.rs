//! Language and translation templates.
//!
//! Almost all of these only rearrange their arguments into a sentence, so
//! they build new Wikitext and let the renderer deal with it.

use super::*;
use crate::hangul::{System, romanize};

/// English names of languages, by ISO 639 code. Every code here also gets
/// a `{{lang-xx}}` and an `{{IPA-xx}}` template.
pub(super) static LANGUAGES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "af" => "Afrikaans", "am" => "Amharic", "ar" => "Arabic", "az" => "Azerbaijani",
    "be" => "Belarusian", "bg" => "Bulgarian", "bn" => "Bengali", "bs" => "Bosnian",
    "ca" => "Catalan", "cs" => "Czech", "cy" => "Welsh", "da" => "Danish", "de" => "German",
    "el" => "Greek", "en" => "English", "eo" => "Esperanto", "es" => "Spanish",
    "et" => "Estonian", "eu" => "Basque", "fa" => "Persian", "fi" => "Finnish",
    "fil" => "Filipino", "fr" => "French", "ga" => "Irish", "gd" => "Scottish Gaelic",
    "gl" => "Galician", "grc" => "Ancient Greek", "gu" => "Gujarati", "he" => "Hebrew",
    "hi" => "Hindi", "hr" => "Croatian", "ht" => "Haitian Creole", "hu" => "Hungarian",
    "hy" => "Armenian", "id" => "Indonesian", "ig" => "Igbo", "is" => "Icelandic",
    "it" => "Italian", "ja" => "Japanese", "jam" => "Jamaican Patois", "jv" => "Javanese",
    "ka" => "Georgian", "kk" => "Kazakh", "km" => "Khmer", "ko" => "Korean", "ku" => "Kurdish",
    "la" => "Latin", "lb" => "Luxembourgish", "ln" => "Lingala", "lt" => "Lithuanian",
    "lv" => "Latvian", "mk" => "Macedonian", "ml" => "Malayalam", "mn" => "Mongolian",
    "mr" => "Marathi", "ms" => "Malay", "mt" => "Maltese", "my" => "Burmese",
    "ne" => "Nepali", "nl" => "Dutch", "no" => "Norwegian", "pa" => "Punjabi",
    "pl" => "Polish", "pt" => "Portuguese", "qu" => "Quechua", "ro" => "Romanian",
    "ru" => "Russian", "sa" => "Sanskrit", "sk" => "Slovak", "sl" => "Slovene",
    "so" => "Somali", "sq" => "Albanian", "sr" => "Serbian", "sv" => "Swedish",
    "sw" => "Swahili", "ta" => "Tamil", "te" => "Telugu", "th" => "Thai", "tl" => "Tagalog",
    "tr" => "Turkish", "uk" => "Ukrainian", "ur" => "Urdu", "uz" => "Uzbek",
    "vi" => "Vietnamese", "wo" => "Wolof", "xh" => "Xhosa", "yi" => "Yiddish",
    "yo" => "Yoruba", "yue" => "Cantonese", "zh" => "Chinese", "zu" => "Zulu",
};

/// Returns the English name of the language with the given BCP 47 tag.
fn language_name(code: &str) -> Option<&'static str> {
    let base = code.split('-').next().unwrap_or(code).to_ascii_lowercase();
    LANGUAGES.get(base.as_str()).copied()
}

/// Returns the Wikitext link to the article about a language.
fn language_link(code: &str) -> String {
    match language_name(code) {
        Some(name) => format!("[[{name} language|{name}]]"),
        None => code.to_string(),
    }
}

/// Writes a template call with positional arguments, numbering any argument
/// which would otherwise be mistaken for a named one.
fn call(name: &str, values: &[&str]) -> String {
    let mut out = format!("{{{{{name}");
    for (index, value) in values.iter().enumerate() {
        out.push('|');
        if value.contains('=') {
            out += &format!("{}=", index + 1);
        }
        out.push_str(value);
    }
    out += "}}";
    out
}

/// Wraps text in straight single quotes without creating Wikitext
/// apostrophe markup.
fn quoted(text: &str) -> String {
    format!("&#39;{text}&#39;")
}

/// Returns true if every letter in `text` is from the Latin script.
fn is_latin(text: &str) -> bool {
    text.chars().filter(|c| c.is_alphabetic()).all(|c| {
        c < '\u{0250}' || ('\u{1e00}'..='\u{1eff}').contains(&c)
    })
}

/// `{{Nihongo|English|kanji|romaji|extra|extra2|lead=}}`
pub fn nihongo(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let lead = args.flag("lead");
    let mut parts = Vec::new();
    if let Some(kanji) = args.at(2) {
        let kanji = call("lang", &["ja", kanji]);
        parts.push(if lead {
            format!("[[Japanese language|Japanese]]: {kanji}")
        } else {
            kanji
        });
    }
    if let Some(romaji) = args.at(3) {
        parts.push(if lead {
            format!("[[Hepburn romanization|Hepburn]]: ''{romaji}''")
        } else {
            format!("''{romaji}''")
        });
    }
    if let Some(extra) = args.at(4) {
        parts.push(extra.to_string());
    }

    let mut out = match args.at(1) {
        Some(english) => english.to_string(),
        None if !parts.is_empty() => parts.remove(0),
        None => String::new(),
    };
    if !parts.is_empty() {
        out += &format!(" ({})", parts.join(", "));
    }
    if let Some(extra2) = args.at(5) {
        out.push(' ');
        out += extra2;
    }
    Ok(Expansion::Reparse(out))
}

/// `{{Nihongo2|kanji}}`
pub fn nihongo2(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(Expansion::Reparse(call("lang", &["ja", args.get("1").unwrap_or_default()])))
}

/// `{{Nihongo3|English|kanji|romaji}}`
pub fn nihongo3(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let mut parts = Vec::new();
    if let Some(kanji) = args.at(2) {
        parts.push(call("lang", &["ja", kanji]));
    }
    if let Some(english) = args.at(1) {
        parts.push(english.to_string());
    }
    let out = match (args.at(3), parts.is_empty()) {
        (Some(romaji), true) => format!("''{romaji}''"),
        (Some(romaji), false) => format!("''{romaji}'' ({})", parts.join(", ")),
        (None, _) => parts.join(", "),
    };
    Ok(Expansion::Reparse(out))
}

/// `{{Nihongo foot|English|kanji|romaji}}`
///
/// The kanji and romaji go in a footnote, which is dropped.
pub fn nihongo_foot(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(Expansion::Reparse(
        args.first_of(&["1", "2"]).unwrap_or_default().to_string(),
    ))
}

/// `{{Lang|code|text|italic=}}`
///
/// Latin script text is italicised unless `italic=no`.
pub fn lang(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let Some(code) = args.at(1) else {
        return Ok(Rendered::error("Error: {{Lang}}: no language code").into());
    };
    let text = args.get("2").unwrap_or_default();
    let italic = match args.get("italic") {
        Some(italic) => is_truthy(italic),
        None => {
            !code.eq_ignore_ascii_case("en")
                && (code.ends_with("-Latn") || (!code.contains('-') && is_latin(text)))
                && text.chars().any(char::is_alphabetic)
        }
    };
    let mut content = scope.eval(text)?;
    if italic {
        content = Rendered::styled(Style::Italic, content);
    }
    Ok(Rendered::Lang {
        code: code.to_string(),
        children: content.into_children(),
    }
    .into())
}

/// `{{Langx|code|text|translit|translation|link=|label=}}`, and every
/// `{{Lang-xx|text|translit|translation}}`.
pub fn langx(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let canonical = canonical_name(args.name());
    let (code, first) = match canonical.strip_prefix("lang-") {
        Some(code) => (code, 1),
        None => match args.at(1) {
            Some(code) => (code, 2),
            None => return Ok(Rendered::error("Error: {{Langx}}: no language code").into()),
        },
    };
    let key = |offset: usize| (first + offset).to_string();
    let text = args.get(&key(0)).unwrap_or_default();

    let mut out = match args.get("label") {
        Some("none") => String::new(),
        Some(label) if !label.is_empty() => format!("{label}: "),
        _ if args.get("link").is_some_and(|link| !is_truthy(link)) => {
            format!("{}: ", language_name(code).unwrap_or(code))
        }
        _ => format!("{}: ", language_link(code)),
    };
    out += &call("lang", &[code, text]);
    if let Some(translit) = args.first_of(&["translit", "tr", key(1).as_str()]) {
        out += &format!(", [[Romanization|romanized]]: ''{translit}''");
    }
    if let Some(translation) = args.first_of(&["lit", "translation", key(2).as_str()]) {
        out += ", ";
        out += &call("lit", &[translation]);
    }
    Ok(Expansion::Reparse(out))
}

/// `{{Langnf|code|original|translation}}`
pub fn langnf(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let Some(code) = args.at(1) else {
        return Ok(Rendered::error("Error: {{Langnf}}: no language code").into());
    };
    let mut out = language_link(code);
    if let Some(translation) = args.at(3) {
        out += " for ";
        out += &quoted(translation);
    }
    if let Some(original) = args.at(2) {
        out = format!("{} ({out})", call("lang", &[code, original]));
    }
    Ok(Expansion::Reparse(out))
}

/// `{{Zh|c=|t=|s=|p=|j=|l=|labels=}}`
pub fn zh(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let labels = !args.get("labels").is_some_and(|labels| !is_truthy(labels));
    let mut parts = Vec::new();
    for (key, label, code) in [
        ("c", "Chinese", "zh"),
        ("t", "traditional Chinese", "zh-Hant"),
        ("s", "simplified Chinese", "zh-Hans"),
    ] {
        if let Some(value) = args.nonempty(key) {
            parts.push((label, call("lang", &[code, value])));
        }
    }
    if let Some(pinyin) = args.nonempty("p") {
        parts.push(("[[Pinyin|pinyin]]", format!("''{pinyin}''")));
    }
    if let Some(jyutping) = args.nonempty("j") {
        parts.push(("[[Jyutping]]", jyutping.to_string()));
    }
    if let Some(literal) = args.nonempty("l") {
        parts.push(("lit.", quoted(literal)));
    }
    Ok(Expansion::Reparse(join_labelled(&parts, labels)))
}

/// Joins labelled parts with semicolons.
fn join_labelled(parts: &[(&str, String)], labels: bool) -> String {
    parts
        .iter()
        .map(|(label, value)| {
            if labels {
                format!("{label}: {value}")
            } else {
                value.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Builds the Wikitext for the Korean templates.
fn korean_parts(args: &Args<'_>, auto_rr: bool) -> String {
    let labels = !args.get("labels").is_some_and(|labels| !is_truthy(labels));
    let hangul = args.first_of(&["hangul", "1"]);
    let rr = args.first_of(&["rr", "3"]).map(str::to_string).or_else(|| {
        hangul
            .filter(|_| auto_rr)
            .map(|hangul| romanize(hangul, System::Revised))
    });

    let mut parts = Vec::new();
    if let Some(hangul) = hangul {
        let hangul = hangul.replace(['^', '-'], "");
        parts.push(("[[Korean language|Korean]]", call("lang", &["ko", hangul.as_str()])));
    }
    if let Some(hanja) = args.first_of(&["hanja", "2"]) {
        parts.push(("[[Hanja]]", call("lang", &["ko-Hani", hanja])));
    }
    if let Some(rr) = rr {
        parts.push(("[[Revised Romanization of Korean|RR]]", format!("''{rr}''")));
    }
    if let Some(mr) = args.first_of(&["mr", "4"]) {
        parts.push(("[[McCune–Reischauer|MR]]", format!("''{mr}''")));
    }
    if let Some(literal) = args.nonempty("lit") {
        parts.push(("lit.", quoted(literal)));
    }
    join_labelled(&parts, labels)
}

/// `{{Korean|hangul=|hanja=|rr=|mr=|lit=|labels=}}`
pub fn korean(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(Expansion::Reparse(korean_parts(args, false)))
}

/// `{{Korean/auto|hangul=}}`, which fills in the Revised Romanization from
/// the Hangul when it is not given.
pub fn korean_auto(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(Expansion::Reparse(korean_parts(args, true)))
}

/// `{{Etymology|code|word|meaning|code2|word2|meaning2|…}}`
pub fn etymology(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let positional = args.positional();
    let mut parts = Vec::new();
    for triple in positional.chunks(3) {
        let [code, word, rest @ ..] = triple else {
            break;
        };
        if code.is_empty() {
            break;
        }
        let mut part = format!("{} {}", language_link(code), call("lang", &[*code, *word]));
        if let Some(meaning) = rest.first().filter(|meaning| !meaning.is_empty()) {
            part += ", ";
            part += &quoted(meaning);
        }
        parts.push(part);
    }
    if parts.is_empty() {
        return Ok(Rendered::Empty.into());
    }
    Ok(Expansion::Reparse(format!("from {}", parts.join(" + "))))
}

/// `{{Post-nominals|country=|size=|sep=|post-nominal|…}}`
pub fn post_nominals(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let sep = args.get_raw("sep").map_or(" ", |sep| if sep.is_empty() { " " } else { sep });
    let values = args
        .positional()
        .into_iter()
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>();
    if values.is_empty() {
        return Ok(Rendered::Empty.into());
    }
    let values = values.join(sep);
    Ok(Expansion::Reparse(match args.get("size") {
        Some("100%") => values,
        _ => format!("<small>{values}</small>"),
    }))
}

/// `{{Transl|code|text}}` or `{{Transl|code|system|text}}`
pub fn transl(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let Some(code) = args.at(1) else {
        return Ok(Rendered::error("Error: {{Transl}}: no language code").into());
    };
    let text = args.first_of(&["3", "2"]).unwrap_or_default();
    let code = format!("{}-Latn", code.split('-').next().unwrap_or(code));
    Ok(Expansion::Reparse(call("lang", &[code.as_str(), text])))
}

/// `{{Literally|translation|translation2|…}}`
pub fn lit(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let translations = args
        .positional()
        .into_iter()
        .filter(|value| !value.is_empty())
        .map(quoted)
        .collect::<Vec<_>>();
    Ok(Expansion::Reparse(format!(
        "{} {}",
        call("abbr", &["lit.", "literally"]),
        translations.join(" or ")
    )))
}

/// `{{Gloss|text}}`
pub fn gloss(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(Expansion::Reparse(quoted(args.get("1").unwrap_or_default())))
}

/// `{{IPA|code|transcription|label}}`, `{{IPA|transcription}}`, and every
/// `{{IPA-xx|transcription|label}}`.
///
/// The label is the language’s “pronunciation:” by default; `lang` shows
/// just the language, `pron` shows “pronounced”, and `-` shows nothing.
pub fn ipa(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let canonical = canonical_name(args.name());
    let (code, transcription, label) = match canonical.strip_prefix("ipa-") {
        Some(code) => (Some(code), args.get("1"), args.get("2")),
        None if args.at(2).is_some() => (args.get("1"), args.get("2"), args.get("3")),
        None => (None, args.get("1"), None),
    };
    let Some(transcription) = transcription.filter(|text| !text.is_empty()) else {
        return Ok(Rendered::error("Error: {{IPA}}: no transcription").into());
    };

    let name = code.and_then(language_name);
    let label = match label.unwrap_or_default() {
        "-" => String::new(),
        "pron" => "pronounced ".into(),
        "lang" => name.map(|name| format!("{name}: ")).unwrap_or_default(),
        "" => name
            .map(|name| format!("{name} pronunciation: "))
            .unwrap_or_default(),
        label => format!("{label} "),
    };

    Ok(Rendered::fragment([
        Rendered::text(label),
        Rendered::styled(Style::Ipa, Rendered::text(transcription)),
    ])
    .into())
}

#[cfg(test)]
mod tests {
    use super::super::tests::{render, render_text};

    #[test]
    fn nihongo() {
        assert_eq!(
            render("{{Nihongo|City pop|シティ・ポップ|shiti poppu}}"),
            r#"City pop (<span lang="ja">シティ・ポップ</span>, <i>shiti poppu</i>)"#
        );
        assert_eq!(
            render_text("{{Nihongo|City pop|シティ・ポップ|shiti poppu|lead=yes}}"),
            "City pop (Japanese: シティ・ポップ, Hepburn: shiti poppu)"
        );
        assert_eq!(
            render_text("{{Nihongo||演歌|enka}}"),
            "演歌 (enka)",
            "without English the kanji lead"
        );
        assert_eq!(render_text("{{Nihongo|Visual kei|ヴィジュアル系|||extra}}"), "Visual kei (ヴィジュアル系) extra");
        assert_eq!(render_text("{{nihongo2|歌謡曲}}"), "歌謡曲");
        assert_eq!(render_text("{{nihongo3|popular song|歌謡曲|kayōkyoku}}"), "kayōkyoku (歌謡曲, popular song)");
        assert_eq!(render_text("{{nihongo foot|Enka|演歌|enka}}"), "Enka");
    }

    #[test]
    fn lang() {
        assert_eq!(
            render("{{lang|fr|musique concrète}}"),
            r#"<span lang="fr"><i>musique concrète</i></span>"#
        );
        assert_eq!(
            render("{{lang|fr|musique|italic=no}}"),
            r#"<span lang="fr">musique</span>"#
        );
        assert_eq!(render("{{lang|ru|Музыка}}"), r#"<span lang="ru">Музыка</span>"#);
    }

    #[test]
    fn langx() {
        assert_eq!(
            render_text("{{Langx|fr|musique concrète|lit=concrete music}}"),
            "French: musique concrète, lit. 'concrete music'"
        );
        assert_eq!(
            render_text("{{lang-ru|Музыка|Muzyka|music}}"),
            "Russian: Музыка, romanized: Muzyka, lit. 'music'"
        );
        assert_eq!(
            render("{{langx|de|Krautrock|link=no}}"),
            r#"German: <span lang="de"><i>Krautrock</i></span>"#
        );
        assert_eq!(render_text("{{langx|xx|Zzz|label=none}}"), "Zzz");
        assert_eq!(
            render_text("{{langnf|de|Schlager|hit}}"),
            "Schlager (German for 'hit')"
        );
    }

    #[test]
    fn chinese_and_korean() {
        assert_eq!(
            render_text("{{zh|t=搖滾|s=摇滚|p=yáogǔn}}"),
            "traditional Chinese: 搖滾; simplified Chinese: 摇滚; pinyin: yáogǔn"
        );
        assert_eq!(render_text("{{zh|s=摇滚|labels=no}}"), "摇滚");
        assert_eq!(
            render_text("{{Korean|hangul=트로트|rr=teuroteu}}"),
            "Korean: 트로트; RR: teuroteu"
        );
        assert_eq!(
            render_text("{{Korean/auto|hangul=^케이-팝}}"),
            "Korean: 케이팝; RR: Keipap"
        );
        assert_eq!(
            render_text("{{Korean|hangul=국악|lit=national music|labels=no}}"),
            "국악; 'national music'"
        );
    }

    #[test]
    fn translation() {
        assert_eq!(
            render_text("{{Etymology|grc|μουσική|art of the Muses}}"),
            "from Ancient Greek μουσική, 'art of the Muses'"
        );
        assert_eq!(
            render_text("{{ety|la|cantare|to sing|fr|chanter}}"),
            "from Latin cantare, 'to sing' + French chanter"
        );
        assert_eq!(render("{{post-nominals|OBE|MBE}}"), "<small>OBE MBE</small>");
        assert_eq!(
            render("{{transl|ja|kayōkyoku}}"),
            r#"<span lang="ja-Latn"><i>kayōkyoku</i></span>"#
        );
        assert_eq!(
            render("{{lit|concrete music}}"),
            r#"<abbr title="literally">lit.</abbr> 'concrete music'"#
        );
        assert_eq!(render_text("{{lit|a|b}}"), "lit. 'a' or 'b'");
        assert_eq!(render_text("{{gloss|''it'' works}}"), "'it works'");
    }

    #[test]
    fn ipa() {
        assert_eq!(
            render("{{IPA|fr|myzik kɔ̃kʁɛt}}"),
            r#"French pronunciation: <span class="IPA">myzik kɔ̃kʁɛt</span>"#
        );
        assert_eq!(render_text("{{IPA-de|ˈkʁaʊ̯tʁɔk|lang}}"), "German: ˈkʁaʊ̯tʁɔk");
        assert_eq!(render_text("{{IPA-es|ˈsalsa|pron}}"), "pronounced ˈsalsa");
        assert_eq!(render_text("{{IPA|/ˈsɒŋ/}}"), "/ˈsɒŋ/");
    }
}
