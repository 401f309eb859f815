//! The `{{IPAc-en}}` template, which writes an English pronunciation one
//! phoneme at a time.

use super::*;

/// Labels which may come before the transcription.
static PRESCRIPTS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "lang" => "English: ",
    "pron" => "pronounced ",
    "also" => "also ",
    "local" => "locally ",
    "often" => "often ",
    "sometimes" => "sometimes ",
    "uk" => "UK: ",
    "us" => "US: ",
    "au" => "Australian: ",
    "ca" => "Canadian: ",
    "nz" => "NZ: ",
    "ie" => "Irish: ",
};

/// Phonemes of the English pronunciation key, as the displayed symbol and
/// the example shown on hover.
static PHONEMES: phf::Map<&'static str, (&'static str, &'static str)> = phf::phf_map! {
    "b" => ("b", "‘b’ in ‘buy’"),
    "d" => ("d", "‘d’ in ‘dye’"),
    "dʒ" => ("dʒ", "‘j’ in ‘jam’"),
    "ð" => ("ð", "‘th’ in ‘thy’"),
    "f" => ("f", "‘f’ in ‘find’"),
    "ɡ" => ("ɡ", "‘g’ in ‘guy’"),
    "g" => ("ɡ", "‘g’ in ‘guy’"),
    "h" => ("h", "‘h’ in ‘hi’"),
    "hw" => ("hw", "‘wh’ in ‘why’"),
    "j" => ("j", "‘y’ in ‘yes’"),
    "k" => ("k", "‘k’ in ‘kind’"),
    "l" => ("l", "‘l’ in ‘lie’"),
    "m" => ("m", "‘m’ in ‘my’"),
    "n" => ("n", "‘n’ in ‘nigh’"),
    "ŋ" => ("ŋ", "‘ng’ in ‘sing’"),
    "θ" => ("θ", "‘th’ in ‘thigh’"),
    "p" => ("p", "‘p’ in ‘pie’"),
    "r" => ("r", "‘r’ in ‘rye’"),
    "s" => ("s", "‘s’ in ‘sigh’"),
    "ʃ" => ("ʃ", "‘sh’ in ‘shy’"),
    "t" => ("t", "‘t’ in ‘tie’"),
    "tʃ" => ("tʃ", "‘ch’ in ‘China’"),
    "v" => ("v", "‘v’ in ‘vie’"),
    "w" => ("w", "‘w’ in ‘wind’"),
    "z" => ("z", "‘z’ in ‘zoom’"),
    "ʒ" => ("ʒ", "‘s’ in ‘pleasure’"),
    "x" => ("x", "‘ch’ in ‘loch’"),
    "æ" => ("æ", "‘a’ in ‘bad’"),
    "ɑː" => ("ɑː", "‘a’ in ‘father’"),
    "ɒ" => ("ɒ", "‘o’ in ‘body’"),
    "ɔː" => ("ɔː", "‘au’ in ‘fraud’"),
    "aɪ" => ("aɪ", "‘i’ in ‘tide’"),
    "aʊ" => ("aʊ", "‘ou’ in ‘mouth’"),
    "ɛ" => ("ɛ", "‘e’ in ‘dress’"),
    "eɪ" => ("eɪ", "‘a’ in ‘face’"),
    "ɪ" => ("ɪ", "‘i’ in ‘kit’"),
    "iː" => ("iː", "‘ee’ in ‘fleece’"),
    "ɔɪ" => ("ɔɪ", "‘oi’ in ‘choice’"),
    "oʊ" => ("oʊ", "‘o’ in ‘code’"),
    "ʊ" => ("ʊ", "‘u’ in ‘push’"),
    "uː" => ("uː", "‘oo’ in ‘goose’"),
    "juː" => ("juː", "‘u’ in ‘cute’"),
    "ʌ" => ("ʌ", "‘u’ in ‘cut’"),
    "ɜːr" => ("ɜːr", "‘ur’ in ‘fur’"),
    "ər" => ("ər", "‘er’ in ‘letter’"),
    "ə" => ("ə", "‘a’ in ‘about’"),
    "i" => ("i", "‘y’ in ‘happy’"),
    "u" => ("u", "‘u’ in ‘influence’"),
    "ɑːr" => ("ɑːr", "‘ar’ in ‘far’"),
    "ɔːr" => ("ɔːr", "‘or’ in ‘north’"),
    "ɪər" => ("ɪər", "‘eer’ in ‘beer’"),
    "ɛər" => ("ɛər", "‘air’ in ‘fair’"),
    "ʊər" => ("ʊər", "‘oor’ in ‘moor’"),
    "ˈ" => ("ˈ", "primary stress follows"),
    "'" => ("ˈ", "primary stress follows"),
    "ˌ" => ("ˌ", "secondary stress follows"),
    "," => ("ˌ", "secondary stress follows"),
    "." => (".", "syllable break"),
};

/// `{{IPAc-en|prescript|phoneme|phoneme|…|audio=}}`
///
/// Unknown phonemes are shown as written.
pub fn ipac_en(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let mut tokens = args.positional().into_iter().peekable();

    let mut prescript = String::new();
    while let Some(label) = tokens
        .peek()
        .and_then(|token| PRESCRIPTS.get(token.to_ascii_lowercase().as_str()))
    {
        prescript.push_str(label);
        tokens.next();
    }

    let mut transcription = vec![Rendered::text("/")];
    for token in tokens {
        transcription.push(match token {
            "" => continue,
            "_" => Rendered::text(" "),
            "-" => Rendered::text("-"),
            ";" => Rendered::text(", "),
            token => match PHONEMES.get(token) {
                Some((symbol, example)) => Rendered::tooltip(
                    format!("/{symbol}/: {example}"),
                    Some("IPA-key"),
                    Rendered::text(*symbol),
                ),
                None => Rendered::text(token),
            },
        });
    }
    transcription.push(Rendered::text("/"));

    let audio = args.nonempty("audio").map(|file| Rendered::Audio {
        file: file.to_string(),
        children: vec![Rendered::text("ⓘ")],
    });

    Ok(Rendered::fragment([
        Rendered::text(prescript),
        Rendered::styled(Style::Ipa, Rendered::fragment(transcription)),
        audio.unwrap_or_default(),
    ])
    .into())
}

#[cfg(test)]
mod tests {
    use super::super::tests::{render, render_text};

    #[test]
    fn transcription() {
        assert_eq!(render_text("{{IPAc-en|ˈ|s|ɒ|ŋ}}"), "/ˈsɒŋ/");
        assert_eq!(
            render("{{IPAc-en|s}}"),
            r#"<span class="IPA">/<abbr title="/s/: ‘s’ in ‘sigh’" class="IPA-key">s</abbr>/</span>"#
        );
        assert_eq!(
            render_text("{{IPAc-en|'|r|ɒ|k|_|ə|n|_|'|r|oʊ|l}}"),
            "/ˈrɒk ən ˈroʊl/"
        );
        assert_eq!(render_text("{{IPAc-en|g|q}}"), "/ɡq/", "unknown phonemes pass through");
    }

    #[test]
    fn prescripts_and_audio() {
        assert_eq!(render_text("{{IPAc-en|US|ˈ|r|ɒ|k}}"), "US: /ˈrɒk/");
        assert_eq!(render_text("{{IPAc-en|lang|pron|d|ʒ|æ|z}}"), "English: pronounced /dʒæz/");
        assert!(
            render("{{IPAc-en|d|ʒ|æ|z|audio=Jazz.ogg}}")
                .ends_with(r#"/</span><span class="audio" data-file="Jazz.ogg">ⓘ</span>"#),
            "audio should follow the transcription"
        );
    }
}
