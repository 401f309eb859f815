//! Romanization of Korean Hangul text.
//!
//! Romanization works syllable by syllable from a fixed table of common
//! syllables. There is no jamo decomposition and no sound change across
//! syllable boundaries, so `한국` becomes `hanguk` but `신라` becomes
//! `sinra` rather than `silla`. Text the tables do not know is copied through
//! unchanged.

use crate::common::uc_first;

mod tables;

/// The control symbol which, at the start of the input, capitalises the
/// output.
const CAPITALIZE: char = '^';

/// The control symbol which marks a syllable break.
const SYLLABLE_BREAK: char = '-';

/// A romanization system.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum System {
    /// The Revised Romanization of Korean.
    Revised,
    /// McCune–Reischauer.
    McCuneReischauer,
}

impl System {
    /// The syllable table for this system.
    fn table(self) -> &'static phf::Map<char, &'static str> {
        match self {
            Self::Revised => &tables::REVISED,
            Self::McCuneReischauer => &tables::MCCUNE_REISCHAUER,
        }
    }
}

/// Romanizes `hangul` using either the Revised Romanization (`revised`) or
/// McCune–Reischauer.
pub fn romanize_hangul(hangul: &str, revised: bool) -> String {
    romanize(
        hangul,
        if revised {
            System::Revised
        } else {
            System::McCuneReischauer
        },
    )
}

/// Romanizes `hangul` using the given system.
pub fn romanize(hangul: &str, system: System) -> String {
    let capitalize = hangul.starts_with(CAPITALIZE);
    let table = system.table();
    let mut out = String::with_capacity(hangul.len());
    for c in hangul
        .chars()
        .filter(|&c| c != CAPITALIZE && c != SYLLABLE_BREAK)
    {
        match table.get(&c) {
            Some(&latin) => out += latin,
            None => out.push(c),
        }
    }

    if capitalize { uc_first(&out) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revised() {
        assert_eq!(romanize_hangul("케이팝", true), "keipap");
        assert_eq!(romanize_hangul("^케이팝", true), "Keipap");
        assert_eq!(romanize_hangul("한국", true), "hanguk");
    }

    #[test]
    fn mccune_reischauer() {
        assert_eq!(romanize_hangul("케이팝", false), "k'eip'ap");
        assert_eq!(romanize_hangul("^한국", false), "Hankuk");
        assert_eq!(romanize_hangul("시", false), "shi");
    }

    #[test]
    fn passthrough() {
        assert_eq!(romanize_hangul("가x나", true), "gaxna");
        assert_eq!(romanize_hangul("K-팝", true), "Kpap", "break symbols are removed");
        assert_eq!(romanize_hangul("뷁", true), "뷁", "unknown syllables pass through");
        assert_eq!(romanize_hangul("", true), "");
    }

    #[test]
    fn capitalize_only_at_start() {
        assert_eq!(romanize_hangul("가^나", true), "gana");
    }
}
