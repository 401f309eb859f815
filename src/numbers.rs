//! Number formatting functions.

use std::borrow::Cow;

/// Number names below twenty.
const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Names of the multiples of ten, starting from twenty.
const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Short scale group names, largest first.
const SCALES: [(u64, &str); 6] = [
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// Formats an integer with `,` thousands separators.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::new();
    if n < 0 {
        out.push('-');
    }
    for (index, chunk) in digits.as_bytes().rchunks(3).rev().enumerate() {
        if index != 0 {
            out.push(',');
        }
        out.extend(chunk.iter().map(|&b| char::from(b)));
    }
    out
}

/// Formats a decimal string with `,` thousands separators in the integer part.
/// Anything which is not a plain decimal number is returned unchanged.
pub fn group_decimal(n: &str) -> Cow<'_, str> {
    let (sign, unsigned) = match n.strip_prefix(['-', '\u{2212}']) {
        Some(rest) => ("\u{2212}", rest),
        None => ("", n),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if whole.is_empty()
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Cow::Borrowed(n);
    }
    let mut out = String::from(sign);
    for (index, chunk) in whole.as_bytes().rchunks(3).rev().enumerate() {
        if index != 0 {
            out.push(',');
        }
        out.extend(chunk.iter().map(|&b| char::from(b)));
    }
    if !fraction.is_empty() {
        out.push('.');
        out += fraction;
    }
    Cow::Owned(out)
}

/// Spells out an integer as English words, e.g. `twenty-one`.
pub fn cardinal(n: i64) -> String {
    let mut out = String::new();
    if n < 0 {
        out += "minus ";
    }
    spell(&mut out, n.unsigned_abs());
    out
}

/// Spells out an integer as English ordinal words, e.g. `twenty-first`.
pub fn ordinal(n: i64) -> String {
    let words = cardinal(n);
    let (head, last) = match words.rfind([' ', '-']) {
        Some(index) => words.split_at(index + 1),
        None => ("", words.as_str()),
    };
    let last = match last {
        "one" => "first".into(),
        "two" => "second".into(),
        "three" => "third".into(),
        "five" => "fifth".into(),
        "eight" => "eighth".into(),
        "nine" => "ninth".into(),
        "twelve" => "twelfth".into(),
        last if last.ends_with('y') => format!("{}ieth", &last[..last.len() - 1]),
        last => format!("{last}th"),
    };
    format!("{head}{last}")
}

/// Returns the English ordinal suffix for an integer, e.g. `rd` for 23.
pub fn ordinal_suffix(n: i64) -> &'static str {
    let n = n.unsigned_abs();
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Counts the significant digits in a plain decimal number string. Trailing
/// zeros in a whole number are not significant.
pub fn significant_digits(n: &str) -> u32 {
    let (whole, fraction) = n.split_once('.').unwrap_or((n, ""));
    let digits = whole
        .chars()
        .chain(fraction.chars())
        .filter(char::is_ascii_digit)
        .skip_while(|&digit| digit == '0')
        .collect::<String>();
    let digits = if fraction.is_empty() {
        digits.trim_end_matches('0')
    } else {
        &digits
    };
    u32::try_from(digits.len()).unwrap_or(u32::MAX).max(1)
}

/// The largest number of decimal places, in either direction, that
/// [`round_places`] will round to.
pub const MAX_PLACES: i32 = 20;

/// Formats a number rounded to `places` decimal places, without trailing
/// zeros. Negative `places` round to tens, hundreds, and so on. `places` is
/// clamped to ±[`MAX_PLACES`].
// Clippy: `places` is clamped to a small non-negative number.
#[allow(clippy::cast_sign_loss)]
pub fn round_places(value: f64, places: i32) -> String {
    let places = places.clamp(-MAX_PLACES, MAX_PLACES);
    let out = if places >= 0 {
        format!("{value:.precision$}", precision = places as usize)
    } else {
        let factor = 10_f64.powi(-places);
        format!("{:.0}", (value / factor).round() * factor)
    };
    let out = if out.contains('.') {
        out.trim_end_matches('0').trim_end_matches('.')
    } else {
        out.as_str()
    };
    if out == "-0" { "0".into() } else { out.to_string() }
}

/// Formats a number rounded to `digits` significant figures.
// Clippy: Magnitudes of finite doubles fit in an i32.
#[allow(clippy::cast_possible_truncation)]
pub fn round_significant(value: f64, digits: u32) -> String {
    if value == 0.0 || !value.is_finite() {
        return round_places(value, 0);
    }
    let magnitude = value.abs().log10().floor() as i32;
    let digits = i32::try_from(digits).unwrap_or(i32::MAX);
    round_places(value, digits.saturating_sub(1).saturating_sub(magnitude))
}

/// Writes the words for `n` into `out`.
fn spell(out: &mut String, n: u64) {
    if n < 1000 {
        spell_hundreds(out, n);
        return;
    }

    let mut rest = n;
    let mut first = true;
    for (scale, name) in SCALES {
        if rest >= scale {
            if !first {
                out.push(' ');
            }
            spell_hundreds(out, rest / scale);
            out.push(' ');
            *out += name;
            rest %= scale;
            first = false;
        }
    }
    if rest != 0 {
        out.push(' ');
        if rest < 100 {
            *out += "and ";
        }
        spell_hundreds(out, rest);
    }
}

/// Writes the words for `n` (which must be < 1000) into `out`.
// Clippy: `n` is always < 1000, so indices are in range.
#[allow(clippy::cast_possible_truncation)]
fn spell_hundreds(out: &mut String, n: u64) {
    let hundreds = n / 100;
    let rest = (n % 100) as usize;
    if hundreds != 0 {
        *out += ONES[hundreds as usize];
        *out += " hundred";
        if rest == 0 {
            return;
        }
        *out += " and ";
    }
    if rest < 20 {
        *out += ONES[rest];
    } else {
        *out += TENS[rest / 10 - 2];
        if rest % 10 != 0 {
            out.push('-');
            *out += ONES[rest % 10];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(-1_234_567), "-1,234,567");
    }

    #[test]
    fn test_group_decimal() {
        assert_eq!(group_decimal("1234.5678"), "1,234.5678");
        assert_eq!(group_decimal("-12345"), "\u{2212}12,345");
        assert_eq!(group_decimal("12e3"), Cow::Borrowed("12e3"));
    }

    #[test]
    fn test_cardinal() {
        assert_eq!(cardinal(0), "zero");
        assert_eq!(cardinal(13), "thirteen");
        assert_eq!(cardinal(40), "forty");
        assert_eq!(cardinal(21), "twenty-one");
        assert_eq!(cardinal(100), "one hundred");
        assert_eq!(cardinal(342), "three hundred and forty-two");
        assert_eq!(cardinal(1005), "one thousand and five");
        assert_eq!(cardinal(2_300_001), "two million three hundred thousand and one");
        assert_eq!(cardinal(-7), "minus seven");
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(1), "first");
        assert_eq!(ordinal(12), "twelfth");
        assert_eq!(ordinal(20), "twentieth");
        assert_eq!(ordinal(21), "twenty-first");
        assert_eq!(ordinal(103), "one hundred and third");
        assert_eq!(ordinal(14), "fourteenth");
    }

    #[test]
    fn test_ordinal_suffix() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(112), "th");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(100), "th");
    }

    #[test]
    fn test_significant_digits() {
        assert_eq!(significant_digits("5"), 1);
        assert_eq!(significant_digits("100"), 1);
        assert_eq!(significant_digits("1,500"), 2);
        assert_eq!(significant_digits("1.50"), 3);
        assert_eq!(significant_digits("0.05"), 1);
        assert_eq!(significant_digits("-40"), 1);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_significant(3.106_86, 2), "3.1");
        assert_eq!(round_significant(328.084, 2), "330");
        assert_eq!(round_significant(-40.000_000_1, 2), "-40");
        assert_eq!(round_significant(0.012_34, 2), "0.012");
        assert_eq!(round_places(1.609_344, 2), "1.61");
        assert_eq!(round_places(2.5001, 2), "2.5");
        assert_eq!(round_places(4921.26, 0), "4921");
        assert_eq!(round_places(4921.26, -2), "4900");
        assert_eq!(round_places(-0.001, 1), "0");
        assert_eq!(round_places(0.5, i32::MAX), "0.5", "precision is clamped");
        assert_eq!(round_places(1234.0, i32::MIN), "0", "precision is clamped");
    }
}
