//! The `{{Convert}}` template.

use super::*;
use crate::numbers::{
    MAX_PLACES, group_decimal, round_places, round_significant, significant_digits,
};
use Quantity::{Area, Length, Mass, Speed, Temperature, Volume};

/// The physical quantity measured by a unit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Quantity {
    Length,
    Mass,
    Area,
    Volume,
    Speed,
    Temperature,
}

/// A unit of measurement.
#[derive(Debug)]
struct Unit {
    quantity: Quantity,
    /// The abbreviated form.
    symbol: &'static str,
    singular: &'static str,
    plural: &'static str,
    /// The US spelling of the singular and plural names, if different.
    us: Option<(&'static str, &'static str)>,
    /// Multiplier to the SI unit of the quantity, applied after `offset`.
    factor: f64,
    /// Addend to reach the zero point of the SI unit. Only temperatures have
    /// one.
    offset: f64,
    /// The unit which values are converted into by default.
    default: &'static str,
}

impl Unit {
    /// Creates a unit with no offset and no separate US spelling.
    const fn new(
        quantity: Quantity,
        symbol: &'static str,
        singular: &'static str,
        plural: &'static str,
        factor: f64,
        default: &'static str,
    ) -> Self {
        Self {
            quantity,
            symbol,
            singular,
            plural,
            us: None,
            factor,
            offset: 0.0,
            default,
        }
    }

    /// Adds US spellings of the unit name.
    const fn us(self, singular: &'static str, plural: &'static str) -> Self {
        Self {
            us: Some((singular, plural)),
            ..self
        }
    }

    /// Adds an offset to the zero point of the SI unit.
    const fn offset(self, offset: f64) -> Self {
        Self { offset, ..self }
    }
}

/// Supported units, by the codes `{{Convert}}` uses for them.
static UNITS: phf::Map<&'static str, Unit> = phf::phf_map! {
    "m" => Unit::new(Length, "m", "metre", "metres", 1.0, "ft").us("meter", "meters"),
    "km" => Unit::new(Length, "km", "kilometre", "kilometres", 1000.0, "mi").us("kilometer", "kilometers"),
    "cm" => Unit::new(Length, "cm", "centimetre", "centimetres", 0.01, "in").us("centimeter", "centimeters"),
    "mm" => Unit::new(Length, "mm", "millimetre", "millimetres", 0.001, "in").us("millimeter", "millimeters"),
    "mi" => Unit::new(Length, "mi", "mile", "miles", 1609.344, "km"),
    "yd" => Unit::new(Length, "yd", "yard", "yards", 0.9144, "m"),
    "ft" => Unit::new(Length, "ft", "foot", "feet", 0.3048, "m"),
    "in" => Unit::new(Length, "in", "inch", "inches", 0.0254, "cm"),
    "nmi" => Unit::new(Length, "nmi", "nautical mile", "nautical miles", 1852.0, "km"),
    "kg" => Unit::new(Mass, "kg", "kilogram", "kilograms", 1.0, "lb"),
    "g" => Unit::new(Mass, "g", "gram", "grams", 0.001, "oz"),
    "t" => Unit::new(Mass, "t", "tonne", "tonnes", 1000.0, "ShortTon"),
    "ShortTon" => Unit::new(Mass, "short ton", "short ton", "short tons", 907.184_74, "t"),
    "lb" => Unit::new(Mass, "lb", "pound", "pounds", 0.453_592_37, "kg"),
    "oz" => Unit::new(Mass, "oz", "ounce", "ounces", 0.028_349_523_125, "g"),
    "st" => Unit::new(Mass, "st", "stone", "stone", 6.350_293_18, "kg"),
    "m2" => Unit::new(Area, "m²", "square metre", "square metres", 1.0, "sqft").us("square meter", "square meters"),
    "km2" => Unit::new(Area, "km²", "square kilometre", "square kilometres", 1e6, "sqmi").us("square kilometer", "square kilometers"),
    "ha" => Unit::new(Area, "ha", "hectare", "hectares", 1e4, "acre"),
    "sqft" => Unit::new(Area, "sq ft", "square foot", "square feet", 0.092_903_04, "m2"),
    "sqmi" => Unit::new(Area, "sq mi", "square mile", "square miles", 2_589_988.110_336, "km2"),
    "acre" => Unit::new(Area, "acre", "acre", "acres", 4046.856_422_4, "ha"),
    "l" => Unit::new(Volume, "L", "litre", "litres", 0.001, "USgal").us("liter", "liters"),
    "ml" => Unit::new(Volume, "ml", "millilitre", "millilitres", 1e-6, "USfloz").us("milliliter", "milliliters"),
    "m3" => Unit::new(Volume, "m³", "cubic metre", "cubic metres", 1.0, "cuft").us("cubic meter", "cubic meters"),
    "cuft" => Unit::new(Volume, "cu ft", "cubic foot", "cubic feet", 0.028_316_846_592, "m3"),
    "USgal" => Unit::new(Volume, "US gal", "US gallon", "US gallons", 0.003_785_411_784, "l"),
    "impgal" => Unit::new(Volume, "imp gal", "imperial gallon", "imperial gallons", 0.004_546_09, "l"),
    "USfloz" => Unit::new(Volume, "US fl oz", "US fluid ounce", "US fluid ounces", 2.957_352_956_25e-5, "ml"),
    "km/h" => Unit::new(Speed, "km/h", "kilometre per hour", "kilometres per hour", 1.0 / 3.6, "mph").us("kilometer per hour", "kilometers per hour"),
    "mph" => Unit::new(Speed, "mph", "mile per hour", "miles per hour", 0.447_04, "km/h"),
    "m/s" => Unit::new(Speed, "m/s", "metre per second", "metres per second", 1.0, "ft/s").us("meter per second", "meters per second"),
    "ft/s" => Unit::new(Speed, "ft/s", "foot per second", "feet per second", 0.3048, "m/s"),
    "kn" => Unit::new(Speed, "kn", "knot", "knots", 1852.0 / 3600.0, "km/h"),
    "C" => Unit::new(Temperature, "°C", "degree Celsius", "degrees Celsius", 1.0, "F").offset(273.15),
    "F" => Unit::new(Temperature, "°F", "degree Fahrenheit", "degrees Fahrenheit", 5.0 / 9.0, "C").offset(459.67),
    "K" => Unit::new(Temperature, "K", "kelvin", "kelvins", 1.0, "C"),
};

/// Alternative spellings of unit codes.
static ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "metre" => "m", "meter" => "m", "metres" => "m", "meters" => "m",
    "kilometre" => "km", "kilometer" => "km", "kilometres" => "km", "kilometers" => "km",
    "mile" => "mi", "miles" => "mi", "foot" => "ft", "feet" => "ft", "inch" => "in",
    "kilogram" => "kg", "kilograms" => "kg", "pound" => "lb", "pounds" => "lb",
    "L" => "l", "litre" => "l", "liter" => "l", "mL" => "ml",
    "kph" => "km/h", "kmh" => "km/h", "knot" => "kn", "knots" => "kn",
    "°C" => "C", "°F" => "F", "sqkm" => "km2", "acres" => "acre",
};

/// Looks up a unit by its code or an alternative spelling.
fn find_unit(code: &str) -> Option<&'static Unit> {
    UNITS
        .get(code)
        .or_else(|| ALIASES.get(code).and_then(|code| UNITS.get(code)))
}

/// Words which join the two ends of a range.
const RANGE_WORDS: &[&str] = &["to", "-", "–", "and", "or", "by", "x", "×"];

/// How the two values are shown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Display {
    /// `input (output)`
    Both,
    /// `input or output`
    Or,
    /// `output (input)`
    Flip,
    /// `output`
    Output,
}

/// Options which apply to the whole conversion.
#[derive(Debug)]
struct Options {
    /// Abbreviate the input unit.
    abbr_input: bool,
    /// Abbreviate the output unit.
    abbr_output: bool,
    /// Use the unit name as an adjective.
    adjective: bool,
    /// Use American spellings.
    us: bool,
    display: Display,
}

/// Parses a number as written in an article.
fn parse_number(text: &str) -> Option<(f64, String)> {
    let cleaned = text.replace(',', "").replace('\u{2212}', "-");
    let value = cleaned.parse::<f64>().ok().filter(|value| value.is_finite())?;
    Some((value, cleaned))
}

/// Writes one side of a conversion.
fn measurement(
    values: &[String],
    range: Option<&str>,
    unit: &Unit,
    abbr: bool,
    options: &Options,
) -> String {
    let mut out = match (range, values) {
        (Some("-" | "–"), [from, to]) => format!("{from}–{to}"),
        (Some(word), [from, to]) => format!("{from} {word} {to}"),
        (_, values) => values.join(" "),
    };
    if abbr {
        out.push('\u{a0}');
        out += unit.symbol;
        return out;
    }

    let (singular, plural) = match unit.us {
        Some(us) if options.us => us,
        _ => (unit.singular, unit.plural),
    };
    if options.adjective {
        out.push('-');
        out += singular;
    } else {
        out.push(' ');
        out += if range.is_none() && values.first().is_some_and(|value| value == "1") {
            singular
        } else {
            plural
        };
    }
    out
}

/// Converts a value between two units.
fn convert_value(value: f64, from: &Unit, to: &Unit) -> f64 {
    (value + from.offset) * from.factor / to.factor - to.offset
}

/// `{{Convert|value|unit|target|precision}}` and
/// `{{Convert|value|to|value2|unit|target|precision}}`, with `abbr=`, `adj=`,
/// `sp=us`, and `disp=` options. `{{Cvt}}` abbreviates both sides.
pub fn convert(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let positional = args.positional();
    let mut parts = positional.iter().copied();

    let Some((first, first_text)) = parts.next().and_then(parse_number) else {
        return Ok(Rendered::error(format!(
            "Error in convert: '{}' is not a number",
            args.get("1").unwrap_or_default()
        ))
        .into());
    };
    let mut values = vec![(first, first_text)];
    let mut range = None;
    let mut unit_code = parts.next().unwrap_or_default();
    if RANGE_WORDS.contains(&unit_code) {
        range = Some(unit_code);
        match parts.next().and_then(parse_number) {
            Some(second) => values.push(second),
            None => return Ok(Rendered::error("Error in convert: range needs two numbers").into()),
        }
        unit_code = parts.next().unwrap_or_default();
    }

    let Some(from) = find_unit(unit_code) else {
        return Ok(Rendered::error(format!("Error in convert: unknown unit '{unit_code}'")).into());
    };
    let target_code = parts
        .next()
        .filter(|code| !code.is_empty())
        .unwrap_or(from.default);
    let Some(to) = find_unit(target_code) else {
        return Ok(Rendered::error(format!("Error in convert: unknown unit '{target_code}'")).into());
    };
    if to.quantity != from.quantity {
        return Ok(Rendered::error(format!(
            "Error in convert: cannot convert '{unit_code}' to '{target_code}'"
        ))
        .into());
    }
    let precision = match parts.next().filter(|precision| !precision.is_empty()) {
        Some(precision) => match precision.parse::<i32>() {
            Ok(places) if (-MAX_PLACES..=MAX_PLACES).contains(&places) => Some(places),
            _ => {
                return Ok(Rendered::error(format!(
                    "Error in convert: precision '{precision}' is out of range"
                ))
                .into());
            }
        },
        None => None,
    };

    let cvt = canonical_name(args.name()) == "cvt";
    let abbr = args.get("abbr").unwrap_or(if cvt { "on" } else { "" });
    let options = Options {
        abbr_input: matches!(abbr, "on" | "in" | "values"),
        abbr_output: !matches!(abbr, "off" | "in"),
        adjective: args.flag("adj"),
        us: args.get("sp") == Some("us"),
        display: match args.get("disp").unwrap_or_default() {
            "or" => Display::Or,
            "flip" => Display::Flip,
            "out" | "output only" => Display::Output,
            _ => Display::Both,
        },
    };

    let inputs = values
        .iter()
        .map(|(_, text)| group_decimal(text).into_owned())
        .collect::<Vec<_>>();
    let outputs = values
        .iter()
        .map(|(value, text)| {
            let converted = convert_value(*value, from, to);
            let rounded = match precision {
                Some(places) => round_places(converted, places),
                None => round_significant(converted, significant_digits(text).max(2)),
            };
            group_decimal(&rounded).into_owned()
        })
        .collect::<Vec<_>>();

    let input = measurement(&inputs, range, from, options.abbr_input, &options);
    let output = measurement(&outputs, range, to, options.abbr_output, &Options {
        adjective: false,
        ..options
    });
    let text = match options.display {
        Display::Both => format!("{input} ({output})"),
        Display::Or => format!("{input} or {output}"),
        Display::Flip => format!("{output} ({input})"),
        Display::Output => output,
    };
    Ok(Rendered::text(text).into())
}

#[cfg(test)]
mod tests {
    use super::super::tests::{render, render_text};

    #[test]
    fn defaults() {
        assert_eq!(render_text("{{convert|5|km}}"), "5 kilometres (3.1\u{a0}mi)");
        assert_eq!(render_text("{{convert|100|m|ft}}"), "100 metres (330\u{a0}ft)");
        assert_eq!(render_text("{{cvt|10|kg}}"), "10\u{a0}kg (22\u{a0}lb)");
        assert_eq!(render_text("{{convert|1,500|m|ft|0}}"), "1,500 metres (4,921\u{a0}ft)");
        assert_eq!(render_text("{{convert|1|mi|km|2}}"), "1 mile (1.61\u{a0}km)");
    }

    #[test]
    fn temperatures() {
        assert_eq!(render_text("{{convert|20|C}}"), "20 degrees Celsius (68\u{a0}°F)");
        assert_eq!(
            render_text("{{convert|-40|C|abbr=on}}"),
            "\u{2212}40\u{a0}°C (\u{2212}40\u{a0}°F)"
        );
    }

    #[test]
    fn options() {
        assert_eq!(
            render_text("{{convert|5|to|10|km|mi|abbr=on}}"),
            "5 to 10\u{a0}km (3.1 to 6.2\u{a0}mi)"
        );
        assert_eq!(render_text("{{convert|5|-|10|km}}"), "5–10 kilometres (3.1–6.2\u{a0}mi)");
        assert_eq!(render_text("{{convert|1|mi|km|adj=on}}"), "1-mile (1.6\u{a0}km)");
        assert_eq!(render_text("{{convert|3|m|sp=us|abbr=off}}"), "3 meters (9.8 feet)");
        assert_eq!(render_text("{{convert|5|km|disp=or}}"), "5 kilometres or 3.1\u{a0}mi");
        assert_eq!(render_text("{{convert|5|km|disp=flip}}"), "3.1\u{a0}mi (5 kilometres)");
    }

    #[test]
    fn errors() {
        assert_eq!(
            render("{{convert|5|furlong}}"),
            r#"<span class="error">Error in convert: unknown unit 'furlong'</span>"#
        );
        assert_eq!(
            render_text("{{convert|five|km}}"),
            "Error in convert: 'five' is not a number"
        );
        assert_eq!(
            render_text("{{convert|5|km|kg}}"),
            "Error in convert: cannot convert 'km' to 'kg'"
        );
        assert_eq!(
            render("{{convert|1|m|ft|-2147483648}}"),
            r#"<span class="error">Error in convert: precision '-2147483648' is out of range</span>"#
        );
        assert_eq!(
            render("{{convert|1|m|ft|50000000}}"),
            r#"<span class="error">Error in convert: precision '50000000' is out of range</span>"#
        );
        assert_eq!(
            render_text("{{convert|1|m|ft|x}}"),
            "Error in convert: precision 'x' is out of range"
        );
    }
}
