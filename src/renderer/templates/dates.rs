//! Date and age templates.

use super::*;
use crate::{
    date::{self, PartialDate, Unit, birth_range, parse_date, parse_timestamp, split_elapsed},
    numbers::{cardinal, group_thousands, ordinal},
};
use time::Date;

/// The error shown for missing or impossible dates.
const INVALID_DATE: &str = "Error: Need valid year, month, day";

/// Reads a year which is within the supported calendar range.
fn year_at(args: &Args<'_>, index: usize) -> Option<i32> {
    number_at::<i32>(args, index)
        .filter(|year| (Date::MIN.year()..=Date::MAX.year()).contains(year))
}

/// Reads a `year|month|day` triple starting from the 1-based positional
/// argument `first`. Months may be numbers or English names.
fn ymd(args: &Args<'_>, first: usize) -> Option<PartialDate> {
    let year = year_at(args, first)?;
    let month = match args.at(first + 1) {
        Some(month) => month
            .parse()
            .ok()
            .or_else(|| date::parse_month(month).map(u8::from))?,
        None => 0,
    };
    let day = match args.at(first + 2) {
        Some(day) => day.parse().ok()?,
        None => 0,
    };
    PartialDate::new(year, month, day)
}

/// Today’s date, according to the render context.
fn today(scope: &Scope<'_, '_>) -> PartialDate {
    PartialDate::from_date(scope.context().now().date())
}

/// Renders a date, with an optional time of day from the positional
/// arguments `4|5|6` and a time zone from `7`.
fn time_of(args: &Args<'_>, date: &PartialDate) -> Rendered {
    let day_first = args.flag("df");
    let mut visible = date.display(day_first);
    let mut iso = date.iso();

    let hour = number_at::<u8>(args, 4).filter(|hour| *hour < 24);
    if let Some(hour) = hour
        && date.is_full()
    {
        let minute = number_at::<u8>(args, 5).filter(|minute| *minute < 60).unwrap_or(0);
        let second = number_at::<u8>(args, 6).filter(|second| *second < 60);
        visible = match second {
            Some(second) => format!("{hour:02}:{minute:02}:{second:02}, {visible}"),
            None => format!("{hour:02}:{minute:02}, {visible}"),
        };
        iso = format!("{iso}T{hour:02}:{minute:02}:{:02}", second.unwrap_or(0));
        match args.at(7) {
            Some("Z" | "UTC") => {
                visible += " (UTC)";
                iso.push('Z');
            }
            Some(zone) => {
                visible = format!("{visible} ({zone})");
                iso += zone;
            }
            None => {}
        }
    }

    Rendered::Time {
        iso,
        children: vec![Rendered::text(visible)],
    }
}

/// The abbreviation for *circa*.
fn circa_abbr() -> Rendered {
    Rendered::tooltip("circa", None, Rendered::text("c."))
}

/// `{{Age|year|month|day|year2|month2|day2|format=}}`
///
/// The second date defaults to today. `format` is one of `raw`, `commas`
/// (the default), `cardinal`, or `ordinal`.
pub fn age(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let Some(from) = ymd(args, 1) else {
        return Ok(Rendered::error(INVALID_DATE).into());
    };
    let to = if args.at(4).is_some() {
        let Some(to) = ymd(args, 4) else {
            return Ok(Rendered::error(INVALID_DATE).into());
        };
        to
    } else {
        today(scope)
    };

    let years = date::age(&from, &to);
    if years < 0 {
        return Ok(Rendered::error("Error: Second date should be later than first date").into());
    }

    let years = i64::from(years);
    let text = match args.get("format") {
        Some("raw") => years.to_string(),
        Some("cardinal") => cardinal(years),
        Some("ordinal") => ordinal(years),
        _ => group_thousands(years),
    };
    Ok(Rendered::text(text).into())
}

/// `{{Birth date|year|month|day|df=}}`, and all other templates which show a
/// single date with an optional time.
pub fn date(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(match ymd(args, 1) {
        Some(date) => time_of(args, &date),
        None => Rendered::error(INVALID_DATE),
    }
    .into())
}

/// `{{Birth date and age|year|month|day|df=}}`
pub fn birth_date_and_age(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let Some(birth) = ymd(args, 1) else {
        return Ok(Rendered::error(INVALID_DATE).into());
    };
    let age = date::age(&birth, &today(scope));
    Ok(Rendered::fragment([time_of(args, &birth), Rendered::text(format!(" (age\u{a0}{age})"))]).into())
}

/// `{{Death date and age|year|month|day|birth year|birth month|birth day}}`
pub fn death_date_and_age(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let (Some(death), Some(birth)) = (ymd(args, 1), ymd(args, 4)) else {
        return Ok(Rendered::error(INVALID_DATE).into());
    };
    let age = date::age(&birth, &death);
    Ok(Rendered::fragment([time_of(args, &death), Rendered::text(format!(" (aged\u{a0}{age})"))]).into())
}

/// `{{Birth year and age|year|month}}`
pub fn birth_year_and_age(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let Some(year) = year_at(args, 1) else {
        return Ok(Rendered::error(INVALID_DATE).into());
    };
    let today = today(scope);
    let text = match number_at::<u8>(args, 2).and_then(|month| PartialDate::new(year, month, 0)) {
        Some(birth) => format!("{year} (age\u{a0}{})", date::age(&birth, &today)),
        None => {
            let oldest = today.year - year;
            format!("{year} (age\u{a0}{}–{oldest})", oldest - 1)
        }
    };
    Ok(Rendered::text(text).into())
}

/// `{{Death year and age|death year|birth year}}`
pub fn death_year_and_age(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let (Some(death), Some(birth)) = (year_at(args, 1), year_at(args, 2)) else {
        return Ok(Rendered::error(INVALID_DATE).into());
    };
    let oldest = death - birth;
    Ok(Rendered::text(format!("{death} (aged\u{a0}{}–{oldest})", oldest - 1)).into())
}

/// `{{Start date and age|year|month|day|df=}}`
pub fn start_date_and_age(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let Some(start) = ymd(args, 1) else {
        return Ok(Rendered::error(INVALID_DATE).into());
    };
    let years = date::age(&start, &today(scope));
    let ago = match years {
        ..=0 => String::new(),
        1 => "; 1\u{a0}year ago".into(),
        years => format!("; {years}\u{a0}years ago"),
    };
    Ok(Rendered::fragment([time_of(args, &start), Rendered::text(ago)]).into())
}

/// `{{Birth based on age as of date|age|year|month|day}}`
///
/// With a full reference date, shows the possible birth years and the
/// possible current ages. With only a reference year, shows an approximate
/// birth year.
pub fn birth_based_on_age_as_of_date(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let (Some(age), Some(as_of)) = (number_at::<i32>(args, 1), ymd(args, 2)) else {
        return Ok(Rendered::error(INVALID_DATE).into());
    };

    if !as_of.is_full() {
        let Some(year) = as_of.year.checked_sub(age) else {
            return Ok(Rendered::error(INVALID_DATE).into());
        };
        return Ok(Rendered::fragment([circa_abbr(), Rendered::text(format!("\u{a0}{year}"))]).into());
    }

    let Some((earliest, latest)) = as_of.to_date().and_then(|as_of| birth_range(age, as_of)) else {
        return Ok(Rendered::error(INVALID_DATE).into());
    };

    let years = if earliest.year() == latest.year() {
        earliest.year().to_string()
    } else {
        format!("{}/{}", earliest.year(), latest.year())
    };
    let today = today(scope);
    let youngest = date::age(&PartialDate::from_date(latest), &today);
    let oldest = date::age(&PartialDate::from_date(earliest), &today);
    let ages = if youngest == oldest {
        format!("age\u{a0}{youngest}")
    } else {
        format!("age\u{a0}{youngest}–{oldest}")
    };
    Ok(Rendered::text(format!("{years} ({ages})")).into())
}

/// `{{Time ago|timestamp|magnitude=|min_magnitude=|ago=|numeric=|spellout=}}`
pub fn time_ago(args: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    let now = scope.context().now();
    let Some(then) = args.at(1).and_then(|text| parse_timestamp(text, now)) else {
        return Ok(Rendered::error("Error: Invalid time").into());
    };

    let elapsed = (now - then).whole_seconds();
    let (count, unit) = split_elapsed(
        elapsed,
        args.get("magnitude").and_then(Unit::from_name),
        args.get("min_magnitude").and_then(Unit::from_name),
    );

    if args.flag("numeric") {
        return Ok(Rendered::text(count.to_string()).into());
    }

    let number = match args.get("spellout") {
        Some("auto") if count < 10 => cardinal(count),
        Some(spellout) if is_truthy(spellout) => cardinal(count),
        _ => count.to_string(),
    };
    let unit = if count == 1 {
        unit.name().to_string()
    } else {
        format!("{}s", unit.name())
    };
    let suffix = if elapsed >= 0 {
        match args.get("ago").unwrap_or("ago") {
            "" => String::new(),
            ago => format!(" {ago}"),
        }
    } else if count == 1 {
        "'s time".into()
    } else {
        "' time".into()
    };
    Ok(Rendered::text(format!("{number} {unit}{suffix}")).into())
}

/// `{{As of|year|month|day|lc=|since=|alt=|df=}}` or `{{As of|date}}`
pub fn as_of(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let Some(date) = ymd(args, 1).or_else(|| args.at(1).and_then(parse_date)) else {
        return Ok(Rendered::error(INVALID_DATE).into());
    };

    if let Some(alt) = args.nonempty("alt") {
        return Ok(Rendered::text(alt).into());
    }

    let lead = match (args.flag("since"), args.flag("lc")) {
        (true, true) => "since",
        (true, false) => "Since",
        (false, true) => "as of",
        (false, false) => "As of",
    };
    Ok(Rendered::text(format!("{lead} {}", date.display(args.flag("df")))).into())
}

/// `{{Circa|year|year2}}`
pub fn circa(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let years = match (args.at(1), args.at(2)) {
        (Some(from), Some(to)) => format!("\u{a0}{from}\u{2013}{to}"),
        (Some(year), None) => format!("\u{a0}{year}"),
        _ => String::new(),
    };
    Ok(Rendered::fragment([circa_abbr(), Rendered::text(years)]).into())
}

/// `{{Floruit|period}}`
pub fn floruit(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    let fl = Rendered::tooltip("flourished", None, Rendered::text("fl."));
    let period = args.at(1).map(|period| format!("\u{a0}{period}")).unwrap_or_default();
    Ok(Rendered::fragment([fl, Rendered::text(period)]).into())
}

/// `{{Decade|year}}`
pub fn decade(args: &Args<'_>, _: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(match year_at(args, 1) {
        Some(year) => Rendered::text(format!("{}s", year - year.rem_euclid(10))),
        None => Rendered::error("Error: Need valid year"),
    }
    .into())
}

/// `{{Current year}}`
pub fn current_year(_: &Args<'_>, scope: &Scope<'_, '_>) -> Result<Expansion> {
    Ok(Rendered::text(scope.context().now().year().to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::super::tests::render;

    #[test]
    fn age() {
        assert_eq!(render("{{Age|1989|7|23|2003|7|14}}"), "13");
        assert_eq!(render("{{age|1989|7|23|2003|7|23}}"), "14");
        assert_eq!(
            render("{{age|1989|7|23|2003|6|14}}"),
            "13",
            "an earlier month in a later year still counts the full years between"
        );
        assert_eq!(render("{{age|1989|7|23}}"), "34", "second date defaults to now");
        assert_eq!(render("{{age|1001|1|1|3002|1|1|format=raw}}"), "2001");
        assert_eq!(render("{{age|1001|1|1|3002|1|1}}"), "2,001");
        assert_eq!(render("{{age|1989|7|23|2003|7|23|format=cardinal}}"), "fourteen");
        assert_eq!(render("{{age|1989|7|23|2003|7|23|format=ordinal}}"), "fourteenth");
        assert_eq!(
            render("{{age|1989|2|30}}"),
            r#"<span class="error">Error: Need valid year, month, day</span>"#
        );
        assert_eq!(
            render("{{age|2003|1|1|1989|1|1}}"),
            r#"<span class="error">Error: Second date should be later than first date</span>"#
        );
    }

    #[test]
    fn dates() {
        assert_eq!(
            render("{{Birth date|1989|7|23}}"),
            r#"<time datetime="1989-07-23">July 23, 1989</time>"#
        );
        assert_eq!(
            render("{{birth date|1989|7|23|df=y}}"),
            r#"<time datetime="1989-07-23">23 July 1989</time>"#
        );
        assert_eq!(
            render("{{Start date|1993|02|24|08|30|23|Z}}"),
            r#"<time datetime="1993-02-24T08:30:23Z">08:30:23, February 24, 1993 (UTC)</time>"#
        );
        assert_eq!(
            render("{{start date|1993|2}}"),
            r#"<time datetime="1993-02">February 1993</time>"#
        );
        assert_eq!(
            render("{{Birth date and age|1989|7|23}}"),
            "<time datetime=\"1989-07-23\">July 23, 1989</time> (age\u{a0}34)"
        );
        assert_eq!(
            render("{{Death date and age|2001|3|1|1940|6|10|df=yes}}"),
            "<time datetime=\"2001-03-01\">1 March 2001</time> (aged\u{a0}60)"
        );
        assert_eq!(render("{{Birth year and age|1980}}"), "1980 (age\u{a0}43–44)");
        assert_eq!(render("{{Birth year and age|1980|5}}"), "1980 (age\u{a0}43)");
        assert_eq!(render("{{Death year and age|2001|1940}}"), "2001 (aged\u{a0}60–61)");
        assert_eq!(
            render("{{Start date and age|2014|3|14}}"),
            "<time datetime=\"2014-03-14\">March 14, 2014</time>; 10\u{a0}years ago"
        );
    }

    #[test]
    fn birth_based_on_age_as_of_date() {
        assert_eq!(
            render("{{Birth based on age as of date|30|2020|5|10}}"),
            "1989/1990 (age\u{a0}33–34)"
        );
        assert_eq!(
            render("{{Birth based on age as of date|30|2020}}"),
            "<abbr title=\"circa\">c.</abbr>\u{a0}1990"
        );
    }

    #[test]
    fn time_ago() {
        assert_eq!(render("{{Time ago|-83 minutes}}"), "1 hour ago");
        assert_eq!(render("{{time ago|20240301}}"), "2 weeks ago");
        assert_eq!(render("{{time ago|20240301|magnitude=days}}"), "14 days ago");
        assert_eq!(render("{{time ago|2020}}"), "4 years ago");
        assert_eq!(render("{{time ago|2020|spellout=yes}}"), "four years ago");
        assert_eq!(render("{{time ago|2020|numeric=yes}}"), "4");
        assert_eq!(render("{{time ago|2020|ago=before now}}"), "4 years before now");
        assert_eq!(render("{{time ago|+2 days}}"), "2 days' time");
        assert_eq!(render("{{time ago|+1 day}}"), "1 day's time");
        assert_eq!(
            render("{{time ago|someday}}"),
            r#"<span class="error">Error: Invalid time</span>"#
        );
    }

    #[test]
    fn approximate_dates() {
        assert_eq!(render("{{As of|2021|6}}"), "As of June 2021");
        assert_eq!(render("{{as of|June 2021|lc=y}}"), "as of June 2021");
        assert_eq!(render("{{As of|2021|6|3|df=y}}"), "As of 3 June 2021");
        assert_eq!(render("{{circa|1850}}"), "<abbr title=\"circa\">c.</abbr>\u{a0}1850");
        assert_eq!(render("{{fl.|1300s}}"), "<abbr title=\"flourished\">fl.</abbr>\u{a0}1300s");
        assert_eq!(render("{{decade|1987}}"), "1980s");
        assert_eq!(render("{{CURRENTYEAR}}"), "2024");
    }

    #[test]
    fn out_of_range_numbers() {
        const INVALID: &str = r#"<span class="error">Error: Need valid year, month, day</span>"#;
        for wikitext in [
            "{{Birth year and age|-2147483648}}",
            "{{Birth year and age|2147483647|5}}",
            "{{Death year and age|2147483647|-5}}",
            "{{Death year and age|2001|-2147483648}}",
            "{{Birth based on age as of date|-2147483648|2020}}",
            "{{Birth based on age as of date|2147483647|2020|5|10}}",
            "{{Birth based on age as of date|-2147483648|2020|5|10}}",
            "{{Birth date|2147483647|1|1}}",
            "{{age|-2147483648|1|1}}",
        ] {
            assert_eq!(render(wikitext), INVALID, "{wikitext}");
        }
        assert_eq!(
            render("{{time ago|-9223372036854775808 minutes}}"),
            r#"<span class="error">Error: Invalid time</span>"#
        );
        assert_eq!(
            render("{{Decade|-2147483648}}"),
            r#"<span class="error">Error: Need valid year</span>"#
        );
    }
}
