//! Calendar arithmetic and date parsing for the date templates.

use regex::Regex;
use std::sync::LazyLock;
use time::{
    Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, Time,
    format_description::well_known::Rfc3339,
};

/// A calendar date whose month and day may be unknown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PartialDate {
    /// The year.
    pub year: i32,
    /// The month, if known.
    pub month: Option<Month>,
    /// The day of the month, if known. Never set without a month.
    pub day: Option<u8>,
}

impl PartialDate {
    /// Creates a new partial date. A month or day of 0 means unknown, but is
    /// treated as 1 for the purposes of validation.
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        let month_1 = Month::try_from(month.max(1)).ok()?;
        Date::from_calendar_date(year, month_1, day.max(1)).ok()?;
        let month = (month != 0).then_some(month_1);
        Some(Self {
            year,
            month,
            day: month.and((day != 0).then_some(day)),
        })
    }

    /// Creates a fully specified partial date.
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: Some(date.month()),
            day: Some(date.day()),
        }
    }

    /// The month number, or 0 if it is unknown.
    pub fn month_number(&self) -> u8 {
        self.month.map_or(0, u8::from)
    }

    /// The day number, or 0 if it is unknown.
    pub fn day_number(&self) -> u8 {
        self.day.unwrap_or(0)
    }

    /// Returns true if the month and day are known.
    pub fn is_full(&self) -> bool {
        self.day.is_some()
    }

    /// Converts to a calendar date, using the first of any unknown period.
    pub fn to_date(&self) -> Option<Date> {
        Date::from_calendar_date(
            self.year,
            self.month.unwrap_or(Month::January),
            self.day.unwrap_or(1),
        )
        .ok()
    }

    /// Formats the date for display, e.g. `23 July 1989` when `day_first` is
    /// set or `July 23, 1989` otherwise.
    pub fn display(&self, day_first: bool) -> String {
        match (self.month, self.day) {
            (Some(month), Some(day)) if day_first => format!("{day} {month} {}", self.year),
            (Some(month), Some(day)) => format!("{month} {day}, {}", self.year),
            (Some(month), None) => format!("{month} {}", self.year),
            _ => self.year.to_string(),
        }
    }

    /// Formats the date in ISO 8601 form, at whatever precision is known.
    pub fn iso(&self) -> String {
        match (self.month, self.day) {
            (Some(month), Some(day)) => format!("{:04}-{:02}-{day:02}", self.year, u8::from(month)),
            (Some(month), None) => format!("{:04}-{:02}", self.year, u8::from(month)),
            _ => format!("{:04}", self.year),
        }
    }
}

/// Calculates the number of whole years between two dates. A later date
/// which falls before the anniversary of the earlier one counts one year
/// fewer. Unknown months and days compare as 0.
pub fn age(from: &PartialDate, to: &PartialDate) -> i32 {
    let mut age = to.year - from.year;
    if (to.month_number(), to.day_number()) < (from.month_number(), from.day_number()) {
        age -= 1;
    }
    age
}

/// Adds a number of calendar months to a date, clamping the day to the end
/// of the resulting month.
pub fn add_months(date: Date, months: i32) -> Option<Date> {
    let index = (date.year() * 12 + i32::from(u8::from(date.month())) - 1).checked_add(months)?;
    let year = index.div_euclid(12);
    // Clippy: `rem_euclid(12)` is always in 0..12.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let month = Month::try_from(index.rem_euclid(12) as u8 + 1).ok()?;
    (1..=date.day())
        .rev()
        .find_map(|day| Date::from_calendar_date(year, month, day).ok())
}

/// Adds a number of calendar years to a date, clamping 29 February.
pub fn add_years(date: Date, years: i32) -> Option<Date> {
    add_months(date, years.checked_mul(12)?)
}

/// Calculates the inclusive range of birth dates for someone who was `age`
/// years old on `as_of`.
pub fn birth_range(age: i32, as_of: Date) -> Option<(Date, Date)> {
    let earliest = add_years(as_of, age.checked_add(1)?.checked_neg()?)?.next_day()?;
    let latest = add_years(as_of, age.checked_neg()?)?;
    Some((earliest, latest))
}

/// Parses an English month name or abbreviation.
pub fn parse_month(text: &str) -> Option<Month> {
    let text = text.trim_end_matches('.').to_ascii_lowercase();
    if text.len() < 3 {
        return None;
    }
    let mut month = Month::January;
    for _ in 0..12 {
        let name = month.to_string().to_ascii_lowercase();
        if name.starts_with(&text) || (text == "sept" && month == Month::September) {
            return Some(month);
        }
        month = month.next();
    }
    None
}

/// Parses a date written by a human, in any of the forms commonly found in
/// template arguments: `1989`, `1989-07`, `1989-07-23`, `23 July 1989`,
/// `July 23, 1989`, `July 1989`.
pub fn parse_date(text: &str) -> Option<PartialDate> {
    static ISO: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^(-?\d{1,4})(?:-(\d{1,2})(?:-(\d{1,2}))?)?$").unwrap()
    });
    static DMY: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(?:(\d{1,2})\s+)?([A-Za-z]+\.?),?\s+(\d{1,4})$").unwrap());
    static MDY: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^([A-Za-z]+\.?)\s+(\d{1,2}),?\s+(\d{1,4})$").unwrap());

    let text = text.trim();
    let number = |m: Option<regex::Match<'_>>| m.map_or(Some(0), |m| m.as_str().parse().ok());

    if let Some(captures) = ISO.captures(text) {
        let year = captures[1].parse().ok()?;
        PartialDate::new(year, number(captures.get(2))?, number(captures.get(3))?)
    } else if let Some(captures) = MDY.captures(text) {
        let month = parse_month(&captures[1])?;
        PartialDate::new(captures[3].parse().ok()?, month.into(), captures[2].parse().ok()?)
    } else if let Some(captures) = DMY.captures(text) {
        let month = parse_month(&captures[2])?;
        PartialDate::new(
            captures[3].parse().ok()?,
            month.into(),
            number(captures.get(1))?,
        )
    } else {
        None
    }
}

/// Parses a timestamp relative to `now`.
///
/// Accepted forms are relative offsets (`-83 minutes`, `+2 days`), a bare
/// year, `YYYYMMDD` with optional `HHMMSS`, RFC 3339, ISO dates with an
/// optional `HH:MM[:SS]` time, and anything [`parse_date`] accepts. Times
/// are UTC.
pub fn parse_timestamp(text: &str, now: OffsetDateTime) -> Option<OffsetDateTime> {
    static RELATIVE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?i)^([+-]?\s*\d+)\s*(second|minute|hour|day|week|fortnight|month|year)s?(\s+ago)?$")
            .unwrap()
    });
    static COMPACT: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^(\d{4})(\d{2})(\d{2})(?:(\d{2})(\d{2})(\d{2}))?$").unwrap());
    static DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^(\d{4})-(\d{2})-(\d{2})[T ](\d{1,2}):(\d{2})(?::(\d{2}))?Z?$").unwrap()
    });

    let text = text.trim();
    if text.eq_ignore_ascii_case("now") {
        return Some(now);
    }

    if let Some(captures) = RELATIVE.captures(text) {
        let mut count: i32 = captures[1].replace(char::is_whitespace, "").parse().ok()?;
        if captures.get(3).is_some() {
            count = count.checked_neg()?;
        }
        // The `Duration` constructors panic on overflow, which an `i32`
        // count of weeks cannot reach.
        let wide = i64::from(count);
        return match captures[2].to_ascii_lowercase().as_str() {
            "second" => now.checked_add(Duration::seconds(wide)),
            "minute" => now.checked_add(Duration::minutes(wide)),
            "hour" => now.checked_add(Duration::hours(wide)),
            "day" => now.checked_add(Duration::days(wide)),
            "week" => now.checked_add(Duration::weeks(wide)),
            "fortnight" => now.checked_add(Duration::weeks(wide * 2)),
            "month" => Some(now.replace_date(add_months(now.date(), count)?)),
            _ => Some(now.replace_date(add_years(now.date(), count)?)),
        };
    }

    let utc = |date: Date, hour: u8, minute: u8, second: u8| {
        Time::from_hms(hour, minute, second)
            .ok()
            .map(|time| PrimitiveDateTime::new(date, time).assume_utc())
    };

    if let Some(captures) = COMPACT.captures(text) {
        let field = |index: usize| -> Option<u8> {
            captures.get(index).map_or(Some(0), |m| m.as_str().parse().ok())
        };
        let month = Month::try_from(field(2)?).ok()?;
        let date = Date::from_calendar_date(captures[1].parse().ok()?, month, field(3)?).ok()?;
        return utc(date, field(4)?, field(5)?, field(6)?);
    }

    if let Ok(date_time) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(date_time);
    }

    if let Some(captures) = DATE_TIME.captures(text) {
        let field = |index: usize| -> Option<u8> {
            captures.get(index).map_or(Some(0), |m| m.as_str().parse().ok())
        };
        let month = Month::try_from(field(2)?).ok()?;
        let date = Date::from_calendar_date(captures[1].parse().ok()?, month, field(3)?).ok()?;
        return utc(date, field(4)?, field(5)?, field(6)?);
    }

    parse_date(text)
        .and_then(|date| date.to_date())
        .and_then(|date| utc(date, 0, 0, 0))
}

/// A unit of elapsed time.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Unit {
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
    /// Days.
    Days,
    /// Weeks.
    Weeks,
    /// Average Gregorian months.
    Months,
    /// Average Gregorian years.
    Years,
}

impl Unit {
    /// All units, coarsest first.
    const ALL: [Unit; 7] = [
        Self::Years,
        Self::Months,
        Self::Weeks,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
    ];

    /// Parses a unit name, singular or plural.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name.trim().trim_end_matches('s').to_ascii_lowercase().as_str() {
            "second" => Self::Seconds,
            "minute" => Self::Minutes,
            "hour" => Self::Hours,
            "day" => Self::Days,
            "week" => Self::Weeks,
            "month" => Self::Months,
            "year" => Self::Years,
            _ => return None,
        })
    }

    /// The length of the unit, in seconds.
    pub fn seconds(self) -> i64 {
        match self {
            Self::Seconds => 1,
            Self::Minutes => 60,
            Self::Hours => 3_600,
            Self::Days => 86_400,
            Self::Weeks => 604_800,
            Self::Months => 2_629_746,
            Self::Years => 31_556_952,
        }
    }

    /// The singular English name of the unit.
    pub fn name(self) -> &'static str {
        match self {
            Self::Seconds => "second",
            Self::Minutes => "minute",
            Self::Hours => "hour",
            Self::Days => "day",
            Self::Weeks => "week",
            Self::Months => "month",
            Self::Years => "year",
        }
    }
}

/// Splits an elapsed number of seconds into a whole count of some unit.
///
/// The unit is `magnitude` if given. Otherwise, it is the coarsest unit no
/// longer than the elapsed time, but never finer than `min_magnitude`.
pub fn split_elapsed(elapsed: i64, magnitude: Option<Unit>, min_magnitude: Option<Unit>) -> (i64, Unit) {
    let elapsed = elapsed.unsigned_abs();
    let unit = magnitude.unwrap_or_else(|| {
        let unit = Unit::ALL
            .into_iter()
            .find(|unit| unit.seconds().unsigned_abs() <= elapsed)
            .unwrap_or(Unit::Seconds);
        min_magnitude.map_or(unit, |min| unit.max(min))
    });
    let count = elapsed / unit.seconds().unsigned_abs();
    (i64::try_from(count).unwrap_or(i64::MAX), unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn ymd(year: i32, month: u8, day: u8) -> PartialDate {
        PartialDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_age() {
        assert_eq!(age(&ymd(1989, 7, 23), &ymd(2003, 7, 23)), 14);
        assert_eq!(age(&ymd(1989, 7, 23), &ymd(2003, 7, 14)), 13);
        assert_eq!(age(&ymd(1989, 7, 23), &ymd(2003, 6, 14)), 13);
        assert_eq!(age(&ymd(1989, 7, 23), &ymd(2003, 8, 1)), 14);
        assert_eq!(age(&ymd(1989, 0, 0), &ymd(2003, 1, 1)), 14);
    }

    #[test]
    fn partial_date() {
        assert!(PartialDate::new(2003, 2, 29).is_none(), "not a leap year");
        assert!(PartialDate::new(2003, 13, 1).is_none());
        let date = ymd(2004, 2, 0);
        assert_eq!(date.day, None);
        assert_eq!(date.display(true), "February 2004");
        assert_eq!(date.iso(), "2004-02");
        assert_eq!(ymd(1989, 7, 23).display(true), "23 July 1989");
        assert_eq!(ymd(1989, 7, 23).display(false), "July 23, 1989");
        assert_eq!(ymd(1989, 7, 3).iso(), "1989-07-03");
        assert_eq!(ymd(1989, 0, 5).day, None, "day without month is dropped");
    }

    #[test]
    fn test_add_months() {
        assert_eq!(add_months(date!(2004 - 01 - 31), 1), Some(date!(2004 - 02 - 29)));
        assert_eq!(add_months(date!(2004 - 01 - 15), -1), Some(date!(2003 - 12 - 15)));
        assert_eq!(add_years(date!(2004 - 02 - 29), -1), Some(date!(2003 - 02 - 28)));
    }

    #[test]
    fn test_birth_range() {
        assert_eq!(
            birth_range(30, date!(2020 - 05 - 10)),
            Some((date!(1989 - 05 - 11), date!(1990 - 05 - 10)))
        );
        assert_eq!(birth_range(i32::MAX, date!(2020 - 05 - 10)), None);
        assert_eq!(birth_range(i32::MIN, date!(2020 - 05 - 10)), None);
        assert_eq!(birth_range(100_000, date!(2020 - 05 - 10)), None);
        assert_eq!(add_months(date!(2020 - 05 - 10), i32::MAX), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("1989"), Some(PartialDate::new(1989, 0, 0).unwrap()));
        assert_eq!(parse_date("1989-07-23"), Some(ymd(1989, 7, 23)));
        assert_eq!(parse_date("23 July 1989"), Some(ymd(1989, 7, 23)));
        assert_eq!(parse_date("Jul 23, 1989"), Some(ymd(1989, 7, 23)));
        assert_eq!(parse_date("Sept. 1989"), Some(ymd(1989, 9, 0)));
        assert_eq!(parse_date("June 2021"), Some(ymd(2021, 6, 0)));
        assert_eq!(parse_date("Juneteenth"), None);
        assert_eq!(parse_date("31 February 2000"), None);
    }

    #[test]
    fn test_parse_timestamp() {
        let now = datetime!(2024-03-15 12:00:00 UTC);
        assert_eq!(
            parse_timestamp("-83 minutes", now),
            Some(datetime!(2024-03-15 10:37:00 UTC))
        );
        assert_eq!(
            parse_timestamp("2 days ago", now),
            Some(datetime!(2024-03-13 12:00:00 UTC))
        );
        assert_eq!(
            parse_timestamp("-1 month", now),
            Some(datetime!(2024-02-15 12:00:00 UTC))
        );
        assert_eq!(parse_timestamp("-9223372036854775808 minutes", now), None);
        assert_eq!(parse_timestamp("-2147483648 minutes ago", now), None);
        assert_eq!(parse_timestamp("2147483647 weeks", now), None);
        assert_eq!(parse_timestamp("1999", now), Some(datetime!(1999-01-01 0:00 UTC)));
        assert_eq!(
            parse_timestamp("20010911", now),
            Some(datetime!(2001-09-11 0:00 UTC))
        );
        assert_eq!(
            parse_timestamp("20010911084600", now),
            Some(datetime!(2001-09-11 08:46:00 UTC))
        );
        assert_eq!(
            parse_timestamp("2001-09-11T08:46:00Z", now),
            Some(datetime!(2001-09-11 08:46:00 UTC))
        );
        assert_eq!(
            parse_timestamp("2001-09-11 08:46", now),
            Some(datetime!(2001-09-11 08:46:00 UTC))
        );
        assert_eq!(
            parse_timestamp("11 September 2001", now),
            Some(datetime!(2001-09-11 0:00 UTC))
        );
        assert_eq!(parse_timestamp("whenever", now), None);
    }

    #[test]
    fn test_split_elapsed() {
        assert_eq!(split_elapsed(0, None, None), (0, Unit::Seconds));
        assert_eq!(split_elapsed(-83 * 60, None, None), (1, Unit::Hours));
        assert_eq!(split_elapsed(10 * 86_400, None, None), (1, Unit::Weeks));
        assert_eq!(split_elapsed(10 * 86_400, Some(Unit::Days), None), (10, Unit::Days));
        assert_eq!(split_elapsed(90, None, Some(Unit::Hours)), (0, Unit::Hours));
        assert_eq!(split_elapsed(40_000_000, None, None), (1, Unit::Years));
        assert_eq!(Unit::from_name("Months"), Some(Unit::Months));
    }
}
