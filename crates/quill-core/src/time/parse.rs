//! Free-form date parsing.
//!
//! [`parse`] accepts the kinds of strings people type into date inputs and
//! resolves them to an instant in UTC:
//!
//! * `@1700000000`: seconds since the epoch
//! * `2023-11-14T22:13:20Z`, `2023-11-14 23:13:20+01:00`: RFC 3339 / ISO 8601
//! * `Tue, 14 Nov 2023 22:13:20 +0000`: RFC 2822
//! * `2024-01-15 10:00:00`, `2024-01-15`, `20240115`: civil times, read as UTC
//! * `01/15/2024`, `2024/01/15`, `15-01-2024`, `15.01.2024`: other date orders
//! * `15 January 2024`, `January 15, 2024`, `Jan 15 2024 10:00`: month names
//! * `10am`, `10:30 pm`: twelve-hour clock times
//! * `now`, `today`, `midnight`, `noon`, `tomorrow`, `yesterday`
//! * `monday`, `next fri`, `last sunday`, `this wed`
//! * `+1 day`, `-2 weeks`, `3 hours ago`, `next month`, `an hour ago`
//!
//! Keywords and relative amounts can be combined, as in
//! `2024-01-01 10:30 +1 week` or `tomorrow noon`. Relative amounts are applied
//! after the absolute parts, largest unit first. Weekday names move forward
//! from whatever date the rest of the input names. Adding months or years
//! clamps to the last day of the target month.

use jiff::{
    civil::{self, Date, DateTime, Time, Weekday},
    tz::TimeZone,
    Span, Timestamp,
};

/// Parses `input` relative to `now`. Returns `None` if any part of the input
/// is not understood.
pub fn parse(input: &str, now: Timestamp) -> Option<Timestamp> {
    let input = input.trim();

    if input.is_empty() {
        return None;
    }

    if let Some(epoch) = input.strip_prefix('@') {
        return Timestamp::from_second(epoch.trim().parse().ok()?).ok();
    }

    parse_absolute(input).or_else(|| parse_relative(input, now))
}

fn parse_absolute(input: &str) -> Option<Timestamp> {
    if let Ok(timestamp) = input.parse::<Timestamp>() {
        return Some(timestamp);
    }

    if let Ok(zdt) = jiff::fmt::rfc2822::parse(input) {
        return Some(zdt.timestamp());
    }

    if let Ok(dt) = input.parse::<DateTime>() {
        return to_utc(dt);
    }

    if let Ok(date) = input.parse::<Date>() {
        return to_utc(date.to_datetime(Time::midnight()));
    }

    None
}

fn parse_relative(input: &str, now: Timestamp) -> Option<Timestamp> {
    let now = now.to_zoned(TimeZone::UTC).datetime();
    let mut date = now.date();
    let mut time = now.time();
    let mut seek = None;
    let mut relative = Relative::default();

    let input = input.to_ascii_lowercase().replace(',', " ");
    let mut tokens = input.split_whitespace().peekable();

    while let Some(token) = tokens.next() {
        match token {
            "now" => {}
            "today" | "midnight" => time = Time::midnight(),
            "noon" => time = civil::time(12, 0, 0, 0),
            "tomorrow" => {
                date = date.tomorrow().ok()?;
                time = Time::midnight();
            }
            "yesterday" => {
                date = date.yesterday().ok()?;
                time = Time::midnight();
            }
            "ago" => relative.negate()?,
            "next" | "last" | "previous" | "this" => {
                let direction = match token {
                    "next" => 1,
                    "this" => 0,
                    _ => -1,
                };
                let target = tokens.next()?;

                if let Some(weekday) = weekday(target) {
                    seek = Some((weekday, direction));
                    time = Time::midnight();
                } else {
                    relative.add(unit(target)?, direction.into())?;
                }
            }
            _ => {
                if let Some(weekday) = weekday(token) {
                    seek = Some((weekday, 0));
                    time = Time::midnight();
                } else if let Some(month) = month(token) {
                    // `january 15 2024`, `jan 2024`
                    let day = tokens.next_if(|t| day_of_month(t).is_some());
                    let day = day.and_then(day_of_month).unwrap_or(1);
                    let year = tokens.next_if(|t| year_number(t).is_some());
                    let year = year.and_then(year_number).unwrap_or(date.year());
                    date = Date::new(year, month, day).ok()?;
                    time = Time::midnight();
                } else if let Some((day, month)) = day_month(token, tokens.peek().copied()) {
                    // `15 january 2024`
                    tokens.next();
                    let year = tokens.next_if(|t| year_number(t).is_some());
                    let year = year.and_then(year_number).unwrap_or(date.year());
                    date = Date::new(year, month, day).ok()?;
                    time = Time::midnight();
                } else if let Some(parsed) = date_token(token, date) {
                    date = parsed;
                    time = Time::midnight();
                } else if let Some((parsed, used_next)) = time_of_day(token, tokens.peek().copied())
                {
                    if used_next {
                        tokens.next();
                    }
                    time = parsed;
                } else if let Some(amount) = amount(token) {
                    relative.add(unit(tokens.next()?)?, amount)?;
                } else {
                    return None;
                }
            }
        }
    }

    // Weekdays are found from the date the rest of the input settled on.
    if let Some((weekday, direction)) = seek {
        date = seek_weekday(date, weekday, direction)?;
    }

    let dt = relative.apply(DateTime::from_parts(date, time))?;
    to_utc(dt)
}

fn to_utc(dt: DateTime) -> Option<Timestamp> {
    dt.to_zoned(TimeZone::UTC).ok().map(|zdt| zdt.timestamp())
}

/// Reads `2024-01-15`, `20240115`, `2024/01/15`, `01/15/2024`, `01/15`,
/// `15-01-2024` and `15.01.2024`. Slashes put the month first unless the
/// year leads.
fn date_token(token: &str, today: Date) -> Option<Date> {
    if token.starts_with(|c: char| c == '+' || c == '-') {
        return None;
    }

    if let Ok(date) = token.parse() {
        return Some(date);
    }

    let sep = token.chars().find(|c| matches!(c, '/' | '-' | '.'))?;
    let parts: Vec<&str> = token.split(sep).collect();

    match (sep, &parts[..]) {
        (_, [y, m, d]) if y.len() == 4 => ymd(y, m, d),
        ('/', [m, d, y]) => ymd(y, m, d),
        ('/', [m, d]) => Date::new(today.year(), number(m, 2)?, number(d, 2)?).ok(),
        (_, [d, m, y]) => ymd(y, m, d),
        _ => None,
    }
}

fn ymd(year: &str, month: &str, day: &str) -> Option<Date> {
    if year.len() != 4 {
        return None;
    }
    Date::new(number(year, 4)?, number(month, 2)?, number(day, 2)?).ok()
}

/// A day number directly followed by a month name.
fn day_month(token: &str, next: Option<&str>) -> Option<(i8, i8)> {
    Some((day_of_month(token)?, month(next?)?))
}

/// `14`, `14th`, `1st`
fn day_of_month(token: &str) -> Option<i8> {
    let digits = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| token.strip_suffix(*suffix))
        .unwrap_or(token);

    number(digits, 2).filter(|day| (1..=31).contains(day))
}

fn year_number(token: &str) -> Option<i16> {
    if token.len() != 4 {
        return None;
    }
    number(token, 4)
}

fn month(token: &str) -> Option<i8> {
    Some(match token {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" | "sept" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    })
}

/// Reads `10:30`, `10:30:15`, `10am`, `10:30pm`, or a clock followed by a
/// separate `am`/`pm` token in `next`. The flag is set when `next` was used.
fn time_of_day(token: &str, next: Option<&str>) -> Option<(Time, bool)> {
    if let Some(pm) = next.and_then(meridiem) {
        return Some((twelve_hour(token, pm)?, true));
    }

    for (suffix, pm) in [("am", false), ("a.m.", false), ("pm", true), ("p.m.", true)] {
        if let Some(clock) = token.strip_suffix(suffix) {
            return Some((twelve_hour(clock, pm)?, false));
        }
    }

    if !token.contains(':') {
        return None;
    }

    Some((token.parse().ok()?, false))
}

fn meridiem(token: &str) -> Option<bool> {
    match token {
        "am" | "a.m." => Some(false),
        "pm" | "p.m." => Some(true),
        _ => None,
    }
}

fn twelve_hour(clock: &str, pm: bool) -> Option<Time> {
    let time: Time = if clock.contains(':') {
        clock.parse().ok()?
    } else {
        Time::new(number(clock, 2)?, 0, 0, 0).ok()?
    };

    if !(1..=12).contains(&time.hour()) {
        return None;
    }

    let hour = time.hour() % 12 + if pm { 12 } else { 0 };
    time.with().hour(hour).build().ok()
}

/// Parses a run of at most `max_digits` ASCII digits.
fn number<T: std::str::FromStr>(token: &str, max_digits: usize) -> Option<T> {
    if token.is_empty() || token.len() > max_digits || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn amount(token: &str) -> Option<i64> {
    match token {
        "a" | "an" => Some(1),
        _ => token.parse().ok(),
    }
}

fn weekday(token: &str) -> Option<Weekday> {
    Some(match token {
        "monday" | "mon" => Weekday::Monday,
        "tuesday" | "tue" | "tues" => Weekday::Tuesday,
        "wednesday" | "wed" => Weekday::Wednesday,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thursday,
        "friday" | "fri" => Weekday::Friday,
        "saturday" | "sat" => Weekday::Saturday,
        "sunday" | "sun" => Weekday::Sunday,
        _ => return None,
    })
}

/// `direction` 0 keeps `date` when it already falls on `weekday`.
fn seek_weekday(date: Date, weekday: Weekday, direction: i32) -> Option<Date> {
    match direction {
        0 if date.weekday() == weekday => Some(date),
        0 => date.nth_weekday(1, weekday).ok(),
        nth => date.nth_weekday(nth, weekday).ok(),
    }
}

#[derive(Debug, Clone, Copy)]
enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Fortnight,
    Month,
    Year,
}

fn unit(token: &str) -> Option<Unit> {
    Some(match token {
        "sec" | "secs" | "second" | "seconds" => Unit::Second,
        "min" | "mins" | "minute" | "minutes" => Unit::Minute,
        "hour" | "hours" => Unit::Hour,
        "day" | "days" => Unit::Day,
        "week" | "weeks" => Unit::Week,
        "fortnight" | "fortnights" => Unit::Fortnight,
        "month" | "months" => Unit::Month,
        "year" | "years" => Unit::Year,
        _ => return None,
    })
}

/// Relative amounts accumulated while reading the input.
#[derive(Debug, Default)]
struct Relative {
    years: i64,
    months: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl Relative {
    fn add(&mut self, unit: Unit, amount: i64) -> Option<()> {
        let (slot, amount) = match unit {
            Unit::Second => (&mut self.seconds, amount),
            Unit::Minute => (&mut self.minutes, amount),
            Unit::Hour => (&mut self.hours, amount),
            Unit::Day => (&mut self.days, amount),
            Unit::Week => (&mut self.days, amount.checked_mul(7)?),
            Unit::Fortnight => (&mut self.days, amount.checked_mul(14)?),
            Unit::Month => (&mut self.months, amount),
            Unit::Year => (&mut self.years, amount),
        };
        *slot = slot.checked_add(amount)?;
        Some(())
    }

    fn negate(&mut self) -> Option<()> {
        for slot in [
            &mut self.years,
            &mut self.months,
            &mut self.days,
            &mut self.hours,
            &mut self.minutes,
            &mut self.seconds,
        ] {
            *slot = slot.checked_neg()?;
        }
        Some(())
    }

    fn apply(&self, mut dt: DateTime) -> Option<DateTime> {
        // Spans cannot mix signs, so each unit is added on its own.
        let spans = [
            Span::new().try_years(self.years),
            Span::new().try_months(self.months),
            Span::new().try_days(self.days),
            Span::new().try_hours(self.hours),
            Span::new().try_minutes(self.minutes),
            Span::new().try_seconds(self.seconds),
        ];

        for span in spans {
            dt = dt.checked_add(span.ok()?).ok()?;
        }

        Some(dt)
    }
}
