//! Pattern based rendering of timestamps.
//!
//! Each letter of a pattern stands for one component: `Y-m-d H:i:s` renders
//! `2023-11-14 22:13:20`. A backslash escapes the following
//! character and any character without a meaning is copied through.
//!
//! | letter | output                                   | example        |
//! |--------|------------------------------------------|----------------|
//! | `d`    | day of month, two digits                 | `01`..`31`     |
//! | `D`    | weekday, three letters                   | `Mon`          |
//! | `j`    | day of month                             | `1`..`31`      |
//! | `l`    | weekday                                  | `Monday`       |
//! | `N`    | ISO weekday                              | `1` (Mon)..`7` |
//! | `S`    | English ordinal suffix for the day       | `st`, `nd`     |
//! | `w`    | weekday from Sunday                      | `0`..`6`       |
//! | `z`    | day of year from zero                    | `0`..`365`     |
//! | `W`    | ISO week number, two digits              | `01`..`53`     |
//! | `F`    | month                                    | `January`      |
//! | `m`    | month, two digits                        | `01`..`12`     |
//! | `M`    | month, three letters                     | `Jan`          |
//! | `n`    | month                                    | `1`..`12`      |
//! | `t`    | days in the month                        | `28`..`31`     |
//! | `L`    | leap year                                | `1` or `0`     |
//! | `o`    | ISO week-numbering year                  | `2024`         |
//! | `Y`    | year, at least four digits               | `2024`         |
//! | `y`    | year, two digits                         | `24`           |
//! | `a`/`A`| meridiem                                 | `am` / `PM`    |
//! | `B`    | Swatch internet time                     | `000`..`999`   |
//! | `g`/`h`| 12-hour hour, plain / two digits         | `1` / `01`     |
//! | `G`/`H`| 24-hour hour, plain / two digits         | `0` / `00`     |
//! | `i`    | minutes                                  | `00`..`59`     |
//! | `s`    | seconds                                  | `00`..`59`     |
//! | `u`/`v`| microseconds / milliseconds              | `000000`       |
//! | `e`/`T`| zone name                                | `UTC`          |
//! | `I`    | daylight saving flag                     | `0`            |
//! | `O`/`P`| offset                                   | `+0000`/`+00:00` |
//! | `p`    | offset, `Z` for UTC                      | `Z`            |
//! | `Z`    | offset in seconds                        | `0`            |
//! | `c`    | ISO 8601                                 | `2024-01-01T00:00:00+00:00` |
//! | `r`    | RFC 2822                                 | `Mon, 01 Jan 2024 00:00:00 +0000` |
//! | `U`    | seconds since the epoch                  | `1704067200`   |

use jiff::{tz::TimeZone, Timestamp, Zoned};
use std::fmt::{self, Write};

/// Pattern for RFC 2822 dates, the default display pattern.
pub const RFC2822: &str = "D, d M Y H:i:s O";

/// Pattern for ISO 8601 dates with an offset.
pub const ISO8601: &str = "Y-m-d\\TH:i:sP";

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Renders `timestamp` in UTC according to `pattern`.
pub fn format(pattern: &str, timestamp: Timestamp) -> String {
    let mut out = String::with_capacity(pattern.len() * 4);
    // Writing into a `String` cannot fail.
    let _ = format_to(&mut out, pattern, timestamp);
    out
}

/// Like [`format`], writing into any [`fmt::Write`] sink.
pub fn format_to<W: Write>(w: &mut W, pattern: &str, timestamp: Timestamp) -> fmt::Result {
    let zdt = timestamp.to_zoned(TimeZone::UTC);
    write_pattern(w, pattern, &zdt)
}

fn write_pattern<W: Write>(w: &mut W, pattern: &str, zdt: &Zoned) -> fmt::Result {
    let mut chars = pattern.chars();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(escaped) = chars.next() {
                w.write_char(escaped)?;
            }
            continue;
        }

        write_letter(w, ch, zdt)?;
    }

    Ok(())
}

fn write_letter<W: Write>(w: &mut W, ch: char, zdt: &Zoned) -> fmt::Result {
    let weekday = zdt.weekday();
    let weekday_name = WEEKDAYS[weekday.to_monday_zero_offset() as usize];
    let month_name = MONTHS[zdt.month() as usize - 1];

    match ch {
        // Day
        'd' => write!(w, "{:02}", zdt.day()),
        'D' => w.write_str(&weekday_name[..3]),
        'j' => write!(w, "{}", zdt.day()),
        'l' => w.write_str(weekday_name),
        'N' => write!(w, "{}", weekday.to_monday_one_offset()),
        'S' => w.write_str(ordinal_suffix(zdt.day())),
        'w' => write!(w, "{}", weekday.to_sunday_zero_offset()),
        'z' => write!(w, "{}", zdt.day_of_year() - 1),

        // Week
        'W' => write!(w, "{:02}", zdt.date().iso_week_date().week()),

        // Month
        'F' => w.write_str(month_name),
        'm' => write!(w, "{:02}", zdt.month()),
        'M' => w.write_str(&month_name[..3]),
        'n' => write!(w, "{}", zdt.month()),
        't' => write!(w, "{}", zdt.days_in_month()),

        // Year
        'L' => w.write_str(if zdt.in_leap_year() { "1" } else { "0" }),
        'o' => write_year(w, zdt.date().iso_week_date().year()),
        'Y' => write_year(w, zdt.year()),
        'y' => write!(w, "{:02}", zdt.year().rem_euclid(100)),

        // Time
        'a' => w.write_str(if zdt.hour() < 12 { "am" } else { "pm" }),
        'A' => w.write_str(if zdt.hour() < 12 { "AM" } else { "PM" }),
        'B' => {
            let seconds = i32::from(zdt.hour()) * 3600
                + i32::from(zdt.minute()) * 60
                + i32::from(zdt.second());
            // Biel Mean Time is UTC+1
            let beats = (seconds + 3600).rem_euclid(86_400) * 10 / 864;
            write!(w, "{beats:03}")
        }
        'g' => write!(w, "{}", hour12(zdt.hour())),
        'G' => write!(w, "{}", zdt.hour()),
        'h' => write!(w, "{:02}", hour12(zdt.hour())),
        'H' => write!(w, "{:02}", zdt.hour()),
        'i' => write!(w, "{:02}", zdt.minute()),
        's' => write!(w, "{:02}", zdt.second()),
        'u' => write!(w, "{:06}", zdt.subsec_nanosecond() / 1_000),
        'v' => write!(w, "{:03}", zdt.subsec_nanosecond() / 1_000_000),

        // Zone
        'e' | 'T' => w.write_str("UTC"),
        'I' => w.write_str("0"),
        'O' => w.write_str("+0000"),
        'P' => w.write_str("+00:00"),
        'p' => w.write_str("Z"),
        'Z' => w.write_str("0"),

        // Full date/time
        'c' => write_pattern(w, ISO8601, zdt),
        'r' => write_pattern(w, RFC2822, zdt),
        'U' => write!(w, "{}", zdt.timestamp().as_second()),

        _ => w.write_char(ch),
    }
}

fn write_year<W: Write>(w: &mut W, year: i16) -> fmt::Result {
    if year < 0 {
        write!(w, "-{:04}", year.unsigned_abs())
    } else {
        write!(w, "{year:04}")
    }
}

fn hour12(hour: i8) -> i8 {
    match hour % 12 {
        0 => 12,
        hour => hour,
    }
}

fn ordinal_suffix(day: i8) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
