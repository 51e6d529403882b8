use jiff::Timestamp;
use quill_core::time::parse;

// Tuesday, 2023-11-14 22:13:20 UTC
const NOW: i64 = 1_700_000_000;

fn parse_at_now(input: &str) -> Option<i64> {
    let now = Timestamp::from_second(NOW).unwrap();
    parse(input, now).map(|timestamp| timestamp.as_second())
}

#[test]
fn epoch_prefix() {
    assert_eq!(parse_at_now("@1700000000"), Some(1_700_000_000));
    assert_eq!(parse_at_now("@-86400"), Some(-86_400));
    assert_eq!(parse_at_now("@abc"), None);
}

#[test]
fn rfc3339_with_offset() {
    assert_eq!(parse_at_now("2023-11-14T22:13:20Z"), Some(1_700_000_000));
    assert_eq!(parse_at_now("2023-11-14 23:13:20+01:00"), Some(1_700_000_000));
}

#[test]
fn rfc2822() {
    assert_eq!(
        parse_at_now("Tue, 14 Nov 2023 22:13:20 +0000"),
        Some(1_700_000_000)
    );
}

#[test]
fn civil_datetime_is_utc() {
    assert_eq!(parse_at_now("2024-01-15 10:00:00"), Some(1_705_312_800));
    assert_eq!(parse_at_now("2024-01-15T10:30"), Some(1_705_314_600));
}

#[test]
fn civil_date_is_midnight() {
    assert_eq!(parse_at_now("2024-01-01"), Some(1_704_067_200));
    assert_eq!(parse_at_now("20240101"), Some(1_704_067_200));
}

#[test]
fn other_date_orders() {
    let jan_15 = 1_705_276_800;

    assert_eq!(parse_at_now("01/15/2024"), Some(jan_15));
    assert_eq!(parse_at_now("2024/01/15"), Some(jan_15));
    assert_eq!(parse_at_now("15-01-2024"), Some(jan_15));
    assert_eq!(parse_at_now("15.01.2024"), Some(jan_15));
    assert_eq!(parse_at_now("1/15/2024 10:00:00"), Some(jan_15 + 36_000));
    // Month and day only, in the current year
    assert_eq!(parse_at_now("11/15"), Some(1_699_920_000 + 86_400));
}

#[test]
fn month_names() {
    let jan_15 = 1_705_276_800;

    assert_eq!(parse_at_now("15 January 2024"), Some(jan_15));
    assert_eq!(parse_at_now("January 15, 2024"), Some(jan_15));
    assert_eq!(parse_at_now("jan 15th 2024"), Some(jan_15));
    assert_eq!(parse_at_now("Jan 15 2024 10:00"), Some(jan_15 + 36_000));
    assert_eq!(parse_at_now("14 Nov 2023 22:13:20"), Some(NOW));
    assert_eq!(parse_at_now("January 2024"), Some(1_704_067_200));
    // Without a year, the current one
    assert_eq!(parse_at_now("15 nov"), Some(1_699_920_000 + 86_400));
    assert_eq!(
        parse_at_now("Tuesday, November 14th, 2023 10:13:20 PM"),
        Some(NOW)
    );
}

#[test]
fn twelve_hour_times() {
    let midnight = 1_699_920_000;

    assert_eq!(parse_at_now("10am"), Some(midnight + 10 * 3_600));
    assert_eq!(parse_at_now("10 AM"), Some(midnight + 10 * 3_600));
    assert_eq!(parse_at_now("10:30 pm"), Some(midnight + 22 * 3_600 + 1_800));
    assert_eq!(parse_at_now("12am"), Some(midnight));
    assert_eq!(parse_at_now("12pm"), Some(midnight + 12 * 3_600));
    assert_eq!(parse_at_now("tomorrow 9pm"), Some(1_700_006_400 + 21 * 3_600));
}

#[test]
fn weekdays_follow_the_named_date() {
    // 2024-01-01 is a Monday
    assert_eq!(parse_at_now("friday 2024-01-01"), Some(1_704_067_200 + 4 * 86_400));
    assert_eq!(parse_at_now("Mon, 01 Jan 2024"), Some(1_704_067_200));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse_at_now("  2024-01-01\n"), Some(1_704_067_200));
}

#[test]
fn keywords() {
    assert_eq!(parse_at_now("now"), Some(NOW));
    assert_eq!(parse_at_now("NOW"), Some(NOW));
    assert_eq!(parse_at_now("today"), Some(1_699_920_000));
    assert_eq!(parse_at_now("midnight"), Some(1_699_920_000));
    assert_eq!(parse_at_now("noon"), Some(1_699_963_200));
    assert_eq!(parse_at_now("tomorrow"), Some(1_700_006_400));
    assert_eq!(parse_at_now("yesterday"), Some(1_699_833_600));
    assert_eq!(parse_at_now("tomorrow noon"), Some(1_700_049_600));
}

#[test]
fn relative_amounts() {
    assert_eq!(parse_at_now("+1 day"), Some(NOW + 86_400));
    assert_eq!(parse_at_now("-2 weeks"), Some(NOW - 14 * 86_400));
    assert_eq!(parse_at_now("3 hours ago"), Some(NOW - 3 * 3_600));
    assert_eq!(parse_at_now("an hour ago"), Some(NOW - 3_600));
    assert_eq!(parse_at_now("+1 day 2 hours"), Some(NOW + 86_400 + 7_200));
    assert_eq!(parse_at_now("1 fortnight"), Some(NOW + 14 * 86_400));
    assert_eq!(parse_at_now("30 secs"), Some(NOW + 30));
}

#[test]
fn calendar_units() {
    // 2023-12-14 22:13:20
    assert_eq!(parse_at_now("next month"), Some(1_702_592_000));
    // 2024-02-29, clamped from the 31st
    assert_eq!(parse_at_now("2024-01-31 +1 month"), Some(1_709_164_800));
    assert_eq!(parse_at_now("2024-01-01 +1 week"), Some(1_704_672_000));
}

#[test]
fn weekdays() {
    let tuesday_midnight = 1_699_920_000;

    assert_eq!(parse_at_now("tuesday"), Some(tuesday_midnight));
    assert_eq!(parse_at_now("this tue"), Some(tuesday_midnight));
    assert_eq!(parse_at_now("monday"), Some(tuesday_midnight + 6 * 86_400));
    assert_eq!(parse_at_now("next monday"), Some(tuesday_midnight + 6 * 86_400));
    assert_eq!(parse_at_now("next tuesday"), Some(tuesday_midnight + 7 * 86_400));
    assert_eq!(parse_at_now("last sunday"), Some(tuesday_midnight - 2 * 86_400));
}

#[test]
fn date_and_time_tokens() {
    assert_eq!(parse_at_now("2024-01-15 10:30 +1 hour"), Some(1_705_318_200));
    assert_eq!(parse_at_now("tomorrow 09:15"), Some(1_700_006_400 + 9 * 3_600 + 15 * 60));
}

#[test]
fn rejects_unknown_input() {
    for input in [
        "",
        "   ",
        "not a date",
        "1700000000",
        "+1",
        "next",
        "3 parsecs",
        "12 apples",
        "tomorrow-ish",
        "13/45/2024",
        "02/30/2024",
        "31 february 2024",
        "january 32",
        "13pm",
        "10:30 xm",
    ] {
        assert_eq!(parse_at_now(input), None, "input={input:?}");
    }
}
