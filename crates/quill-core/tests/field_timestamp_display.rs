use quill_core::{
    schema::field::{Field, TimestampConfig, TimestampField},
    stmt::Value,
};

#[test]
fn numbers_use_the_default_rfc2822_pattern() {
    let field = TimestampField::new(TimestampConfig::new());
    assert_eq!(field.config().display_format, "r");
    assert_eq!(
        field.display(&Value::I64(1_704_067_200)),
        Value::from("Mon, 01 Jan 2024 00:00:00 +0000")
    );
}

#[test]
fn numeric_strings_are_formatted() {
    let field = TimestampField::new(TimestampConfig::new().display_format("Y-m-d"));
    assert_eq!(field.display(&"1704067200".into()), Value::from("2024-01-01"));
    assert_eq!(field.display(&Value::F64(1_704_067_200.5)), Value::from("2024-01-01"));
}

#[test]
fn stored_strings_are_returned_unchanged() {
    let field = TimestampField::new(TimestampConfig::new());
    let stored = Value::from("2023-11-14 22:13:20");
    assert_eq!(field.display(&stored), stored);
}

#[test]
fn non_numeric_values_are_returned_unchanged() {
    let field = TimestampField::new(TimestampConfig::new());
    assert_eq!(field.display(&Value::Null), Value::Null);
    assert_eq!(field.display(&Value::Bool(true)), Value::Bool(true));
}

#[test]
fn out_of_range_numbers_are_returned_unchanged() {
    let field = TimestampField::new(TimestampConfig::new());
    assert_eq!(field.display(&Value::I64(i64::MAX)), Value::I64(i64::MAX));
}
