use super::Field;
use crate::stmt::Value;

/// Free text.
#[derive(Debug, Clone, Default)]
pub struct StringField {
    /// Empty input resolves to null
    pub nullable: bool,
}

/// Whole numbers.
#[derive(Debug, Clone, Default)]
pub struct IntegerField {
    /// Empty input resolves to null
    pub nullable: bool,
}

/// Yes / no flags.
#[derive(Debug, Clone, Default)]
pub struct BooleanField {}

impl StringField {
    pub fn new() -> StringField {
        StringField::default()
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}

impl IntegerField {
    pub fn new() -> IntegerField {
        IntegerField::default()
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}

impl BooleanField {
    pub fn new() -> BooleanField {
        BooleanField::default()
    }
}

fn is_absent(value: &Value, nullable: bool) -> bool {
    value.is_null() || (nullable && value.is_empty())
}

impl Field for StringField {
    fn set(&self, value: Value) -> Value {
        if is_absent(&value, self.nullable) {
            return Value::Null;
        }

        match value {
            Value::Bool(true) => "1".into(),
            Value::Bool(false) => "".into(),
            Value::I64(v) => v.to_string().into(),
            Value::F64(v) => v.to_string().into(),
            value => value,
        }
    }
}

impl Field for IntegerField {
    fn set(&self, value: Value) -> Value {
        if is_absent(&value, self.nullable) {
            return Value::Null;
        }

        if let Value::Bool(v) = value {
            return Value::I64(v.into());
        }

        match value.to_numeric() {
            Some(num) => Value::I64(num.trunc()),
            None => value,
        }
    }
}

impl Field for BooleanField {
    fn set(&self, value: Value) -> Value {
        Value::Bool(!value.is_empty())
    }

    fn display(&self, value: &Value) -> Value {
        match value {
            Value::Bool(true) => "Yes".into(),
            Value::Bool(false) => "No".into(),
            _ => value.clone(),
        }
    }
}
