use crate::stmt::Value;

impl From<jiff::Timestamp> for Value {
    fn from(value: jiff::Timestamp) -> Self {
        Self::I64(value.as_second())
    }
}

impl TryFrom<Value> for jiff::Timestamp {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value.to_numeric() {
            Some(num) => Ok(jiff::Timestamp::from_second(num.trunc())?),
            None => Err(crate::Error::type_conversion(value, "Timestamp")),
        }
    }
}
