use super::{Field, FieldMeta};
use crate::{
    stmt::Value,
    time::{self, Clock, SystemClock},
};
use jiff::Timestamp;
use serde::Deserialize;
use std::sync::Arc;

/// Presentation hint added to every timestamp field.
pub const CSS_CLASS: &str = "timestamp";

/// Configuration of a timestamp field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimestampConfig {
    /// Store the current time when the record is created
    pub auto_set_on_create: bool,

    /// Store the current time when the record is updated
    pub auto_set_on_update: bool,

    /// Pattern used to encode the stored value. When `None`, the number of
    /// seconds since the epoch is stored.
    pub storage_format: Option<String>,

    /// Pattern used for display
    pub display_format: String,

    /// Empty input resolves to null
    pub nullable: bool,
}

impl Default for TimestampConfig {
    fn default() -> Self {
        TimestampConfig {
            auto_set_on_create: false,
            auto_set_on_update: false,
            storage_format: None,
            display_format: "r".to_string(),
            nullable: false,
        }
    }
}

impl TimestampConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auto_set_on_create(mut self, enabled: bool) -> Self {
        self.auto_set_on_create = enabled;
        self
    }

    pub fn auto_set_on_update(mut self, enabled: bool) -> Self {
        self.auto_set_on_update = enabled;
        self
    }

    pub fn storage_format(mut self, pattern: impl Into<String>) -> Self {
        self.storage_format = Some(pattern.into());
        self
    }

    pub fn display_format(mut self, pattern: impl Into<String>) -> Self {
        self.display_format = pattern.into();
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}

/// Result of assigning a value to a timestamp field.
#[derive(Debug, Clone, PartialEq)]
pub enum Canonical {
    /// No value
    Absent,

    /// Seconds since the Unix epoch
    Seconds(i64),

    /// Input the field could not interpret, handed back unchanged
    Raw(Value),
}

impl Canonical {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_seconds(&self) -> Option<i64> {
        match self {
            Self::Seconds(seconds) => Some(*seconds),
            _ => None,
        }
    }
}

impl From<Canonical> for Value {
    fn from(value: Canonical) -> Self {
        match value {
            Canonical::Absent => Value::Null,
            Canonical::Seconds(seconds) => Value::I64(seconds),
            Canonical::Raw(value) => value,
        }
    }
}

/// A point in time, held as seconds since the Unix epoch and stored either as
/// that number or as a formatted string.
///
/// Patterns are described in [`time::format`].
#[derive(Debug, Clone)]
pub struct TimestampField {
    config: TimestampConfig,
    clock: Arc<dyn Clock>,
}

impl TimestampField {
    /// Creates a field that reads the system clock.
    pub fn new(config: TimestampConfig) -> TimestampField {
        TimestampField {
            config,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock used for relative input and auto-stamping.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &TimestampConfig {
        &self.config
    }

    /// Converts an assigned value into seconds since the epoch.
    ///
    /// Date strings are tried first, then numbers, which are truncated toward
    /// zero. Anything else is returned as [`Canonical::Raw`].
    ///
    /// Only strings reach the date parser. `"20240101"` is the first of
    /// January 2024, while the integer `20240101` is taken as seconds.
    pub fn set(&self, value: Value) -> Canonical {
        if value.is_null() || (self.config.nullable && value.is_empty()) {
            return Canonical::Absent;
        }

        if let Some(seconds) = self.parse(&value) {
            return Canonical::Seconds(seconds);
        }

        if let Some(num) = value.to_numeric() {
            return Canonical::Seconds(num.trunc());
        }

        tracing::debug!(?value, "timestamp input not understood; passing it through");
        Canonical::Raw(value)
    }

    fn parse(&self, value: &Value) -> Option<i64> {
        let src = value.as_str()?;
        time::parse(src, self.clock.now()).map(|timestamp| timestamp.as_second())
    }

    /// Formats numeric values. Returns `None` for anything else, including
    /// numbers outside the supported calendar range.
    fn render(&self, pattern: &str, value: &Value) -> Option<String> {
        let seconds = value.to_numeric()?.trunc();

        match Timestamp::from_second(seconds) {
            Ok(timestamp) => Some(time::format(pattern, timestamp)),
            Err(_) => {
                tracing::debug!(seconds, "timestamp out of range; leaving it unformatted");
                None
            }
        }
    }

    fn auto_set(&self, loaded: bool) -> bool {
        if loaded {
            self.config.auto_set_on_update
        } else {
            self.config.auto_set_on_create
        }
    }
}

impl Field for TimestampField {
    fn initialize(&self, meta: &mut FieldMeta, model: &str, name: &str) {
        meta.initialize(model, name);
        meta.add_css_class(CSS_CLASS);
    }

    fn set(&self, value: Value) -> Value {
        TimestampField::set(self, value).into()
    }

    /// Stored strings that were never converted back are returned as they are.
    fn display(&self, value: &Value) -> Value {
        match self.render(&self.config.display_format, value) {
            Some(rendered) => Value::String(rendered),
            None => value.clone(),
        }
    }

    fn save(&self, mut value: Value, loaded: bool) -> Value {
        if self.auto_set(loaded) {
            let now = self.clock.now();
            tracing::trace!(%now, loaded, "auto-setting timestamp");
            value = Value::from(now);
        }

        let Some(pattern) = &self.config.storage_format else {
            return value;
        };

        if let Some(seconds) = self.parse(&value) {
            value = Value::I64(seconds);
        }

        match self.render(pattern, &value) {
            Some(rendered) => Value::String(rendered),
            None => value,
        }
    }
}
