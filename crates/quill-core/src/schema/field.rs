mod meta;
pub use meta::FieldMeta;

mod primitive;
pub use primitive::{BooleanField, IntegerField, StringField};

mod timestamp;
pub use timestamp::{Canonical, TimestampConfig, TimestampField};

use crate::stmt::Value;

/// Conversion hooks the record layer calls on every declared field.
///
/// Implementations never fail: input they cannot interpret is coerced or
/// handed back unchanged.
pub trait Field {
    /// Called once when the owning model is built.
    ///
    /// `name` is the field's name on the model. The default implementation
    /// only runs the base initialization in [`FieldMeta::initialize`].
    fn initialize(&self, meta: &mut FieldMeta, model: &str, name: &str) {
        meta.initialize(model, name);
    }

    /// Converts an assigned value into the field's in-memory form.
    fn set(&self, value: Value) -> Value;

    /// Renders a value for people to read.
    fn display(&self, value: &Value) -> Value {
        value.clone()
    }

    /// Converts a value into what gets written to storage. `loaded` is `true`
    /// when the record already exists in storage.
    fn save(&self, value: Value, loaded: bool) -> Value {
        let _ = loaded;
        value
    }
}

/// Field type, selected when the model is declared.
#[derive(Debug, Clone)]
pub enum FieldTy {
    String(StringField),
    Integer(IntegerField),
    Boolean(BooleanField),
    Timestamp(TimestampField),
}

impl FieldTy {
    pub fn as_timestamp(&self) -> Option<&TimestampField> {
        match self {
            Self::Timestamp(field) => Some(field),
            _ => None,
        }
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, Self::Timestamp(_))
    }

    fn as_field(&self) -> &dyn Field {
        match self {
            Self::String(field) => field,
            Self::Integer(field) => field,
            Self::Boolean(field) => field,
            Self::Timestamp(field) => field,
        }
    }
}

impl Field for FieldTy {
    fn initialize(&self, meta: &mut FieldMeta, model: &str, name: &str) {
        self.as_field().initialize(meta, model, name)
    }

    fn set(&self, value: Value) -> Value {
        self.as_field().set(value)
    }

    fn display(&self, value: &Value) -> Value {
        self.as_field().display(value)
    }

    fn save(&self, value: Value, loaded: bool) -> Value {
        self.as_field().save(value, loaded)
    }
}

impl From<StringField> for FieldTy {
    fn from(value: StringField) -> Self {
        Self::String(value)
    }
}

impl From<IntegerField> for FieldTy {
    fn from(value: IntegerField) -> Self {
        Self::Integer(value)
    }
}

impl From<BooleanField> for FieldTy {
    fn from(value: BooleanField) -> Self {
        Self::Boolean(value)
    }
}

impl From<TimestampField> for FieldTy {
    fn from(value: TimestampField) -> Self {
        Self::Timestamp(value)
    }
}

/// A field declared on a model.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Names, storage column and presentation hints
    pub meta: FieldMeta,

    /// How values are converted
    pub ty: FieldTy,
}

impl FieldDef {
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn column(&self) -> &str {
        self.meta.column_name()
    }

    pub fn ty(&self) -> &FieldTy {
        &self.ty
    }
}
