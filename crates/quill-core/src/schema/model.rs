use super::{Builder, FieldDef, ModelConfig};
use crate::{time::Clock, Result};
use indexmap::IndexMap;
use std::sync::Arc;

/// The fields declared for one kind of record.
#[derive(Debug, Clone)]
pub struct Model {
    /// Name of the model
    pub name: String,

    /// Fields keyed by name, in declaration order
    pub fields: IndexMap<String, FieldDef>,
}

impl Model {
    pub fn builder(name: impl Into<String>) -> Builder {
        Builder::new(name)
    }

    /// Builds a model from a declarative configuration. Timestamp fields read
    /// time from `clock`.
    pub fn from_config(config: ModelConfig, clock: Arc<dyn Clock>) -> Result<Model> {
        config.into_builder(clock).build()
    }

    /// Builds a model from a JSON declaration.
    pub fn from_json(src: &str, clock: Arc<dyn Clock>) -> Result<Model> {
        Model::from_config(ModelConfig::from_json(src)?, clock)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    pub fn field_by_column(&self, column: &str) -> Option<&FieldDef> {
        self.fields.values().find(|field| field.column() == column)
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &FieldDef> + '_ {
        self.fields.values()
    }
}
