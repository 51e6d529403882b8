use super::{
    field::{BooleanField, FieldMeta, IntegerField, StringField, TimestampConfig, TimestampField},
    Builder, FieldTy, Model,
};
use crate::{time::Clock, Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::sync::Arc;

/// Declarative form of a [`Model`].
///
/// ```json
/// {
///   "name": "post",
///   "fields": {
///     "title": { "type": "string" },
///     "created": { "type": "timestamp", "auto_set_on_create": true, "storage_format": "Y-m-d H:i:s" }
///   }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub name: String,

    #[serde(default)]
    pub fields: IndexMap<String, FieldConfig>,
}

/// Declarative form of one field.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldConfig {
    #[serde(default)]
    pub column: Option<String>,

    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub css_class: Vec<String>,

    #[serde(flatten)]
    pub ty: FieldTyConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldTyConfig {
    String {
        #[serde(default)]
        nullable: bool,
    },
    Integer {
        #[serde(default)]
        nullable: bool,
    },
    Boolean,
    Timestamp(TimestampConfig),
}

impl ModelConfig {
    pub fn from_json(src: &str) -> Result<ModelConfig> {
        let config: ModelConfig = serde_json::from_str(src)
            .map_err(|err| Error::from(err).context(crate::err!("invalid model declaration")))?;

        if config.fields.is_empty() {
            return Err(Error::invalid_schema(format!(
                "model `{}` declares no fields",
                config.name
            )));
        }

        Ok(config)
    }

    pub(super) fn into_builder(self, clock: Arc<dyn Clock>) -> Builder {
        let mut builder = Model::builder(self.name);

        for (name, field) in self.fields {
            let meta = FieldMeta {
                column: field.column,
                label: field.label,
                css_class: field.css_class,
                ..FieldMeta::default()
            };
            builder = builder.field_with(name, meta, field.ty.into_field_ty(&clock));
        }

        builder
    }
}

impl FieldTyConfig {
    fn into_field_ty(self, clock: &Arc<dyn Clock>) -> FieldTy {
        match self {
            Self::String { nullable } => StringField::new().nullable(nullable).into(),
            Self::Integer { nullable } => IntegerField::new().nullable(nullable).into(),
            Self::Boolean => BooleanField::new().into(),
            Self::Timestamp(config) => TimestampField::new(config).with_clock(clock.clone()).into(),
        }
    }
}
