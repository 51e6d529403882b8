use super::{Field, FieldDef, FieldMeta, FieldTy, Model};
use crate::{Error, Result};
use indexmap::{IndexMap, IndexSet};

/// Declares the fields of a [`Model`].
#[derive(Debug)]
pub struct Builder {
    name: String,
    fields: Vec<(String, FieldMeta, FieldTy)>,
}

impl Builder {
    pub(super) fn new(name: impl Into<String>) -> Builder {
        Builder {
            name: name.into(),
            fields: vec![],
        }
    }

    /// Declares a field stored in a column of the same name.
    pub fn field(self, name: impl Into<String>, ty: impl Into<FieldTy>) -> Self {
        self.field_with(name, FieldMeta::new(), ty)
    }

    /// Declares a field with explicit metadata such as a column or label.
    pub fn field_with(
        mut self,
        name: impl Into<String>,
        meta: FieldMeta,
        ty: impl Into<FieldTy>,
    ) -> Self {
        self.fields.push((name.into(), meta, ty.into()));
        self
    }

    /// Initializes every field and returns the model.
    pub fn build(self) -> Result<Model> {
        let mut fields = IndexMap::with_capacity(self.fields.len());
        let mut columns = IndexSet::with_capacity(self.fields.len());

        for (name, mut meta, ty) in self.fields {
            if fields.contains_key(&name) {
                return Err(Error::invalid_schema(format!(
                    "duplicate field `{name}` on model `{}`",
                    self.name
                )));
            }

            ty.initialize(&mut meta, &self.name, &name);

            if !columns.insert(meta.column_name().to_string()) {
                return Err(Error::invalid_schema(format!(
                    "column `{}` is mapped by more than one field on model `{}`",
                    meta.column_name(),
                    self.name
                )));
            }

            fields.insert(name, FieldDef { meta, ty });
        }

        Ok(Model {
            name: self.name,
            fields,
        })
    }
}
