use quill_core::{
    schema::{Field, FieldDef, Model},
    stmt::Value,
    Error, Result,
};
use indexmap::IndexMap;

/// Values keyed by storage column, as read from or written to storage.
pub type Row = IndexMap<String, Value>;

/// One record of a [`Model`].
///
/// Every assignment goes through the field's `set`, every save through the
/// field's `save`. A record starts out unloaded and becomes loaded once it
/// has been read from or written to storage.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    model: &'a Model,
    values: IndexMap<String, Value>,
    loaded: bool,
}

impl<'a> Record<'a> {
    /// Creates a record that does not exist in storage yet.
    pub fn new(model: &'a Model) -> Record<'a> {
        Record {
            model,
            values: IndexMap::new(),
            loaded: false,
        }
    }

    /// Creates a record from a stored row. Columns the model does not declare
    /// are ignored.
    pub fn load(model: &'a Model, row: Row) -> Record<'a> {
        let mut values = IndexMap::with_capacity(row.len());

        for (column, value) in row {
            match model.field_by_column(&column) {
                Some(field) => {
                    values.insert(field.name().to_string(), field.ty.set(value));
                }
                None => {
                    tracing::debug!(model = %model.name, %column, "ignoring undeclared column");
                }
            }
        }

        Record {
            model,
            values,
            loaded: true,
        }
    }

    pub fn model(&self) -> &'a Model {
        self.model
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Assigns a value to the named field.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let field = self.field(name)?;
        let value = field.ty.set(value.into());
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Returns the current value of the named field, or `None` if the field
    /// has not been assigned.
    pub fn get(&self, name: &str) -> Result<Option<&Value>> {
        self.field(name)?;
        Ok(self.values.get(name))
    }

    /// Renders the named field for display. Unassigned fields render null.
    pub fn display(&self, name: &str) -> Result<Value> {
        let field = self.field(name)?;
        let value = self.values.get(name).unwrap_or(&Value::Null);
        Ok(field.ty.display(value))
    }

    /// Converts every field into its stored form and returns the row to
    /// write, keyed by column.
    ///
    /// The record keeps the stored values and is loaded afterwards.
    pub fn save(&mut self) -> Row {
        tracing::debug!(model = %self.model.name, loaded = self.loaded, "saving record");

        let mut row = Row::with_capacity(self.model.fields.len());

        for field in self.model.fields() {
            let value = self.values.swap_remove(field.name()).unwrap_or_default();
            let stored = field.ty.save(value, self.loaded);

            tracing::trace!(field = field.name(), value = ?stored, "saved field");

            self.values.insert(field.name().to_string(), stored.clone());
            row.insert(field.column().to_string(), stored);
        }

        self.loaded = true;
        row
    }

    fn field(&self, name: &str) -> Result<&'a FieldDef> {
        self.model
            .field(name)
            .ok_or_else(|| Error::unknown_field(&self.model.name, name))
    }
}
