use heck::ToTitleCase;

/// Descriptive data shared by every field type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMeta {
    /// Name of the model the field belongs to
    pub model: String,

    /// The field name
    pub name: String,

    /// Storage column. Defaults to the field name.
    pub column: Option<String>,

    /// Human readable label. Defaults to the title-cased field name.
    pub label: Option<String>,

    /// CSS classes for the rendering layer to attach to inputs.
    pub css_class: Vec<String>,
}

impl FieldMeta {
    pub fn new() -> FieldMeta {
        FieldMeta::default()
    }

    /// Sets the storage column
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Sets the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Adds a CSS class
    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.add_css_class(class);
        self
    }

    /// Base initialization, run for every field when its model is built.
    pub fn initialize(&mut self, model: &str, name: &str) {
        self.model = model.to_string();
        self.name = name.to_string();

        if self.column.is_none() {
            self.column = Some(name.to_string());
        }

        if self.label.is_none() {
            self.label = Some(name.to_title_case());
        }
    }

    pub fn add_css_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.css_class.contains(&class) {
            self.css_class.push(class);
        }
    }

    pub fn column_name(&self) -> &str {
        self.column.as_deref().unwrap_or(&self.name)
    }

    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}
