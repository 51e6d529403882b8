mod builder;
pub use builder::Builder;

mod config;
pub use config::{FieldConfig, FieldTyConfig, ModelConfig};

pub mod field;
pub use field::{Field, FieldDef, FieldMeta, FieldTy};

mod model;
pub use model::Model;
