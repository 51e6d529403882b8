mod record;
pub use record::{Record, Row};

pub use quill_core::{
    err,
    schema::{self, field, Field, FieldMeta, Model},
    stmt::{self, Value},
    time, Error, Result,
};
