mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::Model;

pub mod stmt;

pub mod time;

/// A Result type alias that uses Quill's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
