//! Clock access plus the free-form parser and pattern formatter that
//! timestamp fields are built on. Everything here works in UTC.

mod clock;
pub use clock::{Clock, FixedClock, SystemClock};

pub mod format;
pub use format::format;

pub mod parse;
pub use parse::parse;
