mod num;
pub use num::Numeric;

mod value;
pub use value::Value;

mod value_jiff;
