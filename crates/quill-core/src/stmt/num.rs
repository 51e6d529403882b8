use super::Value;

/// A number recovered from a [`Value`].
///
/// Strings count as numbers when the whole string, ignoring surrounding
/// whitespace, is a decimal integer or float literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    /// Parses a decimal number literal such as `42`, ` -7 `, `1.5`, `.5` or
    /// `1e3`. Hex, octal, `inf` and `nan` are rejected.
    pub fn parse(src: &str) -> Option<Numeric> {
        let src = src.trim();
        let bytes = src.as_bytes();
        let mut pos = 0;

        if matches!(bytes.first(), Some(b'+' | b'-')) {
            pos += 1;
        }

        let int_digits = count_digits(&bytes[pos..]);
        pos += int_digits;

        let mut frac_digits = 0;
        let mut is_float = false;
        if bytes.get(pos) == Some(&b'.') {
            is_float = true;
            pos += 1;
            frac_digits = count_digits(&bytes[pos..]);
            pos += frac_digits;
        }

        if int_digits == 0 && frac_digits == 0 {
            return None;
        }

        if matches!(bytes.get(pos), Some(b'e' | b'E')) {
            is_float = true;
            pos += 1;
            if matches!(bytes.get(pos), Some(b'+' | b'-')) {
                pos += 1;
            }
            let exp_digits = count_digits(&bytes[pos..]);
            if exp_digits == 0 {
                return None;
            }
            pos += exp_digits;
        }

        if pos != bytes.len() {
            return None;
        }

        if !is_float {
            if let Ok(int) = src.parse::<i64>() {
                return Some(Numeric::Int(int));
            }
        }

        src.parse::<f64>().ok().map(Numeric::Float)
    }

    /// Truncates toward zero. Floats beyond the `i64` range saturate.
    pub fn trunc(self) -> i64 {
        match self {
            Numeric::Int(int) => int,
            Numeric::Float(float) => float.trunc() as i64,
        }
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

impl Value {
    /// Returns the number this value holds, if it is numeric.
    ///
    /// Integers, finite floats and numeric strings qualify. Booleans do not.
    pub fn to_numeric(&self) -> Option<Numeric> {
        match self {
            Value::I64(v) => Some(Numeric::Int(*v)),
            Value::F64(v) if v.is_finite() => Some(Numeric::Float(*v)),
            Value::String(v) => Numeric::parse(v),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.to_numeric().is_some()
    }
}
