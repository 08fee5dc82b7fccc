use core::fmt;

use crate::Value;

/// A number, kept in the representation it was parsed with.
///
/// Non-negative integers are always stored as [`Number::PosInt`]; only
/// negative integers use [`Number::NegInt`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A non-negative integer.
    PosInt(u64),
    /// A negative integer.
    NegInt(i64),
    /// A floating point number.
    Float(f64),
}

impl Number {
    /// Builds a number from a signed integer.
    pub const fn from_i64(v: i64) -> Self {
        if v < 0 {
            Number::NegInt(v)
        } else {
            Number::PosInt(v as u64)
        }
    }

    /// Builds a number from an unsigned integer.
    pub const fn from_u64(v: u64) -> Self {
        Number::PosInt(v)
    }

    /// Builds a number from a float.
    pub const fn from_f64(v: f64) -> Self {
        Number::Float(v)
    }

    /// The identifier of the Rust type this number is stored as.
    pub const fn natural_type(&self) -> &'static str {
        match self {
            Number::PosInt(_) => "u64",
            Number::NegInt(_) => "i64",
            Number::Float(_) => "f64",
        }
    }

    /// Returns the value as `i64` if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::PosInt(v) => i64::try_from(v).ok(),
            Number::NegInt(v) => Some(v),
            Number::Float(_) => None,
        }
    }

    /// Returns the value as `u64` if it is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::PosInt(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the value as `f64`, rounding large integers.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::PosInt(v) => v as f64,
            Number::NegInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::PosInt(v) => write!(f, "{v}"),
            Number::NegInt(v) => write!(f, "{v}"),
            Number::Float(v) => write!(f, "{v:?}"),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty => $method:ident),* $(,)?) => {
        $(
            impl From<$t> for Number {
                fn from(v: $t) -> Self {
                    Self::$method(v as _)
                }
            }

            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Number(Number::from(v))
                }
            }
        )*
    };
}

impl_from_int! {
    i8 => from_i64,
    i16 => from_i64,
    i32 => from_i64,
    i64 => from_i64,
    isize => from_i64,
    u8 => from_u64,
    u16 => from_u64,
    u32 => from_u64,
    u64 => from_u64,
    usize => from_u64,
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(f64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Number(Number::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(Number::from(v))
    }
}
