//! Input representation for a single vital reading.
//!
//! Rust numbers are kept as `f64` untouched, so infinities and NaN are
//! range-checked like any other number. Dynamically typed input
//! ([`serde_json::Value`], strings, collections, `None`) is only accepted
//! when it holds a JSON number.

use serde_json::Value;

use crate::error::VitalsError;

#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    /// A native numeric reading.
    Number(f64),
    /// A reading of unknown type, validated on use.
    Dynamic(Value),
}

impl Reading {
    /// The numeric value, or a [`VitalsError::TypeMismatch`] naming `vital`
    /// and the JSON type that was supplied instead.
    pub fn as_number(&self, vital: &'static str) -> Result<f64, VitalsError> {
        match self {
            Reading::Number(v) => Ok(*v),
            Reading::Dynamic(value) => value.as_f64().ok_or(VitalsError::TypeMismatch {
                vital,
                found: json_type_name(value),
            }),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

macro_rules! numeric_reading {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Reading {
                fn from(v: $ty) -> Self {
                    Reading::Number(v as f64)
                }
            }
        )*
    };
}

impl From<f64> for Reading {
    fn from(v: f64) -> Self {
        Reading::Number(v)
    }
}

numeric_reading!(f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<Value> for Reading {
    fn from(value: Value) -> Self {
        Reading::Dynamic(value)
    }
}

impl From<&Value> for Reading {
    fn from(value: &Value) -> Self {
        Reading::Dynamic(value.clone())
    }
}

impl From<&str> for Reading {
    fn from(s: &str) -> Self {
        Reading::Dynamic(Value::from(s))
    }
}

impl From<String> for Reading {
    fn from(s: String) -> Self {
        Reading::Dynamic(Value::from(s))
    }
}

impl From<bool> for Reading {
    fn from(b: bool) -> Self {
        Reading::Dynamic(Value::from(b))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Reading {
    fn from(items: Vec<T>) -> Self {
        Reading::Dynamic(Value::from(items))
    }
}

impl<T: Into<Reading>> From<Option<T>> for Reading {
    fn from(value: Option<T>) -> Self {
        value.map_or(Reading::Dynamic(Value::Null), Into::into)
    }
}
