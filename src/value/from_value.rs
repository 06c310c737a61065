use thiserror::Error;

use super::{Value, ValueType};

/// Conversion from a dynamically typed cell into a concrete field type.
///
/// Conversions are strict: a value converts only into the type it carries.
/// `Option<T>` is the single exception, absorbing [`Value::Null`] as `None`.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("expected a {expected} value, got {actual}")]
    TypeMismatch {
        expected: ValueType,
        actual: ValueType,
    },

    #[error("unexpected null for a non-nullable field")]
    UnexpectedNull,

    #[error("integer {0} is out of range for the field type")]
    OutOfRange(i64),
}

fn mismatch(expected: ValueType, actual: &Value) -> ValueError {
    match actual {
        Value::Null => ValueError::UnexpectedNull,
        other => ValueError::TypeMismatch {
            expected,
            actual: other.value_type(),
        },
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch(ValueType::Bool, &other)),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Int(i) => Ok(i),
            other => Err(mismatch(ValueType::Int, &other)),
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Int(i) => i32::try_from(i).map_err(|_| ValueError::OutOfRange(i)),
            other => Err(mismatch(ValueType::Int, &other)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Real(r) => Ok(r),
            other => Err(mismatch(ValueType::Real, &other)),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(mismatch(ValueType::Text, &other)),
        }
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bytes(b) => Ok(b),
            other => Err(mismatch(ValueType::Bytes, &other)),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Ok(value)
    }
}
