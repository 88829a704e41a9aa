//! Conversion of caller input into validated parameters.

use crate::error::{Result, StatsError};
use serde_json::Value;
use std::fmt;

/// A named operation parameter.
pub trait Param: Sized {
    /// Parameter name as it appears in error messages and codes.
    const NAME: &'static str;

    /// Primitive type named when the value has the wrong type.
    const EXPECTED: &'static str;

    /// Error for an omitted value. Only required selectors report it as missing.
    fn absent() -> StatsError {
        StatsError::invalid_type(Self::NAME, Self::EXPECTED)
    }
}

/// Caller input that can be validated into the parameter `T`.
///
/// `is_present` mirrors a truthiness check: `None`, `Value::Null`, `false`,
/// `0` and the empty string count as absent. Operations that require a
/// selector check presence before any type check.
///
/// `is_omitted` is true only for `None`; operations with a default value
/// substitute it in that case.
pub trait Argument<T: Param> {
    fn is_present(&self) -> bool {
        true
    }

    fn is_omitted(&self) -> bool {
        false
    }

    fn into_arg(self) -> Result<T>;
}

impl<T: Param, A: Argument<T>> Argument<T> for Option<A> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(|a| <A as Argument<T>>::is_present(a))
    }

    fn is_omitted(&self) -> bool {
        self.is_none()
    }

    fn into_arg(self) -> Result<T> {
        match self {
            Some(inner) => <A as Argument<T>>::into_arg(inner),
            None => Err(T::absent()),
        }
    }
}

/// JS-style truthiness of a JSON value.
pub(crate) fn value_is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Implements `Argument<$ty>` for `Value` by delegating to `&Value`.
macro_rules! owned_value_argument {
    ($ty:ty) => {
        impl $crate::types::Argument<$ty> for serde_json::Value {
            fn is_present(&self) -> bool {
                $crate::types::argument::value_is_present(self)
            }

            fn into_arg(self) -> $crate::error::Result<$ty> {
                <&serde_json::Value as $crate::types::Argument<$ty>>::into_arg(&self)
            }
        }
    };
}
pub(crate) use owned_value_argument;

/// Implements `Argument<$ty>` for `String` and `&String` by delegating to `&str`.
macro_rules! string_argument {
    ($ty:ty) => {
        impl $crate::types::Argument<$ty> for String {
            fn is_present(&self) -> bool {
                !self.is_empty()
            }

            fn into_arg(self) -> $crate::error::Result<$ty> {
                <&str as $crate::types::Argument<$ty>>::into_arg(self.as_str())
            }
        }

        impl $crate::types::Argument<$ty> for &String {
            fn is_present(&self) -> bool {
                !self.is_empty()
            }

            fn into_arg(self) -> $crate::error::Result<$ty> {
                <&str as $crate::types::Argument<$ty>>::into_arg(self.as_str())
            }
        }
    };
}
pub(crate) use string_argument;

/// Search keyword. Any string is accepted, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyword(String);

impl Keyword {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self(keyword.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Param for Keyword {
    const NAME: &'static str = "keyword";
    const EXPECTED: &'static str = "string";
}

impl Argument<Keyword> for Keyword {
    fn into_arg(self) -> Result<Keyword> {
        Ok(self)
    }
}

impl Argument<Keyword> for &str {
    fn into_arg(self) -> Result<Keyword> {
        Ok(Keyword::new(self))
    }
}

string_argument!(Keyword);

impl Argument<Keyword> for &Value {
    fn is_present(&self) -> bool {
        value_is_present(self)
    }

    fn into_arg(self) -> Result<Keyword> {
        match self {
            Value::String(s) => Ok(Keyword::new(s.as_str())),
            _ => Err(StatsError::invalid_type(Keyword::NAME, Keyword::EXPECTED)),
        }
    }
}

owned_value_argument!(Keyword);
