// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw, unvalidated setting values.

use alloc::string::{String, ToString};
use core::fmt;

/// A raw setting value as supplied by an attribute or a programmatic option.
///
/// Attributes always arrive as [`Value::Text`]; programmatic callers may use
/// any variant through the `From` conversions. Values are only interpreted
/// by [`resolve`](crate::resolve), which decides per key whether a value is
/// acceptable.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// Text value.
    Text(String),
}

impl Value {
    /// Interprets the value as an integer.
    ///
    /// Integers pass through. Floats and numeric text are accepted only when
    /// they carry no fractional part (`"12"`, `"12.0"`, `12.0`). Booleans and
    /// non-numeric text yield `None`.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Float(v) => integral(*v),
            Self::Bool(_) => None,
            Self::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral))
            }
        }
    }

    /// Interprets the value as a boolean (`true`/`false`, either as a boolean
    /// or as text).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(s) if s == "true" => Some(true),
            Self::Text(s) if s == "false" => Some(false),
            _ => None,
        }
    }

    /// Returns the text form of the value.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

fn integral(v: f64) -> Option<i64> {
    // i64 holds every integer-valued f64 below 2^63.
    if !v.is_finite() || v >= 9.2e18 || v <= -9.2e18 {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Range is checked above; truncation is detected by the round-trip comparison"
    )]
    let truncated = v as i64;
    let back = truncated as f64;
    (back == v).then_some(truncated)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(Self::Float(f64::INFINITY), Self::Int)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn integer_coercion() {
        assert_eq!(Value::from(3).as_integer(), Some(3));
        assert_eq!(Value::from("12").as_integer(), Some(12));
        assert_eq!(Value::from(" 12.0 ").as_integer(), Some(12));
        assert_eq!(Value::from(-4.0).as_integer(), Some(-4));
        assert_eq!(Value::from(2.5).as_integer(), None);
        assert_eq!(Value::from("12.5").as_integer(), None);
        assert_eq!(Value::from("abc").as_integer(), None);
        assert_eq!(Value::from(true).as_integer(), None);
        assert_eq!(Value::from(f64::NAN).as_integer(), None);
    }

    #[test]
    fn bool_coercion() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from("false").as_bool(), Some(false));
        assert_eq!(Value::from("yes").as_bool(), None);
        assert_eq!(Value::from(1).as_bool(), None);
    }
}
