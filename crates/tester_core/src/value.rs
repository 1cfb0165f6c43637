//! Literal values carried from an example into generated test text.
//!
//! A [`Value`] is never evaluated. Integers and floats are printed in decimal form, and bare-word literals
//! (symbols such as `Negro` or `True`) are printed exactly as given, without quoting.

use std::fmt;

/// A literal argument or return value.
///
/// ## Notes
/// - `Raw` holds verbatim text. Quoting, if the target language needs it, is the spec author's job.
/// - With the `serde` feature, values deserialize by shape: `2` is an `Integer`, `3.14` a `Float`, and any
///   string a `Raw` literal. Booleans and integers outside `i64` become `Raw` text, and null is rejected.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Integer(i64),
    Float(f64),
    Raw(String),
}

impl Value {
    /// Build a bare-word literal.
    pub fn raw(text: impl Into<String>) -> Self {
        Value::Raw(text.into())
    }

    /// Render the value as literal output text.
    ///
    /// ## Examples
    /// ```rust
    /// use tester_core::Value;
    ///
    /// assert_eq!(Value::Integer(-7).render(), "-7");
    /// assert_eq!(Value::Float(2.0).render(), "2.0");
    /// assert_eq!(Value::raw("Negro").render(), "Negro");
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{}", float_literal(*x)),
            Value::Raw(text) => f.write_str(text),
        }
    }
}

/// Decimal text for a float, always with a fractional part when finite (`2.0`, never `2`).
fn float_literal(x: f64) -> String {
    let text = x.to_string();
    if x.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

#[cfg(feature = "serde")]
mod de {
    use std::fmt;

    use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};

    use super::Value;

    struct ValueVisitor;

    impl<'de> Visitor<'de> for ValueVisitor {
        type Value = Value;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number, boolean or bare-word literal")
        }

        fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
            Ok(Value::Raw(b.to_string()))
        }

        fn visit_i64<E: de::Error>(self, n: i64) -> Result<Value, E> {
            Ok(Value::Integer(n))
        }

        fn visit_u64<E: de::Error>(self, n: u64) -> Result<Value, E> {
            Ok(i64::try_from(n).map_or_else(|_| Value::Raw(n.to_string()), Value::Integer))
        }

        fn visit_i128<E: de::Error>(self, n: i128) -> Result<Value, E> {
            Ok(i64::try_from(n).map_or_else(|_| Value::Raw(n.to_string()), Value::Integer))
        }

        fn visit_u128<E: de::Error>(self, n: u128) -> Result<Value, E> {
            Ok(i64::try_from(n).map_or_else(|_| Value::Raw(n.to_string()), Value::Integer))
        }

        fn visit_f64<E: de::Error>(self, x: f64) -> Result<Value, E> {
            Ok(Value::Float(x))
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
            Ok(Value::Raw(s.to_string()))
        }

        fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
            Ok(Value::Raw(s))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
            Err(E::invalid_type(Unexpected::Unit, &self))
        }

        fn visit_none<E: de::Error>(self) -> Result<Value, E> {
            Err(E::invalid_type(Unexpected::Option, &self))
        }
    }

    impl<'de> Deserialize<'de> for Value {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ValueVisitor)
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Raw(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Raw(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Integer rendering
    // ========================================

    #[test]
    fn test_render_integer() {
        assert_eq!(Value::Integer(2).render(), "2");
        assert_eq!(Value::Integer(0).render(), "0");
        assert_eq!(Value::Integer(-15).render(), "-15");
    }

    // ========================================
    // Float rendering
    // ========================================

    #[test]
    fn test_render_float_keeps_fraction() {
        assert_eq!(Value::Float(3.14).render(), "3.14");
        assert_eq!(Value::Float(0.5).render(), "0.5");
    }

    #[test]
    fn test_render_integral_float_has_decimal_point() {
        assert_eq!(Value::Float(2.0).render(), "2.0");
        assert_eq!(Value::Float(-10.0).render(), "-10.0");
    }

    #[test]
    fn test_render_non_finite_float() {
        assert_eq!(Value::Float(f64::INFINITY).render(), "inf");
        assert_eq!(Value::Float(f64::NAN).render(), "NaN");
    }

    // ========================================
    // Raw literals
    // ========================================

    #[test]
    fn test_render_raw_is_verbatim() {
        assert_eq!(Value::raw("Negro").render(), "Negro");
        assert_eq!(Value::raw("\"hola\"").render(), "\"hola\"");
        assert_eq!(Value::raw("[1, 2]").render(), "[1, 2]");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(3), Value::Integer(3));
        assert_eq!(Value::from(3_i64), Value::Integer(3));
        assert_eq!(Value::from(1.5), Value::Float(1.5));
        assert_eq!(Value::from("Rojo"), Value::raw("Rojo"));
        assert_eq!(Value::from(String::from("Azul")), Value::raw("Azul"));
    }
}
