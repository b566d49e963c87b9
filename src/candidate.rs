use std::borrow::Cow;

use serde_json::{Number, Value};

/// The raw value handed to [crate::validate], before any normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate<'a> {
    /// No value was provided.
    Missing,
    Integer(i128),
    /// Rendered like a JavaScript number: exponent notation below 1e-6 and from
    /// 1e21 up, `Infinity` for infinite values.
    Float(f64),
    Text(Cow<'a, str>),
    /// Anything that is neither a number nor a string (booleans, arrays, objects).
    Unsupported,
}

impl Candidate<'_> {
    pub fn is_empty(&self) -> bool {
        match self {
            Candidate::Missing => true,
            Candidate::Text(text) => text.is_empty(),
            Candidate::Integer(_) | Candidate::Float(_) | Candidate::Unsupported => false,
        }
    }

    /// Returns the string form of the candidate with all whitespace removed, or `None`
    /// if the candidate has no string form at all.
    pub(crate) fn normalized(&self) -> Option<Cow<'_, str>> {
        match self {
            Candidate::Missing | Candidate::Unsupported => None,
            Candidate::Integer(value) => Some(Cow::Owned(value.to_string())),
            Candidate::Float(value) => Some(Cow::Owned(float_to_string(*value))),
            Candidate::Text(text) => Some(remove_whitespace(text)),
        }
    }
}

fn float_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // negative zero too
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    // `{:e}` is the shortest round-trip form, only the sign of the exponent differs
    let formatted = format!("{value:e}");
    if formatted.contains("e-") {
        formatted
    } else {
        formatted.replacen('e', "e+", 1)
    }
}

/// Unicode `White_Space` without NEL (U+0085), plus the byte order mark.
fn is_stripped_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn remove_whitespace(text: &str) -> Cow<'_, str> {
    if text.chars().any(is_stripped_whitespace) {
        Cow::Owned(text.chars().filter(|c| !is_stripped_whitespace(*c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(value: &'a str) -> Self {
        Candidate::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(value: &'a String) -> Self {
        Candidate::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Candidate<'_> {
    fn from(value: String) -> Self {
        Candidate::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for Candidate<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Candidate::Text(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Candidate<'_> {
                fn from(value: $ty) -> Self {
                    Candidate::Integer(i128::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, i8, i16, i32, i64, i128);

impl From<usize> for Candidate<'_> {
    fn from(value: usize) -> Self {
        // usize is at most 64 bits on every supported target
        Candidate::Integer(value as i128)
    }
}

impl From<f32> for Candidate<'_> {
    fn from(value: f32) -> Self {
        Candidate::Float(f64::from(value))
    }
}

impl From<f64> for Candidate<'_> {
    fn from(value: f64) -> Self {
        Candidate::Float(value)
    }
}

impl<'a, T> From<Option<T>> for Candidate<'a>
where
    T: Into<Candidate<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Candidate::Missing, Into::into)
    }
}

fn number_candidate(number: &Number) -> Candidate<'static> {
    if let Some(integer) = number.as_i64() {
        Candidate::Integer(i128::from(integer))
    } else if let Some(integer) = number.as_u64() {
        Candidate::Integer(i128::from(integer))
    } else if let Some(float) = number.as_f64() {
        Candidate::Float(float)
    } else {
        Candidate::Unsupported
    }
}

impl<'a> From<&'a Value> for Candidate<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => Candidate::Missing,
            Value::String(text) => Candidate::Text(Cow::Borrowed(text.as_str())),
            Value::Number(number) => number_candidate(number),
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => Candidate::Unsupported,
        }
    }
}

impl From<Value> for Candidate<'_> {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Candidate::Text(Cow::Owned(text)),
            Value::Null => Candidate::Missing,
            Value::Number(number) => number_candidate(&number),
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => Candidate::Unsupported,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_empty_text_are_empty() {
        assert!(Candidate::Missing.is_empty());
        assert!(Candidate::from("").is_empty());
        assert!(Candidate::from(None::<&str>).is_empty());
        assert!(!Candidate::from(" ").is_empty());
        assert!(!Candidate::from(0u8).is_empty());
        assert!(!Candidate::Unsupported.is_empty());
    }

    #[test]
    fn normalization_removes_all_whitespace() {
        let candidate = Candidate::from(" 943 476\t5919\n");
        assert_eq!(candidate.normalized().as_deref(), Some("9434765919"));

        let candidate = Candidate::from("943\u{a0}476\u{2003}5919");
        assert_eq!(candidate.normalized().as_deref(), Some("9434765919"));

        let candidate = Candidate::from("\u{feff}9434765919");
        assert_eq!(candidate.normalized().as_deref(), Some("9434765919"));
    }

    #[test]
    fn next_line_is_not_whitespace() {
        let candidate = Candidate::from("9434765919\u{85}");
        assert_eq!(candidate.normalized().as_deref(), Some("9434765919\u{85}"));
    }

    #[test]
    fn normalization_borrows_dense_text() {
        let candidate = Candidate::from("9434765919");
        assert!(matches!(candidate.normalized(), Some(Cow::Borrowed(_))));
    }

    #[test]
    fn numbers_use_their_decimal_form() {
        assert_eq!(
            Candidate::from(9434765919u64).normalized().as_deref(),
            Some("9434765919")
        );
        assert_eq!(
            Candidate::from(-123456789i64).normalized().as_deref(),
            Some("-123456789")
        );
        assert_eq!(
            Candidate::from(9434765919.0f64).normalized().as_deref(),
            Some("9434765919")
        );
        assert_eq!(Candidate::Unsupported.normalized(), None);
        assert_eq!(Candidate::Missing.normalized(), None);
    }

    #[test]
    fn floats_switch_to_exponent_notation_at_the_extremes() {
        let normalized = |value: f64| Candidate::from(value).normalized().map(Cow::into_owned);
        assert_eq!(normalized(1e-9).as_deref(), Some("1e-9"));
        assert_eq!(normalized(-1.5e-7).as_deref(), Some("-1.5e-7"));
        assert_eq!(normalized(0.000001).as_deref(), Some("0.000001"));
        assert_eq!(normalized(1e21).as_deref(), Some("1e+21"));
        assert_eq!(normalized(1.5e300).as_deref(), Some("1.5e+300"));
        assert_eq!(normalized(1e20).as_deref(), Some("100000000000000000000"));
        assert_eq!(normalized(-0.0).as_deref(), Some("0"));
        assert_eq!(normalized(f64::INFINITY).as_deref(), Some("Infinity"));
        assert_eq!(normalized(f64::NEG_INFINITY).as_deref(), Some("-Infinity"));
        assert_eq!(normalized(f64::NAN).as_deref(), Some("NaN"));
    }

    #[test]
    fn json_values_map_to_candidates() {
        assert_eq!(Candidate::from(&json!(null)), Candidate::Missing);
        assert_eq!(
            Candidate::from(&json!("943 476 5919")),
            Candidate::from("943 476 5919")
        );
        assert_eq!(
            Candidate::from(&json!(9434765919u64)),
            Candidate::Integer(9434765919)
        );
        assert_eq!(
            Candidate::from(&json!(u64::MAX)),
            Candidate::Integer(i128::from(u64::MAX))
        );
        assert_eq!(Candidate::from(&json!(1.5)), Candidate::Float(1.5));
        assert_eq!(Candidate::from(&json!(true)), Candidate::Unsupported);
        assert_eq!(Candidate::from(&json!([1, 2])), Candidate::Unsupported);
        assert_eq!(Candidate::from(&json!({"a": 1})), Candidate::Unsupported);
    }

    #[test]
    fn owned_json_values_keep_their_text() {
        assert_eq!(
            Candidate::from(json!("9434765919")),
            Candidate::Text(Cow::Owned("9434765919".to_string()))
        );
        assert_eq!(Candidate::from(json!(null)), Candidate::Missing);
        assert_eq!(Candidate::from(json!(42)), Candidate::Integer(42));
    }
}
