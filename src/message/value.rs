//! Values accepted by a logging call.

use serde::Serialize;

/// A single value passed to a logging call.
///
/// Arbitrary caller values are classified once, at conversion time, so the
/// formatter only ever matches over this closed set.
///
/// # Example
///
/// ```rust
/// use tintlog::MessageValue;
///
/// assert_eq!(MessageValue::from(5), MessageValue::Number(5i64.into()));
/// assert_eq!(MessageValue::from("ok"), MessageValue::Other("ok".into()));
/// assert_eq!(MessageValue::from(None::<i32>), MessageValue::Absent);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MessageValue {
    /// An explicit null, printed as `null`.
    Null,
    /// The absence of a value, printed as `undefined`.
    Absent,
    /// A number, highlighted as a whole.
    Number(Number),
    /// A record or collection, pretty-printed with its digit runs highlighted.
    Structured(serde_json::Value),
    /// Anything else, printed through its string form.
    Other(String),
}

impl MessageValue {
    /// Converts any serializable value.
    ///
    /// The value goes through [`serde_json::Value`], so structs and maps become
    /// [`MessageValue::Structured`] while scalars keep their natural variant.
    /// A value that fails to serialize becomes [`MessageValue::Other`] holding
    /// the serializer's error text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde::Serialize;
    /// use tintlog::MessageValue;
    ///
    /// #[derive(Serialize)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let value = MessageValue::structured(&Point { x: 1, y: 2 });
    /// assert!(matches!(value, MessageValue::Structured(_)));
    /// ```
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => json.into(),
            Err(err) => {
                log::debug!("value failed to serialize, printing error text: {}", err);
                MessageValue::Other(err.to_string())
            }
        }
    }

    /// Converts a value through its `Display` implementation.
    pub fn display<T: std::fmt::Display + ?Sized>(value: &T) -> Self {
        MessageValue::Other(value.to_string())
    }
}

/// A numeric message value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::UInt(n) => write!(f, "{}", n),
            Number::Float(n) => f.write_str(&format_float(*n)),
        }
    }
}

/// Formats a float the way a browser console prints numbers.
pub(crate) fn format_float(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if !(1e-6..1e21).contains(&abs) {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }
    // Shortest round-trip digits, zero-padded for large whole numbers.
    format!("{}", n)
}

macro_rules! impl_number_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }

            impl From<$source> for MessageValue {
                fn from(n: $source) -> Self {
                    MessageValue::Number(n.into())
                }
            }
        )*
    };
}

impl_number_from!(Int as i64: i8, i16, i32, i64, isize);
impl_number_from!(UInt as u64: u8, u16, u32, u64, usize);
impl_number_from!(Float as f64: f64);

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        // Go through the shortest decimal form so 0.1f32 stays 0.1.
        Number::Float(n.to_string().parse().unwrap_or(n as f64))
    }
}

impl From<f32> for MessageValue {
    fn from(n: f32) -> Self {
        MessageValue::Number(n.into())
    }
}

impl From<serde_json::Number> for Number {
    fn from(n: serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Number::Int(i)
        } else if let Some(u) = n.as_u64() {
            Number::UInt(u)
        } else {
            Number::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<serde_json::Value> for MessageValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => MessageValue::Null,
            Value::Bool(b) => MessageValue::Other(b.to_string()),
            Value::Number(n) => MessageValue::Number(n.into()),
            Value::String(s) => MessageValue::Other(s),
            structured @ (Value::Array(_) | Value::Object(_)) => {
                MessageValue::Structured(structured)
            }
        }
    }
}

impl From<&serde_json::Value> for MessageValue {
    fn from(value: &serde_json::Value) -> Self {
        value.clone().into()
    }
}

impl From<&str> for MessageValue {
    fn from(s: &str) -> Self {
        MessageValue::Other(s.to_string())
    }
}

impl From<String> for MessageValue {
    fn from(s: String) -> Self {
        MessageValue::Other(s)
    }
}

impl From<&String> for MessageValue {
    fn from(s: &String) -> Self {
        MessageValue::Other(s.clone())
    }
}

impl From<char> for MessageValue {
    fn from(c: char) -> Self {
        MessageValue::Other(c.to_string())
    }
}

impl From<bool> for MessageValue {
    fn from(b: bool) -> Self {
        MessageValue::Other(b.to_string())
    }
}

impl<T: Into<MessageValue>> From<Option<T>> for MessageValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(MessageValue::Absent, Into::into)
    }
}
