use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// A cell value as emitted by the server before cleaning.
///
/// The sales dataset is deliberately dirty: numeric columns may arrive as
/// numbers, as strings, as `null`, or as something that is not a scalar at
/// all. Each shape is kept apart so the grid can render it explicitly.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
    /// Non-scalar JSON (array or object), kept as compact JSON text
    Malformed(String),
}

impl RawValue {
    /// Returns the numeric value, reading numeric text as well.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns CSS class name for the grid cell
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Number(_) => "cell-number",
            Self::Text(_) => "cell-text",
            Self::Missing => "cell-missing",
            Self::Malformed(_) => "cell-malformed",
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Number(n) => n
                .as_f64()
                .map_or_else(|| Self::Malformed(n.to_string()), Self::Number),
            Value::String(s) => Self::Text(s),
            Value::Bool(b) => Self::Text(b.to_string()),
            other @ (Value::Array(_) | Value::Object(_)) => Self::Malformed(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // -0 prints as "0", like the browser does
            Self::Number(n) if *n == 0.0 => f.write_str("0"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) | Self::Malformed(s) => f.write_str(s),
            Self::Missing => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Cell {
        #[serde(default)]
        value: RawValue,
    }

    fn parse(json: &str) -> RawValue {
        serde_json::from_str::<Cell>(json).unwrap().value
    }

    #[test]
    fn test_variants_from_json() {
        assert_eq!(parse(r#"{"value": 3}"#), RawValue::Number(3.0));
        assert_eq!(parse(r#"{"value": "3,5"}"#), RawValue::Text("3,5".to_string()));
        assert_eq!(parse(r#"{"value": null}"#), RawValue::Missing);
        assert_eq!(parse(r#"{}"#), RawValue::Missing);
        assert_eq!(parse(r#"{"value": true}"#), RawValue::Text("true".to_string()));
        assert_eq!(
            parse(r#"{"value": [1, 2]}"#),
            RawValue::Malformed("[1,2]".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(RawValue::Number(0.0).to_string(), "0");
        assert_eq!(RawValue::Number(-0.0).to_string(), "0");
        assert_eq!(RawValue::Number(3.0).to_string(), "3");
        assert_eq!(RawValue::Number(2.5).to_string(), "2.5");
        assert_eq!(RawValue::Missing.to_string(), "");
        assert_eq!(RawValue::Text("n/a".to_string()).to_string(), "n/a");
    }

    #[test]
    fn test_as_number() {
        assert_eq!(RawValue::Number(4.0).as_number(), Some(4.0));
        assert_eq!(RawValue::Text(" 12.5 ".to_string()).as_number(), Some(12.5));
        assert_eq!(RawValue::Text("abc".to_string()).as_number(), None);
        assert_eq!(RawValue::Missing.as_number(), None);
    }
}
