use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier that upstream serves either as a JSON number or a string.
///
/// Both forms name the same entity, so equality goes through string
/// coercion (`7` equals `"7"`). Serialization keeps the form the value
/// arrived in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlexId {
    Num(i64),
    Text(String),
}

impl FlexId {
    pub fn as_string(&self) -> String {
        match self {
            FlexId::Num(n) => n.to_string(),
            FlexId::Text(t) => t.clone(),
        }
    }

    /// Numeric view of the id, `None` for non-numeric strings.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FlexId::Num(n) => Some(*n),
            FlexId::Text(t) => t.trim().parse().ok(),
        }
    }
}

impl PartialEq for FlexId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FlexId::Num(a), FlexId::Num(b)) => a == b,
            (FlexId::Text(a), FlexId::Text(b)) => a == b,
            _ => self.as_string() == other.as_string(),
        }
    }
}

impl Eq for FlexId {}

impl fmt::Display for FlexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlexId::Num(n) => write!(f, "{}", n),
            FlexId::Text(t) => f.write_str(t),
        }
    }
}

impl From<i64> for FlexId {
    fn from(value: i64) -> Self {
        FlexId::Num(value)
    }
}

impl From<&str> for FlexId {
    fn from(value: &str) -> Self {
        FlexId::Text(value.to_string())
    }
}

impl From<String> for FlexId {
    fn from(value: String) -> Self {
        FlexId::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_number_and_string() {
        let num: FlexId = serde_json::from_value(json!(7)).unwrap();
        let text: FlexId = serde_json::from_value(json!("7")).unwrap();
        assert_eq!(num, FlexId::Num(7));
        assert_eq!(text, FlexId::Text("7".to_string()));
    }

    #[test]
    fn test_coerced_equality() {
        assert_eq!(FlexId::Num(7), FlexId::Text("7".to_string()));
        assert_ne!(FlexId::Num(7), FlexId::Text("8".to_string()));
    }

    #[test]
    fn test_serializes_in_original_form() {
        assert_eq!(serde_json::to_value(FlexId::Num(7)).unwrap(), json!(7));
        assert_eq!(
            serde_json::to_value(FlexId::Text("7".into())).unwrap(),
            json!("7")
        );
    }

    #[test]
    fn test_numeric_view() {
        assert_eq!(FlexId::Text(" 42 ".into()).as_i64(), Some(42));
        assert_eq!(FlexId::Text("abc".into()).as_i64(), None);
        assert_eq!(FlexId::Num(5).as_i64(), Some(5));
    }
}
