use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde_json::{Number, Value};

use crate::prelude::*;

/// Prediction endpoint response. Only `action` is read, anything else is ignored.
#[derive(Debug, PartialEq)]
pub struct PredictionResponse {
    pub action: Action,
}

impl TryFrom<Value> for PredictionResponse {
    type Error = Error;

    /// Reads `action` off the body the way a property access would:
    /// non-object bodies have no `action`, a `null` body has no properties at all.
    fn try_from(body: Value) -> Result<Self> {
        let action = match body {
            Value::Null => bail!("cannot read `action` of a `null` response body"),
            Value::Object(mut object) => object
                .remove("action")
                .map_or(Action::Undefined, Action::Defined),
            _ => Action::Undefined,
        };
        Ok(Self { action })
    }
}

/// The `action` field, which may be absent.
#[derive(Debug, Default, PartialEq)]
pub enum Action {
    #[default]
    Undefined,

    Defined(Value),
}

impl Display for Action {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Defined(value) => write!(formatter, "{}", JsString(value)),
        }
    }
}

/// Converts a JSON value to text like a template literal would.
struct JsString<'a>(&'a Value);

impl Display for JsString<'_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Value::Null => formatter.write_str("null"),
            Value::Bool(value) => write!(formatter, "{}", value),
            Value::Number(number) => formatter.write_str(&format_number(number)),
            Value::String(value) => formatter.write_str(value),
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .map(|item| match item {
                        Value::Null => String::new(),
                        item => JsString(item).to_string(),
                    })
                    .join(",");
                formatter.write_str(&joined)
            }
            Value::Object(_) => formatter.write_str("[object Object]"),
        }
    }
}

/// 2⁵³ − 1. Larger integers are rounded through a double first.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

fn format_number(number: &Number) -> String {
    if let Some(value) = number
        .as_i64()
        .filter(|value| value.unsigned_abs() <= MAX_SAFE_INTEGER)
    {
        return value.to_string();
    }
    if let Some(value) = number.as_u64().filter(|value| *value <= MAX_SAFE_INTEGER) {
        return value.to_string();
    }
    let value = number.as_f64().unwrap_or(f64::NAN);
    let magnitude = value.abs();
    if value == 0.0 {
        "0".to_string()
    } else if magnitude >= 1e21 || magnitude < 1e-6 {
        // Exponent notation always carries a sign: `1e+21`, `1.5e-7`.
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn render(body: Value) -> Result<String> {
        Ok(PredictionResponse::try_from(body)?.action.to_string())
    }

    #[test]
    fn string_action_ok() -> Result {
        assert_eq!(render(json!({"action": "left"}))?, "left");
        Ok(())
    }

    #[test]
    fn missing_action_is_undefined() -> Result {
        assert_eq!(render(json!({"prediction": 1}))?, "undefined");
        assert_eq!(render(json!([1, 2]))?, "undefined");
        assert_eq!(render(json!("left"))?, "undefined");
        Ok(())
    }

    #[test]
    fn null_action_ok() -> Result {
        assert_eq!(render(json!({"action": null}))?, "null");
        Ok(())
    }

    #[test]
    fn null_body_fails() {
        assert!(PredictionResponse::try_from(Value::Null).is_err());
    }

    #[test]
    fn numeric_action_ok() -> Result {
        assert_eq!(render(json!({"action": 3}))?, "3");
        assert_eq!(render(json!({"action": -1}))?, "-1");
        assert_eq!(render(json!({"action": 2.0}))?, "2");
        assert_eq!(render(json!({"action": 0.25}))?, "0.25");
        assert_eq!(render(json!({"action": 1e21}))?, "1e+21");
        assert_eq!(render(json!({"action": 1.5e-7}))?, "1.5e-7");
        Ok(())
    }

    #[test]
    fn unsafe_integer_action_rounded() -> Result {
        assert_eq!(render(json!({"action": 9007199254740991u64}))?, "9007199254740991");
        assert_eq!(render(json!({"action": 9007199254740993u64}))?, "9007199254740992");
        assert_eq!(render(json!({"action": -9007199254740993i64}))?, "-9007199254740992");
        assert_eq!(render(json!({"action": u64::MAX}))?, "18446744073709552000");
        Ok(())
    }

    #[test]
    fn array_action_ok() -> Result {
        assert_eq!(render(json!({"action": [0.5, 1, null, "x", [2, 3]]}))?, "0.5,1,,x,2,3");
        assert_eq!(render(json!({"action": []}))?, "");
        Ok(())
    }

    #[test]
    fn other_actions_ok() -> Result {
        assert_eq!(render(json!({"action": true}))?, "true");
        assert_eq!(render(json!({"action": {"steer": 1}}))?, "[object Object]");
        Ok(())
    }
}
