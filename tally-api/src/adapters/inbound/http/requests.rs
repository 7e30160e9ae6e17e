//! HTTP request bodies.
//!
//! Numeric fields are accepted as JSON numbers or strings and handed to the
//! domain as text, where the lenient goal and strict quantity rules apply.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::models::{ActivityInput, ProductionInput};

#[derive(Debug, Default, Deserialize)]
pub struct ActivityPayload {
    #[serde(default, deserialize_with = "form_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub goal_points: Option<String>,
}

impl From<ActivityPayload> for ActivityInput {
    fn from(payload: ActivityPayload) -> Self {
        Self {
            name: payload.name.unwrap_or_default(),
            date: payload.date,
            description: payload.description,
            goal_points: payload.goal_points,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductionPayload {
    #[serde(default, deserialize_with = "form_text")]
    pub activity_id: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub quantity: Option<String>,
    #[serde(default, deserialize_with = "form_text")]
    pub description: Option<String>,
}

impl From<ProductionPayload> for ProductionInput {
    fn from(payload: ProductionPayload) -> Self {
        Self {
            activity_id: payload.activity_id,
            quantity: payload.quantity,
            description: payload.description,
        }
    }
}

/// Read any JSON scalar as the text a form field would have carried.
fn form_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// Goal value from the goal-points endpoint body.
///
/// Integers and integer strings are taken as-is, finite floats are
/// truncated toward zero and booleans count as 0 or 1. Returns `None` for
/// anything else, including strings holding a fraction.
pub fn goal_points_from_json(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.is_finite())
                .map(f64::trunc)
                .filter(|float| *float >= i64::MIN as f64 && *float < i64::MAX as f64)
                .map(|float| float as i64)
        }),
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
