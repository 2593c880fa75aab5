use std::fmt::Display;

use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Outcome of a single subscription call.
///
/// Exactly one side is ever populated: the decoded response body when the
/// round-trip succeeded, or a description of whatever went wrong.
/// Serializes as `{"result": ..., "err": ...}` with the unused side set to `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope {
    Subscribed(Value),
    Failed(String),
}

impl ResponseEnvelope {
    pub fn result(&self) -> Option<&Value> {
        match self {
            ResponseEnvelope::Subscribed(body) => Some(body),
            ResponseEnvelope::Failed(_) => None,
        }
    }

    pub fn err(&self) -> Option<&str> {
        match self {
            ResponseEnvelope::Subscribed(_) => None,
            ResponseEnvelope::Failed(message) => Some(message),
        }
    }

    pub fn is_subscribed(&self) -> bool {
        matches!(self, ResponseEnvelope::Subscribed(_))
    }

    /// Typed view of the success body. `None` when the call failed.
    pub fn api_result(&self) -> Option<Result<ApiResult, serde_json::Error>> {
        self.result().map(ApiResult::deserialize)
    }
}

impl<E: Display> From<Result<Value, E>> for ResponseEnvelope {
    fn from(value: Result<Value, E>) -> Self {
        match value {
            Ok(body) => ResponseEnvelope::Subscribed(body),
            Err(e) => ResponseEnvelope::Failed(e.to_string()),
        }
    }
}

impl Serialize for ResponseEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut envelope = serializer.serialize_struct("ResponseEnvelope", 2)?;
        envelope.serialize_field("result", &self.result())?;
        envelope.serialize_field("err", &self.err())?;
        envelope.end()
    }
}

/// Body returned by the subscription endpoint. Missing fields fall back to defaults.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ApiResult {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<ApiData>,
    pub errors: Option<Value>,
    pub error_code: Option<String>,
    pub cache_hit: bool,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ApiData {
    pub uuid: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub attributes: Map<String, Value>,
    pub meta: Map<String, Value>,
    pub relationships: Option<Value>,
}
