use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Query-parameter key carrying the language code.
pub const LANG_PARAM: &str = "lang";

/// The part of the platform's proxy event the greeter reads.
///
/// Deserialization never rejects a well-formed JSON document.
/// `queryStringParameters` that is absent, `null` or not an object becomes
/// `None`; an object becomes `Some` holding only its string-valued entries.
/// All other event fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InboundEvent {
    #[serde(rename = "queryStringParameters")]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl<'de> Deserialize<'de> for InboundEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_json)
    }
}

impl InboundEvent {
    /// Builds an event from an arbitrary JSON document.
    pub fn from_json(value: Value) -> Self {
        let query_string_parameters = match value {
            Value::Object(mut fields) => fields
                .remove("queryStringParameters")
                .and_then(string_params),
            _ => None,
        };
        Self {
            query_string_parameters,
        }
    }

    pub fn with_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            query_string_parameters: Some(
                params
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

fn string_params(value: Value) -> Option<HashMap<String, String>> {
    match value {
        Value::Object(params) => Some(
            params
                .into_iter()
                .filter_map(|(key, value)| match value {
                    Value::String(s) => Some((key, s)),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    }
}

/// HTTP-shaped result handed back to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    /// JSON document, already encoded.
    pub body: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct MessageBody<'a> {
    pub message: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody<'a> {
    pub error: &'a str,
    pub message: &'a str,
}
