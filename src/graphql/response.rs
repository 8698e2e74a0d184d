use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::convert::TryFrom;

use crate::{graphql::hydrate, CustomerError};

/// A protocol level error, as reported in the top level `errors` of a response
///
/// Every field the storefront sent is kept in the order it arrived, so the
/// serialized form of a list of these matches what was received byte for
/// byte. Only `message` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct GraphQLError {
    fields: Map<String, Value>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("message".to_string(), Value::String(message.into()));
        Self { fields }
    }

    pub fn message(&self) -> &str {
        self.fields
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn locations(&self) -> Option<&Value> {
        self.get("locations")
    }

    pub fn path(&self) -> Option<&Value> {
        self.get("path")
    }

    pub fn extensions(&self) -> Option<&Value> {
        self.get("extensions")
    }

    /// Any other non-null field, such as vendor specific keys
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|value| !value.is_null())
    }
}

impl TryFrom<Map<String, Value>> for GraphQLError {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        match fields.get("message") {
            Some(Value::String(_)) => Ok(Self { fields }),
            _ => Err("a GraphQL error must carry a string message".to_string()),
        }
    }
}

impl From<GraphQLError> for Map<String, Value> {
    fn from(error: GraphQLError) -> Self {
        error.fields
    }
}

/// The body of a GraphQL over HTTP response
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>,
}

impl GraphQLResponse {
    /// Whether the body actually looks like a GraphQL result, rather than
    /// some other JSON document served alongside an error status
    pub fn is_graphql(&self) -> bool {
        self.data.is_some() || self.errors.as_ref().map_or(false, |e| !e.is_empty())
    }
}

/// What a transport hands back once a request has completed
///
/// `model` is keyed the same way as `data`, holding the hydrated form of each
/// root payload. It is empty when nothing was hydrated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseEnvelope {
    pub data: Map<String, Value>,
    pub errors: Vec<GraphQLError>,
    pub model: Map<String, Value>,
}

impl ResponseEnvelope {
    /// Builds an envelope whose `model` is hydrated from `data`
    pub fn hydrated(data: Map<String, Value>, errors: Vec<GraphQLError>) -> Self {
        let model = data
            .iter()
            .map(|(key, value)| (key.clone(), hydrate(value.clone())))
            .collect();
        Self {
            data,
            errors,
            model,
        }
    }

    /// The top level `errors` as a protocol failure
    pub(crate) fn protocol_error(&self) -> CustomerError {
        match serde_json::to_string(&self.errors) {
            Ok(message) => CustomerError::Protocol(message),
            Err(e) => e.into(),
        }
    }
}

impl From<GraphQLResponse> for ResponseEnvelope {
    fn from(response: GraphQLResponse) -> Self {
        Self::hydrated(
            response.data.unwrap_or_default(),
            response.errors.unwrap_or_default(),
        )
    }
}
