use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::{
    graphql::{Document, GraphQLError, ResponseEnvelope},
    transport::Transport,
    TransportError,
};

/// A transport that answers from a queue of canned results and records every
/// request it was asked to send
///
/// Once the queue runs dry it keeps answering with the last result.
pub struct RecordingTransport {
    responses: Mutex<VecDeque<Result<ResponseEnvelope, TransportError>>>,
    requests: Mutex<Vec<(Document, Value)>>,
}

impl RecordingTransport {
    pub fn new(responses: Vec<Result<ResponseEnvelope, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answers with `data` (which must be an object) hydrated into an envelope
    pub fn with_data(data: Value) -> Self {
        let data: Map<String, Value> = match data {
            Value::Object(map) => map,
            _ => panic!("response data must be a JSON object"),
        };
        Self::new(vec![Ok(ResponseEnvelope::hydrated(data, vec![]))])
    }

    pub fn with_errors(errors: Vec<GraphQLError>) -> Self {
        Self::new(vec![Ok(ResponseEnvelope::hydrated(Map::new(), errors))])
    }

    pub fn failing(error: TransportError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn requests(&self) -> Vec<(Document, Value)> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }

    pub fn last_request(&self) -> (Document, Value) {
        self.requests()
            .pop()
            .expect("no request has been sent yet")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(
        &self,
        document: &Document,
        variables: Value,
    ) -> Result<ResponseEnvelope, TransportError> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push((*document, variables));

        let mut responses = self.responses.lock().expect("responses lock poisoned");
        if responses.len() > 1 {
            return responses.pop_front().expect("checked the queue is not empty");
        }
        responses
            .front()
            .cloned()
            .expect("transport was given no responses")
    }
}

/// A customer as the storefront returns it, before hydration
pub fn customer_payload() -> Value {
    json!({
        "id": "gid://shopify/Customer/1",
        "email": "007@test.com",
        "firstName": "James",
        "lastName": "Bond",
        "displayName": "James Bond",
        "phone": null,
        "acceptsMarketing": true,
        "createdAt": "2021-01-10T15:22:01Z",
        "updatedAt": "2021-01-10T15:22:01Z",
        "defaultAddress": null,
        "addresses": {
            "edges": [{ "node": { "id": "gid://shopify/MailingAddress/1", "city": "London" } }]
        }
    })
}
