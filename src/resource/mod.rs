mod customer;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::{
    graphql::{Document, ResponseEnvelope},
    transport::Transport,
    Result,
};

pub use customer::CustomerResource;

/// State shared by every resource: the transport requests go through
pub struct Resource<T> {
    transport: Arc<T>,
}

impl<T: Transport> Resource<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub(crate) async fn send(&self, document: &Document, variables: Value) -> Result<ResponseEnvelope> {
        Ok(self.transport.send(document, variables).await?)
    }
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

/// Turns a resolved value into the model the caller asked for
pub(crate) fn decode<M: DeserializeOwned>(value: Value) -> Result<M> {
    Ok(serde_json::from_value(value)?)
}
