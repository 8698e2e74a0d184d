mod http;

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    graphql::{Document, ResponseEnvelope},
    TransportError,
};

pub use http::{HttpTransport, REQUEST_ID_HEADER, STOREFRONT_ACCESS_TOKEN_HEADER};

/// Sends a GraphQL document to the storefront
///
/// Implementations resolve once the round trip has completed, with the
/// envelope's `model` already hydrated. Anything that stops the round trip
/// itself from completing is a [`TransportError`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        document: &Document,
        variables: Value,
    ) -> Result<ResponseEnvelope, TransportError>;
}
