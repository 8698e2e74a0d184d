use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, ClientBuilder,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};
use tracing_futures::Instrument;
use uuid::Uuid;

use crate::{
    configuration::{ClientSettings, StorefrontSettings},
    graphql::{Document, GraphQLResponse, ResponseEnvelope},
    transport::Transport,
    TransportError,
};

pub const STOREFRONT_ACCESS_TOKEN_HEADER: &str = "x-shopify-storefront-access-token";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: Value,
    operation_name: &'a str,
}

/// Sends documents to the storefront's GraphQL endpoint over HTTP
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    graphql_url: String,
}

impl HttpTransport {
    pub fn new(
        storefront: &StorefrontSettings,
        settings: &ClientSettings,
    ) -> Result<Self, TransportError> {
        let mut access_token = HeaderValue::from_str(&storefront.access_token).map_err(|e| {
            error!(err = ?e, "storefront access token is not a valid header value");
            TransportError::Client(e.to_string())
        })?;
        access_token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(STOREFRONT_ACCESS_TOKEN_HEADER),
            access_token,
        );

        let user_agent = settings
            .user_agent
            .clone()
            .unwrap_or_else(|| APP_USER_AGENT.to_owned());

        let client = ClientBuilder::new()
            .default_headers(headers)
            .user_agent(user_agent)
            .timeout(settings.timeout())
            .build()?;

        Ok(Self {
            client,
            graphql_url: storefront.graphql_url(),
        })
    }

    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }

    async fn execute(
        &self,
        document: &Document,
        variables: Value,
        request_id: Uuid,
    ) -> Result<ResponseEnvelope, TransportError> {
        let body = GraphQLRequest {
            query: document.source,
            variables,
            operation_name: document.operation_name,
        };

        let response = self
            .client
            .post(&self.graphql_url)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        match serde_json::from_str::<GraphQLResponse>(&text) {
            Ok(parsed) if status.is_success() || parsed.is_graphql() => {
                debug!(
                    status = status.as_u16(),
                    errors = parsed.errors.as_ref().map_or(0, Vec::len),
                    "received storefront response"
                );
                Ok(parsed.into())
            }
            Err(e) if status.is_success() => {
                error!(err = ?e, "storefront response was not a GraphQL result");
                Err(TransportError::MalformedResponse(e.to_string()))
            }
            Ok(_) | Err(_) => {
                error!(status = status.as_u16(), "storefront request failed");
                Err(TransportError::Status {
                    status: status.as_u16(),
                    body: text,
                })
            }
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        document: &Document,
        variables: Value,
    ) -> Result<ResponseEnvelope, TransportError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "storefront_request",
            operation = document.operation_name,
            %request_id
        );
        self.execute(document, variables, request_id)
            .instrument(span)
            .await
    }
}
