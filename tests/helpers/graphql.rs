use serde_json::{json, Value};
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::{TestStorefront, STOREFRONT_TOKEN_HEADER};

/// A successful GraphQL response carrying `data`
pub fn graphql_data(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
}

pub fn graphql_errors(status: u16, errors: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "data": null, "errors": errors }))
}

/// Expects exactly one request for `operation` sent with `variables`,
/// answering it with `template`
pub async fn expect_operation(
    app: &TestStorefront,
    operation: &str,
    variables: Value,
    template: ResponseTemplate,
) {
    Mock::given(method("POST"))
        .and(path(app.graphql_path()))
        .and(header(
            STOREFRONT_TOKEN_HEADER,
            app.settings.storefront.access_token.as_str(),
        ))
        .and(body_partial_json(json!({
            "operationName": operation,
            "variables": variables
        })))
        .respond_with(template)
        .expect(1)
        .mount(&app.server)
        .await;
}

/// Answers every request to the GraphQL endpoint with `template`
pub async fn respond_to_all(app: &TestStorefront, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(app.graphql_path()))
        .respond_with(template)
        .mount(&app.server)
        .await;
}
