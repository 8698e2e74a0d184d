use serde_json::json;
use std::sync::Arc;

use crate::{
    graphql::{documents::CUSTOMER_QUERY, extract_field, resolve_mutation, MutationRoot},
    models::{Checkout, CheckoutId, Customer, CustomerAccessToken},
    resource::{decode, Resource},
    transport::Transport,
    Result,
};

/// Customer account operations against the storefront
///
/// # Example
///
/// ```ignore
/// let token = client.customer().login(email, password).await?;
/// let customer = client.customer().fetch(&token.access_token).await?;
/// ```
pub struct CustomerResource<T> {
    resource: Resource<T>,
}

impl<T: Transport> CustomerResource<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            resource: Resource::new(transport),
        }
    }

    /// Fetches the customer the access token belongs to, if there is one
    #[tracing::instrument(name = "fetch_customer", skip(self, access_token), fields(resource = "customer"))]
    pub async fn fetch(&self, access_token: &str) -> Result<Option<Customer>> {
        let envelope = self
            .resource
            .send(&CUSTOMER_QUERY, json!({ "customerAccessToken": access_token }))
            .await?;
        decode(extract_field("customer", &envelope)?)
    }

    /// Creates a new customer account
    #[tracing::instrument(name = "register_customer", skip(self, email, password), fields(resource = "customer"))]
    pub async fn register(&self, email: &str, password: &str) -> Result<Customer> {
        let variables = json!({ "input": { "email": email, "password": password } });
        self.mutate(MutationRoot::CustomerCreate, variables).await
    }

    /// Exchanges an email and password for a customer access token
    #[tracing::instrument(name = "login_customer", skip(self, email, password), fields(resource = "customer"))]
    pub async fn login(&self, email: &str, password: &str) -> Result<CustomerAccessToken> {
        let variables = json!({ "input": { "email": email, "password": password } });
        self.mutate(MutationRoot::CustomerAccessTokenCreate, variables)
            .await
    }

    #[tracing::instrument(
        name = "associate_checkout",
        skip(self, access_token, checkout_id),
        fields(resource = "customer", checkout_id = %checkout_id)
    )]
    pub async fn associate_checkout(
        &self,
        access_token: &str,
        checkout_id: &CheckoutId,
    ) -> Result<Checkout> {
        let variables = json!({ "customerAccessToken": access_token, "checkoutId": checkout_id });
        self.mutate(MutationRoot::CheckoutCustomerAssociateV2, variables)
            .await
    }

    #[tracing::instrument(
        name = "disassociate_checkout",
        skip(self, checkout_id),
        fields(resource = "customer", checkout_id = %checkout_id)
    )]
    pub async fn disassociate_checkout(&self, checkout_id: &CheckoutId) -> Result<Checkout> {
        let variables = json!({ "checkoutId": checkout_id });
        self.mutate(MutationRoot::CheckoutCustomerDisassociateV2, variables)
            .await
    }
}

/// Private API
impl<T: Transport> CustomerResource<T> {
    async fn mutate<M: serde::de::DeserializeOwned>(
        &self,
        root: MutationRoot,
        variables: serde_json::Value,
    ) -> Result<M> {
        let envelope = self.resource.send(root.document(), variables).await?;
        decode(resolve_mutation(root, &envelope)?)
    }
}

impl<T> Clone for CustomerResource<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
        }
    }
}
