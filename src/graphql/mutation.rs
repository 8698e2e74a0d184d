use serde_json::Value;
use strum::{AsRefStr, Display, EnumIter, EnumString};
use tracing::warn;

use crate::{
    graphql::{
        documents::{
            CHECKOUT_CUSTOMER_ASSOCIATE_V2_MUTATION, CHECKOUT_CUSTOMER_DISASSOCIATE_V2_MUTATION,
            CUSTOMER_ACCESS_TOKEN_CREATE_MUTATION, CUSTOMER_CREATE_MUTATION,
        },
        Document, ResponseEnvelope,
    },
    CustomerError, Result,
};

/// Payload fields holding domain validation errors, checked in this order
const USER_ERROR_FIELDS: [&str; 2] = ["customerUserErrors", "userErrors"];

/// The mutations this crate knows how to resolve, named by their root field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum MutationRoot {
    #[strum(serialize = "customerCreate")]
    CustomerCreate,
    #[strum(serialize = "customerAccessTokenCreate")]
    CustomerAccessTokenCreate,
    #[strum(serialize = "checkoutCustomerAssociateV2")]
    CheckoutCustomerAssociateV2,
    #[strum(serialize = "checkoutCustomerDisassociateV2")]
    CheckoutCustomerDisassociateV2,
}

impl MutationRoot {
    /// The payload fields that carry the result of a successful mutation
    ///
    /// `customerCreate` also accepts a nested `customerCreate` field, which is
    /// the shape older storefronts answered with.
    pub fn success_fields(self) -> &'static [&'static str] {
        match self {
            Self::CustomerCreate => &["customer", "customerCreate"],
            Self::CustomerAccessTokenCreate => &["customerAccessToken"],
            Self::CheckoutCustomerAssociateV2 | Self::CheckoutCustomerDisassociateV2 => {
                &["checkout"]
            }
        }
    }

    pub fn document(self) -> &'static Document {
        match self {
            Self::CustomerCreate => &CUSTOMER_CREATE_MUTATION,
            Self::CustomerAccessTokenCreate => &CUSTOMER_ACCESS_TOKEN_CREATE_MUTATION,
            Self::CheckoutCustomerAssociateV2 => &CHECKOUT_CUSTOMER_ASSOCIATE_V2_MUTATION,
            Self::CheckoutCustomerDisassociateV2 => &CHECKOUT_CUSTOMER_DISASSOCIATE_V2_MUTATION,
        }
    }
}

/// Decides whether a mutation succeeded and pulls out its result
///
/// The first rule that matches wins:
/// 1. a non-null success field in the payload resolves to its hydrated model
/// 2. top level `errors` fail as [`CustomerError::Protocol`]
/// 3. `customerUserErrors`, then `userErrors`, fail as [`CustomerError::UserErrors`]
/// 4. anything else fails as [`CustomerError::Unknown`]
pub fn resolve_mutation(root: MutationRoot, envelope: &ResponseEnvelope) -> Result<Value> {
    let root_data = envelope.data.get(root.as_ref());
    let root_model = envelope.model.get(root.as_ref());

    if let Some(root_data) = root_data {
        for field in root.success_fields() {
            if let Some(raw) = root_data.get(*field).filter(|value| !value.is_null()) {
                let hydrated = root_model.and_then(|model| model.get(*field)).unwrap_or(raw);
                return Ok(hydrated.clone());
            }
        }
    }

    if !envelope.errors.is_empty() {
        return Err(envelope.protocol_error());
    }

    for field in &USER_ERROR_FIELDS {
        let user_errors = root_data
            .and_then(|data| data.get(*field))
            .and_then(Value::as_array)
            .filter(|errors| !errors.is_empty());
        if let Some(user_errors) = user_errors {
            warn!(mutation = %root, count = user_errors.len(), "mutation returned user errors");
            return Err(CustomerError::UserErrors(serde_json::to_string(user_errors)?));
        }
    }

    Err(CustomerError::Unknown(root))
}
