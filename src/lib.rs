//! A client for the customer account operations of a storefront GraphQL API

pub mod client;
pub mod configuration;
mod error;
pub mod graphql;
pub mod models;
pub mod resource;
pub mod telemetry;
pub mod transport;

#[cfg(test)]
mod test_helpers;

pub use client::Client;
pub use configuration::{get_configuration, Settings};
pub use error::{CustomerError, TelemetryError, TransportError};
pub use graphql::{extract_field, hydrate, resolve_mutation, MutationRoot, ResponseEnvelope};
pub use resource::CustomerResource;

pub type Result<T, E = CustomerError> = std::result::Result<T, E>;
