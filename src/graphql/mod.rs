pub mod documents;
mod hydrate;
mod mutation;
mod query;
mod response;

pub use documents::Document;
pub use hydrate::hydrate;
pub use mutation::{resolve_mutation, MutationRoot};
pub use query::extract_field;
pub use response::{GraphQLError, GraphQLResponse, ResponseEnvelope};
