use std::sync::Arc;

use crate::{
    configuration::Settings,
    resource::CustomerResource,
    transport::{HttpTransport, Transport},
    TransportError,
};

/// Entry point to the storefront
///
/// Cloning is cheap: every clone, and every resource handed out, shares the
/// same transport.
pub struct Client<T = HttpTransport> {
    transport: Arc<T>,
}

impl Client<HttpTransport> {
    #[tracing::instrument(skip(settings), fields(url = %settings.storefront.graphql_url()))]
    pub fn from_settings(settings: &Settings) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&settings.storefront, &settings.client)?;
        Ok(Self::new(transport))
    }
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    pub fn from_shared(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub fn customer(&self) -> CustomerResource<T> {
        CustomerResource::new(Arc::clone(&self.transport))
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}
