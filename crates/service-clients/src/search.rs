//! Clients for the search and location services.

use std::sync::Arc;

use async_trait::async_trait;

use dashboard_core::context::ClientContextProvider;
use dashboard_core::security::SecurityLogger;
use dashboard_core::{Result, SimpleServiceResponse};

use crate::client::{ServiceClient, ServiceEndpoint};
use crate::contracts::{Location, SearchResult};

#[async_trait]
pub trait SearchClientTrait: Send + Sync {
    async fn search(&self, term: &str) -> Result<SimpleServiceResponse<Vec<SearchResult>>>;
}

pub struct SearchClient {
    inner: ServiceClient,
}

impl SearchClient {
    pub fn new(
        endpoint: ServiceEndpoint,
        context_provider: Arc<dyn ClientContextProvider>,
        security_logger: SecurityLogger,
    ) -> Result<Self> {
        Ok(Self {
            inner: ServiceClient::new("Search", endpoint, context_provider, Some(security_logger))?,
        })
    }

    pub fn service(&self) -> &ServiceClient {
        &self.inner
    }
}

#[async_trait]
impl SearchClientTrait for SearchClient {
    async fn search(&self, term: &str) -> Result<SimpleServiceResponse<Vec<SearchResult>>> {
        self.inner
            .get_with_query("Search", "/api/search", &[("term", term)])
            .await
    }
}

#[async_trait]
pub trait LocationClientTrait: Send + Sync {
    async fn get_locations(&self) -> Result<SimpleServiceResponse<Vec<Location>>>;
}

pub struct LocationClient {
    inner: ServiceClient,
}

impl LocationClient {
    pub fn new(
        endpoint: ServiceEndpoint,
        context_provider: Arc<dyn ClientContextProvider>,
        security_logger: SecurityLogger,
    ) -> Result<Self> {
        Ok(Self {
            inner: ServiceClient::new(
                "Location",
                endpoint,
                context_provider,
                Some(security_logger),
            )?,
        })
    }

    pub fn service(&self) -> &ServiceClient {
        &self.inner
    }
}

#[async_trait]
impl LocationClientTrait for LocationClient {
    async fn get_locations(&self) -> Result<SimpleServiceResponse<Vec<Location>>> {
        self.inner.get("GetLocations", "/api/locations").await
    }
}
