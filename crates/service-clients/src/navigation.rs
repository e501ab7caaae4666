//! Clients for page navigation: redirections, breadcrumbs and custom pages.

use std::sync::Arc;

use async_trait::async_trait;

use dashboard_core::context::ClientContextProvider;
use dashboard_core::security::SecurityLogger;
use dashboard_core::{Result, SimpleServiceResponse};

use crate::client::{ServiceClient, ServiceEndpoint};
use crate::contracts::{Breadcrumb, CustomPage, RedirectionResult};

#[async_trait]
pub trait RedirectionClientTrait: Send + Sync {
    /// Resolves where the calling user should land for `target`.
    async fn get_redirect_url(&self, target: &str)
        -> Result<SimpleServiceResponse<RedirectionResult>>;
}

pub struct RedirectionClient {
    inner: ServiceClient,
}

impl RedirectionClient {
    pub fn new(
        endpoint: ServiceEndpoint,
        context_provider: Arc<dyn ClientContextProvider>,
        security_logger: SecurityLogger,
    ) -> Result<Self> {
        Ok(Self {
            inner: ServiceClient::new(
                "Redirection",
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
impl RedirectionClientTrait for RedirectionClient {
    async fn get_redirect_url(
        &self,
        target: &str,
    ) -> Result<SimpleServiceResponse<RedirectionResult>> {
        self.inner
            .get_with_query("GetRedirectUrl", "/api/redirection", &[("target", target)])
            .await
    }
}

#[async_trait]
pub trait BreadcrumbsClientTrait: Send + Sync {
    async fn get_breadcrumbs(&self, page: &str) -> Result<SimpleServiceResponse<Vec<Breadcrumb>>>;
}

pub struct BreadcrumbsClient {
    inner: ServiceClient,
}

impl BreadcrumbsClient {
    pub fn new(
        endpoint: ServiceEndpoint,
        context_provider: Arc<dyn ClientContextProvider>,
        security_logger: SecurityLogger,
    ) -> Result<Self> {
        Ok(Self {
            inner: ServiceClient::new(
                "Breadcrumbs",
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
impl BreadcrumbsClientTrait for BreadcrumbsClient {
    async fn get_breadcrumbs(&self, page: &str) -> Result<SimpleServiceResponse<Vec<Breadcrumb>>> {
        self.inner
            .get_with_query("GetBreadcrumbs", "/api/breadcrumbs", &[("page", page)])
            .await
    }
}

#[async_trait]
pub trait CustomPagesServiceClientTrait: Send + Sync {
    async fn get_custom_pages(&self) -> Result<SimpleServiceResponse<Vec<CustomPage>>>;
}

pub struct CustomPagesServiceClient {
    inner: ServiceClient,
}

impl CustomPagesServiceClient {
    pub fn new(
        endpoint: ServiceEndpoint,
        context_provider: Arc<dyn ClientContextProvider>,
        security_logger: SecurityLogger,
    ) -> Result<Self> {
        Ok(Self {
            inner: ServiceClient::new(
                "CustomPages",
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
impl CustomPagesServiceClientTrait for CustomPagesServiceClient {
    async fn get_custom_pages(&self) -> Result<SimpleServiceResponse<Vec<CustomPage>>> {
        self.inner.get("GetCustomPages", "/api/custom-pages").await
    }
}
