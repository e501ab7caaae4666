//! Client for the asset service.

use std::sync::Arc;

use async_trait::async_trait;

use dashboard_core::context::ClientContextProvider;
use dashboard_core::security::SecurityLogger;
use dashboard_core::{Result, SimpleServiceResponse};

use crate::client::{encoded_path, ServiceClient, ServiceEndpoint};
use crate::contracts::AssetDetails;

#[async_trait]
pub trait AssetClientTrait: Send + Sync {
    async fn get_asset_by_isin(&self, isin: &str) -> Result<SimpleServiceResponse<AssetDetails>>;
}

pub struct AssetClient {
    inner: ServiceClient,
}

impl AssetClient {
    pub fn new(
        endpoint: ServiceEndpoint,
        context_provider: Arc<dyn ClientContextProvider>,
        security_logger: SecurityLogger,
    ) -> Result<Self> {
        Ok(Self {
            inner: ServiceClient::new("Asset", endpoint, context_provider, Some(security_logger))?,
        })
    }

    pub fn service(&self) -> &ServiceClient {
        &self.inner
    }
}

#[async_trait]
impl AssetClientTrait for AssetClient {
    async fn get_asset_by_isin(&self, isin: &str) -> Result<SimpleServiceResponse<AssetDetails>> {
        let path = encoded_path(&["api", "assets", isin])?;
        self.inner.get("GetAssetByIsin", &path).await
    }
}
