//! Client for the account investment service.

use std::sync::Arc;

use async_trait::async_trait;

use dashboard_core::context::ClientContextProvider;
use dashboard_core::rebalancing::ExcludeAssetFromRebalanceModel;
use dashboard_core::security::SecurityLogger;
use dashboard_core::{Result, SimpleResult, SimpleServiceResponse};

use crate::client::{ServiceClient, ServiceEndpoint};

#[async_trait]
pub trait AccountInvestmentClientTrait: Send + Sync {
    /// Replaces the rebalance exclusion list of an account.
    async fn save_excluded_from_rebalance(
        &self,
        account_id: i32,
        exclusion_list: &[ExcludeAssetFromRebalanceModel],
    ) -> Result<SimpleServiceResponse<SimpleResult>>;

    async fn get_excluded_from_rebalance(
        &self,
        account_id: i32,
    ) -> Result<SimpleServiceResponse<Vec<ExcludeAssetFromRebalanceModel>>>;
}

pub struct AccountInvestmentClient {
    inner: ServiceClient,
}

impl AccountInvestmentClient {
    pub fn new(
        endpoint: ServiceEndpoint,
        context_provider: Arc<dyn ClientContextProvider>,
        security_logger: SecurityLogger,
    ) -> Result<Self> {
        Ok(Self {
            inner: ServiceClient::new(
                "AccountInvestment",
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

fn exclusions_path(account_id: i32) -> String {
    format!("/api/account-investment/{}/excluded-from-rebalance", account_id)
}

#[async_trait]
impl AccountInvestmentClientTrait for AccountInvestmentClient {
    async fn save_excluded_from_rebalance(
        &self,
        account_id: i32,
        exclusion_list: &[ExcludeAssetFromRebalanceModel],
    ) -> Result<SimpleServiceResponse<SimpleResult>> {
        self.inner
            .post(
                "SaveExcludedFromRebalance",
                &exclusions_path(account_id),
                exclusion_list,
            )
            .await
    }

    async fn get_excluded_from_rebalance(
        &self,
        account_id: i32,
    ) -> Result<SimpleServiceResponse<Vec<ExcludeAssetFromRebalanceModel>>> {
        self.inner
            .get("GetExcludedFromRebalance", &exclusions_path(account_id))
            .await
    }
}
