//! Client for the account service.

use std::sync::Arc;

use async_trait::async_trait;

use dashboard_core::context::ClientContextProvider;
use dashboard_core::security::SecurityLogger;
use dashboard_core::{Result, SimpleServiceResponse};

use crate::client::{ServiceClient, ServiceEndpoint};
use crate::contracts::AccountSummary;

#[async_trait]
pub trait AccountClientTrait: Send + Sync {
    /// Accounts visible to the calling user.
    async fn get_accounts(&self) -> Result<SimpleServiceResponse<Vec<AccountSummary>>>;

    async fn get_account(&self, account_id: i32) -> Result<SimpleServiceResponse<AccountSummary>>;
}

pub struct AccountClient {
    inner: ServiceClient,
}

impl AccountClient {
    pub fn new(
        endpoint: ServiceEndpoint,
        context_provider: Arc<dyn ClientContextProvider>,
        security_logger: SecurityLogger,
    ) -> Result<Self> {
        Ok(Self {
            inner: ServiceClient::new(
                "Account",
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
impl AccountClientTrait for AccountClient {
    async fn get_accounts(&self) -> Result<SimpleServiceResponse<Vec<AccountSummary>>> {
        self.inner.get("GetAccounts", "/api/accounts").await
    }

    async fn get_account(&self, account_id: i32) -> Result<SimpleServiceResponse<AccountSummary>> {
        self.inner
            .get("GetAccount", &format!("/api/accounts/{}", account_id))
            .await
    }
}
