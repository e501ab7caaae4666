//! Client for the authenticated security service. Carries no security logger.

use std::sync::Arc;

use async_trait::async_trait;

use dashboard_core::context::ClientContextProvider;
use dashboard_core::{Result, SimpleServiceResponse};

use crate::client::{ServiceClient, ServiceEndpoint};

#[async_trait]
pub trait AuthenticatedSecurityServiceClientTrait: Send + Sync {
    /// Roles the service grants the calling user.
    async fn get_user_roles(&self) -> Result<SimpleServiceResponse<Vec<String>>>;

    async fn has_access_to_account(&self, account_id: i32) -> Result<SimpleServiceResponse<bool>>;
}

pub struct AuthenticatedSecurityServiceClient {
    inner: ServiceClient,
}

impl AuthenticatedSecurityServiceClient {
    pub fn new(
        endpoint: ServiceEndpoint,
        context_provider: Arc<dyn ClientContextProvider>,
    ) -> Result<Self> {
        Ok(Self {
            inner: ServiceClient::new("Security", endpoint, context_provider, None)?,
        })
    }

    pub fn service(&self) -> &ServiceClient {
        &self.inner
    }
}

#[async_trait]
impl AuthenticatedSecurityServiceClientTrait for AuthenticatedSecurityServiceClient {
    async fn get_user_roles(&self) -> Result<SimpleServiceResponse<Vec<String>>> {
        self.inner.get("GetUserRoles", "/api/security/roles").await
    }

    async fn has_access_to_account(&self, account_id: i32) -> Result<SimpleServiceResponse<bool>> {
        self.inner
            .get(
                "HasAccessToAccount",
                &format!("/api/security/accounts/{}/access", account_id),
            )
            .await
    }
}
