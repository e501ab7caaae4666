//! The base fixture every dashboard integration test builds on.

use std::cell::OnceCell;
use std::sync::Arc;

use log::debug;

use dashboard_core::constants::{dashboard_roles, login_roles, mp_roles, DEFAULT_LOCATION_ID};
use dashboard_core::context::{ClientContextProvider, RequestContext, RequestContextProvider};
use dashboard_core::security::SecurityLogger;
use dashboard_core::Result;
use dashboard_service_clients::{
    AccountClient, AccountInvestmentClient, AssetClient, AuthenticatedSecurityServiceClient,
    BreadcrumbsClient, ConfigurationClient, CustomPagesServiceClient, DashboardClient,
    DynamicReportClient, FixedBusinessCardClient, LocationClient, RedirectionClient, SearchClient,
};
use dashboard_storage_sqlite::{
    AccountsRepository, DashboardEntities, DashboardRepositoryBase, EntityTable,
};

use crate::doubles::{
    NullLogger, StubClientContextProvider, StubConfigurationClient, StubInvocationDetailsProvider,
    StubRequestContextProvider,
};
use crate::logging::init_test_logging;
use crate::settings::{TestSettings, DASHBOARD_ENTITIES};

pub const DEFAULT_USER_ID: i32 = 9;
pub const DEFAULT_USER_NAME: &str = "DFMFirmSuperuser";
pub const DEFAULT_CLIENT_ID: i32 = 9;

/// Dashboard integration test fixture.
///
/// Client accessors build a new client on every call; nothing is shared
/// between two clients except the values of `request_context` at the time
/// each was built. The entities handle is opened on first use and kept until
/// [`refresh_entities`](Self::refresh_entities).
pub struct DashboardIntegrationTest {
    /// Context sent with every client call. Tests may overwrite it.
    pub request_context: RequestContext,
    settings: TestSettings,
    default_roles: OnceCell<Vec<String>>,
    entities: Option<Arc<DashboardEntities>>,
}

impl DashboardIntegrationTest {
    /// Fixture configured from the environment, see [`TestSettings::from_env`].
    pub fn new() -> Self {
        Self::with_settings(TestSettings::from_env())
    }

    pub fn with_settings(settings: TestSettings) -> Self {
        init_test_logging();

        let mut fixture = Self {
            request_context: RequestContext::default(),
            settings,
            default_roles: OnceCell::new(),
            entities: None,
        };
        fixture.request_context = RequestContext {
            user_id: DEFAULT_USER_ID,
            user_name: DEFAULT_USER_NAME.to_string(),
            client_id: DEFAULT_CLIENT_ID,
            location_id: Self::default_location_id(),
            user_roles: fixture.default_roles().to_vec(),
        };
        fixture
    }

    pub fn default_location_id() -> i32 {
        DEFAULT_LOCATION_ID
    }

    /// Roles of the default request context, computed once per fixture.
    pub fn default_roles(&self) -> &[String] {
        self.default_roles.get_or_init(|| {
            [
                login_roles::DASHBOARD,
                login_roles::MODEL_PORTFOLIO,
                dashboard_roles::IS_PROFESSIONAL_USER,
                dashboard_roles::CAROUSEL,
                mp_roles::ACCESS_TO_MODEL_MANAGEMENT,
                mp_roles::ACCESS_TO_CLIENT_WRAPPER_MANAGEMENT,
                dashboard_roles::DASHBOARD_VIEWER,
                dashboard_roles::PROFESSIONAL_VIEWER,
                dashboard_roles::PROFESSIONAL_TRADER,
            ]
            .iter()
            .map(|role| role.to_string())
            .collect()
        })
    }

    pub fn settings(&self) -> &TestSettings {
        &self.settings
    }

    /// Entities handle for direct database access.
    ///
    /// # Errors
    ///
    /// `Error::MissingConfigKey` when the `DashboardEntities` connection string
    /// is not configured, or any error opening the database.
    pub fn entities(&mut self) -> Result<Arc<DashboardEntities>> {
        if let Some(entities) = &self.entities {
            return Ok(Arc::clone(entities));
        }

        let connection_string = self.settings.connection_string(DASHBOARD_ENTITIES)?;
        let entities = Arc::new(DashboardEntities::open(
            connection_string,
            self.server_context_provider_mock(),
        )?);
        self.entities = Some(Arc::clone(&entities));
        Ok(entities)
    }

    /// Ensures the next access to [`entities`](Self::entities) opens a fresh handle.
    pub fn refresh_entities(&mut self) {
        debug!("Dropping cached dashboard entities");
        self.entities = None;
    }

    pub fn dashboard_repository_base<T: EntityTable>(
        &mut self,
    ) -> Result<DashboardRepositoryBase<T>> {
        Ok(DashboardRepositoryBase::new(self.entities()?))
    }

    pub fn accounts_repository(&mut self) -> Result<AccountsRepository> {
        Ok(AccountsRepository::new(self.entities()?))
    }

    pub fn asset_service_client(&self) -> Result<AssetClient> {
        AssetClient::new(
            self.settings.service_endpoint(),
            self.client_context_provider_mock(),
            Self::security_logger_mock(),
        )
    }

    pub fn account_investment_client(&self) -> Result<AccountInvestmentClient> {
        AccountInvestmentClient::new(
            self.settings.service_endpoint(),
            self.client_context_provider_mock(),
            Self::security_logger_mock(),
        )
    }

    pub fn location_service_client(&self) -> Result<LocationClient> {
        LocationClient::new(
            self.settings.service_endpoint(),
            self.client_context_provider_mock(),
            Self::security_logger_mock(),
        )
    }

    pub fn search_service_client(&self) -> Result<SearchClient> {
        SearchClient::new(
            self.settings.service_endpoint(),
            self.client_context_provider_mock(),
            Self::security_logger_mock(),
        )
    }

    pub fn dashboard_service_client(&self) -> Result<DashboardClient> {
        DashboardClient::new(
            self.settings.service_endpoint(),
            self.client_context_provider_mock(),
            Self::security_logger_mock(),
        )
    }

    pub fn redirection_client(&self) -> Result<RedirectionClient> {
        RedirectionClient::new(
            self.settings.service_endpoint(),
            self.client_context_provider_mock(),
            Self::security_logger_mock(),
        )
    }

    pub fn account_client(&self) -> Result<AccountClient> {
        AccountClient::new(
            self.settings.service_endpoint(),
            self.client_context_provider_mock(),
            Self::security_logger_mock(),
        )
    }

    pub fn fixed_business_card_client(&self) -> Result<FixedBusinessCardClient> {
        FixedBusinessCardClient::new(
            self.settings.service_endpoint(),
            self.client_context_provider_mock(),
            Self::security_logger_mock(),
        )
    }

    pub fn breadcrumbs_client(&self) -> Result<BreadcrumbsClient> {
        BreadcrumbsClient::new(
            self.settings.service_endpoint(),
            self.client_context_provider_mock(),
            Self::security_logger_mock(),
        )
    }

    pub fn security_client(&self) -> Result<AuthenticatedSecurityServiceClient> {
        AuthenticatedSecurityServiceClient::new(
            self.settings.service_endpoint(),
            self.client_context_provider_mock(),
        )
    }

    pub fn custom_pages_service_client(&self) -> Result<CustomPagesServiceClient> {
        CustomPagesServiceClient::new(
            self.settings.service_endpoint(),
            self.client_context_provider_mock(),
            Self::security_logger_mock(),
        )
    }

    pub fn dynamic_report_service_client(&self) -> Result<DynamicReportClient> {
        DynamicReportClient::new(
            self.settings.service_endpoint(),
            self.client_context_provider_mock(),
            Self::security_logger_mock(),
        )
    }

    pub fn configuration_client_mock(&self) -> Arc<dyn ConfigurationClient> {
        Arc::new(StubConfigurationClient::default())
    }

    fn security_logger_mock() -> SecurityLogger {
        SecurityLogger::new(
            Arc::new(NullLogger),
            Arc::new(StubInvocationDetailsProvider::default()),
        )
    }

    fn client_context_provider_mock(&self) -> Arc<dyn ClientContextProvider> {
        Arc::new(StubClientContextProvider::new(self.request_context.clone()))
    }

    fn server_context_provider_mock(&self) -> Arc<dyn RequestContextProvider> {
        Arc::new(StubRequestContextProvider::new(&self.request_context))
    }
}

impl Default for DashboardIntegrationTest {
    fn default() -> Self {
        Self::new()
    }
}
