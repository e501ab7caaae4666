//! Clients for the dashboard page services: widgets, business cards and
//! dynamic reports.

use std::sync::Arc;

use async_trait::async_trait;

use dashboard_core::context::ClientContextProvider;
use dashboard_core::security::SecurityLogger;
use dashboard_core::{Result, SimpleServiceResponse};

use crate::client::{encoded_path, ServiceClient, ServiceEndpoint};
use crate::contracts::{BusinessCard, DashboardWidget, ReportParameters, ReportResult};

#[async_trait]
pub trait DashboardClientTrait: Send + Sync {
    async fn get_widgets(&self) -> Result<SimpleServiceResponse<Vec<DashboardWidget>>>;
}

pub struct DashboardClient {
    inner: ServiceClient,
}

impl DashboardClient {
    pub fn new(
        endpoint: ServiceEndpoint,
        context_provider: Arc<dyn ClientContextProvider>,
        security_logger: SecurityLogger,
    ) -> Result<Self> {
        Ok(Self {
            inner: ServiceClient::new(
                "Dashboard",
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
impl DashboardClientTrait for DashboardClient {
    async fn get_widgets(&self) -> Result<SimpleServiceResponse<Vec<DashboardWidget>>> {
        self.inner.get("GetWidgets", "/api/dashboard/widgets").await
    }
}

#[async_trait]
pub trait FixedBusinessCardClientTrait: Send + Sync {
    /// Business card shown for a location.
    async fn get_business_card(
        &self,
        location_id: i32,
    ) -> Result<SimpleServiceResponse<BusinessCard>>;
}

pub struct FixedBusinessCardClient {
    inner: ServiceClient,
}

impl FixedBusinessCardClient {
    pub fn new(
        endpoint: ServiceEndpoint,
        context_provider: Arc<dyn ClientContextProvider>,
        security_logger: SecurityLogger,
    ) -> Result<Self> {
        Ok(Self {
            inner: ServiceClient::new(
                "FixedBusinessCard",
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
impl FixedBusinessCardClientTrait for FixedBusinessCardClient {
    async fn get_business_card(
        &self,
        location_id: i32,
    ) -> Result<SimpleServiceResponse<BusinessCard>> {
        self.inner
            .get(
                "GetBusinessCard",
                &format!("/api/business-cards/{}", location_id),
            )
            .await
    }
}

#[async_trait]
pub trait DynamicReportClientTrait: Send + Sync {
    async fn run_report(
        &self,
        report_id: &str,
        parameters: &ReportParameters,
    ) -> Result<SimpleServiceResponse<ReportResult>>;
}

pub struct DynamicReportClient {
    inner: ServiceClient,
}

impl DynamicReportClient {
    pub fn new(
        endpoint: ServiceEndpoint,
        context_provider: Arc<dyn ClientContextProvider>,
        security_logger: SecurityLogger,
    ) -> Result<Self> {
        Ok(Self {
            inner: ServiceClient::new(
                "DynamicReport",
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
impl DynamicReportClientTrait for DynamicReportClient {
    async fn run_report(
        &self,
        report_id: &str,
        parameters: &ReportParameters,
    ) -> Result<SimpleServiceResponse<ReportResult>> {
        let path = encoded_path(&["api", "reports", report_id, "run"])?;
        self.inner.post("RunReport", &path, parameters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_support::{provider, security_logger};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_run_report_posts_parameters() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/reports/holdings-by-asset/run"))
            .and(body_json(serde_json::json!({ "values": { "accountId": "10" } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "hasError": false,
                "result": { "columns": ["isin", "units"], "rows": [["GB00B3X7QG63", 120.5]] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (security, _) = security_logger();
        let client =
            DynamicReportClient::new(ServiceEndpoint::new(server.uri()), provider(), security)
                .unwrap();

        let mut parameters = ReportParameters::default();
        parameters
            .values
            .insert("accountId".to_string(), "10".to_string());

        let report = client
            .run_report("holdings-by-asset", &parameters)
            .await
            .unwrap()
            .result
            .unwrap();
        assert_eq!(report.columns, vec!["isin", "units"]);
        assert_eq!(report.rows.len(), 1);
    }
}
