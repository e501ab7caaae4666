//! Shared HTTP plumbing for the dashboard service clients.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use dashboard_core::constants::context_headers;
use dashboard_core::context::{ClientContextProvider, RequestContext};
use dashboard_core::errors::{Error, Result};
use dashboard_core::security::SecurityLogger;
use dashboard_core::SimpleServiceResponse;

/// Default timeout for service requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where a dashboard service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub base_url: String,
    pub timeout: Duration,
}

impl ServiceEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Base client every typed service client delegates to.
///
/// The request context is read from the provider on every call, so a client
/// always sends whatever context its provider hands out at that moment.
pub struct ServiceClient {
    http: reqwest::Client,
    endpoint: ServiceEndpoint,
    service_name: &'static str,
    context_provider: Arc<dyn ClientContextProvider>,
    security_logger: Option<SecurityLogger>,
}

impl ServiceClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(
        service_name: &'static str,
        endpoint: ServiceEndpoint,
        context_provider: Arc<dyn ClientContextProvider>,
        security_logger: Option<SecurityLogger>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(endpoint.timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint,
            service_name,
            context_provider,
            security_logger,
        })
    }

    pub fn service_name(&self) -> &'static str {
        self.service_name
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    pub fn context_provider(&self) -> &Arc<dyn ClientContextProvider> {
        &self.context_provider
    }

    /// Context the next call will carry.
    pub fn context(&self) -> RequestContext {
        self.context_provider.get_client_context()
    }

    /// GET `path` and decode the response envelope.
    pub async fn get<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
    ) -> Result<SimpleServiceResponse<T>> {
        self.get_with_query(operation, path, &[]).await
    }

    /// GET `path` with query parameters and decode the response envelope.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<SimpleServiceResponse<T>> {
        let url = self.url(path);
        debug!("[{}] GET {}", self.service_name, url);

        let request = self.http.get(&url).query(query);
        self.send(operation, request).await
    }

    /// POST `body` as JSON to `path` and decode the response envelope.
    pub async fn post<B, T>(
        &self,
        operation: &str,
        path: &str,
        body: &B,
    ) -> Result<SimpleServiceResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("[{}] POST {}", self.service_name, url);

        let request = self.http.post(&url).json(body);
        self.send(operation, request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint.base_url, path)
    }

    fn qualified(&self, operation: &str) -> String {
        format!("{}.{}", self.service_name, operation)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> Result<SimpleServiceResponse<T>> {
        let operation = self.qualified(operation);
        let context = self.context();

        if let Some(security_logger) = &self.security_logger {
            security_logger.log_service_call(&operation, &context);
        }

        let response = request
            .headers(context_headers_for(&context)?)
            .send()
            .await
            .map_err(|e| Error::ServiceCall(format!("{} request failed: {}", operation, e)))?;

        self.parse_response(&operation, &context, response).await
    }

    /// Decodes the envelope, handling failed statuses.
    ///
    /// A failed status whose body is itself an error envelope is returned as
    /// is; any other failed status becomes a synthesized error envelope.
    async fn parse_response<T: DeserializeOwned>(
        &self,
        operation: &str,
        context: &RequestContext,
        response: reqwest::Response,
    ) -> Result<SimpleServiceResponse<T>> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            Error::ServiceCall(format!("{} failed to read response: {}", operation, e))
        })?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|e| {
                Error::ServiceCall(format!(
                    "{} returned an unreadable response: {} - {}",
                    operation,
                    e,
                    truncate(&body)
                ))
            });
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            if let Some(logger) = &self.security_logger {
                let reason = format!("HTTP {}", status);
                logger.log_access_denied(operation, context, &reason);
            }
        }
        warn!(
            "[{}] {} failed with HTTP {}",
            self.service_name, operation, status
        );

        match serde_json::from_str::<SimpleServiceResponse<T>>(&body) {
            Ok(envelope) if envelope.has_error => Ok(envelope),
            _ => Ok(SimpleServiceResponse::failure(format!(
                "HTTP {}: {}",
                status,
                truncate(&body)
            ))),
        }
    }
}

fn context_headers_for(context: &RequestContext) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let values = [
        (context_headers::USER_ID, context.user_id.to_string()),
        (context_headers::USER_NAME, context.user_name.clone()),
        (context_headers::CLIENT_ID, context.client_id.to_string()),
        (context_headers::LOCATION_ID, context.location_id.to_string()),
        (context_headers::USER_ROLES, context.roles_header_value()),
    ];
    for (name, value) in values {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| invalid_header(name, e))?;
        let value = HeaderValue::from_str(&value)
            .map_err(|e| invalid_header(name, e))?;
        headers.insert(header_name, value);
    }

    Ok(headers)
}

fn invalid_header(name: &str, err: impl std::fmt::Display) -> Error {
    Error::ServiceCall(format!("Invalid header {}: {}", name, err))
}

/// Joins `segments` into an absolute path, percent-encoding each segment so
/// `/`, `?` and `#` inside a value stay part of that segment.
pub fn encoded_path(segments: &[&str]) -> Result<String> {
    let mut url = Url::parse("http://localhost/")
        .map_err(|e| Error::Unexpected(format!("Failed to build path: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| Error::Unexpected("Failed to build path".to_string()))?
        .clear()
        .extend(segments);
    Ok(url.path().to_string())
}

fn truncate(body: &str) -> String {
    body.chars().take(200).collect()
}


#[cfg(test)]
mod tests {
    use super::test_support::{provider, security_logger};
    use super::*;
    use dashboard_core::SimpleResult;
    use wiremock::matchers::{header, headers, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, logger: Option<SecurityLogger>) -> ServiceClient {
        ServiceClient::new("Test", ServiceEndpoint::new(server.uri()), provider(), logger).unwrap()
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let endpoint = ServiceEndpoint::new("http://localhost:8080/");
        assert_eq!(endpoint.base_url, "http://localhost:8080");
        assert_eq!(endpoint.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_encoded_path_escapes_each_segment() {
        assert_eq!(
            encoded_path(&["api", "assets", "GB00B3X7QG63"]).unwrap(),
            "/api/assets/GB00B3X7QG63"
        );
        assert_eq!(
            encoded_path(&["api", "reports", "a/b?c#d", "run"]).unwrap(),
            "/api/reports/a%2Fb%3Fc%23d/run"
        );
    }

    #[tokio::test]
    async fn test_context_travels_in_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("X-User-Id", "9"))
            .and(header("X-User-Name", "DFMFirmSuperuser"))
            .and(header("X-Client-Id", "9"))
            .and(header("X-Location-Id", "5"))
            .and(headers(
                "X-User-Roles",
                vec!["Dashboard", "Professional.Trader"],
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "hasError": false,
                "result": { "success": true }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response: SimpleServiceResponse<SimpleResult> =
            client(&server, None).get("Ping", "/ping").await.unwrap();

        assert!(!response.has_error);
        assert_eq!(response.result.map(|r| r.success), Some(true));
    }

    #[tokio::test]
    async fn test_query_parameters_are_encoded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("term", "global equity"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "hasError": false,
                "result": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response: SimpleServiceResponse<Vec<String>> = client(&server, None)
            .get_with_query("Search", "/search", &[("term", "global equity")])
            .await
            .unwrap();

        assert_eq!(response.result, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_forbidden_is_logged_and_returned_as_error_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/secret"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
            .mount(&server)
            .await;

        let (security, logger) = security_logger();
        let response: SimpleServiceResponse<SimpleResult> = client(&server, Some(security))
            .get("Secret", "/secret")
            .await
            .unwrap();

        assert!(response.has_error);
        assert_eq!(
            response.error_message.as_deref(),
            Some("HTTP 403 Forbidden: Forbidden")
        );

        let records = logger.records.lock().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].0, log::Level::Info);
        assert!(records[0].1.starts_with("[TEST] Test.Secret invoked by user 9"));
        assert_eq!(records[1].0, log::Level::Warn);
        assert!(records[1].1.starts_with("[TEST] Access denied to Test.Secret"));
    }

    #[tokio::test]
    async fn test_error_envelope_on_failed_status_is_preserved() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/save"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "hasError": true,
                "errorMessage": "Account is locked"
            })))
            .mount(&server)
            .await;

        let response: SimpleServiceResponse<SimpleResult> = client(&server, None)
            .post("Save", "/save", &serde_json::json!({}))
            .await
            .unwrap();

        assert!(response.has_error);
        assert_eq!(response.error_message.as_deref(), Some("Account is locked"));
    }

    #[tokio::test]
    async fn test_unreadable_success_body_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let result: Result<SimpleServiceResponse<SimpleResult>> =
            client(&server, None).get("Broken", "/broken").await;

        assert!(matches!(result, Err(Error::ServiceCall(_))));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_error() {
        let client = ServiceClient::new(
            "Test",
            ServiceEndpoint::new("http://127.0.0.1:9").with_timeout(Duration::from_secs(2)),
            provider(),
            None,
        )
        .unwrap();

        let result: Result<SimpleServiceResponse<SimpleResult>> = client.get("Ping", "/ping").await;

        assert!(matches!(result, Err(Error::ServiceCall(_))));
    }
}
