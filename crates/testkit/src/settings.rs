//! Settings the fixture reads: service location and named connection strings.

use std::collections::HashMap;
use std::time::Duration;

use dashboard_core::{Error, Result};
use dashboard_service_clients::{ServiceEndpoint, DEFAULT_TIMEOUT_SECS};

/// Name of the connection string for the dashboard database.
pub const DASHBOARD_ENTITIES: &str = "DashboardEntities";

const SERVICE_URL_VAR: &str = "DASHBOARD_SERVICE_URL";
const REQUEST_TIMEOUT_VAR: &str = "DASHBOARD_REQUEST_TIMEOUT_MS";
const CONNECTION_STRING_PREFIX: &str = "DASHBOARD_CONNECTION_STRING_";
const DEFAULT_SERVICE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct TestSettings {
    pub service_url: String,
    pub request_timeout: Duration,
    /// Keyed by upper-cased name
    connection_strings: HashMap<String, String>,
}

impl TestSettings {
    pub fn new(service_url: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connection_strings: HashMap::new(),
        }
    }

    /// Loads settings from the process environment and an optional `.env` file.
    ///
    /// Connection strings come from `DASHBOARD_CONNECTION_STRING_<NAME>`
    /// variables, e.g. `DASHBOARD_CONNECTION_STRING_DASHBOARDENTITIES`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    pub(crate) fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut settings = Self::new(DEFAULT_SERVICE_URL);
        for (key, value) in vars {
            if key == SERVICE_URL_VAR {
                settings.service_url = value;
            } else if key == REQUEST_TIMEOUT_VAR {
                let timeout_ms = value.parse().unwrap_or(DEFAULT_TIMEOUT_SECS * 1000);
                settings.request_timeout = Duration::from_millis(timeout_ms);
            } else if let Some(name) = key.strip_prefix(CONNECTION_STRING_PREFIX) {
                settings
                    .connection_strings
                    .insert(name.to_uppercase(), value);
            }
        }
        settings
    }

    pub fn with_connection_string(mut self, name: &str, value: impl Into<String>) -> Self {
        self.connection_strings
            .insert(name.to_uppercase(), value.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Looks up a named connection string.
    ///
    /// # Errors
    ///
    /// `Error::MissingConfigKey` when no connection string has that name.
    pub fn connection_string(&self, name: &str) -> Result<&str> {
        self.connection_strings
            .get(&name.to_uppercase())
            .map(String::as_str)
            .ok_or_else(|| Error::MissingConfigKey(name.to_string()))
    }

    pub fn service_endpoint(&self) -> ServiceEndpoint {
        ServiceEndpoint::new(self.service_url.clone()).with_timeout(self.request_timeout)
    }
}
