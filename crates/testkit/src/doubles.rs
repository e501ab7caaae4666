//! Test doubles for the capabilities the service clients and the entities
//! handle depend on.

use std::collections::HashMap;

use async_trait::async_trait;
use log::Level;

use dashboard_core::context::{
    ClientContextProvider, DomainRequestContext, RequestContext, RequestContextProvider,
};
use dashboard_core::security::{InvocationDetails, InvocationDetailsProvider, Logger};
use dashboard_core::Result;
use dashboard_service_clients::ConfigurationClient;

/// Invocation id the fixture's security logger tags records with.
pub const TEST_INVOCATION_ID: &str = "TEST";

/// Hands every client the same snapshot of a request context.
#[derive(Debug, Clone)]
pub struct StubClientContextProvider {
    context: RequestContext,
}

impl StubClientContextProvider {
    pub fn new(context: RequestContext) -> Self {
        Self { context }
    }
}

impl ClientContextProvider for StubClientContextProvider {
    fn get_client_context(&self) -> RequestContext {
        self.context.clone()
    }
}

/// Server-side provider exposing the reduced projection of a request context.
#[derive(Debug, Clone)]
pub struct StubRequestContextProvider {
    context: DomainRequestContext,
}

impl StubRequestContextProvider {
    pub fn new(context: &RequestContext) -> Self {
        Self {
            context: DomainRequestContext::from(context),
        }
    }
}

impl RequestContextProvider for StubRequestContextProvider {
    fn context(&self) -> DomainRequestContext {
        self.context.clone()
    }
}

/// Discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _level: Level, _message: &str) {}
}

#[derive(Debug, Clone)]
pub struct StubInvocationDetailsProvider {
    invocation_id: String,
}

impl StubInvocationDetailsProvider {
    pub fn new(invocation_id: impl Into<String>) -> Self {
        Self {
            invocation_id: invocation_id.into(),
        }
    }
}

impl Default for StubInvocationDetailsProvider {
    fn default() -> Self {
        Self::new(TEST_INVOCATION_ID)
    }
}

impl InvocationDetailsProvider for StubInvocationDetailsProvider {
    fn invocation_details(&self) -> InvocationDetails {
        InvocationDetails::new(self.invocation_id.clone())
    }
}

/// Configuration client that knows only the settings it was given.
#[derive(Debug, Default, Clone)]
pub struct StubConfigurationClient {
    settings: HashMap<String, String>,
}

impl StubConfigurationClient {
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }
}

#[async_trait]
impl ConfigurationClient for StubConfigurationClient {
    async fn get_setting(&self, key: &str) -> Result<Option<String>> {
        Ok(self.settings.get(key).cloned())
    }
}
