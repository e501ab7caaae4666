use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::Level;
use serde::{Deserialize, Serialize};

use super::security_traits::{InvocationDetailsProvider, Logger};
use crate::context::RequestContext;

/// Correlation data attached to every security record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationDetails {
    pub invocation_id: String,
    pub started_at: DateTime<Utc>,
}

impl InvocationDetails {
    pub fn new(invocation_id: impl Into<String>) -> Self {
        Self {
            invocation_id: invocation_id.into(),
            started_at: Utc::now(),
        }
    }
}

/// Writes security audit records for service calls.
///
/// Each record is prefixed with the invocation id so calls can be correlated
/// with the remote service's own audit trail.
#[derive(Clone)]
pub struct SecurityLogger {
    logger: Arc<dyn Logger>,
    invocation_details: Arc<dyn InvocationDetailsProvider>,
}

impl SecurityLogger {
    pub fn new(
        logger: Arc<dyn Logger>,
        invocation_details: Arc<dyn InvocationDetailsProvider>,
    ) -> Self {
        Self {
            logger,
            invocation_details,
        }
    }

    /// Records that `operation` is being invoked on behalf of `context`.
    pub fn log_service_call(&self, operation: &str, context: &RequestContext) {
        let message = format!(
            "[{}] {} invoked by user {} ({}) at location {}",
            self.invocation_id(),
            operation,
            context.user_id,
            context.user_name,
            context.location_id
        );
        self.logger.log(Level::Info, &message);
    }

    /// Records that the remote service refused `operation` for `context`.
    pub fn log_access_denied(&self, operation: &str, context: &RequestContext, reason: &str) {
        let message = format!(
            "[{}] Access denied to {} for user {} ({}): {}",
            self.invocation_id(),
            operation,
            context.user_id,
            context.user_name,
            reason
        );
        self.logger.log(Level::Warn, &message);
    }

    fn invocation_id(&self) -> String {
        self.invocation_details.invocation_details().invocation_id
    }
}

/// Forwards security records to the `log` facade under the `security` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacadeLogger;

impl Logger for LogFacadeLogger {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: "security", level, "{}", message);
    }
}

/// Generates a fresh random invocation id per record.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeneratedInvocationDetailsProvider;

impl InvocationDetailsProvider for GeneratedInvocationDetailsProvider {
    fn invocation_details(&self) -> InvocationDetails {
        InvocationDetails::new(uuid::Uuid::new_v4().to_string())
    }
}
