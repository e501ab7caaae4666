//! Response envelopes returned by the dashboard services.

use serde::{Deserialize, Serialize};

/// Envelope every dashboard service wraps its result in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleServiceResponse<T> {
    #[serde(default)]
    pub has_error: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    pub result: Option<T>,
}

impl<T> SimpleServiceResponse<T> {
    pub fn success(result: T) -> Self {
        Self {
            has_error: false,
            error_message: None,
            result: Some(result),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            has_error: true,
            error_message: Some(message.into()),
            result: None,
        }
    }
}

/// Result payload of operations that only report success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SimpleResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
