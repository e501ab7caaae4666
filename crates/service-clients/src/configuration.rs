use async_trait::async_trait;

use dashboard_core::Result;

/// Read access to the dashboard's remote configuration settings.
#[async_trait]
pub trait ConfigurationClient: Send + Sync {
    /// Value of `key`, or `None` when the setting is not defined.
    async fn get_setting(&self, key: &str) -> Result<Option<String>>;
}
