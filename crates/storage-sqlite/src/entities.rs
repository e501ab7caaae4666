//! The entities handle: one pooled database plus the context writes are
//! attributed to.

use std::sync::Arc;

use log::info;

use dashboard_core::context::{DomainRequestContext, RequestContextProvider};
use dashboard_core::Result;

use crate::db::{self, DbConnection, DbPool};

/// Unit-of-work handle over the dashboard database.
///
/// Every handle owns its own connection pool, so a freshly opened handle never
/// observes state cached by an earlier one.
pub struct DashboardEntities {
    pool: Arc<DbPool>,
    request_context_provider: Arc<dyn RequestContextProvider>,
}

impl DashboardEntities {
    /// Opens the database behind `connection_string` and applies pending migrations.
    pub fn open(
        connection_string: &str,
        request_context_provider: Arc<dyn RequestContextProvider>,
    ) -> Result<Self> {
        db::init(connection_string)?;
        let pool = db::create_pool(connection_string)?;
        db::run_migrations(&pool)?;

        let context = request_context_provider.context();
        info!(
            "Opened dashboard entities for user {} ({}) at location {}",
            context.user_id, context.user_name, context.location_id
        );

        Ok(Self {
            pool,
            request_context_provider,
        })
    }

    pub fn connection(&self) -> Result<DbConnection> {
        db::get_connection(&self.pool)
    }

    /// Context that writes through this handle are attributed to.
    pub fn request_context(&self) -> DomainRequestContext {
        self.request_context_provider.context()
    }
}
