//! SQLite storage for the dashboard integration harness.
//!
//! This crate is the only place in the workspace where Diesel dependencies
//! exist. It contains:
//! - connection pooling and embedded migrations
//! - the `DashboardEntities` handle tests use for direct database access
//! - `DashboardRepositoryBase<T>` generic read access
//! - the account/holding queries the data builders run
//!
//! ```text
//! core (domain)      testkit (fixture, data builders)
//!       │                      │
//!       └──────────┬───────────┘
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod accounts;
pub mod db;
pub mod entities;
pub mod errors;
pub mod repository;
pub mod schema;

pub use accounts::AccountsRepository;
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};
pub use entities::DashboardEntities;
pub use errors::{IntoCore, StorageError};
pub use repository::{DashboardRepositoryBase, EntityTable};

// Re-export from dashboard-core for convenience
pub use dashboard_core::errors::{DatabaseError, Error, Result};
