//! Integration test fixture for the dashboard services.
//!
//! [`DashboardIntegrationTest`] owns a fixed request context, hands out
//! ready-to-use service clients wired to stub context providers and a stub
//! security logger, and opens the dashboard database on demand. The
//! [`data_builder`] module locates test users and accounts in that database.

pub mod data_builder;
pub mod doubles;
pub mod fixture;
pub mod logging;
pub mod outcome;
pub mod settings;

pub use fixture::DashboardIntegrationTest;
pub use outcome::{conclude, inconclusive, TestError, TestResult};
pub use settings::{TestSettings, DASHBOARD_ENTITIES};
