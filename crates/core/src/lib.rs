//! Dashboard Core - domain entities, request context and security logging.
//!
//! This crate holds the database-agnostic and transport-agnostic part of the
//! dashboard integration harness. Storage lives in `dashboard-storage-sqlite`,
//! remote service transport in `dashboard-service-clients`.

pub mod accounts;
pub mod constants;
pub mod context;
pub mod entity;
pub mod errors;
pub mod rebalancing;
pub mod responses;
pub mod security;

pub use context::{
    ClientContextProvider, DomainRequestContext, RequestContext, RequestContextProvider,
};
pub use entity::BusinessEntity;
pub use responses::{SimpleResult, SimpleServiceResponse};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
