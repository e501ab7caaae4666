//! Capabilities that hand the current request context to its consumers.

use super::context_model::{DomainRequestContext, RequestContext};

/// Supplies the context a service client attaches to outgoing calls.
pub trait ClientContextProvider: Send + Sync {
    fn get_client_context(&self) -> RequestContext;
}

/// Supplies the context seen by server-side components such as the
/// entities handle.
pub trait RequestContextProvider: Send + Sync {
    fn context(&self) -> DomainRequestContext;
}
