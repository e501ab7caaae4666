//! Request context - who is calling, from where, with which roles.

mod context_model;
mod context_traits;

#[cfg(test)]
mod context_model_tests;

pub use context_model::{DomainRequestContext, RequestContext};
pub use context_traits::{ClientContextProvider, RequestContextProvider};
