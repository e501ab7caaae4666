//! Security audit logging for outgoing service calls.

mod security_logger;
mod security_traits;

#[cfg(test)]
mod security_logger_tests;

pub use security_logger::{
    GeneratedInvocationDetailsProvider, InvocationDetails, LogFacadeLogger, SecurityLogger,
};
pub use security_traits::{InvocationDetailsProvider, Logger};
