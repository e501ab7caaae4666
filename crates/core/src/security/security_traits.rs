use log::Level;

use super::security_logger::InvocationDetails;

/// Sink for security log records.
pub trait Logger: Send + Sync {
    fn log(&self, level: Level, message: &str);
}

/// Describes the invocation a security record belongs to.
pub trait InvocationDetailsProvider: Send + Sync {
    fn invocation_details(&self) -> InvocationDetails;
}
