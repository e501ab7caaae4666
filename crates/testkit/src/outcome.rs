//! Test outcomes beyond pass and fail.

use thiserror::Error;

/// Why a scenario stopped before reaching its assertions.
#[derive(Debug, Error)]
pub enum TestError {
    /// The environment lacks the data the scenario needs.
    #[error("Inconclusive: {0}")]
    Inconclusive(String),

    #[error(transparent)]
    Core(#[from] dashboard_core::Error),
}

pub type TestResult<T = ()> = std::result::Result<T, TestError>;

pub fn inconclusive<T>(reason: impl Into<String>) -> TestResult<T> {
    Err(TestError::Inconclusive(reason.into()))
}

/// Settles a scenario result for the test runner.
///
/// An inconclusive result is logged and the test passes; any other error
/// fails the test.
pub fn conclude<T>(result: TestResult<T>) {
    match result {
        Ok(_) => {}
        Err(TestError::Inconclusive(reason)) => {
            tracing::warn!("Test inconclusive: {}", reason);
        }
        Err(err) => panic!("Test could not run: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inconclusive_does_not_fail() {
        conclude(inconclusive::<()>("Could not find proper user"));
        conclude::<()>(Ok(()));
    }

    #[test]
    #[should_panic(expected = "Test could not run: Missing configuration key: DashboardEntities")]
    fn test_harness_error_fails() {
        conclude::<()>(Err(TestError::Core(dashboard_core::Error::MissingConfigKey(
            "DashboardEntities".to_string(),
        ))));
    }
}
