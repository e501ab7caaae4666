use std::sync::{Arc, Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::context::RequestContext;
use crate::security::{
    GeneratedInvocationDetailsProvider, InvocationDetails, InvocationDetailsProvider,
    LogFacadeLogger, Logger, SecurityLogger,
};

#[derive(Default)]
struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Logger for CapturingLogger {
    fn log(&self, level: Level, message: &str) {
        self.records
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

struct FixedInvocation;

impl InvocationDetailsProvider for FixedInvocation {
    fn invocation_details(&self) -> InvocationDetails {
        InvocationDetails::new("TEST")
    }
}

fn context() -> RequestContext {
    RequestContext {
        user_id: 9,
        user_name: "DFMFirmSuperuser".to_string(),
        client_id: 9,
        location_id: 5,
        user_roles: Vec::new(),
    }
}

#[test]
fn test_service_call_is_tagged_with_invocation_id() {
    let logger = Arc::new(CapturingLogger::default());
    let security = SecurityLogger::new(logger.clone(), Arc::new(FixedInvocation));

    security.log_service_call("AccountInvestment.SaveExcludedFromRebalance", &context());

    let records = logger.records.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, Level::Info);
    assert_eq!(
        records[0].1,
        "[TEST] AccountInvestment.SaveExcludedFromRebalance invoked by user 9 (DFMFirmSuperuser) at location 5"
    );
}

#[test]
fn test_access_denied_is_a_warning() {
    let logger = Arc::new(CapturingLogger::default());
    let security = SecurityLogger::new(logger.clone(), Arc::new(FixedInvocation));

    security.log_access_denied("Account.GetAccounts", &context(), "HTTP 403");

    let records = logger.records.lock().unwrap();
    assert_eq!(records[0].0, Level::Warn);
    assert!(records[0].1.starts_with("[TEST] Access denied to Account.GetAccounts"));
    assert!(records[0].1.ends_with("HTTP 403"));
}

#[test]
fn test_generated_invocation_ids_are_unique() {
    let provider = GeneratedInvocationDetailsProvider;
    let first = provider.invocation_details();
    let second = provider.invocation_details();
    assert_ne!(first.invocation_id, second.invocation_id);
}

/// Global `log` sink keeping records of the `security` target.
struct SecurityTargetSink {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for SecurityTargetSink {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target() == "security"
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static SINK: SecurityTargetSink = SecurityTargetSink {
    records: Mutex::new(Vec::new()),
};
static INSTALL_SINK: Once = Once::new();

#[test]
fn test_log_facade_logger_writes_security_target() {
    INSTALL_SINK.call_once(|| {
        log::set_logger(&SINK).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });

    let security = SecurityLogger::new(Arc::new(LogFacadeLogger), Arc::new(FixedInvocation));
    security.log_access_denied("Search.Search", &context(), "HTTP 401");

    let records = SINK.records.lock().unwrap();
    assert!(records.contains(&(
        Level::Warn,
        "[TEST] Access denied to Search.Search for user 9 (DFMFirmSuperuser): HTTP 401".to_string()
    )));
}
