use crate::context::{DomainRequestContext, RequestContext};

fn sample_context() -> RequestContext {
    RequestContext {
        user_id: 9,
        user_name: "DFMFirmSuperuser".to_string(),
        client_id: 9,
        location_id: 5,
        user_roles: vec!["Dashboard".to_string(), "Professional.Trader".to_string()],
    }
}

#[test]
fn test_has_role() {
    let context = sample_context();
    assert!(context.has_role("Dashboard"));
    assert!(!context.has_role("dashboard"));
}

#[test]
fn test_roles_header_value() {
    assert_eq!(
        sample_context().roles_header_value(),
        "Dashboard,Professional.Trader"
    );
    assert_eq!(RequestContext::default().roles_header_value(), "");
}

#[test]
fn test_domain_projection_keeps_identity_and_location() {
    let domain = sample_context().to_domain();
    assert_eq!(
        domain,
        DomainRequestContext {
            user_id: 9,
            user_name: "DFMFirmSuperuser".to_string(),
            location_id: 5,
        }
    );
}

#[test]
fn test_serializes_camel_case() {
    let json = serde_json::to_value(sample_context()).unwrap();
    assert_eq!(json["userId"], 9);
    assert_eq!(json["locationId"], 5);
    assert_eq!(json["userRoles"][1], "Professional.Trader");
}
