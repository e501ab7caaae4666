/// Location assigned to the harness request context unless a test overrides it.
pub const DEFAULT_LOCATION_ID: i32 = 5;

/// Roles granted by the login service.
pub mod login_roles {
    pub const DASHBOARD: &str = "Dashboard";
    pub const MODEL_PORTFOLIO: &str = "ModelPortfolio";
}

/// Roles owned by the dashboard application.
pub mod dashboard_roles {
    pub const IS_PROFESSIONAL_USER: &str = "IsProfessionalUser";
    pub const CAROUSEL: &str = "Carousel";
    pub const DASHBOARD_VIEWER: &str = "Dashboard.Viewer";
    pub const PROFESSIONAL_VIEWER: &str = "Professional.Viewer";
    pub const PROFESSIONAL_TRADER: &str = "Professional.Trader";
}

/// Roles owned by the model portfolio application.
pub mod mp_roles {
    pub const ACCESS_TO_MODEL_MANAGEMENT: &str = "AccessToModelManagement";
    pub const ACCESS_TO_CLIENT_WRAPPER_MANAGEMENT: &str = "AccessToClientWrapperManagement";
}

/// Header names used to carry the request context over HTTP.
pub mod context_headers {
    pub const USER_ID: &str = "X-User-Id";
    pub const USER_NAME: &str = "X-User-Name";
    pub const CLIENT_ID: &str = "X-Client-Id";
    pub const LOCATION_ID: &str = "X-Location-Id";
    pub const USER_ROLES: &str = "X-User-Roles";
}
