//! Request context models.

use serde::{Deserialize, Serialize};

/// Identity and authorization context sent along with every service call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub user_id: i32,
    pub user_name: String,
    pub client_id: i32,
    pub location_id: i32,
    pub user_roles: Vec<String>,
}

impl RequestContext {
    pub fn has_role(&self, role: &str) -> bool {
        self.user_roles.iter().any(|r| r == role)
    }

    /// Roles joined for transport in a single header value.
    pub fn roles_header_value(&self) -> String {
        self.user_roles.join(",")
    }

    /// Server-side projection of this context.
    pub fn to_domain(&self) -> DomainRequestContext {
        DomainRequestContext::from(self)
    }
}

/// Reduced context seen by components with direct database access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DomainRequestContext {
    pub user_id: i32,
    pub user_name: String,
    pub location_id: i32,
}

impl From<&RequestContext> for DomainRequestContext {
    fn from(context: &RequestContext) -> Self {
        Self {
            user_id: context.user_id,
            user_name: context.user_name.clone(),
            location_id: context.location_id,
        }
    }
}
