//! Typed HTTP clients for the dashboard services.
//!
//! Every client wraps a [`ServiceClient`], which attaches the caller's
//! request context as headers, reports the call to the security logger and
//! decodes the `SimpleServiceResponse` envelope.

pub mod account_investment;
pub mod accounts;
pub mod assets;
pub mod client;
pub mod configuration;
pub mod contracts;
pub mod dashboard;
pub mod navigation;
pub mod search;
pub mod security;

pub use account_investment::{AccountInvestmentClient, AccountInvestmentClientTrait};
pub use accounts::{AccountClient, AccountClientTrait};
pub use assets::{AssetClient, AssetClientTrait};
pub use client::{ServiceClient, ServiceEndpoint, DEFAULT_TIMEOUT_SECS};
pub use configuration::ConfigurationClient;
pub use dashboard::{
    DashboardClient, DashboardClientTrait, DynamicReportClient, DynamicReportClientTrait,
    FixedBusinessCardClient, FixedBusinessCardClientTrait,
};
pub use navigation::{
    BreadcrumbsClient, BreadcrumbsClientTrait, CustomPagesServiceClient,
    CustomPagesServiceClientTrait, RedirectionClient, RedirectionClientTrait,
};
pub use search::{LocationClient, LocationClientTrait, SearchClient, SearchClientTrait};
pub use security::{AuthenticatedSecurityServiceClient, AuthenticatedSecurityServiceClientTrait};
